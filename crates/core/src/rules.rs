use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StatType {
    Hp,
    Atk,
    Def,
    Cri,
    Hit,
    Spd,
    Drr,
    Cdmg,
    ArmorPenetration,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ModifierOp {
    Add,
    Percentage,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatModifier {
    pub stat: StatType,
    pub op: ModifierOp,
    pub value: i64,
}

impl StatModifier {
    pub fn apply(&self, base: i64) -> i64 {
        match self.op {
            ModifierOp::Add => base + self.value,
            ModifierOp::Percentage => base + base * self.value / 100,
        }
    }
}

/// Applies every modifier for `stat`, additive ones before percentages.
pub fn apply_modifiers(stat: StatType, base: i64, modifiers: &[StatModifier]) -> i64 {
    let relevant = modifiers.iter().filter(|m| m.stat == stat);
    let added = relevant
        .clone()
        .filter(|m| m.op == ModifierOp::Add)
        .fold(base, |acc, m| m.apply(acc));
    let percent: i64 = relevant
        .filter(|m| m.op == ModifierOp::Percentage)
        .map(|m| m.value)
        .sum();
    added + added * percent / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn additive_then_percentage() {
        let modifiers = [
            StatModifier {
                stat: StatType::Atk,
                op: ModifierOp::Percentage,
                value: 10,
            },
            StatModifier {
                stat: StatType::Atk,
                op: ModifierOp::Add,
                value: 100,
            },
            StatModifier {
                stat: StatType::Hp,
                op: ModifierOp::Add,
                value: 999,
            },
        ];
        assert_eq!(apply_modifiers(StatType::Atk, 900, &modifiers), 1100);
        assert_eq!(apply_modifiers(StatType::Def, 50, &modifiers), 50);
    }
}

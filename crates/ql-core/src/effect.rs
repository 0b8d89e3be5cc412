use serde::{Deserialize, Serialize};

use crate::stats::StatBlock;

/// A lingering effect: Poison or Burn drain HP/MP each turn, buffs such as
/// an Attack Tonic add a stat bonus while they last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    /// Display name.
    pub name: String,
    /// Turns remaining.
    pub duration: u32,
    /// HP lost per turn.
    pub hp_drain: i32,
    /// MP lost per turn.
    pub mp_drain: i32,
    /// Added to the bearer's effective stats while active.
    #[serde(default)]
    pub bonus: StatBlock,
}

impl StatusEffect {
    /// Create an effect with no drain.
    pub fn new(name: impl Into<String>, duration: u32) -> Self {
        Self {
            name: name.into(),
            duration,
            hp_drain: 0,
            mp_drain: 0,
            bonus: StatBlock::zero(),
        }
    }

    /// Set the HP drain per turn.
    pub fn with_hp_drain(mut self, drain: i32) -> Self {
        self.hp_drain = drain;
        self
    }

    /// Set the MP drain per turn.
    pub fn with_mp_drain(mut self, drain: i32) -> Self {
        self.mp_drain = drain;
        self
    }

    /// Set the stat bonus granted while active.
    pub fn with_bonus(mut self, bonus: StatBlock) -> Self {
        self.bonus = bonus;
        self
    }

    /// Count down one turn. Returns true once the effect has expired.
    pub fn tick(&mut self) -> bool {
        self.duration = self.duration.saturating_sub(1);
        self.duration == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_expires_at_zero() {
        let mut burn = StatusEffect::new("Burning", 2).with_hp_drain(2);
        assert!(!burn.tick());
        assert!(burn.tick());
        assert!(burn.tick());
        assert_eq!(burn.duration, 0);
    }

    #[test]
    fn old_saves_default_to_no_bonus() {
        let json = r#"{"name": "Poison", "duration": 3, "hp_drain": 4, "mp_drain": 0}"#;
        let poison: StatusEffect = serde_json::from_str(json).unwrap();
        assert!(poison.bonus.is_zero());
    }
}

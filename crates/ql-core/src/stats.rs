//! Fixed-field stat blocks.
//!
//! A [`StatBlock`] is used for base stats, gear bonuses, and per-level
//! growth alike. Maxima are never stored: they are derived by summing the
//! base block with the bonuses of equipped gear.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the six named attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    /// Hit points.
    Hp,
    /// Mana points.
    Mp,
    /// Offensive power.
    Attack,
    /// Flat damage reduction.
    Defense,
    /// Turn speed.
    Speed,
    /// Luck.
    Luck,
}

impl Stat {
    /// All stats in display order.
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Mp,
        Stat::Attack,
        Stat::Defense,
        Stat::Speed,
        Stat::Luck,
    ];
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hp => write!(f, "HP"),
            Self::Mp => write!(f, "MP"),
            Self::Attack => write!(f, "Attack"),
            Self::Defense => write!(f, "Defense"),
            Self::Speed => write!(f, "Speed"),
            Self::Luck => write!(f, "Luck"),
        }
    }
}

impl FromStr for Stat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hp" => Ok(Self::Hp),
            "mp" => Ok(Self::Mp),
            "attack" | "atk" => Ok(Self::Attack),
            "defense" | "def" => Ok(Self::Defense),
            "speed" | "spd" => Ok(Self::Speed),
            "luck" => Ok(Self::Luck),
            other => Err(format!("unknown stat: {other}")),
        }
    }
}

/// Named numeric attributes. Signed so gear can carry penalties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    /// Hit points.
    pub hp: i32,
    /// Mana points.
    pub mp: i32,
    /// Offensive power.
    pub attack: i32,
    /// Flat damage reduction.
    pub defense: i32,
    /// Turn speed.
    pub speed: i32,
    /// Luck.
    pub luck: i32,
}

impl StatBlock {
    /// The block every new character starts with.
    pub const STARTING: StatBlock = StatBlock {
        hp: 100,
        mp: 30,
        attack: 10,
        defense: 8,
        speed: 5,
        luck: 3,
    };

    /// Growth applied to base stats on each level-up.
    pub const LEVEL_UP: StatBlock = StatBlock {
        hp: 10,
        mp: 5,
        attack: 2,
        defense: 2,
        speed: 1,
        luck: 1,
    };

    /// A block with every stat at zero.
    pub fn zero() -> Self {
        Self::default()
    }

    /// A block with a single non-zero stat.
    pub fn only(stat: Stat, value: i32) -> Self {
        let mut block = Self::zero();
        block.set(stat, value);
        block
    }

    /// Read a stat by key.
    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Mp => self.mp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::Speed => self.speed,
            Stat::Luck => self.luck,
        }
    }

    /// Overwrite a stat by key.
    pub fn set(&mut self, stat: Stat, value: i32) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Mp => self.mp = value,
            Stat::Attack => self.attack = value,
            Stat::Defense => self.defense = value,
            Stat::Speed => self.speed = value,
            Stat::Luck => self.luck = value,
        }
    }

    /// Returns true if every stat is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Add for StatBlock {
    type Output = StatBlock;

    fn add(self, rhs: StatBlock) -> StatBlock {
        StatBlock {
            hp: self.hp.saturating_add(rhs.hp),
            mp: self.mp.saturating_add(rhs.mp),
            attack: self.attack.saturating_add(rhs.attack),
            defense: self.defense.saturating_add(rhs.defense),
            speed: self.speed.saturating_add(rhs.speed),
            luck: self.luck.saturating_add(rhs.luck),
        }
    }
}

impl AddAssign for StatBlock {
    fn add_assign(&mut self, rhs: StatBlock) {
        *self = *self + rhs;
    }
}

impl Sum for StatBlock {
    fn sum<I: Iterator<Item = StatBlock>>(iter: I) -> Self {
        iter.fold(StatBlock::zero(), Add::add)
    }
}

impl fmt::Display for StatBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Stat::ALL
            .iter()
            .filter(|s| self.get(**s) != 0)
            .map(|s| format!("{s} {:+}", self.get(*s)))
            .collect();
        if parts.is_empty() {
            write!(f, "-")
        } else {
            write!(f, "{}", parts.join(", "))
        }
    }
}

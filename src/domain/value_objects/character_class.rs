//! Playable classes and their specializations

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A playable class, as offered in the identity step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    DeathKnight,
    DemonHunter,
    Druid,
    Evoker,
    Hunter,
    Mage,
    Monk,
    Paladin,
    Priest,
    Rogue,
    Shaman,
    Warlock,
    Warrior,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 13] = [
        CharacterClass::DeathKnight,
        CharacterClass::DemonHunter,
        CharacterClass::Druid,
        CharacterClass::Evoker,
        CharacterClass::Hunter,
        CharacterClass::Mage,
        CharacterClass::Monk,
        CharacterClass::Paladin,
        CharacterClass::Priest,
        CharacterClass::Rogue,
        CharacterClass::Shaman,
        CharacterClass::Warlock,
        CharacterClass::Warrior,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CharacterClass::DeathKnight => "Death Knight",
            CharacterClass::DemonHunter => "Demon Hunter",
            CharacterClass::Druid => "Druid",
            CharacterClass::Evoker => "Evoker",
            CharacterClass::Hunter => "Hunter",
            CharacterClass::Mage => "Mage",
            CharacterClass::Monk => "Monk",
            CharacterClass::Paladin => "Paladin",
            CharacterClass::Priest => "Priest",
            CharacterClass::Rogue => "Rogue",
            CharacterClass::Shaman => "Shaman",
            CharacterClass::Warlock => "Warlock",
            CharacterClass::Warrior => "Warrior",
        }
    }

    /// Specializations available to this class
    pub fn specializations(&self) -> &'static [&'static str] {
        match self {
            CharacterClass::DeathKnight => &["Blood", "Frost", "Unholy"],
            CharacterClass::DemonHunter => &["Havoc", "Vengeance"],
            CharacterClass::Druid => &["Balance", "Feral", "Guardian", "Restoration"],
            CharacterClass::Evoker => &["Devastation", "Preservation", "Augmentation"],
            CharacterClass::Hunter => &["Beast Mastery", "Marksmanship", "Survival"],
            CharacterClass::Mage => &["Arcane", "Fire", "Frost"],
            CharacterClass::Monk => &["Brewmaster", "Mistweaver", "Windwalker"],
            CharacterClass::Paladin => &["Holy", "Protection", "Retribution"],
            CharacterClass::Priest => &["Discipline", "Holy", "Shadow"],
            CharacterClass::Rogue => &["Assassination", "Outlaw", "Subtlety"],
            CharacterClass::Shaman => &["Elemental", "Enhancement", "Restoration"],
            CharacterClass::Warlock => &["Affliction", "Demonology", "Destruction"],
            CharacterClass::Warrior => &["Arms", "Fury", "Protection"],
        }
    }

    pub fn has_specialization(&self, spec: &str) -> bool {
        self.specializations().contains(&spec)
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown class: {0}")]
pub struct UnknownClass(pub String);

impl FromStr for CharacterClass {
    type Err = UnknownClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharacterClass::ALL
            .into_iter()
            .find(|class| class.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownClass(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_class_label() {
        assert_eq!("Death Knight".parse::<CharacterClass>(), Ok(CharacterClass::DeathKnight));
        assert_eq!(" paladin ".parse::<CharacterClass>(), Ok(CharacterClass::Paladin));
        assert!("Bard".parse::<CharacterClass>().is_err());
    }

    #[test]
    fn test_specializations() {
        assert_eq!(CharacterClass::DemonHunter.specializations().len(), 2);
        assert_eq!(CharacterClass::Druid.specializations().len(), 4);
        assert!(CharacterClass::Priest.has_specialization("Holy"));
        assert!(!CharacterClass::Priest.has_specialization("Fire"));
    }
}

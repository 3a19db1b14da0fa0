//! Recruitment paths - the activities a prospect can rank by interest

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// One of the five recruitment interests offered on the selection step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathKind {
    /// AOTC and Cutting Edge racing
    Vanguard,
    /// Steady normal to heroic progression
    Steadfast,
    /// Mythic+ keystones and delves
    Dungeoneer,
    /// Arenas and battlegrounds
    Gladiator,
    /// Housing, events, community
    Fellowship,
}

impl PathKind {
    /// All paths in the order they are presented
    pub const ALL: [PathKind; 5] = [
        PathKind::Vanguard,
        PathKind::Steadfast,
        PathKind::Dungeoneer,
        PathKind::Gladiator,
        PathKind::Fellowship,
    ];

    /// Label used in the activity priority listing sent to officers
    pub fn display_name(&self) -> &'static str {
        match self {
            PathKind::Vanguard => "AOTC Racing (The Vanguard)",
            PathKind::Steadfast => "Steady Progression (The Steadfast)",
            PathKind::Dungeoneer => "M+ & Delves (The Dungeoneer)",
            PathKind::Gladiator => "PvP (The Gladiator)",
            PathKind::Fellowship => "Social/Fellowship",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            PathKind::Vanguard => 0,
            PathKind::Steadfast => 1,
            PathKind::Dungeoneer => 2,
            PathKind::Gladiator => 3,
            PathKind::Fellowship => 4,
        }
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Priority a prospect gave a path. Rank 1 is the most wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PathRank {
    #[default]
    Unranked,
    Ranked(NonZeroU32),
}

impl PathRank {
    /// Build a rank from its numeric form, where 0 means unranked
    pub fn from_number(n: u32) -> Self {
        NonZeroU32::new(n).map_or(PathRank::Unranked, PathRank::Ranked)
    }

    pub fn is_ranked(&self) -> bool {
        matches!(self, PathRank::Ranked(_))
    }

    pub fn value(&self) -> Option<u32> {
        match self {
            PathRank::Unranked => None,
            PathRank::Ranked(n) => Some(n.get()),
        }
    }
}

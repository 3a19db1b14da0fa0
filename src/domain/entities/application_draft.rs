//! Application draft entity - the prospect's answers while the wizard is open
//!
//! A draft is created empty when the wizard starts, mutated step by step, and
//! turned into a [`SubmissionPayload`] once at submit time. It is never stored.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    CharacterClass, PathKind, PathRank, SubmissionPayload, SUBJECT_KEY,
};

/// Identity fields that must be filled before leaving the identity step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentityField {
    CharacterName,
    BattleTag,
    Class,
    PrimarySpec,
    DiscordHandle,
}

impl IdentityField {
    pub fn label(&self) -> &'static str {
        match self {
            IdentityField::CharacterName => "Character Name",
            IdentityField::BattleTag => "Battle.net Tag",
            IdentityField::Class => "Class",
            IdentityField::PrimarySpec => "Primary Spec",
            IdentityField::DiscordHandle => "Discord Username",
        }
    }
}

impl std::fmt::Display for IdentityField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Choose a class before picking a specialization")]
    NoClassSelected,
    #[error("{class} has no {spec} specialization")]
    UnknownSpecialization { class: CharacterClass, spec: String },
    #[error("Secondary specialization must differ from the primary one")]
    DuplicateSpecialization,
}

/// Mutable answers collected across the wizard steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDraft {
    path_ranks: [PathRank; 5],
    character_name: String,
    battle_tag: String,
    class: Option<CharacterClass>,
    primary_spec: Option<String>,
    secondary_spec: Option<String>,
    discord_handle: String,
    faith_statement: String,
}

impl ApplicationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Path selection
    // ------------------------------------------------------------------

    pub fn rank_of(&self, kind: PathKind) -> PathRank {
        self.path_ranks[kind.index()]
    }

    /// Rank an unranked path, or unrank a ranked one
    ///
    /// A newly ranked path goes after every ranked one. While no path has been
    /// unranked that is `ranked count + 1`. Unranking leaves the other ranks
    /// untouched, so gaps can appear but ranks never repeat. Returns the new rank.
    pub fn toggle_path(&mut self, kind: PathKind) -> PathRank {
        let next = if self.rank_of(kind).is_ranked() {
            PathRank::Unranked
        } else {
            let highest = self
                .path_ranks
                .iter()
                .filter_map(PathRank::value)
                .max()
                .unwrap_or(0);
            PathRank::from_number(highest + 1)
        };
        self.path_ranks[kind.index()] = next;
        next
    }

    pub fn has_ranked_path(&self) -> bool {
        self.path_ranks.iter().any(PathRank::is_ranked)
    }

    /// Ranked paths ordered from highest to lowest priority
    pub fn ranked_paths(&self) -> Vec<(u32, PathKind)> {
        let mut ranked: Vec<(u32, PathKind)> = PathKind::ALL
            .iter()
            .filter_map(|kind| self.rank_of(*kind).value().map(|rank| (rank, *kind)))
            .collect();
        ranked.sort_by_key(|(rank, _)| *rank);
        ranked
    }

    // ------------------------------------------------------------------
    // Identity
    // ------------------------------------------------------------------

    pub fn character_name(&self) -> &str {
        &self.character_name
    }

    pub fn set_character_name(&mut self, name: impl Into<String>) {
        self.character_name = name.into();
    }

    pub fn battle_tag(&self) -> &str {
        &self.battle_tag
    }

    pub fn set_battle_tag(&mut self, tag: impl Into<String>) {
        self.battle_tag = tag.into();
    }

    pub fn discord_handle(&self) -> &str {
        &self.discord_handle
    }

    pub fn set_discord_handle(&mut self, handle: impl Into<String>) {
        self.discord_handle = handle.into();
    }

    pub fn class(&self) -> Option<CharacterClass> {
        self.class
    }

    /// Change class. Both specializations are cleared, even for the same class.
    pub fn set_class(&mut self, class: Option<CharacterClass>) {
        self.class = class;
        self.primary_spec = None;
        self.secondary_spec = None;
    }

    pub fn primary_spec(&self) -> Option<&str> {
        self.primary_spec.as_deref()
    }

    pub fn secondary_spec(&self) -> Option<&str> {
        self.secondary_spec.as_deref()
    }

    pub fn set_primary_spec(&mut self, spec: &str) -> Result<(), DraftError> {
        let class = self.class.ok_or(DraftError::NoClassSelected)?;
        let spec = Self::lookup_spec(class, spec)?;
        if self.secondary_spec.as_deref() == Some(spec) {
            self.secondary_spec = None;
        }
        self.primary_spec = Some(spec.to_string());
        Ok(())
    }

    /// Set or clear the optional secondary specialization
    pub fn set_secondary_spec(&mut self, spec: Option<&str>) -> Result<(), DraftError> {
        let Some(spec) = spec else {
            self.secondary_spec = None;
            return Ok(());
        };
        let class = self.class.ok_or(DraftError::NoClassSelected)?;
        let spec = Self::lookup_spec(class, spec)?;
        if self.primary_spec.as_deref() == Some(spec) {
            return Err(DraftError::DuplicateSpecialization);
        }
        self.secondary_spec = Some(spec.to_string());
        Ok(())
    }

    /// Primary specializations offered for the current class
    pub fn primary_spec_options(&self) -> Vec<&'static str> {
        self.class
            .map(|class| class.specializations().to_vec())
            .unwrap_or_default()
    }

    /// Secondary specializations offered, which never include the primary
    pub fn secondary_spec_options(&self) -> Vec<&'static str> {
        self.primary_spec_options()
            .into_iter()
            .filter(|spec| self.primary_spec.as_deref() != Some(*spec))
            .collect()
    }

    fn lookup_spec(class: CharacterClass, spec: &str) -> Result<&str, DraftError> {
        let trimmed = spec.trim();
        if class.has_specialization(trimmed) {
            Ok(trimmed)
        } else {
            Err(DraftError::UnknownSpecialization {
                class,
                spec: spec.to_string(),
            })
        }
    }

    /// Required identity fields that are still blank
    pub fn missing_identity_fields(&self) -> Vec<IdentityField> {
        let mut missing = Vec::new();
        if self.character_name.trim().is_empty() {
            missing.push(IdentityField::CharacterName);
        }
        if self.battle_tag.trim().is_empty() {
            missing.push(IdentityField::BattleTag);
        }
        if self.class.is_none() {
            missing.push(IdentityField::Class);
        }
        if self.primary_spec.is_none() {
            missing.push(IdentityField::PrimarySpec);
        }
        if self.discord_handle.trim().is_empty() {
            missing.push(IdentityField::DiscordHandle);
        }
        missing
    }

    pub fn identity_complete(&self) -> bool {
        self.missing_identity_fields().is_empty()
    }

    // ------------------------------------------------------------------
    // Narrative
    // ------------------------------------------------------------------

    pub fn faith_statement(&self) -> &str {
        &self.faith_statement
    }

    pub fn set_faith_statement(&mut self, statement: impl Into<String>) {
        self.faith_statement = statement.into();
    }

    pub fn narrative_complete(&self) -> bool {
        !self.faith_statement.trim().is_empty()
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Newline-joined `#<rank> <display name>` listing in rank order
    pub fn activity_priorities(&self) -> String {
        let ranked = self.ranked_paths();
        if ranked.is_empty() {
            return "No activities selected".to_string();
        }
        ranked
            .iter()
            .map(|(rank, kind)| format!("#{} {}", rank, kind.display_name()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Flatten the draft into the record sent to the relay
    pub fn to_payload(&self) -> SubmissionPayload {
        SubmissionPayload::new()
            .with_field(SUBJECT_KEY, format!("New Application: {}", self.character_name))
            .with_field("Character Name", self.character_name.as_str())
            .with_field("Battle.net Tag", self.battle_tag.as_str())
            .with_field(
                "Class",
                self.class.map(|c| c.label()).unwrap_or_default(),
            )
            .with_field("Primary Spec", self.primary_spec.clone().unwrap_or_default())
            .with_field(
                "Secondary Spec",
                self.secondary_spec.clone().unwrap_or_else(|| "None".to_string()),
            )
            .with_field("Discord Username", self.discord_handle.as_str())
            .with_field("Activity Priorities", self.activity_priorities())
            .with_field("Faith Statement", self.faith_statement.as_str())
    }
}

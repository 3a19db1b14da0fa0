//! Steps of the recruitment wizard

use serde::{Deserialize, Serialize};

/// Where the prospect currently is in the application flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Intro,
    /// Ranking recruitment paths
    Selection,
    /// Character name, tag, class, specs, chat handle
    Identity,
    /// Free-text statement and the submit action
    Narrative,
    /// Application delivered
    Complete,
}

impl WizardStep {
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Intro => Some(WizardStep::Selection),
            WizardStep::Selection => Some(WizardStep::Identity),
            WizardStep::Identity => Some(WizardStep::Narrative),
            WizardStep::Narrative => Some(WizardStep::Complete),
            WizardStep::Complete => None,
        }
    }

    /// Predecessor for the back action. Complete has none: it only restarts.
    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Intro | WizardStep::Complete => None,
            WizardStep::Selection => Some(WizardStep::Intro),
            WizardStep::Identity => Some(WizardStep::Selection),
            WizardStep::Narrative => Some(WizardStep::Identity),
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WizardStep::Intro => "intro",
            WizardStep::Selection => "selection",
            WizardStep::Identity => "identity",
            WizardStep::Narrative => "narrative",
            WizardStep::Complete => "complete",
        };
        write!(f, "{}", name)
    }
}

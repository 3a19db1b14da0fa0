//! Recruitment Wizard - The multi-step application flow
//!
//! The wizard owns the [`ApplicationDraft`] for one session and moves through
//! `intro -> selection -> identity -> narrative -> complete`. Each forward move
//! is guarded by the draft's validation; nothing reaches the network until the
//! narrative step's submit action, which issues exactly one relay call.

use tracing::{debug, info, instrument, warn};

use crate::application::ports::outbound::{RelayPort, RelayReceipt, RelaySubmitError};
use crate::domain::entities::{ApplicationDraft, IdentityField};
use crate::domain::value_objects::{SubmissionPayload, WizardStep};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("Rank at least one path before continuing")]
    NoPathRanked,
    #[error("Missing required fields: {}", join_labels(.0))]
    IdentityIncomplete(Vec<IdentityField>),
    #[error("The statement cannot be empty")]
    NarrativeEmpty,
    #[error("An application is already being sent")]
    AlreadySubmitting,
    #[error("Cannot {action} from the {step} step")]
    InvalidTransition { step: WizardStep, action: &'static str },
    #[error("Failed to send application: {0}")]
    Submission(String),
}

fn join_labels(fields: &[IdentityField]) -> String {
    fields
        .iter()
        .map(IdentityField::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// State machine driving one application session
pub struct RecruitmentWizard<R: RelayPort> {
    relay: R,
    step: WizardStep,
    draft: ApplicationDraft,
    submitting: bool,
    /// Cosmetic flag for the intro animation, reset when returning to intro
    entered: bool,
    last_error: Option<String>,
    receipt: Option<RelayReceipt>,
}

impl<R: RelayPort> RecruitmentWizard<R> {
    pub fn new(relay: R) -> Self {
        Self {
            relay,
            step: WizardStep::Intro,
            draft: ApplicationDraft::new(),
            submitting: false,
            entered: false,
            last_error: None,
            receipt: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    /// Mutable access for field edits; edits never change the step
    pub fn draft_mut(&mut self) -> &mut ApplicationDraft {
        &mut self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn has_entered(&self) -> bool {
        self.entered
    }

    /// Message from the last failed submission, cleared on the next attempt
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Relay answer for the delivered application, set on completion
    pub fn receipt(&self) -> Option<&RelayReceipt> {
        self.receipt.as_ref()
    }

    /// Whether the forward action is currently enabled
    pub fn can_advance(&self) -> bool {
        self.check_advance().is_ok()
    }

    pub fn can_submit(&self) -> bool {
        self.step == WizardStep::Narrative && !self.submitting && self.draft.narrative_complete()
    }

    /// Leave the intro screen
    pub fn enter(&mut self) -> Result<WizardStep, WizardError> {
        if self.step != WizardStep::Intro {
            return Err(self.invalid_transition("enter"));
        }
        let step = self.advance()?;
        self.entered = true;
        Ok(step)
    }

    fn check_advance(&self) -> Result<WizardStep, WizardError> {
        match self.step {
            WizardStep::Selection if !self.draft.has_ranked_path() => {
                return Err(WizardError::NoPathRanked)
            }
            WizardStep::Identity => {
                let missing = self.draft.missing_identity_fields();
                if !missing.is_empty() {
                    return Err(WizardError::IdentityIncomplete(missing));
                }
            }
            // Leaving the narrative step is the submit action
            WizardStep::Narrative | WizardStep::Complete => {
                return Err(self.invalid_transition("advance"))
            }
            WizardStep::Intro | WizardStep::Selection => {}
        }
        self.step.next().ok_or_else(|| self.invalid_transition("advance"))
    }

    fn invalid_transition(&self, action: &'static str) -> WizardError {
        WizardError::InvalidTransition {
            step: self.step,
            action,
        }
    }

    /// Move forward one step if the current step's guard passes
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        let next = self.check_advance()?;
        debug!(from = %self.step, to = %next, "Wizard advanced");
        self.step = next;
        Ok(next)
    }

    /// Move back one step; the draft is kept
    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        if self.submitting {
            return Err(WizardError::AlreadySubmitting);
        }
        let previous = self.step.previous().ok_or_else(|| self.invalid_transition("go back"))?;
        if previous == WizardStep::Intro {
            self.entered = false;
        }
        debug!(from = %self.step, to = %previous, "Wizard went back");
        self.step = previous;
        Ok(previous)
    }

    /// Start over from the confirmation screen with an empty draft
    pub fn restart(&mut self) -> Result<WizardStep, WizardError> {
        if self.step != WizardStep::Complete {
            return Err(self.invalid_transition("restart"));
        }
        self.step = WizardStep::Intro;
        self.draft = ApplicationDraft::new();
        self.entered = false;
        self.last_error = None;
        self.receipt = None;
        Ok(self.step)
    }

    /// Latch the submitting flag and build the payload
    ///
    /// Fails without side effects when the wizard is not on the narrative step,
    /// the statement is blank, or a submission is already in flight.
    pub fn begin_submit(&mut self) -> Result<SubmissionPayload, WizardError> {
        if self.step != WizardStep::Narrative {
            return Err(self.invalid_transition("submit"));
        }
        if self.submitting {
            return Err(WizardError::AlreadySubmitting);
        }
        if !self.draft.narrative_complete() {
            return Err(WizardError::NarrativeEmpty);
        }
        self.submitting = true;
        self.last_error = None;
        Ok(self.draft.to_payload())
    }

    /// Apply the relay outcome of a submission started with [`Self::begin_submit`]
    ///
    /// Without a submission in flight on the narrative step the outcome is
    /// refused and the wizard is left untouched.
    pub fn finish_submit(
        &mut self,
        result: Result<RelayReceipt, RelaySubmitError>,
    ) -> Result<WizardStep, WizardError> {
        if !self.submitting || self.step != WizardStep::Narrative {
            return Err(self.invalid_transition("finish submit"));
        }
        self.submitting = false;
        match result {
            Ok(receipt) => {
                info!(id = ?receipt.id, "Application delivered");
                self.step = WizardStep::Complete;
                self.draft = ApplicationDraft::new();
                self.receipt = Some(receipt);
                Ok(self.step)
            }
            Err(e) => {
                warn!(error = %e, "Application submission failed");
                let error = WizardError::Submission(e.to_string());
                self.last_error = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// Submit the application through the relay, once
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> Result<WizardStep, WizardError> {
        let payload = self.begin_submit()?;
        let result = self.relay.submit(&payload).await;
        self.finish_submit(result)
    }
}

use crate::config::rules::RegistrationRules;
use crate::core::fee::registration_fee;
use crate::core::fields::check_required_fields;
use crate::core::sessions::review_sessions;
use crate::core::standards::meets_standards;
use crate::core::SpeakerRepository;
use crate::domain::model::{
    ApprovedSpeaker, Assessment, RegisterError, RegisterResult, Registration, Speaker,
};
use tracing::{debug, error, info};

/// Runs the registration rules against a speaker and hands approved speakers
/// to a repository.
///
/// Holds no state besides its rules, so one instance can evaluate any number
/// of speakers.
#[derive(Debug, Clone, Default)]
pub struct Registrar {
    rules: RegistrationRules,
}

impl Registrar {
    pub fn new(rules: RegistrationRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RegistrationRules {
        &self.rules
    }

    /// Applies every rule in order without touching a repository.
    ///
    /// Order: required fields, standards, session presence, session content.
    /// The first failing rule decides the error.
    pub fn evaluate(&self, speaker: &Speaker) -> Assessment {
        if let Err(e) = check_required_fields(speaker) {
            debug!("Rejected speaker: {:?}", e);
            return Assessment::rejected(e);
        }

        if !meets_standards(speaker, &self.rules) {
            debug!("Rejected {}: does not meet standards", speaker.email);
            return Assessment::rejected(RegisterError::SpeakerDoesNotMeetStandards);
        }

        if speaker.sessions.is_empty() {
            debug!("Rejected {}: no sessions provided", speaker.email);
            return Assessment::rejected(RegisterError::NoSessionsProvided);
        }

        let screening = review_sessions(&speaker.sessions, &self.rules.legacy_technologies);
        let decision = if screening.all_approved {
            Ok(registration_fee(speaker.experience, &self.rules.fee_tiers))
        } else {
            let flagged = screening.reviews.iter().filter(|r| !r.approved).count();
            debug!(
                "Rejected {}: {} of {} sessions flagged",
                speaker.email,
                flagged,
                screening.reviews.len()
            );
            Err(RegisterError::NoSessionsApproved)
        };

        Assessment {
            decision,
            session_reviews: screening.reviews,
        }
    }

    /// Evaluates the speaker and, when every rule passes, saves it exactly once.
    ///
    /// Repository failures and missing identifiers are logged and reported as
    /// `SomethingWentWrong`.
    pub fn register<R: SpeakerRepository + ?Sized>(
        &self,
        speaker: &Speaker,
        repository: &R,
    ) -> RegisterResult {
        let registration_fee = self.evaluate(speaker).decision?;

        let approved = ApprovedSpeaker {
            speaker: speaker.clone(),
            registration_fee,
        };

        match repository.save_speaker(&approved) {
            Ok(Some(speaker_id)) => {
                info!(
                    "Registered speaker {} with id {} (fee {})",
                    speaker.email, speaker_id, registration_fee
                );
                Ok(Registration {
                    speaker_id,
                    registration_fee,
                })
            }
            Ok(None) => {
                error!("Repository returned no id for speaker {}", speaker.email);
                Err(RegisterError::SomethingWentWrong)
            }
            Err(e) => {
                error!("Failed to save speaker {}: {}", speaker.email, e);
                Err(RegisterError::SomethingWentWrong)
            }
        }
    }
}

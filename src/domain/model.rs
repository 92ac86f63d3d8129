use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type SpeakerId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrowserName {
    InternetExplorer,
    Edge,
    Firefox,
    Chrome,
    Safari,
    Opera,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Browser {
    pub name: BrowserName,
    pub major_version: u32,
}

impl Browser {
    pub fn new(name: BrowserName, major_version: u32) -> Self {
        Self {
            name,
            major_version,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub title: String,
    pub description: String,
}

impl Session {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A speaker submission as handed in by the caller.
///
/// The evaluator only reads it; fee and session approval come back as
/// separate values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Speaker {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Years of experience, if the speaker gave one.
    pub experience: Option<i32>,
    pub has_blog: bool,
    pub blog_url: Option<String>,
    pub browser: Option<Browser>,
    pub certifications: Vec<String>,
    pub employer: Option<String>,
    pub sessions: Vec<Session>,
}

/// Per-session outcome of the content check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReview {
    pub title: String,
    pub approved: bool,
    /// First legacy technology found in the session, if any.
    pub flagged_technology: Option<String>,
}

/// Outcome of the rule pipeline for one speaker.
///
/// `session_reviews` is filled whenever the content check ran, including when
/// it rejected the speaker; it stays empty if an earlier rule failed first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    /// Registration fee when every rule passed.
    pub decision: Result<u32, RegisterError>,
    pub session_reviews: Vec<SessionReview>,
}

impl Assessment {
    pub fn rejected(error: RegisterError) -> Self {
        Self {
            decision: Err(error),
            session_reviews: Vec::new(),
        }
    }

    pub fn registration_fee(&self) -> Option<u32> {
        self.decision.ok()
    }

    pub fn flagged_sessions(&self) -> impl Iterator<Item = &SessionReview> {
        self.session_reviews.iter().filter(|r| !r.approved)
    }
}

/// What the repository is asked to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApprovedSpeaker {
    pub speaker: Speaker,
    pub registration_fee: u32,
}

/// Row shape used by the bundled repositories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSpeaker {
    pub id: SpeakerId,
    pub registered_at: DateTime<Utc>,
    pub registration_fee: u32,
    pub speaker: Speaker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub speaker_id: SpeakerId,
    pub registration_fee: u32,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegisterError {
    #[error("First name is required")]
    FirstNameRequired,

    #[error("Last name is required")]
    LastNameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Speaker does not meet our standards")]
    SpeakerDoesNotMeetStandards,

    #[error("At least one session must be provided")]
    NoSessionsProvided,

    // Raised as soon as any session is flagged, not only when all of them are.
    #[error("No sessions were approved")]
    NoSessionsApproved,

    #[error("Something went wrong while registering the speaker")]
    SomethingWentWrong,
}

pub type RegisterResult = std::result::Result<Registration, RegisterError>;

/// Serialisable envelope for a registration outcome. Exactly one field is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub speaker_id: Option<SpeakerId>,
    pub error: Option<RegisterError>,
}

impl RegisterResponse {
    pub fn is_success(&self) -> bool {
        self.speaker_id.is_some()
    }
}

impl From<&RegisterResult> for RegisterResponse {
    fn from(result: &RegisterResult) -> Self {
        match result {
            Ok(registration) => Self {
                speaker_id: Some(registration.speaker_id),
                error: None,
            },
            Err(error) => Self {
                speaker_id: None,
                error: Some(*error),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speaker_deserializes_with_missing_fields() {
        let speaker: Speaker = serde_json::from_str(
            r#"{"first_name": "Ada", "last_name": "Lovelace", "email": "ada@example.com"}"#,
        )
        .unwrap();

        assert_eq!(speaker.first_name, "Ada");
        assert_eq!(speaker.experience, None);
        assert!(speaker.browser.is_none());
        assert!(speaker.certifications.is_empty());
        assert!(speaker.sessions.is_empty());
    }

    #[test]
    fn test_browser_name_uses_variant_names() {
        let browser: Browser =
            serde_json::from_str(r#"{"name": "InternetExplorer", "major_version": 8}"#).unwrap();
        assert_eq!(browser, Browser::new(BrowserName::InternetExplorer, 8));
    }

    #[test]
    fn test_register_response_carries_exactly_one_outcome() {
        let ok: RegisterResult = Ok(Registration {
            speaker_id: 7,
            registration_fee: 50,
        });
        let response = RegisterResponse::from(&ok);
        assert_eq!(response.speaker_id, Some(7));
        assert!(response.error.is_none());
        assert!(response.is_success());

        let err: RegisterResult = Err(RegisterError::EmailRequired);
        let response = RegisterResponse::from(&err);
        assert!(response.speaker_id.is_none());
        assert_eq!(response.error, Some(RegisterError::EmailRequired));
        assert!(!response.is_success());
    }

    #[test]
    fn test_register_error_serializes_as_variant_name() {
        let json = serde_json::to_string(&RegisterError::NoSessionsApproved).unwrap();
        assert_eq!(json, "\"NoSessionsApproved\"");
    }
}

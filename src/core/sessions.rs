use crate::domain::model::{Session, SessionReview};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionScreening {
    pub reviews: Vec<SessionReview>,
    /// False as soon as a single session was flagged.
    pub all_approved: bool,
}

fn find_legacy_technology<'a>(session: &Session, technologies: &'a [String]) -> Option<&'a str> {
    technologies
        .iter()
        .find(|tech| {
            session.title.contains(tech.as_str()) || session.description.contains(tech.as_str())
        })
        .map(String::as_str)
}

/// Scans every session; matching is case-sensitive and stops at the first
/// technology found for a given session.
pub fn review_sessions(sessions: &[Session], technologies: &[String]) -> SessionScreening {
    let reviews: Vec<SessionReview> = sessions
        .iter()
        .map(|session| {
            let flagged = find_legacy_technology(session, technologies);
            if let Some(tech) = flagged {
                tracing::warn!(
                    "Session '{}' references legacy technology '{}'",
                    session.title,
                    tech
                );
            }
            SessionReview {
                title: session.title.clone(),
                approved: flagged.is_none(),
                flagged_technology: flagged.map(str::to_string),
            }
        })
        .collect();

    let all_approved = reviews.iter().all(|r| r.approved);
    SessionScreening {
        reviews,
        all_approved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::rules::RegistrationRules;

    fn technologies() -> Vec<String> {
        RegistrationRules::default().legacy_technologies
    }

    #[test]
    fn test_clean_sessions_are_approved() {
        let sessions = vec![
            Session::new("Async Rust", "Futures and executors"),
            Session::new("Typestate APIs", "Compile-time state machines"),
        ];
        let screening = review_sessions(&sessions, &technologies());

        assert!(screening.all_approved);
        assert_eq!(screening.reviews.len(), 2);
        assert!(screening
            .reviews
            .iter()
            .all(|r| r.approved && r.flagged_technology.is_none()));
    }

    #[test]
    fn test_description_match_flags_session() {
        let sessions = vec![Session::new("Web scripting", "Classic ASP with VBScript")];
        let screening = review_sessions(&sessions, &technologies());

        assert!(!screening.all_approved);
        assert!(!screening.reviews[0].approved);
        assert_eq!(screening.reviews[0].flagged_technology.as_deref(), Some("VBScript"));
    }

    #[test]
    fn test_first_matching_technology_is_reported() {
        let sessions = vec![Session::new("Cobol on Punch Cards", "")];
        let screening = review_sessions(&sessions, &technologies());
        assert_eq!(screening.reviews[0].flagged_technology.as_deref(), Some("Cobol"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let sessions = vec![Session::new("COBOL today", "punch cards and vbscript")];
        let screening = review_sessions(&sessions, &technologies());
        assert!(screening.all_approved);
    }

    #[test]
    fn test_scanning_continues_after_a_flagged_session() {
        let sessions = vec![
            Session::new("Commodore 64 demoscene", "Retro"),
            Session::new("Modern Rust", "Ownership"),
            Session::new("Legacy", "Maintaining Cobol"),
        ];
        let screening = review_sessions(&sessions, &technologies());

        assert!(!screening.all_approved);
        let approved: Vec<bool> = screening.reviews.iter().map(|r| r.approved).collect();
        assert_eq!(approved, vec![false, true, false]);
    }

    #[test]
    fn test_no_sessions_is_vacuously_approved() {
        let screening = review_sessions(&[], &technologies());
        assert!(screening.all_approved);
        assert!(screening.reviews.is_empty());
    }
}

use crate::utils::error::Result;
use crate::utils::validation::{validate_list_entries, validate_strictly_ascending, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_APPROVED_EMPLOYERS: &[&str] = &["Pluralsight", "Microsoft", "Google"];

pub const DEFAULT_BLOCKED_EMAIL_DOMAINS: &[&str] = &["aol.com", "prodigy.com", "compuserve.com"];

pub const DEFAULT_LEGACY_TECHNOLOGIES: &[&str] = &["Cobol", "Punch Cards", "Commodore", "VBScript"];

/// (max_experience, fee), ascending. Anything above the last tier is free.
pub const DEFAULT_FEE_TIERS: &[(i32, u32)] = &[(1, 500), (3, 250), (5, 100), (9, 50)];

pub const DEFAULT_EXPERIENCE_THRESHOLD: i32 = 10;
pub const DEFAULT_CERTIFICATION_THRESHOLD: usize = 3;
pub const DEFAULT_MINIMUM_IE_VERSION: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeTier {
    pub max_experience: i32,
    pub fee: u32,
}

/// Lists and thresholds the registration rules are evaluated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationRules {
    pub approved_employers: Vec<String>,
    pub blocked_email_domains: Vec<String>,
    pub legacy_technologies: Vec<String>,
    /// Experience strictly above this qualifies on its own.
    pub experience_threshold: i32,
    /// More certifications than this qualifies on its own.
    pub certification_threshold: usize,
    /// Internet Explorer below this version fails the fallback check.
    pub minimum_ie_version: u32,
    pub fee_tiers: Vec<FeeTier>,
}

fn to_owned_list(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Default for RegistrationRules {
    fn default() -> Self {
        Self {
            approved_employers: to_owned_list(DEFAULT_APPROVED_EMPLOYERS),
            blocked_email_domains: to_owned_list(DEFAULT_BLOCKED_EMAIL_DOMAINS),
            legacy_technologies: to_owned_list(DEFAULT_LEGACY_TECHNOLOGIES),
            experience_threshold: DEFAULT_EXPERIENCE_THRESHOLD,
            certification_threshold: DEFAULT_CERTIFICATION_THRESHOLD,
            minimum_ie_version: DEFAULT_MINIMUM_IE_VERSION,
            fee_tiers: DEFAULT_FEE_TIERS
                .iter()
                .map(|&(max_experience, fee)| FeeTier {
                    max_experience,
                    fee,
                })
                .collect(),
        }
    }
}

impl RegistrationRules {
    pub fn is_approved_employer(&self, employer: &str) -> bool {
        self.approved_employers.iter().any(|e| e == employer)
    }

    pub fn is_blocked_domain(&self, domain: &str) -> bool {
        self.blocked_email_domains.iter().any(|d| d == domain)
    }
}

impl Validate for RegistrationRules {
    fn validate(&self) -> Result<()> {
        validate_list_entries("rules.approved_employers", &self.approved_employers)?;
        validate_list_entries("rules.blocked_email_domains", &self.blocked_email_domains)?;
        // 空字串會命中所有場次
        validate_list_entries("rules.legacy_technologies", &self.legacy_technologies)?;

        let bounds: Vec<i32> = self.fee_tiers.iter().map(|t| t.max_experience).collect();
        validate_strictly_ascending("rules.fee_tiers", &bounds)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_match_published_lists() {
        let rules = RegistrationRules::default();

        assert!(rules.is_approved_employer("Pluralsight"));
        assert!(rules.is_approved_employer("Microsoft"));
        assert!(rules.is_approved_employer("Google"));
        assert!(!rules.is_approved_employer("google"));
        assert!(!rules.is_approved_employer("Acme"));

        assert!(rules.is_blocked_domain("aol.com"));
        assert!(rules.is_blocked_domain("prodigy.com"));
        assert!(rules.is_blocked_domain("compuserve.com"));
        assert!(!rules.is_blocked_domain("gmail.com"));
        assert!(!rules.is_blocked_domain("mail.aol.com"));

        assert_eq!(rules.legacy_technologies.len(), 4);
        assert_eq!(rules.fee_tiers.first().map(|t| t.fee), Some(500));
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_blank_legacy_technology_is_rejected() {
        let rules = RegistrationRules {
            legacy_technologies: vec!["Cobol".to_string(), "".to_string()],
            ..RegistrationRules::default()
        };
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_unordered_fee_tiers_are_rejected() {
        let rules = RegistrationRules {
            fee_tiers: vec![
                FeeTier {
                    max_experience: 5,
                    fee: 100,
                },
                FeeTier {
                    max_experience: 1,
                    fee: 500,
                },
            ],
            ..RegistrationRules::default()
        };
        assert!(rules.validate().is_err());
    }
}

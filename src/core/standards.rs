use crate::config::rules::RegistrationRules;
use crate::domain::model::{BrowserName, Speaker};

/// Domain part of an email: everything after the last `@`, or the whole
/// string when there is none.
pub fn email_domain(email: &str) -> &str {
    email.rsplit('@').next().unwrap_or(email)
}

/// Experience, blog, certification count or employer qualify a speaker on
/// their own.
fn has_strong_credentials(speaker: &Speaker, rules: &RegistrationRules) -> bool {
    speaker
        .experience
        .is_some_and(|years| years > rules.experience_threshold)
        || speaker.has_blog
        || speaker.certifications.len() > rules.certification_threshold
        || speaker
            .employer
            .as_deref()
            .is_some_and(|employer| rules.is_approved_employer(employer))
}

fn uses_outdated_browser(speaker: &Speaker, rules: &RegistrationRules) -> bool {
    // No browser on file is not held against the speaker.
    speaker.browser.is_some_and(|browser| {
        browser.name == BrowserName::InternetExplorer
            && browser.major_version < rules.minimum_ie_version
    })
}

pub fn meets_standards(speaker: &Speaker, rules: &RegistrationRules) -> bool {
    if has_strong_credentials(speaker, rules) {
        return true;
    }

    let domain = email_domain(&speaker.email);
    !rules.is_blocked_domain(domain) && !uses_outdated_browser(speaker, rules)
}

use crate::domain::model::{RegisterError, Speaker};
use crate::utils::validation::is_blank;

/// Checks first name, last name, then email, returning the first one missing.
pub fn check_required_fields(speaker: &Speaker) -> Result<(), RegisterError> {
    if is_blank(&speaker.first_name) {
        return Err(RegisterError::FirstNameRequired);
    }
    if is_blank(&speaker.last_name) {
        return Err(RegisterError::LastNameRequired);
    }
    if is_blank(&speaker.email) {
        return Err(RegisterError::EmailRequired);
    }
    Ok(())
}

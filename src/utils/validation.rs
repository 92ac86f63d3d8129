use crate::utils::error::{Result, ServiceError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Blank means empty or whitespace-only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if is_blank(value) {
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_list_entries(field_name: &str, values: &[String]) -> Result<()> {
    for (index, value) in values.iter().enumerate() {
        validate_non_empty_string(&format!("{}[{}]", field_name, index), value)?;
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ServiceError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_strictly_ascending<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    values: &[T],
) -> Result<()> {
    for pair in values.windows(2) {
        if pair[1] <= pair[0] {
            return Err(ServiceError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: pair[1].to_string(),
                reason: format!("Value must be greater than the previous entry {}", pair[0]),
            });
        }
    }
    Ok(())
}

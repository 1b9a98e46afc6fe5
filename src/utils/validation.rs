//! Centralized validation and helper functions.

/// Maximum number of members in one pedigree file (DOS protection)
pub const MAX_PEDIGREE_MEMBERS: usize = 10_000;

/// Maximum number of variant records read from one VCF (DOS protection)
pub const MAX_VCF_RECORDS: usize = 5_000_000;

/// Maximum length of a sample name
pub const MAX_SAMPLE_NAME_LENGTH: usize = 255;

/// PED placeholder for an unknown parent
pub const MISSING_PARENT: &str = "0";

/// Sample name validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Empty sample name provided")]
    EmptySampleName,
    #[error("Sample name too long: exceeds {MAX_SAMPLE_NAME_LENGTH} characters")]
    SampleNameTooLong,
    #[error("Invalid sample name '{0}': contains whitespace or control characters")]
    InvalidSampleName(String),
    #[error("Sample name '0' is reserved for a missing parent")]
    ReservedSampleName,
}

/// Validate a sample name as used in PED and VCF files.
///
/// # Examples
///
/// ```
/// use inheritance_filter::utils::validation::validate_sample_name;
///
/// assert!(validate_sample_name("NA12878").is_ok());
/// assert!(validate_sample_name("").is_err());
/// assert!(validate_sample_name("two words").is_err());
/// assert!(validate_sample_name("0").is_err());
/// ```
///
/// # Errors
///
/// Returns a `ValidationError` if the name is empty, too long, contains
/// whitespace or control characters, or is the missing-parent placeholder.
pub fn validate_sample_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptySampleName);
    }
    if name.len() > MAX_SAMPLE_NAME_LENGTH {
        return Err(ValidationError::SampleNameTooLong);
    }
    if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ValidationError::InvalidSampleName(name.to_string()));
    }
    if name == MISSING_PARENT {
        return Err(ValidationError::ReservedSampleName);
    }
    Ok(())
}

/// Check if adding another pedigree member would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new member.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_member_limit(count: usize) -> Option<String> {
    if count >= MAX_PEDIGREE_MEMBERS {
        Some(format!(
            "Too many pedigree members: adding another would exceed maximum of {MAX_PEDIGREE_MEMBERS}"
        ))
    } else {
        None
    }
}

/// Check if adding another variant record would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new record.
#[must_use]
pub fn check_record_limit(count: usize) -> Option<String> {
    if count >= MAX_VCF_RECORDS {
        Some(format!(
            "Too many VCF records: adding another would exceed maximum of {MAX_VCF_RECORDS}"
        ))
    } else {
        None
    }
}

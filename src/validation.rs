use validator::{ValidateEmail, ValidateUrl};

use crate::{error::AppError, profile::ProfileUpdate};

/// Maximum length for the target email address
const MAX_EMAIL_LENGTH: usize = 254;
/// Maximum length for the display name
const MAX_FULL_NAME_LENGTH: usize = 100;
/// Maximum length for the biography
const MAX_BIO_LENGTH: usize = 2000;

// Validate input helper functions

/// Validates the target email
pub fn validate_input_email(email: &str) -> Result<(), AppError> {
    if email.is_empty() {
        Err(AppError::Validation("Email cannot be empty".to_string()))
    } else if email.len() > MAX_EMAIL_LENGTH {
        Err(AppError::Validation(format!("email too long, max {} characters", MAX_EMAIL_LENGTH)))
    } else if !email.validate_email() {
        Err(AppError::Validation(format!("Invalid email format: '{}'", email)))
    } else {
        Ok(())
    }
}

/// Validates a URL field
///
/// # Arguments
/// * `field` - Column name used in the error message
/// * `url` - Value to check
fn validate_input_url(field: &str, url: &str) -> Result<(), AppError> {
    if url.is_empty() {
        Err(AppError::Validation(format!("{} cannot be empty", field)))
    } else if !url.validate_url() {
        Err(AppError::Validation(format!("{} is not a valid URL: '{}'", field, url)))
    } else {
        Ok(())
    }
}

/// Validates all four values before anything is written
pub fn validate_profile_update(update: &ProfileUpdate) -> Result<(), AppError> {
    let name_length = update.full_name.chars().count();
    if update.full_name.trim().is_empty() {
        return Err(AppError::Validation("full_name cannot be empty".to_string()));
    } else if name_length > MAX_FULL_NAME_LENGTH {
        return Err(AppError::Validation(format!(
            "full_name too long, max {} characters",
            MAX_FULL_NAME_LENGTH
        )));
    }

    if update.bio.chars().count() > MAX_BIO_LENGTH {
        return Err(AppError::Validation(format!("bio too long, max {} characters", MAX_BIO_LENGTH)));
    }

    validate_input_url("linkedin_url", &update.linkedin_url)?;
    validate_input_url("avatar_url", &update.avatar_url)
}

use crate::utils::error::{MessengerError, Result};
use regex::Regex;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks `local-part@domain.tld` shape. Empty or whitespace-only input
/// is invalid; no error is ever returned.
pub fn validate_email_address(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() {
        return false;
    }

    let re = Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();
    re.is_match(email)
}

/// Accepts E.164-style numbers: optional leading `+`, nonzero first
/// digit, 10 to 15 digits total. Internal spaces, hyphens and
/// parentheses are stripped before matching.
pub fn validate_phone_number(phone: &str) -> bool {
    let phone = phone.trim();
    if phone.is_empty() {
        return false;
    }

    let cleaned: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '(' && *c != ')')
        .collect();

    let re = Regex::new(r"^\+?[1-9][0-9]{9,14}$").unwrap();
    re.is_match(&cleaned)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MessengerError::validation(format!(
            "{} cannot be empty or whitespace-only",
            field_name
        )));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(MessengerError::validation(format!(
            "{} must be between {} and {}, got {}",
            field_name, min, max, value
        )));
    }
    Ok(())
}

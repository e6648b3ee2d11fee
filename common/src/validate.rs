use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AppError, Res};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+7 \(\d{3}\) \d{3}-\d{2}-\d{2}$").unwrap());

/// Placeholder baked into the request schemas as the phone default. It does
/// not match the phone pattern but must still produce a valid row, so the
/// validator accepts it verbatim.
pub const PHONE_PLACEHOLDER: &str = "+7 (XXX) XXX-XX-XX";

pub fn email(value: &str) -> Res<()> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(AppError::Validation(format!("Invalid email address: {value}")))
    }
}

pub fn phone_number(value: &str) -> Res<()> {
    if value == PHONE_PLACEHOLDER || PHONE_RE.is_match(value) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Phone number must be in the format +7 (XXX) XXX-XX-XX, got: {value}"
        )))
    }
}

pub fn password(value: &str) -> Res<()> {
    if value.len() >= 5 {
        Ok(())
    } else {
        Err(AppError::Validation(
            "Password must be at least 5 characters long".to_string(),
        ))
    }
}

pub fn positive_cost(value: f64) -> Res<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Cost must be greater than zero, got: {value}"
        )))
    }
}

pub fn positive_id(field: &str, value: i32) -> Res<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "{field} must be greater than zero, got: {value}"
        )))
    }
}

/// Pagination bounds shared by every collection listing: zero-based offset,
/// strictly positive page size.
pub fn page_bounds(start: i64, step: i64) -> Res<()> {
    if start < 0 {
        return Err(AppError::Validation(format!(
            "start must be non-negative, got: {start}"
        )));
    }
    if step <= 0 {
        return Err(AppError::Validation(format!(
            "step must be greater than zero, got: {step}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(email("a@x.com").is_ok());
        assert!(email("first.last+tag@mail.example.org").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(email("not-an-email").is_err());
        assert!(email("missing@tld").is_err());
        assert!(email("@mail.com").is_err());
    }

    #[test]
    fn accepts_formatted_phone_and_placeholder() {
        assert!(phone_number("+7 (912) 345-67-89").is_ok());
        assert!(phone_number(PHONE_PLACEHOLDER).is_ok());
    }

    #[test]
    fn rejects_other_phone_formats() {
        assert!(phone_number("89123456789").is_err());
        assert!(phone_number("+7 912 345 67 89").is_err());
    }

    #[test]
    fn password_length_floor() {
        assert!(password("12345").is_ok());
        assert!(password("1234").is_err());
    }

    #[test]
    fn cost_must_be_positive() {
        assert!(positive_cost(1000.0).is_ok());
        assert!(positive_cost(0.0).is_err());
        assert!(positive_cost(-3.5).is_err());
    }

    #[test]
    fn page_bounds_policy() {
        assert!(page_bounds(0, 10).is_ok());
        assert!(page_bounds(5, 1).is_ok());
        assert!(page_bounds(-1, 10).is_err());
        assert!(page_bounds(0, 0).is_err());
    }
}

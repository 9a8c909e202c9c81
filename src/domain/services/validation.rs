use uuid::Uuid;

use crate::error::FieldError;

pub const MIN_GUESTS: i64 = 1;
pub const MAX_GUESTS: i64 = 10;

/// Validates a booking request before any store access. Failures are
/// collected field-by-field in precedence order: ids, name, email, phone,
/// guests.
pub fn validate_booking_request(
    experience_id: &str,
    slot_id: &str,
    name: &str,
    email: &str,
    phone: &str,
    guests: i64,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if Uuid::parse_str(experience_id).is_err() {
        errors.push(FieldError::new("experienceId", "Invalid experience id"));
    }
    if Uuid::parse_str(slot_id).is_err() {
        errors.push(FieldError::new("slotId", "Invalid slot id"));
    }
    if name.chars().count() < 2 {
        errors.push(FieldError::new("name", "Name must be at least 2 characters"));
    }
    if !is_valid_email(email) {
        errors.push(FieldError::new("email", "Invalid email address"));
    }
    if !is_valid_phone(phone) {
        errors.push(FieldError::new("phone", "Phone must be exactly 10 digits"));
    }
    if !(MIN_GUESTS..=MAX_GUESTS).contains(&guests) {
        errors.push(FieldError::new("guests", "Guests must be between 1 and 10"));
    }

    errors
}

pub fn is_valid_email(email: &str) -> bool {
    if email.len() < 3 || email.len() > 255 {
        return false;
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let local = parts[0];
    let domain = parts[1];

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    // Domain needs a dot with something on both sides.
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }

    !email.contains(char::is_whitespace)
}

pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit())
}

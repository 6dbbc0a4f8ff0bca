//! # Validation Module
//!
//! Checkout form validation.
//!
//! Validation gates exactly one step transition: leaving the personal-data
//! step. Errors are per-field so the UI can render them inline next to the
//! input that caused them; a failed validation blocks only that transition
//! and nothing else.

use crate::error::ValidationError;
use crate::types::{PersonalData, ShippingAddress};

// =============================================================================
// Field Limits
// =============================================================================

/// Upper bound on any free-text form field.
const MAX_FIELD_LEN: usize = 200;

// =============================================================================
// Personal Data
// =============================================================================

/// Per-field validation outcome for [`PersonalData`].
///
/// `None` means the field passed. The step-1 gate advances only when
/// [`PersonalDataErrors::is_empty`] holds.
#[derive(Debug, Clone, Default)]
pub struct PersonalDataErrors {
    pub first_name: Option<ValidationError>,
    pub last_name: Option<ValidationError>,
    pub email: Option<ValidationError>,
    pub phone: Option<ValidationError>,
    pub dni: Option<ValidationError>,
}

impl PersonalDataErrors {
    /// True when every field validated cleanly.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.dni.is_none()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        [
            self.first_name.is_some(),
            self.last_name.is_some(),
            self.email.is_some(),
            self.phone.is_some(),
            self.dni.is_some(),
        ]
        .iter()
        .filter(|&&set| set)
        .count()
    }
}

impl std::fmt::Display for PersonalDataErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for err in [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.dni,
        ]
        .into_iter()
        .flatten()
        {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", err)?;
            first = false;
        }
        Ok(())
    }
}

/// Validates the personal-data form.
///
/// ## Rules
/// - Every field is required, non-empty after trimming
/// - `email` must additionally match a `local@domain.tld` shape
pub fn validate_personal_data(data: &PersonalData) -> PersonalDataErrors {
    PersonalDataErrors {
        first_name: required("firstName", &data.first_name).err(),
        last_name: required("lastName", &data.last_name).err(),
        email: validate_email(&data.email).err(),
        phone: required("phone", &data.phone).err(),
        dni: required("dni", &data.dni).err(),
    }
}

/// Validates an email against a minimal `local@domain.tld` shape.
///
/// Deliberately loose, mirroring the storefront's inline check: one `@`,
/// a non-empty local part, a dot somewhere after it, no whitespace. Real
/// deliverability is settled over chat anyway.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    required("email", email)?;

    let malformed = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(malformed("must not contain spaces"));
    }

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| malformed("missing @"))?;

    if local.is_empty() {
        return Err(malformed("missing name before @"));
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(malformed("missing domain")),
    }
}

// =============================================================================
// Shipping Address
// =============================================================================

/// Validates the delivery address.
///
/// Only consulted when the shipping method requires delivery; pickup orders
/// may carry an empty address. Optional fields (floor, apartment,
/// additional info) are never validated.
pub fn validate_shipping_address(address: &ShippingAddress) -> Vec<ValidationError> {
    let fields = [
        ("street", &address.street),
        ("number", &address.number),
        ("city", &address.city),
        ("province", &address.province),
        ("postalCode", &address.postal_code),
    ];

    fields
        .into_iter()
        .filter_map(|(name, value)| required(name, value).err())
        .collect()
}

// =============================================================================
// Field Helpers
// =============================================================================

fn required(field: &str, value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    if value.len() > MAX_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_FIELD_LEN,
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

//! User profile and the order-placement gate.
//!
//! The profile starts from the authenticated email and must be explicitly
//! saved (with a phone number) before an order can be placed. Checkout
//! calls [`is_orderable`] fresh at order time, so edits made after a save
//! are always re-validated.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use printrush_core::{Email, Phone, PhoneError};

/// Fields a profile save can report as missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Phone,
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Phone => write!(f, "phone"),
        }
    }
}

/// Errors that can occur when saving a profile.
///
/// Every failure leaves the profile unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// A required field was left empty.
    #[error("{field} is required")]
    MissingField {
        /// The field the caller must fill in.
        field: ProfileField,
    },

    /// The phone number is present but malformed.
    #[error("invalid phone number: {0}")]
    InvalidPhone(#[from] PhoneError),
}

/// A registered user's contact profile.
///
/// The email is fixed at session start (it comes from authentication) and
/// is not part of [`ProfileDraft`], so it cannot be edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name; pre-filled from the email local part.
    pub name: String,
    /// Account email, immutable for the session.
    pub email: Email,
    /// Contact phone; `None` until a save supplies one.
    pub phone: Option<Phone>,
    /// Shipping address; may stay empty (shown in the checkout summary,
    /// never gates an order).
    pub address: String,
    /// True only after a successful explicit save.
    pub complete: bool,
}

impl UserProfile {
    /// Create the initial profile for a freshly authenticated session.
    #[must_use]
    pub fn for_session(email: Email) -> Self {
        let name = email.local_part().to_owned();
        Self {
            name,
            email,
            phone: None,
            address: String::new(),
            complete: false,
        }
    }

    /// Validate a draft and apply it to this profile.
    ///
    /// On success the profile is marked complete. On failure nothing is
    /// modified.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError`] if the name is empty, the phone is empty,
    /// or the phone is malformed.
    pub fn save(&mut self, draft: ProfileDraft) -> Result<(), ProfileError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ProfileError::MissingField {
                field: ProfileField::Name,
            });
        }

        let phone = Phone::parse(&draft.phone).map_err(|e| match e {
            PhoneError::Empty => ProfileError::MissingField {
                field: ProfileField::Phone,
            },
            other => ProfileError::InvalidPhone(other),
        })?;

        self.name = name.to_owned();
        self.phone = Some(phone);
        self.address = draft.address.trim().to_owned();
        self.complete = true;
        Ok(())
    }

    /// "Name, address" line for the checkout shipping summary.
    ///
    /// `None` until the profile has been saved.
    #[must_use]
    pub fn shipping_summary(&self) -> Option<String> {
        self.complete
            .then(|| format!("{}, {}", self.name, self.address))
    }
}

/// Raw form input for a profile save.
///
/// Deliberately all plain strings - validation happens in
/// [`UserProfile::save`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// The single authorization rule gating checkout.
///
/// A profile can place orders iff it has been explicitly saved and holds a
/// phone number. Evaluated fresh at order time, never cached.
#[must_use]
pub fn is_orderable(profile: &UserProfile) -> bool {
    profile.complete && profile.phone.is_some()
}

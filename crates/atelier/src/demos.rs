//! Demo widgets on the examples page.

use crate::controls::ids;
use crate::error::{Error, Result};
use crate::markup;
use crate::notify::NoticeKind;
use crate::surface::Surface;

/// Message shown by each notification demo button.
pub const fn demo_message(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "Operation completed successfully!",
        NoticeKind::Warning => "Warning: Please check your input.",
        NoticeKind::Error => "Error: Something went wrong. Please try again.",
        NoticeKind::Info => "Info: This is an informational message.",
    }
}

/// Result area contents while the simulated sign-in is in flight.
pub fn pending_markup() -> String {
    markup::alert("alert-info", "fa-spinner fa-spin", "Signing in...")
}

/// Values typed into the login demo form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Read the form fields. A missing field reads as empty.
    pub fn read<S: Surface + ?Sized>(surface: &S) -> Self {
        Self {
            email: surface.value(ids::LOGIN_EMAIL).unwrap_or_default(),
            password: surface.value(ids::LOGIN_PASSWORD).unwrap_or_default(),
        }
    }

    /// Both fields must be filled in.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if either field is empty.
    pub fn validate(&self) -> Result<()> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(Error::validation("Please fill in all fields"));
        }
        Ok(())
    }

    /// What the simulated server answers.
    ///
    /// Accepted when the email contains `@` and the password is at least six
    /// UTF-16 code units long.
    pub fn verdict(&self) -> LoginVerdict {
        if self.email.contains('@') && self.password.encode_utf16().count() >= 6 {
            LoginVerdict::Accepted
        } else {
            LoginVerdict::Rejected
        }
    }
}

/// Outcome of the simulated sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginVerdict {
    Accepted,
    Rejected,
}

impl LoginVerdict {
    pub fn markup(self) -> String {
        match self {
            Self::Accepted => markup::alert(
                "alert-success",
                "fa-check-circle",
                "Login successful! Redirecting...",
            ),
            Self::Rejected => markup::alert(
                "alert-danger",
                "fa-times-circle",
                "Invalid email or password. Please try again.",
            ),
        }
    }
}

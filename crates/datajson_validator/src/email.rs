//! Email address checking.

use validator::ValidateEmail;

/// Predicate deciding whether a contact mailbox is a valid email address.
///
/// Supplied to the catalog validator by the caller; [`RfcEmail`] is the default.
pub trait EmailCheck: Send + Sync {
    /// Returns true if `address` is a valid email address.
    fn is_valid_email(&self, address: &str) -> bool;
}

/// Email grammar check backed by the `validator` crate (HTML5 / RFC 5321 rules).
#[derive(Debug, Clone, Copy, Default)]
pub struct RfcEmail;

impl EmailCheck for RfcEmail {
    fn is_valid_email(&self, address: &str) -> bool {
        address.validate_email()
    }
}

impl<F> EmailCheck for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_valid_email(&self, address: &str) -> bool {
        self(address)
    }
}

//! Emptiness and length checks for submitted chirps.

use std::ops::Deref;

use common::error::{ServiceError, MAX_CHIRP_LEN};

/// A chirp body that passed [`validate`]. Derefs to the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedText<'a>(&'a str);

impl Deref for ValidatedText<'_> {
    type Target = str;

    fn deref(&self) -> &str {
        self.0
    }
}

/// Check that `body` is non-empty and at most [`MAX_CHIRP_LEN`] bytes long.
///
/// Length is the UTF-8 byte count, so multi-byte characters count more than
/// once.
///
/// # Errors
///
/// Returns [`ServiceError::EmptyBody`] for `""` and [`ServiceError::TooLong`]
/// when the byte length exceeds the bound.
pub fn validate(body: &str) -> Result<ValidatedText<'_>, ServiceError> {
    if body.is_empty() {
        return Err(ServiceError::EmptyBody);
    }
    if body.len() > MAX_CHIRP_LEN {
        return Err(ServiceError::TooLong);
    }
    Ok(ValidatedText(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_rejected() {
        assert_eq!(validate(""), Err(ServiceError::EmptyBody));
    }

    #[test]
    fn whitespace_only_is_accepted() {
        assert_eq!(&*validate(" ").unwrap(), " ");
    }

    #[test]
    fn boundary_lengths() {
        let at_limit = "a".repeat(MAX_CHIRP_LEN);
        let over = "a".repeat(MAX_CHIRP_LEN + 1);
        assert_eq!(&*validate(&at_limit).unwrap(), at_limit.as_str());
        assert_eq!(validate(&over), Err(ServiceError::TooLong));
    }

    #[test]
    fn every_accepted_length_is_unchanged() {
        for n in 1..=MAX_CHIRP_LEN {
            let body = "x".repeat(n);
            assert_eq!(&*validate(&body).unwrap(), body.as_str());
        }
    }

    #[test]
    fn length_counts_bytes() {
        // 70 two-byte characters = 140 bytes, one more tips it over.
        let at_limit = "é".repeat(70);
        assert_eq!(at_limit.len(), 140);
        assert!(validate(&at_limit).is_ok());
        let over = format!("{at_limit}a");
        assert_eq!(validate(&over), Err(ServiceError::TooLong));
    }
}

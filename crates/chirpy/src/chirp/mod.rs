//! Chirp moderation pipeline: length validation followed by word censoring.
//!
//! Both stages are pure functions over their inputs. Validation runs first, so
//! censoring never changes whether a chirp is accepted.

pub mod censor;
pub mod validator;

pub use censor::{censor, Denylist};
pub use validator::validate;

use common::ServiceError;

/// Validate `body` and, if it is acceptable, return its censored form.
///
/// # Errors
///
/// Returns [`ServiceError::EmptyBody`] or [`ServiceError::TooLong`] from
/// [`validate`].
pub fn moderate(body: &str, denylist: &Denylist) -> Result<String, ServiceError> {
    let text = validate(body)?;
    Ok(censor(&text, denylist))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_chirp_is_censored() {
        let d = Denylist::default();
        let out = moderate("This is a kerfuffle opinion", &d).unwrap();
        assert_eq!(out, "This is a **** opinion");
    }

    #[test]
    fn length_is_checked_before_censoring() {
        // Masked, this body would fit; its raw length still rejects it.
        let body = "sharbert ".repeat(16);
        assert!(body.len() > 140);
        assert_eq!(
            moderate(&body, &Denylist::default()),
            Err(ServiceError::TooLong)
        );
    }
}

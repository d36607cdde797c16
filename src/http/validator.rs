use crate::error::{Error, Result};
use crate::http::HttpMethod;

/// Status codes accepted by [`HttpResponse::redirect`](crate::http::response::HttpResponse::redirect)
pub const REDIRECT_STATUSES: [u16; 5] = [301, 302, 303, 307, 308];

pub struct Validator;

impl Validator {
    /// GET and HEAD requests cannot carry a payload.
    pub fn validate_request_body(method: &str, has_body: bool) -> Result<()> {
        match HttpMethod::parse(method) {
            Some(HttpMethod::Get | HttpMethod::Head) if has_body => {
                Err(Error::BodyNotAllowed(method.to_string()))
            }
            _ => Ok(()),
        }
    }

    pub fn validate_redirect_status(status: u16) -> Result<()> {
        if REDIRECT_STATUSES.contains(&status) {
            Ok(())
        } else {
            Err(Error::InvalidRedirectStatus(status))
        }
    }
}

/// Whether a status code is in the successful 2xx range
pub fn is_ok_status(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_rejected_for_get_and_head() {
        assert_eq!(
            Validator::validate_request_body("GET", true),
            Err(Error::BodyNotAllowed("GET".to_string()))
        );
        assert!(Validator::validate_request_body("HEAD", true).is_err());
        assert!(Validator::validate_request_body("GET", false).is_ok());
        assert!(Validator::validate_request_body("POST", true).is_ok());
    }

    #[test]
    fn redirect_statuses() {
        for status in REDIRECT_STATUSES {
            assert!(Validator::validate_redirect_status(status).is_ok());
        }
        assert_eq!(
            Validator::validate_redirect_status(200),
            Err(Error::InvalidRedirectStatus(200))
        );
        assert!(Validator::validate_redirect_status(304).is_err());
    }

    #[test]
    fn ok_range() {
        assert!(is_ok_status(200));
        assert!(is_ok_status(299));
        assert!(!is_ok_status(300));
        assert!(!is_ok_status(0));
    }
}

use actix_web::dev::ServiceRequest;

use crate::{
    constants::{
        AUTHORIZATION_HEADER_NAME, AUTHORIZATION_HEADER_VALUE_PREFIX, MINIMUM_API_KEY_LENGTH,
    },
    models::SecretString,
};

/// Checks the authorization header of a request against the configured API key.
///
/// The header must be present exactly once, carry the "Bearer " prefix, and the
/// token must match the expected key. Tokens that are too short or contain
/// whitespace are rejected without comparison.
pub fn check_authorization_header(req: &ServiceRequest, expected_key: &SecretString) -> bool {
    let headers: Vec<_> = req.headers().get_all(AUTHORIZATION_HEADER_NAME).collect();
    if headers.len() != 1 {
        return false;
    }

    let Ok(value) = headers[0].to_str() else {
        return false;
    };
    let Some(token) = value.strip_prefix(AUTHORIZATION_HEADER_VALUE_PREFIX) else {
        return false;
    };

    if token.len() < MINIMUM_API_KEY_LENGTH || token.contains(' ') {
        return false;
    }

    expected_key == &SecretString::new(token)
}

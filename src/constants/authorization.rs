pub const AUTHORIZATION_HEADER_NAME: &str = "authorization";
pub const AUTHORIZATION_HEADER_VALUE_PREFIX: &str = "Bearer ";

/// Tokens shorter than this are rejected outright.
pub const MINIMUM_API_KEY_LENGTH: usize = 16;

use once_cell::sync::Lazy;
use regex::Regex;

/// E.164-style phone numbers: https://en.wikipedia.org/wiki/E.164
pub static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?1?\d{9,15}$").expect("phone regex is valid"));

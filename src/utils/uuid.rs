//! UUID utilities.
use uuid::Uuid;

/// Generate a new v4 UUID as a string. Used for all record IDs.
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}

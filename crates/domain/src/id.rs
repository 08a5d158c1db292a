//! ID generation utilities.

use uuid::Uuid;

/// Generates a provider-style account id as a UUID v7 string.
///
/// UUID v7 includes timestamp information and is sortable, which keeps
/// in-memory account tables stable across runs of the same test.
#[must_use]
pub fn generate_account_id() -> String {
    Uuid::now_v7().to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_account_id_format() {
        let id = generate_account_id();
        // UUID format: 8-4-4-4-12 = 36 chars
        assert_eq!(id.len(), 36);
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_generate_account_id_uniqueness() {
        let id1 = generate_account_id();
        let id2 = generate_account_id();
        assert_ne!(id1, id2);
    }
}

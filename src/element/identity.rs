//! Identifier sources for element identity attributes

use uuid::Uuid;

/// Source of unique element identifiers.
///
/// Each call must return a fresh identifier; identifiers are never reused and
/// never revoked. Implementations must be thread safe — the builder may be
/// called from any thread — but no coordination beyond that is required.
pub trait IdSource: Send + Sync {
    /// Produce the next identifier.
    fn next_id(&self) -> String;
}

/// The default identifier source, backed by v4 UUIDs.
///
/// Collision resistant without any shared state, so a single process-wide
/// instance serves every build call.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_source_yields_fresh_36_char_ids() {
        let source = UuidSource;
        let a = source.next_id();
        let b = source.next_id();
        assert_eq!(a.len(), 36);
        assert_eq!(b.len(), 36);
        assert_ne!(a, b);
    }
}

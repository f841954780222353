use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// PersonId
// ─────────────────────────────────────────────

/// Person identifier.
///
/// Allocated by [`SocialGraph`](crate::network::SocialGraph) from a
/// monotonic counter starting at 1; never reused within an engine
/// instance, even after removals.
pub type PersonId = u64;

/// Stored in place of an empty bio.
pub const DEFAULT_BIO: &str = "No bio";

// ─────────────────────────────────────────────
// Person
// ─────────────────────────────────────────────

/// A member of the social graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier (monotonic, session-scoped).
    pub id: PersonId,

    /// Display name. Callers validate non-emptiness before insertion;
    /// the engine stores the name as given.
    pub name: String,

    /// Free-text bio. Empty input is replaced with [`DEFAULT_BIO`].
    pub bio: String,

    /// Friend ids in connection insertion order.
    ///
    /// Derived view of the adjacency relation, updated on every mutation.
    /// Never the source of truth.
    pub friends: Vec<PersonId>,
}

impl Person {
    pub fn new(id: PersonId, name: impl Into<String>, bio: impl Into<String>) -> Self {
        let bio = bio.into();
        Self {
            id,
            name: name.into(),
            bio: if bio.trim().is_empty() {
                DEFAULT_BIO.to_string()
            } else {
                bio
            },
            friends: Vec::new(),
        }
    }

    /// Number of direct friends.
    pub fn friend_count(&self) -> usize {
        self.friends.len()
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

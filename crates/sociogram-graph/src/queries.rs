use std::cmp::Reverse;

use serde::Serialize;

use crate::adjacency::AdjacencyIndex;
use crate::model::PersonId;

// ─────────────────────────────────────────────
// Suggestion
// ─────────────────────────────────────────────

/// A friend-of-friend candidate, ranked by shared direct friends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub person_id: PersonId,

    /// How many of the queried person's friends also connect to this
    /// candidate.
    pub mutual_count: usize,
}

// ─────────────────────────────────────────────
// Mutual friends
// ─────────────────────────────────────────────

/// Intersection of two people's neighbor lists, in `a`'s insertion order.
///
/// Unknown ids yield an empty result; read-only queries degrade gracefully
/// instead of erroring.
pub fn mutual_friends(adjacency: &AdjacencyIndex, a: PersonId, b: PersonId) -> Vec<PersonId> {
    let b_neighbors = adjacency.neighbors(b);
    adjacency
        .neighbors(a)
        .iter()
        .copied()
        .filter(|id| b_neighbors.contains(id))
        .collect()
}

// ─────────────────────────────────────────────
// Friend suggestions
// ─────────────────────────────────────────────

/// Friends-of-friends ranked by mutual-friend count, descending.
///
/// Scans each of `id`'s friends' neighbor lists in insertion order and
/// counts, per candidate, how many of `id`'s friends it connects to.
/// Candidates that are `id` itself or already direct friends are skipped.
/// The sort is stable, so ties keep first-encounter order.
///
/// Empty for unknown or friendless ids.
pub fn suggest_friends(adjacency: &AdjacencyIndex, id: PersonId) -> Vec<Suggestion> {
    let direct = adjacency.neighbors(id);

    // Discovery-ordered accumulation; a linear candidate lookup is fine at
    // the sizes a friends-of-friends scan produces.
    let mut suggestions: Vec<Suggestion> = Vec::new();

    for &friend in direct {
        for &candidate in adjacency.neighbors(friend) {
            if candidate == id || direct.contains(&candidate) {
                continue;
            }
            match suggestions.iter().position(|s| s.person_id == candidate) {
                Some(i) => suggestions[i].mutual_count += 1,
                None => suggestions.push(Suggestion {
                    person_id: candidate,
                    mutual_count: 1,
                }),
            }
        }
    }

    suggestions.sort_by_key(|s| Reverse(s.mutual_count));
    suggestions
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

use std::collections::HashMap;

use tracing::debug;

use crate::adjacency::AdjacencyIndex;
use crate::error::GraphError;
use crate::model::{Person, PersonId};
use crate::queries::{self, Suggestion};
use crate::traversal;

// ─────────────────────────────────────────────
// SocialGraph
// ─────────────────────────────────────────────

/// The social graph engine.
///
/// Owns the person table and the undirected adjacency relation and keeps
/// them consistent: every mutation updates both sides of the relation and
/// the derived per-person friend views within the same synchronous call.
/// There are no modal states; each operation is a complete transition on
/// the `(people, adjacency)` pair.
///
/// The engine holds no external resources and exposes no global state; a
/// presentation layer calls in, reads the results, and renders them
/// however it likes.
pub struct SocialGraph {
    people:    HashMap<PersonId, Person>,
    adjacency: AdjacencyIndex,
    /// Next id to allocate. Monotonic; removals never free ids.
    next_id:   PersonId,
}

impl SocialGraph {
    pub fn new() -> Self {
        Self {
            people:    HashMap::new(),
            adjacency: AdjacencyIndex::new(),
            next_id:   1,
        }
    }

    // ── Mutations ──────────────────────────────────────

    /// Add a person and return the stored record.
    ///
    /// Allocates the next id, registers an empty neighbor list, and stores
    /// the record with an empty friend view. Name validation (non-empty
    /// after trimming) is the caller's contract; an empty bio is replaced
    /// with the placeholder by [`Person::new`].
    pub fn add_person(&mut self, name: impl Into<String>, bio: impl Into<String>) -> &Person {
        let id = self.next_id;
        self.next_id += 1;

        let person = Person::new(id, name, bio);
        debug!("added person {} ({})", id, person.name);

        self.adjacency.add_node(id);
        self.people.entry(id).or_insert(person)
    }

    /// Connect two people as friends.
    ///
    /// Calling twice for the same pair is an explicit
    /// [`GraphError::AlreadyConnected`], not a silent no-op. Duplicate
    /// connections are caller bugs worth surfacing.
    pub fn add_connection(&mut self, a: PersonId, b: PersonId) -> Result<(), GraphError> {
        if !self.people.contains_key(&a) {
            return Err(GraphError::PersonNotFound(a));
        }
        if !self.people.contains_key(&b) {
            return Err(GraphError::PersonNotFound(b));
        }
        if a == b {
            return Err(GraphError::SelfConnection(a));
        }
        if self.adjacency.contains_edge(a, b) {
            return Err(GraphError::AlreadyConnected(a, b));
        }

        self.adjacency.add_edge(a, b);
        // Friend views mirror the adjacency relation, same insertion order.
        if let Some(person) = self.people.get_mut(&a) {
            person.friends.push(b);
        }
        if let Some(person) = self.people.get_mut(&b) {
            person.friends.push(a);
        }

        debug!("connected {} and {}", a, b);
        Ok(())
    }

    /// Remove a person and sever all their connections.
    ///
    /// Returns `false` when the id is unknown; removing a nonexistent
    /// person is not an error. After a successful removal no surviving
    /// neighbor list or friend view references the removed id.
    pub fn remove_person(&mut self, id: PersonId) -> bool {
        if !self.people.contains_key(&id) {
            return false;
        }

        let severed = self.adjacency.remove_node(id);
        for neighbor in &severed {
            if let Some(person) = self.people.get_mut(neighbor) {
                person.friends.retain(|&f| f != id);
            }
        }
        self.people.remove(&id);

        debug!("removed person {} ({} connections severed)", id, severed.len());
        true
    }

    /// Drop all people and connections and restart ids at 1.
    pub fn clear(&mut self) {
        self.people.clear();
        self.adjacency.clear();
        self.next_id = 1;
        debug!("cleared network");
    }

    // ── Lookups ────────────────────────────────────────

    /// Record lookup.
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.get(&id)
    }

    /// All records, ordered by ascending id (ids are insertion-ordered,
    /// so this is creation order minus removals).
    pub fn people(&self) -> Vec<&Person> {
        let mut all: Vec<&Person> = self.people.values().collect();
        all.sort_by_key(|p| p.id);
        all
    }

    /// Neighbor ids for `id` in connection insertion order.
    pub fn friends(&self, id: PersonId) -> &[PersonId] {
        self.adjacency.neighbors(id)
    }

    // ── Queries ────────────────────────────────────────

    /// BFS shortest path between two people, endpoints included.
    ///
    /// `Some(vec![a])` when `a == b`; `None` when either id is unknown or
    /// the two lie in different components. Callers may rely on the
    /// length, not on which of several equally short paths comes back.
    pub fn find_shortest_path(&self, a: PersonId, b: PersonId) -> Option<Vec<PersonId>> {
        if !self.people.contains_key(&a) || !self.people.contains_key(&b) {
            return None;
        }
        traversal::shortest_path(&self.adjacency, a, b)
    }

    /// Edge count of the shortest path. `None` = disconnected or unknown
    /// id; `Some(0)` = same person.
    pub fn degrees_of_separation(&self, a: PersonId, b: PersonId) -> Option<usize> {
        if !self.people.contains_key(&a) || !self.people.contains_key(&b) {
            return None;
        }
        traversal::degrees_of_separation(&self.adjacency, a, b)
    }

    /// Ids both `a` and `b` are directly connected to, in `a`'s insertion
    /// order. Empty for unknown ids.
    pub fn mutual_friends(&self, a: PersonId, b: PersonId) -> Vec<PersonId> {
        queries::mutual_friends(&self.adjacency, a, b)
    }

    /// Friend-of-friend candidates for `id`, ranked descending by shared
    /// friend count. Empty for unknown or friendless ids.
    pub fn suggest_friends(&self, id: PersonId) -> Vec<Suggestion> {
        queries::suggest_friends(&self.adjacency, id)
    }

    // ── Stats ──────────────────────────────────────────

    /// Number of people.
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    /// Number of friendships (each undirected edge counted once).
    pub fn total_connections(&self) -> usize {
        self.adjacency.edge_count()
    }

    /// Mean number of friends per person, exact.
    ///
    /// 0.0 with no people. Rounding for display is the presentation
    /// layer's job.
    pub fn average_friends(&self) -> f64 {
        if self.people.is_empty() {
            return 0.0;
        }
        self.adjacency.degree_sum() as f64 / self.people.len() as f64
    }
}

impl Default for SocialGraph {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// a, b, c added in order, connected a–b and b–c.
    fn three_person_chain() -> SocialGraph {
        let mut graph = SocialGraph::new();
        graph.add_person("Ada", "");
        graph.add_person("Grace", "");
        graph.add_person("Alan", "");
        graph.add_connection(1, 2).unwrap();
        graph.add_connection(2, 3).unwrap();
        graph
    }

    /// Every person's friend view must equal the adjacency neighbor list,
    /// order included.
    fn assert_views_consistent(graph: &SocialGraph) {
        for person in graph.people() {
            assert_eq!(
                person.friends,
                graph.friends(person.id),
                "friend view of {} out of sync",
                person.id
            );
        }
    }

    // ── add_person ───────────────────────────────────────

    #[test]
    fn ids_are_sequential_from_one() {
        let mut graph = SocialGraph::new();
        assert_eq!(graph.add_person("Ada", "").id, 1);
        assert_eq!(graph.add_person("Grace", "").id, 2);
        assert_eq!(graph.add_person("Alan", "").id, 3);
    }

    #[test]
    fn ids_are_never_reused_after_removal() {
        let mut graph = SocialGraph::new();
        graph.add_person("Ada", "");
        graph.add_person("Grace", "");
        assert!(graph.remove_person(2));
        assert_eq!(graph.add_person("Alan", "").id, 3);
    }

    #[test]
    fn clear_resets_the_counter() {
        let mut graph = three_person_chain();
        graph.clear();
        assert_eq!(graph.person_count(), 0);
        assert_eq!(graph.total_connections(), 0);
        assert_eq!(graph.add_person("Ada", "").id, 1);
    }

    // ── add_connection ───────────────────────────────────

    #[test]
    fn connection_is_symmetric() {
        let graph = three_person_chain();
        assert!(graph.friends(1).contains(&2));
        assert!(graph.friends(2).contains(&1));
        assert_views_consistent(&graph);
    }

    #[test]
    fn duplicate_connection_is_rejected() {
        let mut graph = three_person_chain();
        assert_eq!(
            graph.add_connection(1, 2),
            Err(GraphError::AlreadyConnected(1, 2))
        );
        // the reverse direction is the same edge
        assert_eq!(
            graph.add_connection(2, 1),
            Err(GraphError::AlreadyConnected(2, 1))
        );
    }

    #[test]
    fn self_connection_is_rejected() {
        let mut graph = three_person_chain();
        assert_eq!(graph.add_connection(1, 1), Err(GraphError::SelfConnection(1)));
    }

    #[test]
    fn connection_to_unknown_person_is_rejected() {
        let mut graph = three_person_chain();
        assert_eq!(graph.add_connection(1, 99), Err(GraphError::PersonNotFound(99)));
        assert_eq!(graph.add_connection(99, 1), Err(GraphError::PersonNotFound(99)));
    }

    #[test]
    fn failed_connection_mutates_nothing() {
        let mut graph = three_person_chain();
        let before = graph.total_connections();
        let _ = graph.add_connection(1, 2);
        let _ = graph.add_connection(1, 1);
        let _ = graph.add_connection(1, 99);
        assert_eq!(graph.total_connections(), before);
        assert_views_consistent(&graph);
    }

    // ── remove_person ────────────────────────────────────

    #[test]
    fn remove_unknown_person_returns_false() {
        let mut graph = SocialGraph::new();
        assert!(!graph.remove_person(7));
    }

    #[test]
    fn removal_leaves_no_dangling_references() {
        // star, chain, cycle, disconnected: removal must scrub every shape
        let shapes: Vec<fn() -> SocialGraph> = vec![
            || {
                // star: 1 in the center, 2..=4 leaves
                let mut g = SocialGraph::new();
                for name in ["hub", "a", "b", "c"] {
                    g.add_person(name, "");
                }
                for leaf in 2..=4 {
                    g.add_connection(1, leaf).unwrap();
                }
                g
            },
            three_person_chain,
            || {
                // cycle of 4
                let mut g = SocialGraph::new();
                for name in ["a", "b", "c", "d"] {
                    g.add_person(name, "");
                }
                g.add_connection(1, 2).unwrap();
                g.add_connection(2, 3).unwrap();
                g.add_connection(3, 4).unwrap();
                g.add_connection(4, 1).unwrap();
                g
            },
            || {
                // two components: 1–2, 3–4
                let mut g = SocialGraph::new();
                for name in ["a", "b", "c", "d"] {
                    g.add_person(name, "");
                }
                g.add_connection(1, 2).unwrap();
                g.add_connection(3, 4).unwrap();
                g
            },
        ];

        for make in shapes {
            let mut graph = make();
            assert!(graph.remove_person(1));
            assert!(graph.person(1).is_none());
            for person in graph.people() {
                assert!(!person.friends.contains(&1));
                assert!(!graph.friends(person.id).contains(&1));
            }
            assert_views_consistent(&graph);
            assert_eq!(graph.adjacency.degree_sum() % 2, 0);
        }
    }

    #[test]
    fn removing_the_middle_disconnects_a_chain() {
        // Ada – Grace – Alan – Barbara; removing Grace splits the chain
        let mut graph = three_person_chain();
        graph.add_person("Barbara", "");
        graph.add_connection(3, 4).unwrap();

        assert!(graph.remove_person(2));
        assert_eq!(graph.find_shortest_path(1, 4), None);
        assert_eq!(graph.degrees_of_separation(1, 4), None);
    }

    // ── queries ──────────────────────────────────────────

    #[test]
    fn chain_scenario_path_degrees_mutual() {
        let graph = three_person_chain();
        assert_eq!(graph.find_shortest_path(1, 3), Some(vec![1, 2, 3]));
        assert_eq!(graph.degrees_of_separation(1, 3), Some(2));
        assert_eq!(graph.mutual_friends(1, 3), vec![2]);
    }

    #[test]
    fn path_with_unknown_endpoint_is_none() {
        let graph = three_person_chain();
        assert_eq!(graph.find_shortest_path(1, 99), None);
        assert_eq!(graph.find_shortest_path(99, 1), None);
        // even when both unknown ids are equal: no person, no path
        assert_eq!(graph.find_shortest_path(99, 99), None);
        assert_eq!(graph.degrees_of_separation(99, 99), None);
    }

    #[test]
    fn star_scenario_suggestions() {
        let mut graph = SocialGraph::new();
        for name in ["hub", "a", "b", "c"] {
            graph.add_person(name, "");
        }
        for leaf in 2..=4 {
            graph.add_connection(1, leaf).unwrap();
        }

        let suggestions = graph.suggest_friends(2);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].person_id, 3);
        assert_eq!(suggestions[0].mutual_count, 1);
        assert_eq!(suggestions[1].person_id, 4);
        assert_eq!(suggestions[1].mutual_count, 1);
    }

    // ── stats ────────────────────────────────────────────

    #[test]
    fn connection_totals() {
        let graph = three_person_chain();
        assert_eq!(graph.person_count(), 3);
        assert_eq!(graph.total_connections(), 2);
    }

    #[test]
    fn average_friends_is_exact() {
        // 5 people, 3 edges → 6 endpoints / 5 people = 1.2
        let mut graph = SocialGraph::new();
        for name in ["a", "b", "c", "d", "e"] {
            graph.add_person(name, "");
        }
        graph.add_connection(1, 2).unwrap();
        graph.add_connection(2, 3).unwrap();
        graph.add_connection(4, 5).unwrap();

        assert!((graph.average_friends() - 1.2).abs() < f64::EPSILON);
    }

    #[test]
    fn average_friends_of_empty_network_is_zero() {
        let graph = SocialGraph::new();
        assert_eq!(graph.average_friends(), 0.0);
    }

    #[test]
    fn degree_sum_stays_even_through_mutations() {
        let mut graph = three_person_chain();
        assert_eq!(graph.adjacency.degree_sum() % 2, 0);
        graph.add_person("Barbara", "");
        graph.add_connection(1, 4).unwrap();
        assert_eq!(graph.adjacency.degree_sum() % 2, 0);
        graph.remove_person(2);
        assert_eq!(graph.adjacency.degree_sum() % 2, 0);
    }

    #[test]
    fn people_listing_is_id_ordered() {
        let mut graph = SocialGraph::new();
        for name in ["c", "a", "b"] {
            graph.add_person(name, "");
        }
        graph.remove_person(2);
        let ids: Vec<PersonId> = graph.people().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}

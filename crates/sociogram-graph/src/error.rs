use thiserror::Error;

use crate::model::PersonId;

/// Mutation failures surfaced to the caller.
///
/// All variants are recoverable; the engine instance stays fully usable
/// after any of them. Read-only queries never produce these: unknown ids
/// degrade to empty results or `None` instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("person not found: {0}")]
    PersonNotFound(PersonId),

    #[error("cannot connect person {0} to themselves")]
    SelfConnection(PersonId),

    #[error("persons {0} and {1} are already connected")]
    AlreadyConnected(PersonId, PersonId),
}

//! Single-writer mutation slot.
//!
//! Every operation that moves an animated value opens a mutation first.
//! Opening a mutation supersedes whichever one currently owns the slot, so at
//! most one logical mutation can ever commit. Long-running mutations (a settle
//! animation) keep their [`MutationId`] and check it before committing.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MutationId(u64);

impl fmt::Display for MutationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    /// A newer mutation took the slot before this one finished.
    Superseded { id: MutationId, by: Option<MutationId> },
}

impl fmt::Display for MutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationError::Superseded { id, by: Some(by) } => {
                write!(f, "mutation {id} was superseded by {by}")
            }
            MutationError::Superseded { id, by: None } => {
                write!(f, "mutation {id} is no longer active")
            }
        }
    }
}

impl std::error::Error for MutationError {}

#[derive(Debug, Default)]
pub struct MutatorMutex {
    next_id: u64,
    current: Option<MutationId>,
}

impl MutatorMutex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the slot, superseding the current owner. Returns the new id.
    pub fn begin(&mut self) -> MutationId {
        self.next_id += 1;
        let id = MutationId(self.next_id);
        if let Some(previous) = self.current.replace(id) {
            log::trace!("mutation {previous} superseded by {id}");
        }
        id
    }

    /// Releases the slot if `id` still owns it.
    pub fn finish(&mut self, id: MutationId) -> Result<(), MutationError> {
        if self.current == Some(id) {
            self.current = None;
            Ok(())
        } else {
            Err(MutationError::Superseded {
                id,
                by: self.current,
            })
        }
    }

    pub fn is_current(&self, id: MutationId) -> bool {
        self.current == Some(id)
    }
}

#[cfg(test)]
#[path = "tests/mutator_tests.rs"]
mod tests;

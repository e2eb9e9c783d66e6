use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::{Registration, VoterId};

/// Registered voters and whether each has cast their single vote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoterRegistry(IndexMap<VoterId, bool>);

impl VoterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a voter who has not voted yet.
    pub fn register(&mut self, voter_id: &str) -> Registration {
        if self.0.contains_key(voter_id) {
            return Registration::AlreadyPresent;
        }
        self.0.insert(voter_id.to_owned(), false);
        Registration::Added
    }

    pub fn contains(&self, voter_id: &str) -> bool {
        self.0.contains_key(voter_id)
    }

    /// `None` if the voter is not registered.
    pub fn has_voted(&self, voter_id: &str) -> Option<bool> {
        self.0.get(voter_id).copied()
    }

    /// Flag a voter as having voted. Unknown voters are left alone.
    pub(crate) fn mark_voted(&mut self, voter_id: &str) {
        if let Some(voted) = self.0.get_mut(voter_id) {
            *voted = true;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(id, voted)| (id.as_str(), *voted))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

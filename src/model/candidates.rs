use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::{CandidateId, Registration, Role};

/// Candidates standing for each role, in the order they were registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateRegistry(IndexMap<Role, Vec<CandidateId>>);

impl CandidateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` under `role`. The role is created if unseen, even if
    /// the registration turns out to be a duplicate.
    pub fn add(&mut self, name: &str, role: &str) -> Registration {
        let candidates = self.0.entry(role.to_owned()).or_default();
        if candidates.iter().any(|c| c == name) {
            return Registration::AlreadyPresent;
        }
        candidates.push(name.to_owned());
        Registration::Added
    }

    /// Is `name` standing for `role`?
    pub fn contains(&self, role: &str, name: &str) -> bool {
        self.get(role)
            .map(|candidates| candidates.iter().any(|c| c == name))
            .unwrap_or(false)
    }

    /// Candidates for a role, if the role exists.
    pub fn get(&self, role: &str) -> Option<&[CandidateId]> {
        self.0.get(role).map(Vec::as_slice)
    }

    /// Roles in the order they were first seen.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CandidateId])> {
        self.0.iter().map(|(role, c)| (role.as_str(), c.as_slice()))
    }

    /// Number of roles.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

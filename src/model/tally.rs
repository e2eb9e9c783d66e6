use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::{CandidateId, Role};

/// Vote counts per role and candidate. Entries are created lazily by the
/// first vote for a (role, candidate) pair and never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tally(IndexMap<Role, IndexMap<CandidateId, u64>>);

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one vote. The caller is responsible for checking the candidate
    /// actually stands for the role.
    pub(crate) fn record(&mut self, role: &str, candidate: &str) {
        *self
            .0
            .entry(role.to_owned())
            .or_default()
            .entry(candidate.to_owned())
            .or_insert(0) += 1;
    }

    /// Votes for a candidate; zero if none have been recorded.
    pub fn count(&self, role: &str, candidate: &str) -> u64 {
        self.0
            .get(role)
            .and_then(|counts| counts.get(candidate))
            .copied()
            .unwrap_or(0)
    }

    /// Roles in the order they received their first vote.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of roles with a tally.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build the results report. Within each role candidates are ordered by
    /// descending vote count; ties stay in first-vote order.
    pub fn report(&self) -> ResultsReport {
        let positions = self
            .0
            .iter()
            .map(|(role, counts)| {
                let mut standings: Vec<Standing> = counts
                    .iter()
                    .map(|(candidate, votes)| Standing {
                        candidate: candidate.clone(),
                        votes: *votes,
                    })
                    .collect();
                // `sort_by` is stable.
                standings.sort_by(|a, b| b.votes.cmp(&a.votes));
                PositionResults {
                    role: role.clone(),
                    standings,
                }
            })
            .collect();
        ResultsReport { positions }
    }
}

/// A candidate's vote count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub candidate: CandidateId,
    pub votes: u64,
}

/// Standings for a single role, best first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionResults {
    pub role: Role,
    pub standings: Vec<Standing>,
}

/// Results for every role that has received votes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsReport {
    pub positions: Vec<PositionResults>,
}

impl Display for ResultsReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "===== FINAL ELECTION RESULTS =====")?;
        if self.positions.is_empty() {
            return writeln!(f, "No votes have been cast yet!");
        }
        for position in &self.positions {
            writeln!(f)?;
            writeln!(f, "Position: {}", position.role)?;
            for standing in &position.standings {
                writeln!(f, "   {}: {} votes", standing.candidate, standing.votes)?;
            }
        }
        Ok(())
    }
}

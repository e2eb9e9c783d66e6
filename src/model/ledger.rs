use std::fmt::{Display, Formatter};

use serde::{
    de::{IgnoredAny, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use thiserror::Error;

use crate::model::{
    candidates::CandidateRegistry, tally::ResultsReport, tally::Tally, voters::VoterRegistry,
    CandidateId, Registration, Role, VoterId,
};

/// Reasons a vote can be refused. A refused vote never changes the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoteError {
    #[error("Voter {voter_id} is not registered.")]
    NotRegistered { voter_id: VoterId },
    #[error("Voter {voter_id} has already cast a vote.")]
    AlreadyVoted { voter_id: VoterId },
    /// Either the role does not exist or the candidate is not standing for it.
    #[error("Invalid candidate or position: {candidate} for {role}.")]
    InvalidCandidate { role: Role, candidate: CandidateId },
}

/// Confirmation of a recorded vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteReceipt {
    pub role: Role,
    pub candidate: CandidateId,
}

impl Display for VoteReceipt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vote recorded successfully for {} as {}!",
            self.candidate, self.role
        )
    }
}

/// The complete state of one election: who is standing, who may vote, and
/// the votes cast so far.
///
/// Every voter gets exactly one vote across the whole election, not one per
/// role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ElectionLedger {
    pub(crate) candidates: CandidateRegistry,
    pub(crate) voters: VoterRegistry,
    pub(crate) results: Tally,
}

impl ElectionLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a candidate for a role. Duplicates are reported and ignored.
    pub fn add_candidate(&mut self, name: &str, role: &str) -> Registration {
        let registration = self.candidates.add(name, role);
        match registration {
            Registration::Added => debug!("Added candidate {name} for {role}"),
            Registration::AlreadyPresent => warn!("{name} is already listed for {role}."),
        }
        registration
    }

    /// Register a voter. Duplicates are reported and ignored.
    pub fn register_voter(&mut self, student_id: &str) -> Registration {
        let registration = self.voters.register(student_id);
        match registration {
            Registration::Added => debug!("Registered voter {student_id}"),
            Registration::AlreadyPresent => warn!("Voter {student_id} already registered."),
        }
        registration
    }

    /// Record a vote.
    ///
    /// Checks, in order, that the voter is registered, that they have not
    /// voted yet, and that the candidate stands for the role. Nothing is
    /// changed unless all three pass.
    pub fn cast_vote(
        &mut self,
        voter_id: &str,
        role: &str,
        candidate: &str,
    ) -> Result<VoteReceipt, VoteError> {
        match self.voters.has_voted(voter_id) {
            None => {
                return Err(VoteError::NotRegistered {
                    voter_id: voter_id.to_owned(),
                })
            }
            Some(true) => {
                return Err(VoteError::AlreadyVoted {
                    voter_id: voter_id.to_owned(),
                })
            }
            Some(false) => {}
        }

        if !self.candidates.contains(role, candidate) {
            return Err(VoteError::InvalidCandidate {
                role: role.to_owned(),
                candidate: candidate.to_owned(),
            });
        }

        self.results.record(role, candidate);
        self.voters.mark_voted(voter_id);
        debug_assert_eq!(self.voters.has_voted(voter_id), Some(true));
        info!("Recorded vote from {voter_id} for {role}");

        Ok(VoteReceipt {
            role: role.to_owned(),
            candidate: candidate.to_owned(),
        })
    }

    /// Current standings for every role that has received a vote.
    pub fn results(&self) -> ResultsReport {
        self.results.report()
    }

    /// Print the current standings to stdout.
    pub fn display_results(&self) {
        println!();
        print!("{}", self.results());
    }

    pub fn candidates(&self) -> &CandidateRegistry {
        &self.candidates
    }

    pub fn voters(&self) -> &VoterRegistry {
        &self.voters
    }

    pub fn tally(&self) -> &Tally {
        &self.results
    }
}

/// Only a JSON object is accepted. Missing fields default to empty and
/// unknown fields are ignored.
impl<'de> Deserialize<'de> for ElectionLedger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LedgerVisitor)
    }
}

struct LedgerVisitor;

impl<'de> Visitor<'de> for LedgerVisitor {
    type Value = ElectionLedger;

    fn expecting(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "an object with candidates, voters and results")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut ledger = ElectionLedger::new();
        while let Some(key) = access.next_key::<String>()? {
            match key.as_str() {
                "candidates" => ledger.candidates = access.next_value()?,
                "voters" => ledger.voters = access.next_value()?,
                "results" => ledger.results = access.next_value()?,
                _ => {
                    access.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(ledger)
    }
}

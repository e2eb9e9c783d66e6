pub mod candidates;
pub mod ledger;
pub mod tally;
pub mod voters;

pub use candidates::CandidateRegistry;
pub use ledger::{ElectionLedger, VoteError, VoteReceipt};
pub use tally::{PositionResults, ResultsReport, Standing, Tally};
pub use voters::VoterRegistry;

/// Name of a contested position, e.g. "Head Boy".
pub type Role = String;

/// Name of a candidate, unique within a role.
pub type CandidateId = String;

/// Voter identifier, e.g. a student ID. Unique across the whole election.
pub type VoterId = String;

/// Outcome of a registration. Duplicates leave the ledger unchanged.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Registration {
    Added,
    AlreadyPresent,
}

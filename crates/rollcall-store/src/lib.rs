pub mod error;
pub mod paths;
pub mod roster;

pub use roster::{RegisterOutcome, Roster, ROSTER_HEADER};

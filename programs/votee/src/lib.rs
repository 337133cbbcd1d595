// Stops Rust Analyzer complaining about missing configs
#![allow(unexpected_cfgs)]

pub mod constants;
pub mod contexts;
pub mod error;
pub mod instructions;
pub mod pda;
pub mod state;

use anchor_lang::prelude::*;

pub use contexts::*;
pub use error::*;
pub use state::*;

declare_id!("GDLtNuJu7E2zSu7Q7wC2oUVN2smPbBNAaw8jKvZdDaJ1");

/// votee: polls, candidates and one-vote-per-voter tallies
///
/// Every record lives at a program derived address:
/// - Counters at fixed seeds hand out poll and candidate ids
/// - Polls are addressed by their id, candidates by (poll id, candidate id)
/// - A voter record at (poll id, voter) is the double-vote guard
///
/// Each instruction commits all of its writes or none of them.
#[program]
pub mod votee {
    use super::*;

    /// Create the poll and registration counters (no-op if they exist)
    pub fn initialize(ctx: Context<Initialize>) -> Result<Counters> {
        instructions::initialize::handler(ctx)
    }

    /// Create a poll with the next poll id
    pub fn create_poll(
        ctx: Context<CreatePoll>,
        description: String,
        start: i64,
        end: i64,
    ) -> Result<u64> {
        instructions::create_poll::handler(ctx, description, start, end)
    }

    /// Register a candidate for an existing poll
    pub fn register_candidate(
        ctx: Context<RegisterCandidate>,
        poll_id: u64,
        name: String,
    ) -> Result<u64> {
        instructions::register_candidate::handler(ctx, poll_id, name)
    }

    /// Cast the signer's single vote in a poll
    pub fn vote(ctx: Context<Vote>, poll_id: u64, cid: u64) -> Result<VoteReceipt> {
        instructions::vote::handler(ctx, poll_id, cid)
    }
}

use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN},
    error::VoteeError,
};

// ============================================================================
// COUNTER - Monotonic identifier allocator, one per namespace
// ============================================================================

#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct Counter {
    /// Last identifier handed out (0 = none yet)
    pub count: u64,

    /// Set once by `initialize`; zeroed accounts read as uninitialized
    pub initialized: bool,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl Counter {
    pub fn initialize(&mut self, bump: u8) -> Result<()> {
        require!(!self.initialized, VoteeError::AlreadyInitialized);

        self.count = 0;
        self.initialized = true;
        self.bump = bump;
        Ok(())
    }

    /// The identifier the next allocation will return. Records created
    /// alongside an allocation are addressed by this value.
    pub fn peek_next(&self) -> Result<u64> {
        let next = self
            .count
            .checked_add(1)
            .ok_or(VoteeError::ArithmeticOverflow)?;
        Ok(next)
    }

    pub fn next_id(&mut self) -> Result<u64> {
        let id = self.peek_next()?;
        self.count = id;
        Ok(id)
    }
}

// ============================================================================
// POLL
// ============================================================================

#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct Poll {
    /// Allocated from the poll counter; 0 means the slot is empty
    pub id: u64,

    #[max_len(MAX_DESCRIPTION_LEN)]
    pub description: String,

    /// Voting opens at this unix timestamp (inclusive)
    pub start: i64,

    /// Voting closes at this unix timestamp (inclusive)
    pub end: i64,

    pub creator: Pubkey,

    /// Number of candidates registered against this poll
    pub candidates: u64,

    pub bump: u8,
}

impl Poll {
    /// Fills an empty poll slot. `start < end` is not checked here; a poll
    /// with an empty window never accepts votes.
    pub fn open(
        &mut self,
        id: u64,
        description: String,
        start: i64,
        end: i64,
        creator: Pubkey,
        bump: u8,
    ) -> Result<()> {
        require!(self.id == 0, VoteeError::PollAlreadyExists);
        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            VoteeError::DescriptionTooLong
        );

        self.id = id;
        self.description = description;
        self.start = start;
        self.end = end;
        self.creator = creator;
        self.candidates = 0;
        self.bump = bump;
        Ok(())
    }

    /// Checks that this record is the poll `poll_id` was derived for.
    pub fn ensure_at(&self, poll_id: u64) -> Result<()> {
        require!(self.id != 0, VoteeError::PollNotFound);
        require_eq!(self.id, poll_id, VoteeError::CorruptedState);
        Ok(())
    }

    pub fn is_active(&self, now: i64) -> bool {
        self.start <= now && now <= self.end
    }

    pub fn add_candidate(&mut self) -> Result<()> {
        self.candidates = self
            .candidates
            .checked_add(1)
            .ok_or(VoteeError::ArithmeticOverflow)?;
        Ok(())
    }
}

// ============================================================================
// CANDIDATE
// ============================================================================

#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub poll_id: u64,

    /// Allocated from the global registrations counter
    pub cid: u64,

    #[max_len(MAX_NAME_LEN)]
    pub name: String,

    pub votes: u64,

    pub has_registered: bool,

    pub bump: u8,
}

impl Candidate {
    pub fn register(&mut self, poll_id: u64, cid: u64, name: String, bump: u8) -> Result<()> {
        require!(!self.has_registered, VoteeError::CandidateAlreadyExists);
        require!(name.len() <= MAX_NAME_LEN, VoteeError::NameTooLong);

        self.poll_id = poll_id;
        self.cid = cid;
        self.name = name;
        self.votes = 0;
        self.has_registered = true;
        self.bump = bump;
        Ok(())
    }

    /// Checks that this record is the candidate `(poll_id, cid)` was derived for.
    pub fn ensure_at(&self, poll_id: u64, cid: u64) -> Result<()> {
        require!(self.has_registered, VoteeError::CandidateNotFound);
        require!(
            self.poll_id == poll_id && self.cid == cid,
            VoteeError::CorruptedState
        );
        Ok(())
    }

    pub fn add_vote(&mut self) -> Result<u64> {
        self.votes = self
            .votes
            .checked_add(1)
            .ok_or(VoteeError::ArithmeticOverflow)?;
        Ok(self.votes)
    }
}

// ============================================================================
// VOTER - Existence of this record is the double-vote guard
// ============================================================================

#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct Voter {
    pub poll_id: u64,

    pub voter: Pubkey,

    /// Candidate this voter chose
    pub cid: u64,

    pub has_voted: bool,

    pub bump: u8,
}

impl Voter {
    pub fn record(&mut self, poll_id: u64, voter: Pubkey, cid: u64, bump: u8) -> Result<()> {
        require!(!self.has_voted, VoteeError::AlreadyVoted);

        self.poll_id = poll_id;
        self.voter = voter;
        self.cid = cid;
        self.has_voted = true;
        self.bump = bump;
        Ok(())
    }
}

// ============================================================================
// RETURN DATA
// ============================================================================

/// Returned from `initialize`: both counters as they stand after the call.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counters {
    pub polls: u64,
    pub registrations: u64,
}

/// Returned from `vote` through Anchor return data.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct VoteReceipt {
    pub poll_id: u64,
    pub cid: u64,
    pub voter: Pubkey,
    /// Candidate's tally after this vote
    pub votes: u64,
}

// ============================================================================
// EVENTS - Emitted for off-chain indexing
// ============================================================================

#[event]
pub struct PollCreated {
    pub poll_id: u64,
    pub creator: Pubkey,
    pub start: i64,
    pub end: i64,
    pub timestamp: i64,
}

#[event]
pub struct CandidateRegistered {
    pub poll_id: u64,
    pub cid: u64,
    pub name: String,
    pub timestamp: i64,
}

#[event]
pub struct VoteCast {
    pub poll_id: u64,
    pub cid: u64,
    pub voter: Pubkey,
    pub votes: u64,
    pub timestamp: i64,
}

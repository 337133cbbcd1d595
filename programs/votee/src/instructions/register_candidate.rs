use anchor_lang::prelude::*;

use crate::{
    contexts::RegisterCandidate,
    error::VoteeError,
    instructions::{load, store},
    state::{Candidate, CandidateRegistered, Counter, Poll},
};

/// Allocates the next registration id and fills `candidate` with it.
///
/// Registration ids come from one counter shared by every poll, so the ids
/// seen within a single poll are increasing but not contiguous.
pub fn register(
    poll: &mut Poll,
    registrations: &mut Counter,
    candidate: &mut Candidate,
    poll_id: u64,
    name: String,
    bump: u8,
) -> Result<u64> {
    poll.ensure_at(poll_id)?;

    let cid = registrations.next_id()?;
    candidate.register(poll_id, cid, name, bump)?;
    poll.add_candidate()?;

    Ok(cid)
}

pub fn handler(ctx: Context<RegisterCandidate>, poll_id: u64, name: String) -> Result<u64> {
    let clock = Clock::get()?;
    let mut poll: Poll = load(&ctx.accounts.poll, VoteeError::PollNotFound)?;

    let cid = register(
        &mut poll,
        &mut ctx.accounts.registrations,
        &mut ctx.accounts.candidate,
        poll_id,
        name,
        ctx.bumps.candidate,
    )?;
    store(&ctx.accounts.poll, &poll)?;

    emit!(CandidateRegistered {
        poll_id,
        cid,
        name: ctx.accounts.candidate.name.clone(),
        timestamp: clock.unix_timestamp,
    });

    msg!("✅ Candidate {} registered for poll {}", cid, poll_id);
    msg!("   Candidates in poll: {}", poll.candidates);

    Ok(cid)
}

use anchor_lang::prelude::*;

use crate::{
    contexts::Vote,
    error::VoteeError,
    instructions::{load, store},
    state::{Candidate, Poll, VoteCast, VoteReceipt, Voter},
};

/// Records `voter_key`'s vote for `(poll_id, cid)`.
///
/// Checks run in a fixed order: poll, candidate, voter record, then the
/// voting window, so a repeat vote is `AlreadyVoted` even after the poll
/// closes. The voter record and the tally increment are written together;
/// neither is observable without the other once the instruction commits.
#[allow(clippy::too_many_arguments)]
pub fn cast(
    poll: &Poll,
    candidate: &mut Candidate,
    voter: &mut Voter,
    poll_id: u64,
    cid: u64,
    voter_key: Pubkey,
    now: i64,
    bump: u8,
) -> Result<VoteReceipt> {
    poll.ensure_at(poll_id)?;
    candidate.ensure_at(poll_id, cid)?;
    require!(!voter.has_voted, VoteeError::AlreadyVoted);
    require!(poll.is_active(now), VoteeError::PollNotActive);

    voter.record(poll_id, voter_key, cid, bump)?;
    let votes = candidate.add_vote()?;

    Ok(VoteReceipt {
        poll_id,
        cid,
        voter: voter_key,
        votes,
    })
}

pub fn handler(ctx: Context<Vote>, poll_id: u64, cid: u64) -> Result<VoteReceipt> {
    let clock = Clock::get()?;
    let poll: Poll = load(&ctx.accounts.poll, VoteeError::PollNotFound)?;
    let mut candidate: Candidate = load(&ctx.accounts.candidate, VoteeError::CandidateNotFound)?;

    let receipt = cast(
        &poll,
        &mut candidate,
        &mut ctx.accounts.voter,
        poll_id,
        cid,
        ctx.accounts.user.key(),
        clock.unix_timestamp,
        ctx.bumps.voter,
    )?;
    store(&ctx.accounts.candidate, &candidate)?;

    emit!(VoteCast {
        poll_id,
        cid,
        voter: receipt.voter,
        votes: receipt.votes,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "✅ Vote recorded for candidate {} in poll {} (votes: {})",
        cid,
        poll_id,
        receipt.votes
    );

    Ok(receipt)
}

use anchor_lang::prelude::*;

use crate::{
    constants::MAX_DESCRIPTION_LEN,
    contexts::CreatePoll,
    error::VoteeError,
    state::{Counter, Poll, PollCreated},
};

/// Allocates the next poll id and fills `poll` with it. The description is
/// validated before the id is allocated.
pub fn create(
    counter: &mut Counter,
    poll: &mut Poll,
    description: String,
    start: i64,
    end: i64,
    creator: Pubkey,
    bump: u8,
) -> Result<u64> {
    require!(
        description.len() <= MAX_DESCRIPTION_LEN,
        VoteeError::DescriptionTooLong
    );

    let poll_id = counter.next_id()?;
    poll.open(poll_id, description, start, end, creator, bump)?;
    Ok(poll_id)
}

pub fn handler(
    ctx: Context<CreatePoll>,
    description: String,
    start: i64,
    end: i64,
) -> Result<u64> {
    let clock = Clock::get()?;
    let creator = ctx.accounts.user.key();

    let poll_id = create(
        &mut ctx.accounts.counter,
        &mut ctx.accounts.poll,
        description,
        start,
        end,
        creator,
        ctx.bumps.poll,
    )?;

    emit!(PollCreated {
        poll_id,
        creator,
        start,
        end,
        timestamp: clock.unix_timestamp,
    });

    msg!("✅ Poll {} created", poll_id);
    msg!("   Window: {} → {}", start, end);

    Ok(poll_id)
}

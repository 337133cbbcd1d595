use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

/// Create both identifier counters (repeat calls are a no-op)
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    /// Poll counter PDA
    #[account(
        init_if_needed,
        payer = user,
        space = ANCHOR_DISCRIMINATOR_SIZE + Counter::INIT_SPACE,
        seeds = [COUNTER_SEED],
        bump
    )]
    pub counter: Account<'info, Counter>,

    /// Candidate registration counter PDA
    #[account(
        init_if_needed,
        payer = user,
        space = ANCHOR_DISCRIMINATOR_SIZE + Counter::INIT_SPACE,
        seeds = [REGISTRATIONS_SEED],
        bump
    )]
    pub registrations: Account<'info, Counter>,

    pub system_program: Program<'info, System>,
}

/// Create a poll at the address of the next poll id
#[derive(Accounts)]
pub struct CreatePoll<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [COUNTER_SEED],
        bump = counter.bump,
    )]
    pub counter: Account<'info, Counter>,

    /// Derived from the id the counter is about to hand out; a client that
    /// read a stale count fails the seed check here
    #[account(
        init_if_needed,
        payer = user,
        space = ANCHOR_DISCRIMINATOR_SIZE + Poll::INIT_SPACE,
        seeds = [counter.count.wrapping_add(1).to_le_bytes().as_ref()],
        bump
    )]
    pub poll: Account<'info, Poll>,

    pub system_program: Program<'info, System>,
}

/// Register a candidate against an existing poll
#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct RegisterCandidate<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    /// CHECK: seeds pin the address; the handler loads it as a `Poll` so an
    /// empty account surfaces as `PollNotFound`
    #[account(
        mut,
        seeds = [poll_id.to_le_bytes().as_ref()],
        bump
    )]
    pub poll: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [REGISTRATIONS_SEED],
        bump = registrations.bump,
    )]
    pub registrations: Account<'info, Counter>,

    /// Derived from (poll id, next registration id)
    #[account(
        init_if_needed,
        payer = user,
        space = ANCHOR_DISCRIMINATOR_SIZE + Candidate::INIT_SPACE,
        seeds = [
            poll_id.to_le_bytes().as_ref(),
            registrations.count.wrapping_add(1).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub candidate: Account<'info, Candidate>,

    pub system_program: Program<'info, System>,
}

/// Cast one vote; the voter PDA is the double-vote guard
#[derive(Accounts)]
#[instruction(poll_id: u64, cid: u64)]
pub struct Vote<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    /// CHECK: loaded as a `Poll` by the handler
    #[account(
        seeds = [poll_id.to_le_bytes().as_ref()],
        bump
    )]
    pub poll: UncheckedAccount<'info>,

    /// CHECK: loaded as a `Candidate` by the handler
    #[account(
        mut,
        seeds = [poll_id.to_le_bytes().as_ref(), cid.to_le_bytes().as_ref()],
        bump
    )]
    pub candidate: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = user,
        space = ANCHOR_DISCRIMINATOR_SIZE + Voter::INIT_SPACE,
        seeds = [VOTER_SEED, poll_id.to_le_bytes().as_ref(), user.key().as_ref()],
        bump
    )]
    pub voter: Account<'info, Voter>,

    pub system_program: Program<'info, System>,
}

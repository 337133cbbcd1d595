use anchor_lang::prelude::*;

use crate::{
    contexts::Initialize,
    state::{Counter, Counters},
};

/// Initializes `counter` unless it already is. Returns whether it was created.
pub fn bootstrap(counter: &mut Counter, bump: u8) -> Result<bool> {
    if counter.initialized {
        return Ok(false);
    }
    counter.initialize(bump)?;
    Ok(true)
}

pub fn handler(ctx: Context<Initialize>) -> Result<Counters> {
    let counter_created = bootstrap(&mut ctx.accounts.counter, ctx.bumps.counter)?;
    let registrations_created =
        bootstrap(&mut ctx.accounts.registrations, ctx.bumps.registrations)?;

    let counters = Counters {
        polls: ctx.accounts.counter.count,
        registrations: ctx.accounts.registrations.count,
    };

    if !counter_created && !registrations_created {
        msg!(
            "Counters already initialized (polls: {}, registrations: {})",
            counters.polls,
            counters.registrations
        );
        return Ok(counters);
    }

    msg!("✅ votee counters initialized!");
    msg!("   Poll counter: {}", ctx.accounts.counter.key());
    msg!("   Registrations: {}", ctx.accounts.registrations.key());

    Ok(counters)
}

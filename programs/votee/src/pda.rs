//! Program derived addresses for every record the program owns.
//!
//! The seed layouts here must stay in step with the `seeds = [...]`
//! constraints in `contexts.rs`; the runtime rejects any account whose key
//! does not re-derive from them.

use anchor_lang::prelude::*;

use crate::{
    constants::{COUNTER_SEED, REGISTRATIONS_SEED, VOTER_SEED},
    error::VoteeError,
};

/// Finds the canonical address and bump for `seeds` under `program_id`.
pub fn derive(seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    let found = Pubkey::try_find_program_address(seeds, program_id)
        .ok_or(VoteeError::DerivationExhausted)?;
    Ok(found)
}

pub fn counter_address(program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive(&[COUNTER_SEED], program_id)
}

pub fn registrations_address(program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive(&[REGISTRATIONS_SEED], program_id)
}

pub fn poll_address(poll_id: u64, program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive(&[&poll_id.to_le_bytes()], program_id)
}

pub fn candidate_address(poll_id: u64, cid: u64, program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive(&[&poll_id.to_le_bytes(), &cid.to_le_bytes()], program_id)
}

pub fn voter_address(poll_id: u64, voter: &Pubkey, program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive(
        &[VOTER_SEED, &poll_id.to_le_bytes(), voter.as_ref()],
        program_id,
    )
}

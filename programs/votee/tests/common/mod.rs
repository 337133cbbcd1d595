//! In-memory stand-in for the runtime the program executes on.
//!
//! Accounts are keyed by their program derived address exactly as the
//! `seeds` constraints would resolve them, freshly created accounts start
//! zeroed (`Default`), and every instruction runs against a staged copy that
//! is only committed when it returns `Ok`.

#![allow(dead_code)]

use std::collections::BTreeMap;

use anchor_lang::{error::ErrorCode, prelude::*};
use votee::{
    instructions::{create_poll, initialize, register_candidate, vote},
    pda, Candidate, Counter, Counters, Poll, VoteReceipt, VoteeError, Voter,
};

pub const NOW: i64 = 1_700_000_000;
pub const DAY: i64 = 86_400;

#[derive(Clone, Debug)]
pub struct Ledger {
    pub program_id: Pubkey,
    /// Unix timestamp handed to instructions that read the clock
    pub now: i64,
    counters: BTreeMap<Pubkey, Counter>,
    polls: BTreeMap<Pubkey, Poll>,
    candidates: BTreeMap<Pubkey, Candidate>,
    voters: BTreeMap<Pubkey, Voter>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            program_id: votee::ID,
            now: NOW,
            counters: BTreeMap::new(),
            polls: BTreeMap::new(),
            candidates: BTreeMap::new(),
            voters: BTreeMap::new(),
        }
    }

    /// Runs `ix` against a staged copy and keeps its writes only on success.
    fn transact<T>(&mut self, ix: impl FnOnce(&mut Ledger) -> Result<T>) -> Result<T> {
        let mut staged = self.clone();
        let out = ix(&mut staged)?;
        *self = staged;
        Ok(out)
    }

    fn existing_counter(&self, key: &Pubkey) -> Result<Counter> {
        self.counters
            .get(key)
            .cloned()
            .ok_or_else(|| ErrorCode::AccountNotInitialized.into())
    }

    pub fn initialize(&mut self) -> Result<Counters> {
        self.transact(|l| {
            let (counter_key, counter_bump) = pda::counter_address(&l.program_id)?;
            let (registrations_key, registrations_bump) =
                pda::registrations_address(&l.program_id)?;

            let counter = l.counters.entry(counter_key).or_default();
            initialize::bootstrap(counter, counter_bump)?;
            let polls = counter.count;

            let registrations = l.counters.entry(registrations_key).or_default();
            initialize::bootstrap(registrations, registrations_bump)?;

            Ok(Counters {
                polls,
                registrations: registrations.count,
            })
        })
    }

    pub fn create_poll(
        &mut self,
        creator: Pubkey,
        description: &str,
        start: i64,
        end: i64,
    ) -> Result<u64> {
        self.transact(|l| {
            let (counter_key, _) = pda::counter_address(&l.program_id)?;
            let mut counter = l.existing_counter(&counter_key)?;

            let (poll_key, bump) = pda::poll_address(counter.peek_next()?, &l.program_id)?;
            let mut poll = l.polls.get(&poll_key).cloned().unwrap_or_default();

            let poll_id = create_poll::create(
                &mut counter,
                &mut poll,
                description.to_string(),
                start,
                end,
                creator,
                bump,
            )?;

            l.counters.insert(counter_key, counter);
            l.polls.insert(poll_key, poll);
            Ok(poll_id)
        })
    }

    pub fn register_candidate(&mut self, poll_id: u64, name: &str) -> Result<u64> {
        self.transact(|l| {
            let (poll_key, _) = pda::poll_address(poll_id, &l.program_id)?;
            let mut poll = l
                .polls
                .get(&poll_key)
                .cloned()
                .ok_or(VoteeError::PollNotFound)?;

            let (registrations_key, _) = pda::registrations_address(&l.program_id)?;
            let mut registrations = l.existing_counter(&registrations_key)?;

            let (candidate_key, bump) =
                pda::candidate_address(poll_id, registrations.peek_next()?, &l.program_id)?;
            let mut candidate = l.candidates.get(&candidate_key).cloned().unwrap_or_default();

            let cid = register_candidate::register(
                &mut poll,
                &mut registrations,
                &mut candidate,
                poll_id,
                name.to_string(),
                bump,
            )?;

            l.polls.insert(poll_key, poll);
            l.counters.insert(registrations_key, registrations);
            l.candidates.insert(candidate_key, candidate);
            Ok(cid)
        })
    }

    pub fn vote(&mut self, voter: Pubkey, poll_id: u64, cid: u64) -> Result<VoteReceipt> {
        self.transact(|l| {
            let (poll_key, _) = pda::poll_address(poll_id, &l.program_id)?;
            let poll = l
                .polls
                .get(&poll_key)
                .cloned()
                .ok_or(VoteeError::PollNotFound)?;

            let (candidate_key, _) = pda::candidate_address(poll_id, cid, &l.program_id)?;
            let mut candidate = l
                .candidates
                .get(&candidate_key)
                .cloned()
                .ok_or(VoteeError::CandidateNotFound)?;

            let (voter_key, bump) = pda::voter_address(poll_id, &voter, &l.program_id)?;
            let mut record = l.voters.get(&voter_key).cloned().unwrap_or_default();

            let receipt = vote::cast(
                &poll,
                &mut candidate,
                &mut record,
                poll_id,
                cid,
                voter,
                l.now,
                bump,
            )?;

            l.candidates.insert(candidate_key, candidate);
            l.voters.insert(voter_key, record);
            Ok(receipt)
        })
    }

    pub fn counter(&self) -> Option<Counter> {
        let (key, _) = pda::counter_address(&self.program_id).ok()?;
        self.counters.get(&key).cloned()
    }

    pub fn registrations(&self) -> Option<Counter> {
        let (key, _) = pda::registrations_address(&self.program_id).ok()?;
        self.counters.get(&key).cloned()
    }

    pub fn poll(&self, poll_id: u64) -> Option<Poll> {
        let (key, _) = pda::poll_address(poll_id, &self.program_id).ok()?;
        self.polls.get(&key).cloned()
    }

    pub fn candidate(&self, poll_id: u64, cid: u64) -> Option<Candidate> {
        let (key, _) = pda::candidate_address(poll_id, cid, &self.program_id).ok()?;
        self.candidates.get(&key).cloned()
    }

    pub fn voter(&self, poll_id: u64, voter: &Pubkey) -> Option<Voter> {
        let (key, _) = pda::voter_address(poll_id, voter, &self.program_id).ok()?;
        self.voters.get(&key).cloned()
    }

    pub fn candidates_in(&self, poll_id: u64) -> Vec<Candidate> {
        self.candidates
            .values()
            .filter(|c| c.poll_id == poll_id)
            .cloned()
            .collect()
    }

    pub fn voters_in(&self, poll_id: u64) -> Vec<Voter> {
        self.voters
            .values()
            .filter(|v| v.poll_id == poll_id)
            .cloned()
            .collect()
    }

    pub fn candidate_accounts(&self) -> usize {
        self.candidates.len()
    }
}

/// Ledger with counters initialized and one open poll (id 1) that has one
/// candidate (id 1).
pub fn seeded() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.initialize().unwrap();
    let creator = Pubkey::new_unique();
    let poll_id = ledger
        .create_poll(creator, "Test Poll #1", NOW, NOW + DAY)
        .unwrap();
    ledger.register_candidate(poll_id, "Candidate #1").unwrap();
    ledger
}

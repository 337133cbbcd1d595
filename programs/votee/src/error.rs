use anchor_lang::prelude::*;

#[error_code]
pub enum VoteeError {
    #[msg("Counters have already been initialized")]
    AlreadyInitialized,

    #[msg("No valid program address exists for the given seeds")]
    DerivationExhausted,

    #[msg("A poll already exists at the derived address")]
    PollAlreadyExists,

    #[msg("Poll does not exist")]
    PollNotFound,

    #[msg("A candidate already exists at the derived address")]
    CandidateAlreadyExists,

    #[msg("Candidate is not registered for this poll")]
    CandidateNotFound,

    #[msg("Voter has already voted in this poll")]
    AlreadyVoted,

    #[msg("Stored record does not match the address it was derived from")]
    CorruptedState,

    #[msg("Poll is not accepting votes at this time")]
    PollNotActive,

    #[msg("Poll description exceeds the maximum length")]
    DescriptionTooLong,

    #[msg("Candidate name exceeds the maximum length")]
    NameTooLong,

    #[msg("Arithmetic overflow in counter")]
    ArithmeticOverflow,
}

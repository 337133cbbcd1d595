// ============================================================================
// SEEDS FOR PDA DERIVATION
// ============================================================================

/// Poll counter singleton
pub const COUNTER_SEED: &[u8] = b"counter";

/// Candidate registration counter singleton
pub const REGISTRATIONS_SEED: &[u8] = b"registrations";

/// Prefix for per-(poll, voter) records
pub const VOTER_SEED: &[u8] = b"voter";

// ============================================================================
// ACCOUNT LAYOUT
// ============================================================================

/// Bytes Anchor prepends to every account for its type discriminator
pub const ANCHOR_DISCRIMINATOR_SIZE: usize = 8;

/// Maximum poll description length in bytes
pub const MAX_DESCRIPTION_LEN: usize = 280;

/// Maximum candidate name length in bytes
pub const MAX_NAME_LEN: usize = 64;

pub mod create_poll;
pub mod initialize;
pub mod register_candidate;
pub mod vote;

use anchor_lang::prelude::*;

use crate::error::VoteeError;

/// Reads a program-owned record from an account whose address was already
/// checked by its seeds. An account that was never created maps to `missing`.
pub(crate) fn load<T>(info: &AccountInfo, missing: VoteeError) -> Result<T>
where
    T: AccountDeserialize + Owner,
{
    if info.data_is_empty() {
        return Err(missing.into());
    }
    require_keys_eq!(
        *info.owner,
        T::owner(),
        anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram
    );

    let data = info.try_borrow_data()?;
    let mut bytes: &[u8] = &data[..];
    let record = T::try_deserialize(&mut bytes)?;
    Ok(record)
}

/// Writes a record loaded with [`load`] back to its account.
pub(crate) fn store<T>(info: &AccountInfo, record: &T) -> Result<()>
where
    T: AccountSerialize,
{
    let mut data = info.try_borrow_mut_data()?;
    let mut dst: &mut [u8] = &mut data[..];
    record.try_serialize(&mut dst)
}

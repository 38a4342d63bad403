use anchor_lang::prelude::*;

use crate::error::LotteryError;
use crate::machine::Transfer;

/// Lamports held by the lottery above its rent-exempt minimum.
pub fn pot(lottery: &AccountInfo) -> Result<u64> {
    lamports_above_rent(lottery, &Rent::get()?)
}

fn lamports_above_rent(account: &AccountInfo, rent: &Rent) -> Result<u64> {
    account
        .lamports()
        .checked_sub(rent.minimum_balance(account.data_len()))
        .ok_or(error!(LotteryError::InvalidCalculation))
}

/// Pays out `transfers` from the program-owned `vault`. Every recipient must
/// be among `recipients` and must not be the vault itself.
pub fn settle<'info>(
    vault: &AccountInfo<'info>,
    recipients: &[AccountInfo<'info>],
    transfers: &[Transfer],
) -> Result<()> {
    for transfer in transfers.iter().filter(|t| t.lamports > 0) {
        require_keys_neq!(*vault.key, transfer.to, LotteryError::RecipientMismatch);
        let recipient = recipients
            .iter()
            .find(|info| *info.key == transfer.to)
            .ok_or(LotteryError::RecipientMismatch)?;

        let vault_lamports = vault
            .lamports()
            .checked_sub(transfer.lamports)
            .ok_or(LotteryError::InvalidCalculation)?;
        let recipient_lamports = recipient
            .lamports()
            .checked_add(transfer.lamports)
            .ok_or(LotteryError::InvalidCalculation)?;

        **vault.try_borrow_mut_lamports()? = vault_lamports;
        **recipient.try_borrow_mut_lamports()? = recipient_lamports;

        msg!("Transferred {} lamports to {}", transfer.lamports, transfer.to);
    }

    Ok(())
}

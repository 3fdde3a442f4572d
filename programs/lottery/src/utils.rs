use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Find the drawn winner among the accounts passed alongside `pick_winner`.
/// The account has to be writable to receive the pot.
pub fn find_payee<'a, 'info>(
    accounts: &'a [AccountInfo<'info>],
    winner: &Pubkey,
) -> Result<&'a AccountInfo<'info>> {
    accounts
        .iter()
        .find(|account| account.key == winner && account.is_writable)
        .ok_or_else(|| error!(ErrorCode::WinnerAccountMissing))
}

/// Everything the lottery holds above its rent-exempt reserve.
///
/// That covers lamports sent to the account directly, not just stakes,
/// but it must never fall short of the stakes recorded in `pot_amount`.
pub fn payout_amount(lamports: u64, reserve: u64, pot_amount: u64) -> Result<u64> {
    let surplus = lamports.saturating_sub(reserve);
    require!(surplus >= pot_amount, ErrorCode::PotMismatch);
    Ok(surplus)
}

/// Move lamports out of the program-owned lottery account.
pub fn transfer_from_lottery<'info>(
    lottery: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let lottery_balance = lottery
        .lamports()
        .checked_sub(amount)
        .ok_or(ErrorCode::MathOverflow)?;
    let to_balance = to
        .lamports()
        .checked_add(amount)
        .ok_or(ErrorCode::MathOverflow)?;

    **lottery.try_borrow_mut_lamports()? = lottery_balance;
    **to.try_borrow_mut_lamports()? = to_balance;
    Ok(())
}

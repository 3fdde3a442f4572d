use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::entropy::ClockEntropy;
use crate::events::WinnerPicked;
use crate::state::Lottery;
use crate::utils::{find_payee, payout_amount, transfer_from_lottery};

/// Accounts required to draw the winner and pay out the pot.
///
/// The winner is only known once the draw runs, so the client passes the
/// distinct player accounts of the round as writable remaining accounts.
#[derive(Accounts)]
pub struct PickWinner<'info> {
    /// Must be the lottery manager.
    pub manager: Signer<'info>,

    /// The main lottery state account.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,
}

/// Draws a winner, pays out the whole pot and opens the next round.
///
/// Steps:
/// 1. Check the caller is the manager and the round has players.
/// 2. Derive the winning slot from clock entropy.
/// 3. Move everything above the rent reserve from the lottery account to the winner.
/// 4. Record the winner and clear the round.
///
/// The runtime rolls back every step if any of them fails.
pub fn process_pick_winner<'info>(ctx: Context<'_, '_, 'info, 'info, PickWinner<'info>>) -> Result<()> {
    let clock = Clock::get()?;
    let caller = ctx.accounts.manager.key();

    let entropy = ClockEntropy::new(&clock, caller, &ctx.accounts.lottery.players);
    let draw = ctx.accounts.lottery.draw(&caller, &entropy)?;

    msg!("Current slot: {}", clock.slot);
    msg!("Players: {}", ctx.accounts.lottery.players.len());
    msg!("Winning index: {}", draw.index);
    msg!("Winner: {}", draw.winner);

    let winner = find_payee(ctx.remaining_accounts, &draw.winner)?;

    let lottery_info = ctx.accounts.lottery.to_account_info();
    let reserve = Rent::get()?.minimum_balance(lottery_info.data_len());
    let payout = payout_amount(lottery_info.lamports(), reserve, draw.pot_amount)?;

    msg!("Payout: {} (staked: {})", payout, draw.pot_amount);
    transfer_from_lottery(&lottery_info, winner, payout)?;

    let lottery = &mut ctx.accounts.lottery;
    lottery.close_round(&draw);

    emit!(WinnerPicked {
        round: lottery.round,
        winner: draw.winner,
        winning_index: draw.index as u32,
        players: entropy.player_count as u32,
        payout,
    });

    Ok(())
}

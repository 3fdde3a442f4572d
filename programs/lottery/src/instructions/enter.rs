use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::LOTTERY_SEED;
use crate::events::PlayerEntered;
use crate::state::Lottery;

/// Accounts required to enter the current round.
#[derive(Accounts)]
pub struct Enter<'info> {
    /// The account staking lamports.
    #[account(mut)]
    pub player: Signer<'info>,

    /// Lottery state account, receives the stake.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// System program for the lamports transfer.
    pub system_program: Program<'info, System>,
}

/// Enters the caller into the current round.
///
/// Steps performed:
/// 1. Check the stake and record the entry.
/// 2. Transfer the stake from the player to the lottery account.
///
/// # Arguments
/// * `ctx` - Context containing Enter accounts
/// * `amount` - Stake in lamports, must exceed the lottery's minimum stake
pub fn process_enter(ctx: Context<Enter>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    ctx.accounts.lottery.record_entry(player, amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.lottery.to_account_info(),
            },
        ),
        amount,
    )?;

    let lottery = &ctx.accounts.lottery;
    msg!("Player {} entered with {} lamports", player, amount);
    msg!("Players: {}, pot: {}", lottery.players.len(), lottery.pot_amount);

    emit!(PlayerEntered {
        player,
        amount,
        players: lottery.players.len() as u32,
        pot_amount: lottery.pot_amount,
    });

    Ok(())
}

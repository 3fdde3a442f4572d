use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::state::Lottery;

/// Read-only view of the lottery. Open to any caller.
#[derive(Accounts)]
pub struct ReadLottery<'info> {
    #[account(
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,
}

/// Returns the players of the current round in entry order.
pub fn process_get_players(ctx: Context<ReadLottery>) -> Result<Vec<Pubkey>> {
    Ok(ctx.accounts.lottery.players.clone())
}

/// Returns the winner of the last completed round, if any.
pub fn process_last_winner(ctx: Context<ReadLottery>) -> Result<Option<Pubkey>> {
    Ok(ctx.accounts.lottery.last_winner)
}

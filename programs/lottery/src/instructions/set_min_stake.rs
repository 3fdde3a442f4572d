use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::events::MinStakeUpdated;
use crate::state::Lottery;

#[derive(Accounts)]
pub struct SetMinStake<'info> {
    /// Must be the lottery manager.
    pub manager: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,
}

/// Changes the entry threshold. Entries already made are unaffected.
pub fn process_set_min_stake(ctx: Context<SetMinStake>, min_stake: u64) -> Result<()> {
    let caller = ctx.accounts.manager.key();
    let old_min_stake = ctx.accounts.lottery.update_min_stake(&caller, min_stake)?;

    msg!("Minimum stake: {} -> {}", old_min_stake, min_stake);

    emit!(MinStakeUpdated {
        old_min_stake,
        new_min_stake: min_stake,
    });

    Ok(())
}

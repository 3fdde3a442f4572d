use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::events::LotteryInitialized;
use crate::state::{check_min_stake, Lottery};

/// Accounts required to create the lottery.
/// The payer becomes the manager for the lifetime of the account.
#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    /// The account paying for account creation and fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The lottery state account. It also holds the staked lamports.
    #[account(
        init,
        payer = payer,
        space = 8 + Lottery::INIT_SPACE,
        seeds = [LOTTERY_SEED],
        bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Initializes the lottery with an empty round and the payer as manager.
///
/// # Arguments
/// * `ctx` - Context holding the InitializeConfig accounts
/// * `min_stake` - Lamports a stake has to exceed to be accepted,
///   at most `MAX_MIN_STAKE`. Clients normally pass `DEFAULT_MIN_STAKE`.
pub fn process_initialize_config(ctx: Context<InitializeConfig>, min_stake: u64) -> Result<()> {
    check_min_stake(min_stake)?;

    let manager = ctx.accounts.payer.key();
    let lottery = &mut ctx.accounts.lottery;
    lottery.init(manager, min_stake, ctx.bumps.lottery);

    msg!("Lottery initialized, manager: {}", manager);
    msg!("Minimum stake: {}", min_stake);

    emit!(LotteryInitialized { manager, min_stake });

    Ok(())
}

//! Single-pot lottery.
//!
//! Players stake lamports into a program-owned account. The manager who
//! created the lottery draws a winner from a clock-derived seed, the winner
//! receives the whole pot, and the next round starts empty.

use anchor_lang::prelude::*;

pub mod constants;
pub mod entropy;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;

declare_id!("2RTh2Y4e2N421EbSnUYTKdGqDHJH7etxZb3VrWDMpNMY");

#[program]
pub mod lottery {
    use super::*;

    pub fn initialize_config(ctx: Context<InitializeConfig>, min_stake: u64) -> Result<()> {
        process_initialize_config(ctx, min_stake)
    }

    pub fn enter(ctx: Context<Enter>, amount: u64) -> Result<()> {
        process_enter(ctx, amount)
    }

    pub fn pick_winner<'info>(ctx: Context<'_, '_, 'info, 'info, PickWinner<'info>>) -> Result<()> {
        process_pick_winner(ctx)
    }

    pub fn set_min_stake(ctx: Context<SetMinStake>, min_stake: u64) -> Result<()> {
        process_set_min_stake(ctx, min_stake)
    }

    pub fn get_players(ctx: Context<ReadLottery>) -> Result<Vec<Pubkey>> {
        process_get_players(ctx)
    }

    pub fn last_winner(ctx: Context<ReadLottery>) -> Result<Option<Pubkey>> {
        process_last_winner(ctx)
    }
}

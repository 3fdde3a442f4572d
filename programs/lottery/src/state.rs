use anchor_lang::prelude::*;

use crate::constants::{MAX_MIN_STAKE, MAX_PLAYERS};
use crate::entropy::{winner_index, EntropySource};
use crate::error::ErrorCode;

#[account]
#[derive(InitSpace)]
pub struct Lottery {
    /// The identity that initialized the lottery. The only caller allowed
    /// to draw a winner or change the minimum stake.
    pub manager: Pubkey,

    /// Entries for the current round in the order they were made.
    /// The same key may appear more than once, one slot per entry.
    #[max_len(MAX_PLAYERS)]
    pub players: Vec<Pubkey>,

    /// Winner of the most recent completed round, `None` before the first draw.
    pub last_winner: Option<Pubkey>,

    /// Lamports a stake has to exceed to be accepted.
    pub min_stake: u64,

    /// Lamports staked through `enter` since the last draw.
    /// The account may hold more than this if lamports were sent to it
    /// directly; a draw pays out everything above the rent-exempt reserve.
    pub pot_amount: u64,

    /// Number of completed rounds.
    pub round: u64,

    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,
}

/// Outcome of a draw, computed before anything is paid or reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Draw {
    pub winner: Pubkey,
    pub index: usize,
    pub pot_amount: u64,
}

/// Reject thresholds above `MAX_MIN_STAKE`.
pub fn check_min_stake(min_stake: u64) -> Result<()> {
    require!(min_stake <= MAX_MIN_STAKE, ErrorCode::MinStakeTooHigh);
    Ok(())
}

impl Lottery {
    pub fn init(&mut self, manager: Pubkey, min_stake: u64, bump: u8) {
        self.manager = manager;
        self.players = Vec::new();
        self.last_winner = None;
        self.min_stake = min_stake;
        self.pot_amount = 0;
        self.round = 0;
        self.bump = bump;
    }

    /// Replace the entry threshold, returning the old one.
    pub fn update_min_stake(&mut self, caller: &Pubkey, min_stake: u64) -> Result<u64> {
        require!(self.is_manager(caller), ErrorCode::NotAuthorized);
        check_min_stake(min_stake)?;

        Ok(std::mem::replace(&mut self.min_stake, min_stake))
    }

    pub fn is_manager(&self, caller: &Pubkey) -> bool {
        self.manager == *caller
    }

    /// Append `player` with a stake of `amount`.
    /// All checks run before the first write.
    pub fn record_entry(&mut self, player: Pubkey, amount: u64) -> Result<()> {
        require!(amount > self.min_stake, ErrorCode::InsufficientStake);
        require!(self.players.len() < MAX_PLAYERS, ErrorCode::LotteryFull);

        let pot_amount = self
            .pot_amount
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;

        self.players.push(player);
        self.pot_amount = pot_amount;

        Ok(())
    }

    /// Pick the winning slot for `caller` without touching state.
    pub fn draw(&self, caller: &Pubkey, entropy: &impl EntropySource) -> Result<Draw> {
        require!(self.is_manager(caller), ErrorCode::NotAuthorized);
        require!(!self.players.is_empty(), ErrorCode::NoParticipants);

        let index = winner_index(&entropy.seed(), self.players.len())?;

        Ok(Draw {
            winner: self.players[index],
            index,
            pot_amount: self.pot_amount,
        })
    }

    /// Record the winner and reset for the next round.
    /// Only call once the payout has left the account.
    pub fn close_round(&mut self, draw: &Draw) {
        self.last_winner = Some(draw.winner);
        self.players.clear();
        self.pot_amount = 0;
        self.round = self.round.saturating_add(1);
    }
}

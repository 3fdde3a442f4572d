use anchor_lang::prelude::*;

#[event]
pub struct LotteryInitialized {
    pub manager: Pubkey,
    pub min_stake: u64,
}

#[event]
pub struct PlayerEntered {
    pub player: Pubkey,
    pub amount: u64,
    pub players: u32,
    pub pot_amount: u64,
}

#[event]
pub struct WinnerPicked {
    pub round: u64,
    pub winner: Pubkey,
    pub winning_index: u32,
    pub players: u32,
    pub payout: u64,
}

#[event]
pub struct MinStakeUpdated {
    pub old_min_stake: u64,
    pub new_min_stake: u64,
}

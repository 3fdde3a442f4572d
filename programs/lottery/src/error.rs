use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Stake must be greater than the minimum stake")]
    InsufficientStake,
    #[msg("Only the manager can perform this action")]
    NotAuthorized,
    #[msg("No players have entered the lottery")]
    NoParticipants,
    #[msg("The lottery has reached its player limit")]
    LotteryFull,
    #[msg("Winner account was not supplied as a writable remaining account")]
    WinnerAccountMissing,
    #[msg("Lottery balance does not cover the recorded pot")]
    PotMismatch,
    #[msg("Minimum stake exceeds the allowed maximum")]
    MinStakeTooHigh,
    #[msg("Math overflow")]
    MathOverflow,
}

use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

/// Seed of the single lottery PDA.
pub const LOTTERY_SEED: &[u8] = b"lottery";

/// Upper bound on participant slots per round.
///
/// `get_players` hands the list back through return data, which is capped at
/// 1024 bytes: 4 bytes of length prefix plus 30 keys of 32 bytes fits.
pub const MAX_PLAYERS: usize = 30;

/// Reference entry threshold, 0.01 SOL. A stake has to be strictly above it.
pub const DEFAULT_MIN_STAKE: u64 = LAMPORTS_PER_SOL / 100;

/// Highest threshold the manager may configure, 10 SOL.
pub const MAX_MIN_STAKE: u64 = DEFAULT_MIN_STAKE * 1_000;

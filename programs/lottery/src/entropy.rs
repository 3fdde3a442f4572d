use anchor_lang::prelude::*;
use solana_program::keccak::hashv;

use crate::error::ErrorCode;

/// Source of the 32-byte seed a draw is reduced from.
pub trait EntropySource {
    fn seed(&self) -> [u8; 32];
}

/// Weak entropy mixed from the cluster clock, the caller and the round.
///
/// Everything hashed here is known to the leader producing the block, and the
/// manager picks when to call, so either can bias the outcome. This is a
/// best-effort draw, not a verifiable one.
pub struct ClockEntropy {
    pub slot: u64,
    pub unix_timestamp: i64,
    pub epoch: u64,
    pub caller: Pubkey,
    pub player_count: u64,
    pub last_player: Pubkey,
}

impl ClockEntropy {
    pub fn new(clock: &Clock, caller: Pubkey, players: &[Pubkey]) -> Self {
        Self {
            slot: clock.slot,
            unix_timestamp: clock.unix_timestamp,
            epoch: clock.epoch,
            caller,
            player_count: players.len() as u64,
            last_player: players.last().copied().unwrap_or_default(),
        }
    }
}

impl EntropySource for ClockEntropy {
    fn seed(&self) -> [u8; 32] {
        hashv(&[
            &self.slot.to_le_bytes(),
            &self.unix_timestamp.to_le_bytes(),
            &self.epoch.to_le_bytes(),
            self.caller.as_ref(),
            &self.player_count.to_le_bytes(),
            self.last_player.as_ref(),
        ])
        .to_bytes()
    }
}

/// Reduce a seed to a slot index in `[0, players)`.
/// Uses the first 16 bytes as a little-endian u128.
pub fn winner_index(seed: &[u8; 32], players: usize) -> Result<usize> {
    require!(players > 0, ErrorCode::NoParticipants);

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&seed[..16]);
    let value = u128::from_le_bytes(bytes);

    Ok((value % players as u128) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn clock_at(slot: u64, unix_timestamp: i64) -> Clock {
        Clock {
            slot,
            unix_timestamp,
            epoch: 7,
            ..Clock::default()
        }
    }

    #[test]
    fn test_index_stays_in_range() {
        let seed = [0xFF; 32];
        for players in 1..=30 {
            assert!(winner_index(&seed, players).unwrap() < players);
        }
    }

    #[test]
    fn test_index_uses_low_sixteen_bytes() {
        let mut seed = [0u8; 32];
        seed[0] = 7;
        // trailing bytes must not matter
        seed[31] = 0xAB;
        assert_eq!(winner_index(&seed, 5).unwrap(), 2);
        assert_eq!(winner_index(&seed, 1).unwrap(), 0);
    }

    #[test]
    fn test_index_rejects_empty_round() {
        let err = winner_index(&[1u8; 32], 0).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::NoParticipants));
    }

    #[test]
    fn test_clock_entropy_is_deterministic() {
        let caller = Pubkey::new_unique();
        let players = vec![Pubkey::new_unique(), Pubkey::new_unique()];

        let a = ClockEntropy::new(&clock_at(100, 1_700_000_000), caller, &players);
        let b = ClockEntropy::new(&clock_at(100, 1_700_000_000), caller, &players);
        assert_eq!(a.seed(), b.seed());
    }

    #[test]
    fn test_clock_entropy_changes_with_inputs() {
        let caller = Pubkey::new_unique();
        let players = vec![Pubkey::new_unique()];
        let base = ClockEntropy::new(&clock_at(100, 1_700_000_000), caller, &players).seed();

        let next_slot = ClockEntropy::new(&clock_at(101, 1_700_000_000), caller, &players).seed();
        let other_caller =
            ClockEntropy::new(&clock_at(100, 1_700_000_000), Pubkey::new_unique(), &players).seed();

        let mut more_players = players.clone();
        more_players.push(Pubkey::new_unique());
        let bigger_round =
            ClockEntropy::new(&clock_at(100, 1_700_000_000), caller, &more_players).seed();

        assert_ne!(base, next_slot);
        assert_ne!(base, other_caller);
        assert_ne!(base, bigger_round);
    }

    #[test]
    fn test_clock_entropy_handles_no_players() {
        let entropy = ClockEntropy::new(&clock_at(1, 0), Pubkey::new_unique(), &[]);
        assert_eq!(entropy.player_count, 0);
        assert_eq!(entropy.last_player, Pubkey::default());
    }
}

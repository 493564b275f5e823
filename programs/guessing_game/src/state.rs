use anchor_lang::prelude::*;

use crate::{constants::INITIAL_VERSION, errors::GuessingGameError};

#[account]
#[derive(InitSpace)]
pub struct Config {
    pub admin: Pubkey,
    pub bump: u8,

    /// Fee snapshotted into every game created while it is in effect.
    pub guess_fee_lamports: u64,
    /// Exclusive upper bound for game targets.
    pub target_max: u8,

    pub paused: bool,
    pub version: u16,
}

/// Terms a game is created under. Later config updates don't touch existing games.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameTerms {
    pub fee_lamports: u64,
    pub target_max: u8,
}

pub fn validate_guess_fee(fee_lamports: u64) -> Result<()> {
    require!(fee_lamports > 0, GuessingGameError::InvalidFee);
    Ok(())
}

pub fn validate_target_max(target_max: u8) -> Result<()> {
    require!(target_max > 0, GuessingGameError::InvalidTargetRange);
    Ok(())
}

impl Config {
    pub fn assert_admin(&self, signer: Pubkey) -> Result<()> {
        require_keys_eq!(self.admin, signer, GuessingGameError::Unauthorized);
        Ok(())
    }

    pub fn assert_active(&self) -> Result<()> {
        require!(!self.paused, GuessingGameError::Paused);
        Ok(())
    }

    pub fn game_terms(&self) -> GameTerms {
        GameTerms {
            fee_lamports: self.guess_fee_lamports,
            target_max: self.target_max,
        }
    }
}

#[account]
#[derive(InitSpace)]
pub struct Game {
    pub authority: Pubkey,
    pub game_id: u64,
    pub bump: u8,

    // System-owned PDA vault (holds rent reserve + pot lamports, no data)
    pub vault: Pubkey,
    pub vault_bump: u8,

    pub target: u8,
    pub pot: u64,
    pub fee_lamports: u64,

    // stats
    pub round: u64,
    pub guess_count: u64,
    pub last_winner: Pubkey,
    pub last_payout: u64,

    pub created_slot: u64,
    pub version: u16,
}

impl Game {
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        authority: Pubkey,
        game_id: u64,
        bump: u8,
        vault: Pubkey,
        vault_bump: u8,
        target: u8,
        terms: GameTerms,
        created_slot: u64,
    ) -> Result<Self> {
        validate_target_max(terms.target_max)?;
        require!(target < terms.target_max, GuessingGameError::InvalidTarget);
        validate_guess_fee(terms.fee_lamports)?;

        Ok(Self {
            authority,
            game_id,
            bump,
            vault,
            vault_bump,
            target,
            pot: 0,
            fee_lamports: terms.fee_lamports,
            round: 0,
            guess_count: 0,
            last_winner: Pubkey::default(),
            last_payout: 0,
            created_slot,
            version: INITIAL_VERSION,
        })
    }

    pub fn is_correct(&self, guess: u8) -> bool {
        guess == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::error_code as code;

    fn terms() -> GameTerms {
        GameTerms {
            fee_lamports: 1_000,
            target_max: 100,
        }
    }

    fn config(admin: Pubkey) -> Config {
        Config {
            admin,
            bump: 255,
            guess_fee_lamports: 5,
            target_max: 100,
            paused: false,
            version: INITIAL_VERSION,
        }
    }

    #[test]
    fn only_admin_passes_admin_check() {
        let admin = Pubkey::new_unique();
        let cfg = config(admin);

        assert!(cfg.assert_admin(admin).is_ok());
        let err = cfg.assert_admin(Pubkey::new_unique()).unwrap_err();
        assert_eq!(code(err), u32::from(GuessingGameError::Unauthorized));
    }

    #[test]
    fn paused_config_rejects_play() {
        let mut cfg = config(Pubkey::new_unique());
        assert!(cfg.assert_active().is_ok());

        cfg.paused = true;
        let err = cfg.assert_active().unwrap_err();
        assert_eq!(code(err), u32::from(GuessingGameError::Paused));
    }

    #[test]
    fn fee_and_range_must_be_positive() {
        assert!(validate_guess_fee(1).is_ok());
        assert_eq!(
            code(validate_guess_fee(0).unwrap_err()),
            u32::from(GuessingGameError::InvalidFee)
        );

        assert!(validate_target_max(1).is_ok());
        assert_eq!(
            code(validate_target_max(0).unwrap_err()),
            u32::from(GuessingGameError::InvalidTargetRange)
        );
    }

    #[test]
    fn create_starts_with_empty_pot() {
        let authority = Pubkey::new_unique();
        let game = Game::create(authority, 7, 254, Pubkey::new_unique(), 253, 42, terms(), 10)
            .expect("valid target");

        assert_eq!(game.target, 42);
        assert_eq!(game.pot, 0);
        assert_eq!(game.fee_lamports, 1_000);
        assert_eq!(game.round, 0);
        assert_eq!(game.authority, authority);
        assert_eq!(game.last_winner, Pubkey::default());
        assert_eq!(game.version, INITIAL_VERSION);
    }

    #[test]
    fn create_rejects_target_at_or_above_bound() {
        let res = Game::create(Pubkey::new_unique(), 0, 0, Pubkey::new_unique(), 0, 100, terms(), 0);
        assert_eq!(code(res.err().unwrap()), u32::from(GuessingGameError::InvalidTarget));

        let edge = Game::create(Pubkey::new_unique(), 0, 0, Pubkey::new_unique(), 0, 99, terms(), 0);
        assert!(edge.is_ok());
    }

    #[test]
    fn create_rejects_empty_range_and_zero_fee() {
        let empty = GameTerms { target_max: 0, ..terms() };
        let res = Game::create(Pubkey::new_unique(), 0, 0, Pubkey::new_unique(), 0, 0, empty, 0);
        assert_eq!(code(res.err().unwrap()), u32::from(GuessingGameError::InvalidTargetRange));

        let free = GameTerms { fee_lamports: 0, ..terms() };
        let res = Game::create(Pubkey::new_unique(), 0, 0, Pubkey::new_unique(), 0, 1, free, 0);
        assert_eq!(code(res.err().unwrap()), u32::from(GuessingGameError::InvalidFee));
    }

    #[test]
    fn game_serialized_size_matches_init_space() {
        let game = Game::create(Pubkey::new_unique(), 1, 1, Pubkey::new_unique(), 1, 1, terms(), 1)
            .unwrap();
        let mut buf = Vec::new();
        game.serialize(&mut buf).unwrap();
        assert_eq!(buf.len(), Game::INIT_SPACE);
    }

    #[test]
    fn config_serialized_size_matches_init_space() {
        let cfg = config(Pubkey::new_unique());
        let mut buf = Vec::new();
        cfg.serialize(&mut buf).unwrap();
        assert_eq!(buf.len(), Config::INIT_SPACE);
        assert_eq!(cfg.game_terms(), GameTerms { fee_lamports: 5, target_max: 100 });
    }
}

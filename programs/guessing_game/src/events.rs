use anchor_lang::prelude::*;

use crate::utils::GuessHint;

#[event]
pub struct ConfigInitialized {
    pub admin: Pubkey,
    pub guess_fee_lamports: u64,
    pub target_max: u8,
}

/// The target is deliberately absent from every game event.
#[event]
pub struct GameInitialized {
    pub game: Pubkey,
    pub authority: Pubkey,
    pub game_id: u64,
    pub fee_lamports: u64,
    pub target_max: u8,
}

#[event]
pub struct GuessMissed {
    pub game: Pubkey,
    pub player: Pubkey,
    pub guess: u8,
    pub hint: GuessHint,
    pub pot: u64,
}

#[event]
pub struct PotWon {
    pub game: Pubkey,
    pub player: Pubkey,
    pub payout: u64,
    pub round: u64,
}

use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

pub use constants::*;
pub use contexts::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;
pub use utils::*;

#[cfg(not(feature = "no-entrypoint"))]
use solana_security_txt::security_txt;

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    // Required fields
    name: "Guessing Game",
    project_url: "https://example.com/guessing-game",
    contacts: "email:security@example.com",
    policy: "https://example.com/guessing-game/SECURITY.md",

    // Optional fields
    preferred_languages: "en"
}

declare_id!("H2QtoCz4CcjVZsHrFxzngLJ8z4rQatMnAspT9w3q12LE");

#[program]
pub mod guessing_game {
    use super::*;
    use crate::instructions::{admin, game, play};

    // ----------------------------
    // Config
    // ----------------------------
    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        guess_fee_lamports: Option<u64>,
        target_max: Option<u8>,
    ) -> Result<()> {
        admin::initialize_config(ctx, guess_fee_lamports, target_max)
    }

    pub fn set_pause(ctx: Context<SetPause>, paused: bool) -> Result<()> {
        admin::set_pause(ctx, paused)
    }

    pub fn update_guess_fee(ctx: Context<UpdateConfig>, new_fee_lamports: u64) -> Result<()> {
        admin::update_guess_fee(ctx, new_fee_lamports)
    }

    pub fn update_target_max(ctx: Context<UpdateConfig>, new_target_max: u8) -> Result<()> {
        admin::update_target_max(ctx, new_target_max)
    }

    // core
    pub fn initialize(ctx: Context<InitializeGame>, game_id: u64, target: u8) -> Result<()> {
        game::initialize_game(ctx, game_id, target)
    }

    pub fn guess(
        ctx: Context<SubmitGuess>,
        fee_lamports: u64,
        user_guess: u8,
    ) -> Result<GuessOutcome> {
        play::submit_guess(ctx, fee_lamports, user_guess)
    }
}

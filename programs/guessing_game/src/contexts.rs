// programs/guessing_game/src/contexts.rs

use anchor_lang::prelude::*;

use crate::state::{Config, Game};

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Config::INIT_SPACE,
        seeds = [crate::CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct SetPause<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
#[instruction(game_id: u64)]
pub struct InitializeGame<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    /// CHECK: created by the handler so a second `initialize` fails with
    /// AlreadyInitialized. Address enforced by seeds/bump.
    #[account(
        mut,
        seeds = [
            crate::GAME_SEED,
            authority.key().as_ref(),
            game_id.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub game: UncheckedAccount<'info>,

    /// CHECK: system-owned vault PDA, holds lamports, no data
    #[account(
        mut,
        seeds = [crate::VAULT_SEED, game.key().as_ref()],
        bump
    )]
    pub vault: UncheckedAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct SubmitGuess<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [
            crate::GAME_SEED,
            game.authority.as_ref(),
            game.game_id.to_le_bytes().as_ref(),
        ],
        bump = game.bump
    )]
    pub game: Account<'info, Game>,

    /// CHECK: System-owned PDA vault. Address enforced by seeds/bump + address=game.vault
    #[account(
        mut,
        seeds = [crate::VAULT_SEED, game.key().as_ref()],
        bump = game.vault_bump,
        address = game.vault
    )]
    pub vault: UncheckedAccount<'info>,

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}

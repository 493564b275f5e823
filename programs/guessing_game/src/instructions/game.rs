use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::{
    events::GameInitialized,
    state::Game,
    utils::{create_program_account, ensure_game_address_free},
    InitializeGame, GAME_SEED,
};

/// Creates the game record (`pot = 0`) and funds its vault's rent reserve.
pub fn initialize_game(ctx: Context<InitializeGame>, game_id: u64, target: u8) -> Result<()> {
    let cfg = &ctx.accounts.config;
    cfg.assert_active()?;

    let authority_pk = ctx.accounts.authority.key();
    let payer_ai = ctx.accounts.authority.to_account_info();
    let game_ai = ctx.accounts.game.to_account_info();
    let vault_ai = ctx.accounts.vault.to_account_info();
    let system_ai = ctx.accounts.system_program.to_account_info();

    // replay -> deterministic error, before any lamports move
    ensure_game_address_free(game_ai.data_is_empty(), game_ai.owner, ctx.program_id)?;

    let game_bump = ctx.bumps.game;
    let game = Game::create(
        authority_pk,
        game_id,
        game_bump,
        vault_ai.key(),
        ctx.bumps.vault,
        target,
        cfg.game_terms(),
        Clock::get()?.slot,
    )?;

    let id_le = game_id.to_le_bytes();
    let game_signer: &[&[&[u8]]] = &[&[GAME_SEED, authority_pk.as_ref(), &id_le, &[game_bump]]];

    create_program_account(
        &payer_ai,
        &game_ai,
        &system_ai,
        8 + Game::INIT_SPACE,
        ctx.program_id,
        game_signer,
    )?;

    // vault stays a plain system account; it only needs the rent-exempt minimum
    let reserve = Rent::get()?.minimum_balance(0);
    let top_up = reserve.saturating_sub(vault_ai.lamports());
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                system_ai.clone(),
                Transfer {
                    from: payer_ai.clone(),
                    to: vault_ai.clone(),
                },
            ),
            top_up,
        )?;
    }

    {
        let mut data = game_ai.try_borrow_mut_data()?;
        let mut w = std::io::Cursor::new(&mut data[..]);
        game.try_serialize(&mut w)?;
    }

    msg!("Game {} initialized by {}", game_ai.key(), authority_pk);
    emit!(GameInitialized {
        game: game_ai.key(),
        authority: authority_pk,
        game_id,
        fee_lamports: game.fee_lamports,
        target_max: cfg.target_max,
    });

    Ok(())
}

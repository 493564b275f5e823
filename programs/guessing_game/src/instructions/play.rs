use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::{
    events::{GuessMissed, PotWon},
    utils::{process_guess, GuessHint, GuessOutcome, PotLedger},
    SubmitGuess, VAULT_SEED,
};

/// Moves lamports through the System Program. The vault PDA signs payouts.
struct SystemLedger<'a, 'info> {
    player: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
    vault_seeds: &'a [&'a [u8]],
    reserve: u64,
}

impl PotLedger for SystemLedger<'_, '_> {
    fn claimant_balance(&self) -> u64 {
        self.player.lamports()
    }

    fn pot_balance(&self) -> u64 {
        self.vault.lamports().saturating_sub(self.reserve)
    }

    fn collect_fee(&mut self, amount: u64) -> Result<()> {
        system_program::transfer(
            CpiContext::new(
                self.system_program.clone(),
                Transfer {
                    from: self.player.clone(),
                    to: self.vault.clone(),
                },
            ),
            amount,
        )
    }

    fn pay_winner(&mut self, amount: u64) -> Result<()> {
        system_program::transfer(
            CpiContext::new_with_signer(
                self.system_program.clone(),
                Transfer {
                    from: self.vault.clone(),
                    to: self.player.clone(),
                },
                &[self.vault_seeds],
            ),
            amount,
        )
    }
}

pub fn submit_guess(
    ctx: Context<SubmitGuess>,
    fee_lamports: u64,
    user_guess: u8,
) -> Result<GuessOutcome> {
    ctx.accounts.config.assert_active()?;

    let game_key = ctx.accounts.game.key();
    let player_pk = ctx.accounts.player.key();
    let vault_bump = ctx.accounts.game.vault_bump;
    let vault_seeds: &[&[u8]] = &[VAULT_SEED, game_key.as_ref(), &[vault_bump]];

    let mut ledger = SystemLedger {
        player: ctx.accounts.player.to_account_info(),
        vault: ctx.accounts.vault.to_account_info(),
        system_program: ctx.accounts.system_program.to_account_info(),
        vault_seeds,
        reserve: Rent::get()?.minimum_balance(0),
    };

    let game = &mut ctx.accounts.game;
    let outcome = process_guess(game, &mut ledger, player_pk, fee_lamports, user_guess)?;

    match outcome {
        GuessOutcome::Win { payout } => {
            msg!("Correct guess! {} wins the pot of {} lamports!", player_pk, payout);
            emit!(PotWon {
                game: game_key,
                player: player_pk,
                payout,
                round: game.round,
            });
        }
        GuessOutcome::Miss { pot, hint } => {
            match hint {
                GuessHint::TooLow => msg!("Your guess is too low."),
                GuessHint::TooHigh => msg!("Your guess is too high."),
            }
            emit!(GuessMissed {
                game: game_key,
                player: player_pk,
                guess: user_guess,
                hint,
                pot,
            });
        }
    }

    Ok(outcome)
}

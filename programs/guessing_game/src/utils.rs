use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

use crate::{errors::GuessingGameError, state::Game};

// ---------------
// Guess results
// ---------------
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessHint {
    TooLow,
    TooHigh,
}

impl GuessHint {
    pub fn for_miss(guess: u8, target: u8) -> Self {
        if guess < target {
            GuessHint::TooLow
        } else {
            GuessHint::TooHigh
        }
    }
}

/// Returned to the caller of `guess` as instruction return data.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Everything the vault holds above its rent reserve went to the player:
    /// the pot, this guess's fee and any lamports sent to the vault directly.
    Win { payout: u64 },
    /// The fee stayed in the pot.
    Miss { pot: u64, hint: GuessHint },
}

// -------------------------
// Ledger seam
// -------------------------

/// Lamport movements a guess needs. Each call either moves the full amount or
/// returns an error; rolling back earlier calls is the transaction's job.
pub trait PotLedger {
    /// Spendable lamports of the guessing player.
    fn claimant_balance(&self) -> u64;

    /// Vault lamports above the rent reserve, i.e. what backs the pot.
    fn pot_balance(&self) -> u64;

    /// Player -> vault.
    fn collect_fee(&mut self, amount: u64) -> Result<()>;

    /// Vault -> player.
    fn pay_winner(&mut self, amount: u64) -> Result<()>;
}

// -------------------------
// Shared guess logic
// -------------------------

/// Judges one guess against the authoritative record and settles it through
/// `ledger`. Funds move first; the record is written only once every transfer
/// succeeded, so an `Err` never leaves `game` modified.
pub fn process_guess<L: PotLedger>(
    game: &mut Game,
    ledger: &mut L,
    player: Pubkey,
    fee_paid: u64,
    guess: u8,
) -> Result<GuessOutcome> {
    require!(fee_paid == game.fee_lamports, GuessingGameError::InvalidFee);
    require!(
        ledger.claimant_balance() >= fee_paid,
        GuessingGameError::InsufficientFunds
    );

    let pot_with_fee = game
        .pot
        .checked_add(fee_paid)
        .ok_or(GuessingGameError::MathOverflow)?;
    let guess_count = game
        .guess_count
        .checked_add(1)
        .ok_or(GuessingGameError::MathOverflow)?;

    let won = game.is_correct(guess);
    let round = if won {
        game.round
            .checked_add(1)
            .ok_or(GuessingGameError::MathOverflow)?
    } else {
        game.round
    };

    ledger.collect_fee(fee_paid)?;

    // recorded pot must be backed by real lamports before anything is paid out
    let backing = ledger.pot_balance();
    require_gte!(backing, pot_with_fee, GuessingGameError::PotBalanceMismatch);

    if won {
        ledger.pay_winner(backing)?;
    }

    game.guess_count = guess_count;

    if won {
        game.pot = 0;
        game.round = round;
        game.last_winner = player;
        game.last_payout = backing;

        Ok(GuessOutcome::Win { payout: backing })
    } else {
        game.pot = pot_with_fee;

        Ok(GuessOutcome::Miss {
            pot: pot_with_fee,
            hint: GuessHint::for_miss(guess, game.target),
        })
    }
}

// -------------------------
// PDA account creation
// -------------------------

/// A game address is free while it holds no data and the program doesn't own it.
pub fn ensure_game_address_free(
    data_is_empty: bool,
    owner: &Pubkey,
    program_id: &Pubkey,
) -> Result<()> {
    require!(
        data_is_empty && owner != program_id,
        GuessingGameError::AlreadyInitialized
    );
    Ok(())
}

/// Creates a program-owned PDA, also when someone pre-funded its address
/// (plain `create_account` refuses accounts that already hold lamports).
pub fn create_program_account<'info>(
    payer: &AccountInfo<'info>,
    new_account: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    space: usize,
    owner: &Pubkey,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let required = Rent::get()?.minimum_balance(space);
    let current = new_account.lamports();

    if current == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: new_account.clone(),
                },
                signer_seeds,
            ),
            required,
            space as u64,
            owner,
        );
    }

    let top_up = required.saturating_sub(current);
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer.clone(),
                    to: new_account.clone(),
                },
            ),
            top_up,
        )?;
    }

    system_program::allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: new_account.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;

    system_program::assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            Assign {
                account_to_assign: new_account.clone(),
            },
            signer_seeds,
        ),
        owner,
    )
}

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::ConfigInitialized;
use crate::state::{validate_guess_fee, validate_target_max};
use crate::{InitializeConfig, SetPause, UpdateConfig};

/// `None` picks the program default for that setting.
pub fn initialize_config(
    ctx: Context<InitializeConfig>,
    guess_fee_lamports: Option<u64>,
    target_max: Option<u8>,
) -> Result<()> {
    let fee = guess_fee_lamports.unwrap_or(DEFAULT_GUESS_FEE_LAMPORTS);
    let target_max = target_max.unwrap_or(DEFAULT_TARGET_MAX);
    validate_guess_fee(fee)?;
    validate_target_max(target_max)?;

    let cfg = &mut ctx.accounts.config;
    cfg.admin = ctx.accounts.admin.key();
    cfg.bump = ctx.bumps.config;
    cfg.guess_fee_lamports = fee;
    cfg.target_max = target_max;
    cfg.paused = false;
    cfg.version = INITIAL_VERSION;

    emit!(ConfigInitialized {
        admin: cfg.admin,
        guess_fee_lamports: fee,
        target_max,
    });

    Ok(())
}

pub fn set_pause(ctx: Context<SetPause>, paused: bool) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    cfg.assert_admin(ctx.accounts.admin.key())?;
    cfg.paused = paused;
    Ok(())
}

/// Only games created afterwards pick up the new fee.
pub fn update_guess_fee(ctx: Context<UpdateConfig>, new_fee_lamports: u64) -> Result<()> {
    validate_guess_fee(new_fee_lamports)?;

    let cfg = &mut ctx.accounts.config;
    cfg.assert_admin(ctx.accounts.admin.key())?;

    cfg.guess_fee_lamports = new_fee_lamports;

    Ok(())
}

pub fn update_target_max(ctx: Context<UpdateConfig>, new_target_max: u8) -> Result<()> {
    validate_target_max(new_target_max)?;

    let cfg = &mut ctx.accounts.config;
    cfg.assert_admin(ctx.accounts.admin.key())?;

    cfg.target_max = new_target_max;

    Ok(())
}

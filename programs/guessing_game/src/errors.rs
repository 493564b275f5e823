use anchor_lang::prelude::*;

#[error_code]
pub enum GuessingGameError {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Program paused")]
    Paused,

    #[msg("Fee does not match the game's guess fee")]
    InvalidFee,
    #[msg("Invalid target range (target_max must be > 0)")]
    InvalidTargetRange,
    #[msg("Target outside the configured range")]
    InvalidTarget,

    #[msg("Game already initialized")]
    AlreadyInitialized,

    #[msg("Insufficient funds in the player's account.")]
    InsufficientFunds,

    #[msg("Vault balance does not cover the recorded pot")]
    PotBalanceMismatch,

    #[msg("Math overflow")]
    MathOverflow,
}

/// Numeric code carried by an error; `u32::MAX` for non-program errors.
#[cfg(test)]
pub(crate) fn error_code(err: anchor_lang::error::Error) -> u32 {
    match err {
        anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
        anchor_lang::error::Error::ProgramError(_) => u32::MAX,
    }
}

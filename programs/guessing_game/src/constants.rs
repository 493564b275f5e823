// Program-wide defaults

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Default fee charged per guess: 100 SOL.
pub const DEFAULT_GUESS_FEE_LAMPORTS: u64 = 100 * LAMPORTS_PER_SOL;

/// Targets are drawn from `[0, DEFAULT_TARGET_MAX)`.
pub const DEFAULT_TARGET_MAX: u8 = 100;

/// Initial version for account structures.
pub const INITIAL_VERSION: u16 = 1;

// -----------------
// Seeds
// -----------------
pub const CONFIG_SEED: &[u8] = b"config_v1";
pub const GAME_SEED: &[u8] = b"game_v1";
pub const VAULT_SEED: &[u8] = b"vault_v1";

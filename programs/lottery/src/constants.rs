use solana_program::native_token::LAMPORTS_PER_SOL;

/// Seed of the single lottery state PDA.
pub const LOTTERY_SEED: &[u8] = b"lottery";

/// Ticket prices are quoted in whole SOL.
pub const TICKET_COST_UNIT: u64 = LAMPORTS_PER_SOL;

pub const DEFAULT_TICKET_COST: u64 = TICKET_COST_UNIT;
pub const DEFAULT_MAX_TICKETS: u64 = 5;

/// Smallest payment `buy_ticket` accepts, independent of the ticket cost.
pub const MIN_PAYMENT: u64 = TICKET_COST_UNIT;

/// Upper bound on tickets per round. The `players` vector is allocated for
/// this many entries when the account is created.
pub const MAX_TICKETS_CAPACITY: u64 = 256;

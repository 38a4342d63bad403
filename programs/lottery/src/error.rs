use anchor_lang::prelude::error_code;

#[error_code]
pub enum LotteryError {
    #[msg("No tickets available")]
    RoundClosed,
    #[msg("Not enough tickets left to dispense")]
    InsufficientSupply,
    #[msg("Attached amount does not cover the tickets")]
    UnderPayment,
    #[msg("Attached amount is below the minimum payment")]
    BelowMinimum,
    #[msg("Round is still selling tickets")]
    RoundStillOpen,
    #[msg("Round has no tickets to draw from")]
    EmptyRound,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("A round is in progress")]
    RoundInProgress,
    #[msg("Free tickets are not allowed")]
    ZeroCostRejected,
    #[msg("Ticket cost overflows")]
    CostOverflow,
    #[msg("Max tickets exceeds account capacity")]
    CapacityExceeded,
    #[msg("Transfer recipient account was not supplied")]
    RecipientMismatch,
    #[msg("Invalid calculation")]
    InvalidCalculation,
}

use anchor_lang::prelude::*;

use crate::constants::{DEFAULT_MAX_TICKETS, DEFAULT_TICKET_COST};

#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Lottery {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The only address allowed to draw a winner and to reconfigure the
    /// lottery. Fixed at initialization.
    pub operator: Pubkey,

    /// The price (in lamports) of a single ticket in the current round.
    pub ticket_cost: u64,

    /// Tickets still for sale in the current round.
    pub tickets_available: u64,

    /// Ticket supply of a round.
    pub max_tickets: u64,

    /// Ticket holders of the current round. A ticket's index is its position
    /// in this vector, so the draw can address tickets `0..max_tickets`.
    // keep in sync with MAX_TICKETS_CAPACITY
    #[max_len(256)]
    pub players: Vec<Pubkey>,
}

impl Lottery {
    pub fn new(operator: Pubkey, bump: u8) -> Self {
        Self {
            bump,
            operator,
            ticket_cost: DEFAULT_TICKET_COST,
            tickets_available: DEFAULT_MAX_TICKETS,
            max_tickets: DEFAULT_MAX_TICKETS,
            players: Vec::new(),
        }
    }

    pub fn tickets_sold(&self) -> u64 {
        self.players.len() as u64
    }

    /// Tickets can still be bought.
    pub fn is_open(&self) -> bool {
        self.tickets_available > 0
    }

    /// Every ticket of a non-empty round has been sold.
    pub fn is_ready_to_draw(&self) -> bool {
        self.tickets_available == 0 && self.max_tickets > 0
    }

    /// No ticket of the current round has been sold yet.
    pub fn is_reset(&self) -> bool {
        self.tickets_available == self.max_tickets
    }
}

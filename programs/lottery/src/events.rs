use anchor_lang::prelude::*;

#[event]
pub struct LotteryInitialized {
    pub operator: Pubkey,
    pub ticket_cost: u64,
    pub max_tickets: u64,
}

#[event]
pub struct TicketsPurchased {
    pub buyer: Pubkey,
    /// Index of the first ticket sold by this purchase.
    pub first_ticket: u64,
    pub tickets: u64,
    pub refund: u64,
    pub tickets_available: u64,
}

#[event]
pub struct RoundDrawn {
    pub winner: Pubkey,
    pub ticket_index: u64,
    pub random_number: u64,
    pub prize: u64,
}

#[event]
pub struct TicketCostChanged {
    pub ticket_cost: u64,
}

#[event]
pub struct MaxTicketsChanged {
    pub max_tickets: u64,
}

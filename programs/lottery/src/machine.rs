//! Lottery state transitions.
//!
//! Every operation checks all of its preconditions before touching the
//! state, so a rejected call leaves the `Lottery` exactly as it was and
//! produces no transfers. Settling the returned transfers is up to the
//! caller, which must do it atomically with persisting the new state.

use anchor_lang::prelude::*;

use crate::constants::{MAX_TICKETS_CAPACITY, MIN_PAYMENT, TICKET_COST_UNIT};
use crate::error::LotteryError;
use crate::state::Lottery;

/// What the host knows about the call being applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallContext {
    pub caller: Pubkey,
    /// Lamports attached to the call.
    pub amount: u64,
    /// Lamports the lottery holds at call time, attached amount excluded.
    pub balance: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    BuyTicket { tickets_to_buy: u64 },
    /// `random_number` is taken as-is. Whoever picks it picks the winner, so
    /// it must come from a source the players trust.
    EndGame { random_number: u64 },
    ChangeTicketCost { new_cost: u64 },
    ChangeMaxTickets { new_max: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    Refund,
    Prize { ticket_index: u64 },
}

/// An outbound payment out of the lottery's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    pub to: Pubkey,
    pub lamports: u64,
    pub kind: TransferKind,
}

impl Lottery {
    pub fn apply(&mut self, ctx: &CallContext, call: Call) -> Result<Vec<Transfer>> {
        let transfers = match call {
            Call::BuyTicket { tickets_to_buy } => {
                self.buy_ticket(ctx.caller, ctx.amount, tickets_to_buy)?
            }
            Call::EndGame { random_number } => {
                Some(self.end_game(ctx.caller, ctx.balance, random_number)?)
            }
            Call::ChangeTicketCost { new_cost } => {
                self.change_ticket_cost(ctx.caller, new_cost)?;
                None
            }
            Call::ChangeMaxTickets { new_max } => {
                self.change_max_tickets(ctx.caller, new_max)?;
                None
            }
        };

        Ok(transfers.into_iter().collect())
    }

    /// Sells `tickets_to_buy` consecutive tickets to `buyer`. Any amount
    /// above the exact cost is handed back as a refund.
    fn buy_ticket(
        &mut self,
        buyer: Pubkey,
        amount: u64,
        tickets_to_buy: u64,
    ) -> Result<Option<Transfer>> {
        require!(self.is_open(), LotteryError::RoundClosed);
        require!(
            self.tickets_available >= tickets_to_buy,
            LotteryError::InsufficientSupply
        );
        // A cost that does not fit in u64 cannot be paid either.
        let cost = tickets_to_buy
            .checked_mul(self.ticket_cost)
            .ok_or(LotteryError::UnderPayment)?;
        require!(amount >= cost, LotteryError::UnderPayment);
        require!(amount >= MIN_PAYMENT, LotteryError::BelowMinimum);

        self.players
            .extend(std::iter::repeat(buyer).take(tickets_to_buy as usize));
        self.tickets_available -= tickets_to_buy;

        let refund = amount - cost;
        Ok((refund > 0).then_some(Transfer {
            to: buyer,
            lamports: refund,
            kind: TransferKind::Refund,
        }))
    }

    /// Picks ticket `random_number % max_tickets`, pays it the whole balance
    /// and opens a fresh round with the same price and supply.
    fn end_game(&mut self, caller: Pubkey, balance: u64, random_number: u64) -> Result<Transfer> {
        require!(!self.is_open(), LotteryError::RoundStillOpen);
        require_keys_eq!(caller, self.operator, LotteryError::Unauthorized);
        require!(self.is_ready_to_draw(), LotteryError::EmptyRound);

        let ticket_index = random_number % self.max_tickets;
        let winner = *self
            .players
            .get(ticket_index as usize)
            .ok_or(LotteryError::InvalidCalculation)?;

        self.players.clear();
        self.tickets_available = self.max_tickets;

        Ok(Transfer {
            to: winner,
            lamports: balance,
            kind: TransferKind::Prize { ticket_index },
        })
    }

    /// Sets the ticket price to `new_cost` whole units.
    fn change_ticket_cost(&mut self, caller: Pubkey, new_cost: u64) -> Result<()> {
        self.require_reconfigurable(caller)?;
        require!(new_cost > 0, LotteryError::ZeroCostRejected);

        self.ticket_cost = new_cost
            .checked_mul(TICKET_COST_UNIT)
            .ok_or(LotteryError::CostOverflow)?;

        Ok(())
    }

    /// Changing the supply always reopens the full supply for sale.
    fn change_max_tickets(&mut self, caller: Pubkey, new_max: u64) -> Result<()> {
        self.require_reconfigurable(caller)?;
        require!(
            new_max <= MAX_TICKETS_CAPACITY,
            LotteryError::CapacityExceeded
        );

        self.max_tickets = new_max;
        self.tickets_available = new_max;

        Ok(())
    }

    fn require_reconfigurable(&self, caller: Pubkey) -> Result<()> {
        require_keys_eq!(caller, self.operator, LotteryError::Unauthorized);
        require!(self.is_reset(), LotteryError::RoundInProgress);
        Ok(())
    }
}

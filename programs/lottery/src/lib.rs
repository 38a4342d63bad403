use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod events;
mod instructions;
pub mod machine;
pub mod state;
mod utils;

declare_id!("455ny971mM8VnVwgsQas3aWRZh28WwadtgG6Yv26LDC3");

#[program]
pub mod lottery {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, operator: Pubkey) -> Result<()> {
        process_initialize(ctx, operator)
    }

    pub fn buy_ticket(ctx: Context<BuyTicket>, tickets_to_buy: u64, amount: u64) -> Result<()> {
        process_buy_ticket(ctx, tickets_to_buy, amount)
    }

    pub fn end_game(ctx: Context<EndGame>, random_number: u64) -> Result<()> {
        process_end_game(ctx, random_number)
    }

    pub fn change_ticket_cost(ctx: Context<Reconfigure>, new_cost: u64) -> Result<()> {
        process_change_ticket_cost(ctx, new_cost)
    }

    pub fn change_max_tickets(ctx: Context<Reconfigure>, new_max: u64) -> Result<()> {
        process_change_max_tickets(ctx, new_max)
    }
}

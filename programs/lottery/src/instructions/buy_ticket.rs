use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::LOTTERY_SEED;
use crate::events::TicketsPurchased;
use crate::machine::{Call, CallContext};
use crate::state::Lottery;
use crate::utils::{pot, settle};

/// Accounts required to buy lottery tickets.
#[derive(Accounts)]
pub struct BuyTicket<'info> {
    /// The buyer. Pays `amount` and receives any refund.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Lottery state account, which also holds the pot.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// System program interface
    pub system_program: Program<'info, System>,
}

/// Buys `tickets_to_buy` tickets for the caller.
///
/// Steps performed:
/// 1. Apply the purchase to the lottery state, rejecting it if the round is
///    closed, the supply is short or `amount` does not cover the cost.
/// 2. Transfer `amount` from the payer into the lottery account.
/// 3. Refund whatever exceeds the exact cost.
///
/// # Arguments
/// * `ctx` - Context containing BuyTicket accounts
/// * `tickets_to_buy` - Number of tickets requested
/// * `amount` - Lamports attached to the purchase
pub fn process_buy_ticket(ctx: Context<BuyTicket>, tickets_to_buy: u64, amount: u64) -> Result<()> {
    let lottery_info = ctx.accounts.lottery.to_account_info();
    let payer_info = ctx.accounts.payer.to_account_info();
    let first_ticket = ctx.accounts.lottery.tickets_sold();

    let call_ctx = CallContext {
        caller: payer_info.key(),
        amount,
        balance: pot(&lottery_info)?,
    };
    let transfers = ctx
        .accounts
        .lottery
        .apply(&call_ctx, Call::BuyTicket { tickets_to_buy })?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: payer_info.clone(),
                to: lottery_info.clone(),
            },
        ),
        amount,
    )?;

    settle(&lottery_info, &[payer_info.clone()], &transfers)?;

    let refund: u64 = transfers.iter().map(|t| t.lamports).sum();
    let tickets_available = ctx.accounts.lottery.tickets_available;

    msg!("Tickets bought: {}", tickets_to_buy);
    msg!("Tickets available: {}", tickets_available);

    emit!(TicketsPurchased {
        buyer: payer_info.key(),
        first_ticket,
        tickets: tickets_to_buy,
        refund,
        tickets_available,
    });

    Ok(())
}

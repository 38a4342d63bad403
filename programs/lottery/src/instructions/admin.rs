use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::events::{LotteryInitialized, MaxTicketsChanged, TicketCostChanged};
use crate::machine::{Call, CallContext};
use crate::state::Lottery;

/// Accounts required to create the lottery state account.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The account paying for account creation and fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The lottery state account, allocated for the full ticket capacity.
    #[account(
        init,
        payer = payer,
        space = 8 + Lottery::INIT_SPACE,
        seeds = [LOTTERY_SEED],
        bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Accounts required to change the price or supply between rounds.
#[derive(Accounts)]
pub struct Reconfigure<'info> {
    /// Must be the lottery operator.
    pub operator: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,
}

/// Creates the lottery with the default price and supply.
///
/// # Arguments
/// * `ctx` - Context holding the Initialize accounts
/// * `operator` - Address allowed to draw winners and reconfigure the lottery
pub fn process_initialize(ctx: Context<Initialize>, operator: Pubkey) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    lottery.set_inner(Lottery::new(operator, ctx.bumps.lottery));

    msg!("Lottery operator: {}", operator);
    msg!(
        "Ticket cost: {} lamports, max tickets: {}",
        lottery.ticket_cost,
        lottery.max_tickets
    );

    emit!(LotteryInitialized {
        operator,
        ticket_cost: lottery.ticket_cost,
        max_tickets: lottery.max_tickets,
    });

    Ok(())
}

pub fn process_change_ticket_cost(ctx: Context<Reconfigure>, new_cost: u64) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    let call_ctx = CallContext {
        caller: ctx.accounts.operator.key(),
        amount: 0,
        balance: 0,
    };
    lottery.apply(&call_ctx, Call::ChangeTicketCost { new_cost })?;

    msg!("Ticket cost: {} lamports", lottery.ticket_cost);
    emit!(TicketCostChanged {
        ticket_cost: lottery.ticket_cost,
    });

    Ok(())
}

pub fn process_change_max_tickets(ctx: Context<Reconfigure>, new_max: u64) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    let call_ctx = CallContext {
        caller: ctx.accounts.operator.key(),
        amount: 0,
        balance: 0,
    };
    lottery.apply(&call_ctx, Call::ChangeMaxTickets { new_max })?;

    msg!("Max tickets: {}", lottery.max_tickets);
    emit!(MaxTicketsChanged {
        max_tickets: lottery.max_tickets,
    });

    Ok(())
}

use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::events::RoundDrawn;
use crate::machine::{Call, CallContext, TransferKind};
use crate::state::Lottery;
use crate::utils::{pot, settle};

/// Accounts required to draw the winner of a sold-out round.
///
/// This ensures that:
/// 1. Only the lottery operator can draw.
/// 2. The winner account receiving the pot holds the drawn ticket.
#[derive(Accounts)]
pub struct EndGame<'info> {
    /// Must be the lottery operator.
    pub operator: Signer<'info>,

    /// The main lottery state account.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// Holder of the drawn ticket.
    /// CHECK: Matched against the drawn ticket before any lamports move.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}

/// Draws ticket `random_number % max_tickets`, pays its holder the whole pot
/// and opens the next round.
///
/// `random_number` is trusted as given. The operator choosing it controls the
/// outcome; the program does not try to detect a biased value.
pub fn process_end_game(ctx: Context<EndGame>, random_number: u64) -> Result<()> {
    let lottery_info = ctx.accounts.lottery.to_account_info();

    let call_ctx = CallContext {
        caller: ctx.accounts.operator.key(),
        amount: 0,
        balance: pot(&lottery_info)?,
    };
    let transfers = ctx
        .accounts
        .lottery
        .apply(&call_ctx, Call::EndGame { random_number })?;

    msg!("Random number: {}", random_number);

    for transfer in &transfers {
        if let TransferKind::Prize { ticket_index } = transfer.kind {
            msg!("Winner: ticket {} held by {}", ticket_index, transfer.to);
            emit!(RoundDrawn {
                winner: transfer.to,
                ticket_index,
                random_number,
                prize: transfer.lamports,
            });
        }
    }

    settle(&lottery_info, &[ctx.accounts.winner.to_account_info()], &transfers)?;

    Ok(())
}

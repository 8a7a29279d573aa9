// Launchpad Helper Functions
//
// Fixed-point math shared by the fundraise, vesting and reserve code,
// plus the CPI wrappers every instruction uses to move SOL and tokens.

use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Burn, MintTo, Transfer};

use crate::{constants::*, errors::*, events::*, state::*};

// FIXED-POINT HELPERS

// Apply a percentage scaled by FEE_SCALE to an amount (rounds down)
// calc_amount(1_000, 5_000_000) == 50
pub fn calc_amount(amount: u64, percent: u64) -> Result<u64> {
    let value = (amount as u128)
        .checked_mul(percent as u128)
        .ok_or(LaunchpadError::Overflow)?
        .checked_div(FEE_SCALE as u128)
        .ok_or(LaunchpadError::DivisionByZero)?;

    u64::try_from(value).map_err(|_| LaunchpadError::Overflow.into())
}

// Whole days elapsed between two timestamps, zero if `to` is before `from`
pub fn calc_days(from: i64, to: i64) -> u64 {
    if to <= from {
        return 0;
    }
    ((to - from) / SECONDS_PER_DAY) as u64
}

// Fixed sale rate: how many token base units one lamport buys
pub fn calc_tokens_per_sol(sale_amount: u64, fundraising_goal: u64) -> Result<u64> {
    require!(fundraising_goal > 0, LaunchpadError::DivisionByZero);
    Ok(sale_amount / fundraising_goal)
}

// Ceiling division on u128, used so reserve products never shrink
pub fn ceil_div(numerator: u128, denominator: u128) -> Result<u128> {
    require!(denominator > 0, LaunchpadError::DivisionByZero);
    let quotient = numerator / denominator;
    if numerator % denominator == 0 {
        Ok(quotient)
    } else {
        quotient.checked_add(1).ok_or(LaunchpadError::Overflow.into())
    }
}

// CPI HELPERS

// Move lamports out of a signer wallet
pub fn transfer_sol<'info>(
    amount: u64,
    system_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    system_program::transfer(
        CpiContext::new(
            system_program.clone(),
            system_program::Transfer {
                from: from.clone(),
                to: to.clone(),
            },
        ),
        amount,
    )
}

// Move lamports out of a system-owned PDA (escrow or reserve)
pub fn transfer_sol_from_pda<'info>(
    amount: u64,
    system_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    pda_seeds: &[&[u8]],
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let signer_seeds = &[pda_seeds];

    system_program::transfer(
        CpiContext::new_with_signer(
            system_program.clone(),
            system_program::Transfer {
                from: from.clone(),
                to: to.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}

// Token transfer signed by the holder
pub fn transfer_tokens<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
) -> Result<()> {
    token::transfer(
        CpiContext::new(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
        ),
        amount,
    )
}

// Token transfer out of a PDA-owned account (escrow or reserve)
pub fn transfer_tokens_signed<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    authority_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[authority_seeds];

    token::transfer(
        CpiContext::new_with_signer(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}

// Mint supply with a PDA as mint authority
pub fn mint_tokens<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    authority_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[authority_seeds];

    token::mint_to(
        CpiContext::new_with_signer(
            token_program.clone(),
            MintTo {
                mint: mint.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}

// Burn tokens from a holder's account
pub fn burn_tokens<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
) -> Result<()> {
    token::burn(
        CpiContext::new(
            token_program.clone(),
            Burn {
                mint: mint.clone(),
                from: from.clone(),
                authority: authority.clone(),
            },
        ),
        amount,
    )
}

// GOVERNANCE HELPERS

// Tail of every execute instruction: stamp execution, free the payload digest
// so an identical proposal can be raised again, and log the outcome
pub fn finalize_execution(
    proposal: &mut Proposal,
    registry: &mut ProposalRegistry,
    executor: Pubkey,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    proposal.mark_executed(now)?;
    registry.release(&proposal.digest);

    msg!("Proposal {} executed: {}", proposal.id, proposal.kind.label());
    emit!(ProposalExecuted {
        id: proposal.id,
        kind: proposal.kind,
        executor,
    });
    Ok(())
}

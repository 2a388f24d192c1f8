use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

/**
 * Account context for staking auxiliary tokens into a campaign
 *
 * The owner locks auxiliary tokens behind the campaign; the full staked
 * amount is returned when the campaign is stopped.
 *
 * Access Control: owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Stake<'info> {
    /// The campaign to stake into
    #[account(mut)]
    pub campaign: Account<'info, Campaign>,

    /// Auxiliary vault, authority is the campaign PDA
    #[account(
        mut,
        seeds = [AUX_VAULT_SEED.as_bytes(), campaign.key().as_ref()],
        bump
    )]
    pub aux_vault: InterfaceAccount<'info, TokenAccount>,

    /// Owner's auxiliary token account funding the stake
    #[account(
        mut,
        token::mint = campaign.aux_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_aux_account: InterfaceAccount<'info, TokenAccount>,

    /// The auxiliary mint, for transfer_checked
    #[account(
        token::token_program = token_program,
        constraint = aux_mint.key() == campaign.aux_mint @ WebproofDropError::TokenMintMismatch
    )]
    pub aux_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The owner of the campaign
    #[account(
        mut,
        constraint = owner.key() == campaign.owner @ WebproofDropError::PermissionDenied
    )]
    pub owner: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Stakes auxiliary tokens into the campaign
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Amount of auxiliary tokens to stake, must be non-zero
 *
 * Rejected once the campaign is stopped: the sweep has already run and a
 * late deposit would be stranded in the vault.
 */
pub fn handle_stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
    require!(amount > 0, WebproofDropError::ZeroAmount);

    let campaign = &mut ctx.accounts.campaign;
    campaign.assert_stakeable()?;

    let staked_aux_amount = campaign
        .staked_aux_amount
        .checked_add(amount)
        .ok_or(WebproofDropError::ArithmeticOverflow)?;
    campaign.staked_aux_amount = staked_aux_amount;

    // Owner-signed pull into the vault
    transfer_token(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.owner_aux_account.to_account_info(),
        ctx.accounts.aux_vault.to_account_info(),
        ctx.accounts.aux_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.aux_mint.decimals,
        None,
    )?;

    emit_cpi!(AuxTokensStaked {
        campaign: ctx.accounts.campaign.key(),
        owner: ctx.accounts.owner.key(),
        amount,
        staked_aux_amount,
    });

    Ok(())
}

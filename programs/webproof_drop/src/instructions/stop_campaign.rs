use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

/**
 * Account context for stopping a campaign
 *
 * Stopping is terminal: the stopped flag flips true and never back, every
 * later claim fails, and both vault balances are swept back to the owner in
 * the same transaction. The campaign account stays open so the flag keeps
 * rejecting claims.
 *
 * Access Control: owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct StopCampaign<'info> {
    /// The campaign to stop
    #[account(mut)]
    pub campaign: Account<'info, Campaign>,

    /// Payout vault to sweep
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), campaign.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Auxiliary vault to sweep
    #[account(
        mut,
        seeds = [AUX_VAULT_SEED.as_bytes(), campaign.key().as_ref()],
        bump
    )]
    pub aux_vault: InterfaceAccount<'info, TokenAccount>,

    /// Owner's token account receiving the remaining payout balance
    #[account(
        mut,
        token::mint = campaign.payout_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Owner's auxiliary token account receiving the staked balance
    #[account(
        mut,
        token::mint = campaign.aux_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_aux_account: InterfaceAccount<'info, TokenAccount>,

    /// The payout mint, for transfer_checked
    #[account(
        token::token_program = token_program,
        constraint = payout_mint.key() == campaign.payout_mint @ WebproofDropError::TokenMintMismatch
    )]
    pub payout_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

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
 * Stops the campaign and returns all held balances to the owner
 *
 * @param ctx - The account context containing all required accounts
 *
 * Safe to call with either balance already at zero; the corresponding
 * transfer is simply skipped. A second call fails with AlreadyStopped.
 */
pub fn handle_stop_campaign(ctx: Context<StopCampaign>) -> Result<()> {
    let campaign = &mut ctx.accounts.campaign;

    require!(!campaign.stopped, WebproofDropError::AlreadyStopped);

    // ===== EFFECTS PHASE =====

    campaign.stopped = true;
    let stake_returned = ctx.accounts.aux_vault.amount;
    let payout_returned = ctx.accounts.token_vault.amount;
    campaign.staked_aux_amount = 0;

    let campaign_id_bytes = campaign.campaign_id.to_le_bytes();
    let payout_mint_key = campaign.payout_mint;
    let owner_key = campaign.owner;
    let campaign_bump = campaign.bump;
    let campaign_key = campaign.key();
    let claims_made = campaign.claims_made;

    let seeds = &[
        CAMPAIGN_SEED.as_bytes(),
        payout_mint_key.as_ref(),
        owner_key.as_ref(),
        campaign_id_bytes.as_ref(),
        &[campaign_bump],
    ];
    let signer = &[&seeds[..]];

    // ===== INTERACTIONS PHASE =====

    if payout_returned > 0 {
        transfer_token(
            ctx.accounts.campaign.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            ctx.accounts.owner_token_account.to_account_info(),
            ctx.accounts.payout_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            payout_returned,
            ctx.accounts.payout_mint.decimals,
            Some(signer),
        )?;
    }

    // Sweeps the actual vault balance, not just the recorded stake, so
    // tokens donated directly to the vault are recoverable too
    if stake_returned > 0 {
        transfer_token(
            ctx.accounts.campaign.to_account_info(),
            ctx.accounts.aux_vault.to_account_info(),
            ctx.accounts.owner_aux_account.to_account_info(),
            ctx.accounts.aux_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            stake_returned,
            ctx.accounts.aux_mint.decimals,
            Some(signer),
        )?;
    }

    emit_cpi!(CampaignStopped {
        campaign: campaign_key,
        owner: ctx.accounts.owner.key(),
        payout_returned,
        stake_returned,
        claims_made,
    });

    Ok(())
}

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new drop campaign
 *
 * This instruction initializes a campaign at its deterministic address and
 * funds it for the full allotment:
 * - Creates the campaign PDA from (payout_mint, owner, campaign_id)
 * - Creates the payout vault and the auxiliary staking vault, both owned by
 *   the campaign PDA
 * - Pulls amount_per_claim * max_claims of the payout token from the owner
 *   into the vault
 *
 * Access Control: the owner signs and funds the campaign
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(campaign_id: u64)]
pub struct CreateCampaign<'info> {
    /// The main campaign account (PDA)
    /// - Derived from: ["campaign", payout_mint, owner, campaign_id]
    #[account(
        init,
        payer = owner,
        space = Campaign::LEN,
        seeds = [
            CAMPAIGN_SEED.as_bytes(),
            payout_mint.key().as_ref(),
            owner.key().as_ref(),
            campaign_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub campaign: Account<'info, Campaign>,

    /// Payout vault holding the tokens to be distributed
    /// - Derived from: ["vault", campaign_key]
    #[account(
        init,
        token::mint = payout_mint,
        token::authority = campaign,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), campaign.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Auxiliary vault holding staked tokens
    /// - Derived from: ["aux_vault", campaign_key]
    #[account(
        init,
        token::mint = aux_mint,
        token::authority = campaign,
        token::token_program = token_program,
        seeds = [AUX_VAULT_SEED.as_bytes(), campaign.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub aux_vault: InterfaceAccount<'info, TokenAccount>,

    /// The mint of the token being distributed
    #[account(
        token::token_program = token_program,
    )]
    pub payout_mint: InterfaceAccount<'info, Mint>,

    /// The mint of the auxiliary staking token
    #[account(
        token::token_program = token_program,
    )]
    pub aux_mint: InterfaceAccount<'info, Mint>,

    /// Owner's token account funding the payout vault
    #[account(
        mut,
        token::mint = payout_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The owner of the campaign
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Creates and funds a new drop campaign
 *
 * @param ctx - The account context containing all required accounts
 * @param campaign_id - Caller-chosen id, part of the PDA derivation
 * @param amount_per_claim - Tokens paid out per successful claim
 * @param max_claims - Maximum number of successful claims
 * @param schema_id - Proof schema this campaign accepts
 * @param expiration_timestamp - Unix timestamp after which claims fail
 * @param metadata_ref - Opaque metadata reference
 * @param allocator - Trusted allocator address, the trust anchor of the
 *                    signature chain
 */
#[allow(clippy::too_many_arguments)]
pub fn handle_create_campaign(
    ctx: Context<CreateCampaign>,
    campaign_id: u64,
    amount_per_claim: u64,
    max_claims: u64,
    schema_id: [u8; 32],
    expiration_timestamp: i64,
    metadata_ref: [u8; 32],
    allocator: [u8; 20],
) -> Result<()> {
    require!(amount_per_claim > 0, WebproofDropError::ZeroAmount);
    require!(max_claims > 0, WebproofDropError::ZeroAmount);

    let current_time = Clock::get()?.unix_timestamp;
    require!(
        expiration_timestamp > current_time,
        WebproofDropError::InvalidExpiration
    );

    // Full allotment pulled from the owner up front
    let total_amount = amount_per_claim
        .checked_mul(max_claims)
        .ok_or(WebproofDropError::ArithmeticOverflow)?;

    let campaign = &mut ctx.accounts.campaign;
    campaign.bump = ctx.bumps.campaign;
    campaign.campaign_id = campaign_id;
    campaign.owner = ctx.accounts.owner.key();
    campaign.payout_mint = ctx.accounts.payout_mint.key();
    campaign.token_vault = ctx.accounts.token_vault.key();
    campaign.aux_mint = ctx.accounts.aux_mint.key();
    campaign.aux_vault = ctx.accounts.aux_vault.key();
    campaign.amount_per_claim = amount_per_claim;
    campaign.max_claims = max_claims;
    campaign.allocator = allocator;
    campaign.schema_id = schema_id;
    campaign.expiration_timestamp = expiration_timestamp;
    campaign.metadata_ref = metadata_ref;
    // claims_made, staked_aux_amount and stopped start at their defaults

    transfer_token(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.owner_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.payout_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        total_amount,
        ctx.accounts.payout_mint.decimals,
        None, // owner-signed transfer
    )?;

    emit_cpi!(CampaignCreated {
        campaign: ctx.accounts.campaign.key(),
        campaign_id,
        owner: ctx.accounts.owner.key(),
        payout_mint: ctx.accounts.payout_mint.key(),
        aux_mint: ctx.accounts.aux_mint.key(),
        amount_per_claim,
        max_claims,
        allocator,
        schema_id,
        expiration_timestamp,
        metadata_ref,
    });

    Ok(())
}

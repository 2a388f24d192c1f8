use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{transfer_token, verify_allocator_delegation, verify_validator_attestation};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

/**
 * Account context for the direct claim path
 *
 * The claimant presents a webproof whose recipient field is their own
 * address. The instruction verifies the two-hop signature chain, reserves
 * both replay receipts, then pays out from the vault.
 *
 * Access Control: any signer with a valid webproof issued for their address
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(task_id: [u8; 32], validator_address: [u8; 20], identity_hash: [u8; 32])]
pub struct Claim<'info> {
    /// The campaign being claimed against
    #[account(mut)]
    pub campaign: Account<'info, Campaign>,

    /// Replay receipt for the proof's identity hash
    /// - Derived from: ["identity", campaign_key, identity_hash]
    /// - Created on first use; its claimed flag rejects replays
    #[account(
        init_if_needed,
        payer = claimant,
        space = IdentityReceipt::LEN,
        seeds = [IDENTITY_RECEIPT_SEED.as_bytes(), campaign.key().as_ref(), identity_hash.as_ref()],
        bump
    )]
    pub identity_receipt: Account<'info, IdentityReceipt>,

    /// Replay receipt for the claiming wallet
    /// - Derived from: ["wallet", campaign_key, claimant_key]
    /// - Direct path only: one claim per stable wallet address
    #[account(
        init_if_needed,
        payer = claimant,
        space = WalletReceipt::LEN,
        seeds = [WALLET_RECEIPT_SEED.as_bytes(), campaign.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub wallet_receipt: Account<'info, WalletReceipt>,

    /// Payout vault, authority is the campaign PDA
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), campaign.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account receiving the payout
    #[account(
        mut,
        token::mint = campaign.payout_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The payout mint, for transfer_checked
    #[account(
        token::token_program = token_program,
        constraint = payout_mint.key() == campaign.payout_mint @ WebproofDropError::TokenMintMismatch
    )]
    pub payout_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The claimant; must match the proof's recipient field
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for receipt creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a direct webproof claim
 *
 * @param ctx - The account context containing all required accounts
 * @param task_id - Proof task id signed by both chain hops
 * @param validator_address - Validator the allocator delegated to
 * @param identity_hash - Privacy-preserving hash of the off-chain identity
 * @param public_fields_hash - Hash of the proof's public fields
 * @param recipient - Recipient field of the proof, must equal the claimant
 * @param allocator_signature - First hop of the signature chain
 * @param validator_signature - Second hop of the signature chain
 *
 * Validation order, cheapest and most attacker-controllable first:
 * 1. Campaign open (not stopped, not expired, supply remaining)
 * 2. Allocator delegation over (task_id, schema_id, validator)
 * 3. Validator attestation cross-checked against the delegated validator
 * 4. Proof recipient equals the transaction's signer
 * 5. Identity and wallet replay receipts unclaimed
 *
 * Replay receipts and the claim counter are committed before the token
 * transfer CPI so a reentering token program can never observe pre-update
 * state.
 */
#[allow(clippy::too_many_arguments)]
pub fn handle_claim(
    ctx: Context<Claim>,
    task_id: [u8; 32],
    validator_address: [u8; 20],
    identity_hash: [u8; 32],
    public_fields_hash: [u8; 32],
    recipient: [u8; 32],
    allocator_signature: [u8; 65],
    validator_signature: [u8; 65],
) -> Result<()> {
    let campaign = &mut ctx.accounts.campaign;
    let identity_receipt = &mut ctx.accounts.identity_receipt;
    let wallet_receipt = &mut ctx.accounts.wallet_receipt;
    let claimant_key = ctx.accounts.claimant.key();

    // ===== VALIDATION PHASE =====

    let current_time = Clock::get()?.unix_timestamp;
    campaign.assert_claimable(current_time)?;

    verify_allocator_delegation(
        &task_id,
        &campaign.schema_id,
        &validator_address,
        &allocator_signature,
        &campaign.allocator,
    )?;

    verify_validator_attestation(
        &task_id,
        &campaign.schema_id,
        &identity_hash,
        &public_fields_hash,
        &recipient,
        &validator_signature,
        &validator_address,
    )?;

    // The proof must have been issued for the caller's own address
    require!(
        recipient == claimant_key.to_bytes(),
        WebproofDropError::RecipientMismatch
    );

    identity_receipt.assert_unclaimed()?;
    wallet_receipt.assert_unclaimed()?;

    let amount = campaign.amount_per_claim;
    require!(
        ctx.accounts.token_vault.amount >= amount,
        WebproofDropError::InsufficientVaultBalance
    );

    // ===== EFFECTS PHASE (state committed before the transfer CPI) =====

    identity_receipt.claimed = true;
    identity_receipt.recipient = claimant_key;
    wallet_receipt.claimed = true;

    let claims_made = campaign
        .claims_made
        .checked_add(1)
        .ok_or(WebproofDropError::ArithmeticOverflow)?;
    campaign.claims_made = claims_made;

    // ===== INTERACTIONS PHASE =====

    // Copies for the signer seeds, so the campaign borrow can end
    let campaign_id_bytes = campaign.campaign_id.to_le_bytes();
    let payout_mint_key = campaign.payout_mint;
    let owner_key = campaign.owner;
    let campaign_bump = campaign.bump;
    let campaign_key = campaign.key();

    let seeds = &[
        CAMPAIGN_SEED.as_bytes(),
        payout_mint_key.as_ref(),
        owner_key.as_ref(),
        campaign_id_bytes.as_ref(),
        &[campaign_bump],
    ];
    let signer = &[&seeds[..]];

    transfer_token(
        ctx.accounts.campaign.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.claimant_token_account.to_account_info(),
        ctx.accounts.payout_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.payout_mint.decimals,
        Some(signer),
    )?;

    emit_cpi!(TokensClaimed {
        campaign: campaign_key,
        recipient: claimant_key,
        identity_hash,
        amount,
        claims_made,
        ephemeral: false,
    });

    Ok(())
}

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{
    masked_recipient, transfer_token, verify_allocator_delegation, verify_ephemeral_authorization,
    verify_validator_attestation,
};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

/**
 * Account context for the ephemeral-key claim path
 *
 * A proof issued for a throwaway key can redirect its payout to a durable
 * wallet. The proof's recipient field is not an address at all but the XOR
 * of the campaign address and the ephemeral key address, which binds the
 * proof to this specific campaign instance and this specific key. The holder
 * of the ephemeral key authorizes the redirection by signing the real
 * recipient's address.
 *
 * Any relayer may submit the transaction and pay the receipt rent; the
 * payout goes to the real recipient, not the payer. The wallet replay
 * receipt is not consulted here because the ephemeral key is a one-time
 * identity; the identity hash alone is the anti-replay key.
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(task_id: [u8; 32], validator_address: [u8; 20], identity_hash: [u8; 32])]
pub struct ClaimWithEphemeralKey<'info> {
    /// The campaign being claimed against
    #[account(mut)]
    pub campaign: Account<'info, Campaign>,

    /// Replay receipt for the proof's identity hash
    /// - Derived from: ["identity", campaign_key, identity_hash]
    #[account(
        init_if_needed,
        payer = payer,
        space = IdentityReceipt::LEN,
        seeds = [IDENTITY_RECEIPT_SEED.as_bytes(), campaign.key().as_ref(), identity_hash.as_ref()],
        bump
    )]
    pub identity_receipt: Account<'info, IdentityReceipt>,

    /// Payout vault, authority is the campaign PDA
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), campaign.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Real recipient's token account receiving the payout
    #[account(
        mut,
        token::mint = campaign.payout_mint,
        token::authority = recipient,
        token::token_program = token_program,
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The payout mint, for transfer_checked
    #[account(
        token::token_program = token_program,
        constraint = payout_mint.key() == campaign.payout_mint @ WebproofDropError::TokenMintMismatch
    )]
    pub payout_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The real payout recipient
    /// CHECK: does not sign; authorized by the ephemeral key signature over
    /// this address
    pub recipient: AccountInfo<'info>,

    /// Transaction payer, typically a relayer; pays the receipt rent
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for receipt creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes an ephemeral-key webproof claim
 *
 * @param ctx - The account context containing all required accounts
 * @param task_id - Proof task id signed by both chain hops
 * @param validator_address - Validator the allocator delegated to
 * @param identity_hash - Privacy-preserving hash of the off-chain identity
 * @param public_fields_hash - Hash of the proof's public fields
 * @param recipient - Recipient field of the proof; must equal
 *                    XOR(campaign_address, ephemeral_key_address)
 * @param ephemeral_key_address - Address of the one-time key the proof was
 *                                issued for
 * @param ephemeral_key_signature - Signature by the ephemeral key over the
 *                                  real recipient's address
 * @param allocator_signature - First hop of the signature chain
 * @param validator_signature - Second hop of the signature chain
 *
 * The expected proof recipient is recomputed on-chain as
 * XOR(campaign_address, ephemeral_key_address); a proof carrying any other
 * recipient value fails RecipientMismatch before signature recovery of the
 * ephemeral authorization is even attempted.
 */
#[allow(clippy::too_many_arguments)]
pub fn handle_claim_with_ephemeral_key(
    ctx: Context<ClaimWithEphemeralKey>,
    task_id: [u8; 32],
    validator_address: [u8; 20],
    identity_hash: [u8; 32],
    public_fields_hash: [u8; 32],
    recipient: [u8; 32],
    ephemeral_key_address: [u8; 20],
    ephemeral_key_signature: [u8; 65],
    allocator_signature: [u8; 65],
    validator_signature: [u8; 65],
) -> Result<()> {
    let campaign = &mut ctx.accounts.campaign;
    let identity_receipt = &mut ctx.accounts.identity_receipt;
    let recipient_key = ctx.accounts.recipient.key();
    let campaign_key = campaign.key();

    // ===== VALIDATION PHASE =====

    let current_time = Clock::get()?.unix_timestamp;
    campaign.assert_claimable(current_time)?;

    // The proof's recipient must be the masked binding of this campaign and
    // this ephemeral key; a masked value built for another campaign or
    // another key fails here before any signature recovery
    require!(
        recipient == masked_recipient(&campaign_key, &ephemeral_key_address),
        WebproofDropError::RecipientMismatch
    );

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

    // The ephemeral key holder must have authorized this exact recipient
    verify_ephemeral_authorization(
        &recipient_key,
        &ephemeral_key_signature,
        &ephemeral_key_address,
    )?;

    identity_receipt.assert_unclaimed()?;

    let amount = campaign.amount_per_claim;
    require!(
        ctx.accounts.token_vault.amount >= amount,
        WebproofDropError::InsufficientVaultBalance
    );

    // ===== EFFECTS PHASE (state committed before the transfer CPI) =====

    identity_receipt.claimed = true;
    identity_receipt.recipient = recipient_key;

    let claims_made = campaign
        .claims_made
        .checked_add(1)
        .ok_or(WebproofDropError::ArithmeticOverflow)?;
    campaign.claims_made = claims_made;

    // ===== INTERACTIONS PHASE =====

    let campaign_id_bytes = campaign.campaign_id.to_le_bytes();
    let payout_mint_key = campaign.payout_mint;
    let owner_key = campaign.owner;
    let campaign_bump = campaign.bump;

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
        ctx.accounts.recipient_token_account.to_account_info(),
        ctx.accounts.payout_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.payout_mint.decimals,
        Some(signer),
    )?;

    emit_cpi!(TokensClaimed {
        campaign: campaign_key,
        recipient: recipient_key,
        identity_hash,
        amount,
        claims_made,
        ephemeral: true,
    });

    Ok(())
}

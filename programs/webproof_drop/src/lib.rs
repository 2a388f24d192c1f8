use anchor_lang::prelude::*;

declare_id!("GXmY61fSL923EwsbnqX8NVnRaxGtNxYnGsorKwnGM3nU");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Webproof Drop Program
 *
 * A Solana program distributing fixed-size token allotments to recipients
 * who present a two-party cryptographic proof of eligibility ("webproof"),
 * plus a deterministic instance factory with a rotatable shared
 * implementation.
 *
 * Key Features:
 * - Two-hop signature chain verification (allocator delegates a validator,
 *   the validator attests a hashed identity and binds it to a recipient)
 * - Replay protection per identity hash and, on the direct path, per wallet
 * - Ephemeral-key redirection: a proof issued for a throwaway key pays out
 *   to a durable wallet, with the proof bound to one campaign via XOR
 *   address masking
 * - Owner lifecycle controls: staking an auxiliary token, a terminal stop
 *   that sweeps balances home, metadata updates
 * - Deterministic, precomputable instance addresses and a mastercopy
 *   registry with a monotonic version counter
 *
 * Architecture:
 * - Campaign PDA: distribution parameters, trust anchor and bookkeeping
 * - Vault PDAs: payout and auxiliary token accounts owned by the campaign
 * - Receipt PDAs: consumed identity hashes and claimed wallets
 * - Factory PDA: mastercopy registry and chain domain
 * - Instance PDAs: zero until their one-time bind
 *
 * Workflow:
 * 1. Owner creates and funds a campaign (or deploys an instance through the
 *    factory at an address known in advance)
 * 2. Users claim with a webproof, directly or through an ephemeral key
 * 3. Owner optionally stakes auxiliary tokens behind the campaign
 * 4. Owner stops the campaign; remaining balances return to the owner
 */
#[program]
pub mod webproof_drop {
    use super::*;

    /**
     * Creates and funds a new drop campaign
     *
     * Pulls amount_per_claim * max_claims of the payout token from the owner
     * into a campaign-owned vault and records the trust configuration
     * (allocator address, schema id, expiration).
     *
     * Access Control: owner (signer, funder)
     */
    #[allow(clippy::too_many_arguments)]
    pub fn create_campaign(
        ctx: Context<CreateCampaign>,
        campaign_id: u64,
        amount_per_claim: u64,
        max_claims: u64,
        schema_id: [u8; 32],
        expiration_timestamp: i64,
        metadata_ref: [u8; 32],
        allocator: [u8; 20],
    ) -> Result<()> {
        handle_create_campaign(
            ctx,
            campaign_id,
            amount_per_claim,
            max_claims,
            schema_id,
            expiration_timestamp,
            metadata_ref,
            allocator,
        )
    }

    /**
     * Claims tokens with a webproof issued for the caller's own address
     *
     * Verifies the allocator -> validator signature chain, requires the
     * proof's recipient to equal the signer, reserves the identity and
     * wallet replay receipts, then transfers amount_per_claim to the caller.
     *
     * Access Control: any signer with a valid webproof
     */
    #[allow(clippy::too_many_arguments)]
    pub fn claim(
        ctx: Context<Claim>,
        task_id: [u8; 32],
        validator_address: [u8; 20],
        identity_hash: [u8; 32],
        public_fields_hash: [u8; 32],
        recipient: [u8; 32],
        allocator_signature: [u8; 65],
        validator_signature: [u8; 65],
    ) -> Result<()> {
        handle_claim(
            ctx,
            task_id,
            validator_address,
            identity_hash,
            public_fields_hash,
            recipient,
            allocator_signature,
            validator_signature,
        )
    }

    /**
     * Claims tokens with a webproof issued for an ephemeral key
     *
     * The proof's recipient must equal XOR(campaign_address,
     * ephemeral_key_address); the ephemeral key holder signs the real
     * recipient's address to authorize the redirection. Only the identity
     * hash is replay-guarded on this path.
     *
     * Access Control: any payer; payout goes to the authorized recipient
     */
    #[allow(clippy::too_many_arguments)]
    pub fn claim_with_ephemeral_key(
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
        handle_claim_with_ephemeral_key(
            ctx,
            task_id,
            validator_address,
            identity_hash,
            public_fields_hash,
            recipient,
            ephemeral_key_address,
            ephemeral_key_signature,
            allocator_signature,
            validator_signature,
        )
    }

    /**
     * Stakes auxiliary tokens into the campaign
     *
     * Access Control: owner only
     */
    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        handle_stake(ctx, amount)
    }

    /**
     * Stops the campaign permanently and sweeps both vaults to the owner
     *
     * Access Control: owner only
     */
    pub fn stop_campaign(ctx: Context<StopCampaign>) -> Result<()> {
        handle_stop_campaign(ctx)
    }

    /**
     * Replaces the campaign's metadata reference
     *
     * Access Control: owner only
     */
    pub fn update_metadata(ctx: Context<UpdateMetadata>, new_ref: [u8; 32]) -> Result<()> {
        handle_update_metadata(ctx, new_ref)
    }

    /**
     * Creates the factory registry with its initial mastercopy
     *
     * Access Control: owner (signer)
     */
    pub fn initialize_factory(
        ctx: Context<InitializeFactory>,
        chain_domain: u64,
        mastercopy: Pubkey,
    ) -> Result<()> {
        handle_initialize_factory(ctx, chain_domain, mastercopy)
    }

    /**
     * Rotates the factory's mastercopy and bumps the version counter
     *
     * Access Control: factory owner only
     */
    pub fn set_mastercopy(ctx: Context<SetMastercopy>, new_mastercopy: Pubkey) -> Result<()> {
        handle_set_mastercopy(ctx, new_mastercopy)
    }

    /**
     * Deploys a zero-initialized instance at its deterministic address
     *
     * The address is a pure function of (factory, creator, campaign_id);
     * deploying twice with the same pair fails with AlreadyDeployed.
     *
     * Access Control: creator (signer, payer)
     */
    pub fn create_instance(
        ctx: Context<CreateInstance>,
        campaign_id: u64,
        config_signer: Pubkey,
    ) -> Result<()> {
        handle_create_instance(ctx, campaign_id, config_signer)
    }

    /**
     * Binds a freshly deployed instance to its factory and creator
     *
     * First call sets the binding permanently; later calls are no-ops.
     *
     * Access Control: creator only (enforced by PDA seeds)
     */
    pub fn bind_instance(ctx: Context<BindInstance>, campaign_id: u64) -> Result<()> {
        handle_bind_instance(ctx, campaign_id)
    }
}

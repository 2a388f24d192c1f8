use anchor_lang::prelude::*;

use crate::error::WebproofDropError;

/**
 * Main campaign state account
 *
 * One account per drop campaign. Holds the payout parameters, the trust
 * anchor for webproof verification, and the mutable bookkeeping fields
 * (claims made, staked amount, stopped flag).
 *
 * Derivation: ["campaign", payout_mint, owner, campaign_id]
 *
 * Lifecycle:
 * 1. Created and funded during create_campaign
 * 2. Mutated by claim / claim_with_ephemeral_key (claims_made increments)
 * 3. Mutated by stake (staked_aux_amount increments)
 * 4. Terminated by stop_campaign (stopped flips true, balances swept);
 *    the account persists so the stopped flag keeps rejecting claims
 */
#[account]
#[derive(Default, Debug)]
pub struct Campaign {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Caller-chosen campaign id
    /// - Part of the PDA derivation, allows multiple campaigns per (token, owner) pair
    pub campaign_id: u64,

    /// Owner of the campaign
    /// - Can stake, stop and update metadata
    pub owner: Pubkey,

    /// Mint of the token being distributed
    pub payout_mint: Pubkey,

    /// Payout vault token account address
    /// - PDA-authority token account derived from: ["vault", campaign_key]
    pub token_vault: Pubkey,

    /// Mint of the auxiliary staking token
    pub aux_mint: Pubkey,

    /// Auxiliary vault token account address
    /// - Derived from: ["aux_vault", campaign_key]
    pub aux_vault: Pubkey,

    /// Tokens transferred to the recipient on each successful claim
    pub amount_per_claim: u64,

    /// Maximum number of successful claims
    pub max_claims: u64,

    /// Number of successful claims so far
    /// - Invariant: claims_made <= max_claims
    pub claims_made: u64,

    /// Auxiliary tokens currently staked by the owner
    /// - Returned in full when the campaign is stopped
    pub staked_aux_amount: u64,

    /// Trusted allocator address (Ethereum-style, 20 bytes)
    /// - The trust anchor of the signature chain; injected at creation,
    ///   never mutated
    pub allocator: [u8; 20],

    /// Proof schema this campaign accepts
    pub schema_id: [u8; 32],

    /// Unix timestamp after which claims are rejected
    pub expiration_timestamp: i64,

    /// Monotonic stop flag (false -> true only)
    /// - Once true, no claim can ever succeed
    pub stopped: bool,

    /// Opaque metadata reference (e.g. an IPFS content hash)
    pub metadata_ref: [u8; 32],
}

impl Campaign {
    /// Space required for this account, 8-byte discriminator included
    pub const LEN: usize = 8 + std::mem::size_of::<Campaign>();

    /// Per-call claim guards, evaluated at execution time in order of
    /// increasing cost: stop flag, expiration, remaining supply. Expiration
    /// and exhaustion are guard conditions, not stored states, so a claim
    /// that was valid at submission still fails here if a concurrent claim
    /// exhausted the supply first.
    pub fn assert_claimable(&self, current_time: i64) -> Result<()> {
        require!(!self.stopped, WebproofDropError::CampaignStopped);
        require!(
            current_time <= self.expiration_timestamp,
            WebproofDropError::CampaignExpired
        );
        require!(
            self.claims_made < self.max_claims,
            WebproofDropError::SupplyExhausted
        );
        Ok(())
    }

    /// Stake guard. The sweep in stop_campaign runs exactly once, so a
    /// deposit into an already-stopped campaign could never be returned.
    pub fn assert_stakeable(&self) -> Result<()> {
        require!(!self.stopped, WebproofDropError::CampaignStopped);
        Ok(())
    }
}

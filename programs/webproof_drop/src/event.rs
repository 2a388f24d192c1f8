use anchor_lang::prelude::*;

/// Event emitted when a new campaign is created
#[event]
pub struct CampaignCreated {
    /// The campaign account public key
    pub campaign: Pubkey,
    /// Caller-chosen campaign id (part of the PDA derivation)
    pub campaign_id: u64,
    /// Owner of the campaign
    pub owner: Pubkey,
    /// Mint of the token being distributed
    pub payout_mint: Pubkey,
    /// Mint of the auxiliary staking token
    pub aux_mint: Pubkey,
    /// Tokens paid out per successful claim
    pub amount_per_claim: u64,
    /// Maximum number of claims
    pub max_claims: u64,
    /// Trusted allocator address (Ethereum-style)
    pub allocator: [u8; 20],
    /// Proof schema this campaign accepts
    pub schema_id: [u8; 32],
    /// Unix timestamp after which claims are rejected
    pub expiration_timestamp: i64,
    /// Opaque metadata reference
    pub metadata_ref: [u8; 32],
}

/// Event emitted when tokens are claimed, on either claim path
#[event]
pub struct TokensClaimed {
    /// The campaign account public key
    pub campaign: Pubkey,
    /// Final payout recipient
    pub recipient: Pubkey,
    /// Identity hash consumed by this claim
    pub identity_hash: [u8; 32],
    /// Amount transferred
    pub amount: u64,
    /// Claims made after this one
    pub claims_made: u64,
    /// True when the claim was redirected through an ephemeral key
    pub ephemeral: bool,
}

/// Event emitted when auxiliary tokens are staked into a campaign
#[event]
pub struct AuxTokensStaked {
    /// The campaign account public key
    pub campaign: Pubkey,
    /// Owner who staked
    pub owner: Pubkey,
    /// Amount staked in this transaction
    pub amount: u64,
    /// Total staked after this transaction
    pub staked_aux_amount: u64,
}

/// Event emitted when a campaign is stopped and its balances swept
#[event]
pub struct CampaignStopped {
    /// The campaign account public key
    pub campaign: Pubkey,
    /// Owner who stopped the campaign
    pub owner: Pubkey,
    /// Payout tokens returned to the owner
    pub payout_returned: u64,
    /// Auxiliary tokens returned to the owner
    pub stake_returned: u64,
    /// Claims made at the time of stopping
    pub claims_made: u64,
}

/// Event emitted when the metadata reference is replaced
#[event]
pub struct MetadataUpdated {
    /// The campaign account public key
    pub campaign: Pubkey,
    /// Previous metadata reference
    pub old_metadata_ref: [u8; 32],
    /// New metadata reference
    pub new_metadata_ref: [u8; 32],
}

/// Event emitted when the factory registry is created or its mastercopy rotated
#[event]
pub struct MastercopySet {
    /// The factory account public key
    pub factory: Pubkey,
    /// Previous implementation (default pubkey on initialization)
    pub old_mastercopy: Pubkey,
    /// New implementation
    pub new_mastercopy: Pubkey,
    /// Registry version after this change
    pub version: u64,
}

/// Event emitted when an instance is deployed at its deterministic address
#[event]
pub struct InstanceDeployed {
    /// The factory account public key
    pub factory: Pubkey,
    /// Creator the address was derived from
    pub creator: Pubkey,
    /// Campaign id the address was derived from
    pub campaign_id: u64,
    /// The resulting instance address
    pub instance: Pubkey,
    /// Configuration signer supplied by the creator
    pub config_signer: Pubkey,
}

/// Event emitted when an instance binds to its factory on first configuration
#[event]
pub struct InstanceBound {
    /// The instance account public key
    pub instance: Pubkey,
    /// Factory the instance bound to
    pub factory: Pubkey,
    /// Creator the instance bound to
    pub creator: Pubkey,
    /// Chain domain copied from the factory
    pub chain_domain: u64,
    /// Factory version at bind time
    pub version: u64,
}

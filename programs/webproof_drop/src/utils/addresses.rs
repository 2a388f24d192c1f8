use anchor_lang::prelude::*;

use crate::constants::*;
use crate::ID;

/**
 * Deterministic address derivation
 *
 * Pure finders for every PDA the program owns. Deployment addresses are a
 * pure function of their seed inputs, so off-chain tooling can compute an
 * instance or receipt address before the corresponding account exists.
 */

/// Campaign address for a given (payout mint, owner, campaign id)
pub fn find_campaign_address(
    payout_mint: &Pubkey,
    owner: &Pubkey,
    campaign_id: u64,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            CAMPAIGN_SEED.as_bytes(),
            payout_mint.as_ref(),
            owner.as_ref(),
            &campaign_id.to_le_bytes(),
        ],
        &ID,
    )
}

/// Payout vault address for a campaign
pub fn find_vault_address(campaign: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED.as_bytes(), campaign.as_ref()], &ID)
}

/// Auxiliary staking vault address for a campaign
pub fn find_aux_vault_address(campaign: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[AUX_VAULT_SEED.as_bytes(), campaign.as_ref()], &ID)
}

/// Identity replay receipt address for (campaign, identity hash)
pub fn find_identity_receipt_address(
    campaign: &Pubkey,
    identity_hash: &[u8; 32],
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            IDENTITY_RECEIPT_SEED.as_bytes(),
            campaign.as_ref(),
            identity_hash.as_ref(),
        ],
        &ID,
    )
}

/// Wallet replay receipt address for (campaign, claimant)
pub fn find_wallet_receipt_address(campaign: &Pubkey, claimant: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            WALLET_RECEIPT_SEED.as_bytes(),
            campaign.as_ref(),
            claimant.as_ref(),
        ],
        &ID,
    )
}

/// Factory registry address for an owner
pub fn find_factory_address(owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[FACTORY_SEED.as_bytes(), owner.as_ref()], &ID)
}

/// Deterministic instance address for (factory, creator, campaign id).
///
/// The salt mixes both the creator and the campaign id, so two distinct
/// pairs can never derive the same address. Anyone can compute this before
/// the instance is deployed.
pub fn find_instance_address(
    factory: &Pubkey,
    creator: &Pubkey,
    campaign_id: u64,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            INSTANCE_SEED.as_bytes(),
            factory.as_ref(),
            creator.as_ref(),
            &campaign_id.to_le_bytes(),
        ],
        &ID,
    )
}

use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seed strings and webproof digest constants used throughout the program.
 */

#[constant]
/// ===== PDA SEED CONSTANTS =====

/// Seed for campaign PDA derivation
/// - Used in: ["campaign", payout_mint, owner, campaign_id]
/// - Creates unique campaign accounts for each (token, owner, campaign id) combination
pub const CAMPAIGN_SEED: &str = "campaign";

/// Seed for payout vault PDA derivation
/// - Used in: ["vault", campaign_key]
/// - The vault is a token account whose authority is the campaign PDA
pub const VAULT_SEED: &str = "vault";

/// Seed for the auxiliary (staking) token vault
/// - Used in: ["aux_vault", campaign_key]
pub const AUX_VAULT_SEED: &str = "aux_vault";

/// Seed for identity replay receipts
/// - Used in: ["identity", campaign_key, identity_hash]
/// - One receipt per consumed identity hash; the claimed flag is the
///   anti-replay record for both claim paths
pub const IDENTITY_RECEIPT_SEED: &str = "identity";

/// Seed for wallet replay receipts
/// - Used in: ["wallet", campaign_key, claimant_key]
/// - Only consulted on the direct claim path, where the claimant address is a
///   stable wallet rather than a one-time ephemeral key
pub const WALLET_RECEIPT_SEED: &str = "wallet";

/// Seed for the factory registry PDA
/// - Used in: ["factory", owner]
pub const FACTORY_SEED: &str = "factory";

/// Seed for deterministic instance addressing
/// - Used in: ["instance", factory_key, creator, campaign_id]
/// - The salt mixes creator and campaign id so distinct pairs never collide
pub const INSTANCE_SEED: &str = "instance";

/// ===== WEBPROOF DIGEST CONSTANTS =====

/// Prefix applied to every 32-byte digest before signature recovery.
/// The off-chain proof issuer signs with standard EVM personal-message
/// tooling, so recovered addresses only line up if the program applies the
/// same prefix hash before calling the recovery syscall.
pub const ETH_SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Length of an r || s || v recoverable signature
pub const SIGNATURE_LEN: usize = 65;

/// Length of an Ethereum-style address (keccak256(pubkey)[12..32])
pub const ETH_ADDRESS_LEN: usize = 20;

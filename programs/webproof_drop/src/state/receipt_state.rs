use anchor_lang::prelude::*;

use crate::error::WebproofDropError;

/**
 * Identity replay receipt
 *
 * One receipt per (campaign, identity_hash) pair. The identity hash binds to
 * the off-chain identity a proof was issued for, so a second proof carrying
 * the same hash is rejected regardless of which address or recipient it
 * targets. Receipts are created lazily on first claim and the claimed flag is
 * checked before it is set, inside the same instruction, so check-and-reserve
 * is atomic.
 *
 * Derivation: ["identity", campaign_key, identity_hash]
 */
#[account]
#[derive(Default, Debug)]
pub struct IdentityReceipt {
    /// Set on the first successful claim for this identity
    pub claimed: bool,
    /// Final payout recipient of the consuming claim, for off-chain indexing
    pub recipient: Pubkey,
}

impl IdentityReceipt {
    pub const LEN: usize = 8 + std::mem::size_of::<IdentityReceipt>();

    /// Replay guard: a consumed identity hash never claims again, on either
    /// claim path
    pub fn assert_unclaimed(&self) -> Result<()> {
        require!(!self.claimed, WebproofDropError::AlreadyClaimedByIdentity);
        Ok(())
    }
}

/**
 * Wallet replay receipt
 *
 * One receipt per (campaign, claimant) pair, consulted only on the direct
 * claim path. It stops a single chain address from free-riding on distinct
 * identities. The ephemeral-key path skips this check because the calling
 * address there is a one-time key, not a stable user identity.
 *
 * Derivation: ["wallet", campaign_key, claimant_key]
 */
#[account]
#[derive(Default, Debug)]
pub struct WalletReceipt {
    /// Set on the first successful direct claim from this wallet
    pub claimed: bool,
}

impl WalletReceipt {
    pub const LEN: usize = 8 + std::mem::size_of::<WalletReceipt>();

    /// Replay guard: one direct claim per wallet address
    pub fn assert_unclaimed(&self) -> Result<()> {
        require!(!self.claimed, WebproofDropError::AlreadyClaimedByAddress);
        Ok(())
    }
}

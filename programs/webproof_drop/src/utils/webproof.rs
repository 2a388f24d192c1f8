use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;
use anchor_lang::solana_program::secp256k1_recover::secp256k1_recover;

use crate::constants::{ETH_ADDRESS_LEN, ETH_SIGNED_MESSAGE_PREFIX, SIGNATURE_LEN};
use crate::error::WebproofDropError;

/**
 * Webproof signature-chain verification
 *
 * A webproof carries a two-hop signature chain:
 *
 *   allocator ──signs──> (task_id, schema_id, validator_address)
 *   validator ──signs──> (task_id, schema_id, identity_hash,
 *                         public_fields_hash, recipient)
 *
 * The first hop proves the trusted allocator delegated a specific validator
 * for this task and schema. The second hop is the delegated validator's
 * attestation that a hashed identity is eligible, bound to a recipient. The
 * caller must cross-check that the second signer equals the validator named
 * in the first hop; that cross-check is what welds the two signatures into
 * one chain.
 *
 * Everything here is pure and stateless. The proof issuer signs with EVM
 * personal-message tooling: 32-byte keccak digests, prefix hash, 65-byte
 * recoverable signatures, 20-byte addresses.
 */

/// Ethereum-style signer address
pub type EthAddress = [u8; ETH_ADDRESS_LEN];

/// Applies the personal-message prefix to a digest before recovery
fn signed_message_hash(digest: &[u8; 32]) -> [u8; 32] {
    keccak::hashv(&[ETH_SIGNED_MESSAGE_PREFIX, digest]).to_bytes()
}

/// Recovers the Ethereum-style address that produced `signature` over the
/// prefixed `digest`. Accepts both v in {0, 1} and the legacy {27, 28} form.
pub fn recover_eth_address(
    digest: &[u8; 32],
    signature: &[u8; SIGNATURE_LEN],
) -> Result<EthAddress> {
    let recovery_id = match signature[64] {
        v @ 0..=1 => v,
        v @ 27..=28 => v - 27,
        _ => return err!(WebproofDropError::MalformedSignature),
    };

    let message = signed_message_hash(digest);
    let pubkey = secp256k1_recover(&message, recovery_id, &signature[..64])
        .map_err(|_| error!(WebproofDropError::MalformedSignature))?;

    // address = keccak256(uncompressed pubkey)[12..32]
    let pubkey_hash = keccak::hash(&pubkey.to_bytes()).to_bytes();
    let mut address = [0u8; ETH_ADDRESS_LEN];
    address.copy_from_slice(&pubkey_hash[12..]);
    Ok(address)
}

/// Verifies the allocator's delegation of `validator_address` for
/// (task_id, schema_id).
///
/// Digest layout matches the issuer's abi.encode(bytes32, bytes32, address):
/// the 20-byte validator address rides left-padded in a 32-byte word.
pub fn verify_allocator_delegation(
    task_id: &[u8; 32],
    schema_id: &[u8; 32],
    validator_address: &EthAddress,
    signature: &[u8; SIGNATURE_LEN],
    trusted_allocator: &EthAddress,
) -> Result<()> {
    let digest = keccak::hashv(&[
        task_id,
        schema_id,
        &[0u8; 12],
        validator_address,
    ])
    .to_bytes();

    let recovered = recover_eth_address(&digest, signature)?;
    require!(
        recovered == *trusted_allocator,
        WebproofDropError::InvalidDelegation
    );
    Ok(())
}

/// Verifies the validator's attestation binding `identity_hash` to
/// `recipient`, and cross-checks the recovered signer against the validator
/// named in the delegation. A valid attestation signed by anyone other than
/// the delegated validator is rejected.
pub fn verify_validator_attestation(
    task_id: &[u8; 32],
    schema_id: &[u8; 32],
    identity_hash: &[u8; 32],
    public_fields_hash: &[u8; 32],
    recipient: &[u8; 32],
    signature: &[u8; SIGNATURE_LEN],
    delegated_validator: &EthAddress,
) -> Result<()> {
    let digest = keccak::hashv(&[
        task_id,
        schema_id,
        identity_hash,
        public_fields_hash,
        recipient,
    ])
    .to_bytes();

    let recovered = recover_eth_address(&digest, signature)?;
    require!(
        recovered == *delegated_validator,
        WebproofDropError::ChainMismatch
    );
    Ok(())
}

/// Verifies that the holder of the ephemeral key authorized redirecting the
/// payout to `real_recipient`. The signature is over the keccak digest of the
/// recipient's pubkey bytes.
pub fn verify_ephemeral_authorization(
    real_recipient: &Pubkey,
    signature: &[u8; SIGNATURE_LEN],
    ephemeral_key_address: &EthAddress,
) -> Result<()> {
    let digest = keccak::hash(real_recipient.as_ref()).to_bytes();
    let recovered = recover_eth_address(&digest, signature)?;
    require!(
        recovered == *ephemeral_key_address,
        WebproofDropError::EphemeralSignatureInvalid
    );
    Ok(())
}

/// Computes the masked recipient value an ephemeral-key proof must carry:
/// the campaign address with its low 20 bytes XORed against the ephemeral
/// key address (EVM addresses ride left-padded in a 32-byte word).
///
/// The mask binds the proof to this specific campaign and ephemeral key, so
/// the same masked value cannot be replayed against another campaign or used
/// verbatim as a plain recipient. XORing with the campaign address again
/// returns the padded ephemeral address, which is what off-chain issuance
/// relies on to construct the recipient field up front.
///
/// This is a lightweight binding, not a cryptographic commitment; a keyed
/// hash over (campaign, ephemeral key) would be the stronger construction if
/// unlinkability ever becomes a requirement.
pub fn masked_recipient(campaign: &Pubkey, ephemeral_key_address: &EthAddress) -> [u8; 32] {
    let mut masked = campaign.to_bytes();
    for (byte, key_byte) in masked[12..].iter_mut().zip(ephemeral_key_address.iter()) {
        *byte ^= key_byte;
    }
    masked
}

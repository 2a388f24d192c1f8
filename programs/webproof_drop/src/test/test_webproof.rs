use anchor_lang::error::{Error, ERROR_CODE_OFFSET};
use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::keccak;

use crate::constants::ETH_SIGNED_MESSAGE_PREFIX;
use crate::error::WebproofDropError;
use crate::utils::webproof::*;

/// Deterministic secp256k1 key for fixtures; the leading byte keeps the
/// scalar well below the curve order
fn secret_key(seed: u8) -> libsecp256k1::SecretKey {
    let mut bytes = [seed.wrapping_add(1); 32];
    bytes[0] = 1;
    libsecp256k1::SecretKey::parse(&bytes).unwrap()
}

fn eth_address(secret: &libsecp256k1::SecretKey) -> [u8; 20] {
    let pubkey = libsecp256k1::PublicKey::from_secret_key(secret);
    let serialized = pubkey.serialize();
    let hash = keccak::hash(&serialized[1..]).to_bytes();
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Signs a digest the way the proof issuer does: prefix hash, then a
/// recoverable signature with the legacy v encoding
fn sign_prefixed(digest: &[u8; 32], secret: &libsecp256k1::SecretKey) -> [u8; 65] {
    let message_hash = keccak::hashv(&[ETH_SIGNED_MESSAGE_PREFIX, digest]).to_bytes();
    let message = libsecp256k1::Message::parse(&message_hash);
    let (signature, recovery_id) = libsecp256k1::sign(&message, secret);

    let mut out = [0u8; 65];
    out[..64].copy_from_slice(&signature.serialize());
    out[64] = recovery_id.serialize() + 27;
    out
}

fn allocator_digest(
    task_id: &[u8; 32],
    schema_id: &[u8; 32],
    validator_address: &[u8; 20],
) -> [u8; 32] {
    keccak::hashv(&[task_id, schema_id, &[0u8; 12], validator_address]).to_bytes()
}

fn validator_digest(
    task_id: &[u8; 32],
    schema_id: &[u8; 32],
    identity_hash: &[u8; 32],
    public_fields_hash: &[u8; 32],
    recipient: &[u8; 32],
) -> [u8; 32] {
    keccak::hashv(&[
        task_id,
        schema_id,
        identity_hash,
        public_fields_hash,
        recipient,
    ])
    .to_bytes()
}

fn assert_error(result: anchor_lang::Result<()>, expected: WebproofDropError) {
    match result.expect_err("expected verification to fail") {
        Error::AnchorError(e) => {
            assert_eq!(e.error_code_number, expected as u32 + ERROR_CODE_OFFSET)
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
}

/// A signed webproof fixture: allocator delegates a validator, the
/// validator attests an identity bound to a recipient
struct ProofFixture {
    task_id: [u8; 32],
    schema_id: [u8; 32],
    identity_hash: [u8; 32],
    public_fields_hash: [u8; 32],
    recipient: [u8; 32],
    allocator: [u8; 20],
    validator: [u8; 20],
    allocator_signature: [u8; 65],
    validator_signature: [u8; 65],
}

fn build_fixture(recipient: [u8; 32]) -> ProofFixture {
    let allocator_key = secret_key(10);
    let validator_key = secret_key(20);
    let allocator = eth_address(&allocator_key);
    let validator = eth_address(&validator_key);

    let task_id = [3u8; 32];
    let schema_id = [4u8; 32];
    let identity_hash = [5u8; 32];
    let public_fields_hash = [6u8; 32];

    let allocator_signature = sign_prefixed(
        &allocator_digest(&task_id, &schema_id, &validator),
        &allocator_key,
    );
    let validator_signature = sign_prefixed(
        &validator_digest(
            &task_id,
            &schema_id,
            &identity_hash,
            &public_fields_hash,
            &recipient,
        ),
        &validator_key,
    );

    ProofFixture {
        task_id,
        schema_id,
        identity_hash,
        public_fields_hash,
        recipient,
        allocator,
        validator,
        allocator_signature,
        validator_signature,
    }
}

#[test]
fn test_valid_signature_chain_verifies() {
    let recipient = Pubkey::new_unique().to_bytes();
    let proof = build_fixture(recipient);

    verify_allocator_delegation(
        &proof.task_id,
        &proof.schema_id,
        &proof.validator,
        &proof.allocator_signature,
        &proof.allocator,
    )
    .unwrap();

    verify_validator_attestation(
        &proof.task_id,
        &proof.schema_id,
        &proof.identity_hash,
        &proof.public_fields_hash,
        &proof.recipient,
        &proof.validator_signature,
        &proof.validator,
    )
    .unwrap();
}

#[test]
fn test_delegation_rejects_untrusted_allocator() {
    let proof = build_fixture([7u8; 32]);
    let impostor = eth_address(&secret_key(99));

    assert_error(
        verify_allocator_delegation(
            &proof.task_id,
            &proof.schema_id,
            &proof.validator,
            &proof.allocator_signature,
            &impostor,
        ),
        WebproofDropError::InvalidDelegation,
    );
}

#[test]
fn test_delegation_rejects_tampered_payload() {
    let proof = build_fixture([7u8; 32]);
    let mut tampered_task = proof.task_id;
    tampered_task[0] ^= 0xff;

    // A different payload recovers a different signer
    assert_error(
        verify_allocator_delegation(
            &tampered_task,
            &proof.schema_id,
            &proof.validator,
            &proof.allocator_signature,
            &proof.allocator,
        ),
        WebproofDropError::InvalidDelegation,
    );
}

#[test]
fn test_attestation_rejects_undelegated_validator() {
    let proof = build_fixture([7u8; 32]);
    let rogue_validator_key = secret_key(50);
    let rogue_signature = sign_prefixed(
        &validator_digest(
            &proof.task_id,
            &proof.schema_id,
            &proof.identity_hash,
            &proof.public_fields_hash,
            &proof.recipient,
        ),
        &rogue_validator_key,
    );

    // A perfectly valid attestation signed by anyone other than the
    // delegated validator breaks the chain
    assert_error(
        verify_validator_attestation(
            &proof.task_id,
            &proof.schema_id,
            &proof.identity_hash,
            &proof.public_fields_hash,
            &proof.recipient,
            &rogue_signature,
            &proof.validator,
        ),
        WebproofDropError::ChainMismatch,
    );
}

#[test]
fn test_attestation_rejects_swapped_recipient() {
    let proof = build_fixture(Pubkey::new_unique().to_bytes());
    let other_recipient = Pubkey::new_unique().to_bytes();

    assert_error(
        verify_validator_attestation(
            &proof.task_id,
            &proof.schema_id,
            &proof.identity_hash,
            &proof.public_fields_hash,
            &other_recipient,
            &proof.validator_signature,
            &proof.validator,
        ),
        WebproofDropError::ChainMismatch,
    );
}

#[test]
fn test_recovery_accepts_both_v_encodings() {
    let secret = secret_key(33);
    let digest = [9u8; 32];
    let mut signature = sign_prefixed(&digest, &secret);
    let expected = eth_address(&secret);

    assert_eq!(recover_eth_address(&digest, &signature).unwrap(), expected);

    // Normalized v in {0, 1} must recover identically
    signature[64] -= 27;
    assert_eq!(recover_eth_address(&digest, &signature).unwrap(), expected);
}

#[test]
fn test_recovery_rejects_malformed_v() {
    let secret = secret_key(33);
    let digest = [9u8; 32];
    let mut signature = sign_prefixed(&digest, &secret);
    signature[64] = 5;

    assert_error(
        recover_eth_address(&digest, &signature).map(|_| ()),
        WebproofDropError::MalformedSignature,
    );
}

#[test]
fn test_ephemeral_authorization_binds_recipient() {
    let ephemeral_key = secret_key(77);
    let ephemeral_address = eth_address(&ephemeral_key);
    let recipient = Pubkey::new_unique();

    let digest = keccak::hash(recipient.as_ref()).to_bytes();
    let signature = sign_prefixed(&digest, &ephemeral_key);

    verify_ephemeral_authorization(&recipient, &signature, &ephemeral_address).unwrap();

    // The same signature must not authorize a different recipient
    let hijacker = Pubkey::new_unique();
    assert_error(
        verify_ephemeral_authorization(&hijacker, &signature, &ephemeral_address),
        WebproofDropError::EphemeralSignatureInvalid,
    );
}

#[test]
fn test_masked_recipient_is_self_inverting() {
    let campaign = Pubkey::new_unique();
    let ephemeral_key = secret_key(42);
    let ephemeral_address = eth_address(&ephemeral_key);

    let masked = masked_recipient(&campaign, &ephemeral_address);

    // Masking again with the same campaign returns the padded ephemeral
    // address: XOR(XOR(c, k), c) == k
    let mut recovered = masked;
    for (byte, campaign_byte) in recovered.iter_mut().zip(campaign.to_bytes().iter()) {
        *byte ^= campaign_byte;
    }

    assert_eq!(&recovered[..12], &[0u8; 12]);
    assert_eq!(&recovered[12..], &ephemeral_address);
}

#[test]
fn test_masked_recipient_binds_to_campaign() {
    let ephemeral_key = secret_key(42);
    let ephemeral_address = eth_address(&ephemeral_key);

    let campaign_a = Pubkey::new_unique();
    let campaign_b = Pubkey::new_unique();

    // The same ephemeral key masks to different values under different
    // campaigns, so a masked recipient cannot be replayed across campaigns
    assert_ne!(
        masked_recipient(&campaign_a, &ephemeral_address),
        masked_recipient(&campaign_b, &ephemeral_address)
    );

    // The upper 12 bytes are untouched campaign bytes
    let masked = masked_recipient(&campaign_a, &ephemeral_address);
    assert_eq!(&masked[..12], &campaign_a.to_bytes()[..12]);
}

#[test]
fn test_attestation_accepts_masked_recipient() {
    // End-to-end shape of the ephemeral path: the validator signs the
    // masked value, and verification against the recomputed mask succeeds
    let campaign = Pubkey::new_unique();
    let ephemeral_key = secret_key(88);
    let ephemeral_address = eth_address(&ephemeral_key);
    let masked = masked_recipient(&campaign, &ephemeral_address);

    let proof = build_fixture(masked);

    verify_validator_attestation(
        &proof.task_id,
        &proof.schema_id,
        &proof.identity_hash,
        &proof.public_fields_hash,
        &masked_recipient(&campaign, &ephemeral_address),
        &proof.validator_signature,
        &proof.validator,
    )
    .unwrap();
}

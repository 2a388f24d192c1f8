use anchor_lang::prelude::*;

#[error_code]
pub enum WebproofDropError {
    // Access control errors
    #[msg("Only the owner can perform this action")]
    PermissionDenied,

    // Campaign state errors
    #[msg("Campaign has been stopped")]
    CampaignStopped,
    #[msg("Campaign has expired")]
    CampaignExpired,
    #[msg("All claims have been made")]
    SupplyExhausted,
    #[msg("Campaign is already stopped")]
    AlreadyStopped,

    // Webproof verification errors
    #[msg("Allocator signature does not recover to the trusted allocator")]
    InvalidDelegation,
    #[msg("Validator signature does not recover to the delegated validator")]
    ChainMismatch,
    #[msg("Proof recipient does not match the expected recipient")]
    RecipientMismatch,
    #[msg("Ephemeral key signature does not recover to the ephemeral key address")]
    EphemeralSignatureInvalid,
    #[msg("Signature is malformed")]
    MalformedSignature,

    // Replay protection errors
    #[msg("This identity has already claimed")]
    AlreadyClaimedByIdentity,
    #[msg("This address has already claimed")]
    AlreadyClaimedByAddress,

    // Deployment errors
    #[msg("An instance already exists at the derived address")]
    AlreadyDeployed,
    #[msg("Supplied instance account does not match the derived address")]
    AddressCollision,

    #[msg("Mastercopy must be a real implementation address")]
    InvalidMastercopy,

    // Parameter validation errors
    #[msg("Amount must be greater than zero")]
    ZeroAmount,
    #[msg("Expiration timestamp must be in the future")]
    InvalidExpiration,
    #[msg("Token mint does not match the campaign's mint")]
    TokenMintMismatch,
    #[msg("Insufficient vault balance for this claim")]
    InsufficientVaultBalance,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}

use anchor_lang::prelude::*;

/**
 * Factory registry account
 *
 * Holds the shared implementation ("mastercopy") reference used by all
 * instances deployed through this factory. On this target the mastercopy
 * pubkey is the whole implementation template: instances resolve the current
 * implementation through the registry at call time, so rotating the
 * mastercopy retargets every future lookup without touching the stored state
 * of already-deployed instances.
 *
 * Derivation: ["factory", owner]
 */
#[account]
#[derive(Default, Debug)]
pub struct Factory {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Owner of the factory
    /// - Only principal allowed to rotate the mastercopy
    pub owner: Pubkey,

    /// Current implementation address
    pub mastercopy: Pubkey,

    /// Monotonic version counter
    /// - Starts at 1 on initialization, increments on each rotation
    /// - Exposed for introspection only
    pub version: u64,

    /// Chain identifier copied into instances at bind time
    /// - Injected configuration; the runtime exposes no chain id
    pub chain_domain: u64,
}

impl Factory {
    pub const LEN: usize = 8 + std::mem::size_of::<Factory>();
}

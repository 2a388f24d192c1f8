use anchor_lang::prelude::*;

/**
 * Deterministically addressed instance account
 *
 * Deployed by the factory at an address that is a pure function of
 * (factory, creator, campaign_id), computable before deployment. The account
 * is written fully zeroed at deployment; the first bind_instance call by the
 * creator permanently binds factory, creator, chain_domain and the factory's
 * version at that moment. A one-time initialization guard replaces a
 * constructor here because the implementation is shared across all instances.
 *
 * Derivation: ["instance", factory_key, creator, campaign_id]
 */
#[account]
#[derive(Default, Debug)]
pub struct ProxyInstance {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Factory this instance bound to (default pubkey until bound)
    pub factory: Pubkey,

    /// Creator this instance bound to (default pubkey until bound)
    pub creator: Pubkey,

    /// Campaign id the address was derived from (zero until bound)
    pub campaign_id: u64,

    /// Chain domain copied from the factory at bind time (zero until bound)
    pub chain_domain: u64,

    /// Factory version at bind time (zero until bound)
    pub version: u64,
}

impl ProxyInstance {
    pub const LEN: usize = 8 + std::mem::size_of::<ProxyInstance>();

    /// An instance is bound once its factory field is set; bind_instance
    /// never overwrites a bound instance
    pub fn is_bound(&self) -> bool {
        self.factory != Pubkey::default()
    }
}

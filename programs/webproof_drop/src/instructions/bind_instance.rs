use crate::constants::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for the one-time instance binding
 *
 * A freshly deployed instance reads all zeroes. The first authenticated call
 * from its creator binds factory, creator, campaign id, chain domain and the
 * factory's current version, permanently. Re-binding is an idempotent no-op;
 * it never overwrites, which is what makes lazy initialization safe when the
 * implementation is shared across instances.
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(campaign_id: u64)]
pub struct BindInstance<'info> {
    /// The factory registry the instance was deployed through
    pub factory: Account<'info, Factory>,

    /// The instance to bind
    /// - Seeds tie the instance to this factory, this creator and this
    ///   campaign id, so only the rightful creator can bind it
    #[account(
        mut,
        seeds = [
            INSTANCE_SEED.as_bytes(),
            factory.key().as_ref(),
            creator.key().as_ref(),
            campaign_id.to_le_bytes().as_ref()
        ],
        bump = proxy_instance.bump
    )]
    pub proxy_instance: Account<'info, ProxyInstance>,

    /// The creator of the instance
    pub creator: Signer<'info>,
}

/**
 * Binds the instance on first call; no-op afterwards
 *
 * @param ctx - The account context containing all required accounts
 * @param campaign_id - Campaign id the instance was derived from
 */
pub fn handle_bind_instance(ctx: Context<BindInstance>, campaign_id: u64) -> Result<()> {
    let instance = &mut ctx.accounts.proxy_instance;

    if instance.is_bound() {
        return Ok(());
    }

    let factory = &ctx.accounts.factory;
    instance.factory = factory.key();
    instance.creator = ctx.accounts.creator.key();
    instance.campaign_id = campaign_id;
    instance.chain_domain = factory.chain_domain;
    instance.version = factory.version;

    emit_cpi!(InstanceBound {
        instance: instance.key(),
        factory: factory.key(),
        creator: ctx.accounts.creator.key(),
        chain_domain: factory.chain_domain,
        version: factory.version,
    });

    Ok(())
}

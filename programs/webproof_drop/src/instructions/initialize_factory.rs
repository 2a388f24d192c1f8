use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for creating the factory registry
 *
 * The factory holds the shared mastercopy reference and the chain domain
 * that instances copy at bind time. One registry per owner.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializeFactory<'info> {
    /// The factory registry (PDA)
    /// - Derived from: ["factory", owner]
    #[account(
        init,
        payer = owner,
        space = Factory::LEN,
        seeds = [FACTORY_SEED.as_bytes(), owner.key().as_ref()],
        bump
    )]
    pub factory: Account<'info, Factory>,

    /// The owner of the factory
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Creates the factory registry
 *
 * @param ctx - The account context containing all required accounts
 * @param chain_domain - Chain identifier instances copy at bind time;
 *                       injected configuration, the runtime has no chain id
 * @param mastercopy - Initial implementation address
 *
 * The version counter starts at 1 so a bound instance can always be told
 * apart from an unbound one (which reads version zero).
 */
pub fn handle_initialize_factory(
    ctx: Context<InitializeFactory>,
    chain_domain: u64,
    mastercopy: Pubkey,
) -> Result<()> {
    require!(
        mastercopy != Pubkey::default(),
        WebproofDropError::InvalidMastercopy
    );

    let factory = &mut ctx.accounts.factory;
    factory.bump = ctx.bumps.factory;
    factory.owner = ctx.accounts.owner.key();
    factory.mastercopy = mastercopy;
    factory.version = 1;
    factory.chain_domain = chain_domain;

    emit_cpi!(MastercopySet {
        factory: factory.key(),
        old_mastercopy: Pubkey::default(),
        new_mastercopy: mastercopy,
        version: 1,
    });

    Ok(())
}

use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for rotating the factory's mastercopy
 *
 * Rotation only retargets the registry: instances deployed earlier keep
 * their stored state untouched and pick up the new implementation the next
 * time anything resolves it through the registry. The version counter is
 * introspection only.
 *
 * Access Control: owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetMastercopy<'info> {
    /// The factory registry to update
    #[account(mut)]
    pub factory: Account<'info, Factory>,

    /// The owner of the factory
    #[account(constraint = owner.key() == factory.owner @ WebproofDropError::PermissionDenied)]
    pub owner: Signer<'info>,
}

/**
 * Replaces the implementation address and bumps the registry version
 *
 * @param ctx - The account context containing factory and owner accounts
 * @param new_mastercopy - The new implementation address
 */
pub fn handle_set_mastercopy(ctx: Context<SetMastercopy>, new_mastercopy: Pubkey) -> Result<()> {
    require!(
        new_mastercopy != Pubkey::default(),
        WebproofDropError::InvalidMastercopy
    );

    let factory = &mut ctx.accounts.factory;

    let old_mastercopy = factory.mastercopy;
    let version = factory
        .version
        .checked_add(1)
        .ok_or(WebproofDropError::ArithmeticOverflow)?;

    factory.mastercopy = new_mastercopy;
    factory.version = version;

    emit_cpi!(MastercopySet {
        factory: factory.key(),
        old_mastercopy,
        new_mastercopy,
        version,
    });

    Ok(())
}

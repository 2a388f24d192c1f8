use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::find_instance_address;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::{invoke, invoke_signed};
use anchor_lang::solana_program::system_instruction;

/**
 * Account context for deploying an instance at its deterministic address
 *
 * The instance address is a pure function of (factory, creator, campaign_id),
 * so callers can compute it before deployment with find_instance_address.
 * The account is created manually rather than through an init constraint so
 * a second deployment attempt at an occupied address surfaces as
 * AlreadyDeployed instead of an opaque system error.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateInstance<'info> {
    /// The factory registry the instance belongs to
    pub factory: Account<'info, Factory>,

    /// The instance account to create
    /// CHECK: must be empty and must match the address derived from
    /// (factory, creator, campaign_id); both are validated in the handler
    #[account(mut)]
    pub proxy_instance: UncheckedAccount<'info>,

    /// The creator; part of the address derivation and pays for the account
    #[account(mut)]
    pub creator: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Deploys a zero-initialized instance at the derived address
 *
 * @param ctx - The account context containing all required accounts
 * @param campaign_id - Salt input mixed with the creator
 * @param config_signer - Configuration signer recorded for off-chain
 *                        tooling; claims authenticate against the campaign's
 *                        allocator, so this is observability only
 *
 * Failure modes:
 * - AddressCollision when the supplied account is not the derived address
 * - AlreadyDeployed when the derived address already holds instance data
 *
 * An address holding lamports but no data is still deployable: anyone can
 * transfer lamports to the derived address before deployment, and a plain
 * create_account fails on any funded account. The account is therefore
 * brought up the same way an init constraint does it: top up to rent
 * exemption if needed, then allocate and assign under the PDA signature.
 */
pub fn handle_create_instance(
    ctx: Context<CreateInstance>,
    campaign_id: u64,
    config_signer: Pubkey,
) -> Result<()> {
    let factory_key = ctx.accounts.factory.key();
    let creator_key = ctx.accounts.creator.key();

    // ===== VALIDATION PHASE =====

    let (expected_address, bump) = find_instance_address(&factory_key, &creator_key, campaign_id);
    require!(
        expected_address == ctx.accounts.proxy_instance.key(),
        WebproofDropError::AddressCollision
    );
    require!(
        ctx.accounts.proxy_instance.data_is_empty(),
        WebproofDropError::AlreadyDeployed
    );

    // ===== INTERACTIONS PHASE (account creation) =====

    let rent = Rent::get()?;
    let rent_minimum = rent.minimum_balance(ProxyInstance::LEN);
    let campaign_id_bytes = campaign_id.to_le_bytes();

    let seeds = &[
        INSTANCE_SEED.as_bytes(),
        factory_key.as_ref(),
        creator_key.as_ref(),
        campaign_id_bytes.as_ref(),
        &[bump],
    ];

    let top_up = deployment_top_up(ctx.accounts.proxy_instance.lamports(), rent_minimum);
    if top_up > 0 {
        invoke(
            &system_instruction::transfer(&creator_key, &expected_address, top_up),
            &[
                ctx.accounts.creator.to_account_info(),
                ctx.accounts.proxy_instance.to_account_info(),
                ctx.accounts.system_program.to_account_info(),
            ],
        )?;
    }

    invoke_signed(
        &system_instruction::allocate(&expected_address, ProxyInstance::LEN as u64),
        &[
            ctx.accounts.proxy_instance.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
        &[&seeds[..]],
    )?;
    invoke_signed(
        &system_instruction::assign(&expected_address, &crate::ID),
        &[
            ctx.accounts.proxy_instance.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
        &[&seeds[..]],
    )?;

    // Written fully zeroed apart from the bump; bind_instance performs the
    // one-time binding on first authenticated use
    let instance = ProxyInstance {
        bump,
        ..Default::default()
    };
    let mut data = ctx.accounts.proxy_instance.try_borrow_mut_data()?;
    instance.try_serialize(&mut &mut data[..])?;
    drop(data);

    emit_cpi!(InstanceDeployed {
        factory: factory_key,
        creator: creator_key,
        campaign_id,
        instance: expected_address,
        config_signer,
    });

    Ok(())
}

/// Lamports the creator must add so the instance account reaches rent
/// exemption. Zero when the address already holds at least the minimum.
pub fn deployment_top_up(existing_lamports: u64, rent_minimum: u64) -> u64 {
    rent_minimum.saturating_sub(existing_lamports)
}

use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/// Account context for replacing a campaign's metadata reference.
/// No eligibility impact; owner only.
#[event_cpi]
#[derive(Accounts)]
pub struct UpdateMetadata<'info> {
    /// The campaign to update
    #[account(mut)]
    pub campaign: Account<'info, Campaign>,

    /// The owner of the campaign
    #[account(constraint = owner.key() == campaign.owner @ WebproofDropError::PermissionDenied)]
    pub owner: Signer<'info>,
}

pub fn handle_update_metadata(ctx: Context<UpdateMetadata>, new_ref: [u8; 32]) -> Result<()> {
    let campaign = &mut ctx.accounts.campaign;

    let old_metadata_ref = campaign.metadata_ref;
    campaign.metadata_ref = new_ref;

    emit_cpi!(MetadataUpdated {
        campaign: campaign.key(),
        old_metadata_ref,
        new_metadata_ref: new_ref,
    });

    Ok(())
}

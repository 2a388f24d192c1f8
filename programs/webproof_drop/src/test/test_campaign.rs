use anchor_lang::error::{Error, ERROR_CODE_OFFSET};
use anchor_lang::prelude::Pubkey;

use crate::error::WebproofDropError;
use crate::instructions::deployment_top_up;
use crate::state::{Campaign, IdentityReceipt, ProxyInstance, WalletReceipt};

fn assert_error(result: anchor_lang::Result<()>, expected: WebproofDropError) {
    match result.expect_err("expected guard to fail") {
        Error::AnchorError(e) => {
            assert_eq!(e.error_code_number, expected as u32 + ERROR_CODE_OFFSET)
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
}

fn open_campaign() -> Campaign {
    Campaign {
        owner: Pubkey::new_unique(),
        amount_per_claim: 1000,
        max_claims: 5,
        expiration_timestamp: 10_000,
        ..Default::default()
    }
}

#[test]
fn test_open_campaign_is_claimable() {
    let campaign = open_campaign();
    campaign.assert_claimable(9_999).unwrap();
    // Expiration is inclusive: the boundary timestamp still claims
    campaign.assert_claimable(10_000).unwrap();
}

#[test]
fn test_stopped_campaign_rejects_claims() {
    let mut campaign = open_campaign();
    campaign.stopped = true;

    assert_error(
        campaign.assert_claimable(0),
        WebproofDropError::CampaignStopped,
    );
}

#[test]
fn test_expired_campaign_rejects_claims() {
    let campaign = open_campaign();

    assert_error(
        campaign.assert_claimable(10_001),
        WebproofDropError::CampaignExpired,
    );
}

#[test]
fn test_exhausted_campaign_rejects_claims() {
    let mut campaign = open_campaign();
    campaign.claims_made = campaign.max_claims - 1;
    // The final claim slot is still open
    campaign.assert_claimable(0).unwrap();

    campaign.claims_made = campaign.max_claims;
    assert_error(
        campaign.assert_claimable(0),
        WebproofDropError::SupplyExhausted,
    );
}

#[test]
fn test_stop_flag_wins_over_other_guards() {
    // Guard order: the stop flag is checked before expiration and supply
    let mut campaign = open_campaign();
    campaign.stopped = true;
    campaign.claims_made = campaign.max_claims;

    assert_error(
        campaign.assert_claimable(99_999),
        WebproofDropError::CampaignStopped,
    );
}

#[test]
fn test_stopped_campaign_rejects_staking() {
    let mut campaign = open_campaign();
    campaign.assert_stakeable().unwrap();

    // After the stop sweep has run, a new deposit could never be returned
    campaign.stopped = true;
    assert_error(
        campaign.assert_stakeable(),
        WebproofDropError::CampaignStopped,
    );
}

#[test]
fn test_consumed_identity_receipt_rejects_replay() {
    IdentityReceipt::default().assert_unclaimed().unwrap();

    let consumed = IdentityReceipt {
        claimed: true,
        recipient: Pubkey::new_unique(),
    };
    assert_error(
        consumed.assert_unclaimed(),
        WebproofDropError::AlreadyClaimedByIdentity,
    );
}

#[test]
fn test_claimed_wallet_receipt_rejects_replay() {
    WalletReceipt::default().assert_unclaimed().unwrap();

    let claimed = WalletReceipt { claimed: true };
    assert_error(
        claimed.assert_unclaimed(),
        WebproofDropError::AlreadyClaimedByAddress,
    );
}

#[test]
fn test_prefunded_instance_address_is_still_deployable() {
    // A stray lamport sent to the derived address must not brick
    // deployment: the creator tops the account up to rent exemption
    // instead of creating it from scratch
    assert_eq!(deployment_top_up(0, 2_000), 2_000);
    assert_eq!(deployment_top_up(1, 2_000), 1_999);
    assert_eq!(deployment_top_up(2_000, 2_000), 0);
    // An address funded above the minimum needs nothing from the creator
    assert_eq!(deployment_top_up(5_000, 2_000), 0);
}

#[test]
fn test_instance_reads_zero_until_bound() {
    let instance = ProxyInstance::default();

    assert!(!instance.is_bound());
    assert_eq!(instance.factory, Pubkey::default());
    assert_eq!(instance.creator, Pubkey::default());
    assert_eq!(instance.chain_domain, 0);
    assert_eq!(instance.version, 0);

    let bound = ProxyInstance {
        factory: Pubkey::new_unique(),
        ..Default::default()
    };
    assert!(bound.is_bound());
}

use anchor_lang::prelude::Pubkey;

use crate::utils::addresses::*;

#[test]
fn test_instance_address_is_deterministic() {
    let factory = Pubkey::new_unique();
    let creator = Pubkey::new_unique();

    let (first, first_bump) = find_instance_address(&factory, &creator, 7);
    let (second, second_bump) = find_instance_address(&factory, &creator, 7);

    assert_eq!(first, second);
    assert_eq!(first_bump, second_bump);
}

#[test]
fn test_instance_address_mixes_creator_and_campaign_id() {
    let factory = Pubkey::new_unique();
    let creator_a = Pubkey::new_unique();
    let creator_b = Pubkey::new_unique();

    // Distinct (creator, campaign_id) pairs never share an address: the
    // salt mixes both inputs, not just one
    let mut addresses = vec![];
    for creator in [&creator_a, &creator_b] {
        for campaign_id in 0..4u64 {
            addresses.push(find_instance_address(&factory, creator, campaign_id).0);
        }
    }

    for (i, a) in addresses.iter().enumerate() {
        for b in addresses.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_instance_address_depends_on_factory() {
    let creator = Pubkey::new_unique();
    let factory_a = Pubkey::new_unique();
    let factory_b = Pubkey::new_unique();

    assert_ne!(
        find_instance_address(&factory_a, &creator, 1).0,
        find_instance_address(&factory_b, &creator, 1).0
    );
}

#[test]
fn test_campaign_address_is_deterministic() {
    let payout_mint = Pubkey::new_unique();
    let owner = Pubkey::new_unique();

    let (first, _) = find_campaign_address(&payout_mint, &owner, 3);
    let (second, _) = find_campaign_address(&payout_mint, &owner, 3);
    assert_eq!(first, second);

    // Another campaign id derives elsewhere
    assert_ne!(first, find_campaign_address(&payout_mint, &owner, 4).0);
}

#[test]
fn test_receipt_addresses_separate_identity_and_wallet() {
    let campaign = Pubkey::new_unique();
    let claimant = Pubkey::new_unique();
    let identity_hash = claimant.to_bytes();

    // Even with identical byte content the two receipt spaces cannot
    // collide; the seed prefixes separate them
    assert_ne!(
        find_identity_receipt_address(&campaign, &identity_hash).0,
        find_wallet_receipt_address(&campaign, &claimant).0
    );
}

#[test]
fn test_vault_addresses_are_per_campaign() {
    let campaign_a = Pubkey::new_unique();
    let campaign_b = Pubkey::new_unique();

    assert_ne!(
        find_vault_address(&campaign_a).0,
        find_vault_address(&campaign_b).0
    );
    assert_ne!(
        find_vault_address(&campaign_a).0,
        find_aux_vault_address(&campaign_a).0
    );
}

#[test]
fn test_factory_address_is_per_owner() {
    let owner_a = Pubkey::new_unique();
    let owner_b = Pubkey::new_unique();

    assert_ne!(
        find_factory_address(&owner_a).0,
        find_factory_address(&owner_b).0
    );
}

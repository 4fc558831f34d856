#![cfg(test)]

use super::*;
use soroban_sdk::{testutils::Address as _, Address, Env};

fn create_nft_contract<'a>(e: &Env) -> DonationNftClient<'a> {
    DonationNftClient::new(e, &e.register(DonationNft, ()))
}

#[test]
fn test_initialize() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let nft = create_nft_contract(&env);

    nft.initialize(&admin);

    assert_eq!(nft.issuance_count(), 0);
    assert_eq!(nft.authority(), admin);
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn test_cannot_initialize_twice() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let nft = create_nft_contract(&env);

    nft.initialize(&admin);
    nft.initialize(&admin);
}

#[test]
fn test_award_records_credential_and_increments_counter() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let account = Address::generate(&env);
    let nft = create_nft_contract(&env);

    nft.initialize(&admin);

    assert_eq!(nft.has_credential(&account), false);
    assert_eq!(nft.award_once(&account), true);
    assert_eq!(nft.has_credential(&account), true);
    assert_eq!(nft.issuance_count(), 1);
}

#[test]
fn test_second_award_is_a_noop() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let account = Address::generate(&env);
    let nft = create_nft_contract(&env);

    nft.initialize(&admin);

    assert_eq!(nft.award_once(&account), true);
    assert_eq!(nft.award_once(&account), false);
    assert_eq!(nft.award_once(&account), false);

    // counter moved exactly once
    assert_eq!(nft.issuance_count(), 1);
    assert_eq!(nft.has_credential(&account), true);
}

#[test]
fn test_awards_are_independent_per_account() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let nft = create_nft_contract(&env);

    nft.initialize(&admin);

    for i in 1..=23u64 {
        let account = Address::generate(&env);
        assert_eq!(nft.award_once(&account), true);
        assert_eq!(nft.has_credential(&account), true);
        assert_eq!(nft.issuance_count(), i);
    }
}

#[test]
fn test_transfer_authority() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let platform = Address::generate(&env);
    let nft = create_nft_contract(&env);

    nft.initialize(&admin);
    nft.transfer_authority(&platform);

    assert_eq!(nft.authority(), platform);

    // awards keep working under the new authority
    let account = Address::generate(&env);
    assert_eq!(nft.award_once(&account), true);
    assert_eq!(nft.issuance_count(), 1);
}

#![no_std]

#[cfg(test)]
mod test;

mod storage_types;
use storage_types::{DataKey, NftError, TTL_INSTANCE, TTL_PERSISTENT};

use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, Symbol};

#[contract]
pub struct DonationNft;

#[contractimpl]
impl DonationNft {
    /// Initialize the registry with its first authority
    pub fn initialize(env: Env, admin: Address) {
        if env.storage().instance().has(&DataKey::Authority) {
            panic_with_error!(&env, NftError::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Authority, &admin);
        env.storage().instance().set(&DataKey::IssuanceCounter, &0u64);

        extend_instance(&env);
    }

    /// Award the lifetime donor credential to `account`.
    ///
    /// Idempotent: the first call for an account records the credential and
    /// returns `true`; every later call is a no-op returning `false`. Only
    /// the current authority may invoke this.
    pub fn award_once(env: Env, account: Address) -> bool {
        let authority: Address = env.storage().instance().get(&DataKey::Authority).unwrap();
        authority.require_auth();

        let key = DataKey::Awarded(account.clone());
        if env.storage().persistent().has(&key) {
            return false;
        }

        let token_id: u64 = env.storage().instance().get(&DataKey::IssuanceCounter).unwrap();

        env.storage().persistent().set(&key, &true);
        env.storage().instance().set(&DataKey::IssuanceCounter, &(token_id + 1));

        env.storage().persistent().extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
        extend_instance(&env);

        env.events().publish(
            (Symbol::new(&env, "credential_awarded"),),
            (account, token_id),
        );

        true
    }

    /// Hand the registry over to a new authority. Called once at system
    /// setup to make the donation platform the sole awarder; there is no
    /// transfer-back primitive.
    pub fn transfer_authority(env: Env, new_authority: Address) {
        let authority: Address = env.storage().instance().get(&DataKey::Authority).unwrap();
        authority.require_auth();

        env.storage().instance().set(&DataKey::Authority, &new_authority);
        extend_instance(&env);

        env.events().publish(
            (Symbol::new(&env, "authority_transferred"),),
            (authority, new_authority),
        );
    }

    pub fn has_credential(env: Env, account: Address) -> bool {
        env.storage().persistent().has(&DataKey::Awarded(account))
    }

    pub fn issuance_count(env: Env) -> u64 {
        env.storage().instance().get(&DataKey::IssuanceCounter).unwrap_or(0)
    }

    pub fn authority(env: Env) -> Address {
        env.storage().instance().get(&DataKey::Authority).unwrap()
    }
}

fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

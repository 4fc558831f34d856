#![no_std]


mod events;
mod storage_types;

use storage_types::{
    Campaign, CampaignId, DataKey, DonationOutcome, PersistentKey, PlatformError, TTL_INSTANCE,
    TTL_PERSISTENT,
};

use soroban_sdk::{
    contract, contractclient, contractimpl, panic_with_error, token, Address, Env, String,
};

/// The only surface the ledger relies on from the credential registry.
#[contractclient(name = "CredentialClient")]
pub trait CredentialRegistry {
    fn award_once(env: Env, account: Address) -> bool;
}

#[contract]
pub struct DonationPlatform;

#[contractimpl]
impl DonationPlatform {
    /// Initialize the platform with the administrator, the token used for
    /// donations and the credential registry it awards through.
    pub fn initialize(env: Env, admin: Address, token: Address, nft_contract: Address) {
        if env.storage().instance().has(&DataKey::Admin) {
            panic_with_error!(&env, PlatformError::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::NftContract, &nft_contract);
        env.storage().instance().set(&DataKey::CampaignsCounter, &0u64);

        extend_instance(&env);
    }

    /// Open a new campaign. Administrator only.
    pub fn create_campaign(
        env: Env,
        caller: Address,
        name: String,
        description: String,
        goal_amount: i128,
        duration: u64,
    ) -> CampaignId {
        caller.require_auth();
        check_admin(&env, &caller);

        if goal_amount <= 0 {
            panic_with_error!(&env, PlatformError::InvalidGoal);
        }
        if duration == 0 {
            panic_with_error!(&env, PlatformError::InvalidDuration);
        }

        let id: CampaignId = env.storage().instance().get(&DataKey::CampaignsCounter).unwrap();

        let campaign = Campaign {
            id,
            name: name.clone(),
            description: description.clone(),
            goal_amount,
            received_amount: 0,
            expiration_time: env.ledger().timestamp() + duration,
            funds_withdrawn: false,
        };

        write_campaign(&env, &campaign);
        env.storage().instance().set(&DataKey::CampaignsCounter, &(id + 1));
        extend_instance(&env);

        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                id,
                name,
                description,
                goal_amount,
                expiration_time: campaign.expiration_time,
            },
        );

        id
    }

    /// Donate `amount` to an open campaign.
    ///
    /// The donation is capped at the campaign's remaining goal gap; any
    /// excess is returned to the donor within the same invocation, so the
    /// donor is never charged more than the accepted amount. The donor's
    /// first-ever donation across all campaigns also awards the loyalty
    /// credential through the registry.
    pub fn donate(
        env: Env,
        donor: Address,
        campaign_id: CampaignId,
        amount: i128,
    ) -> DonationOutcome {
        donor.require_auth();

        let mut campaign = read_campaign(&env, campaign_id);

        if amount <= 0 {
            panic_with_error!(&env, PlatformError::ZeroDonation);
        }
        if campaign.received_amount == campaign.goal_amount {
            panic_with_error!(&env, PlatformError::GoalAlreadyReached);
        }
        if env.ledger().timestamp() >= campaign.expiration_time {
            panic_with_error!(&env, PlatformError::CampaignExpired);
        }

        let remaining = campaign.goal_amount - campaign.received_amount;
        let accepted_amount = if amount < remaining { amount } else { remaining };
        let refunded_amount = amount - accepted_amount;

        // Pull the full amount in, then push the excess straight back. A
        // failed refund traps the whole invocation, leaving no partial state.
        let token_client = token::Client::new(&env, &read_token(&env));
        token_client.transfer(&donor, &env.current_contract_address(), &amount);
        if refunded_amount > 0 {
            token_client.transfer(&env.current_contract_address(), &donor, &refunded_amount);
        }

        campaign.received_amount += accepted_amount;
        let goal_just_reached = campaign.received_amount == campaign.goal_amount;
        write_campaign(&env, &campaign);

        let nft_contract: Address = env.storage().instance().get(&DataKey::NftContract).unwrap();
        let credit_issued = CredentialClient::new(&env, &nft_contract).award_once(&donor);

        events::emit_campaign_received_donation(
            &env,
            events::CampaignReceivedDonationEvent {
                id: campaign.id,
                name: campaign.name.clone(),
                description: campaign.description.clone(),
                goal_amount: campaign.goal_amount,
                expiration_time: campaign.expiration_time,
                accepted_amount,
                remainder: campaign.goal_amount - campaign.received_amount,
            },
        );

        if goal_just_reached {
            events::emit_campaign_goal_reached(
                &env,
                events::CampaignGoalReachedEvent {
                    id: campaign.id,
                    name: campaign.name,
                    description: campaign.description,
                    goal_amount: campaign.goal_amount,
                    expiration_time: campaign.expiration_time,
                },
            );
        }

        DonationOutcome {
            accepted_amount,
            refunded_amount,
            goal_just_reached,
            credit_issued,
        }
    }

    /// Withdraw a resolved campaign's accumulated balance. Administrator
    /// only, exactly once per campaign.
    ///
    /// A campaign is resolved once its goal is reached or its expiration
    /// time has passed; an expired campaign pays out whatever partial
    /// amount was raised, including zero.
    pub fn withdraw(env: Env, caller: Address, campaign_id: CampaignId) -> i128 {
        caller.require_auth();
        check_admin(&env, &caller);

        let mut campaign = read_campaign(&env, campaign_id);

        let resolved = campaign.received_amount == campaign.goal_amount
            || env.ledger().timestamp() >= campaign.expiration_time;
        if !resolved {
            panic_with_error!(&env, PlatformError::NotYetResolved);
        }
        if campaign.funds_withdrawn {
            panic_with_error!(&env, PlatformError::AlreadyWithdrawn);
        }

        campaign.funds_withdrawn = true;
        write_campaign(&env, &campaign);

        let amount = campaign.received_amount;
        if amount > 0 {
            let token_client = token::Client::new(&env, &read_token(&env));
            token_client.transfer(&env.current_contract_address(), &caller, &amount);
        }

        events::emit_withdrawal_made(
            &env,
            events::WithdrawalMadeEvent {
                id: campaign.id,
                amount,
            },
        );

        amount
    }

    /// View functions
    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Campaign {
        read_campaign(&env, campaign_id)
    }

    pub fn campaigns_counter(env: Env) -> u64 {
        env.storage().instance().get(&DataKey::CampaignsCounter).unwrap_or(0)
    }

    pub fn admin(env: Env) -> Address {
        env.storage().instance().get(&DataKey::Admin).unwrap()
    }
}

// Helper functions
fn check_admin(env: &Env, caller: &Address) {
    let admin: Address = env.storage().instance().get(&DataKey::Admin).unwrap();
    if caller != &admin {
        panic_with_error!(env, PlatformError::Unauthorized);
    }
}

fn read_token(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Token).unwrap()
}

fn read_campaign(env: &Env, campaign_id: CampaignId) -> Campaign {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .unwrap_or_else(|| panic_with_error!(env, PlatformError::UnknownCampaign))
}

fn write_campaign(env: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    env.storage().persistent().extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
}

fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

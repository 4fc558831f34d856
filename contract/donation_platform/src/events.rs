use soroban_sdk::{contracttype, Env, String, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreatedEvent {
    pub id: CampaignId,
    pub name: String,
    pub description: String,
    pub goal_amount: i128,
    pub expiration_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignReceivedDonationEvent {
    pub id: CampaignId,
    pub name: String,
    pub description: String,
    pub goal_amount: i128,
    pub expiration_time: u64,
    pub accepted_amount: i128,
    pub remainder: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignGoalReachedEvent {
    pub id: CampaignId,
    pub name: String,
    pub description: String,
    pub goal_amount: i128,
    pub expiration_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalMadeEvent {
    pub id: CampaignId,
    pub amount: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"),),
        event,
    );
}

pub fn emit_campaign_received_donation(env: &Env, event: CampaignReceivedDonationEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_received_donation"),),
        event,
    );
}

pub fn emit_campaign_goal_reached(env: &Env, event: CampaignGoalReachedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_goal_reached"),),
        event,
    );
}

pub fn emit_withdrawal_made(env: &Env, event: WithdrawalMadeEvent) {
    env.events().publish(
        (Symbol::new(env, "withdrawal_made"),),
        event,
    );
}

use soroban_sdk::{contracterror, contracttype, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    NftContract,
    CampaignsCounter,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
}

// Campaign ids are zero-based and contiguous; the counter is the next id.
pub type CampaignId = u64;

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub name: String,
    pub description: String,
    pub goal_amount: i128,
    pub received_amount: i128,
    pub expiration_time: u64,
    pub funds_withdrawn: bool,
}

// Result of a single donation attempt. Returned to the caller, never stored.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct DonationOutcome {
    pub accepted_amount: i128,
    pub refunded_amount: i128,
    pub goal_just_reached: bool,
    pub credit_issued: bool,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PlatformError {
    AlreadyInitialized = 1,
    Unauthorized = 2,
    InvalidGoal = 3,
    InvalidDuration = 4,
    UnknownCampaign = 5,
    ZeroDonation = 6,
    GoalAlreadyReached = 7,
    CampaignExpired = 8,
    NotYetResolved = 9,
    AlreadyWithdrawn = 10,
}

pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days

use soroban_sdk::{Address, Env, Vec};

use crate::errors::ContractError;
use crate::types::{Config, DataKey, RoundState};

const INSTANCE_TTL_THRESHOLD: u32 = 100;
const INSTANCE_TTL_EXTEND: u32 = 500;
const PERSISTENT_TTL_THRESHOLD: u32 = 100;
const PERSISTENT_TTL_EXTEND: u32 = 1000;

// --- Config ---

pub fn get_config(env: &Env) -> Result<Config, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

// --- Round ---

pub fn get_round(env: &Env) -> Result<RoundState, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Round)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_round(env: &Env, round: &RoundState) {
    env.storage().instance().set(&DataKey::Round, round);
    extend_instance_ttl(env);
}

// --- Members ---

pub fn get_members(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Members)
        .unwrap_or(Vec::new(env))
}

pub fn set_members(env: &Env, members: &Vec<Address>) {
    env.storage().instance().set(&DataKey::Members, members);
    extend_instance_ttl(env);
}

// --- Positions ---

pub fn get_position(env: &Env, member: &Address) -> Option<u32> {
    let key = DataKey::Position(member.clone());
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn set_position(env: &Env, member: &Address, position: u32) {
    let key = DataKey::Position(member.clone());
    env.storage().persistent().set(&key, &position);
    extend_persistent_ttl(env, &key);
}

pub fn remove_position(env: &Env, member: &Address) {
    let key = DataKey::Position(member.clone());
    env.storage().persistent().remove(&key);
}

// --- TTL Management ---

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

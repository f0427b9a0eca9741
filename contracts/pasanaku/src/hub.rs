//! Interfaces of the hub contract the pool depends on.
//!
//! The hub is both the membership authority (humans, groups, trust,
//! group minting) and the multi-token ledger. Token ids are addresses:
//! a participant's personal token is identified by the participant's own
//! address, the pooled token by the group's address.
//!
//! Every call goes through the generated `try_*` methods so that a failing
//! collaborator surfaces as [`ContractError::CollaboratorFailure`] instead of
//! trapping the whole invocation.

use soroban_sdk::{contractclient, Address, Bytes, BytesN, Env, String, Vec};

use crate::errors::ContractError;

/// Returned from `on_received` to accept a single transfer.
pub const RECEIVED_ACK: u32 = 0xf23a_6e61;
/// Returned from `on_batch_received` to accept a batch transfer.
pub const BATCH_RECEIVED_ACK: u32 = 0xbc19_7c81;

/// Trust expiry meaning "never expires".
pub const TRUST_FOREVER: u64 = u64::MAX;
/// Trust expiry that revokes an existing trust.
pub const TRUST_REVOKED: u64 = 0;

#[contractclient(name = "HubClient")]
#[allow(dead_code)]
pub trait HubInterface {
    fn is_human(env: Env, avatar: Address) -> bool;

    fn is_group(env: Env, group: Address) -> bool;

    fn trust(env: Env, truster: Address, trustee: Address, expiry: u64);

    fn group_mint(
        env: Env,
        sender: Address,
        group: Address,
        collateral_avatars: Vec<Address>,
        amounts: Vec<i128>,
        data: Bytes,
    );

    fn register_organization(
        env: Env,
        organization: Address,
        name: String,
        metadata_digest: BytesN<32>,
    );
}

#[contractclient(name = "LedgerClient")]
#[allow(dead_code)]
pub trait LedgerInterface {
    fn safe_transfer_from(
        env: Env,
        from: Address,
        to: Address,
        id: Address,
        value: i128,
        data: Bytes,
    );
}

pub fn is_human(env: &Env, hub: &Address, avatar: &Address) -> Result<bool, ContractError> {
    match HubClient::new(env, hub).try_is_human(avatar) {
        Ok(Ok(result)) => Ok(result),
        _ => Err(ContractError::CollaboratorFailure),
    }
}

pub fn is_group(env: &Env, hub: &Address, group: &Address) -> Result<bool, ContractError> {
    match HubClient::new(env, hub).try_is_group(group) {
        Ok(Ok(result)) => Ok(result),
        _ => Err(ContractError::CollaboratorFailure),
    }
}

pub fn trust(
    env: &Env,
    hub: &Address,
    trustee: &Address,
    expiry: u64,
) -> Result<(), ContractError> {
    let truster = env.current_contract_address();
    match HubClient::new(env, hub).try_trust(&truster, trustee, &expiry) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::CollaboratorFailure),
    }
}

/// Converts `amount` of `collateral`'s personal token held by this contract
/// into pooled `group` tokens credited to this contract.
pub fn group_mint(
    env: &Env,
    hub: &Address,
    group: &Address,
    collateral: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let sender = env.current_contract_address();
    let mut avatars = Vec::new(env);
    avatars.push_back(collateral.clone());
    let mut amounts = Vec::new(env);
    amounts.push_back(amount);

    let client = HubClient::new(env, hub);
    match client.try_group_mint(&sender, group, &avatars, &amounts, &Bytes::new(env)) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::CollaboratorFailure),
    }
}

pub fn register_organization(env: &Env, hub: &Address, name: &String) -> Result<(), ContractError> {
    let organization = env.current_contract_address();
    let digest = BytesN::from_array(env, &[0; 32]);
    let client = HubClient::new(env, hub);
    match client.try_register_organization(&organization, name, &digest) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::CollaboratorFailure),
    }
}

pub fn transfer(
    env: &Env,
    hub: &Address,
    from: &Address,
    to: &Address,
    id: &Address,
    value: i128,
) -> Result<(), ContractError> {
    let client = LedgerClient::new(env, hub);
    match client.try_safe_transfer_from(from, to, id, &value, &Bytes::new(env)) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::CollaboratorFailure),
    }
}

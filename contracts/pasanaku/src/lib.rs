#![no_std]

use soroban_sdk::{
    contract, contractimpl, panic_with_error, symbol_short, Address, Bytes, BytesN, Env, String,
    Vec,
};

mod bitmap;
mod contribution;
mod errors;
mod hub;
mod membership;
mod payout;
mod storage;
mod types;

pub use bitmap::WIDTH as MAX_MEMBERS;
pub use errors::ContractError;
pub use hub::{BATCH_RECEIVED_ACK, RECEIVED_ACK};
pub use types::*;

#[contract]
pub struct PasanakuContract;

#[contractimpl]
impl PasanakuContract {
    /// Deploy a pool saving into `group`'s pooled token through `hub`.
    /// Registers the pool with the hub as an organization named `name`.
    pub fn __constructor(
        env: Env,
        name: String,
        hub: Address,
        group: Address,
        round_interval: u64,
        deposit_amount: i128,
    ) {
        if storage::has_config(&env) {
            panic!("already initialized");
        }
        if deposit_amount <= 0 || round_interval == 0 {
            panic_with_error!(&env, ContractError::InvalidConfig);
        }
        match hub::is_group(&env, &hub, &group) {
            Ok(true) => {}
            Ok(false) => panic_with_error!(&env, ContractError::InvalidGroup),
            Err(err) => panic_with_error!(&env, err),
        }
        if let Err(err) = hub::register_organization(&env, &hub, &name) {
            panic_with_error!(&env, err);
        }

        let config = Config {
            hub,
            group,
            round_interval,
            deposit_amount,
        };
        storage::set_config(&env, &config);
        storage::set_members(&env, &Vec::new(&env));
        storage::set_round(
            &env,
            &RoundState {
                round_id: 1,
                round_started_at: env.ledger().timestamp(),
                contributed_mask: bitmap::PresenceMask::empty().to_bytes(&env),
                pot: 0,
                next_recipient_index: 0,
            },
        );

        env.events().publish(
            (symbol_short!("pool_init"),),
            (
                config.hub,
                config.group,
                config.round_interval,
                config.deposit_amount,
            ),
        );
    }

    // ─── Membership ─────────────────────────────────────────────────

    /// Join the pool. The caller must be a human registered with the hub.
    pub fn join(env: Env, member: Address) -> Result<(), ContractError> {
        membership::join(&env, member)
    }

    /// Leave the pool. A deposit made this round is returned in pooled tokens.
    pub fn leave(env: Env, member: Address) -> Result<(), ContractError> {
        membership::leave(&env, member)
    }

    pub fn member_count(env: Env) -> u32 {
        membership::member_count(&env)
    }

    /// All members in rotation order.
    pub fn members(env: Env) -> Vec<Address> {
        membership::members(&env)
    }

    pub fn is_member(env: Env, member: Address) -> bool {
        membership::is_member(&env, &member)
    }

    pub fn member_at(env: Env, position: u32) -> Result<Address, ContractError> {
        membership::member_at(&env, position)
    }

    pub fn position_of(env: Env, member: Address) -> Result<u32, ContractError> {
        membership::position_of(&env, &member)
    }

    // ─── Contributions ──────────────────────────────────────────────

    /// Deposit this round's fixed amount. At most once per member per round.
    pub fn contribute(env: Env, member: Address) -> Result<(), ContractError> {
        contribution::contribute(&env, member)
    }

    pub fn has_contributed(env: Env, member: Address) -> Result<bool, ContractError> {
        contribution::has_contributed(&env, &member)
    }

    pub fn contribution_count(env: Env) -> Result<u32, ContractError> {
        contribution::contribution_count(&env)
    }

    // ─── Rounds & Payouts ───────────────────────────────────────────

    /// Close the current round, paying the pot to the next recipient.
    /// Returns the recipient.
    pub fn finalise(env: Env) -> Result<Address, ContractError> {
        payout::finalise(&env)
    }

    pub fn current_recipient(env: Env) -> Result<Address, ContractError> {
        payout::current_recipient(&env)
    }

    pub fn round_ends_at(env: Env) -> Result<u64, ContractError> {
        payout::round_ends_at(&env)
    }

    pub fn config(env: Env) -> Result<Config, ContractError> {
        storage::get_config(&env)
    }

    pub fn round_state(env: Env) -> Result<RoundState, ContractError> {
        storage::get_round(&env)
    }

    pub fn round_id(env: Env) -> Result<u32, ContractError> {
        Ok(storage::get_round(&env)?.round_id)
    }

    pub fn round_started_at(env: Env) -> Result<u64, ContractError> {
        Ok(storage::get_round(&env)?.round_started_at)
    }

    pub fn pot(env: Env) -> Result<i128, ContractError> {
        Ok(storage::get_round(&env)?.pot)
    }

    pub fn contributed_mask(env: Env) -> Result<BytesN<32>, ContractError> {
        Ok(storage::get_round(&env)?.contributed_mask)
    }

    pub fn next_recipient_index(env: Env) -> Result<u32, ContractError> {
        Ok(storage::get_round(&env)?.next_recipient_index)
    }

    // ─── Token Receiver ─────────────────────────────────────────────

    /// Accept any single transfer from the ledger.
    pub fn on_received(
        _env: Env,
        _operator: Address,
        _from: Address,
        _id: Address,
        _value: i128,
        _data: Bytes,
    ) -> u32 {
        RECEIVED_ACK
    }

    /// Accept any batch transfer from the ledger.
    pub fn on_batch_received(
        _env: Env,
        _operator: Address,
        _from: Address,
        _ids: Vec<Address>,
        _values: Vec<i128>,
        _data: Bytes,
    ) -> u32 {
        BATCH_RECEIVED_ACK
    }
}

#[cfg(test)]
mod test_hub;

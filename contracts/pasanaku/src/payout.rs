use soroban_sdk::{Address, Env};

use crate::bitmap::PresenceMask;
use crate::errors::ContractError;
use crate::hub;
use crate::storage;

/// Pays the whole pot to the member at the recipient cursor and opens the
/// next round. Anyone can call this once the round interval has elapsed and
/// at least one member has contributed.
pub fn finalise(env: &Env) -> Result<Address, ContractError> {
    let config = storage::get_config(env)?;
    let mut round = storage::get_round(env)?;
    let now = env.ledger().timestamp();

    if now < round.round_started_at.saturating_add(config.round_interval) {
        return Err(ContractError::RoundNotEnded);
    }

    if PresenceMask::from_bytes(&round.contributed_mask).is_empty() {
        return Err(ContractError::NoContributions);
    }

    let members = storage::get_members(env);
    if members.is_empty() {
        return Err(ContractError::NoParticipants);
    }

    let recipient = members
        .get(round.next_recipient_index)
        .ok_or(ContractError::InvalidPosition)?;

    hub::transfer(
        env,
        &config.hub,
        &env.current_contract_address(),
        &recipient,
        &config.group,
        round.pot,
    )?;

    env.events().publish(
        (crate::symbol_short!("payout"),),
        (round.round_id, recipient.clone(), round.pot),
    );

    round.next_recipient_index = (round.next_recipient_index + 1) % members.len();
    round.contributed_mask = PresenceMask::empty().to_bytes(env);
    round.pot = 0;
    round.round_started_at = now;
    round.round_id += 1;
    storage::set_round(env, &round);

    env.events().publish(
        (crate::symbol_short!("rnd_new"),),
        (round.round_id, round.round_started_at),
    );

    Ok(recipient)
}

pub fn current_recipient(env: &Env) -> Result<Address, ContractError> {
    let round = storage::get_round(env)?;
    let members = storage::get_members(env);
    if members.is_empty() {
        return Err(ContractError::NoParticipants);
    }
    members
        .get(round.next_recipient_index)
        .ok_or(ContractError::InvalidPosition)
}

pub fn round_ends_at(env: &Env) -> Result<u64, ContractError> {
    let config = storage::get_config(env)?;
    let round = storage::get_round(env)?;
    Ok(round.round_started_at.saturating_add(config.round_interval))
}

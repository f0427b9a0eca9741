use soroban_sdk::{Address, Env};

use crate::bitmap::PresenceMask;
use crate::errors::ContractError;
use crate::hub;
use crate::storage;

pub fn contribute(env: &Env, member: Address) -> Result<(), ContractError> {
    member.require_auth();

    let config = storage::get_config(env)?;
    let position = storage::get_position(env, &member).ok_or(ContractError::NotMember)?;

    let mut round = storage::get_round(env)?;
    let mut mask = PresenceMask::from_bytes(&round.contributed_mask);
    if mask.is_set(position) {
        return Err(ContractError::AlreadyContributed);
    }

    let pot = add_deposit(round.pot, config.deposit_amount)?;

    // Pull the member's personal tokens, then swap them for pooled tokens.
    let pool = env.current_contract_address();
    hub::transfer(env, &config.hub, &member, &pool, &member, config.deposit_amount)?;
    hub::group_mint(env, &config.hub, &config.group, &member, config.deposit_amount)?;

    mask.set(position);
    round.contributed_mask = mask.to_bytes(env);
    round.pot = pot;
    storage::set_round(env, &round);

    env.events().publish(
        (crate::symbol_short!("contrib"),),
        (round.round_id, member, config.deposit_amount),
    );

    Ok(())
}

pub(crate) fn add_deposit(pot: i128, deposit: i128) -> Result<i128, ContractError> {
    pot.checked_add(deposit).ok_or(ContractError::PotOverflow)
}

pub fn has_contributed(env: &Env, member: &Address) -> Result<bool, ContractError> {
    let position = storage::get_position(env, member).ok_or(ContractError::NotMember)?;
    let round = storage::get_round(env)?;
    Ok(PresenceMask::from_bytes(&round.contributed_mask).is_set(position))
}

pub fn contribution_count(env: &Env) -> Result<u32, ContractError> {
    let round = storage::get_round(env)?;
    Ok(PresenceMask::from_bytes(&round.contributed_mask).count())
}

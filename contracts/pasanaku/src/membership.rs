use soroban_sdk::{Address, Env, Vec};

use crate::bitmap::{PresenceMask, WIDTH};
use crate::errors::ContractError;
use crate::hub;
use crate::storage;

pub fn join(env: &Env, member: Address) -> Result<(), ContractError> {
    member.require_auth();

    let config = storage::get_config(env)?;

    if !hub::is_human(env, &config.hub, &member)? {
        return Err(ContractError::NotEligible);
    }

    if storage::get_position(env, &member).is_some() {
        return Err(ContractError::AlreadyMember);
    }

    let mut members = storage::get_members(env);
    if members.len() >= WIDTH {
        return Err(ContractError::CapacityExceeded);
    }

    // The hub only lets the pool receive personal tokens of avatars it trusts.
    hub::trust(env, &config.hub, &member, hub::TRUST_FOREVER)?;

    let position = members.len();
    members.push_back(member.clone());
    storage::set_members(env, &members);
    storage::set_position(env, &member, position);

    env.events()
        .publish((crate::symbol_short!("joined"),), (member, position));

    Ok(())
}

/// Removes `member` from the pool. Later members shift down one position;
/// the presence bitmap and the recipient cursor shift with them. A deposit
/// already made this round is handed back in pooled tokens.
pub fn leave(env: &Env, member: Address) -> Result<(), ContractError> {
    member.require_auth();

    let config = storage::get_config(env)?;
    let position = storage::get_position(env, &member).ok_or(ContractError::NotMember)?;

    let mut round = storage::get_round(env)?;
    let mut mask = PresenceMask::from_bytes(&round.contributed_mask);
    let contributed = mask.is_set(position);
    let pot = if contributed {
        round
            .pot
            .checked_sub(config.deposit_amount)
            .ok_or(ContractError::PotOverflow)?
    } else {
        round.pot
    };

    // External calls first; nothing below can fail.
    if contributed {
        hub::transfer(
            env,
            &config.hub,
            &env.current_contract_address(),
            &member,
            &config.group,
            config.deposit_amount,
        )?;
    }
    hub::trust(env, &config.hub, &member, hub::TRUST_REVOKED)?;

    let mut members = storage::get_members(env);
    members.remove(position);
    for index in position..members.len() {
        if let Some(shifted) = members.get(index) {
            storage::set_position(env, &shifted, index);
        }
    }
    storage::remove_position(env, &member);
    storage::set_members(env, &members);

    mask.remove(position);
    round.contributed_mask = mask.to_bytes(env);
    round.pot = pot;
    round.next_recipient_index =
        cursor_after_removal(round.next_recipient_index, position, members.len());
    storage::set_round(env, &round);

    if contributed {
        env.events().publish(
            (crate::symbol_short!("refunded"),),
            (member.clone(), config.deposit_amount),
        );
    }
    env.events()
        .publish((crate::symbol_short!("left"),), (member, position));

    Ok(())
}

/// Keeps the cursor on the same identity when an earlier member leaves.
/// If the member at the cursor leaves, their successor inherits the turn.
pub(crate) fn cursor_after_removal(cursor: u32, removed: u32, remaining: u32) -> u32 {
    let cursor = if removed < cursor { cursor - 1 } else { cursor };
    if cursor >= remaining {
        0
    } else {
        cursor
    }
}

pub fn member_count(env: &Env) -> u32 {
    storage::get_members(env).len()
}

pub fn members(env: &Env) -> Vec<Address> {
    storage::get_members(env)
}

pub fn is_member(env: &Env, member: &Address) -> bool {
    storage::get_position(env, member).is_some()
}

pub fn member_at(env: &Env, position: u32) -> Result<Address, ContractError> {
    storage::get_members(env)
        .get(position)
        .ok_or(ContractError::InvalidPosition)
}

pub fn position_of(env: &Env, member: &Address) -> Result<u32, ContractError> {
    storage::get_position(env, member).ok_or(ContractError::NotMember)
}

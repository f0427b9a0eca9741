//! In-process stand-in for the hub: human/group registry, trust records and
//! a multi-token ledger, with switches to make trust, minting or transfers fail.

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, Address, Bytes, BytesN, Env, String, Vec,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum HubError {
    InsufficientBalance = 1,
    NotGroup = 2,
    NotTrusted = 3,
    MintRejected = 4,
    TransfersDisabled = 5,
    LengthMismatch = 6,
    TrustDisabled = 7,
}

#[contracttype]
#[derive(Clone)]
pub enum HubKey {
    Human(Address),
    Group(Address),
    Organization(Address),
    Trust(Address, Address),
    Balance(Address, Address),
    FailMint,
    FailTransfers,
    FailTrust,
}

#[contract]
pub struct TestHub;

#[contractimpl]
impl TestHub {
    // ─── Test setup ─────────────────────────────────────────────────

    pub fn register_human(env: Env, human: Address) {
        env.storage().persistent().set(&HubKey::Human(human), &true);
    }

    pub fn register_group(env: Env, group: Address) {
        env.storage().persistent().set(&HubKey::Group(group), &true);
    }

    /// Mint `amount` of `avatar`'s personal token to `avatar`.
    pub fn mint_personal(env: Env, avatar: Address, amount: i128) {
        let held = balance(&env, &avatar, &avatar);
        set_balance(&env, &avatar, &avatar, held + amount);
    }

    pub fn set_fail_mint(env: Env, fail: bool) {
        env.storage().persistent().set(&HubKey::FailMint, &fail);
    }

    pub fn set_fail_transfers(env: Env, fail: bool) {
        env.storage().persistent().set(&HubKey::FailTransfers, &fail);
    }

    pub fn set_fail_trust(env: Env, fail: bool) {
        env.storage().persistent().set(&HubKey::FailTrust, &fail);
    }

    pub fn balance_of(env: Env, account: Address, id: Address) -> i128 {
        balance(&env, &account, &id)
    }

    pub fn is_trusted(env: Env, truster: Address, trustee: Address) -> bool {
        trusted(&env, &truster, &trustee)
    }

    pub fn is_organization(env: Env, organization: Address) -> bool {
        env.storage()
            .persistent()
            .has(&HubKey::Organization(organization))
    }

    // ─── Membership authority ───────────────────────────────────────

    pub fn is_human(env: Env, avatar: Address) -> bool {
        flag(&env, &HubKey::Human(avatar))
    }

    pub fn is_group(env: Env, group: Address) -> bool {
        flag(&env, &HubKey::Group(group))
    }

    pub fn trust(
        env: Env,
        truster: Address,
        trustee: Address,
        expiry: u64,
    ) -> Result<(), HubError> {
        truster.require_auth();
        if flag(&env, &HubKey::FailTrust) {
            return Err(HubError::TrustDisabled);
        }
        env.storage()
            .persistent()
            .set(&HubKey::Trust(truster, trustee), &expiry);
        Ok(())
    }

    pub fn group_mint(
        env: Env,
        sender: Address,
        group: Address,
        collateral_avatars: Vec<Address>,
        amounts: Vec<i128>,
        _data: Bytes,
    ) -> Result<(), HubError> {
        sender.require_auth();

        if !flag(&env, &HubKey::Group(group.clone())) {
            return Err(HubError::NotGroup);
        }
        if flag(&env, &HubKey::FailMint) {
            return Err(HubError::MintRejected);
        }
        if collateral_avatars.len() != amounts.len() {
            return Err(HubError::LengthMismatch);
        }

        let mut minted = 0;
        for (avatar, amount) in collateral_avatars.iter().zip(amounts.iter()) {
            let held = balance(&env, &sender, &avatar);
            if held < amount {
                return Err(HubError::InsufficientBalance);
            }
            set_balance(&env, &sender, &avatar, held - amount);
            let vault = balance(&env, &group, &avatar);
            set_balance(&env, &group, &avatar, vault + amount);
            minted += amount;
        }

        let pooled = balance(&env, &sender, &group);
        set_balance(&env, &sender, &group, pooled + minted);
        Ok(())
    }

    pub fn register_organization(
        env: Env,
        organization: Address,
        name: String,
        _metadata_digest: BytesN<32>,
    ) {
        organization.require_auth();
        env.storage()
            .persistent()
            .set(&HubKey::Organization(organization), &name);
    }

    // ─── Ledger ─────────────────────────────────────────────────────

    pub fn safe_transfer_from(
        env: Env,
        from: Address,
        to: Address,
        id: Address,
        value: i128,
        _data: Bytes,
    ) -> Result<(), HubError> {
        from.require_auth();

        if flag(&env, &HubKey::FailTransfers) {
            return Err(HubError::TransfersDisabled);
        }

        // Organizations only accept personal tokens of avatars they trust.
        let receiver_is_org = env
            .storage()
            .persistent()
            .has(&HubKey::Organization(to.clone()));
        let is_group_token = flag(&env, &HubKey::Group(id.clone()));
        if receiver_is_org && !is_group_token && !trusted(&env, &to, &id) {
            return Err(HubError::NotTrusted);
        }

        let held = balance(&env, &from, &id);
        if held < value {
            return Err(HubError::InsufficientBalance);
        }
        set_balance(&env, &from, &id, held - value);
        let received = balance(&env, &to, &id);
        set_balance(&env, &to, &id, received + value);
        Ok(())
    }
}

fn flag(env: &Env, key: &HubKey) -> bool {
    env.storage().persistent().get(key).unwrap_or(false)
}

fn trusted(env: &Env, truster: &Address, trustee: &Address) -> bool {
    let expiry: u64 = env
        .storage()
        .persistent()
        .get(&HubKey::Trust(truster.clone(), trustee.clone()))
        .unwrap_or(0);
    expiry > env.ledger().timestamp()
}

fn balance(env: &Env, account: &Address, id: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&HubKey::Balance(account.clone(), id.clone()))
        .unwrap_or(0)
}

fn set_balance(env: &Env, account: &Address, id: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&HubKey::Balance(account.clone(), id.clone()), &amount);
}

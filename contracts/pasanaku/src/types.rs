use soroban_sdk::{contracttype, Address, BytesN};

/// Immutable pool configuration, written once by the constructor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Hub contract: membership authority and multi-token ledger.
    pub hub: Address,
    /// Group whose pooled token every deposit is minted into.
    pub group: Address,
    /// Minimum length of a round, in seconds.
    pub round_interval: u64,
    /// Fixed per-round deposit, in token base units.
    pub deposit_amount: i128,
}

/// Mutable state of the current round.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundState {
    pub round_id: u32,
    pub round_started_at: u64,
    /// Bit `i` set means the member at position `i` contributed this round.
    pub contributed_mask: BytesN<32>,
    /// Always `popcount(contributed_mask) * deposit_amount`.
    pub pot: i128,
    pub next_recipient_index: u32,
}

/// Storage keys for all contract data.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Round,
    Members,
    Position(Address),
}

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    NotEligible = 1,
    AlreadyMember = 2,
    NotMember = 3,
    CapacityExceeded = 4,
    AlreadyContributed = 5,
    RoundNotEnded = 6,
    NoContributions = 7,
    NoParticipants = 8,
    CollaboratorFailure = 9,
    InvalidConfig = 10,
    InvalidGroup = 11,
    InvalidPosition = 12,
    NotInitialized = 13,
    PotOverflow = 14,
}

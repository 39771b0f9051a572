use std::num::TryFromIntError;

use anchor_lang::prelude::*;
use num_enum::TryFromPrimitive;

#[error_code]
#[derive(PartialEq, Eq, TryFromPrimitive)]
pub enum PricecasterError {
    #[msg("Payload is shorter than the batch header")]
    TruncatedPayload,

    #[msg("Payload does not start with the expected magic header")]
    BadMagicHeader,

    #[msg("Unsupported wire format major version")]
    UnsupportedWireVersion,

    #[msg("Unexpected number of remaining header fields")]
    UnexpectedFieldCount,

    #[msg("Payload type is not an attestation batch")]
    UnexpectedPayloadType,

    #[msg("Attestation batch is empty")]
    EmptyAttestationBatch,

    #[msg("Unexpected attestation record size")]
    UnexpectedAttestationSize,

    #[msg("Payload length does not match the attestation count")]
    PayloadLengthMismatch,

    #[msg("Attestation batch exceeds the configured maximum")]
    TooManyAttestations,

    #[msg("Caller is not the owner")]
    CallerNotOwner,

    #[msg("Store is not accompanied by a trusted relay instruction")]
    MissingRelayInstruction,

    #[msg("Store is accompanied by a disallowed instruction")]
    UnexpectedSiblingInstruction,

    #[msg("Store instruction called in a CPI")]
    StoreInCPI,

    #[msg("All data slots are allocated")]
    StoreCapacityExceeded,

    #[msg("Slot holds a different asset than the one being updated")]
    AssetSlotMismatch,

    #[msg("Slot index is not allocated")]
    SlotNotAllocated,

    #[msg("Slot data has an invalid length")]
    BadSlotDataLength,

    #[msg("Slot index is outside of the store region")]
    SlotIndexOutOfRange,

    #[msg("The number of asset slot assignments is different from the number of attestations")]
    AssignmentCountMismatch,

    #[msg("Asset already has an allocated slot")]
    DuplicateAsset,

    #[msg("Store region has an invalid size")]
    BadStoreRegionSize,

    #[msg("No decimals found for asset")]
    UnknownAssetDecimals,

    #[msg("Mathematical operation with overflow")]
    MathOverflow,

    #[msg("Price exponent is out of the supported range")]
    ExponentOutOfRange,

    #[msg("Asset decimals are out of the supported range")]
    DecimalsOutOfRange,

    #[msg("Price is negative")]
    NegativePrice,

    #[msg("Out of range integral conversion attempted")]
    OutOfRangeIntegralConversion,

    #[msg("Auxiliary budget fee would exceed the fee ceiling")]
    BudgetFeeCeilingExceeded,

    #[msg("Execution budget exhausted")]
    BudgetExhausted,

    #[msg("Unexpected account in instruction")]
    UnexpectedAccount,

    #[msg("Unable to deserialize account")]
    UnableToDeserializeAccount,

    #[msg("Invalid configuration update mode or value")]
    InvalidConfigurationMode,
}

/// Coarse classification of [`PricecasterError`], all of them are fatal for the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Format,
    Authorization,
    Capacity,
    Consistency,
    Lookup,
    Arithmetic,
    Budget,
    Account,
}

impl PricecasterError {
    pub fn category(&self) -> ErrorCategory {
        use PricecasterError::*;
        match self {
            TruncatedPayload
            | BadMagicHeader
            | UnsupportedWireVersion
            | UnexpectedFieldCount
            | UnexpectedPayloadType
            | EmptyAttestationBatch
            | UnexpectedAttestationSize
            | PayloadLengthMismatch
            | TooManyAttestations => ErrorCategory::Format,
            CallerNotOwner
            | MissingRelayInstruction
            | UnexpectedSiblingInstruction
            | StoreInCPI => ErrorCategory::Authorization,
            StoreCapacityExceeded => ErrorCategory::Capacity,
            AssetSlotMismatch
            | SlotNotAllocated
            | BadSlotDataLength
            | SlotIndexOutOfRange
            | AssignmentCountMismatch
            | DuplicateAsset
            | BadStoreRegionSize => ErrorCategory::Consistency,
            UnknownAssetDecimals => ErrorCategory::Lookup,
            MathOverflow
            | ExponentOutOfRange
            | DecimalsOutOfRange
            | NegativePrice
            | OutOfRangeIntegralConversion => ErrorCategory::Arithmetic,
            BudgetFeeCeilingExceeded | BudgetExhausted => ErrorCategory::Budget,
            UnexpectedAccount | UnableToDeserializeAccount | InvalidConfigurationMode => {
                ErrorCategory::Account
            }
        }
    }
}

impl From<TryFromIntError> for PricecasterError {
    fn from(_: TryFromIntError) -> Self {
        PricecasterError::OutOfRangeIntegralConversion
    }
}

pub type PricecasterResult<T = ()> = std::result::Result<T, PricecasterError>;

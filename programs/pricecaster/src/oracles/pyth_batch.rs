//! Parsing of Pyth batched price attestations (wire format v3)
//!
//! A batch is a 15 bytes big-endian header followed by `N` fixed size attestation records:
//!
//! | offset | len | field                                   |
//! |--------|-----|-----------------------------------------|
//! | 0      | 4   | magic `P2WH`                            |
//! | 4      | 2   | major version, must be 3                |
//! | 6      | 2   | minor version, not checked              |
//! | 8      | 2   | number of remaining fields, must be 1   |
//! | 10     | 1   | payload id, must be 2 (attestation)     |
//! | 11     | 2   | attestation count `N`, must be > 0      |
//! | 13     | 2   | attestation size, must be 149           |
//! | 15     | ... | `N` attestations                        |
//!
//! The payload is expected to have been verified by the relay before reaching this program,
//! nothing here checks signatures.

use anchor_lang::prelude::Pubkey;
use arrayref::array_ref;

use crate::{PricecasterError, PricecasterResult};

pub const PYTH_MAGIC_HEADER: [u8; 4] = *b"P2WH";
pub const PYTH_WIRE_FORMAT_MAJOR_VERSION: u16 = 3;
pub const PYTH_REMAINING_FIELDS: u16 = 1;
pub const PYTH_PAYLOAD_ID_ATTESTATION: u8 = 2;
pub const PYTH_BATCH_HEADER_SIZE: usize = 15;
pub const PYTH_ATTESTATION_SIZE: usize = 149;

/// Only prices with this status are publishable
pub const PYTH_STATUS_TRADING: u8 = 1;

const MAJOR_VERSION_OFFSET: usize = 4;
const MINOR_VERSION_OFFSET: usize = 6;
const REMAINING_FIELDS_OFFSET: usize = 8;
const PAYLOAD_ID_OFFSET: usize = 10;
const ATTESTATION_COUNT_OFFSET: usize = 11;
const ATTESTATION_SIZE_OFFSET: usize = 13;

// Offsets inside an attestation record
const PRODUCT_ID_OFFSET: usize = 0;
const PRICE_ID_OFFSET: usize = 32;
const PRICE_OFFSET: usize = 64;
const CONFIDENCE_OFFSET: usize = 72;
const EXPONENT_OFFSET: usize = 80;
const EMA_PRICE_OFFSET: usize = 84;
const EMA_CONFIDENCE_OFFSET: usize = 92;
const STATUS_OFFSET: usize = 100;
const NUM_PUBLISHERS_OFFSET: usize = 101;
const MAX_NUM_PUBLISHERS_OFFSET: usize = 105;
const ATTESTATION_TIME_OFFSET: usize = 109;
const PUBLISH_TIME_OFFSET: usize = 117;
const PREV_PUBLISH_TIME_OFFSET: usize = 125;
const PREV_PRICE_OFFSET: usize = 133;
const PREV_CONFIDENCE_OFFSET: usize = 141;

pub const PRICE_BLOCK_OFFSET: usize = PRICE_OFFSET;
pub const PRICE_BLOCK_SIZE: usize = 36;
pub const TIME_BLOCK_OFFSET: usize = ATTESTATION_TIME_OFFSET;
pub const TIME_BLOCK_SIZE: usize = 40;

static_assertions::const_assert_eq!(PRICE_BLOCK_OFFSET + PRICE_BLOCK_SIZE, STATUS_OFFSET);
static_assertions::const_assert_eq!(
    TIME_BLOCK_OFFSET + TIME_BLOCK_SIZE,
    PYTH_ATTESTATION_SIZE
);

/// Validated view over a batch payload, attestations are borrowed from the payload.
#[derive(Debug, Clone, Copy)]
pub struct BatchView<'a> {
    payload: &'a [u8],
    count: usize,
}

/// Validate the batch header against the payload length.
///
/// Checks are done in wire order and the first failing one is reported.
pub fn parse_and_validate(payload: &[u8]) -> PricecasterResult<BatchView<'_>> {
    if payload.len() < PYTH_BATCH_HEADER_SIZE {
        return Err(PricecasterError::TruncatedPayload);
    }

    if payload[..MAJOR_VERSION_OFFSET] != PYTH_MAGIC_HEADER {
        return Err(PricecasterError::BadMagicHeader);
    }
    if read_u16(payload, MAJOR_VERSION_OFFSET) != PYTH_WIRE_FORMAT_MAJOR_VERSION {
        return Err(PricecasterError::UnsupportedWireVersion);
    }
    if read_u16(payload, REMAINING_FIELDS_OFFSET) != PYTH_REMAINING_FIELDS {
        return Err(PricecasterError::UnexpectedFieldCount);
    }
    if payload[PAYLOAD_ID_OFFSET] != PYTH_PAYLOAD_ID_ATTESTATION {
        return Err(PricecasterError::UnexpectedPayloadType);
    }

    let count = usize::from(read_u16(payload, ATTESTATION_COUNT_OFFSET));
    if count == 0 {
        return Err(PricecasterError::EmptyAttestationBatch);
    }
    let attestation_size = usize::from(read_u16(payload, ATTESTATION_SIZE_OFFSET));
    if attestation_size != PYTH_ATTESTATION_SIZE {
        return Err(PricecasterError::UnexpectedAttestationSize);
    }
    if attestation_size * count + PYTH_BATCH_HEADER_SIZE != payload.len() {
        return Err(PricecasterError::PayloadLengthMismatch);
    }

    Ok(BatchView { payload, count })
}

fn read_u16(payload: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes(*array_ref![payload, offset, 2])
}

impl<'a> BatchView<'a> {
    pub fn attestation_count(&self) -> usize {
        self.count
    }

    pub fn minor_version(&self) -> u16 {
        read_u16(self.payload, MINOR_VERSION_OFFSET)
    }

    pub fn attestation_at(&self, index: usize) -> Option<Attestation<'a>> {
        if index >= self.count {
            return None;
        }
        let offset = PYTH_BATCH_HEADER_SIZE + index * PYTH_ATTESTATION_SIZE;
        let raw = array_ref![self.payload, offset, PYTH_ATTESTATION_SIZE];
        Some(Attestation { raw })
    }

    pub fn attestations(&self) -> impl Iterator<Item = Attestation<'a>> + '_ {
        (0..self.count).filter_map(move |i| self.attestation_at(i))
    }
}

/// One price attestation, decoded lazily from its wire bytes.
#[derive(Clone, Copy)]
pub struct Attestation<'a> {
    raw: &'a [u8; PYTH_ATTESTATION_SIZE],
}

impl<'a> Attestation<'a> {
    pub fn as_bytes(&self) -> &'a [u8; PYTH_ATTESTATION_SIZE] {
        self.raw
    }

    pub fn product_price_key(&self) -> &'a [u8; 64] {
        array_ref![self.raw, PRODUCT_ID_OFFSET, 64]
    }

    pub fn product_id(&self) -> &'a [u8; 32] {
        array_ref![self.raw, PRODUCT_ID_OFFSET, 32]
    }

    pub fn price_id(&self) -> &'a [u8; 32] {
        array_ref![self.raw, PRICE_ID_OFFSET, 32]
    }

    pub fn price(&self) -> i64 {
        i64::from_be_bytes(*array_ref![self.raw, PRICE_OFFSET, 8])
    }

    pub fn confidence(&self) -> u64 {
        u64::from_be_bytes(*array_ref![self.raw, CONFIDENCE_OFFSET, 8])
    }

    pub fn exponent(&self) -> i32 {
        i32::from_be_bytes(*array_ref![self.raw, EXPONENT_OFFSET, 4])
    }

    pub fn ema_price(&self) -> i64 {
        i64::from_be_bytes(*array_ref![self.raw, EMA_PRICE_OFFSET, 8])
    }

    pub fn ema_confidence(&self) -> u64 {
        u64::from_be_bytes(*array_ref![self.raw, EMA_CONFIDENCE_OFFSET, 8])
    }

    pub fn status(&self) -> u8 {
        self.raw[STATUS_OFFSET]
    }

    pub fn is_trading(&self) -> bool {
        self.status() == PYTH_STATUS_TRADING
    }

    pub fn num_publishers(&self) -> u32 {
        u32::from_be_bytes(*array_ref![self.raw, NUM_PUBLISHERS_OFFSET, 4])
    }

    pub fn max_num_publishers(&self) -> u32 {
        u32::from_be_bytes(*array_ref![self.raw, MAX_NUM_PUBLISHERS_OFFSET, 4])
    }

    pub fn attestation_time(&self) -> u64 {
        u64::from_be_bytes(*array_ref![self.raw, ATTESTATION_TIME_OFFSET, 8])
    }

    pub fn publish_time(&self) -> u64 {
        u64::from_be_bytes(*array_ref![self.raw, PUBLISH_TIME_OFFSET, 8])
    }

    pub fn prev_publish_time(&self) -> u64 {
        u64::from_be_bytes(*array_ref![self.raw, PREV_PUBLISH_TIME_OFFSET, 8])
    }

    pub fn prev_price(&self) -> i64 {
        i64::from_be_bytes(*array_ref![self.raw, PREV_PRICE_OFFSET, 8])
    }

    pub fn prev_confidence(&self) -> u64 {
        u64::from_be_bytes(*array_ref![self.raw, PREV_CONFIDENCE_OFFSET, 8])
    }

    /// price, confidence, exponent, EMA price and EMA confidence, as stored in a slot
    pub fn price_block(&self) -> &'a [u8; PRICE_BLOCK_SIZE] {
        array_ref![self.raw, PRICE_BLOCK_OFFSET, PRICE_BLOCK_SIZE]
    }

    /// attestation time, publish time, previous publish time, previous price and previous
    /// confidence, as stored in a slot
    pub fn time_block(&self) -> &'a [u8; TIME_BLOCK_SIZE] {
        array_ref![self.raw, TIME_BLOCK_OFFSET, TIME_BLOCK_SIZE]
    }
}

impl std::fmt::Debug for Attestation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attestation")
            .field("price_id", &Pubkey::from(*self.price_id()))
            .field("price", &self.price())
            .field("confidence", &self.confidence())
            .field("exponent", &self.exponent())
            .field("ema_price", &self.ema_price())
            .field("ema_confidence", &self.ema_confidence())
            .field("status", &self.status())
            .field("num_publishers", &self.num_publishers())
            .field("publish_time", &self.publish_time())
            .finish()
    }
}

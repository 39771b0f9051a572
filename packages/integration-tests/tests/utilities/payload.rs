#![allow(dead_code)]

pub const PRICE_STATUS_UNKNOWN: u8 = 0;
pub const PRICE_STATUS_TRADING: u8 = 1;
pub const PRICE_STATUS_HALTED: u8 = 2;

/// Attestation as emitted by the Pyth relay, encoded with [`encode_batch`]
#[derive(Debug, Clone, Copy)]
pub struct PriceAttestation {
    pub product_id: [u8; 32],
    pub price_id: [u8; 32],
    pub price: i64,
    pub conf: u64,
    pub expo: i32,
    pub ema_price: i64,
    pub ema_conf: u64,
    pub status: u8,
    pub num_publishers: u32,
    pub max_num_publishers: u32,
    pub attestation_time: u64,
    pub publish_time: u64,
    pub prev_publish_time: u64,
    pub prev_price: i64,
    pub prev_conf: u64,
}

impl PriceAttestation {
    /// Trading attestation with an 8 decimals exponent
    pub fn trading(price: i64, publish_time: u64) -> Self {
        Self {
            product_id: [0x11; 32],
            price_id: [0x22; 32],
            price,
            conf: 1_500_000,
            expo: -8,
            ema_price: price - 100,
            ema_conf: 1_000_000,
            status: PRICE_STATUS_TRADING,
            num_publishers: 12,
            max_num_publishers: 32,
            attestation_time: publish_time + 1,
            publish_time,
            prev_publish_time: publish_time.saturating_sub(2),
            prev_price: price + 100,
            prev_conf: 1_400_000,
        }
    }

    pub fn with_status(self, status: u8) -> Self {
        Self { status, ..self }
    }

    pub fn with_expo(self, expo: i32) -> Self {
        Self { expo, ..self }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(149);
        out.extend_from_slice(&self.product_id);
        out.extend_from_slice(&self.price_id);
        out.extend_from_slice(&self.price.to_be_bytes());
        out.extend_from_slice(&self.conf.to_be_bytes());
        out.extend_from_slice(&self.expo.to_be_bytes());
        out.extend_from_slice(&self.ema_price.to_be_bytes());
        out.extend_from_slice(&self.ema_conf.to_be_bytes());
        out.push(self.status);
        out.extend_from_slice(&self.num_publishers.to_be_bytes());
        out.extend_from_slice(&self.max_num_publishers.to_be_bytes());
        out.extend_from_slice(&self.attestation_time.to_be_bytes());
        out.extend_from_slice(&self.publish_time.to_be_bytes());
        out.extend_from_slice(&self.prev_publish_time.to_be_bytes());
        out.extend_from_slice(&self.prev_price.to_be_bytes());
        out.extend_from_slice(&self.prev_conf.to_be_bytes());
        out
    }
}

pub fn encode_batch(attestations: &[PriceAttestation]) -> Vec<u8> {
    let mut out = Vec::with_capacity(15 + 149 * attestations.len());
    out.extend_from_slice(b"P2WH");
    out.extend_from_slice(&3_u16.to_be_bytes());
    out.extend_from_slice(&0_u16.to_be_bytes());
    out.extend_from_slice(&1_u16.to_be_bytes());
    out.push(2);
    out.extend_from_slice(&(attestations.len() as u16).to_be_bytes());
    out.extend_from_slice(&149_u16.to_be_bytes());
    for attestation in attestations {
        out.extend(attestation.encode());
    }
    out
}

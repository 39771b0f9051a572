//! Store a batch of attestations into the slot store.
//!
//! The whole batch is validated and every write is staged before anything is committed, a fatal
//! error leaves the store untouched. Attestations that are not trading or that are older than the
//! stored price are skipped and reported, they do not fail the batch.

use anchor_lang::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::{
    oracles::{pyth_batch, resolve_decimals, AssetDecimals},
    states::{SlotRecord, SlotStore},
    utils::{
        batch_auth::StoreAuthorization, budget::ComputeBudget,
        consts::STORE_COST_PER_ATTESTATION, math::normalize_price,
    },
    PricecasterError, PricecasterResult,
};

/// Slot the caller expects an attestation to be written to, verified against the stored asset id
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AssetSlot {
    pub asset_id: u64,
    pub slot_index: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdatePolicy {
    pub max_attestations: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum SkipReason {
    #[strum(serialize = "PC_IGNORED_PRICE_INVALID_STATUS")]
    InvalidStatus,
    #[strum(serialize = "PC_IGNORED_PRICE_STALE")]
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttestationOutcome {
    Stored {
        asset_id: u64,
        slot_index: u8,
        normalized_price: u64,
    },
    Skipped {
        asset_id: u64,
        reason: SkipReason,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StoreReport {
    pub outcomes: Vec<AttestationOutcome>,
}

impl StoreReport {
    pub fn stored_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, AttestationOutcome::Stored { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.stored_count()
    }

    fn skip(&mut self, asset_id: u64, reason: SkipReason) {
        let label: &'static str = reason.into();
        msg!("{}: asset {}", label, asset_id);
        self.outcomes
            .push(AttestationOutcome::Skipped { asset_id, reason });
    }
}

/// Parse `payload` and store its attestations to the slots given by `assignments`.
///
/// `assignments[i]` is the asset and slot of the i-th attestation of the batch.
pub fn store_prices(
    store: &mut SlotStore<'_>,
    _authorization: &StoreAuthorization,
    payload: &[u8],
    assignments: &[AssetSlot],
    decimals: &impl AssetDecimals,
    policy: &UpdatePolicy,
    budget: &mut ComputeBudget,
) -> PricecasterResult<StoreReport> {
    let batch = pyth_batch::parse_and_validate(payload)?;
    let count = batch.attestation_count();

    if count > policy.max_attestations {
        msg!(
            "Batch of {} attestations, at most {} are accepted",
            count,
            policy.max_attestations
        );
        return Err(PricecasterError::TooManyAttestations);
    }
    if assignments.len() != count {
        msg!(
            "{} asset slots given for {} attestations",
            assignments.len(),
            count
        );
        return Err(PricecasterError::AssignmentCountMismatch);
    }

    budget.ensure_budget(u64::try_from(count)? * STORE_COST_PER_ATTESTATION)?;

    let entry_count = usize::from(store.entry_count());
    let mut staged: Vec<(usize, SlotRecord)> = Vec::with_capacity(count);
    let mut report = StoreReport {
        outcomes: Vec::with_capacity(count),
    };

    for (attestation, assignment) in batch.attestations().zip(assignments) {
        budget.consume(STORE_COST_PER_ATTESTATION)?;
        let AssetSlot {
            asset_id,
            slot_index,
        } = *assignment;

        if !attestation.is_trading() {
            report.skip(asset_id, SkipReason::InvalidStatus);
            continue;
        }

        let index = usize::from(slot_index);
        if index >= entry_count {
            msg!("Slot {} for asset {} is not allocated", slot_index, asset_id);
            return Err(PricecasterError::SlotNotAllocated);
        }
        // Latest staged write for the slot wins over the stored one
        let current = match staged.iter().rev().find(|(i, _)| *i == index) {
            Some((_, record)) => *record,
            None => *store.read(index)?,
        };

        if current.asset_id() != asset_id {
            msg!(
                "Slot {} holds asset {}, expected {}",
                slot_index,
                current.asset_id(),
                asset_id
            );
            return Err(PricecasterError::AssetSlotMismatch);
        }

        if attestation.publish_time() <= current.publish_time() {
            report.skip(asset_id, SkipReason::Stale);
            continue;
        }

        let asset_decimals = resolve_decimals(decimals, asset_id)?;
        let normalized_price =
            normalize_price(attestation.price(), attestation.exponent(), asset_decimals)?;

        msg!(
            "asset {} slot {}: price {} to {}, publish time {} to {}",
            asset_id,
            slot_index,
            current.normalized_price(),
            normalized_price,
            current.publish_time(),
            attestation.publish_time()
        );
        staged.push((
            index,
            SlotRecord::from_attestation(asset_id, normalized_price, &attestation),
        ));
        report.outcomes.push(AttestationOutcome::Stored {
            asset_id,
            slot_index,
            normalized_price,
        });
    }

    for (index, record) in staged.iter() {
        store.write(*index, record.as_bytes())?;
    }

    Ok(report)
}

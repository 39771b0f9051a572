//! Execution budget accounting.
//!
//! The host grants a small fixed allowance per top-level call. Loops whose cost depends on the
//! batch or store size buy the missing units up front by issuing auxiliary operations, each one
//! adding [`BudgetParams::unit_budget_per_auxiliary`] units for a fixed fee. Budget must be
//! ensured before the loop starts, running out in the middle of it is unrecoverable.

use anchor_lang::prelude::*;

use crate::utils::consts::{AUXILIARY_FEE, AUXILIARY_UNIT_BUDGET, BASE_CALL_BUDGET};
use crate::{PricecasterError, PricecasterResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetParams {
    pub unit_budget_per_auxiliary: u64,
    pub fee_per_auxiliary: u64,
    pub fee_ceiling: u64,
}

impl BudgetParams {
    pub fn with_fee_ceiling(fee_ceiling: u64) -> Self {
        Self {
            unit_budget_per_auxiliary: AUXILIARY_UNIT_BUDGET,
            fee_per_auxiliary: AUXILIARY_FEE,
            fee_ceiling,
        }
    }
}

#[derive(Debug)]
pub struct ComputeBudget {
    params: BudgetParams,
    remaining: u64,
    fees_paid: u64,
    auxiliary_issued: u32,
}

impl ComputeBudget {
    pub fn new(base_allowance: u64, params: BudgetParams) -> Self {
        Self {
            params,
            remaining: base_allowance,
            fees_paid: 0,
            auxiliary_issued: 0,
        }
    }

    /// Budget of a fresh top-level call
    pub fn for_call(fee_ceiling: u64) -> Self {
        Self::new(BASE_CALL_BUDGET, BudgetParams::with_fee_ceiling(fee_ceiling))
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn fees_paid(&self) -> u64 {
        self.fees_paid
    }

    pub fn auxiliary_issued(&self) -> u32 {
        self.auxiliary_issued
    }

    /// Issue the minimum number of auxiliary operations so that at least `target_units` are
    /// available. Returns the number of operations issued by this call.
    pub fn ensure_budget(&mut self, target_units: u64) -> PricecasterResult<u32> {
        if self.remaining >= target_units {
            return Ok(0);
        }
        let missing = target_units - self.remaining;
        let unit = self.params.unit_budget_per_auxiliary;
        // Auxiliary ops that add no units can never cover the missing budget
        if unit == 0 {
            return Err(PricecasterError::BudgetExhausted);
        }
        let count = missing
            .checked_add(unit - 1)
            .ok_or(PricecasterError::MathOverflow)?
            / unit;

        let fee = count
            .checked_mul(self.params.fee_per_auxiliary)
            .ok_or(PricecasterError::MathOverflow)?;
        let fees_paid = self
            .fees_paid
            .checked_add(fee)
            .ok_or(PricecasterError::MathOverflow)?;
        if fees_paid > self.params.fee_ceiling {
            msg!(
                "Budget of {} units needs {} auxiliary ops ({} fee), ceiling is {} with {} already paid",
                target_units,
                count,
                fee,
                self.params.fee_ceiling,
                self.fees_paid
            );
            return Err(PricecasterError::BudgetFeeCeilingExceeded);
        }

        let count_u32 = u32::try_from(count)?;
        self.remaining += count * unit;
        self.fees_paid = fees_paid;
        self.auxiliary_issued += count_u32;

        msg!(
            "Issued {} auxiliary ops for {} fee, remaining budget {}",
            count,
            fee,
            self.remaining
        );
        Ok(count_u32)
    }

    pub fn consume(&mut self, units: u64) -> PricecasterResult<()> {
        self.remaining = self
            .remaining
            .checked_sub(units)
            .ok_or(PricecasterError::BudgetExhausted)?;
        Ok(())
    }
}

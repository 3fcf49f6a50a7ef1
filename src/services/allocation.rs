//! Beneficiary allocation service
//!
//! Enforces the capped distribution rule: the shares of all beneficiaries
//! never add up to more than the cap of the active religion profile.

use crate::error::{KioskError, KioskResult};
use crate::models::{default_beneficiaries, Beneficiary, Percent};

/// Clamp a requested share into `[0, cap - others]`
///
/// `others` is the sum of every other beneficiary's share. If the others
/// already fill the cap the only allowed value is zero.
pub fn clamp_share(requested: Percent, cap: Percent, others: Percent) -> Percent {
    let ceiling = (cap - others).clamp_to(Percent::zero(), cap);
    requested.clamp_to(Percent::zero(), ceiling)
}

/// Ordered list of beneficiaries under a cap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    beneficiaries: Vec<Beneficiary>,
    cap: Percent,
}

impl Allocation {
    /// Create an allocation from existing beneficiaries
    ///
    /// Shares are clamped in order so the cap holds from the start.
    pub fn new(beneficiaries: Vec<Beneficiary>, cap: Percent) -> Self {
        let mut allocation = Self {
            beneficiaries: Vec::with_capacity(beneficiaries.len()),
            cap,
        };
        for mut beneficiary in beneficiaries {
            beneficiary.share = clamp_share(beneficiary.share, cap, allocation.total());
            allocation.beneficiaries.push(beneficiary);
        }
        allocation
    }

    /// The session defaults: Mother 50%, Father 50% of the whole estate
    pub fn seeded() -> Self {
        Self::new(default_beneficiaries(), Percent::FULL)
    }

    pub fn cap(&self) -> Percent {
        self.cap
    }

    pub fn beneficiaries(&self) -> &[Beneficiary] {
        &self.beneficiaries
    }

    pub fn get(&self, index: usize) -> Option<&Beneficiary> {
        self.beneficiaries.get(index)
    }

    pub fn len(&self) -> usize {
        self.beneficiaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beneficiaries.is_empty()
    }

    /// Sum of all shares
    pub fn total(&self) -> Percent {
        self.beneficiaries.iter().map(|b| b.share).sum()
    }

    /// Headroom left under the cap
    pub fn remaining(&self) -> Percent {
        self.cap - self.total()
    }

    /// Sum of every share except the one at `index`
    fn others_total(&self, index: usize) -> KioskResult<Percent> {
        let own = self.share_at(index)?;
        Ok(self.total() - own)
    }

    fn share_at(&self, index: usize) -> KioskResult<Percent> {
        self.beneficiaries
            .get(index)
            .map(|b| b.share)
            .ok_or_else(|| KioskError::beneficiary_not_found(index))
    }

    /// Largest share the beneficiary at `index` may hold
    pub fn max_for(&self, index: usize) -> KioskResult<Percent> {
        Ok(self.cap - self.others_total(index)?)
    }

    /// Whether the "+" stepper is enabled for `index`
    pub fn can_increase(&self, index: usize) -> bool {
        match (self.share_at(index), self.max_for(index)) {
            (Ok(share), Ok(max)) => share < max,
            _ => false,
        }
    }

    /// Whether "Add Beneficiary" is enabled
    pub fn can_add(&self) -> bool {
        self.remaining() > Percent::TOLERANCE
    }

    /// Whether "Remove" is offered
    pub fn can_remove(&self) -> bool {
        self.beneficiaries.len() > 1
    }

    /// Whether the total matches the cap closely enough to continue
    pub fn is_balanced(&self) -> bool {
        self.total().abs_diff(self.cap) <= Percent::TOLERANCE
    }

    /// Set a share, clamping it into the allowed range
    ///
    /// Returns the share actually stored.
    pub fn set_share(&mut self, index: usize, requested: Percent) -> KioskResult<Percent> {
        let others = self.others_total(index)?;
        let share = clamp_share(requested, self.cap, others);
        self.beneficiaries[index].share = share;
        Ok(share)
    }

    /// Set a share from typed text; unreadable input counts as zero
    pub fn set_share_from_input(&mut self, index: usize, input: &str) -> KioskResult<Percent> {
        self.set_share(index, Percent::parse_lenient(input))
    }

    /// Step a share up by one point, stopping at the cap
    pub fn increase(&mut self, index: usize) -> KioskResult<Percent> {
        let share = self.share_at(index)?;
        if !self.can_increase(index) {
            return Err(KioskError::Blocked(format!(
                "No allocation left: total is already {} of {}",
                self.total(),
                self.cap
            )));
        }
        self.set_share(index, share + Percent::STEP)
    }

    /// Step a share down by one point, stopping at zero
    pub fn decrease(&mut self, index: usize) -> KioskResult<Percent> {
        let share = self.share_at(index)?;
        self.set_share(index, share - Percent::STEP)
    }

    /// Append an unnamed beneficiary at 0%
    ///
    /// Returns the index of the new entry.
    pub fn add(&mut self) -> KioskResult<usize> {
        if !self.can_add() {
            return Err(KioskError::Blocked(format!(
                "Cannot add a beneficiary: {} is already allocated",
                self.total()
            )));
        }
        self.beneficiaries.push(Beneficiary::blank());
        Ok(self.beneficiaries.len() - 1)
    }

    /// Remove the beneficiary at `index`
    pub fn remove(&mut self, index: usize) -> KioskResult<Beneficiary> {
        self.share_at(index)?;
        if !self.can_remove() {
            return Err(KioskError::Blocked(
                "At least one beneficiary is required".into(),
            ));
        }
        Ok(self.beneficiaries.remove(index))
    }

    /// Rename the beneficiary at `index`
    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> KioskResult<()> {
        let beneficiary = self
            .beneficiaries
            .get_mut(index)
            .ok_or_else(|| KioskError::beneficiary_not_found(index))?;
        beneficiary.name = name.into();
        Ok(())
    }

    /// Move every share onto a new cap
    ///
    /// Each share is scaled by `new_cap / old_cap` (rounded down); the
    /// rounding remainder of the scaled total is then handed out one tenth at
    /// a time in display order.
    pub fn rescale(&mut self, new_cap: Percent) {
        let old_cap = self.cap;
        if old_cap == new_cap {
            return;
        }

        let target = self.total().scale(new_cap, old_cap).clamp_to(Percent::zero(), new_cap);
        for beneficiary in &mut self.beneficiaries {
            beneficiary.share = beneficiary.share.scale(new_cap, old_cap);
        }
        self.cap = new_cap;

        let mut leftover = target - self.total();
        let mut index = 0;
        while leftover > Percent::zero() && !self.beneficiaries.is_empty() {
            self.beneficiaries[index].share += Percent::TOLERANCE;
            leftover -= Percent::TOLERANCE;
            index = (index + 1) % self.beneficiaries.len();
        }
    }

    /// Replace everything with the session defaults
    pub fn reset(&mut self) {
        *self = Self::seeded();
    }
}

impl Default for Allocation {
    fn default() -> Self {
        Self::seeded()
    }
}

use itertools::Itertools;

use crate::error::{Error, Result};

/// Running calorie totals, one per elf, in the order the elves appear in the input.
///
/// There is always at least one elf. Every blank line starts a new one, so runs of blank
/// lines (or a trailing blank line) leave elves carrying nothing. They stay in the list with
/// a total of zero.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Elves {
    totals: Vec<u64>,
}

impl Default for Elves {
    fn default() -> Elves {
        Elves { totals: vec![0] }
    }
}

impl Elves {
    /// Adds to the current elf's total. `line` is only used to report overflow.
    pub fn eat(mut self, calories: u64, line: usize) -> Result<Elves> {
        // Never empty, see Default.
        if let Some(current) = self.totals.last_mut() {
            *current = current
                .checked_add(calories)
                .ok_or(Error::Overflow { line })?;
        }

        Ok(self)
    }

    pub fn next(mut self) -> Elves {
        tracing::trace!(
            elf = self.totals.len() - 1,
            calories = self.totals.last().copied().unwrap_or_default(),
            "elf finished"
        );
        self.totals.push(0);
        self
    }

    pub fn totals(&self) -> &[u64] {
        &self.totals
    }

    /// The best-supplied elf's total, or zero if nobody carries anything.
    pub fn max(&self) -> u64 {
        self.totals.iter().copied().fold(0, u64::max)
    }

    /// Combined total of the `n` best-supplied elves. Sums everyone if there are fewer than `n`.
    pub fn top(&self, n: usize) -> Result<u64> {
        self.totals
            .iter()
            .copied()
            .sorted_by(|a, b| b.cmp(a))
            .take(n)
            .try_fold(0u64, u64::checked_add)
            .ok_or(Error::TotalOverflow)
    }
}

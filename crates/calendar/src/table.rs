//! Per-year table of month start epochs.

use crate::civil::{Epoch, month_start};

/// Number of boundaries in a table: twelve month starts plus the start of
/// the following year.
pub const BOUNDARIES: usize = 13;

/// Start epochs of the twelve months of one year, followed by the start of
/// the next year.
///
/// Index `m` in `0..12` is `00:00:00` on the first of month `m`; index 12 is
/// January 1 of the following year. Values are strictly increasing and never
/// change once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct YearBoundaryTable {
    year: i32,
    boundaries: [Epoch; BOUNDARIES],
}

impl YearBoundaryTable {
    /// Computes the table for a calendar year.
    pub(crate) fn build(year: i32) -> Self {
        let boundaries = std::array::from_fn(|m| month_start(year, m as u32));
        Self { year, boundaries }
    }

    /// Returns the calendar year this table describes.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the epoch at which month `month` (0-based) starts.
    ///
    /// `month == 12` yields the start of the following year.
    ///
    /// # Panics
    ///
    /// Panics if `month > 12`.
    pub fn month_start(&self, month: usize) -> Epoch {
        self.boundaries[month]
    }

    /// Returns the epoch of January 1 of this year.
    pub fn year_start(&self) -> Epoch {
        self.boundaries[0]
    }

    /// Returns the epoch of January 1 of the following year.
    pub fn next_year_start(&self) -> Epoch {
        self.boundaries[BOUNDARIES - 1]
    }

    /// Returns all thirteen boundaries.
    pub fn as_slice(&self) -> &[Epoch] {
        &self.boundaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::civil::SECONDS_PER_DAY;

    #[test]
    fn build_1970() {
        let table = YearBoundaryTable::build(1970);
        assert_eq!(table.year(), 1970);
        assert_eq!(table.year_start(), 0);
        assert_eq!(table.month_start(1), 31 * SECONDS_PER_DAY);
        assert_eq!(table.month_start(2), 59 * SECONDS_PER_DAY);
        assert_eq!(table.next_year_start(), 365 * SECONDS_PER_DAY);
    }

    #[test]
    fn leap_february() {
        let table = YearBoundaryTable::build(2020);
        assert_eq!(
            table.month_start(2) - table.month_start(1),
            29 * SECONDS_PER_DAY
        );
        let table = YearBoundaryTable::build(2021);
        assert_eq!(
            table.month_start(2) - table.month_start(1),
            28 * SECONDS_PER_DAY
        );
    }

    #[test]
    fn strictly_increasing() {
        for year in 1970..=2033 {
            let table = YearBoundaryTable::build(year);
            assert!(
                table.as_slice().windows(2).all(|w| w[0] < w[1]),
                "table for {year} not increasing"
            );
        }
    }

    #[test]
    fn next_year_start_chains() {
        for year in 1970..2033 {
            assert_eq!(
                YearBoundaryTable::build(year).next_year_start(),
                YearBoundaryTable::build(year + 1).year_start()
            );
        }
    }

    #[test]
    fn last_supported_year_ends_at_limit() {
        assert_eq!(
            YearBoundaryTable::build(2033).next_year_start(),
            2_019_686_400
        );
    }
}

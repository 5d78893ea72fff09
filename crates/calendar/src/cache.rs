//! Lazily built cache of year boundary tables.
//!
//! A [`YearBoundaryCache`] owns one slot per supported year. A slot is
//! filled the first time its year is requested and never changes after
//! that, so readers of a built year take no lock. Concurrent requests for
//! a year that is not built yet are serialized on the slot and only one of
//! them computes the table.
//!
//! The process-wide instance behind [`global`] backs the free conversion
//! functions at the crate root. [`init`] and [`teardown`] control its
//! lifetime explicitly; `global` creates it on first use.

use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::{debug, error, info};

use crate::error::TimeError;
use crate::table::YearBoundaryTable;
use crate::timestamp::{MAX_YEAR, MIN_YEAR, YEAR_SLOTS};

/// Append-only store of [`YearBoundaryTable`]s keyed by year offset from
/// [`MIN_YEAR`].
#[derive(Debug)]
pub struct YearBoundaryCache {
    slots: Box<[OnceLock<YearBoundaryTable>]>,
    builds: AtomicUsize,
}

impl YearBoundaryCache {
    /// Creates an empty cache with a slot for every supported year.
    pub fn new() -> Self {
        Self {
            slots: (0..YEAR_SLOTS).map(|_| OnceLock::new()).collect(),
            builds: AtomicUsize::new(0),
        }
    }

    /// Returns the table for `year_offset`, building it if absent.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::YearOutOfRange`] if `year_offset` has no slot.
    pub fn ensure(&self, year_offset: usize) -> Result<&YearBoundaryTable, TimeError> {
        let Some(slot) = self.slots.get(year_offset) else {
            error!(year_offset, "year offset outside the boundary cache");
            return Err(TimeError::YearOutOfRange { year_offset });
        };
        Ok(slot.get_or_init(|| {
            let year = MIN_YEAR + year_offset as i32;
            self.builds.fetch_add(1, Ordering::Relaxed);
            debug!(year, "building year boundary table");
            YearBoundaryTable::build(year)
        }))
    }

    /// Returns the table for a calendar year, building it if absent.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::FieldOutOfRange`] if `year` is outside
    /// `MIN_YEAR..=MAX_YEAR`.
    pub fn ensure_year(&self, year: i32) -> Result<&YearBoundaryTable, TimeError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            error!(year, "year outside the supported range");
            return Err(TimeError::FieldOutOfRange {
                field: "year",
                value: year,
                min: MIN_YEAR,
                max: MAX_YEAR,
            });
        }
        self.ensure((year - MIN_YEAR) as usize)
    }

    /// Returns the table for `year_offset` only if it has been built.
    pub fn get(&self, year_offset: usize) -> Option<&YearBoundaryTable> {
        self.slots.get(year_offset).and_then(OnceLock::get)
    }

    /// Builds every year in `years` ahead of time.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::FieldOutOfRange`] on the first year outside the
    /// supported range; years before it stay built.
    pub fn warm(&self, years: RangeInclusive<i32>) -> Result<(), TimeError> {
        for year in years {
            self.ensure_year(year)?;
        }
        Ok(())
    }

    /// Returns the number of slots holding a table.
    pub fn built_years(&self) -> usize {
        self.slots.iter().filter(|s| s.get().is_some()).count()
    }

    /// Returns how many tables this cache has computed.
    ///
    /// Each year is computed at most once, so this never exceeds
    /// [`YEAR_SLOTS`].
    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }
}

impl Default for YearBoundaryCache {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: RwLock<Option<Arc<YearBoundaryCache>>> = RwLock::new(None);

/// Creates the process-wide cache if it does not exist yet.
///
/// Calling this more than once is harmless; later calls return the
/// existing cache.
pub fn init() -> Arc<YearBoundaryCache> {
    let mut guard = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    let cache = guard.get_or_insert_with(|| {
        info!("initialising year boundary cache");
        Arc::new(YearBoundaryCache::new())
    });
    Arc::clone(cache)
}

/// Returns the process-wide cache, creating it on first use.
pub fn global() -> Arc<YearBoundaryCache> {
    let existing = GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map(Arc::clone);
    existing.unwrap_or_else(init)
}

/// Releases the process-wide cache and every table it built.
///
/// Handles already returned by [`global`] stay usable until dropped. The
/// next call to [`global`] starts from an empty cache.
pub fn teardown() {
    let released = GLOBAL
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .take();
    if let Some(cache) = released {
        info!(built = cache.built_years(), "releasing year boundary cache");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let cache = YearBoundaryCache::new();
        assert_eq!(cache.built_years(), 0);
        assert_eq!(cache.builds(), 0);
        assert!(cache.get(0).is_none());
    }

    #[test]
    fn ensure_builds_once() {
        let cache = YearBoundaryCache::new();
        let first = cache.ensure(30).unwrap().clone();
        let second = cache.ensure(30).unwrap();
        assert_eq!(&first, second);
        assert_eq!(cache.builds(), 1);
        assert_eq!(cache.built_years(), 1);
        assert_eq!(first.year(), 2000);
    }

    #[test]
    fn ensure_returns_same_allocation() {
        let cache = YearBoundaryCache::new();
        let a: *const YearBoundaryTable = cache.ensure(5).unwrap();
        let b: *const YearBoundaryTable = cache.ensure(5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn ensure_out_of_range() {
        let cache = YearBoundaryCache::new();
        assert_eq!(
            cache.ensure(YEAR_SLOTS).unwrap_err(),
            TimeError::YearOutOfRange { year_offset: 64 }
        );
        assert_eq!(cache.builds(), 0);
    }

    #[test]
    fn ensure_year_checks_range() {
        let cache = YearBoundaryCache::new();
        assert_eq!(cache.ensure_year(2033).unwrap().year(), 2033);
        assert!(matches!(
            cache.ensure_year(1969),
            Err(TimeError::FieldOutOfRange { field: "year", value: 1969, .. })
        ));
    }

    #[test]
    fn get_does_not_build() {
        let cache = YearBoundaryCache::new();
        assert!(cache.get(10).is_none());
        cache.ensure(10).unwrap();
        assert_eq!(cache.get(10).unwrap().year(), 1980);
        assert_eq!(cache.builds(), 1);
    }

    #[test]
    fn warm_range() {
        let cache = YearBoundaryCache::new();
        cache.warm(2000..=2009).unwrap();
        assert_eq!(cache.built_years(), 10);
        cache.warm(2005..=2010).unwrap();
        assert_eq!(cache.builds(), 11);
    }

    #[test]
    fn warm_stops_at_first_bad_year() {
        let cache = YearBoundaryCache::new();
        assert!(cache.warm(2032..=2035).is_err());
        assert_eq!(cache.built_years(), 2);
    }
}

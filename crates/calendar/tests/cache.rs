use std::sync::Arc;
use std::thread;

use utcepoch_calendar::{
    CalendarTimestamp, YEAR_SLOTS, YearBoundaryCache, cache_init, cache_teardown, decode, encode,
    global_cache, iso_utc_to_epoch,
};

#[test]
fn repeated_ensure_is_bit_identical() {
    let cache = YearBoundaryCache::new();
    let first = cache.ensure(42).unwrap().as_slice().to_vec();
    for _ in 0..10 {
        assert_eq!(cache.ensure(42).unwrap().as_slice(), first.as_slice());
    }
    assert_eq!(cache.builds(), 1);
}

#[test]
fn conversions_build_each_year_once() {
    let cache = YearBoundaryCache::new();
    for day in 1..=28 {
        let ts = CalendarTimestamp::new(2010, 1, day, 0, 0, 0);
        let epoch = encode(&cache, &ts).unwrap();
        decode(&cache, epoch).unwrap();
    }
    assert_eq!(cache.builds(), cache.built_years());
    assert!(cache.get(40).is_some());
}

#[test]
fn full_range_fills_every_slot() {
    let cache = YearBoundaryCache::new();
    cache.warm(1970..=2033).unwrap();
    assert_eq!(cache.built_years(), YEAR_SLOTS);
    assert_eq!(cache.builds(), YEAR_SLOTS);
}

#[test]
fn concurrent_first_use_builds_once() {
    let cache = Arc::new(YearBoundaryCache::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                let mut out = Vec::new();
                for year in 1990..2010 {
                    let ts = CalendarTimestamp::new(year, i % 12, 1, 0, 0, 0);
                    out.push(encode(&cache, &ts).unwrap());
                }
                out
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().len(), 20);
    }
    assert_eq!(cache.builds(), 20);
    assert_eq!(cache.built_years(), 20);
}

#[test]
fn global_lifecycle() {
    cache_init();
    cache_init();
    let before = global_cache();
    assert!(Arc::ptr_eq(&before, &global_cache()));

    iso_utc_to_epoch("2005-05-05T05:05:05Z").unwrap();
    assert!(before.get(35).is_some());

    cache_teardown();
    let after = global_cache();
    assert!(!Arc::ptr_eq(&before, &after));
    assert!(after.get(35).is_none());

    // The old handle is still readable after teardown.
    assert_eq!(before.get(35).unwrap().year(), 2005);
    cache_teardown();
}

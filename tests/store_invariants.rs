use chrono::NaiveDate;
use draw_stats::draw::Numbers;
use draw_stats::store::DrawStore;
use draw_stats::types::Region;
use draw_stats::StoreConfig;
use tempfile::tempdir;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn nums(s: &str) -> Numbers {
    Numbers::parse(s).unwrap()
}

#[test]
fn invariant_duplicate_insert_keeps_first_value() {
    let store = DrawStore::open_in_memory().unwrap();
    let region = Region::default();

    assert!(store.insert(&region, day("2024-01-01"), &nums("12,45,07")).unwrap());
    assert!(!store.insert(&region, day("2024-01-01"), &nums("99,98")).unwrap());

    let draws = store.query(&region, 10).unwrap();
    assert_eq!(draws.len(), 1, "duplicate (region, date) must not add a row");
    assert_eq!(draws[0].numbers.as_str(), "12,45,07", "insert must never overwrite");
}

#[test]
fn invariant_query_is_bounded_and_newest_first() {
    let store = DrawStore::open_in_memory().unwrap();
    let region = Region::default();

    for d in ["2024-01-05", "2024-01-01", "2024-01-09", "2024-01-03", "2024-01-07"] {
        store.insert(&region, day(d), &nums("10,20")).unwrap();
    }

    let draws = store.query(&region, 3).unwrap();
    assert_eq!(draws.len(), 3);
    let dates: Vec<NaiveDate> = draws.iter().map(|d| d.date).collect();
    assert_eq!(dates, vec![day("2024-01-09"), day("2024-01-07"), day("2024-01-05")]);
    assert!(draws.windows(2).all(|w| w[0].date > w[1].date));
}

#[test]
fn invariant_short_history_is_not_an_error() {
    let store = DrawStore::open_in_memory().unwrap();
    let region = Region::default();

    assert!(store.query(&region, 40).unwrap().is_empty());

    store.insert(&region, day("2024-02-01"), &nums("11")).unwrap();
    store.insert(&region, day("2024-02-02"), &nums("22")).unwrap();

    assert_eq!(store.query(&region, 40).unwrap().len(), 2);
    assert_eq!(store.query(&region, 0).unwrap().len(), 0);
}

#[test]
fn invariant_regions_do_not_mix() {
    let store = DrawStore::open_in_memory().unwrap();
    let south = Region::new("mn").unwrap();
    let north = Region::new("mb").unwrap();

    store.insert(&south, day("2024-01-01"), &nums("12")).unwrap();
    assert!(store.insert(&north, day("2024-01-01"), &nums("34")).unwrap());

    let south_draws = store.query(&south, 10).unwrap();
    assert_eq!(south_draws.len(), 1);
    assert_eq!(south_draws[0].numbers.as_str(), "12");
    assert_eq!(south_draws[0].region, south);
    assert_eq!(store.count(&north).unwrap(), 1);
}

#[test]
fn invariant_draws_survive_reopen() {
    let dir = tempdir().unwrap();
    let config = StoreConfig {
        path: dir.path().join("draws.db"),
        ..StoreConfig::default()
    };
    let region = Region::default();

    {
        let store = DrawStore::open(&config).unwrap();
        store.insert(&region, day("2024-03-01"), &nums("123456,78")).unwrap();
    }

    let reopened = DrawStore::open(&config).unwrap();
    let draws = reopened.query(&region, 5).unwrap();
    assert_eq!(draws.len(), 1);
    assert_eq!(draws[0].date, day("2024-03-01"));
    assert_eq!(draws[0].numbers.tokens().collect::<Vec<_>>(), vec!["123456", "78"]);
}

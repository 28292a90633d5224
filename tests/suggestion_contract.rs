use chrono::NaiveDate;
use draw_stats::analysis::{
    station_picks, suggest, Aggregator, FrequencyTable, LastTwoDigits, MAX_PAIRS, PRIMARY_SIZE,
};
use draw_stats::draw::{DrawRecord, Numbers};
use draw_stats::types::{DigitKey, Region};

fn draw(date: &str, numbers: &str) -> DrawRecord {
    DrawRecord::new(
        Region::default(),
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        Numbers::parse(numbers).unwrap(),
    )
}

fn keys(list: &[&str]) -> Vec<DigitKey> {
    list.iter().map(|s| s.parse().unwrap()).collect()
}

fn pair(a: &str, b: &str) -> (DigitKey, DigitKey) {
    (a.parse().unwrap(), b.parse().unwrap())
}

#[test]
fn primary_ranks_by_count_then_ascending_key() {
    let window = vec![draw("2024-01-01", "12,45,07"), draw("2024-01-02", "45,99")];
    let table = LastTwoDigits.aggregate(&window);

    let suggestion = suggest(&table);

    assert_eq!(
        suggestion.primary,
        keys(&["45", "07", "12", "99", "00", "01", "02", "03"])
    );
}

#[test]
fn pairs_are_the_first_index_ordered_combinations() {
    let window = vec![draw("2024-01-01", "12,45,07"), draw("2024-01-02", "45,99")];
    let suggestion = suggest(&LastTwoDigits.aggregate(&window));

    assert_eq!(
        suggestion.pairs,
        vec![
            pair("45", "07"),
            pair("45", "12"),
            pair("45", "99"),
            pair("45", "00"),
            pair("45", "01"),
            pair("45", "02"),
            pair("45", "03"),
            pair("07", "12"),
        ]
    );
    assert!(suggestion.pairs.len() <= MAX_PAIRS);
}

#[test]
fn triples_are_consecutive_chunks_with_remainder_dropped() {
    let window = vec![draw("2024-01-01", "12,45,07"), draw("2024-01-02", "45,99")];
    let suggestion = suggest(&LastTwoDigits.aggregate(&window));

    let primary = &suggestion.primary;
    assert_eq!(suggestion.triples.len(), 2);
    assert_eq!(suggestion.triples[0], [primary[0], primary[1], primary[2]]);
    assert_eq!(suggestion.triples[1], [primary[3], primary[4], primary[5]]);
    assert!(suggestion
        .triples
        .iter()
        .flatten()
        .all(|k| *k != primary[6] && *k != primary[7]));
}

#[test]
fn primary_is_full_even_without_observations() {
    let suggestion = suggest(&FrequencyTable::new());

    assert_eq!(suggestion.primary.len(), PRIMARY_SIZE);
    assert_eq!(
        suggestion.primary,
        keys(&["00", "01", "02", "03", "04", "05", "06", "07"])
    );
    assert_eq!(suggestion.pairs.len(), 8);
    assert_eq!(suggestion.triples.len(), 2);
}

#[test]
fn ties_do_not_depend_on_draw_order() {
    let forward = vec![draw("2024-01-01", "98,10,55"), draw("2024-01-02", "33,98")];
    let backward = vec![draw("2024-01-02", "98,33"), draw("2024-01-01", "55,10,98")];

    let a = suggest(&LastTwoDigits.aggregate(&forward));
    let b = suggest(&LastTwoDigits.aggregate(&backward));

    assert_eq!(a, b);
    assert_eq!(&a.primary[..4], keys(&["98", "10", "33", "55"]).as_slice());
}

#[test]
fn station_picks_deal_primary_by_stride() {
    let primary = keys(&["45", "07", "12", "99", "00", "01", "02", "03"]);
    let stations: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();

    let picks = station_picks(&primary, &stations);

    assert_eq!(picks.len(), 3);
    assert_eq!(picks[0].station, "A");
    assert_eq!(picks[0].numbers, keys(&["45", "99", "02"]));
    assert_eq!(picks[1].numbers, keys(&["07", "00", "03"]));
    assert_eq!(picks[2].numbers, keys(&["12", "01"]));
    assert!(station_picks(&primary, &[]).is_empty());
}

use super::*;
use proptest::prelude::*;

enum A {}
enum B {}
enum C {}
enum D {}

impl Unit for A {
    const NAME: &'static str = "a";
}
impl Unit for B {
    const NAME: &'static str = "b";
}
impl Unit for C {
    const NAME: &'static str = "c";
}
impl Unit for D {
    const NAME: &'static str = "d";
}

fn map(destination: i64, source: i64, len: i64) -> RangeMap {
    RangeMap::new(destination, source, len).unwrap()
}

fn table<S, T>(entries: &[(i64, i64, i64)]) -> RangeMapTable<S, T> {
    entries.iter().map(|&(d, s, l)| map(d, s, l)).collect()
}

/// Tables with disjoint sources, laid out left to right then shuffled
fn arb_table<S: 'static, T: 'static>() -> impl Strategy<Value = RangeMapTable<S, T>> {
    (
        -20i64..20,
        prop::collection::vec((0i64..8, 1i64..12, -40i64..80), 0..6),
    )
        .prop_flat_map(|(origin, layout)| {
            let mut cursor = origin;
            let entries: Vec<RangeMap> = layout
                .into_iter()
                .map(|(gap, len, destination)| {
                    let source = cursor + gap;
                    cursor = source + len;
                    map(destination, source, len)
                })
                .collect();
            Just(entries).prop_shuffle()
        })
        .prop_map(RangeMapTable::new)
}

/// Tables whose sources may overlap, so entry order matters for lookup
fn arb_overlapping_table<S: 'static, T: 'static>() -> impl Strategy<Value = RangeMapTable<S, T>> {
    prop::collection::vec((-40i64..60, 1i64..20, -40i64..80), 0..6).prop_map(|layout| {
        layout
            .into_iter()
            .map(|(source, len, destination)| map(destination, source, len))
            .collect()
    })
}

#[test]
fn lookup_follows_matching_entry() {
    let seed_to_soil: RangeMapTable<A, B> = table(&[(50, 98, 2), (52, 50, 48)]);
    assert_eq!(seed_to_soil.lookup(79), 81);
    assert_eq!(seed_to_soil.lookup(98), 50);
    assert_eq!(seed_to_soil.lookup(99), 51);
    assert_eq!(seed_to_soil.lookup(10), 10);
    assert_eq!(seed_to_soil.lookup(100), 100);
}

#[test]
fn identity_table_maps_everything_to_itself() {
    let identity = RangeMapTable::<A, B>::identity();
    assert!(identity.is_empty());
    assert_eq!(identity.lookup(-7), -7);
    assert_eq!(identity.lookup(i64::MAX), i64::MAX);
}

#[test]
fn compose_chains_both_translations() {
    let ab: RangeMapTable<A, B> = table(&[(100, 0, 10)]);
    let bc: RangeMapTable<B, C> = table(&[(500, 100, 10)]);
    let ac = ab.then(&bc);
    assert_eq!(ac.lookup(5), 505);
    assert_eq!(ac.lookup(10), 10);
}

#[test]
fn compose_keeps_second_stage_for_uncovered_values() {
    // 105 is untouched by the first stage, so the second stage sees it as-is
    let ab: RangeMapTable<A, B> = table(&[(100, 0, 10)]);
    let bc: RangeMapTable<B, C> = table(&[(500, 100, 10)]);
    let ac = ab.then(&bc);
    assert_eq!(ac.lookup(105), 505);
    assert_eq!(ac.lookup(110), 110);
}

#[test]
fn compose_splits_partial_overlaps() {
    let ab: RangeMapTable<A, B> = table(&[(10, 0, 10)]);
    let bc: RangeMapTable<B, C> = table(&[(1000, 15, 10)]);
    let ac = ab.then(&bc);
    assert_eq!(ac.lookup(0), 10);
    assert_eq!(ac.lookup(4), 14);
    assert_eq!(ac.lookup(5), 1000);
    assert_eq!(ac.lookup(9), 1004);
    assert_eq!(ac.lookup(20), 1005);
    assert_eq!(ac.lookup(24), 1009);
    assert_eq!(ac.lookup(25), 25);
}

#[test]
fn image_splits_into_translated_and_untouched_pieces() {
    let ab: RangeMapTable<A, B> = table(&[(50, 98, 2), (52, 50, 48)]);
    let mut pieces = ab.image(Interval::from_bounds(40, 100).unwrap());
    pieces.sort();
    assert_eq!(
        pieces,
        vec![
            Interval::from_bounds(40, 50).unwrap(),
            Interval::from_bounds(50, 52).unwrap(),
            Interval::from_bounds(52, 100).unwrap(),
        ]
    );
}

#[test]
fn sort_by_destination_orders_entries() {
    let mut ab: RangeMapTable<A, B> = table(&[(52, 50, 48), (50, 98, 2)]);
    ab.sort_by_destination();
    let starts: Vec<i64> = ab.entries().iter().map(RangeMap::destination_start).collect();
    assert_eq!(starts, vec![50, 52]);
}

#[test]
fn earlier_entry_wins_on_overlap() {
    let ab: RangeMapTable<A, B> = table(&[(200, 0, 10), (100, 5, 10)]);
    assert_eq!(ab.lookup(7), 207);
    assert_eq!(ab.lookup(12), 107);
}

#[test]
fn without_shadowed_trims_later_entries() {
    let ab: RangeMapTable<A, B> = table(&[(200, 0, 10), (100, 5, 10)]);
    let visible = ab.without_shadowed();
    assert_eq!(visible, table(&[(200, 0, 10), (105, 10, 5)]));

    let hidden: RangeMapTable<A, B> = table(&[(200, 0, 10), (100, 2, 5)]);
    assert_eq!(hidden.without_shadowed(), table(&[(200, 0, 10)]));
}

#[test]
fn sorting_keeps_first_match_with_overlapping_sources() {
    let ab: RangeMapTable<A, B> = table(&[(200, 0, 10), (100, 5, 10)]);
    let mut sorted = ab.clone();
    sorted.sort_by_destination();
    assert_eq!(sorted.entries()[0].destination_start(), 105);
    for value in -2..20 {
        assert_eq!(sorted.lookup(value), ab.lookup(value), "value {value}");
    }
}

#[test]
fn display_matches_input_layout() {
    let ab: RangeMapTable<A, B> = table(&[(50, 98, 2), (52, 50, 48)]);
    assert_eq!(ab.to_string(), "a-to-b map:\n50 98 2\n52 50 48");
    assert_eq!(RangeMapTable::<C, D>::identity().to_string(), "c-to-d map:");
}

#[test]
fn range_map_rejects_non_positive_length() {
    assert!(RangeMap::new(0, 0, 0).is_none());
    assert!(RangeMap::new(0, 0, -3).is_none());
    assert!(RangeMap::new(i64::MAX, 0, 2).is_none());
}

proptest! {
    #[test]
    fn composed_lookup_matches_sequential_lookup(
        ab in arb_table::<A, B>(),
        bc in arb_table::<B, C>(),
        value in -60i64..180,
    ) {
        let ac = ab.then(&bc);
        prop_assert_eq!(ac.lookup(value), bc.lookup(ab.lookup(value)));
    }

    #[test]
    fn composition_is_associative(
        ab in arb_table::<A, B>(),
        bc in arb_table::<B, C>(),
        cd in arb_table::<C, D>(),
        value in -60i64..180,
    ) {
        let left = ab.then(&bc).then(&cd);
        let right = ab.then(&bc.then(&cd));
        prop_assert_eq!(left.lookup(value), right.lookup(value));
    }

    #[test]
    fn composed_sources_stay_disjoint(
        ab in arb_table::<A, B>(),
        bc in arb_table::<B, C>(),
    ) {
        let ac = ab.then(&bc);
        let mut sources: Vec<Interval> = ac.entries().iter().map(RangeMap::source).collect();
        sources.sort();
        for map in ac.entries() {
            prop_assert!(map.len() > 0);
        }
        for pair in sources.windows(2) {
            prop_assert!(pair[0].end() <= pair[1].start(), "{} overlaps {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn sorting_preserves_lookup(ab in arb_table::<A, B>(), value in -60i64..180) {
        let mut sorted = ab.clone();
        sorted.sort_by_destination();
        prop_assert_eq!(sorted.lookup(value), ab.lookup(value));
    }

    #[test]
    fn sorting_preserves_lookup_with_overlaps(
        ab in arb_overlapping_table::<A, B>(),
        value in -60i64..120,
    ) {
        let mut sorted = ab.clone();
        sorted.sort_by_destination();
        prop_assert_eq!(sorted.lookup(value), ab.lookup(value));
    }

    #[test]
    fn composition_respects_first_match(
        ab in arb_overlapping_table::<A, B>(),
        bc in arb_overlapping_table::<B, C>(),
        value in -60i64..120,
    ) {
        let ac = ab.then(&bc);
        prop_assert_eq!(ac.lookup(value), bc.lookup(ab.lookup(value)));
    }

    #[test]
    fn without_shadowed_leaves_disjoint_sources(ab in arb_overlapping_table::<A, B>()) {
        let visible = ab.without_shadowed();
        let mut sources: Vec<Interval> = visible.entries().iter().map(RangeMap::source).collect();
        sources.sort();
        for pair in sources.windows(2) {
            prop_assert!(pair[0].end() <= pair[1].start(), "{} overlaps {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn image_agrees_with_lookup(
        ab in arb_table::<A, B>(),
        start in -60i64..150,
        len in 1i64..40,
    ) {
        let interval = Interval::with_len(start, len).unwrap();
        let pieces = ab.image(interval);
        prop_assert_eq!(pieces.iter().map(Interval::len).sum::<i64>(), len);

        let mut expected: Vec<i64> = interval.values().map(|v| ab.lookup(v)).collect();
        let mut actual: Vec<i64> = pieces.iter().flat_map(Interval::values).collect();
        expected.sort_unstable();
        actual.sort_unstable();
        prop_assert_eq!(actual, expected);
    }
}

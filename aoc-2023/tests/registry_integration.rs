//! Registry built from the plugins this crate submits

use aoc_2023::my_solutions::year_2023::day_5;
use aoc_solver::{SolverError, SolverRegistryBuilder};

const EXAMPLE: &str = "seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

#[test]
fn test_day_5_registers_itself() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let info = registry.get_info(2023, 5).unwrap();
    assert_eq!(info.parts, 2);
    assert!(info.tags.contains(&"range-map"));

    let mut solver = registry.create_solver(2023, 5, EXAMPLE).unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "35");
    assert_eq!(solver.solve(2).unwrap().answer, "46");
}

#[test]
fn test_tag_filter_selects_day_5() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"parsing"))
        .unwrap()
        .build();
    assert!(registry.contains(2023, 5));

    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"no-such-tag"))
        .unwrap()
        .build();
    assert!(registry.is_empty());
}

#[test]
fn test_malformed_input_is_a_parse_error() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();
    let input = EXAMPLE.replace("52 50 48", "52 50");
    assert!(matches!(
        registry.create_solver(2023, 5, &input),
        Err(SolverError::Parse(_))
    ));
}

#[test]
fn test_flattened_table_is_public() {
    let almanac = day_5::Almanac::parse(EXAMPLE).unwrap();
    let flattened = almanac.flatten();
    let ranges = day_5::seed_ranges(almanac.seeds()).unwrap();
    assert_eq!(day_5::min_location(&flattened, &ranges), Some(46));
    assert_eq!(day_5::min_location_brute_force(&flattened, &ranges), Some(46));
}

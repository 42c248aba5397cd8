use genogrove_core::models::{Interval, Overlappable};
use genogrove_structure::{Grove, GroveConfig, Key};

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::*;

type Iv = Interval<u64>;

fn iv(start: u64, end: u64) -> Iv {
    Interval::new(start, end)
}

const CHROMS: [&str; 4] = ["chr1", "chr2", "chrX", "chr10"];

#[fixture]
fn random_grove() -> (Grove<Iv>, Vec<(&'static str, Iv)>) {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut grove = Grove::from_config(GroveConfig {
        order: 8,
        block_size: 64,
    })
    .unwrap();
    let mut inserted = Vec::new();

    for _ in 0..3_000 {
        let chr = CHROMS[rng.random_range(0..CHROMS.len())];
        let start = rng.random_range(0..100_000u64);
        let value = iv(start, start + rng.random_range(1..500));
        grove.insert(chr, value);
        inserted.push((chr, value));
    }
    (grove, inserted)
}

#[rstest]
fn test_scenario_two_chromosomes() {
    let mut grove: Grove<Iv> = Grove::with_order(100).unwrap();
    grove.insert("chr1", iv(100, 200));
    grove.insert("chr1", iv(150, 250));
    grove.insert("chr1", iv(300, 400));
    grove.insert("chr2", iv(100, 200));

    let query = iv(175, 225);

    let chr1: Vec<Iv> = grove.intersect_index(&query, "chr1").values().copied().collect();
    assert_eq!(chr1, vec![iv(100, 200), iv(150, 250)]);

    let chr2: Vec<Iv> = grove.intersect_index(&query, "chr2").values().copied().collect();
    assert_eq!(chr2, vec![iv(100, 200)]);

    assert_eq!(grove.intersect(&query).len(), 3);
    assert_eq!(grove.size(), 4);
    assert_eq!(grove.order(), 100);
}

#[rstest]
fn test_scenario_empty_grove() {
    let grove: Grove<Iv> = Grove::new();
    for chr in CHROMS {
        assert_eq!(grove.intersect_index(&iv(0, u64::MAX), chr).is_empty(), true);
    }
    assert_eq!(grove.intersect(&iv(0, u64::MAX)).is_empty(), true);
    assert_eq!(grove.size(), 0);
}

#[rstest]
fn test_scenario_sorted_matches_unordered() {
    let mut sorted: Grove<Iv> = Grove::new();
    let mut unordered: Grove<Iv> = Grove::new();

    for value in [iv(100, 200), iv(300, 400), iv(500, 600)] {
        sorted.insert_sorted("chr1", value);
    }
    for value in [iv(300, 400), iv(500, 600), iv(100, 200)] {
        unordered.insert("chr1", value);
    }

    let a: Vec<Iv> = sorted.tree("chr1").unwrap().iter().map(|(_, v)| *v).collect();
    let b: Vec<Iv> = unordered.tree("chr1").unwrap().iter().map(|(_, v)| *v).collect();
    assert_eq!(a, b);

    for query in [iv(0, 1000), iv(150, 350), iv(400, 500), iv(550, 551)] {
        let a: Vec<Iv> = sorted.intersect_index(&query, "chr1").values().copied().collect();
        let b: Vec<Iv> = unordered.intersect_index(&query, "chr1").values().copied().collect();
        assert_eq!(a, b);
    }
}

#[rstest]
fn test_size_counts_every_insert(random_grove: (Grove<Iv>, Vec<(&'static str, Iv)>)) {
    let (grove, inserted) = random_grove;
    assert_eq!(grove.size(), inserted.len());

    let per_index: usize = grove
        .indices()
        .map(|name| grove.tree(name).unwrap().len())
        .sum();
    assert_eq!(per_index, grove.size());
}

#[rstest]
fn test_index_query_is_exact(random_grove: (Grove<Iv>, Vec<(&'static str, Iv)>)) {
    let (grove, inserted) = random_grove;
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let start = rng.random_range(0..100_000u64);
        let query = iv(start, start + rng.random_range(0..2_000));

        for chr in CHROMS {
            let result = grove.intersect_index(&query, chr);
            let found: Vec<Iv> = result.values().copied().collect();

            let mut expected: Vec<Iv> = inserted
                .iter()
                .filter(|(c, v)| *c == chr && v.overlaps(&query))
                .map(|(_, v)| *v)
                .collect();
            expected.sort();

            assert_eq!(found, expected, "{chr} {query}");
        }
    }
}

#[rstest]
fn test_all_index_query_is_union(random_grove: (Grove<Iv>, Vec<(&'static str, Iv)>)) {
    let (grove, _) = random_grove;
    let query = iv(40_000, 41_000);

    let union: Vec<Key> = grove
        .indices()
        .flat_map(|name| grove.intersect_index(&query, name).into_keys())
        .collect();
    assert_eq!(grove.intersect(&query).keys(), union.as_slice());
}

#[rstest]
fn test_keys_are_stable_across_growth() {
    let mut grove: Grove<Iv> = Grove::with_order(4).unwrap();
    let first: Vec<(Key, Iv)> = (0..50u64)
        .map(|i| {
            let value = iv(i * 7, i * 7 + 3);
            (grove.insert("chr1", value), value)
        })
        .collect();

    for i in 0..5_000u64 {
        grove.insert(CHROMS[(i % 4) as usize], iv(i, i + 10));
    }

    for (key, value) in first {
        assert_eq!(grove.get(key), Some(&value));
        assert_eq!(grove.index_of(key), Some("chr1"));
    }
}

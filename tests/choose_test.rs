// Integration tests for single-combination sampling

use combo_template::{choose, parse, ExpandError};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod common;
use common::strings;

#[test]
fn test_choose_explicit_indices_match_enumeration() {
    let template = "{1,3} {A|B} {$1}";
    let all: Vec<String> = parse(template).unwrap().collect();
    let chooser = choose(template).unwrap();

    // enumeration index = i * 2 + j with the rightmost placeholder fastest
    for i in 0..3 {
        for j in 0..2 {
            let picked = chooser.pick(&[Some(i), Some(j)]).unwrap();
            assert_eq!(picked, all[i * 2 + j]);
        }
    }
}

#[test]
fn test_choose_is_deterministic_with_all_indices() {
    let chooser = choose("{a|b|c}-{10,20,5}").unwrap();
    let first = chooser.pick(&[Some(2), Some(1)]).unwrap();
    let second = chooser.pick(&[Some(2), Some(1)]).unwrap();
    assert_eq!(first, "c-15");
    assert_eq!(first, second);
}

#[test]
fn test_random_choice_is_member_of_enumeration() {
    let template = "You {see|hear|feel} it {1,4} times. {$0}!";
    let all: Vec<String> = parse(template).unwrap().collect();
    let chooser = choose(template).unwrap();

    for _ in 0..50 {
        let picked = chooser.sample().unwrap();
        assert!(all.contains(&picked), "{} not in enumeration", picked);
    }
}

#[test]
fn test_seeded_choice_is_reproducible() {
    let chooser = choose("{1,1000}:{a|b|c|d|e}").unwrap();
    let run = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..10)
            .map(|_| chooser.pick_with(&mut rng, &[]).unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(run(3), run(3));
}

#[test]
fn test_random_choice_covers_all_values() {
    let chooser = choose("{a|b|c}").unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let mut seen: Vec<String> = (0..200)
        .map(|_| chooser.pick_with(&mut rng, &[None]).unwrap())
        .collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen, strings(&["a", "b", "c"]));
}

#[test]
fn test_choose_without_placeholders() {
    let chooser = choose("static").unwrap();
    assert!(chooser.cardinalities().is_empty());
    assert_eq!(chooser.sample().unwrap(), "static");
}

#[test]
fn test_choose_unresolved_backref_is_literal() {
    let chooser = choose("{red|blue} not {$2}").unwrap();
    assert_eq!(chooser.pick(&[Some(1)]).unwrap(), "blue not {$2}");
}

#[test]
fn test_choose_selection_out_of_range() {
    let chooser = choose("{a|b}").unwrap();
    assert!(matches!(
        chooser.pick(&[Some(5)]),
        Err(ExpandError::SelectionOutOfRange { index: 5, .. })
    ));
}

#[test]
fn test_choose_invalid_step_fails_at_call_time() {
    assert!(matches!(
        choose("{1,5,-1}"),
        Err(ExpandError::InvalidRangeStep { .. })
    ));
}

//! 変換・入力判定の性質テスト

use proptest::prelude::*;
use proptest::sample::select;

use typebattle::roman_mapping::{keys, lookup};
use typebattle::{Chunk, ValidationResult, convert, is_convertible, validate};

fn all_keys() -> Vec<&'static str> {
    keys().collect()
}

fn chunk_of(kana: &'static str) -> Chunk {
    Chunk::new(kana, lookup(kana).unwrap().patterns)
}

proptest! {
    #[test]
    fn supported_readings_round_trip(units in prop::collection::vec(select(all_keys()), 0..20)) {
        let reading: String = units.concat();
        prop_assert!(is_convertible(&reading));

        let result = convert(&reading);
        let rebuilt: String = result.chunks.iter().map(|c| c.source.as_str()).collect();
        prop_assert_eq!(&rebuilt, &reading);
        prop_assert_eq!(result.chunks.len(), units.len());
    }

    #[test]
    fn conversion_is_pure(units in prop::collection::vec(select(all_keys()), 0..20)) {
        let reading: String = units.concat();
        prop_assert_eq!(convert(&reading), convert(&reading));
    }

    #[test]
    fn every_pattern_is_correct_and_its_prefixes_are_alive(kana in select(all_keys())) {
        let chunk = chunk_of(kana);
        for pattern in chunk.patterns {
            prop_assert_eq!(validate(pattern, &chunk), ValidationResult::Correct);
            for end in 1..pattern.len() {
                prop_assert_ne!(validate(&pattern[..end], &chunk), ValidationResult::Incorrect);
            }
        }
        prop_assert_eq!(validate("", &chunk), ValidationResult::Partial);
    }

    #[test]
    fn dead_ends_are_exactly_non_prefixes(kana in select(all_keys()), input in "[a-z]{1,7}") {
        let chunk = chunk_of(kana);
        let alive = chunk.patterns.iter().any(|p| p.starts_with(input.as_str()));
        let result = validate(&input, &chunk);
        prop_assert_eq!(result == ValidationResult::Incorrect, !alive);
    }
}

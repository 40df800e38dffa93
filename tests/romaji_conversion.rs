//! 変換と入力判定の結合テスト

use typebattle::roman_mapping::lookup;
use typebattle::{Chunk, RawSentence, ValidationResult, convert, is_convertible, is_valid_sentence, validate};

fn sources(reading: &str) -> Vec<String> {
    convert(reading).chunks.into_iter().map(|c| c.source).collect()
}

#[test]
fn test_aka() {
    let result = convert("あか");
    assert_eq!(result.romaji, "aka");
    assert_eq!(result.chunks.len(), 2);
    assert_eq!(result.chunks[0].source, "あ");
    assert_eq!(result.chunks[0].patterns, &["a"]);
    assert_eq!(result.chunks[1].source, "か");
    assert_eq!(result.chunks[1].patterns, &["ka"]);
}

#[test]
fn test_kyou() {
    let result = convert("きょう");
    assert_eq!(result.romaji, "kyou");
    assert_eq!(sources("きょう"), ["きょ", "う"]);
    for p in ["kyo", "kilyo", "kixyo"] {
        assert!(result.chunks[0].patterns.contains(&p));
    }
}

#[test]
fn test_gakkou() {
    let result = convert("がっこう");
    assert_eq!(result.romaji, "gakkou");
    assert_eq!(sources("がっこう"), ["が", "っこ", "う"]);
    assert!(result.chunks[1].patterns.contains(&"kko"));
    assert!(result.chunks[1].patterns.contains(&"ltuko"));
}

#[test]
fn test_shinbun() {
    assert_eq!(convert("しんぶん").romaji, "sinbun");
    assert_eq!(sources("しんぶん"), ["し", "ん", "ぶ", "ん"]);
}

#[test]
fn test_long_vowel_mark_breaks_round_trip() {
    assert!(!is_convertible("らーめん"));
}

#[test]
fn test_shi_validation() {
    let chunk = Chunk::new("し", &["si", "shi"]);
    assert_eq!(validate("si", &chunk), ValidationResult::Correct);
    assert_eq!(validate("sh", &chunk), ValidationResult::Partial);
    assert_eq!(validate("sa", &chunk), ValidationResult::Incorrect);
}

#[test]
fn test_dead_ends() {
    let chunk = Chunk::new("あ", &["a"]);
    assert_eq!(validate("x", &chunk), ValidationResult::Incorrect);
    assert_eq!(validate("ab", &chunk), ValidationResult::Incorrect);
}

#[test]
fn test_exact_match_beats_longer_pattern() {
    let chunk = Chunk::new("ん", lookup("ん").unwrap().patterns);
    assert_eq!(validate("n", &chunk), ValidationResult::Correct);
    assert_eq!(validate("nn", &chunk), ValidationResult::Correct);
}

#[test]
fn test_typing_a_whole_sentence_with_mixed_spellings() {
    // ち→chi, しゃ→sha, じょ→jo, っ→ltu 系など、別表記を混ぜても最後まで打てる
    let result = convert("ちゅうしゃじょうにいった");
    let typed = ["chu", "u", "sha", "jo", "u", "ni", "i", "xtsuta"];
    assert_eq!(result.chunks.len(), typed.len());
    for (chunk, word) in result.chunks.iter().zip(typed) {
        let mut input = String::new();
        for c in word.chars() {
            assert_ne!(validate(&input, chunk), ValidationResult::Incorrect);
            input.push(c);
        }
        assert_eq!(validate(&input, chunk), ValidationResult::Correct, "{word}");
    }
}

#[test]
fn test_sentence_acceptance() {
    assert!(is_valid_sentence(&RawSentence::new("今日はいい天気です", "きょうはいいてんきです")));
    assert!(!is_valid_sentence(&RawSentence::new("ラーメン", "らーめん")));
    assert!(!is_valid_sentence(&RawSentence::new("すごい！", "すごい")));
}

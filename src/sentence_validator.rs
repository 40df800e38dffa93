// ============================================
// src/sentence_validator.rs
// 出題に使えるお題かどうかの判定
// ============================================

use crate::converter::convert;
use crate::sentence::RawSentence;

/// 表示文に使ってよい文字（ひらがな・カタカナ・CJK統合漢字）
fn is_allowed_display_char(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}' | '\u{4E00}'..='\u{9FFF}')
}

/// 読みをすべてチャンクに変換できるか
///
/// 変換で読み飛ばされた文字があれば、チャンクの元文字を連結しても元に戻らない。
pub fn is_convertible(reading: &str) -> bool {
    let converted: String = convert(reading)
        .chunks
        .iter()
        .map(|c| c.source.as_str())
        .collect();
    converted == reading
}

/// お題として採用できるか
pub fn is_valid_sentence(sentence: &RawSentence) -> bool {
    if sentence.japanese.is_empty() || sentence.reading.is_empty() {
        return false;
    }

    if !sentence.japanese.chars().all(is_allowed_display_char) {
        return false;
    }

    is_convertible(&sentence.reading)
}

/// 有効なお題だけを残す（順序は保つ）
pub fn filter_valid_sentences(sentences: Vec<RawSentence>) -> Vec<RawSentence> {
    let before = sentences.len();
    let valid: Vec<RawSentence> = sentences.into_iter().filter(is_valid_sentence).collect();
    if valid.len() < before {
        log::info!("無効なお題を {} 件除外しました", before - valid.len());
    }
    valid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(japanese: &str, reading: &str) -> RawSentence {
        RawSentence::new(japanese, reading)
    }

    #[test]
    fn test_accepts_valid_sentence() {
        assert!(is_valid_sentence(&raw("今日はいい天気です", "きょうはいいてんきです")));
        assert!(is_valid_sentence(&raw("タイピングは楽しい", "たいぴんぐはたのしい")));
    }

    #[test]
    fn test_rejects_empty_fields() {
        assert!(!is_valid_sentence(&raw("", "あ")));
        assert!(!is_valid_sentence(&raw("あ", "")));
    }

    #[test]
    fn test_rejects_symbols_in_display_text() {
        assert!(!is_valid_sentence(&raw("今日は、いい天気です。", "きょうはいいてんきです")));
        assert!(!is_valid_sentence(&raw("「こんにちは」", "こんにちは")));
        assert!(!is_valid_sentence(&raw("すごい！", "すごい")));
        assert!(!is_valid_sentence(&raw("3月の空", "さんがつのそら")));
        assert!(!is_valid_sentence(&raw("３月の空", "さんがつのそら")));
        assert!(!is_valid_sentence(&raw("Rustは速い", "らすとははやい")));
    }

    #[test]
    fn test_rejects_unconvertible_reading() {
        assert!(!is_valid_sentence(&raw("テスト", "てすとゐ")));
        assert!(!is_valid_sentence(&raw("ラーメン", "らーめん")));
        assert!(!is_valid_sentence(&raw("テスト", "て すと")));
        assert!(!is_valid_sentence(&raw("テスト", "て\u{3000}すと")));
        assert!(!is_valid_sentence(&raw("テスト", "テスト")));
    }

    #[test]
    fn test_is_convertible() {
        assert!(is_convertible("がっこう"));
        assert!(is_convertible(""));
        assert!(!is_convertible("らーめん"));
        assert!(!is_convertible("まっちゃ"));
    }

    #[test]
    fn test_filter_keeps_order() {
        let sentences = vec![
            raw("今日はいい天気です", "きょうはいいてんきです"),
            raw("すごい！", "すごい"),
            raw("テスト", "てすと"),
            raw("ラーメン", "らーめん"),
        ];
        let result = filter_valid_sentences(sentences);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].japanese, "今日はいい天気です");
        assert_eq!(result[1].japanese, "テスト");
    }

    #[test]
    fn test_filter_all_invalid() {
        let sentences = vec![raw("", "あ"), raw("テスト！", "てすと")];
        assert!(filter_valid_sentences(sentences).is_empty());
    }
}

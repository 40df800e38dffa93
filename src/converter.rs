// ============================================
// src/converter.rs
// ひらがなの読みをチャンク列に分解する
// ============================================

use crate::roman_mapping::lookup;

/// 入力判定の単位（例：「し」「きょ」「っか」）
///
/// 変換時に1度だけ作られ、以後変更されない。
/// プレイヤーの進捗はチャンクではなくインデックスで管理する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// 元のひらがな（1〜2文字）
    pub source: String,
    /// 許容される入力パターン（例: ["si", "shi"]）
    pub patterns: &'static [&'static str],
}

impl Chunk {
    pub fn new(source: impl Into<String>, patterns: &'static [&'static str]) -> Self {
        Self {
            source: source.into(),
            patterns,
        }
    }

    /// 表示用の優先パターン
    pub fn preferred(&self) -> &'static str {
        self.patterns[0]
    }

    /// 入力中の文字列に合うパターン（なければ優先パターン）
    pub fn pattern_for(&self, input: &str) -> &'static str {
        self.patterns
            .iter()
            .copied()
            .find(|p| p.starts_with(input))
            .unwrap_or_else(|| self.preferred())
    }
}

/// 変換結果
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversionResult {
    /// 表示用ローマ字
    pub romaji: String,
    /// 入力判定用チャンク
    pub chunks: Vec<Chunk>,
}

/// ひらがな文字列を `ConversionResult` に変換する
///
/// 2文字（拗音・促音）を先に試し、なければ1文字で引く。
/// 辞書にない文字は黙って読み飛ばす。読み飛ばしがあったかどうかは
/// [`crate::sentence_validator::is_convertible`] で検出する。
pub fn convert(reading: &str) -> ConversionResult {
    let chars: Vec<char> = reading.chars().collect();
    let mut result = ConversionResult::default();
    let mut idx = 0;

    while idx < chars.len() {
        // 2文字チェック
        if idx + 1 < chars.len() {
            let bi: String = chars[idx..=idx + 1].iter().collect();
            if let Some(entry) = lookup(&bi) {
                result.romaji.push_str(entry.display);
                result.chunks.push(Chunk::new(bi, entry.patterns));
                idx += 2;
                continue;
            }
        }

        // 1文字チェック
        let uni = chars[idx].to_string();
        if let Some(entry) = lookup(&uni) {
            result.romaji.push_str(entry.display);
            result.chunks.push(Chunk::new(uni, entry.patterns));
        } else {
            log::debug!("辞書にない文字をスキップ: {:?}", chars[idx]);
        }
        idx += 1;
    }
    result
}

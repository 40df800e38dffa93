// ============================================
// src/sentence.rs
// お題（出題文）のデータ構造
// ============================================

use serde::{Deserialize, Serialize};

use crate::converter::{Chunk, convert};

/// 変換前のお題。ローカルデータや API から受け取る形
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSentence {
    /// 表示用 (漢字混じり)
    pub japanese: String,
    /// タイピング用 (ひらがな)
    pub reading: String,
}

impl RawSentence {
    pub fn new(japanese: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            japanese: japanese.into(),
            reading: reading.into(),
        }
    }
}

/// プレイ可能なお題。作成後は変更しない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub japanese: String,
    pub reading: String,
    /// 表示用ローマ字（例: "kyouhatenki..."）
    pub romaji: String,
    pub chunks: Vec<Chunk>,
}

impl Sentence {
    /// 読みをチャンク列に変換してお題を作る
    pub fn from_raw(raw: RawSentence) -> Self {
        let converted = convert(&raw.reading);
        Self {
            japanese: raw.japanese,
            reading: raw.reading,
            romaji: converted.romaji,
            chunks: converted.chunks,
        }
    }
}

impl From<RawSentence> for Sentence {
    fn from(raw: RawSentence) -> Self {
        Self::from_raw(raw)
    }
}

//! 2人対戦のローマ字タイピングゲーム
//!
//! ひらがなの読みを入力判定用のチャンク列に変換し、
//! 1キーごとに「正解・途中・不正解」を判定する。

pub mod converter;
pub mod error;
pub mod game;
pub mod input;
pub mod input_validator;
pub mod player;
pub mod questions;
pub mod roman_mapping;
pub mod save_data;
pub mod sentence;
pub mod sentence_validator;
pub mod settings;
pub mod source;
pub mod stats;

pub use converter::{Chunk, ConversionResult, convert};
pub use input_validator::{ValidationResult, validate};
pub use sentence::{RawSentence, Sentence};
pub use sentence_validator::{filter_valid_sentences, is_convertible, is_valid_sentence};

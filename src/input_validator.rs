// ============================================
// src/input_validator.rs
// 1チャンク分の入力判定
// ============================================

use crate::converter::Chunk;

/// 入力判定の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    /// いずれかのパターンと完全一致
    Correct,
    /// いずれかのパターンの途中まで一致（未入力を含む）
    Partial,
    /// どのパターンにも続かない。呼び出し側は入力バッファを空に戻すこと
    Incorrect,
}

/// これまでの入力 `input` がチャンクに対してどの状態かを判定する
///
/// 完全一致は前方一致より優先する（「ん」に対する "n" は Correct）。
pub fn validate(input: &str, chunk: &Chunk) -> ValidationResult {
    if input.is_empty() {
        return ValidationResult::Partial;
    }

    if chunk.patterns.iter().any(|p| *p == input) {
        return ValidationResult::Correct;
    }

    if chunk.patterns.iter().any(|p| p.starts_with(input)) {
        return ValidationResult::Partial;
    }

    ValidationResult::Incorrect
}

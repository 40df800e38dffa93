// ============================================
// src/player.rs
// プレイヤーごとの進行状況
// ============================================

/// プレイヤー番号（小文字入力 → 1P、大文字入力 → 2P）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub score: u32,
    /// 今何問目か
    pub sentence_index: usize,
    /// 現在タイプ中のチャンク
    pub chunk_index: usize,
    /// 現在のチャンクに対する入力（"sh" など）
    pub input: String,
    /// 打ち終わったチャンクで実際に使ったパターン（表示用）
    pub completed_patterns: Vec<String>,
    pub correct_types: u32,
    pub miss_types: u32,
    /// 現在のお題でミスしたか（ノーミスボーナス判定用）
    pub missed_current_sentence: bool,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            score: 0,
            sentence_index: 0,
            chunk_index: 0,
            input: String::new(),
            completed_patterns: Vec::new(),
            correct_types: 0,
            miss_types: 0,
            missed_current_sentence: false,
        }
    }

    pub fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    /// 次のチャンクへ進む
    pub fn next_chunk(&mut self, matched_pattern: impl Into<String>) {
        self.chunk_index += 1;
        self.input.clear();
        self.completed_patterns.push(matched_pattern.into());
    }

    /// 次のお題へ進む
    pub fn next_sentence(&mut self) {
        self.sentence_index += 1;
        self.chunk_index = 0;
        self.input.clear();
        self.completed_patterns.clear();
        self.missed_current_sentence = false;
    }

    pub fn reset_input(&mut self) {
        self.input.clear();
    }

    pub fn record_correct(&mut self) {
        self.correct_types += 1;
    }

    pub fn record_miss(&mut self) {
        self.miss_types += 1;
        self.missed_current_sentence = true;
    }
}

// ============================================
// src/game.rs
// 対戦の進行（状態遷移・タイマー・勝敗）
// ============================================

use crate::input_validator::ValidationResult;
use crate::player::{Player, PlayerId};
use crate::sentence::Sentence;

/// 選択できる制限時間（秒）
pub const DURATION_OPTIONS: [u32; 3] = [10, 30, 60];
pub const DEFAULT_DURATION: u32 = 30;
/// カウントダウンの秒数
pub const COUNTDOWN_SECS: u32 = 3;
/// お題をノーミスで打ち切ったときのボーナス
pub const NO_MISS_BONUS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Idle,
    Countdown,
    Playing,
    Finished,
}

/// 直前のキー入力の判定（ミス時の赤フラッシュなどに使う）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastValidation {
    pub player: PlayerId,
    pub result: ValidationResult,
}

#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    pub player1: Player,
    pub player2: Player,
    pub duration: u32,
    pub remaining: u32,
    pub sentences: Vec<Sentence>,
    pub last_validation: Option<LastValidation>,
}

impl Game {
    pub fn new(sentences: Vec<Sentence>, duration: u32) -> Self {
        Self {
            state: GameState::Idle,
            player1: Player::new(PlayerId::One),
            player2: Player::new(PlayerId::Two),
            duration,
            remaining: duration,
            sentences,
            last_validation: None,
        }
    }

    pub fn start_countdown(&mut self) {
        self.state = GameState::Countdown;
    }

    pub fn start_playing(&mut self) {
        self.state = GameState::Playing;
    }

    /// 1秒進める。残り0秒で終了
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.state = GameState::Finished;
        }
    }

    pub fn finish(&mut self) {
        self.state = GameState::Finished;
    }

    /// 同じお題で最初からやり直す
    pub fn reset(&mut self) {
        let sentences = std::mem::take(&mut self.sentences);
        *self = Self::new(sentences, self.duration);
    }

    /// 経過秒数
    pub fn elapsed(&self) -> u32 {
        self.duration - self.remaining.min(self.duration)
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        match id {
            PlayerId::One => &self.player1,
            PlayerId::Two => &self.player2,
        }
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        match id {
            PlayerId::One => &mut self.player1,
            PlayerId::Two => &mut self.player2,
        }
    }

    /// スコアが高い方。同点なら None
    pub fn winner(&self) -> Option<PlayerId> {
        use std::cmp::Ordering;
        match self.player1.score.cmp(&self.player2.score) {
            Ordering::Greater => Some(PlayerId::One),
            Ordering::Less => Some(PlayerId::Two),
            Ordering::Equal => None,
        }
    }
}

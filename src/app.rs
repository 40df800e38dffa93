// ============================================
// src/app.rs
// アプリ全体の状態と入力処理
// ============================================

use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::Utc;
use rand::seq::SliceRandom;

use typebattle::game::{COUNTDOWN_SECS, DURATION_OPTIONS, Game, GameState};
use typebattle::input::{process_input, route_key};
use typebattle::input_validator::ValidationResult;
use typebattle::player::PlayerId;
use typebattle::save_data::{History, MatchRecord};
use typebattle::sentence::Sentence;

/// ミスしたときに赤く光らせる時間
const FLASH_DURATION: Duration = Duration::from_millis(80);
const SECOND: Duration = Duration::from_secs(1);

/// キー操作の結果、アプリ側で必要な動作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
}

/// キー入力を画面に依存しない形にしたもの
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Left,
    Right,
}

pub struct App {
    pub game: Game,
    /// カウントダウンの残り
    pub countdown: u32,
    /// 最後に1秒進めた時刻
    last_tick: Instant,
    /// プレイヤーごとのミス表示の終了時刻
    flash_until: [Option<Instant>; 2],
    /// 対戦記録
    pub history: History,
    /// 対戦記録の保存先（None なら保存しない）
    history_dir: Option<PathBuf>,
    /// 今回の対戦を記録済みか
    recorded: bool,
}

impl App {
    pub fn new(
        sentences: Vec<Sentence>,
        duration: u32,
        history: History,
        history_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            game: Game::new(sentences, duration),
            countdown: COUNTDOWN_SECS,
            last_tick: Instant::now(),
            flash_until: [None, None],
            history,
            history_dir,
            recorded: false,
        }
    }

    /// キー入力の処理
    pub fn handle_key(&mut self, key: Key, now: Instant) -> Action {
        match (self.game.state, key) {
            (_, Key::Esc) => return Action::Quit,

            // タイトル画面
            (GameState::Idle, Key::Enter) => self.start(now),
            (GameState::Idle, Key::Left) => self.change_duration(-1),
            (GameState::Idle, Key::Right) => self.change_duration(1),

            // 対戦中
            (GameState::Playing, Key::Char(c)) => {
                let result = process_input(&mut self.game, c);
                if result == ValidationResult::Incorrect {
                    if let Some((id, _)) = route_key(c) {
                        self.flash_until[slot(id)] = Some(now + FLASH_DURATION);
                    }
                }
                self.record_if_finished();
            }

            // リザルト画面
            (GameState::Finished, Key::Enter) => self.rematch(now),
            (GameState::Finished, Key::Char('t' | 'T')) => self.to_title(),

            _ => {}
        }
        Action::None
    }

    /// 時間経過の処理（カウントダウン・制限時間）
    pub fn on_tick(&mut self, now: Instant) {
        while now.duration_since(self.last_tick) >= SECOND {
            self.last_tick += SECOND;
            match self.game.state {
                GameState::Countdown => {
                    self.countdown = self.countdown.saturating_sub(1);
                    if self.countdown == 0 {
                        self.game.start_playing();
                        log::info!("対戦開始 ({} 秒)", self.game.duration);
                    }
                }
                GameState::Playing => self.game.tick(),
                GameState::Idle | GameState::Finished => {
                    self.last_tick = now;
                    break;
                }
            }
        }
        self.record_if_finished();
    }

    /// ミス表示中か
    pub fn is_flashing(&self, player: PlayerId, now: Instant) -> bool {
        self.flash_until[slot(player)].is_some_and(|until| now < until)
    }

    /// 直前の対戦記録
    pub fn last_record(&self) -> Option<&MatchRecord> {
        if self.recorded {
            self.history.records.last()
        } else {
            None
        }
    }

    fn start(&mut self, now: Instant) {
        self.game.reset();
        self.game.start_countdown();
        self.countdown = COUNTDOWN_SECS;
        self.last_tick = now;
        self.flash_until = [None, None];
        self.recorded = false;
    }

    /// お題を混ぜ直してもう一度対戦
    fn rematch(&mut self, now: Instant) {
        self.game.sentences.shuffle(&mut rand::rng());
        self.start(now);
    }

    fn to_title(&mut self) {
        self.game.reset();
        self.recorded = false;
    }

    fn change_duration(&mut self, step: isize) {
        let current = DURATION_OPTIONS
            .iter()
            .position(|d| *d == self.game.duration)
            .unwrap_or(0);
        let next = current
            .saturating_add_signed(step)
            .min(DURATION_OPTIONS.len() - 1);
        self.game.duration = DURATION_OPTIONS[next];
        self.game.remaining = self.game.duration;
    }

    /// 終了した対戦を1度だけ記録する
    fn record_if_finished(&mut self) {
        if self.game.state != GameState::Finished || self.recorded {
            return;
        }
        self.recorded = true;
        self.history.push(MatchRecord::from_game(&self.game, Utc::now()));
        if let Some(dir) = &self.history_dir {
            if let Err(e) = self.history.save_to(dir) {
                log::warn!("対戦記録を保存できませんでした: {e}");
            }
        }
    }
}

fn slot(player: PlayerId) -> usize {
    match player {
        PlayerId::One => 0,
        PlayerId::Two => 1,
    }
}

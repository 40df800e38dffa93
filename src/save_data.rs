// ============================================
// src/save_data.rs
// 対戦記録の構造と読み書きロジック
// ============================================

use bincode::config::standard;
use bincode::{Decode, Encode};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::game::Game;
use crate::player::{Player, PlayerId};
use crate::settings::project_dirs;
use crate::stats::{accuracy, kpm};

const HISTORY_FILE_BIN: &str = "history.bin";
const HISTORY_FILE_JSON: &str = "history.json"; // デバッグ用
/// 保存しておく対戦数の上限
const MAX_RECORDS: usize = 100;

/// 1プレイヤー分の結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerResult {
    pub score: u32,
    pub correct_types: u32,
    pub miss_types: u32,
    pub accuracy: f64,
    pub kpm: u32,
}

impl PlayerResult {
    pub fn from_player(player: &Player, elapsed_secs: u32) -> Self {
        Self {
            score: player.score,
            correct_types: player.correct_types,
            miss_types: player.miss_types,
            accuracy: accuracy(player),
            kpm: kpm(player, elapsed_secs),
        }
    }
}

/// 1回ごとの対戦の記録
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub timestamp: DateTime<Utc>,
    pub duration: u32,
    pub player1: PlayerResult,
    pub player2: PlayerResult,
    /// 勝者のプレイヤー番号。引き分けは None
    pub winner: Option<u8>,
}

impl MatchRecord {
    /// 終了した対戦から記録を作る
    pub fn from_game(game: &Game, timestamp: DateTime<Utc>) -> Self {
        let elapsed = game.elapsed();
        Self {
            timestamp,
            duration: game.duration,
            player1: PlayerResult::from_player(game.player(PlayerId::One), elapsed),
            player2: PlayerResult::from_player(game.player(PlayerId::Two), elapsed),
            winner: game.winner().map(PlayerId::number),
        }
    }
}

/// bincode用の内部表現（DateTimeをi64に変換）
#[derive(Encode, Decode)]
struct PlayerResultBin {
    score: u32,
    correct_types: u32,
    miss_types: u32,
    accuracy: f64,
    kpm: u32,
}

#[derive(Encode, Decode)]
struct MatchRecordBin {
    timestamp_secs: i64,
    duration: u32,
    player1: PlayerResultBin,
    player2: PlayerResultBin,
    winner: Option<u8>,
}

impl From<&PlayerResult> for PlayerResultBin {
    fn from(r: &PlayerResult) -> Self {
        Self {
            score: r.score,
            correct_types: r.correct_types,
            miss_types: r.miss_types,
            accuracy: r.accuracy,
            kpm: r.kpm,
        }
    }
}

impl From<PlayerResultBin> for PlayerResult {
    fn from(bin: PlayerResultBin) -> Self {
        Self {
            score: bin.score,
            correct_types: bin.correct_types,
            miss_types: bin.miss_types,
            accuracy: bin.accuracy,
            kpm: bin.kpm,
        }
    }
}

impl From<&MatchRecord> for MatchRecordBin {
    fn from(record: &MatchRecord) -> Self {
        Self {
            timestamp_secs: record.timestamp.timestamp(),
            duration: record.duration,
            player1: PlayerResultBin::from(&record.player1),
            player2: PlayerResultBin::from(&record.player2),
            winner: record.winner,
        }
    }
}

impl From<MatchRecordBin> for MatchRecord {
    fn from(bin: MatchRecordBin) -> Self {
        Self {
            timestamp: Utc
                .timestamp_opt(bin.timestamp_secs, 0)
                .single()
                .unwrap_or_default(),
            duration: bin.duration,
            player1: bin.player1.into(),
            player2: bin.player2.into(),
            winner: bin.winner,
        }
    }
}

/// 対戦記録の一覧
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    pub records: Vec<MatchRecord>,
}

impl History {
    // MARK:保存先ディレクトリ
    pub fn default_dir() -> Result<PathBuf, StorageError> {
        let dirs = project_dirs().ok_or(StorageError::NoDataDir)?;
        Ok(dirs.data_dir().to_path_buf())
    }

    /// 記録を追加する（古いものから捨てる）
    pub fn push(&mut self, record: MatchRecord) {
        self.records.push(record);
        if self.records.len() > MAX_RECORDS {
            let overflow = self.records.len() - MAX_RECORDS;
            self.records.drain(..overflow);
        }
    }

    /// 新しい順に最大 n 件
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &MatchRecord> {
        self.records.iter().rev().take(n)
    }

    /// MARK:データをファイルに保存する (バイナリ + JSON)
    pub fn save_to(&self, dir: &Path) -> Result<(), StorageError> {
        fs::create_dir_all(dir)?;

        // --- 1. バイナリ形式で保存 (本番用) ---
        let bin: Vec<MatchRecordBin> = self.records.iter().map(MatchRecordBin::from).collect();
        let encoded = bincode::encode_to_vec(&bin, standard())?;
        fs::write(dir.join(HISTORY_FILE_BIN), encoded)?;

        // --- 2. JSON形式で保存 (デバッグ用) ---
        fs::write(dir.join(HISTORY_FILE_JSON), serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// MARK:ファイルからデータを読み込む (バイナリ優先、JSONフォールバック)
    pub fn load_from(dir: &Path) -> Self {
        match Self::load_bin(&dir.join(HISTORY_FILE_BIN)) {
            Ok(history) => return history,
            Err(e) => log::debug!("バイナリの対戦記録を読めません: {e}"),
        }

        match Self::load_json(&dir.join(HISTORY_FILE_JSON)) {
            Ok(history) => return history,
            Err(e) => log::debug!("JSON の対戦記録を読めません: {e}"),
        }

        // どちらも失敗した場合は空
        Self::default()
    }

    fn load_bin(path: &Path) -> Result<Self, StorageError> {
        let buffer = fs::read(path)?;
        let (bin, _): (Vec<MatchRecordBin>, usize) =
            bincode::decode_from_slice(&buffer, standard())?;
        Ok(Self {
            records: bin.into_iter().map(MatchRecord::from).collect(),
        })
    }

    fn load_json(path: &Path) -> Result<Self, StorageError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn load() -> Self {
        match Self::default_dir() {
            Ok(dir) => Self::load_from(&dir),
            Err(_) => Self::default(),
        }
    }
}

// ============================================
// src/settings.rs
// 設定ファイルの読み書き (JSON)
// ============================================

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::game::{DEFAULT_DURATION, DURATION_OPTIONS};
use crate::source::SentenceSource;

const SETTINGS_FILE: &str = "settings.json";

/// アプリのデータ置き場
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("jp", "typebattle", "typebattle")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// 制限時間（秒）
    #[serde(default = "default_duration")]
    pub duration: u32,
    /// お題の取得元
    #[serde(default)]
    pub source: SentenceSource,
    /// API 用のキー
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_duration() -> u32 {
    DEFAULT_DURATION
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            duration: default_duration(),
            source: SentenceSource::default(),
            api_key: None,
        }
    }
}

impl Settings {
    /// 設定ファイルのパス
    pub fn path() -> Result<PathBuf, StorageError> {
        let dirs = project_dirs().ok_or(StorageError::NoDataDir)?;
        Ok(dirs.config_dir().join(SETTINGS_FILE))
    }

    /// 選べない制限時間は既定値に戻す
    pub fn normalized(mut self) -> Self {
        if !DURATION_OPTIONS.contains(&self.duration) {
            log::warn!("制限時間 {} 秒は選べないため {} 秒にします", self.duration, DEFAULT_DURATION);
            self.duration = DEFAULT_DURATION;
        }
        self
    }

    /// 設定を読む（ファイルがない・壊れている場合は既定値）
    pub fn load() -> Self {
        match Self::path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                log::warn!("{e}");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let settings = match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                log::warn!("設定ファイルを読めません ({}): {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        };
        settings.normalized()
    }

    pub fn save(&self) -> Result<(), StorageError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        log::info!("設定を保存しました: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.duration, 30);
        assert_eq!(settings.source, SentenceSource::Local);
        assert!(settings.api_key.is_none());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"source": "api"}"#).unwrap();
        assert_eq!(settings.duration, 30);
        assert_eq!(settings.source, SentenceSource::Api);
    }

    #[test]
    fn test_invalid_duration_is_normalized() {
        let settings = Settings {
            duration: 45,
            ..Settings::default()
        };
        assert_eq!(settings.normalized().duration, 30);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILE);
        let settings = Settings {
            duration: 60,
            source: SentenceSource::Api,
            api_key: Some("sk-test".to_string()),
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn test_broken_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "{ broken").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Settings::load_from(&dir.path().join("none.json")), Settings::default());
    }
}

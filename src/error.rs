// ============================================
// src/error.rs
// エラー型
// ============================================

/// お題の取得・準備に関するエラー
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("APIキーが無効です。確認してください。")]
    InvalidApiKey,

    #[error("APIのレート制限に達しました。しばらく待ってからお試しください。")]
    RateLimited,

    #[error("出題文の取得に失敗しました。({0})")]
    Http(u16),

    #[error("APIに接続できませんでした: {0}")]
    Transport(String),

    #[error("APIのレスポンスが不正です。再度お試しください。")]
    InvalidResponse,

    #[error("有効な出題文がありません。")]
    NoValidSentences,

    #[error("APIキーが設定されていません。`typebattle config` で設定してください。")]
    MissingApiKey,
}

/// 設定・対戦記録の読み書きに関するエラー
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("ファイルの読み書きに失敗しました: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON の変換に失敗しました: {0}")]
    Json(#[from] serde_json::Error),

    #[error("バイナリへの変換に失敗しました: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("バイナリの読み込みに失敗しました: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("データ保存用ディレクトリが見つかりません")]
    NoDataDir,
}

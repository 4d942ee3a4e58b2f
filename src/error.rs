use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToursError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("データファイルが見つかりません: {0}")]
    DataFileNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] roma_tours_common::Error),
}

pub type Result<T> = std::result::Result<T, ToursError>;

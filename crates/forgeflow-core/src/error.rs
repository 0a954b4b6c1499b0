use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "設定ファイルが見つかりません。以下の場所を確認してください:\n\
        - カレントディレクトリ: forge.local.conf, .forge.local.conf, forge.conf, .forge.conf\n\
        または FORGE_CONFIG_PATH 環境変数で直接指定できます"
    )]
    ConfigFileNotFound,

    #[error("設定ファイルのパースエラー: {0}")]
    Parse(#[from] dotenvy::Error),

    #[error("IMAGE_REPOSITORY が設定されていません（必須キーです）")]
    MissingRepository,

    #[error("無効な IMAGE_TAG: {0}")]
    InvalidTag(String),

    #[error("IO エラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

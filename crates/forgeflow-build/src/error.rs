use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Dockerfile が見つかりません: {0}")]
    DockerfileNotFound(PathBuf),

    #[error("イメージビルドに失敗しました: {0}")]
    BuildFailed(String),

    #[error("イメージプッシュに失敗しました: {message}")]
    PushFailed { message: String },

    #[error("成果物 '{0}' が Maven リポジトリ内に見つかりません")]
    ArtifactNotFound(String),

    #[error(
        "M2 または LOCAL_MAVEN_REPOSITORY が設定されていません（EXTERNAL_ARTIFACTS の取得に必要です）"
    )]
    ArtifactRepositoryNotConfigured,

    #[error("コマンド実行エラー: {0}")]
    Runner(#[from] forgeflow_runner::RunnerError),

    #[error("IO エラー: {0}")]
    Io(#[from] std::io::Error),
}

impl BuildError {
    /// ユーザー向けの分かりやすいエラーメッセージ
    pub fn user_message(&self) -> String {
        match self {
            BuildError::DockerfileNotFound(path) => {
                format!(
                    "Dockerfileが見つかりません: {}\n\
                     \n\
                     解決方法:\n\
                     1. ビルドコンテキスト（カレントディレクトリ）に Dockerfile を置いてください\n\
                     2. プロジェクトルートで実行しているか確認してください",
                    path.display()
                )
            }
            BuildError::ArtifactNotFound(name) => {
                format!(
                    "成果物 '{}' が Maven リポジトリ内に見つかりません\n\
                     \n\
                     解決方法:\n\
                     1. mvn install で成果物をローカルリポジトリに配置してください\n\
                     2. 設定の M2 / LOCAL_MAVEN_REPOSITORY パスを確認してください",
                    name
                )
            }
            BuildError::BuildFailed(msg) => {
                format!(
                    "ビルドに失敗しました: {}\n\
                     \n\
                     Dockerfileの内容を確認してください。",
                    msg
                )
            }
            _ => format!("{}", self),
        }
    }
}

pub type BuildResult<T> = std::result::Result<T, BuildError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error(
        "コマンドを起動できません: {program}\n理由: {source}\nヒント: {program} がインストールされ、PATH に含まれているか確認してください"
    )]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RunnerError>;

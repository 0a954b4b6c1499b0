//! イメージプッシュ処理
//!
//! ビルドしたイメージをコンテナレジストリにプッシュします。

use colored::Colorize;
use forgeflow_runner::ProcessRunner;

use crate::error::{BuildError, BuildResult};

/// イメージプッシュを実行するハンドラ
pub struct ImagePusher<'a, R> {
    runner: &'a R,
}

impl<'a, R: ProcessRunner> ImagePusher<'a, R> {
    pub fn new(runner: &'a R) -> Self {
        Self { runner }
    }

    /// イメージをレジストリにプッシュ
    ///
    /// # Returns
    /// プッシュ成功時は完全なイメージ参照を返す
    pub async fn push(&self, reference: &str) -> BuildResult<String> {
        tracing::info!("Pushing image: {}", reference);
        println!("  → {}", reference.cyan());

        let output = self.runner.run("docker", &["push", reference], None).await?;
        if !output.success() {
            return Err(BuildError::PushFailed {
                message: output.stderr,
            });
        }

        Ok(reference.to_string())
    }
}

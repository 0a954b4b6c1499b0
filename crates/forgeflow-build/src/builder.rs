//! イメージビルド処理

use colored::Colorize;
use forgeflow_runner::ProcessRunner;
use std::path::Path;

use crate::error::{BuildError, BuildResult};

/// イメージビルドを実行するハンドラ
pub struct ImageBuilder<'a, R> {
    runner: &'a R,
}

impl<'a, R: ProcessRunner> ImageBuilder<'a, R> {
    pub fn new(runner: &'a R) -> Self {
        Self { runner }
    }

    /// イメージをビルド
    ///
    /// ビルドコンテキストに Dockerfile が存在することを要求する。
    /// 失敗時はエンジンの stderr をエラーに載せて返す。
    pub async fn build(
        &self,
        context: &Path,
        reference: &str,
        no_cache: bool,
    ) -> BuildResult<()> {
        let dockerfile = context.join("Dockerfile");
        if !dockerfile.exists() {
            return Err(BuildError::DockerfileNotFound(dockerfile));
        }

        tracing::info!("Building image: {}", reference);
        println!("  → {}", reference.cyan());

        let mut args = vec!["build", "-t", reference];
        if no_cache {
            args.push("--no-cache");
        }
        args.push(".");

        let output = self.runner.run("docker", &args, Some(context)).await?;
        if !output.success() {
            return Err(BuildError::BuildFailed(output.stderr));
        }

        Ok(())
    }
}

//! 外部成果物の取得
//!
//! ローカル Maven リポジトリからイメージビルドで使う成果物を
//! ビルドコンテキストの `artifacts/` ディレクトリへ集めます。

use colored::Colorize;
use forgeflow_core::ForgeConfig;
use std::path::{Path, PathBuf};

use crate::error::{BuildError, BuildResult};

/// イメージに取り込む成果物を置くディレクトリ名
pub const ARTIFACTS_DIR: &str = "artifacts";

/// 設定された外部成果物をビルドコンテキストへ集める
///
/// 成果物が設定されていなければ何もしない。既に `artifacts/` にある
/// ファイルは再取得しない。
pub fn fetch_artifacts(config: &ForgeConfig, context: &Path) -> BuildResult<()> {
    if config.external_artifacts.is_empty() {
        return Ok(());
    }

    let repository = config
        .maven_repository
        .as_deref()
        .ok_or(BuildError::ArtifactRepositoryNotConfigured)?;

    let artifacts_dir = context.join(ARTIFACTS_DIR);
    std::fs::create_dir_all(&artifacts_dir)?;

    for name in &config.external_artifacts {
        let destination = artifacts_dir.join(name);
        if destination.exists() {
            println!("  {} 取得済み: {}", "ℹ".dimmed(), name.cyan());
            continue;
        }

        let source = find_in_repository(repository, name)
            .ok_or_else(|| BuildError::ArtifactNotFound(name.clone()))?;

        tracing::debug!("Copying {} -> {}", source.display(), destination.display());
        std::fs::copy(&source, &destination)?;
        println!("  {} 取得: {}", "✓".green(), name.cyan());
    }

    Ok(())
}

/// Maven リポジトリ内をファイル名で検索し、最初に見つかったファイルを返す
fn find_in_repository(repository: &Path, name: &str) -> Option<PathBuf> {
    let pattern = format!("{}/**/{}", repository.display(), name);
    glob::glob(&pattern).ok()?.flatten().find(|p| p.is_file())
}

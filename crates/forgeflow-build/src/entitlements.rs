//! エンタイトルメントの取得
//!
//! ライセンス関連ファイルを外部のコピー元からビルドコンテキストの
//! `entitlements/` ディレクトリへコピーします。

use forgeflow_core::ForgeConfig;
use std::path::Path;

use crate::error::BuildResult;

/// エンタイトルメントを置くディレクトリ名
pub const ENTITLEMENTS_DIR: &str = "entitlements";

/// エンタイトルメントファイルをビルドコンテキストへコピーする
///
/// コピー元が設定されていなければ何もしない。
pub fn fetch_entitlements(config: &ForgeConfig, context: &Path) -> BuildResult<()> {
    let Some(source_dir) = config.entitlements_dir.as_deref() else {
        return Ok(());
    };

    let destination_dir = context.join(ENTITLEMENTS_DIR);
    std::fs::create_dir_all(&destination_dir)?;

    for entry in std::fs::read_dir(source_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            let destination = destination_dir.join(entry.file_name());
            tracing::debug!("Copying {} -> {}", path.display(), destination.display());
            std::fs::copy(&path, &destination)?;
        }
    }

    Ok(())
}

/// ビルドコンテキスト内のエンタイトルメントの中身を削除する
///
/// ディレクトリ自体は残す。存在しなければ何もしない。
pub fn clear_entitlements(context: &Path) -> BuildResult<()> {
    let dir = context.join(ENTITLEMENTS_DIR);
    if !dir.exists() {
        return Ok(());
    }

    for entry in std::fs::read_dir(&dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            std::fs::remove_dir_all(&path)?;
        } else {
            std::fs::remove_file(&path)?;
        }
    }

    Ok(())
}

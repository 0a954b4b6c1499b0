use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// 設定ファイルの候補（ローカルオーバーライドを優先）
const CANDIDATES: [&str; 4] = [
    "forge.local.conf",
    ".forge.local.conf",
    "forge.conf",
    ".forge.conf",
];

/// 設定ファイルを探す
///
/// 以下の優先順位で検索:
/// 1. 環境変数 FORGE_CONFIG_PATH (直接パス指定)
/// 2. カレントディレクトリ: forge.local.conf, .forge.local.conf, forge.conf, .forge.conf
pub fn find_config_file() -> Result<PathBuf> {
    // 1. 環境変数で直接指定
    if let Ok(config_path) = std::env::var("FORGE_CONFIG_PATH") {
        let path = PathBuf::from(config_path);
        if path.exists() {
            return Ok(path);
        }
    }

    // 2. カレントディレクトリで検索
    let current_dir = std::env::current_dir()?;
    for filename in &CANDIDATES {
        let path = current_dir.join(filename);
        if path.exists() {
            return Ok(path);
        }
    }

    // どの設定ファイルも見つからなかった
    Err(ConfigError::ConfigFileNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    #[serial]
    fn test_find_config_file_in_current_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let original_dir = std::env::current_dir().unwrap();

        fs::write(temp_dir.path().join("forge.conf"), "IMAGE_REPOSITORY=app").unwrap();

        std::env::set_current_dir(&temp_dir).unwrap();

        let result = find_config_file();
        assert!(result.is_ok());
        assert!(result.unwrap().ends_with("forge.conf"));

        std::env::set_current_dir(original_dir).unwrap();
    }

    #[test]
    #[serial]
    fn test_find_config_file_local_priority() {
        let temp_dir = tempfile::tempdir().unwrap();
        let original_dir = std::env::current_dir().unwrap();

        fs::write(temp_dir.path().join("forge.conf"), "# global").unwrap();
        fs::write(temp_dir.path().join("forge.local.conf"), "# local").unwrap();

        std::env::set_current_dir(&temp_dir).unwrap();

        let result = find_config_file().unwrap();

        // forge.local.conf が優先される
        assert!(result.ends_with("forge.local.conf"));

        std::env::set_current_dir(original_dir).unwrap();
    }

    #[test]
    #[serial]
    fn test_find_config_file_env_var() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("custom.conf");
        fs::write(&config_path, "IMAGE_REPOSITORY=app").unwrap();

        // SAFETY: テスト環境での環境変数設定
        unsafe {
            std::env::set_var("FORGE_CONFIG_PATH", config_path.to_str().unwrap());
        }

        let result = find_config_file().unwrap();
        assert_eq!(result, config_path);

        // クリーンアップ
        unsafe {
            std::env::remove_var("FORGE_CONFIG_PATH");
        }
    }

    #[test]
    #[serial]
    fn test_find_config_file_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        let original_dir = std::env::current_dir().unwrap();

        std::env::set_current_dir(&temp_dir).unwrap();

        let result = find_config_file();
        assert!(matches!(result, Err(ConfigError::ConfigFileNotFound)));

        std::env::set_current_dir(original_dir).unwrap();
    }
}

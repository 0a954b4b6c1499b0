//! 設定ローダー
//!
//! ファイル発見と key=value パースを統合

use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use crate::config::ForgeConfig;
use crate::discovery::find_config_file;
use crate::error::Result;

/// 設定ファイルを発見してロード
pub fn load_config() -> Result<ForgeConfig> {
    let path = find_config_file()?;
    debug!("Loading configuration from {}", path.display());
    load_config_from_path(&path)
}

/// 指定パスの設定ファイルをロード
///
/// key=value 行をパースしてマップを構築する。プロセス環境には書き込まない。
pub fn load_config_from_path(path: &Path) -> Result<ForgeConfig> {
    let mut map = HashMap::new();
    for item in dotenvy::from_path_iter(path)? {
        let (key, value) = item?;
        map.insert(key, value);
    }

    debug!(keys = map.len(), "Configuration file parsed");
    ForgeConfig::from_map(&map)
}

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// ビルド設定
///
/// 設定ファイルから一度だけ構築し、以後は不変のままワークフローに渡す。
/// ワークフロー側でプロセス環境変数を参照することはない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeConfig {
    /// レジストリホスト。未設定の場合プッシュはスキップされる
    pub image_registry: Option<String>,
    /// レジストリとリポジトリの間のネームスペース
    pub image_namespace: Option<String>,
    /// イメージリポジトリ名（必須）
    pub image_repository: String,
    /// イメージタグ。未設定の場合 `:tag` サフィックスは付かない
    pub image_tag: Option<String>,
    /// イメージに取り込む外部成果物のファイル名リスト
    pub external_artifacts: Vec<String>,
    /// エンタイトルメントファイルのコピー元ディレクトリ
    pub entitlements_dir: Option<PathBuf>,
    /// Maven プロジェクトのディレクトリ
    pub java_project_dir: Option<PathBuf>,
    /// ローカル Maven リポジトリ（M2 が LOCAL_MAVEN_REPOSITORY より優先）
    pub maven_repository: Option<PathBuf>,
}

impl ForgeConfig {
    /// key=value マップから設定を構築
    ///
    /// 値は前後の空白を除去し、空文字列は未設定として扱う。
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self> {
        let image_repository =
            non_empty(map, "IMAGE_REPOSITORY").ok_or(ConfigError::MissingRepository)?;

        let image_tag = non_empty(map, "IMAGE_TAG");
        if let Some(tag) = &image_tag {
            validate_tag(tag)?;
        }

        let external_artifacts = map
            .get("EXTERNAL_ARTIFACTS")
            .map(|v| v.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        let maven_repository = non_empty(map, "M2")
            .or_else(|| non_empty(map, "LOCAL_MAVEN_REPOSITORY"))
            .map(PathBuf::from);

        Ok(Self {
            image_registry: non_empty(map, "IMAGE_REGISTRY"),
            image_namespace: non_empty(map, "IMAGE_NAMESPACE"),
            image_repository,
            image_tag,
            external_artifacts,
            entitlements_dir: non_empty(map, "ENTITLEMENTS_DIR").map(PathBuf::from),
            java_project_dir: non_empty(map, "JAVA_PROJECT_DIR").map(PathBuf::from),
            maven_repository,
        })
    }
}

fn non_empty(map: &HashMap<String, String>, key: &str) -> Option<String> {
    map.get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// イメージタグのバリデーション
///
/// タグの制約:
/// - 128文字以下
/// - 英数字、ピリオド、ハイフン、アンダースコアのみ
/// - 先頭はピリオドまたはハイフンではない
fn validate_tag(tag: &str) -> Result<()> {
    if tag.len() > 128 {
        return Err(ConfigError::InvalidTag(format!(
            "タグが長すぎます（{} 文字、最大 128）",
            tag.len()
        )));
    }

    if tag.starts_with('.') || tag.starts_with('-') {
        return Err(ConfigError::InvalidTag(tag.to_string()));
    }

    for c in tag.chars() {
        if !c.is_ascii_alphanumeric() && c != '.' && c != '-' && c != '_' {
            return Err(ConfigError::InvalidTag(format!(
                "不正な文字 '{}' が含まれています: {}",
                c, tag
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_map_minimal() {
        let config = ForgeConfig::from_map(&map(&[("IMAGE_REPOSITORY", "app")])).unwrap();

        assert_eq!(config.image_repository, "app");
        assert_eq!(config.image_registry, None);
        assert_eq!(config.image_tag, None);
        assert!(config.external_artifacts.is_empty());
    }

    #[test]
    fn test_from_map_missing_repository() {
        let result = ForgeConfig::from_map(&map(&[("IMAGE_TAG", "latest")]));
        assert!(matches!(result, Err(ConfigError::MissingRepository)));
    }

    #[test]
    fn test_from_map_empty_repository() {
        // 空文字列は未設定として扱う
        let result = ForgeConfig::from_map(&map(&[("IMAGE_REPOSITORY", "  ")]));
        assert!(matches!(result, Err(ConfigError::MissingRepository)));
    }

    #[test]
    fn test_from_map_empty_registry_is_none() {
        let config = ForgeConfig::from_map(&map(&[
            ("IMAGE_REPOSITORY", "app"),
            ("IMAGE_REGISTRY", ""),
        ]))
        .unwrap();

        assert_eq!(config.image_registry, None);
    }

    #[test]
    fn test_from_map_splits_artifacts() {
        let config = ForgeConfig::from_map(&map(&[
            ("IMAGE_REPOSITORY", "app"),
            ("EXTERNAL_ARTIFACTS", "lib-a.jar  lib-b.jar\tlib-c.jar"),
        ]))
        .unwrap();

        assert_eq!(
            config.external_artifacts,
            vec!["lib-a.jar", "lib-b.jar", "lib-c.jar"]
        );
    }

    #[test]
    fn test_from_map_m2_wins_over_fallback() {
        let config = ForgeConfig::from_map(&map(&[
            ("IMAGE_REPOSITORY", "app"),
            ("M2", "/home/dev/.m2/repository"),
            ("LOCAL_MAVEN_REPOSITORY", "/opt/maven-repo"),
        ]))
        .unwrap();

        assert_eq!(
            config.maven_repository,
            Some(PathBuf::from("/home/dev/.m2/repository"))
        );
    }

    #[test]
    fn test_from_map_maven_repository_fallback() {
        let config = ForgeConfig::from_map(&map(&[
            ("IMAGE_REPOSITORY", "app"),
            ("LOCAL_MAVEN_REPOSITORY", "/opt/maven-repo"),
        ]))
        .unwrap();

        assert_eq!(config.maven_repository, Some(PathBuf::from("/opt/maven-repo")));
    }

    #[test]
    fn test_validate_tag_rejects_leading_dash() {
        let result = ForgeConfig::from_map(&map(&[
            ("IMAGE_REPOSITORY", "app"),
            ("IMAGE_TAG", "-dev"),
        ]));
        assert!(matches!(result, Err(ConfigError::InvalidTag(_))));
    }

    #[test]
    fn test_validate_tag_rejects_invalid_chars() {
        let result = ForgeConfig::from_map(&map(&[
            ("IMAGE_REPOSITORY", "app"),
            ("IMAGE_TAG", "v1.0/beta"),
        ]));
        assert!(matches!(result, Err(ConfigError::InvalidTag(_))));
    }

    #[test]
    fn test_validate_tag_accepts_usual_tags() {
        for tag in ["latest", "v1.0.2", "2024-06_hotfix", "RC1"] {
            let config = ForgeConfig::from_map(&map(&[
                ("IMAGE_REPOSITORY", "app"),
                ("IMAGE_TAG", tag),
            ]))
            .unwrap();
            assert_eq!(config.image_tag.as_deref(), Some(tag));
        }
    }
}

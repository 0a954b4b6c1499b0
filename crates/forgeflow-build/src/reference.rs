//! イメージ参照の組み立て
//!
//! レジストリ、ネームスペース、リポジトリ、タグから完全修飾イメージ参照を
//! 組み立てます。

use forgeflow_core::ForgeConfig;

/// 完全修飾イメージ参照を組み立てる
///
/// 規則:
/// - レジストリが未設定ならレジストリセグメントを省略
/// - ネームスペースが未設定ならネームスペースセグメントを省略
/// - リポジトリは常に含める
/// - タグが設定されている場合のみ `:tag` を付ける
///
/// # Examples
/// - `(Some("registry.example.com"), Some("team"), "app", Some("v1"))`
///   -> `registry.example.com/team/app:v1`
/// - `(None, None, "app", Some("latest"))` -> `app:latest`
/// - `(None, None, "app", None)` -> `app`
pub fn image_reference(
    registry: Option<&str>,
    namespace: Option<&str>,
    repository: &str,
    tag: Option<&str>,
) -> String {
    let mut reference = String::new();

    if let Some(registry) = registry {
        reference.push_str(registry);
        reference.push('/');
    }
    if let Some(namespace) = namespace {
        reference.push_str(namespace);
        reference.push('/');
    }
    reference.push_str(repository);

    if let Some(tag) = tag {
        reference.push(':');
        reference.push_str(tag);
    }

    reference
}

/// 設定から完全修飾イメージ参照を組み立てる
pub fn reference_from_config(config: &ForgeConfig) -> String {
    image_reference(
        config.image_registry.as_deref(),
        config.image_namespace.as_deref(),
        &config.image_repository,
        config.image_tag.as_deref(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_reference_full() {
        let reference = image_reference(
            Some("registry.example.com"),
            Some("team"),
            "app",
            Some("v1.0"),
        );
        assert_eq!(reference, "registry.example.com/team/app:v1.0");
    }

    #[test]
    fn test_image_reference_without_registry() {
        let reference = image_reference(None, Some("team"), "app", Some("v1.0"));
        assert_eq!(reference, "team/app:v1.0");
    }

    #[test]
    fn test_image_reference_without_namespace() {
        let reference = image_reference(Some("registry.example.com"), None, "app", Some("v1.0"));
        assert_eq!(reference, "registry.example.com/app:v1.0");
    }

    #[test]
    fn test_image_reference_without_tag() {
        let reference = image_reference(Some("registry.example.com"), Some("team"), "app", None);
        assert_eq!(reference, "registry.example.com/team/app");
    }

    #[test]
    fn test_image_reference_repository_only() {
        assert_eq!(image_reference(None, None, "app", None), "app");
    }

    #[test]
    fn test_image_reference_repository_and_tag() {
        // レジストリ未設定のローカルビルドで使う形
        assert_eq!(image_reference(None, None, "app", Some("latest")), "app:latest");
    }

    #[test]
    fn test_reference_from_config() {
        use std::collections::HashMap;

        let map: HashMap<String, String> = [
            ("IMAGE_REGISTRY", "registry.example.com"),
            ("IMAGE_NAMESPACE", "team"),
            ("IMAGE_REPOSITORY", "app"),
            ("IMAGE_TAG", "latest"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let config = ForgeConfig::from_map(&map).unwrap();

        assert_eq!(
            reference_from_config(&config),
            "registry.example.com/team/app:latest"
        );
    }
}

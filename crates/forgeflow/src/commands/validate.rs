use colored::Colorize;
use forgeflow_build::reference_from_config;
use forgeflow_core::ForgeConfig;

/// 設定の検証コマンドを処理
///
/// ロード済みの設定のサマリーと解決されたイメージ参照を表示する。
pub fn handle(config: &ForgeConfig) -> anyhow::Result<()> {
    println!("{}", "設定を検証中...".blue());
    println!("{}", "✓ 設定ファイルは正常です！".green().bold());
    println!();
    println!("サマリー:");
    println!("  リポジトリ: {}", config.image_repository.cyan());
    println!(
        "  レジストリ: {}",
        config.image_registry.as_deref().unwrap_or("(未設定)")
    );
    println!(
        "  ネームスペース: {}",
        config.image_namespace.as_deref().unwrap_or("(未設定)")
    );
    println!(
        "  タグ: {}",
        config.image_tag.as_deref().unwrap_or("(未設定)")
    );
    println!("  外部成果物: {}個", config.external_artifacts.len());
    if let Some(dir) = &config.java_project_dir {
        println!("  Javaプロジェクト: {}", dir.display().to_string().cyan());
    }
    println!();
    println!("  イメージ参照: {}", reference_from_config(config).cyan());

    Ok(())
}

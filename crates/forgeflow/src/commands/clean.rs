use colored::Colorize;
use forgeflow_core::ForgeConfig;
use forgeflow_runner::ProcessRunner;
use std::path::Path;

/// クリーンアップコマンドを処理
///
/// entitlements の中身を削除し、Maven プロジェクトがあれば mvn clean を
/// 実行する。外部ツールの失敗は致命扱いしない。
pub async fn handle<R: ProcessRunner>(
    runner: &R,
    config: &ForgeConfig,
    context: &Path,
) -> anyhow::Result<()> {
    println!("{}", "🧹 クリーンアップ中...".yellow());

    forgeflow_build::clear_entitlements(context)?;
    println!("  {} entitlements をクリアしました", "✓".green());

    if let Some(dir) = &config.java_project_dir {
        match runner.run("mvn", &["clean"], Some(dir.as_path())).await {
            Ok(output) if output.success() => {
                println!("  {} mvn clean 完了", "✓".green());
            }
            Ok(output) => {
                println!(
                    "  {} mvn clean が終了コード {} で失敗しました",
                    "⚠".yellow(),
                    output.status
                );
            }
            Err(e) => {
                println!("  {} mvn を実行できません: {}", "⚠".yellow(), e);
            }
        }
    }

    Ok(())
}

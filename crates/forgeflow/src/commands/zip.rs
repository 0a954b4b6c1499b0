use colored::Colorize;
use forgeflow_core::ForgeConfig;
use forgeflow_runner::ProcessRunner;
use std::path::Path;

/// アーカイブコマンドを処理
///
/// クリーンアップを実行してから、プロジェクトディレクトリを
/// `../<ディレクトリ名>.zip` にアーカイブする（IDE メタデータは除外）。
pub async fn handle<R: ProcessRunner>(
    runner: &R,
    config: &ForgeConfig,
    context: &Path,
) -> anyhow::Result<()> {
    // まずクリーンアップ
    super::clean::handle(runner, config, context).await?;

    let name = context
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("ディレクトリ名を解決できません: {}", context.display()))?;
    let archive = format!("../{}.zip", name);

    println!();
    println!("{}", "📦 アーカイブを作成中...".blue().bold());

    let output = runner
        .run(
            "zip",
            &["-r", archive.as_str(), ".", "-x", "*.iml"],
            Some(context),
        )
        .await?;
    if !output.success() {
        eprintln!("  {} アーカイブ作成エラー:", "✗".red().bold());
        eprintln!("{}", output.stderr);
        anyhow::bail!("アーカイブの作成に失敗しました");
    }

    println!("  {} {}", "✓".green(), archive.cyan());

    Ok(())
}

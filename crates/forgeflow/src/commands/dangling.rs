use colored::Colorize;
use forgeflow_runner::ProcessRunner;

/// danglingイメージの削除コマンドを処理
///
/// 設定ファイルを必要としない。
pub async fn handle<R: ProcessRunner>(runner: &R) -> anyhow::Result<()> {
    println!("{}", "danglingイメージを確認中...".blue());

    let output = runner
        .run("docker", &["images", "--filter", "dangling=true", "-q"], None)
        .await?;
    if !output.success() {
        eprintln!("  {} イメージ一覧の取得に失敗しました:", "✗".red().bold());
        eprintln!("{}", output.stderr);
        anyhow::bail!("danglingイメージの確認に失敗しました");
    }

    let ids: Vec<&str> = output
        .stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if ids.is_empty() {
        println!("  {} 削除対象のイメージはありません", "ℹ".dimmed());
        return Ok(());
    }

    let mut args = vec!["rmi"];
    args.extend(ids.iter().copied());

    let output = runner.run("docker", &args, None).await?;
    if !output.success() {
        eprintln!("  {} イメージ削除エラー:", "✗".red().bold());
        eprintln!("{}", output.stderr);
        anyhow::bail!("danglingイメージの削除に失敗しました");
    }

    println!(
        "  {} danglingイメージを削除しました ({} 個)",
        "✓".green(),
        ids.len()
    );

    Ok(())
}

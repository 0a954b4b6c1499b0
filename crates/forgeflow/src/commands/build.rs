use colored::Colorize;
use forgeflow_build::{ImageBuilder, ImagePusher, reference_from_config};
use forgeflow_core::ForgeConfig;
use forgeflow_runner::ProcessRunner;
use std::path::Path;

/// ビルドコマンドを処理
///
/// Javaビルド → 成果物・エンタイトルメントの取得 → イメージビルド →
/// プッシュの順に実行する。各ステップの失敗はその場で致命扱い。
pub async fn handle<R: ProcessRunner>(
    runner: &R,
    config: &ForgeConfig,
    context: &Path,
    push_image: bool,
    build_java: bool,
    no_cache: bool,
) -> anyhow::Result<()> {
    // 1. Javaビルド
    if build_java {
        match &config.java_project_dir {
            Some(dir) => {
                println!("{}", "🔨 Javaプロジェクトをビルド中...".green().bold());
                println!("  → {}", dir.display().to_string().cyan());

                let output = runner
                    .run("mvn", &["clean", "package"], Some(dir.as_path()))
                    .await?;
                if !output.success() {
                    eprintln!("  {} Javaビルドエラー:", "✗".red().bold());
                    eprintln!("{}", output.stderr);
                    anyhow::bail!("Javaビルドに失敗しました");
                }
                println!("  {} Javaビルド完了", "✓".green());
            }
            None => {
                println!(
                    "  {} JAVA_PROJECT_DIR が未設定のため Java ビルドをスキップします",
                    "ℹ".dimmed()
                );
            }
        }
    } else {
        println!(
            "  {} --no-java が指定されたため Java ビルドをスキップします",
            "ℹ".dimmed()
        );
    }

    // 2. イメージビルド
    println!();
    println!("{}", "🔨 イメージをビルド中...".green().bold());

    if let Err(e) = forgeflow_build::fetch_artifacts(config, context) {
        eprintln!("  {} {}", "✗".red().bold(), e.user_message());
        anyhow::bail!("成果物の取得に失敗しました");
    }
    if let Err(e) = forgeflow_build::fetch_entitlements(config, context) {
        eprintln!("  {} エンタイトルメント取得エラー: {}", "✗".red().bold(), e);
        anyhow::bail!("エンタイトルメントの取得に失敗しました");
    }

    let reference = reference_from_config(config);

    let builder = ImageBuilder::new(runner);
    match builder.build(context, &reference, no_cache).await {
        Ok(_) => {
            println!("  {} ビルド完了", "✓".green());
        }
        Err(e) => {
            eprintln!("  {} {}", "✗".red().bold(), e.user_message());
            anyhow::bail!("イメージビルドに失敗しました");
        }
    }

    // 3. プッシュ
    if !push_image {
        println!(
            "  {} --no-push が指定されたためプッシュをスキップします",
            "ℹ".dimmed()
        );
    } else if config.image_registry.is_none() {
        println!(
            "  {} IMAGE_REGISTRY が未設定のためプッシュをスキップします",
            "ℹ".dimmed()
        );
    } else {
        println!();
        println!("{}", "📤 イメージをプッシュ中...".blue().bold());

        let pusher = ImagePusher::new(runner);
        match pusher.push(&reference).await {
            Ok(pushed) => {
                println!("  {} {}", "✓".green(), pushed.cyan());
            }
            Err(e) => {
                eprintln!("  {} プッシュエラー: {}", "✗".red().bold(), e);
                anyhow::bail!("プッシュに失敗しました");
            }
        }
    }

    // 完了メッセージ
    println!();
    println!("{}", "✓ すべて完了しました！".green().bold());

    Ok(())
}

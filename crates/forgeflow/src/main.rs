mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use forgeflow_runner::SystemRunner;

#[derive(Parser)]
#[command(name = "forge")]
#[command(about = "鍛える。運ぶ。Javaアプリのイメージ作りは、ひと言になった。", long_about = None)]
struct Cli {
    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// イメージをビルド（Javaビルド → イメージビルド → プッシュ）
    Build {
        /// ビルド後のプッシュをスキップ
        #[arg(long)]
        no_push: bool,
        /// Javaビルドをスキップ
        #[arg(long)]
        no_java: bool,
        /// キャッシュを使用しない
        #[arg(long)]
        no_cache: bool,
    },
    /// ビルド成果物を削除（entitlements と mvn clean）
    Clean,
    /// タグのないdanglingイメージを削除
    Dangling,
    /// プロジェクトディレクトリをzipアーカイブ
    Zip,
    /// 設定を検証
    Validate,
    /// バージョン情報を表示
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // -v で debug レベルのログを有効化
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive(tracing::Level::DEBUG.into()),
            )
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    // コマンド未指定はヘルプを表示して正常終了
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Versionコマンドは設定ファイル不要
    if matches!(command, Commands::Version) {
        println!("forgeflow {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let runner = SystemRunner::new();

    // Danglingコマンドも設定ファイル不要
    if matches!(command, Commands::Dangling) {
        return commands::dangling::handle(&runner).await;
    }

    // 設定をロード（build / clean / zip / validate で必須）
    let config = match forgeflow_core::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!();
            eprintln!("{}", "✗ 設定エラー".red().bold());
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    let context = std::env::current_dir()?;

    // コマンドディスパッチ
    match command {
        Commands::Build {
            no_push,
            no_java,
            no_cache,
        } => {
            commands::build::handle(&runner, &config, &context, !no_push, !no_java, no_cache)
                .await?;
        }
        Commands::Clean => {
            commands::clean::handle(&runner, &config, &context).await?;
        }
        Commands::Zip => {
            commands::zip::handle(&runner, &config, &context).await?;
        }
        Commands::Validate => {
            commands::validate::handle(&config)?;
        }
        Commands::Dangling => {
            unreachable!("Dangling is handled before config loading");
        }
        Commands::Version => {
            unreachable!("Version is handled before config loading");
        }
    }

    Ok(())
}

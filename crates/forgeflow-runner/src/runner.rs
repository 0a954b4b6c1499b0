use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use crate::error::{Result, RunnerError};

/// 外部コマンドの実行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// プロセスの終了コード（シグナル終了時は -1）
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// 外部コマンド実行のトレイト
///
/// ワークフローはこのトレイト越しにコラボレーターを呼び出す。
/// テストでは [`crate::fake::FakeRunner`] に差し替える。
#[allow(async_fn_in_trait)]
pub trait ProcessRunner {
    async fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>)
    -> Result<CommandOutput>;
}

/// tokio::process による実装
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> Result<CommandOutput> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        tracing::debug!("Running: {} {}", program, args.join(" "));

        let output = cmd.output().await.map_err(|source| RunnerError::Spawn {
            program: program.to_string(),
            source,
        })?;

        Ok(CommandOutput {
            status: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

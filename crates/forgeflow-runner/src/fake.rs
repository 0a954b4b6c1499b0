//! Scripted runner for testing.
//!
//! Records every invocation and replays queued outputs, so workflow
//! logic can be exercised without real external tools.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::Result;
use crate::runner::{CommandOutput, ProcessRunner};

/// 記録された 1 回の呼び出し
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl RecordedCall {
    /// `"docker build -t app ."` 形式の表記（アサーション用）
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// キューに積んだ結果を順に返すフェイクランナー
///
/// 結果が積まれていない呼び出しは成功（終了コード 0、出力なし）を返す。
#[derive(Debug, Default)]
pub struct FakeRunner {
    outputs: Mutex<VecDeque<CommandOutput>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// 次の呼び出しが返す結果を積む
    pub fn push_output(&self, output: CommandOutput) {
        self.outputs.lock().unwrap().push_back(output);
    }

    pub fn push_success(&self, stdout: &str) {
        self.push_output(CommandOutput {
            status: 0,
            stdout: stdout.to_string(),
            stderr: String::new(),
        });
    }

    pub fn push_failure(&self, status: i32, stderr: &str) {
        self.push_output(CommandOutput {
            status,
            stdout: String::new(),
            stderr: stderr.to_string(),
        });
    }

    /// これまでの呼び出し履歴
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProcessRunner for FakeRunner {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> Result<CommandOutput> {
        self.calls.lock().unwrap().push(RecordedCall {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.map(Path::to_path_buf),
        });

        let output = self
            .outputs
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(CommandOutput {
                status: 0,
                stdout: String::new(),
                stderr: String::new(),
            });
        Ok(output)
    }
}

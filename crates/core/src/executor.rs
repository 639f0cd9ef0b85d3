use hostprobe_error::{ProbeError, Result};
use std::io::ErrorKind;
use std::process::Stdio;
use tokio::process::Command;
use tokio::time::{timeout, Duration};
use tracing::debug;

pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(60);

/// 执行外部命令并捕获标准输出
///
/// 每条命令都受超时限制，超时后子进程会被终止。
#[derive(Debug, Clone, Copy)]
pub struct CommandExecutor {
    timeout: Duration,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND_TIMEOUT)
    }
}

impl CommandExecutor {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub async fn capture(&self, manager: &str, program: &str, args: &[&str]) -> Result<String> {
        let command = if args.is_empty() {
            program.to_string()
        } else {
            format!("{} {}", program, args.join(" "))
        };
        debug!("执行 {} 命令: {}", manager, command);

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = timeout(self.timeout, child)
            .await
            .map_err(|_| ProbeError::CommandTimeout {
                manager: manager.to_string(),
                command: command.clone(),
                seconds: self.timeout.as_secs(),
            })?
            .map_err(|err| match err.kind() {
                ErrorKind::NotFound => ProbeError::ManagerNotFound {
                    name: manager.to_string(),
                },
                _ => ProbeError::Io(err),
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(ProbeError::CommandFailed {
                manager: manager.to_string(),
                command,
                exit_code: output.status.code().unwrap_or(-1),
            })
        }
    }
}

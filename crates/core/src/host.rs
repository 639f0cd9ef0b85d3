use crate::executor::CommandExecutor;
use hostprobe_error::{ProbeError, Result};
use tracing::debug;

pub const HOSTNAME_PROGRAM: &str = "hostname";

/// 解析本机的完整域名
///
/// 先查询 `hostname -f`，失败或为空时回退到短主机名。两者都失败时返回
/// [`ProbeError::HostnameUnresolved`]，不会编造主机名。
pub struct HostIdentifier {
    program: String,
    executor: CommandExecutor,
}

impl HostIdentifier {
    pub fn new(executor: CommandExecutor) -> Self {
        Self::with_program(HOSTNAME_PROGRAM, executor)
    }

    pub fn with_program(program: impl Into<String>, executor: CommandExecutor) -> Self {
        Self {
            program: program.into(),
            executor,
        }
    }

    pub async fn resolve(&self) -> Result<String> {
        match self.query(&["-f"]).await {
            Ok(name) => return Ok(name),
            Err(err) => debug!("完整域名查询失败，回退到短主机名: {}", err),
        }

        self.query(&[])
            .await
            .map_err(|err| ProbeError::HostnameUnresolved {
                reason: err.to_string(),
            })
    }

    async fn query(&self, args: &[&str]) -> Result<String> {
        let output = self
            .executor
            .capture(HOSTNAME_PROGRAM, &self.program, args)
            .await?;
        // 只取第一行
        let name = output.lines().next().unwrap_or_default().trim();
        if name.is_empty() {
            return Err(ProbeError::HostnameUnresolved {
                reason: "主机名为空".to_string(),
            });
        }
        Ok(name.to_string())
    }
}

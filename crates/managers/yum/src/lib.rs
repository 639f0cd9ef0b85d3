use async_trait::async_trait;
use hostprobe_core::{CommandExecutor, Listing, PackageManager};
use hostprobe_error::Result;
use tracing::debug;

const PROGRAM: &str = "yum";
const LIST_ARGS: &[&str] = &["list", "installed"];

/// RHEL/CentOS 系的包管理器，通过 `yum list installed` 列出已安装的包
///
/// 查询片段原样使用，不做任何替换。
pub struct YumManager {
    executor: CommandExecutor,
    program: String,
    args: Vec<String>,
}

impl YumManager {
    pub fn new(executor: CommandExecutor) -> Self {
        Self::with_command(executor, PROGRAM, LIST_ARGS)
    }

    pub fn with_command(executor: CommandExecutor, program: &str, args: &[&str]) -> Self {
        Self {
            executor,
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }
}

#[async_trait]
impl PackageManager for YumManager {
    fn name(&self) -> &str {
        "yum"
    }

    async fn list_installed(&self) -> Result<Listing> {
        let args: Vec<&str> = self.args.iter().map(|s| s.as_str()).collect();
        let output = self.executor.capture("yum", &self.program, &args).await?;
        debug!("yum 输出 {} 字节", output.len());
        Ok(Listing::from(output))
    }
}

use async_trait::async_trait;
use hostprobe_core::{CommandExecutor, Listing, PackageManager};
use hostprobe_error::Result;
use std::borrow::Cow;
use tracing::debug;

const PROGRAM: &str = "dpkg";
const LIST_ARGS: &[&str] = &["-l"];

/// Debian/Ubuntu 系的包管理器，通过 `dpkg -l` 列出已安装的包
pub struct DpkgManager {
    executor: CommandExecutor,
    program: String,
    args: Vec<String>,
}

impl DpkgManager {
    pub fn new(executor: CommandExecutor) -> Self {
        Self::with_command(executor, PROGRAM, LIST_ARGS)
    }

    /// 使用自定义命令代替 `dpkg -l`
    pub fn with_command(executor: CommandExecutor, program: &str, args: &[&str]) -> Self {
        Self {
            executor,
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }
}

#[async_trait]
impl PackageManager for DpkgManager {
    fn name(&self) -> &str {
        "dpkg"
    }

    /// Debian 包名使用连字符而不是下划线
    fn normalize<'a>(&self, fragment: &'a str) -> Cow<'a, str> {
        if fragment.contains('_') {
            Cow::Owned(fragment.replace('_', "-"))
        } else {
            Cow::Borrowed(fragment)
        }
    }

    async fn list_installed(&self) -> Result<Listing> {
        let args: Vec<&str> = self.args.iter().map(|s| s.as_str()).collect();
        let output = self.executor.capture("dpkg", &self.program, &args).await?;
        debug!("dpkg 输出 {} 字节", output.len());
        Ok(Listing::from(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dpkg_manager_creation() {
        let manager = DpkgManager::new(CommandExecutor::default());
        assert_eq!(manager.name(), "dpkg");
        assert_eq!(manager.program, "dpkg");
        assert_eq!(manager.args, vec!["-l"]);
    }

    #[test]
    fn test_normalize_replaces_underscores() {
        let manager = DpkgManager::new(CommandExecutor::default());
        assert_eq!(manager.normalize("ds_agent"), "ds-agent");
        assert_eq!(manager.normalize("some_long_name"), "some-long-name");
        assert!(matches!(manager.normalize("cortex"), Cow::Borrowed("cortex")));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_contains_uses_normalized_fragment() {
        let manager = DpkgManager::with_command(
            CommandExecutor::default(),
            "sh",
            &["-c", "printf 'ii  ds-agent  20.0.0-1234  amd64  Deep Security Agent\\n'"],
        );
        assert!(manager.contains("ds_agent").await.unwrap());
        assert!(!manager.contains("cortex").await.unwrap());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_missing_binary_is_an_error() {
        let manager = DpkgManager::with_command(
            CommandExecutor::default(),
            "hostprobe-no-such-dpkg",
            &["-l"],
        );
        assert!(manager.list_installed().await.is_err());
    }
}

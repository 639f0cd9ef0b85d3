use crate::manager::PackageManager;
use tracing::debug;

/// 单个片段的检查结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub fragment: String,
    /// 命中该片段的包管理器名称
    pub matched_by: Option<String>,
}

impl CheckResult {
    pub fn installed(&self) -> bool {
        self.matched_by.is_some()
    }
}

/// 按顺序询问每个包管理器，第一个命中即返回
///
/// 任何包管理器的错误都视为"未找到"，检查继续进行。
pub struct PresenceChecker {
    managers: Vec<Box<dyn PackageManager>>,
}

impl PresenceChecker {
    pub fn new(managers: Vec<Box<dyn PackageManager>>) -> Self {
        Self { managers }
    }

    pub fn manager_names(&self) -> Vec<&str> {
        self.managers.iter().map(|m| m.name()).collect()
    }

    pub async fn check(&self, fragment: &str) -> CheckResult {
        for manager in &self.managers {
            match manager.contains(fragment).await {
                Ok(true) => {
                    debug!("{} 命中 '{}'", manager.name(), fragment);
                    return CheckResult {
                        fragment: fragment.to_string(),
                        matched_by: Some(manager.name().to_string()),
                    };
                }
                Ok(false) => debug!("{} 未找到 '{}'", manager.name(), fragment),
                Err(err) => debug!("{} 查询失败，视为未找到: {}", manager.name(), err),
            }
        }

        CheckResult {
            fragment: fragment.to_string(),
            matched_by: None,
        }
    }

    pub async fn is_installed(&self, fragment: &str) -> bool {
        self.check(fragment).await.installed()
    }
}

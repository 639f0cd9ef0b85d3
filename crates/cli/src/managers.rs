use hostprobe_core::{CommandExecutor, PackageManager};
use hostprobe_dpkg::DpkgManager;
use hostprobe_error::{ProbeError, Result};
use hostprobe_yum::YumManager;

/// 探测顺序：先 Debian 系，再 RHEL 系
pub const MANAGER_NAMES: [&str; 2] = ["dpkg", "yum"];

/// 未指定任何包时检查的默认片段
pub const DEFAULT_PACKAGES: [&str; 3] = ["ds_agent", "cortex", "opsramp"];

/// 创建包管理器实例
///
/// # 参数
///
/// * `name` - 包管理器名称
/// * `executor` - 执行列表命令所用的执行器
pub fn create_manager(name: &str, executor: CommandExecutor) -> Option<Box<dyn PackageManager>> {
    match name {
        "dpkg" => Some(Box::new(DpkgManager::new(executor))),
        "yum" => Some(Box::new(YumManager::new(executor))),
        _ => None,
    }
}

/// 按固定顺序创建所选的包管理器，`selected` 为空时创建全部
pub fn create_managers(
    selected: &[String],
    executor: CommandExecutor,
) -> Result<Vec<Box<dyn PackageManager>>> {
    if let Some(unknown) = selected
        .iter()
        .find(|name| !MANAGER_NAMES.contains(&name.as_str()))
    {
        return Err(ProbeError::UnknownManager {
            name: unknown.clone(),
        });
    }

    Ok(MANAGER_NAMES
        .iter()
        .filter(|name| selected.is_empty() || selected.iter().any(|s| s == *name))
        .filter_map(|name| create_manager(name, executor))
        .collect())
}

/// 命令行未给出片段时使用默认列表
pub fn resolve_packages(packages: Vec<String>) -> Vec<String> {
    if packages.is_empty() {
        DEFAULT_PACKAGES.iter().map(|name| name.to_string()).collect()
    } else {
        packages
    }
}

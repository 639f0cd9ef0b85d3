use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("包管理器未找到: {name}")]
    ManagerNotFound { name: String },

    #[error("未知的包管理器: {name}")]
    UnknownManager { name: String },

    #[error("命令执行失败: {manager} '{command}' (退出码: {exit_code})")]
    CommandFailed {
        manager: String,
        command: String,
        exit_code: i32,
    },

    #[error("命令超时: {manager} '{command}' ({seconds} 秒)")]
    CommandTimeout {
        manager: String,
        command: String,
        seconds: u64,
    },

    #[error("无法解析主机名: {reason}")]
    HostnameUnresolved { reason: String },

    #[error("IO错误")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ProbeError>;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum Error {
    /// Logging setup error
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// 日志初始化错误
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Log file could not be opened
    #[error("Failed to open log file {path}: {reason}")]
    OpenFailed { path: PathBuf, reason: String },

    /// Global logger already installed
    #[error("Failed to install logger: {reason}")]
    InstallFailed { reason: String },
}

/// 应用程序 Result 类型别名
pub type Result<T> = std::result::Result<T, Error>;

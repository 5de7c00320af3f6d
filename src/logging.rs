use crate::error::{Error, LoggingError, Result};
use chrono::Local;
use log::{LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// 格式化单条日志记录：级别、时间戳、logger 名、模块路径:行号、消息
pub fn format_record(record: &Record) -> String {
    format!(
        "[{}]: {} - {} - {}:{} - {}\n",
        record.level(),
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        record.target(),
        record.module_path().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}

/// 初始化日志系统
///
/// 固定 INFO 级别，所有记录同时写入日志文件与 stdout。
pub fn init_logging(path: &Path) -> Result<()> {
    // 创建追加模式日志文件，使用 Arc<Mutex<File>> 作为共享 writer
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            Error::Logging(LoggingError::OpenFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        })?;

    let shared_file = Arc::new(Mutex::new(file));

    // 自定义简单 Logger，写入文件与 stdout
    struct DualLogger {
        level: LevelFilter,
        file: Arc<Mutex<std::fs::File>>,
    }

    impl log::Log for DualLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= self.level
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }

            let msg = format_record(record);

            // 写到 stdout
            let _ = std::io::stdout().write_all(msg.as_bytes());

            // 写到文件
            if let Ok(mut f) = self.file.lock() {
                let _ = f.write_all(msg.as_bytes());
            }
        }

        fn flush(&self) {}
    }

    let logger = DualLogger {
        level: LevelFilter::Info,
        file: shared_file,
    };

    // 注册 logger
    log::set_max_level(LevelFilter::Info);
    log::set_boxed_logger(Box::new(logger)).map_err(|e| {
        Error::Logging(LoggingError::InstallFailed {
            reason: e.to_string(),
        })
    })?;

    Ok(())
}

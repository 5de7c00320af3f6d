//! 公共常量
//! 提供：
//! - 设置加载器读取的环境变量名
//! - 应用日志输出文件名

/// 排除日志级别列表环境变量（逗号分隔）
pub const ENV_EXCLUDED_LOG_LEVEL_NAMES: &str = "LOGGING_EXCLUDED_LOG_LEVEL_NAMES";

/// 数据库连接参数环境变量
pub const ENV_DATABASE_HOST: &str = "DATABASE_HOST";
pub const ENV_DATABASE_NAME: &str = "DATABASE_NAME";
pub const ENV_DATABASE_USER: &str = "DATABASE_USER";
pub const ENV_DATABASE_PORT: &str = "DATABASE_PORT";
pub const ENV_DATABASE_PASSWORD: &str = "DATABASE_PASSWORD";

/// 测试环境标记环境变量
pub const ENV_TEST_ENV: &str = "TEST_ENV";

/// 应用日志输出文件名（写入当前工作目录）
pub const LOG_FILE: &str = "debug.log";

//! 环境驱动的设置加载
//!
//! 启动时构造一次 `Settings`，之后只读传递，不依赖全局可变状态。
//! 缺失的环境变量静默降级为空值，不做任何校验。

use crate::constants::{
    ENV_DATABASE_HOST, ENV_DATABASE_NAME, ENV_DATABASE_PASSWORD, ENV_DATABASE_PORT,
    ENV_DATABASE_USER, ENV_EXCLUDED_LOG_LEVEL_NAMES, ENV_TEST_ENV,
};
use std::env;

/// 进程级设置
#[derive(Debug, Clone)]
pub struct Settings {
    /// 排除的日志级别名称（来自逗号分隔的环境变量）
    pub excluded_log_level_names: Vec<String>,
    /// 数据库连接参数（仅收集，不建立连接）
    pub database: DatabaseProperties,
    /// 测试环境标记
    pub test_env: Option<String>,
}

impl Settings {
    /// 加载可选的 .env 文件后读取设置。
    /// 已存在的环境变量优先于文件内容；文件缺失时静默跳过。
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// 仅从当前进程环境读取设置
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 从任意键值查找函数读取设置
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            excluded_log_level_names: parse_excluded_log_levels(
                get(ENV_EXCLUDED_LOG_LEVEL_NAMES).as_deref(),
            ),
            database: DatabaseProperties::from_lookup(&get),
            test_env: get(ENV_TEST_ENV),
        }
    }
}

/// 数据库连接参数：五个固定键，值为原样字符串或缺失
#[derive(Debug, Clone, Default)]
pub struct DatabaseProperties {
    pub host: Option<String>,
    pub dbname: Option<String>,
    pub user: Option<String>,
    pub port: Option<String>,
    pub pwd: Option<String>,
}

impl DatabaseProperties {
    /// 从当前进程环境读取连接参数
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 从任意键值查找函数读取连接参数
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: get(ENV_DATABASE_HOST),
            dbname: get(ENV_DATABASE_NAME),
            user: get(ENV_DATABASE_USER),
            port: get(ENV_DATABASE_PORT),
            pwd: get(ENV_DATABASE_PASSWORD),
        }
    }

    /// 以固定顺序返回五个键值对
    pub fn as_pairs(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("host", self.host.as_deref()),
            ("dbname", self.dbname.as_deref()),
            ("user", self.user.as_deref()),
            ("port", self.port.as_deref()),
            ("pwd", self.pwd.as_deref()),
        ]
    }
}

/// 拆分排除日志级别列表：按逗号分隔，逐项去空白并转大写。
/// 变量未设置或为空时结果恰为 `[""]`，是拆分运算的固有产物，按原样保留。
pub fn parse_excluded_log_levels(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or("")
        .split(',')
        .map(|item| item.trim().to_uppercase())
        .collect()
}

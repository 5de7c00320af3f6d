use crate::cli::opts::Cli;
use crate::error::Result;
use crate::settings::Settings;
use log::info;

/// 固定消息模板，缺省参数以字面量 None 呈现
pub fn render_message(first: Option<&str>, second: Option<&str>) -> String {
    format!(
        "APP running. {} - {}",
        first.unwrap_or("None"),
        second.unwrap_or("None")
    )
}

/// 运行入口：输出单条日志记录
///
/// 排除日志级别列表仅作为展示值输出，不参与任何过滤。
pub fn handle_run(cli: &Cli, settings: &Settings) -> Result<()> {
    info!(
        "{}. test env: {}. excluded log levels: {:?}",
        render_message(cli.first.as_deref(), cli.second.as_deref()),
        settings.test_env.as_deref().unwrap_or("None"),
        settings.excluded_log_level_names
    );

    Ok(())
}

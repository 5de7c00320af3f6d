/// 直接打印变体：不配置日志系统，消息直接写到标准输出
///
/// 运行方式:
/// cargo run --example plain -- --first A --second B
use app_bootstrap::cli::opts::Cli;
use app_bootstrap::cli::run::render_message;
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    println!(
        "{}",
        render_message(cli.first.as_deref(), cli.second.as_deref())
    );
}

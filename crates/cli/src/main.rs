use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use hostprobe_cli::managers::{create_managers, resolve_packages};
use hostprobe_cli::report::run_report;
use hostprobe_core::{CommandExecutor, HostIdentifier, PresenceChecker, DEFAULT_COMMAND_TIMEOUT};
use hostprobe_error::ProbeError;
use tokio::time::Duration;
use tracing::info;

const EXIT_USAGE: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "hostprobe", version = env!("CARGO_PKG_VERSION"), about = "检查本机是否安装了指定的软件包")]
struct Cli {
    /// 要检查的包名片段（默认: ds_agent cortex opsramp）
    #[arg(value_parser = clap::builder::NonEmptyStringValueParser::new())]
    packages: Vec<String>,

    /// 只使用指定的包管理器（dpkg、yum），可重复
    #[arg(short, long = "manager")]
    managers: Vec<String>,

    /// 每条外部命令的超时秒数，至少 1 秒
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_COMMAND_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    /// 不输出颜色控制序列
    #[arg(long)]
    no_color: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化 tracing，日志写到 stderr，stdout 只留给报告
    let level = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // 不做终端检测，始终输出颜色序列
    colored::control::set_override(!cli.no_color);

    let executor = CommandExecutor::new(Duration::from_secs(cli.timeout));
    let managers = match create_managers(&cli.managers, executor) {
        Ok(managers) => managers,
        Err(err @ ProbeError::UnknownManager { .. }) => {
            eprintln!("{}", format!("错误: {}", err).bright_red());
            std::process::exit(EXIT_USAGE);
        }
        Err(err) => return Err(err.into()),
    };
    let checker = PresenceChecker::new(managers);
    let packages = resolve_packages(cli.packages);

    let host = HostIdentifier::new(executor)
        .resolve()
        .await
        .context("解析主机名失败")?;
    info!(
        "使用包管理器 {:?} 检查 {} 个包",
        checker.manager_names(),
        packages.len()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_report(&host, &packages, &checker, &mut out)
        .await
        .context("写入报告失败")?;

    Ok(())
}

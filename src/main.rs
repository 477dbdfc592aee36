// ==========================================
// 生产排产方案校验器 - 命令行入口
// ==========================================
// 退出码:
// - 0: 校验通过
// - 1: 校验未通过（逐行输出全部违规）
// - 2: 未提供路径 / 配置或文档无法加载（不进入校验引擎）
// ==========================================

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use plan_validator::{logging, PlanLoader, PlanValidator, ValidatorConfig};

const EXIT_PASSED: u8 = 0;
const EXIT_FAILED: u8 = 1;
const EXIT_UNLOADABLE: u8 = 2;

/// 报告输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// 结论 + 每条违规一行
    Text,
    /// JSON 校验报告
    Json,
}

/// Validate a production schedule plan against quantity, equipment,
/// downtime/holiday and double-booking rules.
#[derive(Parser, Debug)]
#[command(name = "plan-validator")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the plan JSON document
    plan: PathBuf,

    /// Validator config file (JSON)
    #[arg(short, long, env = "PLAN_VALIDATOR_CONFIG")]
    config: Option<PathBuf>,

    /// Output format for the validation report
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    log_json: bool,
}

fn main() -> ExitCode {
    // 缺少路径时 clap 输出用法并以退出码 2 结束
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            println!("{:#}", err);
            ExitCode::from(EXIT_UNLOADABLE)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<u8> {
    let config =
        ValidatorConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    logging::init(&config.log_level, cli.log_json);

    tracing::debug!(version = plan_validator::VERSION, plan = %cli.plan.display(), "启动方案校验");
    match &config.source {
        Some(path) => tracing::debug!(path = %path.display(), "配置文件已加载"),
        None => tracing::debug!("未找到配置文件，使用内置默认值"),
    }

    let plan = PlanLoader::new(&config)
        .load_file(&cli.plan)
        .context("Failed to load JSON")?;

    let source = cli
        .plan
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.plan.display().to_string());

    let report = PlanValidator::new(&config)
        .validate(&plan)
        .with_source(source);

    match cli.format {
        OutputFormat::Text => println!("{}", report.render_text()),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        ),
    }

    Ok(if report.is_valid() {
        EXIT_PASSED
    } else {
        EXIT_FAILED
    })
}

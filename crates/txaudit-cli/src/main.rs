use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;
use txaudit_core::{
    filter_findings, load_options, scan_csv, summarize, write_json, ScanOptions, ScanStats,
};

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "txaudit", version, about = "交易合规扫描器")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 扫描交易数据集并输出结果
    Scan {
        /// 输入数据集（CSV，首行为表头）
        #[arg(long)]
        input: PathBuf,

        /// 输出文件（format=json 时写入）
        #[arg(long, default_value = "./result.json")]
        output: PathBuf,

        /// 输出形式：text（stdout 汇总）或 json（写文件）
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// 文本汇总的最大行数（缺省取配置文件或 200）
        #[arg(long)]
        limit: Option<usize>,

        /// 同时输出 OK 的结果（默认仅保留 SUSPECT/VIOLATION）
        #[arg(long)]
        include_ok: bool,

        /// 线程数（"auto"=CPU 核心数；1 走串行）
        #[arg(long, default_value = "auto")]
        threads: String,

        /// 选项文件路径（TOML）；命令行参数优先于文件内容
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { input, output, format, limit, include_ok, threads, config } => {
            info!(?input, %format, "starting scan");

            // 选项合并：默认值 ← 配置文件 ← 命令行参数
            let mut opts = match &config {
                Some(path) => load_options(path).context("load options file")?,
                None => ScanOptions::default(),
            };
            if let Some(n) = parse_threads(&threads) {
                opts.threads = Some(n);
            }
            if let Some(n) = limit {
                opts.limit = n;
            }
            if include_ok {
                opts.only_not_ok = false;
            }

            let findings = scan_csv(&input, &opts).context("scan failed")?;
            let stats = ScanStats::collect(&findings);
            let findings = filter_findings(findings, opts.only_not_ok);

            match format.as_str() {
                "json" => {
                    // 以缓冲方式打开输出文件，流式写入 JSON
                    let mut out =
                        BufWriter::new(File::create(&output).context("create output file")?);
                    write_json(&findings, &mut out)?;
                    out.flush().ok();
                    info!(?output, "report written");
                }
                _ => {
                    println!("{}", summarize(&findings, opts.limit));
                }
            }

            info!(
                records_scanned = stats.records_scanned,
                violations = stats.violations,
                suspects = stats.suspects,
                "scan finished"
            );
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 支持通过环境变量 RUST_LOG 控制日志等级，如：RUST_LOG=debug
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 解析线程参数；"auto" 表示不覆盖（自动 = CPU 核数）
fn parse_threads(s: &str) -> Option<usize> {
    if s.eq_ignore_ascii_case("auto") {
        return None;
    }
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Some(n),
        _ => None,
    }
}

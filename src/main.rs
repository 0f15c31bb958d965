use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use place_match::location::transliterate::{to_roman, to_roman_with_tone};
use place_match::{PlaceEngine, ResolverConfig};

/// 中文省 / 市地名匹配工具
///
/// 容忍缺失的 "省/市/县" 后缀、部分输入以及拼音输入法造成的同音错字。
///
/// Examples:
///   placematch provinces
///   placematch cities 北京市
///   placematch province 广东
///   placematch city 北京市 平谷区
///   placematch resolve "北京 平谷"
///   placematch validate --province 伤害 --city 黄浦
#[derive(Parser)]
#[command(name = "placematch", version, about, long_about = None)]
struct Cli {
    /// 配置文件路径（默认使用系统配置目录）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 自定义地名表 JSON（覆盖配置文件）
    #[arg(long, global = true)]
    gazetteer: Option<PathBuf>,

    /// 输出调试日志
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 列出全部省份
    Provinces,
    /// 列出省份下的城市
    Cities { province: String },
    /// 匹配省份
    Province { input: String },
    /// 在指定省份内匹配城市
    City { province: String, input: String },
    /// 解析自由文本（如 "北京 平谷"）
    Resolve { text: String },
    /// 校验出生地字段
    Validate {
        #[arg(long)]
        province: Option<String>,
        #[arg(long)]
        city: Option<String>,
    },
    /// 显示拼音转换结果
    Roman { text: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志（输出到 stderr，stdout 只输出 JSON）
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let mut config = match &cli.config {
        Some(path) => ResolverConfig::load_from_path(path)?,
        None => ResolverConfig::load()?,
    };
    if let Some(path) = cli.gazetteer.clone() {
        config.gazetteer_path = Some(path);
    }

    let engine = PlaceEngine::from_config(&config)?;

    let output = match &cli.command {
        Command::Provinces => serde_json::to_value(engine.provinces())?,
        Command::Cities { province } => {
            let cities = engine.cities(province)?;
            serde_json::json!({ "province": province, "cities": cities })
        }
        Command::Province { input } => serde_json::to_value(engine.match_province(input))?,
        Command::City { province, input } => {
            serde_json::to_value(engine.match_city(input, province))?
        }
        Command::Resolve { text } => {
            let resolution = engine.resolve(text);
            serde_json::json!({
                "matched_name": resolution.matched_name(),
                "ratio": resolution.ratio,
                "province": resolution.province,
                "city": resolution.city,
            })
        }
        Command::Validate { province, city } => {
            match engine.validate(province.as_deref(), city.as_deref()) {
                Ok(location) => serde_json::to_value(location)?,
                Err(e) => {
                    let output = serde_json::json!({
                        "field": e.field(),
                        "message": e.to_string(),
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                    std::process::exit(1);
                }
            }
        }
        Command::Roman { text } => serde_json::json!({
            "input": text,
            "roman": to_roman(text),
            "with_tone": to_roman_with_tone(text),
        }),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

//! 选项文件加载（TOML）
//!
//! 规则表是固定的，不走配置；配置文件只承载扫描/输出旋钮，
//! 字段全部可缺省，缺省值与 `ScanOptions::default()` 一致。
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

use crate::options::ScanOptions;

/// 配置文件结构（字段均可缺省）
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    threads: Option<usize>,
    #[serde(default)]
    only_not_ok: Option<bool>,
    #[serde(default)]
    limit: Option<usize>,
}

/// 从 TOML 配置文件加载扫描选项；缺省字段回落到默认值
pub fn load_options(path: &Path) -> Result<ScanOptions> {
    let txt = std::fs::read_to_string(path)?;
    parse_options(&txt)
}

fn parse_options(txt: &str) -> Result<ScanOptions> {
    let parsed: ConfigFile = toml::from_str(txt)?;
    let base = ScanOptions::default();
    Ok(ScanOptions {
        threads: parsed.threads.or(base.threads),
        only_not_ok: parsed.only_not_ok.unwrap_or(base.only_not_ok),
        limit: parsed.limit.unwrap_or(base.limit),
    })
}

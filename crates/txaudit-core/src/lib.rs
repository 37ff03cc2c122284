//! 交易合规扫描核心库
//!
//! 设计要点：
//! - 单向流水线：Loader（CSV 整表读入）→ 规则引擎（逐行评估）→ Reporter（过滤/排序/输出）。
//! - 规则表为固定的带标签变体列表（id + 谓词），逐条独立评估，互不依赖。
//! - 分级策略与规则评估解耦：status 仅由“已触发规则集合”决定，可单独测试。
//! - 逐行评估无副作用、无行间依赖；threads>1 时走 Rayon 并行，输出仍按行序还原。
//! - 加载失败为致命错误（不产生部分结果）；单字段解析失败就地吸收（valor 退化为 0.0）。

mod config;
mod engine;
mod findings;
mod loader;
mod normalize;
mod options;
mod record;
mod report;
mod rules;
mod scan;

// 对外暴露的三类入口：扫描、过滤、输出（外部协作方只依赖这些）
pub use config::load_options;
pub use engine::{check_record, classify};
pub use findings::{Evidence, Finding, Status};
pub use loader::{load_records, LoadError};
pub use options::{ScanOptions, ScanStats};
pub use record::Record;
pub use report::{filter_findings, summarize, to_json, write_json};
pub use rules::{RuleSet, RuleSeverity};
pub use scan::scan_csv;

//! 扫描选项与统计信息（模块）
use crate::findings::{Finding, Status};

/// 扫描选项
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// 线程数：None 表示自动（等于 CPU 核数）；Some(1) 走串行
    pub threads: Option<usize>,
    /// 过滤开关：true 时仅保留非 OK 的结果（协作方默认行为）
    pub only_not_ok: bool,
    /// 文本汇总的最大行数
    pub limit: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            threads: None,
            only_not_ok: true,
            limit: 200,
        }
    }
}

/// 扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone)]
pub struct ScanStats {
    pub records_scanned: usize,
    pub violations: usize,
    pub suspects: usize,
}

impl ScanStats {
    /// 从完整结果列表统计各状态数量
    pub fn collect(findings: &[Finding]) -> Self {
        let mut stats = Self {
            records_scanned: findings.len(),
            ..Self::default()
        };
        for f in findings {
            match f.status {
                Status::Violation => stats.violations += 1,
                Status::Suspect => stats.suspects += 1,
                Status::Ok => {}
            }
        }
        stats
    }
}

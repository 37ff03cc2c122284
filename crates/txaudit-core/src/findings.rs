//! 扫描结果类型与汇总排序
use std::fmt;

use serde::Serialize;

/// 记录的合规状态（互斥，三态）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Ok,
    Suspect,
    Violation,
}

impl Status {
    /// 汇总排序用的等级：VIOLATION 最靠前
    pub(crate) fn rank(self) -> u8 {
        match self {
            Status::Violation => 0,
            Status::Suspect => 1,
            Status::Ok => 2,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Ok => "OK",
            Status::Suspect => "SUSPECT",
            Status::Violation => "VIOLATION",
        };
        f.write_str(s)
    }
}

/// 证据快照：除 valor 为解析后的数值外，其余字段保留原始值
/// 仅用于审计/展示，规则评估不会回读证据
#[derive(Debug, Clone, Serialize)]
pub struct Evidence {
    pub d_transacao: String,
    pub data: Option<String>,
    pub funcionario: Option<String>,
    pub cargo: Option<String>,
    pub descricao: Option<String>,
    pub valor: f64,
    pub categoria: Option<String>,
    pub departamento: Option<String>,
}

/// 单条记录的扫描结果（构建后不可变）
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub d_transacao: String,
    pub status: Status,
    /// 已触发规则标识，插入顺序 = 规则评估顺序
    pub regras_acionadas: Vec<&'static str>,
    pub explicacao_curta: String,
    pub evidencias: Evidence,
}

/// 汇总用稳定排序：status 等级升序 → valor 降序
pub(crate) fn sort_findings_stable(findings: &mut Vec<&Finding>) {
    findings.sort_by(|a, b| {
        use std::cmp::Ordering;
        match a.status.rank().cmp(&b.status.rank()) {
            Ordering::Equal => b.evidencias.valor.total_cmp(&a.evidencias.valor),
            o => o,
        }
    });
}

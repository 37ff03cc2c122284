//! 结果过滤、文本汇总与结构化输出
use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::findings::{sort_findings_stable, Finding, Status};

/// 结构化输出的顶层包裹：全部结果挂在单一键 `resultados` 下
#[derive(Debug, Serialize)]
struct ScanReport<'a> {
    resultados: &'a [Finding],
}

/// 过滤：only_not_ok 为 true 时仅保留 SUSPECT/VIOLATION（协作方默认）
pub fn filter_findings(findings: Vec<Finding>, only_not_ok: bool) -> Vec<Finding> {
    if !only_not_ok {
        return findings;
    }
    findings.into_iter().filter(|f| f.status != Status::Ok).collect()
}

/// 人读汇总：按（status 等级升序，valor 降序）稳定排序后截断到 limit，
/// 每条结果一行
pub fn summarize(findings: &[Finding], limit: usize) -> String {
    let mut ordered: Vec<&Finding> = findings.iter().collect();
    sort_findings_stable(&mut ordered);
    ordered.truncate(limit);

    let mut lines = Vec::with_capacity(ordered.len());
    for f in ordered {
        let e = &f.evidencias;
        lines.push(format!(
            "- [{}] {} | {} | {} | ${} | {} | regras={:?}",
            f.status,
            f.d_transacao,
            e.data.as_deref().unwrap_or("-"),
            e.funcionario.as_deref().unwrap_or("-"),
            e.valor,
            e.descricao.as_deref().unwrap_or("-"),
            f.regras_acionadas,
        ));
    }
    lines.join("\n")
}

/// 机读输出（JSON Value 形式），保持传入顺序，不重排
pub fn to_json(findings: &[Finding]) -> serde_json::Value {
    serde_json::json!({ "resultados": findings })
}

/// 机读输出：以 JSON 形式流式写入 `out`
pub fn write_json(findings: &[Finding], out: &mut dyn Write) -> Result<()> {
    serde_json::to_writer(out, &ScanReport { resultados: findings })?;
    Ok(())
}

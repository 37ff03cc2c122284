//! 规则评估引擎（逐条记录）
//!
//! 评估流程：归一化一次 → 按表序逐条规则求值 → 分级 → 组装 Finding。
//! 本模块对调用方不抛错：所有谓词均为对已兜底字段的纯检查。
use std::collections::HashSet;

use crate::findings::{Evidence, Finding, Status};
use crate::record::{NormRecord, Record};
use crate::rules::RuleSet;

/// 对单条记录评估整张规则表，返回 Finding
/// `idx` 为零基行号，用于缺失标识时合成 `TX_IDX_{idx}`
pub fn check_record(record: &Record, idx: usize, rules: &RuleSet) -> Finding {
    let tx_id = record.tx_id(idx);
    let norm = NormRecord::from_record(record);

    let mut regras: Vec<&'static str> = Vec::new();
    for rule in rules.rules() {
        if rule.matches(&norm) {
            regras.push(rule.id);
        }
    }

    let status = classify(&regras, rules.violation_ids());
    let explicacao_curta = match status {
        Status::Ok => "Nenhuma regra acionada.".to_string(),
        _ => format!("Regras acionadas: {}", regras.join(", ")),
    };

    let evidencias = Evidence {
        d_transacao: tx_id.clone(),
        data: record.data.clone(),
        funcionario: record.funcionario.clone(),
        cargo: record.cargo.clone(),
        descricao: record.descricao.clone(),
        valor: norm.valor,
        categoria: record.categoria.clone(),
        departamento: record.departamento.clone(),
    };

    Finding {
        d_transacao: tx_id,
        status,
        regras_acionadas: regras,
        explicacao_curta,
        evidencias,
    }
}

/// 分级策略：仅由“已触发规则集合”决定，与评估顺序无关
/// - 任一 direct-violation 命中 → VIOLATION（覆盖建议级命中）
/// - 否则任一规则命中 → SUSPECT
/// - 否则 → OK
pub fn classify(regras: &[&'static str], violation_ids: &HashSet<&'static str>) -> Status {
    if regras.iter().any(|r| violation_ids.contains(r)) {
        Status::Violation
    } else if !regras.is_empty() {
        Status::Suspect
    } else {
        Status::Ok
    }
}

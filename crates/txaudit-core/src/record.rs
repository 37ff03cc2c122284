//! 交易记录（原始行）与归一化视图
use serde::Deserialize;

use crate::normalize::{coerce_amount, norm};

/// 数据集的一行（原始值，未归一化；列名与数据集表头一致）
/// 所有列均可缺失；多余的列在反序列化时被忽略
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub d_transacao: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub funcionario: Option<String>,
    #[serde(default)]
    pub cargo: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub valor: Option<String>,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub departamento: Option<String>,
}

impl Record {
    /// 交易标识：优先取 d_transacao（trim 后非空），否则按行号合成 `TX_IDX_{n}`
    /// 合成标识在同一次扫描内稳定且唯一（行号为零基）
    pub fn tx_id(&self, fallback_idx: usize) -> String {
        match self.d_transacao.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => format!("TX_IDX_{fallback_idx}"),
        }
    }
}

/// 归一化视图：每条记录在规则评估前计算一次
pub(crate) struct NormRecord {
    pub(crate) descricao: String,
    pub(crate) categoria: String,
    pub(crate) valor: f64,
}

impl NormRecord {
    pub(crate) fn from_record(record: &Record) -> Self {
        Self {
            descricao: norm(record.descricao.as_deref()),
            categoria: norm(record.categoria.as_deref()),
            valor: coerce_amount(record.valor.as_deref()),
        }
    }
}

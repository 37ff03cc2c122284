//! 字段归一化与金额解析
//!
//! 所有参与规则匹配的文本统一走 `norm`：去除首尾空白 + 小写化，缺失按空串处理。
//! 金额走 `coerce_amount` 两段式解析，解析失败不报错，退化为 0.0（软失败）。

/// 文本归一化：trim + 小写；None 视为空串
pub(crate) fn norm(s: Option<&str>) -> String {
    s.unwrap_or("").trim().to_lowercase()
}

/// 金额两段式解析：
/// 1) 直接按 f64 解析（已是 `123.45` 这类标准小数时在此命中）；
/// 2) 失败则按 pt-BR 格式处理：删除全部 `.`（千位分隔），`,` 替换为 `.`（小数点）再解析；
/// 3) 仍失败返回 0.0。
///
/// 注意第 2 步对 `.` 的删除是无条件的（`"1.234,56"` → 1234.56）；
/// 这意味着直接解析失败且含多个 `.` 的串会被破坏性改写后再尝试。
pub(crate) fn coerce_amount(raw: Option<&str>) -> f64 {
    let s = raw.unwrap_or("").trim();
    if let Ok(v) = s.parse::<f64>() {
        return v;
    }
    let fallback = s.replace('.', "").replace(',', ".");
    fallback.trim().parse::<f64>().unwrap_or(0.0)
}

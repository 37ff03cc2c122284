//! 固定规则表（政策规则）
//!
//! 设计要点：
//! - 规则 = 标识 + 严重级别 + 谓词变体（RuleKind），按固定顺序存放于列表。
//! - 词表类谓词使用 Aho-Corasick 多模式自动机做子串包含判断：
//!   描述文本已归一化为小写，词表亦全小写，无需大小写折叠；
//!   不做分词/词边界处理，词条命中在更长单词内部同样算命中。
//! - 直接违规规则集合在构建时预先收集，供分级策略查询。
use std::collections::HashSet;

use aho_corasick::AhoCorasick;

use crate::record::NormRecord;

/// TI/技术类词表（葡/英双语变体）
const TERMOS_TI: &[&str] = &[
    "servidor", "server", "aws", "licenca", "licença", "software",
    "tablet", "gadget", "cloud", "hosting", "ti",
];

/// 关键词黑名单（规则标识 + 词表），每条独立成规则
const LISTAS_NEGRAS: &[(&str, &[&str])] = &[
    ("ENTRETENIMENTO_HOOTERS", &["hooters"]),
    ("HOTEL_NAO_REEMBOLSAVEL", &[
        "frigobar", "mini bar", "minibar", "pay-per-view", "pay per view", "ppv", "spa",
    ]),
    ("CARRO_CONVERSIVEL", &[
        "conversivel", "conversível", "sebring", "chrysler sebring", "convertible",
    ]),
    ("LISTA_NEGRA_MAGICA", &[
        "kit de magica", "kit de mágica", "magica", "mágica", "algemas", "correntes",
        "fumaça", "fumaca", "pombos", "baralhos marcados", "stripper", "strippers",
    ]),
    ("LISTA_NEGRA_ARMAMENTO", &[
        "arma", "armamento", "airsoft", "katana", "espada", "nunchaku",
        "estrela ninja", "spray de pimenta", "camuflagem",
    ]),
    ("RYAN_JAN_NEGOCIO_PESSOAL", &[
        "wuphf", "dunder infinity", "startup", "start-up", "investimento",
        "rede social", "portal",
    ]),
];

/// 规则严重级别
/// - DirectViolation：命中即 VIOLATION（覆盖其他建议级命中）
/// - Advisory：建议级，命中仅导致 SUSPECT
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSeverity {
    DirectViolation,
    Advisory,
}

/// 谓词变体（对归一化视图求值）
pub(crate) enum RuleKind {
    /// 类别属于给定集合且 valor 严格大于阈值
    CategoriaGenerica {
        categorias: &'static [&'static str],
        min_valor: f64,
    },
    /// valor 落在闭区间 [min, max]
    FaixaValor { min: f64, max: f64 },
    /// valor 严格大于阈值
    ValorAcima { min: f64 },
    /// valor 严格大于阈值且描述包含任一词条
    TermosComValorMinimo { min_valor: f64, termos: AhoCorasick },
    /// 描述包含任一词条（与金额无关）
    ListaNegra { termos: AhoCorasick },
}

/// 单条规则：标识 + 严重级别 + 谓词
pub(crate) struct Rule {
    pub(crate) id: &'static str,
    pub(crate) severity: RuleSeverity,
    pub(crate) kind: RuleKind,
}

impl Rule {
    /// 对单条归一化记录求值；谓词为纯函数，不会失败
    pub(crate) fn matches(&self, r: &NormRecord) -> bool {
        match &self.kind {
            RuleKind::CategoriaGenerica { categorias, min_valor } => {
                categorias.contains(&r.categoria.as_str()) && r.valor > *min_valor
            }
            RuleKind::FaixaValor { min, max } => r.valor >= *min && r.valor <= *max,
            RuleKind::ValorAcima { min } => r.valor > *min,
            RuleKind::TermosComValorMinimo { min_valor, termos } => {
                r.valor > *min_valor && termos.is_match(r.descricao.as_str())
            }
            RuleKind::ListaNegra { termos } => termos.is_match(r.descricao.as_str()),
        }
    }
}

/// 固定顺序的规则集合；direct-violation 标识集合在构建时预收集
pub struct RuleSet {
    pub(crate) rules: Vec<Rule>,
    pub(crate) violation_ids: HashSet<&'static str>,
}

impl RuleSet {
    /// 内置规则表（固定顺序，即评估顺序）
    pub fn builtin() -> Self {
        let mut rules = vec![
            Rule {
                id: "GENERIC_CATEGORY_ABOVE_5",
                severity: RuleSeverity::DirectViolation,
                kind: RuleKind::CategoriaGenerica {
                    categorias: &["outros", "diversos"],
                    min_valor: 5.0,
                },
            },
            Rule {
                id: "TIER_B_REQUIRES_APPROVAL",
                severity: RuleSeverity::Advisory,
                kind: RuleKind::FaixaValor { min: 50.01, max: 500.0 },
            },
            Rule {
                id: "TIER_A_REQUIRES_PO",
                severity: RuleSeverity::Advisory,
                kind: RuleKind::ValorAcima { min: 500.0 },
            },
            Rule {
                id: "IT_ABOVE_100_REQUIRES_HR",
                severity: RuleSeverity::Advisory,
                kind: RuleKind::TermosComValorMinimo {
                    min_valor: 100.0,
                    termos: automaton(TERMOS_TI),
                },
            },
        ];
        for &(id, termos) in LISTAS_NEGRAS {
            rules.push(Rule {
                id,
                severity: RuleSeverity::DirectViolation,
                kind: RuleKind::ListaNegra { termos: automaton(termos) },
            });
        }

        let violation_ids = rules
            .iter()
            .filter(|r| r.severity == RuleSeverity::DirectViolation)
            .map(|r| r.id)
            .collect();

        Self { rules, violation_ids }
    }

    pub(crate) fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// 直接违规规则的标识集合（分级策略的输入之一）
    pub fn violation_ids(&self) -> &HashSet<&'static str> {
        &self.violation_ids
    }
}

/// 由静态词表构建自动机（词表为编译期常量，构建不应失败）
fn automaton(termos: &[&str]) -> AhoCorasick {
    AhoCorasick::new(termos).expect("build aho-corasick")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm_rec(descricao: &str, categoria: &str, valor: f64) -> NormRecord {
        NormRecord {
            descricao: descricao.to_string(),
            categoria: categoria.to_string(),
            valor,
        }
    }

    fn rule<'a>(set: &'a RuleSet, id: &str) -> &'a Rule {
        set.rules().iter().find(|r| r.id == id).unwrap()
    }

    #[test]
    fn builtin_order_and_severity() {
        let set = RuleSet::builtin();
        let ids: Vec<&str> = set.rules().iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec![
                "GENERIC_CATEGORY_ABOVE_5",
                "TIER_B_REQUIRES_APPROVAL",
                "TIER_A_REQUIRES_PO",
                "IT_ABOVE_100_REQUIRES_HR",
                "ENTRETENIMENTO_HOOTERS",
                "HOTEL_NAO_REEMBOLSAVEL",
                "CARRO_CONVERSIVEL",
                "LISTA_NEGRA_MAGICA",
                "LISTA_NEGRA_ARMAMENTO",
                "RYAN_JAN_NEGOCIO_PESSOAL",
            ]
        );
        assert!(set.violation_ids().contains("GENERIC_CATEGORY_ABOVE_5"));
        assert!(set.violation_ids().contains("ENTRETENIMENTO_HOOTERS"));
        assert!(!set.violation_ids().contains("TIER_B_REQUIRES_APPROVAL"));
        assert_eq!(set.violation_ids().len(), 7);
    }

    #[test]
    fn categoria_generica_requires_both_conditions() {
        let set = RuleSet::builtin();
        let r = rule(&set, "GENERIC_CATEGORY_ABOVE_5");
        assert!(r.matches(&norm_rec("", "outros", 5.01)));
        assert!(r.matches(&norm_rec("", "diversos", 100.0)));
        // 阈值为严格大于
        assert!(!r.matches(&norm_rec("", "outros", 5.0)));
        assert!(!r.matches(&norm_rec("", "alimentação", 100.0)));
    }

    #[test]
    fn tier_boundaries() {
        let set = RuleSet::builtin();
        let tier_b = rule(&set, "TIER_B_REQUIRES_APPROVAL");
        let tier_a = rule(&set, "TIER_A_REQUIRES_PO");

        // 50.00 两档都不命中
        assert!(!tier_b.matches(&norm_rec("", "", 50.0)));
        assert!(!tier_a.matches(&norm_rec("", "", 50.0)));
        // 50.01 恰好进入 B 档
        assert!(tier_b.matches(&norm_rec("", "", 50.01)));
        // 500.0 仍是 B 档（A 档为严格大于）
        assert!(tier_b.matches(&norm_rec("", "", 500.0)));
        assert!(!tier_a.matches(&norm_rec("", "", 500.0)));
        // 500.01 仅 A 档
        assert!(!tier_b.matches(&norm_rec("", "", 500.01)));
        assert!(tier_a.matches(&norm_rec("", "", 500.01)));
    }

    #[test]
    fn ti_rule_requires_amount_and_term() {
        let set = RuleSet::builtin();
        let r = rule(&set, "IT_ABOVE_100_REQUIRES_HR");
        assert!(r.matches(&norm_rec("aws cloud hosting licença anual", "", 1200.0)));
        // 金额不足
        assert!(!r.matches(&norm_rec("servidor novo", "", 100.0)));
        // 无词条命中
        assert!(!r.matches(&norm_rec("almoço com cliente", "", 300.0)));
    }

    #[test]
    fn term_match_inside_larger_word() {
        let set = RuleSet::builtin();
        // 无词边界检查："gratificação" 内含 "ti"
        let ti = rule(&set, "IT_ABOVE_100_REQUIRES_HR");
        assert!(ti.matches(&norm_rec("gratificação anual", "", 150.0)));
        // "desarmamento" 内含 "arma"
        let armas = rule(&set, "LISTA_NEGRA_ARMAMENTO");
        assert!(armas.matches(&norm_rec("palestra sobre desarmamento", "", 10.0)));
    }

    #[test]
    fn lista_negra_ignores_amount() {
        let set = RuleSet::builtin();
        let r = rule(&set, "ENTRETENIMENTO_HOOTERS");
        assert!(r.matches(&norm_rec("pagamento hooters happy hour", "", 0.0)));
        assert!(!r.matches(&norm_rec("", "", 1000.0)));
    }

    #[test]
    fn lista_negra_accented_terms() {
        let set = RuleSet::builtin();
        let r = rule(&set, "LISTA_NEGRA_MAGICA");
        assert!(r.matches(&norm_rec("kit de mágica profissional", "", 40.0)));
        assert!(r.matches(&norm_rec("kit de magica profissional", "", 40.0)));
    }
}

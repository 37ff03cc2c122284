//! 扫描主流程与并行调度
use anyhow::{Context, Result};
use std::path::Path;

use crate::engine::check_record;
use crate::findings::Finding;
use crate::loader::load_records;
use crate::options::ScanOptions;
use crate::rules::RuleSet;

/// 扫描整个数据集并按行序返回结果列表
/// - 数据集先整表载入，评估阶段不再发生 I/O
/// - threads>1 时使用 Rayon 并行逐行评估；par_iter 的有序 collect
///   保证输出顺序与串行路径一致（行序还原）
/// - 加载失败向上传播；单条记录的评估不会失败
pub fn scan_csv(path: &Path, opts: &ScanOptions) -> Result<Vec<Finding>> {
    let records = load_records(path).context("load dataset")?;
    let rules = RuleSet::builtin();

    let threads = opts.threads.unwrap_or_else(num_cpus::get);
    if threads > 1 && records.len() > 1 {
        return scan_parallel(&records, &rules, threads);
    }

    // 串行路径
    let findings = records
        .iter()
        .enumerate()
        .map(|(idx, r)| check_record(r, idx, &rules))
        .collect();
    Ok(findings)
}

/// 并行路径：固定大小线程池内 par_iter，按输入下标有序收集
fn scan_parallel(
    records: &[crate::record::Record],
    rules: &RuleSet,
    threads: usize,
) -> Result<Vec<Finding>> {
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("build rayon pool")?;
    let findings = pool.install(|| {
        records
            .par_iter()
            .enumerate()
            .map(|(idx, r)| check_record(r, idx, rules))
            .collect()
    });
    Ok(findings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    fn records(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record {
                descricao: Some(format!("compra {i} frigobar")),
                valor: Some(format!("{}", 10 * i)),
                ..Record::default()
            })
            .collect()
    }

    #[test]
    fn parallel_restores_row_order() {
        let recs = records(64);
        let rules = RuleSet::builtin();

        let serial: Vec<Finding> = recs
            .iter()
            .enumerate()
            .map(|(idx, r)| check_record(r, idx, &rules))
            .collect();
        let parallel = scan_parallel(&recs, &rules, 4).unwrap();

        assert_eq!(serial.len(), parallel.len());
        for (s, p) in serial.iter().zip(parallel.iter()) {
            assert_eq!(s.d_transacao, p.d_transacao);
            assert_eq!(s.status, p.status);
            assert_eq!(s.regras_acionadas, p.regras_acionadas);
        }
    }
}

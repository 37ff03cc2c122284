//! 数据集加载（CSV 整表读入）
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::record::Record;

/// 加载失败（整表级，致命）：不产生部分结果
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed dataset {path:?}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// 读入整个数据集并按行序返回记录列表
/// - 首行为表头；列名未识别的列被忽略，缺失列按 None 兜底
/// - 结构性错误（文件不可读、行列不齐、编码损坏）立即返回错误
pub fn load_records(path: &Path) -> Result<Vec<Record>, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: Record = row.map_err(|e| LoadError::Malformed {
            path: path.to_path_buf(),
            source: e,
        })?;
        records.push(record);
    }
    Ok(records)
}

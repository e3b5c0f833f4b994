//! # 出租车 GPS 日志解析器
//!
//! 解析无表头的逗号分隔 GPS 日志，提取第 3、4 列（经度、纬度）。
//!
//! ## 日志格式说明
//! ```text
//! 10001,2007-02-20 00:02:27,121.423167,31.165233,7,116,0
//! 10001,2007-02-20 00:02:57,121.423167,31.165233,7,116,0
//! ...
//! ```
//!
//! ## 解析规则
//! - 表宽以首个非空行的字段数为准
//! - 后续行字段数多于表宽视为解析失败；少于表宽则缺失字段按缺失值处理
//! - 表宽不足 4 列的文件（含空文件）静默跳过
//! - 经纬度无法转换为数值的行被丢弃
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `models/record.rs`
//! - 使用 `csv` 库读取分隔文本

use crate::error::{Result, UnifyError};
use crate::models::Record;

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 经度列位置（0 起始）
pub const LON_COLUMN: usize = 2;
/// 纬度列位置（0 起始）
pub const LAT_COLUMN: usize = 3;
/// 可提取坐标所需的最少列数
pub const MIN_COLUMNS: usize = 4;

/// 单个文件的提取结果
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// 至少一行有效坐标
    Records(Vec<Record>),
    /// 列数不足（含空文件）
    TooFewColumns,
    /// 列数足够但没有可转换的行
    NoValidRows,
}

/// 宽松数值转换：无法解析或 NaN 视为缺失
pub fn parse_numeric(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// 解析 GPS 日志文件
///
/// 文件句柄在返回前释放，无论成功与否。
pub fn parse_taxi_log_file(path: &Path) -> Result<Extraction> {
    let file = File::open(path).map_err(|e| UnifyError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_taxi_log_reader(file, &path.display().to_string())
}

/// 从任意读取源解析 GPS 日志
pub fn parse_taxi_log_reader<R: Read>(reader: R, source_name: &str) -> Result<Extraction> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut width: Option<usize> = None;
    let mut records = Vec::new();
    let mut row = csv::StringRecord::new();

    while rdr
        .read_record(&mut row)
        .map_err(|e| csv_to_unify(e, source_name))?
    {
        // 仅含空白的行与空行同样跳过，不参与表宽判定
        if row.len() == 1 && row[0].trim().is_empty() {
            continue;
        }

        let expected = *width.get_or_insert(row.len());

        if row.len() > expected {
            let line = row.position().map(|p| p.line()).unwrap_or(0);
            return Err(UnifyError::ParseError {
                path: source_name.to_string(),
                reason: format!(
                    "expected {} fields in line {}, saw {}",
                    expected,
                    line,
                    row.len()
                ),
            });
        }

        if expected < MIN_COLUMNS {
            continue;
        }

        let lon = row.get(LON_COLUMN).and_then(parse_numeric);
        let lat = row.get(LAT_COLUMN).and_then(parse_numeric);

        if let (Some(lon), Some(lat)) = (lon, lat) {
            records.push(Record::new(lon, lat));
        }
    }

    Ok(match width {
        None => Extraction::TooFewColumns,
        Some(w) if w < MIN_COLUMNS => Extraction::TooFewColumns,
        Some(_) if records.is_empty() => Extraction::NoValidRows,
        Some(_) => Extraction::Records(records),
    })
}

/// 将 csv 错误转换为带文件名的单文件错误
fn csv_to_unify(err: csv::Error, source_name: &str) -> UnifyError {
    match err.into_kind() {
        csv::ErrorKind::Io(source) => UnifyError::FileReadError {
            path: source_name.to_string(),
            source,
        },
        csv::ErrorKind::Utf8 { pos, err } => UnifyError::ParseError {
            path: source_name.to_string(),
            reason: match pos {
                Some(pos) => format!(
                    "invalid UTF-8 in line {}, field {} near byte {}",
                    pos.line(),
                    err.field(),
                    err.valid_up_to()
                ),
                None => format!(
                    "invalid UTF-8 in field {} near byte {}",
                    err.field(),
                    err.valid_up_to()
                ),
            },
        },
        other => UnifyError::ParseError {
            path: source_name.to_string(),
            reason: format!("{:?}", other),
        },
    }
}

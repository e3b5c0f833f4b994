//! # 数据导出
//!
//! 将清洗后的数据集写为带 `lon,lat` 表头的 CSV。
//!
//! 浮点数使用可精确往返的最短十进制表示，同一输入两次导出字节一致。
//! 写入中途失败时可能残留不完整的文件，不做删除。
//!
//! ## 依赖关系
//! - 被 `commands/unify.rs` 调用
//! - 使用 `csv` 库写入，`serde` 序列化 `Record`

use super::UnifiedDataset;
use crate::error::{Result, UnifyError};

use std::fs;
use std::path::{Path, PathBuf};

/// 表头
pub const HEADER: [&str; 2] = ["lon", "lat"];

/// 导出为 CSV，返回输出路径与文件大小（字节）
pub fn to_csv(dataset: &UnifiedDataset, output_path: &Path) -> Result<(PathBuf, u64)> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    // 空数据集也需要表头，serialize 只在首条记录时写表头
    if dataset.is_empty() {
        wtr.write_record(HEADER)?;
    }

    for record in dataset.records() {
        wtr.serialize(record)?;
    }

    wtr.flush().map_err(|e| UnifyError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    drop(wtr);

    let size = fs::metadata(output_path)
        .map_err(|e| UnifyError::FileWriteError {
            path: output_path.display().to_string(),
            source: e,
        })?
        .len();

    Ok((output_path.to_path_buf(), size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    fn dataset(records: Vec<Record>) -> UnifiedDataset {
        UnifiedDataset::combine(vec![records])
    }

    #[test]
    fn test_to_csv_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let data = dataset(vec![
            Record::new(121.423167, 31.165233),
            Record::new(120.0, 32.0),
        ]);

        let (written, size) = to_csv(&data, &path).unwrap();
        assert_eq!(written, path);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "lon,lat\n121.423167,31.165233\n120.0,32.0\n");
        assert_eq!(size, content.len() as u64);
    }

    #[test]
    fn test_to_csv_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records = vec![
            Record::new(121.1234567891, 31.000001),
            Record::new(120.5, 30.25),
        ];
        to_csv(&dataset(records.clone()), &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let read: Vec<Record> = rdr.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(read, records);
    }

    #[test]
    fn test_to_csv_empty_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        to_csv(&UnifiedDataset::default(), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "lon,lat\n");
    }

    #[test]
    fn test_to_csv_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "old content that is longer than the new one\n").unwrap();
        to_csv(&dataset(vec![Record::new(121.0, 31.0)]), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "lon,lat\n121.0,31.0\n");
    }

    #[test]
    fn test_to_csv_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("out.csv");
        assert!(to_csv(&UnifiedDataset::default(), &path).is_err());
    }
}

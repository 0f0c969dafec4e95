//! CSV output formatter for the directory ranking.
//!
//! This module exports the ranked table to CSV format for further processing
//! or analysis. Columns: `rank,path,size_bytes,size_human`.

use crate::data::RankedDir;
use crate::utils::human_size;
use anyhow::{Context, Result};
use csv::Writer;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Converts ranked `(path, size)` pairs into serializable rows.
pub fn ranked_rows(top: &[(PathBuf, u64)]) -> Vec<RankedDir> {
    top.iter()
        .enumerate()
        .map(|(idx, (path, size))| RankedDir {
            rank: idx + 1,
            path: path.display().to_string(),
            size_bytes: *size,
            size_human: human_size(*size),
        })
        .collect()
}

/// Serializes the ranking as CSV into `writer`.
///
/// # Arguments
/// * `writer` - Destination of the CSV rows, header included
/// * `top` - Already-ranked rows, largest first
pub fn write_ranking<W: io::Write>(writer: W, top: &[(PathBuf, u64)]) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);

    for row in ranked_rows(top) {
        csv_writer.serialize(row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Writes the ranking to the CSV file at `path`.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn render(top: &[(PathBuf, u64)], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create CSV output file: {}", path.display()))?;
    write_ranking(file, top)
        .with_context(|| format!("Failed to write CSV output: {}", path.display()))?;
    eprintln!("CSV output written to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<(PathBuf, u64)> {
        vec![
            (PathBuf::from("/data"), 900),
            (PathBuf::from("/data/logs"), 512),
        ]
    }

    #[test]
    fn test_ranked_rows() {
        let rows = ranked_rows(&sample());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[1].rank, 2);
        assert_eq!(rows[1].path, "/data/logs");
        assert_eq!(rows[1].size_bytes, 512);
        assert_eq!(rows[1].size_human, "512.00 B");
    }

    #[test]
    fn test_write_ranking_to_buffer() {
        let mut buf = Vec::new();
        write_ranking(&mut buf, &sample()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "rank,path,size_bytes,size_human");
        assert_eq!(lines[1], "1,/data,900,900.00 B");
        assert_eq!(lines[2], "2,/data/logs,512,512.00 B");
    }

    #[test]
    fn test_render_to_file() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("ranking.csv");
        render(&sample(), &out).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        assert!(content.starts_with("rank,path,size_bytes,size_human\n"));
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn test_render_into_missing_dir_fails() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("no/such/dir/ranking.csv");
        assert!(render(&sample(), &out).is_err());
    }
}

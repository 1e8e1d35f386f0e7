use crate::partition::{partition, LineRange, PartitionError};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum SplitError {
    #[error("part count must be at least 1")]
    ZeroParts,
    #[error("requested {num_parts} parts but '{path}' only has {total_lines} lines")]
    InsufficientLines {
        path: String,
        total_lines: usize,
        num_parts: usize,
    },
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to write '{path}': {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("'{path}' is not valid UTF-8")]
    NotUtf8 { path: String },
}

/// Parts produced by a completed single-file split.
#[derive(Debug, Clone)]
pub struct SplitReport {
    pub input: PathBuf,
    pub total_lines: usize,
    pub parts: Vec<PathBuf>,
}

/// Preview of a split: the line count and the ranges it would produce,
/// without writing anything.
#[derive(Debug, Clone)]
pub struct SplitPlan {
    pub total_lines: usize,
    pub ranges: Vec<LineRange>,
}

/// Output file name for part `index` (zero-based) of `input`:
/// `{basename}_part{index+1}.{ext}`, keeping the input's extension and
/// falling back to `txt` when it has none.
pub fn part_file_name(input: &Path, index: usize) -> String {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let ext = input
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("txt");
    format!("{stem}_part{}.{ext}", index + 1)
}

/// Loads the whole file as a list of UTF-8 lines. Splits on `\n` and
/// tolerates `\r\n`; terminators are not kept.
pub fn read_lines(path: &Path) -> Result<Vec<String>, SplitError> {
    let bytes = std::fs::read(path).map_err(|source| SplitError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| SplitError::NotUtf8 {
        path: path.display().to_string(),
    })?;
    let mut lines: Vec<String> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect();
    // A trailing newline yields one empty tail entry, not an extra line.
    if lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    Ok(lines)
}

fn map_partition_error(err: PartitionError, path: &Path) -> SplitError {
    match err {
        PartitionError::ZeroParts => SplitError::ZeroParts,
        PartitionError::InsufficientLines {
            total_lines,
            num_parts,
        } => SplitError::InsufficientLines {
            path: path.display().to_string(),
            total_lines,
            num_parts,
        },
    }
}

/// Computes the ranges a split of `input` into `num_parts` would produce.
pub fn plan_ranges(input: &Path, num_parts: usize) -> Result<SplitPlan, SplitError> {
    let lines = read_lines(input)?;
    let ranges =
        partition(lines.len(), num_parts).map_err(|err| map_partition_error(err, input))?;
    Ok(SplitPlan {
        total_lines: lines.len(),
        ranges,
    })
}

fn write_part(path: &Path, lines: &[String]) -> Result<(), SplitError> {
    let as_write_error = |source: std::io::Error| SplitError::Write {
        path: path.display().to_string(),
        source,
    };
    let mut file = std::fs::File::create(path).map_err(as_write_error)?;
    for line in lines {
        writeln!(file, "{line}").map_err(as_write_error)?;
    }
    Ok(())
}

/// Splits `input` into `num_parts` files under `output_dir`, each covering
/// one partition range. The output directory is created if missing.
pub fn split_file(
    input: &Path,
    output_dir: &Path,
    num_parts: usize,
) -> Result<SplitReport, SplitError> {
    let lines = read_lines(input)?;
    let ranges =
        partition(lines.len(), num_parts).map_err(|err| map_partition_error(err, input))?;
    std::fs::create_dir_all(output_dir).map_err(|source| SplitError::Write {
        path: output_dir.display().to_string(),
        source,
    })?;
    let mut parts = Vec::with_capacity(ranges.len());
    for (index, range) in ranges.iter().enumerate() {
        let part_path = output_dir.join(part_file_name(input, index));
        write_part(&part_path, &lines[range.start..range.end])?;
        parts.push(part_path);
    }
    Ok(SplitReport {
        input: input.to_path_buf(),
        total_lines: lines.len(),
        parts,
    })
}

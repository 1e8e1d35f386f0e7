/// Half-open `[start, end)` interval of zero-indexed line numbers assigned
/// to one output part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PartitionError {
    #[error("part count must be at least 1")]
    ZeroParts,
    #[error("requested {num_parts} parts but the file only has {total_lines} lines")]
    InsufficientLines { total_lines: usize, num_parts: usize },
}

/// Splits `[0, total_lines)` into `num_parts` contiguous ranges whose sizes
/// differ by at most one line. The remainder lines go to the leading ranges,
/// so the first `total_lines % num_parts` ranges are one line larger.
///
/// Fails rather than producing empty ranges when more parts are requested
/// than there are lines.
pub fn partition(total_lines: usize, num_parts: usize) -> Result<Vec<LineRange>, PartitionError> {
    if num_parts == 0 {
        return Err(PartitionError::ZeroParts);
    }
    if num_parts > total_lines {
        return Err(PartitionError::InsufficientLines {
            total_lines,
            num_parts,
        });
    }
    let base = total_lines / num_parts;
    let extra = total_lines % num_parts;
    let mut ranges = Vec::with_capacity(num_parts);
    for i in 0..num_parts {
        let start = i * base + i.min(extra);
        let end = start + base + usize::from(i < extra);
        ranges.push(LineRange { start, end });
    }
    Ok(ranges)
}

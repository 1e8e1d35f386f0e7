use linesplit_core::LineRange;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FileStatus {
    Pending,
    Done { parts: usize },
    Failed(String),
}

#[derive(Debug, Clone)]
pub(crate) struct FileEntry {
    pub path: PathBuf,
    pub lines: Option<usize>,
    pub status: FileStatus,
}

impl FileEntry {
    pub fn new(path: PathBuf, lines: Option<usize>) -> Self {
        Self {
            path,
            lines,
            status: FileStatus::Pending,
        }
    }

    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Cached preview of the selected file: its leading lines and the ranges
/// the current part count would produce.
#[derive(Debug, Clone)]
pub(crate) struct PreviewState {
    pub path: PathBuf,
    pub num_parts: usize,
    pub first_lines: Vec<String>,
    pub plan: Result<Vec<LineRange>, String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ProgressState {
    pub files_done: usize,
    pub files_total: usize,
}

impl ProgressState {
    pub fn fraction(&self) -> f32 {
        if self.files_total == 0 {
            0.0
        } else {
            self.files_done as f32 / self.files_total as f32
        }
    }
}

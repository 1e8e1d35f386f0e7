use crate::split::{split_file, SplitError, SplitReport};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Directory the parts are written to. When unset, each file's parts
    /// land next to the file itself.
    pub output_dir: Option<PathBuf>,
    pub num_parts: usize,
}

/// Snapshot handed to the progress callback after each file completes.
#[derive(Debug, Clone)]
pub struct BatchProgress {
    pub files_done: usize,
    pub files_total: usize,
    pub current: PathBuf,
    pub current_failed: bool,
}

#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub result: Result<SplitReport, SplitError>,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn summary(&self) -> String {
        format!("split {} of {} files", self.succeeded(), self.outcomes.len())
    }
}

fn output_dir_for(input: &Path, options: &BatchOptions) -> PathBuf {
    match &options.output_dir {
        Some(dir) => dir.clone(),
        None => input.parent().unwrap_or_else(|| Path::new(".")).to_path_buf(),
    }
}

/// Splits every file in `files`, synchronously and in order. A file that
/// fails is recorded and the batch moves on; every file is always attempted.
/// `progress` is invoked once per file, after it completes.
pub fn split_batch(
    files: &[PathBuf],
    options: &BatchOptions,
    mut progress: impl FnMut(&BatchProgress),
) -> BatchReport {
    let mut report = BatchReport::default();
    for (index, input) in files.iter().enumerate() {
        let output_dir = output_dir_for(input, options);
        let result = split_file(input, &output_dir, options.num_parts);
        if let Err(err) = &result {
            log::warn!("skipping '{}': {err}", input.display());
        }
        progress(&BatchProgress {
            files_done: index + 1,
            files_total: files.len(),
            current: input.clone(),
            current_failed: result.is_err(),
        });
        report.outcomes.push(FileOutcome {
            input: input.clone(),
            result,
        });
    }
    report
}

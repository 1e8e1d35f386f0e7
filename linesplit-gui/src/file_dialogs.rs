use std::path::PathBuf;
use std::sync::mpsc::Receiver;

/// Receivers for file dialogs running on worker threads. Each dialog sends
/// its result once; the app polls these every frame.
pub(crate) struct FileDialogManager {
    pub add_files_rx: Option<Receiver<Option<Vec<PathBuf>>>>,
    pub output_dir_rx: Option<Receiver<Option<PathBuf>>>,
}

impl FileDialogManager {
    pub fn new() -> Self {
        Self {
            add_files_rx: None,
            output_dir_rx: None,
        }
    }
}

impl Default for FileDialogManager {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn spawn_file_dialog_thread<F, T>(f: F) -> std::thread::JoinHandle<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    std::thread::spawn(f)
}

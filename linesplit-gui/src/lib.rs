use eframe::egui;
use linesplit_core::settings::default_settings_path;
use linesplit_core::{
    partition, read_lines, split_batch, BatchOptions, SettingsStore, ThemeChoice,
};
use std::path::PathBuf;

mod file_dialogs;
mod state;
mod ui;

use file_dialogs::{spawn_file_dialog_thread, FileDialogManager};
use state::{FileEntry, FileStatus, PreviewState, ProgressState};

const PREVIEW_LINES: usize = 10;

#[derive(Debug, Clone)]
pub struct GuiConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            title: "Line Splitter".to_string(),
            width: 760.0,
            height: 540.0,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GuiError {
    #[error("gui error: {0}")]
    Gui(String),
}

pub fn run_gui(config: GuiConfig) -> Result<(), GuiError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width, config.height])
            .with_drag_and_drop(true),
        ..Default::default()
    };
    eframe::run_native(
        &config.title,
        options,
        Box::new(move |_cc| Box::new(SplitterApp::new(default_settings_path()))),
    )
    .map_err(|err| GuiError::Gui(err.to_string()))
}

struct SplitterApp {
    settings: SettingsStore,
    files: Vec<FileEntry>,
    selected: Option<usize>,
    preview: Option<PreviewState>,
    progress: ProgressState,
    status: String,
    file_dialogs: FileDialogManager,
    // Draft mirrors the persisted part count so the spinner edits locally
    // and only writes through on change.
    parts_draft: usize,
}

impl SplitterApp {
    fn new(settings_path: PathBuf) -> Self {
        let settings = SettingsStore::load_or_default(settings_path);
        let parts_draft = settings.settings.num_parts;
        Self {
            settings,
            files: Vec::new(),
            selected: None,
            preview: None,
            progress: ProgressState::default(),
            status: String::new(),
            file_dialogs: FileDialogManager::new(),
            parts_draft,
        }
    }

    fn add_files(&mut self, paths: Vec<PathBuf>) {
        for path in paths {
            if self.files.iter().any(|f| f.path == path) {
                continue;
            }
            let lines = read_lines(&path).ok().map(|lines| lines.len());
            self.files.push(FileEntry::new(path, lines));
        }
        if self.selected.is_none() && !self.files.is_empty() {
            self.selected = Some(0);
        }
    }

    fn remove_file(&mut self, index: usize) {
        if index >= self.files.len() {
            return;
        }
        self.files.remove(index);
        self.selected = match self.selected {
            Some(_) if self.files.is_empty() => None,
            Some(sel) if sel > index => Some(sel - 1),
            Some(sel) if sel == index => Some(index.min(self.files.len() - 1)),
            other => other,
        };
        self.preview = None;
    }

    fn open_add_files_dialog(&mut self) {
        let (tx, rx) = std::sync::mpsc::channel();
        self.file_dialogs.add_files_rx = Some(rx);
        spawn_file_dialog_thread(move || {
            let picked = rfd::FileDialog::new()
                .add_filter("Text files", &["txt"])
                .add_filter("All files", &["*"])
                .pick_files();
            let _ = tx.send(picked);
        });
    }

    fn open_output_dir_dialog(&mut self) {
        let (tx, rx) = std::sync::mpsc::channel();
        self.file_dialogs.output_dir_rx = Some(rx);
        let start_dir = self.settings.settings.output_dir.clone();
        spawn_file_dialog_thread(move || {
            let mut dialog = rfd::FileDialog::new();
            if let Some(dir) = start_dir {
                dialog = dialog.set_directory(dir);
            }
            let _ = tx.send(dialog.pick_folder());
        });
    }

    fn poll_file_dialogs(&mut self) {
        if let Some(rx) = &self.file_dialogs.add_files_rx {
            if let Ok(result) = rx.try_recv() {
                self.file_dialogs.add_files_rx = None;
                if let Some(paths) = result {
                    self.add_files(paths);
                }
            }
        }
        if let Some(rx) = &self.file_dialogs.output_dir_rx {
            if let Ok(result) = rx.try_recv() {
                self.file_dialogs.output_dir_rx = None;
                if let Some(dir) = result {
                    self.settings.update(|s| s.output_dir = Some(dir));
                }
            }
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }
        let paths: Vec<PathBuf> = dropped
            .into_iter()
            .filter_map(|file| file.path)
            .filter(|path| path.is_file())
            .collect();
        self.add_files(paths);
    }

    fn set_num_parts(&mut self, num_parts: usize) {
        self.parts_draft = num_parts.max(1);
        let value = self.parts_draft;
        self.settings.update(|s| s.num_parts = value);
    }

    fn set_theme(&mut self, theme: ThemeChoice) {
        self.settings.update(|s| s.theme = theme);
    }

    fn refresh_preview(&mut self) {
        let Some(index) = self.selected else {
            self.preview = None;
            return;
        };
        let Some(entry) = self.files.get(index) else {
            self.preview = None;
            return;
        };
        let num_parts = self.parts_draft;
        let stale = match &self.preview {
            Some(preview) => preview.path != entry.path || preview.num_parts != num_parts,
            None => true,
        };
        if !stale {
            return;
        }
        let path = entry.path.clone();
        let preview = match read_lines(&path) {
            Ok(lines) => {
                let plan = partition(lines.len(), num_parts).map_err(|err| err.to_string());
                PreviewState {
                    path,
                    num_parts,
                    first_lines: lines.into_iter().take(PREVIEW_LINES).collect(),
                    plan,
                }
            }
            Err(err) => PreviewState {
                path,
                num_parts,
                first_lines: Vec::new(),
                plan: Err(err.to_string()),
            },
        };
        self.preview = Some(preview);
    }

    fn run_split(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let files: Vec<PathBuf> = self.files.iter().map(|f| f.path.clone()).collect();
        let options = BatchOptions {
            output_dir: self.settings.settings.output_dir.clone(),
            num_parts: self.parts_draft,
        };
        let mut progress = ProgressState {
            files_done: 0,
            files_total: files.len(),
        };
        let report = split_batch(&files, &options, |update| {
            progress.files_done = update.files_done;
        });
        self.progress = progress;
        for (entry, outcome) in self.files.iter_mut().zip(report.outcomes.iter()) {
            entry.status = match &outcome.result {
                Ok(split) => FileStatus::Done {
                    parts: split.parts.len(),
                },
                Err(err) => FileStatus::Failed(err.to_string()),
            };
        }
        self.status = report.summary();
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        let visuals = match self.settings.settings.theme {
            ThemeChoice::Light => egui::Visuals::light(),
            ThemeChoice::Dark => egui::Visuals::dark(),
        };
        ctx.set_visuals(visuals);
    }
}

impl eframe::App for SplitterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);
        self.poll_file_dialogs();
        self.handle_dropped_files(ctx);
        self.refresh_preview();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.render_controls(ui);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let bar = egui::ProgressBar::new(self.progress.fraction())
                    .desired_width(180.0)
                    .text(format!(
                        "{}/{}",
                        self.progress.files_done, self.progress.files_total
                    ));
                ui.add(bar);
                if !self.status.is_empty() {
                    ui.label(&self.status);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_file_list(ui);
            ui.separator();
            self.render_preview(ui);
        });

        // Dialog results arrive from worker threads; poll at a steady rate
        // while one is open.
        if self.file_dialogs.add_files_rx.is_some() || self.file_dialogs.output_dir_rx.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

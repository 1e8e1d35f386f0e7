use crate::state::FileStatus;
use crate::SplitterApp;
use eframe::egui;

impl SplitterApp {
    pub(crate) fn render_file_list(&mut self, ui: &mut egui::Ui) {
        if self.files.is_empty() {
            ui.label("Drop text files here, or use \"Add files…\".");
            return;
        }
        let mut select: Option<usize> = None;
        let mut remove: Option<usize> = None;
        egui::ScrollArea::vertical()
            .id_source("file_list")
            .max_height(ui.available_height() * 0.5)
            .show(ui, |ui| {
                for (index, entry) in self.files.iter().enumerate() {
                    ui.horizontal(|ui| {
                        let selected = self.selected == Some(index);
                        if ui
                            .selectable_label(selected, entry.display_name())
                            .clicked()
                        {
                            select = Some(index);
                        }
                        match entry.lines {
                            Some(lines) => {
                                ui.label(format!("{lines} lines"));
                            }
                            None => {
                                ui.label("unreadable");
                            }
                        }
                        match &entry.status {
                            FileStatus::Pending => {}
                            FileStatus::Done { parts } => {
                                ui.label(format!("done ({parts} parts)"));
                            }
                            FileStatus::Failed(message) => {
                                ui.colored_label(egui::Color32::LIGHT_RED, "failed")
                                    .on_hover_text(message);
                            }
                        }
                        if ui.small_button("✕").clicked() {
                            remove = Some(index);
                        }
                    });
                }
            });
        if let Some(index) = select {
            self.selected = Some(index);
        }
        if let Some(index) = remove {
            self.remove_file(index);
        }
    }

    pub(crate) fn render_preview(&mut self, ui: &mut egui::Ui) {
        let Some(preview) = &self.preview else {
            ui.label("Select a file to preview the split.");
            return;
        };
        ui.heading(
            preview
                .path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| preview.path.display().to_string()),
        );
        match &preview.plan {
            Ok(ranges) => {
                ui.label(format!("{} parts:", ranges.len()));
                ui.horizontal_wrapped(|ui| {
                    for (index, range) in ranges.iter().enumerate() {
                        ui.monospace(format!(
                            "part {}: lines {}-{} ({})",
                            index + 1,
                            range.start + 1,
                            range.end,
                            range.len()
                        ));
                    }
                });
            }
            Err(message) => {
                ui.colored_label(egui::Color32::LIGHT_RED, message);
            }
        }
        ui.separator();
        egui::ScrollArea::vertical()
            .id_source("preview_lines")
            .show(ui, |ui| {
                for line in &preview.first_lines {
                    ui.monospace(line);
                }
                if preview.first_lines.is_empty() {
                    ui.label("(no preview available)");
                }
            });
    }
}

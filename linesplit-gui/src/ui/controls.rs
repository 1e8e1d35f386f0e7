use crate::SplitterApp;
use eframe::egui;
use linesplit_core::ThemeChoice;

impl SplitterApp {
    pub(crate) fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Add files…").clicked() {
                self.open_add_files_dialog();
            }
            if ui.button("Output folder…").clicked() {
                self.open_output_dir_dialog();
            }
            match &self.settings.settings.output_dir {
                Some(dir) => {
                    ui.label(dir.display().to_string());
                }
                None => {
                    ui.label("(parts are written next to each file)");
                }
            }
        });
        ui.horizontal(|ui| {
            ui.label("Parts:");
            let mut parts = self.parts_draft;
            let response = ui.add(egui::DragValue::new(&mut parts).clamp_range(1..=9999));
            if response.changed() {
                self.set_num_parts(parts);
            }

            ui.separator();
            let mut theme = self.settings.settings.theme;
            ui.selectable_value(&mut theme, ThemeChoice::Light, "Light");
            ui.selectable_value(&mut theme, ThemeChoice::Dark, "Dark");
            if theme != self.settings.settings.theme {
                self.set_theme(theme);
            }

            ui.separator();
            let split_enabled = !self.files.is_empty();
            if ui
                .add_enabled(split_enabled, egui::Button::new("Split"))
                .clicked()
            {
                self.run_split();
            }
        });
    }
}

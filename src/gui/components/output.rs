// src/gui/components/output.rs
use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let ctx = ui.ctx().clone();

    ui.horizontal(|ui| {
        ui.strong("Wikitext");
        let has_text = app.conversion.is_some();
        if ui.add_enabled(has_text, egui::Button::new("Copy")).clicked() {
            app.copy(&ctx);
        }
    });

    let Some(conv) = &app.conversion else { return };

    // Read-only view; `&str` as a TextBuffer can't be edited.
    let mut text = conv.wikitext.as_str();
    egui::ScrollArea::vertical()
        .id_salt("wikitext_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut text)
                    .code_editor()
                    .desired_width(f32::INFINITY),
            );
        });
}

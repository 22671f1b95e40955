// src/gui/components/options_panel.rs
//
// Left panel: input path, every Options field, Generate.

use eframe::egui::{self, RichText};

use crate::{config::DoublesMode, gui::app::App, layout};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut generate = false;

    ui.heading("Draw");
    ui.label("Saved page");
    let resp = ui.add(egui::TextEdit::singleline(&mut app.state.gui.input_path).desired_width(200.0));
    if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        generate = true;
    }

    ui.add_space(8.0);
    ui.separator();

    let opts = &mut app.state.options;

    egui::Grid::new("options_grid").num_columns(2).spacing([8.0, 6.0]).show(ui, |ui| {
        ui.label("Players");
        egui::ComboBox::from_id_salt("player_count")
            .selected_text(opts.player_count.to_string())
            .show_ui(ui, |ui| {
                for n in layout::supported_player_counts() {
                    ui.selectable_value(&mut opts.player_count, n, n.to_string());
                }
            });
        ui.end_row();

        ui.label("Best of");
        ui.horizontal(|ui| {
            ui.radio_value(&mut opts.best_of_sets, 3, "3");
            ui.radio_value(&mut opts.best_of_sets, 5, "5");
        });
        ui.end_row();

        ui.label("Format");
        egui::ComboBox::from_id_salt("doubles")
            .selected_text(doubles_label(opts.doubles))
            .show_ui(ui, |ui| {
                for mode in [DoublesMode::Auto, DoublesMode::Singles, DoublesMode::Doubles] {
                    ui.selectable_value(&mut opts.doubles, mode, doubles_label(mode));
                }
            });
        ui.end_row();

        ui.label("Date");
        ui.add(egui::TextEdit::singleline(&mut opts.date_format).desired_width(200.0));
        ui.end_row();

        ui.label("Bracket id");
        ui.add(egui::TextEdit::singleline(&mut opts.bracket_id).desired_width(200.0));
        ui.end_row();
    });

    ui.add_space(6.0);
    ui.checkbox(&mut opts.use_full_name, "Full names from profile links");
    ui.checkbox(&mut opts.tiebreaks, "Tiebreak comments");
    ui.checkbox(&mut opts.strict, "Fail on overflow");

    ui.add_space(6.0);
    ui.separator();
    ui.checkbox(&mut app.state.gui.show_slots, "Show slot table");
    ui.add_enabled(
        app.state.gui.show_slots,
        egui::Checkbox::new(&mut app.state.gui.filled_only, "Filled slots only"),
    );

    ui.add_space(12.0);
    if ui.button(RichText::new("Generate").strong()).clicked() {
        generate = true;
    }

    if generate {
        app.generate();
    }
}

fn doubles_label(mode: DoublesMode) -> &'static str {
    match mode {
        DoublesMode::Auto => "Auto-detect",
        DoublesMode::Singles => "Singles",
        DoublesMode::Doubles => "Doubles",
    }
}

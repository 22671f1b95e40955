// src/gui/components/slot_table.rs
//
// One row per bracket slot of the last conversion. Purely a view.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

const TABLE_HEIGHT: f32 = 260.0;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(conv) = &app.conversion else {
        ui.label("Nothing generated yet.");
        return;
    };
    let filled_only = app.state.gui.filled_only;

    let rows: Vec<_> = conv
        .slots
        .iter()
        .filter(|(_, placed)| !filled_only || placed.is_some())
        .collect();

    if let Some(label) = &conv.round_label {
        ui.label(format!("First round on page: {label}"));
    }
    if !conv.slots.overflow.is_empty() {
        ui.label(
            RichText::new(format!("{} match(es) did not fit the bracket", conv.slots.overflow.len()))
                .color(ui.visuals().warn_fg_color),
        );
    }

    TableBuilder::new(ui)
        .striped(true)
        .max_scroll_height(TABLE_HEIGHT)
        .column(Column::exact(60.0))
        .column(Column::initial(200.0).resizable(true).clip(true))
        .column(Column::initial(200.0).resizable(true).clip(true))
        .column(Column::initial(160.0).resizable(true))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for h in ["Slot", "Opponent 1", "Opponent 2", "Score", "Swapped"] {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let (slot, placed) = rows[row.index()];
                row.col(|ui| {
                    ui.label(slot.to_string());
                });
                match placed {
                    Some(p) => {
                        row.col(|ui| {
                            ui.label(winner_mark(p.record.side_a.display_name(), p.record.winner.param() == Some(1)));
                        });
                        row.col(|ui| {
                            ui.label(winner_mark(p.record.side_b.display_name(), p.record.winner.param() == Some(2)));
                        });
                        row.col(|ui| {
                            ui.label(p.record.score_line());
                        });
                        row.col(|ui| {
                            ui.label(if p.swapped { "yes" } else { "" });
                        });
                    }
                    None => {
                        for _ in 0..4 {
                            row.col(|ui| {
                                ui.weak("-");
                            });
                        }
                    }
                }
            });
        });
}

fn winner_mark(name: String, won: bool) -> RichText {
    if won { RichText::new(name).strong() } else { RichText::new(name) }
}

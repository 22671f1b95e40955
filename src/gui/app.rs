// src/gui/app.rs
use std::{error::Error, path::PathBuf};

use eframe::egui;

use crate::{
    config::{
        consts::SETTINGS_FILE,
        settings,
        state::AppState,
    },
    runner::{self, Conversion},
};

use super::components::{options_panel, output, slot_table};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Draw to Wiki",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // last successful run; kept when a later run fails
    pub conversion: Option<Conversion>,

    pub status: String,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        // Same settings file the CLI reads; flags don't exist here.
        let status = match settings::load(&PathBuf::from(SETTINGS_FILE), false) {
            Ok(s) => {
                s.apply(&mut state.options);
                s!("Idle")
            }
            Err(e) => {
                loge!("Init: {e}");
                format!("Ignoring settings: {e}")
            }
        };

        logf!("Init: players={}, best_of={}", state.options.player_count, state.options.best_of_sets);

        Self { state, conversion: None, status }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    pub fn generate(&mut self) {
        let path = PathBuf::from(self.state.gui.input_path.trim());
        match runner::convert_file(&path, &self.state.options) {
            Ok(conv) => {
                let msg = conv.summary();
                logf!("Generate: {msg}");
                self.status(msg);
                self.conversion = Some(conv);
            }
            Err(e) => {
                loge!("Generate: {e}");
                self.status(format!("Error: {e}"));
            }
        }
    }

    pub fn copy(&mut self, ctx: &egui::Context) {
        let Some(conv) = &self.conversion else {
            logd!("Copy: Clicked, but there's nothing to copy");
            self.status("Nothing to copy");
            return;
        };
        ctx.copy_text(conv.wikitext.clone());
        logf!("Copy: {} bytes", conv.wikitext.len());
        self.status("Copied to clipboard");
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("options")
            .resizable(false)
            .show(ctx, |ui| {
                options_panel::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.gui.show_slots {
                slot_table::draw(ui, self);
                ui.separator();
            }
            output::draw(ui, self);
        });
    }
}

use std::time::Duration;

use client_core::IdAssignment;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::UiEvent,
    orchestration::dispatch_backend_command,
    reducer::{apply_event, reduce, AppState, UiAction},
};
use crate::ui::panels;

pub struct DesktopGuiApp {
    ui_rx: Receiver<UiEvent>,
    state: AppState,
}

impl DesktopGuiApp {
    /// Creates the window state and queues the one directory read. The
    /// command sender is not kept: nothing else is ever sent to the worker.
    pub fn new(
        cmd_tx: &Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        id_assignment: IdAssignment,
    ) -> Self {
        let mut state = AppState::new(id_assignment);
        dispatch_backend_command(cmd_tx, BackendCommand::FetchDirectory, &mut state.status);
        Self { ui_rx, state }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            apply_event(&mut self.state, event);
        }
    }

    fn show_top_bar(&self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading("User management");
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                panels::search_bar(ui, &self.state.roster, actions);
                if ui.button("Add").clicked() {
                    actions.push(UiAction::OpenCreateForm);
                }
            });
            ui.add_space(6.0);
        });
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.state.status).weak());
            });
        });
    }
}

impl eframe::App for DesktopGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mut actions = Vec::new();
        self.show_top_bar(ctx, &mut actions);
        self.show_status_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::record_table(ui, &self.state.roster, &mut actions);
        });
        panels::creator_dialog(ctx, &self.state.creator, &mut actions);
        panels::edit_dialog(ctx, &self.state.roster, &mut actions);
        panels::validation_alert(ctx, self.state.alert.as_ref(), &mut actions);

        for action in actions {
            reduce(&mut self.state, action);
        }

        if !self.state.roster.is_initialized() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

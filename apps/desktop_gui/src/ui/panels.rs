//! Panels and dialogs. Each one only reads state and pushes `UiAction`s;
//! the app reduces them after the frame is laid out.

use client_core::{RecordCreator, Roster};
use eframe::egui;
use shared::{AddressField, FormField, RecordField, ValidationError};

use crate::controller::reducer::UiAction;
use crate::ui::widgets::{dialog_buttons, form_text_field, DialogChoice};

const DIALOG_WIDTH: f32 = 360.0;

pub fn search_bar(ui: &mut egui::Ui, roster: &Roster, actions: &mut Vec<UiAction>) {
    let mut keyword = roster.keyword().to_string();
    let edit = egui::TextEdit::singleline(&mut keyword)
        .id_salt("search_keyword")
        .hint_text("Search by name, username")
        .desired_width(280.0);
    if ui.add(edit).changed() {
        actions.push(UiAction::SetKeyword(keyword));
    }
}

pub fn record_table(ui: &mut egui::Ui, roster: &Roster, actions: &mut Vec<UiAction>) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("record_table")
                .striped(true)
                .num_columns(6)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    for header in ["ID", "Name", "Username", "Email", "City", "Actions"] {
                        ui.label(egui::RichText::new(header).strong());
                    }
                    ui.end_row();

                    for record in roster.visible() {
                        ui.label(record.id.to_string());
                        ui.label(record.name.as_str());
                        ui.label(record.username.as_str());
                        ui.label(record.email.as_str());
                        ui.label(record.address.city.as_str());
                        ui.horizontal(|ui| {
                            if ui.button("Edit").clicked() {
                                actions.push(UiAction::BeginEdit(record.id));
                            }
                            if ui.button("Delete").clicked() {
                                actions.push(UiAction::Remove(record.id));
                            }
                        });
                        ui.end_row();
                    }
                });

            if roster.visible().next().is_none() {
                ui.add_space(8.0);
                ui.weak(if roster.is_empty() {
                    "No users."
                } else {
                    "No users match the search."
                });
            }
        });
}

pub fn creator_dialog(ctx: &egui::Context, creator: &RecordCreator, actions: &mut Vec<UiAction>) {
    if !creator.is_open() {
        return;
    }

    let draft = creator.draft();
    let modal = egui::Modal::new(egui::Id::new("create_user_dialog")).show(ctx, |ui| {
        ui.set_width(DIALOG_WIDTH);
        ui.heading("Add user");
        ui.add_space(6.0);

        for field in RecordField::ALL {
            if let Some(value) =
                form_text_field(ui, &format!("create_{field:?}"), field.label(), draft.field(field))
            {
                actions.push(UiAction::UpdateDraft(FormField::Record(field), value));
            }
        }
        for field in AddressField::ALL {
            if let Some(value) = form_text_field(
                ui,
                &format!("create_{field:?}"),
                field.label(),
                draft.address_field(field),
            ) {
                actions.push(UiAction::UpdateDraft(FormField::Address(field), value));
            }
        }

        ui.add_space(8.0);
        dialog_buttons(ui, "Add", "Cancel")
    });

    match modal.inner {
        DialogChoice::Confirm => actions.push(UiAction::SubmitDraft),
        DialogChoice::Cancel => actions.push(UiAction::CloseCreateForm),
        DialogChoice::None if modal.should_close() => actions.push(UiAction::CloseCreateForm),
        DialogChoice::None => {}
    }
}

pub fn edit_dialog(ctx: &egui::Context, roster: &Roster, actions: &mut Vec<UiAction>) {
    let Some(buffer) = roster.editing() else {
        return;
    };

    let modal = egui::Modal::new(egui::Id::new("edit_user_dialog")).show(ctx, |ui| {
        ui.set_width(DIALOG_WIDTH);
        ui.heading(format!("Edit user #{}", buffer.id));
        ui.add_space(6.0);

        for field in RecordField::ALL {
            if let Some(value) =
                form_text_field(ui, &format!("edit_{field:?}"), field.label(), buffer.field(field))
            {
                actions.push(UiAction::UpdateEdit(field, value));
            }
        }
        for field in AddressField::ALL {
            if let Some(value) = form_text_field(
                ui,
                &format!("edit_{field:?}"),
                field.label(),
                buffer.address.field(field),
            ) {
                actions.push(UiAction::UpdateEditAddress(field, value));
            }
        }

        ui.add_space(8.0);
        dialog_buttons(ui, "Save", "Cancel")
    });

    match modal.inner {
        DialogChoice::Confirm => actions.push(UiAction::CommitEdit),
        DialogChoice::Cancel => actions.push(UiAction::CancelEdit),
        DialogChoice::None if modal.should_close() => actions.push(UiAction::CancelEdit),
        DialogChoice::None => {}
    }
}

pub fn validation_alert(
    ctx: &egui::Context,
    alert: Option<&ValidationError>,
    actions: &mut Vec<UiAction>,
) {
    let Some(alert) = alert else {
        return;
    };

    let modal = egui::Modal::new(egui::Id::new("validation_alert")).show(ctx, |ui| {
        ui.set_width(DIALOG_WIDTH * 0.75);
        ui.label(alert.user_message());
        ui.add_space(8.0);
        ui.button("OK").clicked()
    });

    if modal.inner || modal.should_close() {
        actions.push(UiAction::DismissAlert);
    }
}

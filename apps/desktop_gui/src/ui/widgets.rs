use eframe::egui;

/// Stacked label + single-line input bound to a copy of `current`. Returns
/// the new text when the user changed it this frame.
pub fn form_text_field(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    current: &str,
) -> Option<String> {
    ui.label(egui::RichText::new(label).strong());
    let mut buffer = current.to_string();
    let edit = egui::TextEdit::singleline(&mut buffer)
        .id_salt(id)
        .desired_width(f32::INFINITY);
    let response = ui.add(edit);
    response.changed().then_some(buffer)
}

pub fn dialog_buttons(ui: &mut egui::Ui, confirm: &str, cancel: &str) -> DialogChoice {
    let mut choice = DialogChoice::None;
    ui.horizontal(|ui| {
        if ui.button(confirm).clicked() {
            choice = DialogChoice::Confirm;
        }
        if ui.button(cancel).clicked() {
            choice = DialogChoice::Cancel;
        }
    });
    choice
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    None,
    Confirm,
    Cancel,
}

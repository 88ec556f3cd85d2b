// egui widgets for the brief form. Widgets edit a draft copy of the current
// snapshot; the draft is committed once per frame and the history suppresses
// the no-change frames.

use brandkit_brief::{AspectRatio, Template, INDUSTRIES};
use egui::TextEdit;

use super::FormController;

/// What the form wants the app to do this frame.
pub struct FormResponse {
    pub submitted: bool,
}

fn text_field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.label(label);
    ui.add(TextEdit::singleline(value).hint_text(hint));
}

fn text_area(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str, rows: usize) {
    ui.label(label);
    ui.add(TextEdit::multiline(value).hint_text(hint).desired_rows(rows));
}

/// Render the whole brief form. `busy` disables submission while a request
/// is in flight.
pub fn brief_form(
    ui: &mut egui::Ui,
    form: &mut FormController,
    templates: &[Template],
    busy: bool,
) -> FormResponse {
    let mut draft = form.current().clone();
    let mut submitted = false;
    let mut undo_clicked = false;
    let mut redo_clicked = false;

    ui.heading("1. Select a Template");
    ui.horizontal_wrapped(|ui| {
        for template in templates {
            let selected = draft.template == Some(template.id);
            if ui
                .selectable_label(selected, template.name.as_str())
                .on_hover_text(template.description.as_str())
                .clicked()
            {
                draft.template = Some(template.id);
            }
        }
    });

    ui.separator();
    ui.heading("2. Describe Your Business");

    text_field(ui, "Business Name", &mut draft.name, "e.g., Innovatech Solutions");
    text_field(ui, "Tagline / Slogan", &mut draft.tagline, "e.g., Engineering the Future");

    egui::ComboBox::from_label("Industry")
        .selected_text(draft.industry.clone())
        .show_ui(ui, |ui| {
            for industry in INDUSTRIES {
                ui.selectable_value(&mut draft.industry, (*industry).to_string(), *industry);
            }
        });

    text_area(
        ui,
        "Services / Products",
        &mut draft.services,
        "e.g., AI-driven analytics, Cloud solutions...",
        3,
    );
    text_area(
        ui,
        "Contact Information",
        &mut draft.contact_info,
        "e.g., website.com, contact@website.com, 555-1234",
        3,
    );
    text_field(
        ui,
        "Call to Action",
        &mut draft.call_to_action,
        "e.g., Visit Our Website Today!",
    );
    text_area(
        ui,
        "Primary Marketing Goal",
        &mut draft.marketing_goal,
        "e.g., Attract new corporate clients, build brand awareness...",
        2,
    );

    ui.separator();
    ui.heading("3. Customize Output");

    egui::ComboBox::from_label("Aspect Ratio")
        .selected_text(draft.aspect_ratio.label())
        .show_ui(ui, |ui| {
            for ratio in AspectRatio::ALL {
                ui.selectable_value(&mut draft.aspect_ratio, ratio, ratio.label());
            }
        });

    ui.checkbox(&mut draft.thinking_mode, "Advanced Thinking Mode")
        .on_hover_text("For complex requests. Uses a more powerful model.");

    ui.separator();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(form.can_undo(), egui::Button::new("Undo"))
            .clicked()
        {
            undo_clicked = true;
        }
        if ui
            .add_enabled(form.can_redo(), egui::Button::new("Redo"))
            .clicked()
        {
            redo_clicked = true;
        }
    });

    let can_submit = !busy && draft.template.is_some();
    if ui
        .add_enabled(can_submit, egui::Button::new("Generate & Get Suggestions"))
        .clicked()
    {
        submitted = true;
    }
    if draft.template.is_none() {
        ui.label("Please select a template to begin.");
    }

    form.commit(draft);
    if undo_clicked {
        form.undo();
    }
    if redo_clicked {
        form.redo();
    }

    FormResponse { submitted }
}

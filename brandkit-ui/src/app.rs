//! Top-level app: tab switching, request handling, and the output panel.
//!
//! All transient UI state lives in [`AppState`], deliberately separate from
//! the brief's snapshot history so loading flags and errors never end up in
//! the undo timeline.

use brandkit_ai::{
    parse_suggestions, DesignBackend, ImageEditRequestV1, ImagePayloadV1, ImageRequestV1,
    ModelTier, SuggestionBlock, SuggestionRequestV1,
};
use brandkit_brief::{
    builtin_templates, image_prompt, save_session, suggestion_prompt, AspectRatio, BusinessBrief,
    DesignSessionV1, Template,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{error, info};

use crate::form::{widgets, FormController};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveTab {
    Template,
    Image,
}

/// Transient per-session UI state. Nothing here is undoable; it is
/// serializable only so a host can restore the panel between launches.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppState {
    pub active_tab: ActiveTab,
    /// Message shown while a generation request is in flight.
    pub loading: Option<String>,
    pub is_editing: bool,
    pub last_error: Option<String>,
    pub generated_image: Option<ImagePayloadV1>,
    pub suggestions: Option<String>,

    // Freeform image-generator tab.
    pub image_prompt: String,
    pub image_aspect_ratio: AspectRatio,

    /// Instruction box under the generated image.
    pub edit_prompt: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            active_tab: ActiveTab::Template,
            loading: None,
            is_editing: false,
            last_error: None,
            generated_image: None,
            suggestions: None,
            image_prompt: String::new(),
            image_aspect_ratio: AspectRatio::Square,
            edit_prompt: String::new(),
        }
    }
}

impl AppState {
    /// Reset the output panel before a new generation run.
    pub fn clear_output(&mut self) {
        self.last_error = None;
        self.generated_image = None;
        self.suggestions = None;
    }
}

/// The design assistant. Owns the form controller, the durable session, the
/// transient UI state, and the backend seam.
pub struct App {
    form: FormController,
    state: AppState,
    session: DesignSessionV1,
    templates: Vec<Template>,
    backend: Box<dyn DesignBackend>,
}

impl App {
    pub fn new(backend: Box<dyn DesignBackend>) -> Self {
        let brief = BusinessBrief::default();
        Self {
            form: FormController::new(brief.clone()),
            state: AppState::default(),
            session: DesignSessionV1::new(brief),
            templates: builtin_templates(),
            backend,
        }
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn session(&self) -> &DesignSessionV1 {
        &self.session
    }

    /// Generate the template asset and design advice for the current brief.
    pub fn submit_template(&mut self) {
        let brief = self.form.current().clone();

        let prompt = match image_prompt(&brief) {
            Ok(prompt) => prompt,
            Err(_) => {
                self.state.last_error =
                    Some("Please select a template before generating.".into());
                return;
            }
        };

        self.state.clear_output();
        self.state.loading = Some("Generating your design...".into());
        info!(aspect_ratio = brief.aspect_ratio.as_str(), "template generation requested");

        let request = ImageRequestV1 {
            prompt,
            aspect_ratio: brief.aspect_ratio,
        };
        match self.backend.generate_image(&request) {
            Ok(image) => self.state.generated_image = Some(image),
            Err(err) => {
                error!(%err, "image generation failed");
                self.state.last_error = Some(err.to_string());
                self.state.loading = None;
                return;
            }
        }

        let request = SuggestionRequestV1 {
            prompt: suggestion_prompt(&brief),
            model: ModelTier::from_thinking_mode(brief.thinking_mode),
        };
        // Advice is a nice-to-have: a failed suggestion call degrades to a
        // placeholder instead of failing the whole run.
        self.state.suggestions = Some(match self.backend.suggest(&request) {
            Ok(text) => text,
            Err(err) => {
                error!(%err, "suggestion request failed");
                "**Error**\nCould not retrieve design suggestions at this time.".into()
            }
        });

        self.state.loading = None;
    }

    /// Generate an image from the freeform prompt tab.
    pub fn submit_image_prompt(&mut self) {
        if self.state.image_prompt.trim().is_empty() {
            self.state.last_error = Some("Please enter a prompt to generate an image.".into());
            return;
        }

        self.state.clear_output();
        self.state.loading = Some("Generating your image...".into());

        let request = ImageRequestV1 {
            prompt: self.state.image_prompt.clone(),
            aspect_ratio: self.state.image_aspect_ratio,
        };
        match self.backend.generate_image(&request) {
            Ok(image) => self.state.generated_image = Some(image),
            Err(err) => {
                error!(%err, "freeform image generation failed");
                self.state.last_error = Some(err.to_string());
            }
        }

        self.state.loading = None;
    }

    /// Rework the generated image with the instruction in the edit box.
    pub fn submit_edit(&mut self) {
        let instruction = self.state.edit_prompt.trim().to_string();
        let Some(image) = self.state.generated_image.clone() else {
            return;
        };
        if instruction.is_empty() {
            return;
        }

        self.state.is_editing = true;
        self.state.last_error = None;

        let request = ImageEditRequestV1 { image, instruction: instruction.clone() };
        match self.backend.edit_image(&request) {
            Ok(edited) => {
                let iteration = self.session.push_edit(instruction);
                info!(iteration, "image edit applied");
                self.state.generated_image = Some(edited);
                self.state.edit_prompt.clear();
            }
            Err(err) => {
                error!(%err, "image edit failed");
                self.state.last_error = Some(err.to_string());
            }
        }

        self.state.is_editing = false;
    }

    /// Persist the session with the brief as the user last left it.
    pub fn save_session(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        self.session.brief = self.form.current().clone();
        save_session(path, &self.session)
    }

    /// Render the whole assistant into `ui`.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .selectable_label(
                    self.state.active_tab == ActiveTab::Template,
                    "Template Generator",
                )
                .clicked()
            {
                self.state.active_tab = ActiveTab::Template;
            }
            if ui
                .selectable_label(self.state.active_tab == ActiveTab::Image, "Image Generator")
                .clicked()
            {
                self.state.active_tab = ActiveTab::Image;
            }
        });
        ui.separator();

        let busy = self.state.loading.is_some();
        match self.state.active_tab {
            ActiveTab::Template => {
                let response = widgets::brief_form(ui, &mut self.form, &self.templates, busy);
                if response.submitted {
                    self.submit_template();
                }
            }
            ActiveTab::Image => {
                if self.show_image_tab(ui, busy) {
                    self.submit_image_prompt();
                }
            }
        }

        ui.separator();
        self.show_output(ui);
    }

    fn show_image_tab(&mut self, ui: &mut egui::Ui, busy: bool) -> bool {
        ui.heading("1. Create an Image");

        ui.label("Prompt");
        ui.add(
            egui::TextEdit::multiline(&mut self.state.image_prompt)
                .hint_text("e.g., A photorealistic image of a cat wearing a spacesuit on Mars")
                .desired_rows(4),
        );

        egui::ComboBox::from_label("Aspect Ratio")
            .selected_text(self.state.image_aspect_ratio.label())
            .show_ui(ui, |ui| {
                for ratio in AspectRatio::ALL {
                    ui.selectable_value(&mut self.state.image_aspect_ratio, ratio, ratio.label());
                }
            });

        ui.add_enabled(!busy, egui::Button::new("Generate Image"))
            .clicked()
    }

    fn show_output(&mut self, ui: &mut egui::Ui) {
        if let Some(message) = &self.state.loading {
            ui.label(message.clone());
        }
        if let Some(err) = &self.state.last_error {
            ui.colored_label(egui::Color32::RED, err.clone());
        }

        let mut edit_requested = false;
        if let Some(image) = &self.state.generated_image {
            ui.label(format!(
                "Generated asset ready ({}, {} bytes base64)",
                image.mime_type,
                image.data.len()
            ));

            ui.label("Refine with an instruction:");
            ui.add(
                egui::TextEdit::singleline(&mut self.state.edit_prompt)
                    .hint_text("e.g., Make the background blue"),
            );
            if ui
                .add_enabled(!self.state.is_editing, egui::Button::new("Apply Edit"))
                .clicked()
            {
                edit_requested = true;
            }
        }
        if edit_requested {
            self.submit_edit();
        }

        if let Some(text) = &self.state.suggestions {
            ui.separator();
            ui.heading("AI Design Suggestions");
            for block in parse_suggestions(text) {
                match block {
                    SuggestionBlock::Heading(heading) => {
                        ui.strong(heading);
                    }
                    SuggestionBlock::Paragraph(paragraph) => {
                        ui.label(paragraph);
                    }
                }
            }
        }
    }
}

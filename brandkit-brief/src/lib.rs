//! brandkit-brief: the business brief schema + layout templates for BRANDKIT.
//!
//! Design rules:
//! - The brief is one flat, value-comparable record; field edits replace the
//!   whole record, which is what makes snapshot undo/redo work upstream.
//! - Templates are a fixed catalog in v1; the AI never invents layouts.
//! - All structs are serializable for session save/load.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Schema version for forward compatibility.
pub const BRIEF_SCHEMA_VERSION: &str = "1.0";

/// Industry options offered in the brief form.
pub const INDUSTRIES: &[&str] = &[
    "Technology",
    "Healthcare",
    "Finance",
    "Retail",
    "Education",
    "Real Estate",
    "Restaurant",
    "Consulting",
    "Creative Agency",
    "Fashion",
    "Travel",
];

/// Output aspect ratios the generation service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "9:16")]
    Vertical,
    #[serde(rename = "4:3")]
    Standard,
    #[serde(rename = "3:4")]
    Portrait,
}

impl AspectRatio {
    /// The wire string the generation service expects, e.g. `"16:9"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Square => "1:1",
            AspectRatio::Vertical => "9:16",
            AspectRatio::Standard => "4:3",
            AspectRatio::Portrait => "3:4",
        }
    }

    /// Human label for UI pickers.
    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Widescreen => "16:9 (Widescreen)",
            AspectRatio::Square => "1:1 (Square)",
            AspectRatio::Vertical => "9:16 (Vertical)",
            AspectRatio::Standard => "4:3 (Standard)",
            AspectRatio::Portrait => "3:4 (Portrait)",
        }
    }

    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Widescreen,
        AspectRatio::Square,
        AspectRatio::Vertical,
        AspectRatio::Standard,
        AspectRatio::Portrait,
    ];
}

impl Default for AspectRatio {
    fn default() -> Self {
        AspectRatio::Widescreen
    }
}

/// The fixed layout templates offered in v1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    BusinessCard,
    Flyer,
    SocialPost,
}

impl TemplateId {
    pub fn name(&self) -> &'static str {
        match self {
            TemplateId::BusinessCard => "Business Card",
            TemplateId::Flyer => "Flyer",
            TemplateId::SocialPost => "Social Media Post",
        }
    }
}

/// Catalog entry describing one layout template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: TemplateId,
    pub name: String,
    pub description: String,
    /// URL to a thumbnail image.
    pub thumbnail: String,
}

/// The built-in template catalog.
pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template {
            id: TemplateId::BusinessCard,
            name: "Business Card".into(),
            description: "A classic business card layout.".into(),
            thumbnail: "https://placehold.co/400x250/1F2937/93C5FD?text=Business%0ACard".into(),
        },
        Template {
            id: TemplateId::Flyer,
            name: "Flyer".into(),
            description: "A promotional flyer for events or services.".into(),
            thumbnail: "https://placehold.co/400x250/1F2937/93C5FD?text=Flyer".into(),
        },
        Template {
            id: TemplateId::SocialPost,
            name: "Social Media Post".into(),
            description: "A square post for platforms like Instagram.".into(),
            thumbnail: "https://placehold.co/400x250/1F2937/93C5FD?text=Social%0APost".into(),
        },
    ]
}

/// Everything the user tells us about their business. This is the snapshot
/// type tracked by the undo/redo history: edits clone the record, change one
/// field, and commit the whole thing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessBrief {
    pub name: String,
    pub tagline: String,
    pub industry: String,
    pub marketing_goal: String,
    pub contact_info: String,
    pub services: String,
    pub call_to_action: String,
    pub template: Option<TemplateId>,
    pub aspect_ratio: AspectRatio,
    /// Route suggestion requests to the slower, more capable model.
    pub thinking_mode: bool,
}

impl Default for BusinessBrief {
    fn default() -> Self {
        Self {
            name: String::new(),
            tagline: String::new(),
            industry: "Technology".into(),
            marketing_goal: String::new(),
            contact_info: String::new(),
            services: String::new(),
            call_to_action: String::new(),
            template: None,
            aspect_ratio: AspectRatio::default(),
            thinking_mode: false,
        }
    }
}

/// Brief-level validation errors.
#[derive(Debug, Error)]
pub enum BriefError {
    #[error("no template selected")]
    NoTemplate,

    #[error("unknown industry: {industry}")]
    UnknownIndustry { industry: String },
}

impl BusinessBrief {
    /// The selected template, or an error suitable for showing the user.
    pub fn selected_template(&self) -> Result<TemplateId, BriefError> {
        self.template.ok_or(BriefError::NoTemplate)
    }

    /// Check fields that come from fixed pick lists.
    pub fn validate(&self) -> Result<(), BriefError> {
        if !INDUSTRIES.contains(&self.industry.as_str()) {
            tracing::error!(industry = %self.industry, "industry not in pick list");
            return Err(BriefError::UnknownIndustry {
                industry: self.industry.clone(),
            });
        }
        Ok(())
    }
}

pub mod prompt;
pub mod session;

pub use prompt::{image_prompt, layout_description, suggestion_prompt};
pub use session::{save_session, load_session, DesignSessionV1, EditEntryV1, SESSION_FILE_EXT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_brief_matches_fresh_form() {
        let brief = BusinessBrief::default();
        assert_eq!(brief.industry, "Technology");
        assert_eq!(brief.aspect_ratio, AspectRatio::Widescreen);
        assert!(brief.template.is_none());
        assert!(!brief.thinking_mode);
    }

    #[test]
    fn default_brief_passes_validation() {
        assert!(BusinessBrief::default().validate().is_ok());
    }

    #[test]
    fn unknown_industry_rejected() {
        let brief = BusinessBrief {
            industry: "Piracy".into(),
            ..Default::default()
        };
        assert!(matches!(
            brief.validate(),
            Err(BriefError::UnknownIndustry { .. })
        ));
    }

    #[test]
    fn selected_template_requires_choice() {
        let mut brief = BusinessBrief::default();
        assert!(matches!(
            brief.selected_template(),
            Err(BriefError::NoTemplate)
        ));

        brief.template = Some(TemplateId::Flyer);
        assert_eq!(brief.selected_template().unwrap(), TemplateId::Flyer);
    }

    #[test]
    fn template_id_wire_format() {
        let json = serde_json::to_string(&TemplateId::SocialPost).unwrap();
        assert_eq!(json, "\"social_post\"");
    }

    #[test]
    fn aspect_ratio_wire_format() {
        let json = serde_json::to_string(&AspectRatio::Vertical).unwrap();
        assert_eq!(json, "\"9:16\"");
        let back: AspectRatio = serde_json::from_str("\"16:9\"").unwrap();
        assert_eq!(back, AspectRatio::Widescreen);
    }

    #[test]
    fn catalog_has_all_templates() {
        let catalog = builtin_templates();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.iter().any(|t| t.id == TemplateId::BusinessCard));
        assert!(catalog.iter().any(|t| t.id == TemplateId::Flyer));
        assert!(catalog.iter().any(|t| t.id == TemplateId::SocialPost));
    }
}

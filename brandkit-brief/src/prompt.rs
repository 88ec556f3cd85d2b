//! Prompt construction for the generation service.
//!
//! The prompts render the user's actual field values into fixed layout
//! descriptions; the service is instructed to typeset that text, not
//! placeholders.

use crate::{BriefError, BusinessBrief, TemplateId};

/// Describe how one template lays out the brief's content.
pub fn layout_description(template: TemplateId, brief: &BusinessBrief) -> String {
    match template {
        TemplateId::BusinessCard => format!(
            "A professional business card. It should feature the business name \
             \"{name}\" prominently. A space for a logo should be in the top-left \
             corner. The tagline \"{tagline}\" should be underneath the name. The \
             contact information \"{contact}\" should be at the bottom. The services \
             \"{services}\" can be listed in a small section. The call to action is \
             \"{cta}\". The design should be clean and professional.",
            name = brief.name,
            tagline = brief.tagline,
            contact = brief.contact_info,
            services = brief.services,
            cta = brief.call_to_action,
        ),
        TemplateId::Flyer => format!(
            "A promotional A5 flyer. It should have a large, eye-catching headline, \
             which is the business name \"{name}\". The tagline is \"{tagline}\". The \
             flyer should list the services offered: \"{services}\". The contact \
             details \"{contact}\" and a strong call to action \"{cta}\" must be \
             clearly visible at the bottom. A space for a logo should be present at \
             the top.",
            name = brief.name,
            tagline = brief.tagline,
            services = brief.services,
            contact = brief.contact_info,
            cta = brief.call_to_action,
        ),
        TemplateId::SocialPost => format!(
            "A square social media post for platforms like Instagram. The design \
             should be vibrant and engaging. The business name \"{name}\" and a space \
             for a logo are key elements. The main message should revolve around the \
             services: \"{services}\" or tagline: \"{tagline}\". Include the call to \
             action \"{cta}\" clearly in the design. Contact info \"{contact}\" can be \
             smaller or omitted in favor of a website URL if provided.",
            name = brief.name,
            services = brief.services,
            tagline = brief.tagline,
            cta = brief.call_to_action,
            contact = brief.contact_info,
        ),
    }
}

/// Build the full image-generation prompt for the brief's selected template.
/// Fails when no template has been chosen yet.
pub fn image_prompt(brief: &BusinessBrief) -> Result<String, BriefError> {
    let template = brief.selected_template()?;
    let layout = layout_description(template, brief);

    tracing::debug!(template = ?template, "building image prompt");

    Ok(format!(
        "Create a professional, high-resolution, photorealistic brand asset based on \
         the following template and business details.\n\
         The final image should look like a professionally designed graphic, ready for \
         print or digital use.\n\
         Render the actual text provided, not placeholder text like \"[Business Name]\".\n\
         \n\
         Template: {template_name}\n\
         Layout Description: {layout}\n\
         \n\
         Business Details to incorporate:\n\
         - Name: {name}\n\
         - Tagline: {tagline}\n\
         - Services: {services}\n\
         - Contact Info: {contact}\n\
         - Call to Action: {cta}\n\
         \n\
         Visual Style Guidance:\n\
         - Industry: {industry}. The style should reflect this (e.g., tech should be \
         modern, healthcare should be trustworthy).\n\
         - Marketing Goal: {goal}. The visual tone should support this goal.\n\
         - Leave a suitable space for a logo as described in the layout.\n\
         \n\
         The final image must be clean, modern, with legible text and a professional \
         layout. Avoid garbled or nonsensical text.",
        template_name = template.name(),
        layout = layout,
        name = brief.name,
        tagline = brief.tagline,
        services = brief.services,
        contact = brief.contact_info,
        cta = brief.call_to_action,
        industry = brief.industry,
        goal = brief.marketing_goal,
    ))
}

/// Build the design-advice prompt. Works with or without a selected template;
/// advice is still useful while the user is deciding.
pub fn suggestion_prompt(brief: &BusinessBrief) -> String {
    let template_name = brief
        .template
        .map(|t| t.name())
        .unwrap_or("no template chosen yet");

    format!(
        "As an expert graphic designer, provide actionable design suggestions for a \
         business in the \"{industry}\" industry.\n\
         Their primary marketing goal is: \"{goal}\".\n\
         Their business name is \"{name}\".\n\
         \n\
         Based on this information, provide clear recommendations. Format your \
         response as a single string. Use \"**Title**\" for headings and newlines to \
         separate paragraphs.\n\
         \n\
         **Color Palette:** Suggest a primary, secondary, and accent color with hex \
         codes. Explain the psychology behind your choices.\n\
         **Font Pairing:** Recommend a headline font and a body font. Explain why \
         they work well together for this brand.\n\
         **Imagery & Style:** Suggest the type of imagery or graphic style that would \
         best represent their brand.\n\
         **Layout Tips:** Give a general tip for arranging elements for their chosen \
         template (\"{template_name}\").",
        industry = brief.industry,
        goal = brief.marketing_goal,
        name = brief.name,
        template_name = template_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> BusinessBrief {
        BusinessBrief {
            name: "Acme Robotics".into(),
            tagline: "Machines that care".into(),
            services: "Industrial automation".into(),
            contact_info: "acme.example, 555-1234".into(),
            call_to_action: "Book a demo".into(),
            marketing_goal: "Attract new corporate clients".into(),
            template: Some(TemplateId::Flyer),
            ..Default::default()
        }
    }

    #[test]
    fn layout_description_renders_field_values() {
        let brief = acme();
        let text = layout_description(TemplateId::BusinessCard, &brief);
        assert!(text.contains("Acme Robotics"));
        assert!(text.contains("Machines that care"));
        assert!(text.contains("555-1234"));
    }

    #[test]
    fn image_prompt_includes_template_and_style_guidance() {
        let brief = acme();
        let prompt = image_prompt(&brief).unwrap();
        assert!(prompt.contains("Template: Flyer"));
        assert!(prompt.contains("Industry: Technology"));
        assert!(prompt.contains("Attract new corporate clients"));
        assert!(prompt.contains("not placeholder text"));
    }

    #[test]
    fn image_prompt_requires_template() {
        let brief = BusinessBrief {
            template: None,
            ..acme()
        };
        assert!(matches!(image_prompt(&brief), Err(BriefError::NoTemplate)));
    }

    #[test]
    fn suggestion_prompt_names_all_sections() {
        let prompt = suggestion_prompt(&acme());
        for section in [
            "**Color Palette:**",
            "**Font Pairing:**",
            "**Imagery & Style:**",
            "**Layout Tips:**",
        ] {
            assert!(prompt.contains(section), "missing section {section}");
        }
        assert!(prompt.contains("Flyer"));
    }

    #[test]
    fn suggestion_prompt_tolerates_missing_template() {
        let brief = BusinessBrief {
            template: None,
            ..acme()
        };
        let prompt = suggestion_prompt(&brief);
        assert!(prompt.contains("no template chosen yet"));
    }
}

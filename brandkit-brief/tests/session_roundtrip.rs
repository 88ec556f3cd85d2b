use brandkit_brief::session::{load_session, save_session};
use brandkit_brief::{AspectRatio, BusinessBrief, DesignSessionV1, TemplateId};

#[test]
fn session_roundtrip() {
    let brief = BusinessBrief {
        name: "Acme Robotics".into(),
        tagline: "Machines that care".into(),
        services: "Industrial automation".into(),
        template: Some(TemplateId::SocialPost),
        aspect_ratio: AspectRatio::Square,
        thinking_mode: true,
        ..Default::default()
    };

    let mut s = DesignSessionV1::new(brief);
    s.push_edit("make the headline larger");
    s.push_edit("swap the accent color to teal");
    s.notes = Some("client prefers the second draft".into());

    let path = std::path::Path::new("target/test_session.brand.json");
    save_session(path, &s).unwrap();
    let s2 = load_session(path).unwrap();

    assert_eq!(s.session_id, s2.session_id);
    assert_eq!(s.brief, s2.brief);
    assert_eq!(s.edit_history, s2.edit_history);
    assert_eq!(s2.brief.template, Some(TemplateId::SocialPost));
}

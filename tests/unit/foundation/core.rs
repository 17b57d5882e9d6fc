use super::*;

#[test]
fn role_prefixes_match_record_field_names() {
    assert_eq!(TextRole::Title.prefix(), "title");
    assert_eq!(TextRole::Subtitle.to_string(), "subtitle");
}

#[test]
fn placement_rect_and_viewport_mapping() {
    let p = Placement::new(110.0, 250.0, 1700.0, 250.0);
    assert_eq!(p.rect(), Rect::new(110.0, 250.0, 1810.0, 500.0));

    let half = p.to_viewport(0.5);
    assert_eq!(half, Rect::new(55.0, 125.0, 905.0, 250.0));
}

use super::*;

#[test]
fn default_slide_uses_virtual_placements() {
    let s = default_slide("1");
    assert_eq!(s.id, "1");
    assert_eq!(s.title_pos, Some(Point::new(110.0, 250.0)));
    assert_eq!(s.title_width, Some(1700.0));
    assert_eq!(s.title_height, Some(250.0));
    assert_eq!(s.subtitle_pos, Some(Point::new(110.0, 520.0)));
    assert_eq!(s.subtitle_height, Some(500.0));
    assert_eq!(s.custom_image, None);
    assert!(!s.auto_advance);
    assert_eq!(s.auto_advance_delay_secs(), 5);
}

#[test]
fn json_field_names_are_camel_case() {
    let v = serde_json::to_value(default_slide("a")).unwrap();
    let obj = v.as_object().unwrap();
    for key in [
        "customImage",
        "titlePos",
        "subtitleWidth",
        "autoAdvanceDelay",
        "textAnimationDelay",
        "titleFontSize",
    ] {
        assert!(obj.contains_key(key), "missing {key}");
    }
    assert_eq!(obj["customImage"], Value::Null);
    assert_eq!(obj["titlePos"]["x"], 110.0);
}

#[test]
fn wrong_typed_fields_are_treated_as_absent() {
    let s: SlideRecord = serde_json::from_str(
        r#"{
            "id": "x",
            "titlePos": {"x": "left", "y": 3},
            "titleWidth": "wide",
            "subtitleHeight": null,
            "autoAdvance": "yes",
            "titleFontSize": [1]
        }"#,
    )
    .unwrap();
    assert_eq!(s.title_pos, None);
    assert_eq!(s.title_width, None);
    assert_eq!(s.subtitle_height, None);
    assert!(!s.auto_advance);
    assert_eq!(s.title_font_size, None);
}

#[test]
fn unknown_fields_round_trip_through_extra() {
    let src = r##"{"id":"7","textColor":"#ff0000","layoutHint":{"grid":true}}"##;
    let s: SlideRecord = serde_json::from_str(src).unwrap();
    assert_eq!(s.extra["textColor"], "#ff0000");

    let back: SlideRecord = serde_json::from_str(&serde_json::to_string(&s).unwrap()).unwrap();
    assert_eq!(back, s);
    assert_eq!(back.extra["layoutHint"]["grid"], true);
}

#[test]
fn text_style_falls_back_to_legacy_and_shared_fields() {
    let mut s: SlideRecord =
        serde_json::from_str(r##"{"id":"1","textColor":"#123456","fontFamily":"Outfit"}"##)
            .unwrap();
    let title = s.text_style(TextRole::Title);
    assert_eq!(title.font_size, 80.0);
    assert_eq!(title.color, "#123456");
    assert_eq!(title.font_family, "Outfit");

    s.subtitle_font_family = Some("Inter".to_string());
    s.subtitle_color = Some("#000".to_string());
    s.subtitle_italic = true;
    let sub = s.text_style(TextRole::Subtitle);
    assert_eq!(sub.font_size, 40.0);
    assert_eq!(sub.color, "#000");
    assert_eq!(sub.font_family, "Inter");
    assert!(sub.italic);

    let bare: SlideRecord = serde_json::from_str(r#"{"id":"2"}"#).unwrap();
    assert_eq!(bare.text_style(TextRole::Title).color, "#ffffff");
    assert_eq!(bare.text_style(TextRole::Title).font_family, "sans-serif");
}

#[test]
fn tokens_parse_or_stay_opaque() {
    let mut s = default_slide("1");
    assert_eq!(s.transition_kind(), Some(SlideTransition::Fade));
    s.transition = Some("hyperspace".to_string());
    assert_eq!(s.transition_kind(), None);
    assert_eq!(s.text_animation_kind(), Some(TextAnimation::None));
}

#[test]
fn auto_advance_delay_is_validated() {
    let mut s = default_slide("1");
    s.set_auto_advance_delay(0.2);
    assert_eq!(s.auto_advance_delay, Some(1.0));
    s.set_auto_advance_delay(1000.0);
    assert_eq!(s.auto_advance_delay_secs(), 300);
    s.auto_advance_delay = Some(7.6);
    assert_eq!(s.auto_advance_delay_secs(), 8);
}

#[test]
fn image_and_background_are_mutually_exclusive() {
    let mut s = default_slide("1");
    s.set_custom_image("blob:ppdeck/1");
    assert!(s.background.is_empty());
    let old = s.set_background("bg-white");
    assert_eq!(old.as_deref(), Some("blob:ppdeck/1"));
    assert_eq!(s.custom_image, None);
    assert_eq!(s.background, "bg-white");
}

#[test]
fn stored_layout_round_trips_per_role() {
    let mut s = default_slide("1");
    let layout = StoredLayout {
        pos: Some(Point::new(1.0, 2.0)),
        width: None,
        height: Some(3.0),
    };
    s.set_stored_layout(TextRole::Subtitle, layout);
    assert_eq!(s.stored_layout(TextRole::Subtitle), layout);
    assert_eq!(s.stored_layout(TextRole::Title).width, Some(1700.0));
}

use super::*;

#[test]
fn every_token_parses_back_to_its_variant() {
    for t in SlideTransition::ALL {
        assert_eq!(SlideTransition::parse(t.as_str()).unwrap(), *t);
    }
    for a in TextAnimation::ALL {
        assert_eq!(TextAnimation::parse(a.as_str()).unwrap(), *a);
    }
}

#[test]
fn parse_is_case_and_whitespace_tolerant() {
    assert_eq!(
        SlideTransition::parse("  Cube-H ").unwrap(),
        SlideTransition::CubeH
    );
    assert_eq!(TextAnimation::parse("FADE-UP").unwrap(), TextAnimation::FadeUp);
}

#[test]
fn unknown_tokens_are_validation_errors() {
    let err = SlideTransition::parse("warp").unwrap_err();
    assert!(err.to_string().contains("unknown SlideTransition 'warp'"));
    assert!(TextAnimation::parse("").is_err());
}

#[test]
fn vocabularies_cover_the_editor_menus() {
    assert_eq!(SlideTransition::ALL.len(), 15);
    assert_eq!(TextAnimation::ALL.len(), 15);
    assert_eq!(SlideTransition::default(), SlideTransition::Fade);
    assert_eq!(TextAnimation::default().to_string(), "none");
}

use super::*;

#[test]
fn new_deck_has_exactly_one_slide() {
    let deck = SlideDeck::new();
    assert_eq!(deck.len(), 1);
    assert!(!deck.is_empty());
    assert_eq!(deck.get(0).map(|s| s.id.as_str()), Some("1"));
}

#[test]
fn empty_slide_lists_are_rejected() {
    assert!(SlideDeck::from_slides(vec![]).is_err());
}

#[test]
fn added_slides_get_unique_ids() {
    let mut deck = SlideDeck::new();
    for _ in 0..20 {
        deck.add_slide();
    }
    let mut ids: Vec<_> = deck.iter().map(|s| s.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 21);
}

#[test]
fn last_slide_cannot_be_removed() {
    let mut deck = SlideDeck::new();
    let err = deck.remove_slide(0).unwrap_err();
    assert!(err.to_string().contains("last slide"));

    let idx = deck.add_slide();
    assert_eq!(idx, 1);
    let removed = deck.remove_slide(0).unwrap();
    assert_eq!(removed.id, "1");
    assert_eq!(deck.len(), 1);
    assert!(deck.remove_slide(5).is_err());
}

#[test]
fn update_reports_out_of_range() {
    let mut deck = SlideDeck::new();
    deck.update(0, |s| s.content = "Hi".to_string()).unwrap();
    assert_eq!(deck.get(0).unwrap().content, "Hi");
    assert!(deck.update(3, |_| ()).is_err());
}

#[test]
fn reset_returns_previous_slides() {
    let mut deck = SlideDeck::new();
    deck.add_slide();
    let old = deck.reset();
    assert_eq!(old.len(), 2);
    assert_eq!(deck, SlideDeck::new());
}

use super::*;
use crate::deck::slide::default_slide;

fn deck(delays: &[Option<f64>]) -> Vec<SlideRecord> {
    delays
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let mut s = default_slide(i.to_string());
            s.auto_advance = d.is_some();
            s.auto_advance_delay = *d;
            s
        })
        .collect()
}

#[test]
fn manual_navigation_stays_in_bounds() {
    let mut p = Playback::new();
    assert_eq!(p.prev(), 0);
    assert_eq!(p.next(3), 1);
    assert_eq!(p.next(3), 2);
    assert_eq!(p.next(3), 2);
    assert!(p.go_to(3, 3).is_err());
    assert_eq!(p.go_to(0, 3).unwrap(), 0);
}

#[test]
fn timer_is_only_armed_while_playing_auto_slides() {
    let slides = deck(&[Some(3.0), None]);
    let mut p = Playback::new();
    assert_eq!(p.auto_advance_due(&slides), None);

    p.start(false);
    assert_eq!(p.auto_advance_due(&slides), Some(Duration::from_secs(3)));
    p.next(slides.len());
    assert_eq!(p.auto_advance_due(&slides), None);
}

#[test]
fn elapsed_timer_advances_then_finishes_and_stops_recording() {
    let slides = deck(&[Some(1.0), Some(1.0)]);
    let mut p = Playback::new();
    p.start(true);

    assert_eq!(p.on_timer_elapsed(slides.len()), PlaybackEvent::Advanced(1));
    assert!(p.is_playing());
    assert_eq!(
        p.on_timer_elapsed(slides.len()),
        PlaybackEvent::Finished {
            stop_recording: true
        }
    );
    assert!(!p.is_playing());
    assert!(!p.is_recording());
    assert_eq!(p.current(), 1);
}

#[test]
fn missing_delay_uses_default() {
    let mut slides = deck(&[Some(1.0)]);
    slides[0].auto_advance_delay = None;
    let mut p = Playback::new();
    p.start(false);
    assert_eq!(p.auto_advance_due(&slides), Some(Duration::from_secs(5)));

    slides[0].auto_advance_delay = Some(0.0);
    assert_eq!(p.auto_advance_due(&slides), Some(Duration::from_secs(5)));
}

#[test]
fn clamp_follows_shrinking_deck() {
    let mut p = Playback::new();
    p.next(5);
    p.next(5);
    p.clamp_to(2);
    assert_eq!(p.current(), 1);
}

//! Auto-advance delay rules and presentation timing helpers.

use std::time::Duration;

use crate::deck::slide::SlideRecord;

/// Shortest auto-advance delay, in seconds.
pub const TIMER_MIN_DELAY_SECS: u32 = 1;
/// Longest auto-advance delay (5 minutes), in seconds.
pub const TIMER_MAX_DELAY_SECS: u32 = 300;
/// Delay used when a slide stores none, in seconds.
pub const TIMER_DEFAULT_DELAY_SECS: u32 = 5;
/// Increment offered by the delay picker, in seconds.
pub const TIMER_STEP_SECS: u32 = 1;

/// Clamp a delay into `TIMER_MIN_DELAY_SECS..=TIMER_MAX_DELAY_SECS` whole seconds.
///
/// NaN yields the default delay.
pub fn validate_delay(secs: f64) -> u32 {
    if secs.is_nan() {
        return TIMER_DEFAULT_DELAY_SECS;
    }
    let min = f64::from(TIMER_MIN_DELAY_SECS);
    let max = f64::from(TIMER_MAX_DELAY_SECS);
    secs.round().clamp(min, max) as u32
}

/// Validated delay as a [`Duration`].
pub fn delay_duration(secs: f64) -> Duration {
    Duration::from_secs(u64::from(validate_delay(secs)))
}

/// Human-readable delay: `"45s"`, `"2m"`, `"1m 30s"`.
pub fn format_delay(secs: f64) -> String {
    let s = validate_delay(secs);
    if s < 60 {
        return format!("{s}s");
    }
    let (m, rem) = (s / 60, s % 60);
    if rem == 0 {
        format!("{m}m")
    } else {
        format!("{m}m {rem}s")
    }
}

/// Seconds `slide` stays on screen before advancing; `0` when auto-advance is off.
pub fn slide_delay(slide: &SlideRecord) -> u32 {
    if slide.auto_advance {
        slide.auto_advance_delay_secs()
    } else {
        0
    }
}

/// Sum of [`slide_delay`] over all slides.
pub fn total_presentation_time(slides: &[SlideRecord]) -> u32 {
    slides.iter().map(slide_delay).sum()
}

/// Elapsed/total as a percentage in `[0, 100]`; `0` when `total` is zero.
pub fn progress_percent(elapsed: Duration, total: Duration) -> f64 {
    if total.is_zero() {
        return 0.0;
    }
    (elapsed.as_secs_f64() / total.as_secs_f64() * 100.0).clamp(0.0, 100.0)
}

/// Delay presets offered by the editor, `(seconds, label)`.
pub fn time_presets() -> Vec<(u32, String)> {
    [3, 5, 10, 15, 30, 60, 120, 180, 300]
        .into_iter()
        .map(|s| (s, format_delay(f64::from(s))))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/playback/timer.rs"]
mod tests;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// Frame interval for the hero pulse, in milliseconds.
const TICK_MS: u32 = 33;
/// One full pulse cycle (1.00 -> 1.03 -> 1.00), in milliseconds.
const CYCLE_MS: u64 = 2000;
const MIN_SCALE: f64 = 1.0;
const MAX_SCALE: f64 = 1.03;

/// Animation driver for the hero card's decorative pulse.
///
/// Owns the oscillating scale value: a tick loop advances a phase counter
/// and recomputes the scale each frame for as long as the component is
/// mounted. Dropping the component drops the future and stops the pulse.
pub fn use_pulse_scale() -> Signal<f64> {
    let mut scale = use_signal(|| MIN_SCALE);

    use_future(move || async move {
        let mut phase_ms: u64 = 0;
        loop {
            TimeoutFuture::new(TICK_MS).await;
            phase_ms = (phase_ms + TICK_MS as u64) % CYCLE_MS;
            scale.set(pulse_scale(phase_ms));
        }
    });

    scale
}

/// Triangle wave over one cycle: rises from 1.00 to 1.03 through the
/// first half, falls back to 1.00 through the second.
pub fn pulse_scale(phase_ms: u64) -> f64 {
    let phase = (phase_ms % CYCLE_MS) as f64 / CYCLE_MS as f64;
    let ramp = if phase < 0.5 {
        phase * 2.0
    } else {
        (1.0 - phase) * 2.0
    };
    MIN_SCALE + (MAX_SCALE - MIN_SCALE) * ramp
}

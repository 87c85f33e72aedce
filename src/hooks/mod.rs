pub mod use_pulse;

pub use use_pulse::use_pulse_scale;

pub mod error;
pub mod parameters;
pub mod waveform;

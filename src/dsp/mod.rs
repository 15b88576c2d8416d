pub mod generators;
pub mod normalise;
pub mod sequencer;

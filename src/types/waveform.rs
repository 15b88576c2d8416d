use crate::dsp::generators::{
    create_sawtooth, create_sine, create_square, create_triangle, Generator,
};
use crate::dsp::sequencer::generate_sweep;
use crate::types::error::SignalError;
use crate::types::parameters::WaveformParameters;

/// Supported waveform types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Waveform {
    #[default]
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

impl Waveform {
    /// All waveforms, in plotting order
    pub const ALL: [Waveform; 4] = [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Sawtooth,
        Waveform::Triangle,
    ];

    /// Generator function for this waveform
    pub fn generator(self) -> Generator {
        match self {
            Waveform::Sine => create_sine,
            Waveform::Square => create_square,
            Waveform::Sawtooth => create_sawtooth,
            Waveform::Triangle => create_triangle,
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Waveform::Sine => "Sine",
            Waveform::Square => "Square",
            Waveform::Sawtooth => "Sawtooth",
            Waveform::Triangle => "Triangle",
        }
    }

    /// Position in [`Waveform::ALL`]
    pub fn index(self) -> usize {
        match self {
            Waveform::Sine => 0,
            Waveform::Square => 1,
            Waveform::Sawtooth => 2,
            Waveform::Triangle => 3,
        }
    }

    /// Generate one sweep of this waveform
    pub fn sweep(
        self,
        params: &WaveformParameters,
        interval_seconds: f64,
    ) -> Result<Vec<f64>, SignalError> {
        let samples = generate_sweep(
            self.generator(),
            params.amplitude,
            params.frequency,
            params.phase,
            interval_seconds,
        )?;

        log::debug!("Generated {} sweep with {} samples", self.name(), samples.len());
        Ok(samples)
    }
}

use super::generators::Generator;
use crate::types::error::SignalError;
use crate::types::parameters::{Sample, SamplingContext, WaveformParameters};

/// Lazily evaluated sweep: one generator call per timestamp
pub struct Sweep {
    generator: Generator,
    amplitude: f64,
    /// Frequency per sample step (frequency * interval)
    effective_frequency: f64,
    phase: f64,
    sampling_rate: f64,
    timestamp: u64,
    sample_count: u64,
}

impl Iterator for Sweep {
    type Item = Result<Sample, SignalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.timestamp >= self.sample_count {
            return None;
        }

        let timestamp = self.timestamp;
        self.timestamp += 1;

        let value = (self.generator)(
            self.amplitude,
            self.effective_frequency,
            self.phase,
            timestamp,
            self.sampling_rate,
        );

        Some(value.map(|value| Sample { timestamp, value }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sample_count.saturating_sub(self.timestamp) as usize;
        (remaining, Some(remaining))
    }
}

/// Build a sweep for `generator` over the given parameters and sampling context
pub fn sweep(generator: Generator, params: &WaveformParameters, ctx: &SamplingContext) -> Sweep {
    if !ctx.satisfies_nyquist(params.frequency) {
        log::debug!(
            "Sampling rate {} is below Nyquist for frequency {}",
            ctx.sampling_rate,
            params.frequency
        );
    }

    Sweep {
        generator,
        amplitude: params.amplitude,
        effective_frequency: ctx.effective_frequency(params.frequency),
        phase: params.phase,
        sampling_rate: ctx.sampling_rate,
        timestamp: 0,
        sample_count: ctx.sample_count(params.frequency),
    }
}

/// Generate the samples of one sweep
///
/// Sampling rate is fixed at 4x `frequency` and the sweep holds
/// floor(frequency / interval_seconds) samples. The generator receives
/// `frequency * interval_seconds` as its frequency. A degenerate sweep (zero
/// frequency, interval too long) is empty, not an error.
pub fn generate_sweep(
    generator: Generator,
    amplitude: f64,
    frequency: f64,
    phase: f64,
    interval_seconds: f64,
) -> Result<Vec<f64>, SignalError> {
    let params = WaveformParameters::new(amplitude, frequency, phase);
    let ctx = SamplingContext::for_frequency(frequency, interval_seconds);

    sweep(generator, &params, &ctx)
        .map(|sample| sample.map(|s| s.value))
        .collect()
}

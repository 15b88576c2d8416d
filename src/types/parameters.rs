/// Sampling rate is always derived as this multiple of the signal frequency
pub const OVERSAMPLING_FACTOR: f64 = 4.0;

/// Time step between consecutive sweep samples, in seconds
pub const DEFAULT_INTERVAL_SECONDS: f64 = 0.01;

/// Amplitude, frequency and phase of a generated waveform
///
/// `phase` is a fraction of one period. Values outside [0, 1) are accepted
/// and wrap; a negative `amplitude` flips polarity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformParameters {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
}

impl Default for WaveformParameters {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            frequency: 1.0,
            phase: 0.0,
        }
    }
}

impl WaveformParameters {
    pub fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }
}

/// Sampling rate and time step of one sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingContext {
    pub sampling_rate: f64,
    pub interval_seconds: f64,
}

impl SamplingContext {
    /// Derive the context for a signal, oversampling at 4x its frequency
    pub fn for_frequency(frequency: f64, interval_seconds: f64) -> Self {
        Self {
            sampling_rate: OVERSAMPLING_FACTOR * frequency,
            interval_seconds,
        }
    }

    /// Number of samples in a sweep: floor(frequency / interval)
    /// Degenerate inputs (zero or negative frequency, zero interval) give 0
    pub fn sample_count(&self, frequency: f64) -> u64 {
        let count = (frequency / self.interval_seconds).floor();
        if count.is_finite() && count >= 1.0 {
            count as u64
        } else {
            0
        }
    }

    /// Frequency per sample step, as handed to the generators
    pub fn effective_frequency(&self, frequency: f64) -> f64 {
        frequency * self.interval_seconds
    }

    /// Whether the sampling rate satisfies the Nyquist constraint for `frequency`
    pub fn satisfies_nyquist(&self, frequency: f64) -> bool {
        self.sampling_rate >= 2.0 * frequency
    }
}

/// One generated sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp: u64,
    pub value: f64,
}

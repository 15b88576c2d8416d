use crate::types::error::SignalError;
use crate::types::parameters::WaveformParameters;
use crate::types::waveform::Waveform;

/// One plotted sweep
pub struct Trace {
    pub waveform: Waveform,
    /// (timestamp, value) pairs ready for the chart widget
    pub points: Vec<(f64, f64)>,
    pub visible: bool,
}

/// UI application state
/// Holds the four precomputed sweeps and which of them are shown
pub struct App {
    /// Parameters the sweeps were generated from
    pub parameters: WaveformParameters,
    /// One trace per waveform, in `Waveform::ALL` order
    pub traces: Vec<Trace>,
    /// Whether to quit the application
    pub should_quit: bool,
}

impl App {
    /// Generate every sweep for `parameters`
    pub fn new(parameters: WaveformParameters, interval_seconds: f64) -> Result<Self, SignalError> {
        let traces = Waveform::ALL
            .iter()
            .map(|&waveform| {
                let samples = waveform.sweep(&parameters, interval_seconds)?;
                let points = samples
                    .iter()
                    .enumerate()
                    .map(|(ts, value)| (ts as f64, *value))
                    .collect();

                Ok(Trace {
                    waveform,
                    points,
                    visible: true,
                })
            })
            .collect::<Result<Vec<_>, SignalError>>()?;

        Ok(Self {
            parameters,
            traces,
            should_quit: false,
        })
    }

    /// Show or hide a waveform's trace
    pub fn toggle(&mut self, waveform: Waveform) {
        if let Some(trace) = self.traces.get_mut(waveform.index()) {
            trace.visible = !trace.visible;
            log::debug!("{} trace visible: {}", waveform.name(), trace.visible);
        }
    }

    /// Number of samples per sweep (all sweeps share the same length)
    pub fn sample_count(&self) -> usize {
        self.traces.first().map_or(0, |t| t.points.len())
    }

    /// Horizontal chart bounds covering every timestamp
    pub fn x_bounds(&self) -> [f64; 2] {
        let last = self.sample_count().saturating_sub(1).max(1);
        [0.0, last as f64]
    }

    /// Vertical chart bounds with a little headroom over the amplitude
    pub fn y_bounds(&self) -> [f64; 2] {
        let peak = self.parameters.amplitude.abs();
        let peak = if peak > 0.0 && peak.is_finite() { peak * 1.1 } else { 1.0 };
        [-peak, peak]
    }

    /// Mark app for quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

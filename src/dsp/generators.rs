//! Instantaneous waveform generators.
//!
//! Every generator shares the [`Generator`] signature so the sequencer can take
//! any of them as a plain function value. Triangle and sawtooth are built from
//! the wrap primitive in [`super::normalise`] with manual arithmetic only: the
//! embedded target these are written for has basic trigonometry and nothing
//! else, so no range or interpolation helpers are used here.

use std::f64::consts::PI;

use super::normalise::normalise_min_to_max;
use crate::types::error::SignalError;

/// Generator signature: (amplitude, frequency, phase, timestamp, sampling_rate)
pub type Generator = fn(f64, f64, f64, u64, f64) -> Result<f64, SignalError>;

/// Sine wave
/// `phase` is a fraction of a full cycle and is scaled by 2π before use
pub fn create_sine(
    amplitude: f64,
    frequency: f64,
    phase: f64,
    timestamp: u64,
    sampling_rate: f64,
) -> Result<f64, SignalError> {
    let phase = phase * 2.0 * PI;
    let coeff = 2.0 * PI * frequency * (timestamp as f64 / sampling_rate);

    Ok(amplitude * (coeff + phase).sin())
}

/// Square wave, the sign of the matching sine scaled by amplitude
/// An exact zero crossing has sign 0 and yields 0.0
pub fn create_square(
    amplitude: f64,
    frequency: f64,
    phase: f64,
    timestamp: u64,
    sampling_rate: f64,
) -> Result<f64, SignalError> {
    let val = create_sine(amplitude, frequency, phase, timestamp, sampling_rate)?;

    Ok(sign(val) * amplitude)
}

/// Triangle wave
pub fn create_triangle(
    amplitude: f64,
    _frequency: f64,
    phase: f64,
    timestamp: u64,
    sampling_rate: f64,
) -> Result<f64, SignalError> {
    // Quarter-period shift puts phase 0 on the rising zero crossing
    let offset = normalise_min_to_max(phase + 0.25, 1.0, 0.0)? * sampling_rate;
    let t = normalise_min_to_max(timestamp as f64 + offset, sampling_rate, 0.0)?;

    // t peaks at 0.5 and the ramp spans 2 * amplitude, so scale by 4
    let scale = amplitude * 4.0;
    let mut ret = t * scale;

    if t > 0.5 {
        ret = scale - ret;
    }

    // Pull the ramp down from [0, 2A] to [-A, A]
    ret -= amplitude;

    Ok(ret)
}

/// Sawtooth wave, rising from -amplitude to +amplitude once per period
pub fn create_sawtooth(
    amplitude: f64,
    _frequency: f64,
    phase: f64,
    timestamp: u64,
    sampling_rate: f64,
) -> Result<f64, SignalError> {
    // Half-period shift aligns phase 0 with the triangle's rising zero crossing
    let offset = normalise_min_to_max(phase - 0.5, 1.0, 0.0)? * sampling_rate;
    let t = normalise_min_to_max(timestamp as f64 + offset, sampling_rate, 0.0)?;

    Ok((t * amplitude * 2.0) - amplitude)
}

fn sign(val: f64) -> f64 {
    if val > 0.0 {
        1.0
    } else if val < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ALL: [Generator; 4] = [create_sine, create_square, create_triangle, create_sawtooth];

    #[test]
    fn test_sine_quarter_period() {
        assert_eq!(create_sine(1.0, 1.0, 0.0, 0, 4.0).unwrap(), 0.0);
        assert_relative_eq!(create_sine(1.0, 1.0, 0.0, 1, 4.0).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(create_sine(1.0, 1.0, 0.0, 2, 4.0).unwrap(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(create_sine(1.0, 1.0, 0.0, 3, 4.0).unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sine_phase_and_amplitude() {
        // Quarter-cycle phase turns the sine into a cosine
        assert_relative_eq!(create_sine(2.0, 1.0, 0.25, 0, 4.0).unwrap(), 2.0, epsilon = 1e-12);
        // Negative amplitude flips polarity
        assert_relative_eq!(create_sine(-3.0, 1.0, 0.0, 1, 4.0).unwrap(), -3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sine_periodicity() {
        let frequency = 0.5;
        let sampling_rate = 4.0;
        let period = (sampling_rate / frequency) as u64;

        for ts in 0..32 {
            for cycles in 1..4 {
                let a = create_sine(1.5, frequency, 0.1, ts, sampling_rate).unwrap();
                let later = ts + cycles * period;
                let b = create_sine(1.5, frequency, 0.1, later, sampling_rate).unwrap();
                assert_relative_eq!(a, b, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_square_levels() {
        for amplitude in [1.0, 2.5, -0.75] {
            for ts in 0..200 {
                let val = create_square(amplitude, 0.13, 0.3, ts, 7.0).unwrap();
                assert!(
                    val == amplitude || val == -amplitude || val == 0.0,
                    "unexpected square level {}",
                    val
                );
            }
        }
    }

    #[test]
    fn test_square_follows_sine_sign() {
        for ts in 0..100 {
            let sine = create_sine(1.0, 0.37, 0.0, ts, 9.0).unwrap();
            let square = create_square(1.0, 0.37, 0.0, ts, 9.0).unwrap();
            if sine != 0.0 {
                assert_eq!(square, sine.signum());
            }
        }
    }

    #[test]
    fn test_square_zero_crossing() {
        // sin(0) is exactly zero
        assert_eq!(create_square(1.0, 1.0, 0.0, 0, 4.0).unwrap(), 0.0);
        assert_eq!(create_square(1.0, 1.0, 0.0, 1, 4.0).unwrap(), 1.0);
        assert_eq!(create_square(1.0, 1.0, 0.0, 3, 4.0).unwrap(), -1.0);
    }

    #[test]
    fn test_triangle_shape() {
        assert_eq!(create_triangle(1.0, 1.0, 0.0, 0, 4.0).unwrap(), 0.0);
        assert_eq!(create_triangle(1.0, 1.0, 0.0, 1, 4.0).unwrap(), 1.0);
        assert_eq!(create_triangle(1.0, 1.0, 0.0, 2, 4.0).unwrap(), 0.0);
        assert_eq!(create_triangle(1.0, 1.0, 0.0, 3, 4.0).unwrap(), -1.0);
        assert_eq!(create_triangle(1.0, 1.0, 0.0, 4, 4.0).unwrap(), 0.0);
    }

    #[test]
    fn test_triangle_phase_wraps() {
        // Phase 1.25 and -0.75 are the same point in the cycle as 0.25
        let reference = create_triangle(1.0, 1.0, 0.25, 0, 8.0).unwrap();
        assert_eq!(reference, 1.0);
        assert_eq!(create_triangle(1.0, 1.0, 1.25, 0, 8.0).unwrap(), reference);
        assert_eq!(create_triangle(1.0, 1.0, -0.75, 0, 8.0).unwrap(), reference);
    }

    #[test]
    fn test_sawtooth_shape() {
        // Phase 0 sits on the rising zero crossing, like sine and triangle
        assert_eq!(create_sawtooth(1.0, 1.0, 0.0, 0, 4.0).unwrap(), 0.0);
        assert_eq!(create_sawtooth(1.0, 1.0, 0.0, 1, 4.0).unwrap(), 0.5);
        assert_eq!(create_sawtooth(1.0, 1.0, 0.0, 2, 4.0).unwrap(), -1.0);
        assert_eq!(create_sawtooth(1.0, 1.0, 0.0, 3, 4.0).unwrap(), -0.5);

        // Half-cycle phase starts the ramp at its minimum
        assert_eq!(create_sawtooth(1.0, 1.0, 0.5, 0, 4.0).unwrap(), -1.0);
    }

    #[test]
    fn test_sawtooth_rises_until_wrap() {
        let sampling_rate = 40.0;
        let mut previous = create_sawtooth(1.0, 1.0, 0.5, 0, sampling_rate).unwrap();
        assert_eq!(previous, -1.0);

        for ts in 1..40 {
            let val = create_sawtooth(1.0, 1.0, 0.5, ts, sampling_rate).unwrap();
            assert!(val > previous);
            previous = val;
        }

        assert_eq!(create_sawtooth(1.0, 1.0, 0.5, 40, sampling_rate).unwrap(), -1.0);
    }

    #[test]
    fn test_ramps_stay_in_range() {
        for amplitude in [1.0, 0.2, -4.0] {
            for phase in [-1.3, -0.5, 0.0, 0.1, 0.5, 0.99, 2.7] {
                for ts in 0..120 {
                    let tri = create_triangle(amplitude, 0.1, phase, ts, 11.0).unwrap();
                    let saw = create_sawtooth(amplitude, 0.1, phase, ts, 11.0).unwrap();
                    let limit = f64::abs(amplitude) + 1e-12;
                    assert!(tri.abs() <= limit, "triangle {} out of range", tri);
                    assert!(saw.abs() <= limit, "sawtooth {} out of range", saw);
                }
            }
        }
    }

    #[test]
    fn test_zero_sampling_rate_is_domain_error() {
        assert!(create_triangle(1.0, 1.0, 0.0, 3, 0.0).is_err());
        assert!(create_sawtooth(1.0, 1.0, 0.0, 3, 0.0).is_err());
    }

    #[test]
    fn test_generators_are_idempotent() {
        for generator in ALL {
            for ts in 0..50 {
                let a = generator(1.7, 0.03, 0.4, ts, 12.0).unwrap();
                let b = generator(1.7, 0.03, 0.4, ts, 12.0).unwrap();
                assert_eq!(a.to_bits(), b.to_bits());
            }
        }
    }
}

use crate::types::error::SignalError;

/// Normalise a non-periodic value linearly against `minval..maxval`
/// Fails when the range is empty rather than returning inf/NaN
pub fn normalise(val: f64, maxval: f64, minval: f64) -> Result<f64, SignalError> {
    let range = maxval - minval;
    if range == 0.0 {
        return Err(SignalError::Domain { maxval, minval });
    }

    Ok((val - minval) / range)
}

/// Normalise a periodic value, wrapping it into [0, 1)
///
/// Uses the mathematical floor, so values below `minval` wrap from the top
/// of the period instead of mirroring.
pub fn normalise_min_to_max(val: f64, maxval: f64, minval: f64) -> Result<f64, SignalError> {
    let ret = normalise(val, maxval, minval)?;
    let wrapped = ret - ret.floor();

    // A tiny negative ratio rounds up to exactly one period
    if wrapped >= 1.0 {
        return Ok(0.0);
    }

    Ok(wrapped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalise_endpoints() {
        assert_eq!(normalise(2.0, 6.0, 2.0).unwrap(), 0.0);
        assert_eq!(normalise(6.0, 6.0, 2.0).unwrap(), 1.0);
        assert_eq!(normalise(4.0, 6.0, 2.0).unwrap(), 0.5);
    }

    #[test]
    fn test_normalise_is_linear() {
        for i in -20..20 {
            let val = f64::from(i) * 0.37;
            let expected = (val + 1.5) / 4.0;
            assert_relative_eq!(normalise(val, 2.5, -1.5).unwrap(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_normalise_empty_range() {
        assert_eq!(
            normalise(1.0, 3.0, 3.0),
            Err(SignalError::Domain {
                maxval: 3.0,
                minval: 3.0
            })
        );
        assert!(normalise_min_to_max(1.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_wrap_stays_in_unit_interval() {
        for i in -500..500 {
            let val = f64::from(i) * 0.113;
            let wrapped = normalise_min_to_max(val, 4.0, 0.0).unwrap();
            assert!((0.0..1.0).contains(&wrapped), "{} wrapped to {}", val, wrapped);
        }
    }

    #[test]
    fn test_wrap_period_boundaries() {
        assert_eq!(normalise_min_to_max(0.0, 4.0, 0.0).unwrap(), 0.0);
        assert_eq!(normalise_min_to_max(4.0, 4.0, 0.0).unwrap(), 0.0);
        assert_eq!(normalise_min_to_max(12.0, 4.0, 0.0).unwrap(), 0.0);
        assert_eq!(normalise_min_to_max(-8.0, 4.0, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_wrap_negative_uses_floor() {
        // -0.25 must wrap to 0.75, truncation would give -0.25
        assert_eq!(normalise_min_to_max(-0.25, 1.0, 0.0).unwrap(), 0.75);
        assert_eq!(normalise_min_to_max(-0.5, 1.0, 0.0).unwrap(), 0.5);
        assert_eq!(normalise_min_to_max(-1.0, 4.0, 0.0).unwrap(), 0.75);
    }

    #[test]
    fn test_wrap_tiny_negative() {
        assert_eq!(normalise_min_to_max(-1e-20, 1.0, 0.0).unwrap(), 0.0);
    }
}

//! The circle calculator used by the hands-on practice section.

/// Derived measurements for a circle of a given radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleMetrics {
    pub radius: f64,
    pub diameter: f64,
    pub circumference: f64,
    pub area: f64,
}

impl CircleMetrics {
    /// Computes metrics for `radius`, or `None` when the radius is not a
    /// positive finite number (the calculator shows dashes in that case).
    #[must_use]
    pub fn from_radius(radius: f64) -> Option<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return None;
        }
        Some(Self {
            radius,
            diameter: 2.0 * radius,
            circumference: 2.0 * std::f64::consts::PI * radius,
            area: std::f64::consts::PI * radius * radius,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_five_matches_the_classroom_numbers() {
        let metrics = CircleMetrics::from_radius(5.0).unwrap();
        assert_eq!(metrics.diameter, 10.0);
        assert!((metrics.circumference - 31.4159).abs() < 1e-3);
        assert!((metrics.area - 78.5398).abs() < 1e-3);
    }

    #[test]
    fn non_positive_and_non_finite_radii_are_rejected() {
        assert!(CircleMetrics::from_radius(0.0).is_none());
        assert!(CircleMetrics::from_radius(-2.5).is_none());
        assert!(CircleMetrics::from_radius(f64::NAN).is_none());
        assert!(CircleMetrics::from_radius(f64::INFINITY).is_none());
    }
}

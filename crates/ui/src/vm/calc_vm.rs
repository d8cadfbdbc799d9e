use coach_core::geometry::CircleMetrics;

/// Display rows for the interactive radius calculator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CircleCalcVm {
    pub diameter: String,
    pub circumference: String,
    pub area: String,
}

impl CircleCalcVm {
    const PLACEHOLDER: &'static str = "\u{2014}";

    fn empty() -> Self {
        Self {
            diameter: Self::PLACEHOLDER.to_string(),
            circumference: Self::PLACEHOLDER.to_string(),
            area: Self::PLACEHOLDER.to_string(),
        }
    }
}

/// Maps the raw radius input field to calculator rows. Anything that is not
/// a positive finite number renders as placeholders.
#[must_use]
pub fn map_calculator(input: &str) -> CircleCalcVm {
    let Ok(radius) = input.trim().parse::<f64>() else {
        return CircleCalcVm::empty();
    };
    let Some(metrics) = CircleMetrics::from_radius(radius) else {
        return CircleCalcVm::empty();
    };
    CircleCalcVm {
        diameter: format!("{:.2} cm", metrics.diameter),
        circumference: format!("{:.2} cm", metrics.circumference),
        area: format!("{:.2} cm\u{b2}", metrics.area),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_radius_fills_every_row() {
        let vm = map_calculator("5");
        assert_eq!(vm.diameter, "10.00 cm");
        assert_eq!(vm.circumference, "31.42 cm");
        assert_eq!(vm.area, "78.54 cm\u{b2}");
    }

    #[test]
    fn garbage_and_nonpositive_input_show_placeholders() {
        for input in ["", "abc", "-3", "0", "NaN"] {
            let vm = map_calculator(input);
            assert_eq!(vm.diameter, "\u{2014}", "input {input:?}");
        }
    }

    #[test]
    fn input_is_trimmed() {
        let vm = map_calculator("  2.5  ");
        assert_eq!(vm.diameter, "5.00 cm");
    }
}

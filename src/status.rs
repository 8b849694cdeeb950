/// Upper bound (inclusive) of the "Low" band.
pub const LOW_MAX: f64 = 33.0;

/// Upper bound (inclusive) of the "Medium" band. Anything above is "High".
pub const MEDIUM_MAX: f64 = 66.0;

pub const MIN_VALUE: f64 = 0.0;
pub const MAX_VALUE: f64 = 100.0;

/// What a percentage measures; decides the label and color policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MeasurementKind {
    Stress,
    WellBeing,
    #[default]
    Metric,
}

/// Qualitative band of a clamped measurement.
///
/// Also used as the severity scale of [`ColorToken::Severity`], so the
/// ordering matters: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn label(&self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }

    /// Mirror around `Medium`.
    pub fn inverted(&self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::Medium => Level::Medium,
            Level::High => Level::Low,
        }
    }

    /// Band for an already clamped value.
    fn for_value(v: f64) -> Level {
        if v <= LOW_MAX {
            Level::Low
        } else if v <= MEDIUM_MAX {
            Level::Medium
        } else {
            Level::High
        }
    }
}

/// Abstract fill color. The stylesheet owns the actual colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Severity(Level),
    Accent,
}

impl ColorToken {
    /// CSS custom property reference for inline `background-color`.
    pub fn css_value(&self) -> &'static str {
        match self {
            ColorToken::Severity(Level::Low) => "var(--color-stress-low)",
            ColorToken::Severity(Level::Medium) => "var(--color-stress-medium)",
            ColorToken::Severity(Level::High) => "var(--color-stress-high)",
            ColorToken::Accent => "var(--color-accent-primary)",
        }
    }

    pub fn severity(&self) -> Option<Level> {
        match self {
            ColorToken::Severity(level) => Some(*level),
            ColorToken::Accent => None,
        }
    }
}

/// Result of [`classify`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub clamped_value: f64,
    /// `None` for [`MeasurementKind::Metric`].
    pub level: Option<Level>,
    pub color: ColorToken,
}

impl Classification {
    /// Bucket text, empty for plain metrics.
    pub fn label(&self) -> &'static str {
        self.level.map(|l| l.label()).unwrap_or("")
    }

    /// Readout shown next to the indicator label, e.g. `"72% (High)"`.
    pub fn readout(&self) -> String {
        match self.level {
            Some(level) => format!("{}% ({})", self.clamped_value, level.label()),
            None => format!("{}%", self.clamped_value),
        }
    }
}

/// Clamp a raw measurement into `[0, 100]`.
///
/// NaN maps to 0 (as does -0.0, so readouts never show "-0%"). Infinities
/// clamp like any other out-of-range value.
pub fn clamp_measurement(value: f64) -> f64 {
    if value.is_nan() || value <= MIN_VALUE {
        MIN_VALUE
    } else if value >= MAX_VALUE {
        MAX_VALUE
    } else {
        value
    }
}

/// Classify a raw measurement for the given kind.
///
/// Total over all `f64` inputs. Stress and well-being share bands and labels;
/// well-being reads the severity palette backwards because a low score is the
/// bad outcome there.
pub fn classify(value: f64, kind: MeasurementKind) -> Classification {
    let clamped_value = clamp_measurement(value);
    let (level, color) = match kind {
        MeasurementKind::Stress => {
            let level = Level::for_value(clamped_value);
            (Some(level), ColorToken::Severity(level))
        }
        MeasurementKind::WellBeing => {
            let level = Level::for_value(clamped_value);
            (Some(level), ColorToken::Severity(level.inverted()))
        }
        MeasurementKind::Metric => (None, ColorToken::Accent),
    };
    Classification {
        clamped_value,
        level,
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_stress_low() {
        let c = classify(10.0, MeasurementKind::Stress);
        assert_eq!(c.clamped_value, 10.0);
        assert_eq!(c.label(), "Low");
        assert_eq!(c.color, ColorToken::Severity(Level::Low));
    }

    #[test]
    fn test_stress_medium() {
        let c = classify(50.0, MeasurementKind::Stress);
        assert_eq!(c.clamped_value, 50.0);
        assert_eq!(c.label(), "Medium");
        assert_eq!(c.color, ColorToken::Severity(Level::Medium));
    }

    #[test]
    fn test_stress_high() {
        let c = classify(90.0, MeasurementKind::Stress);
        assert_eq!(c.clamped_value, 90.0);
        assert_eq!(c.label(), "High");
        assert_eq!(c.color, ColorToken::Severity(Level::High));
    }

    #[test]
    fn test_well_being_low_uses_high_severity_color() {
        let c = classify(10.0, MeasurementKind::WellBeing);
        assert_eq!(c.clamped_value, 10.0);
        assert_eq!(c.label(), "Low");
        assert_eq!(c.color, ColorToken::Severity(Level::High));
    }

    #[test]
    fn test_metric_clamps_and_has_no_label() {
        let c = classify(150.0, MeasurementKind::Metric);
        assert_eq!(c.clamped_value, 100.0);
        assert_eq!(c.label(), "");
        assert_eq!(c.color, ColorToken::Accent);
    }

    #[test]
    fn test_negative_stress_clamps_to_zero() {
        let c = classify(-20.0, MeasurementKind::Stress);
        assert_eq!(c.clamped_value, 0.0);
        assert_eq!(c.label(), "Low");
        assert_eq!(c.color, ColorToken::Severity(Level::Low));
    }

    #[test]
    fn test_band_boundaries_are_inclusive() {
        assert_eq!(classify(33.0, MeasurementKind::Stress).level, Some(Level::Low));
        assert_eq!(classify(33.01, MeasurementKind::Stress).level, Some(Level::Medium));
        assert_eq!(classify(66.0, MeasurementKind::Stress).level, Some(Level::Medium));
        assert_eq!(classify(66.01, MeasurementKind::Stress).level, Some(Level::High));
    }

    #[test]
    fn test_well_being_bands_mirror_stress_colors() {
        for v in [0.0, 33.0, 50.0, 66.0, 80.0, 100.0] {
            let stress = classify(v, MeasurementKind::Stress);
            let well_being = classify(v, MeasurementKind::WellBeing);
            assert_eq!(stress.label(), well_being.label(), "label differs at {}", v);
            let s = stress.color.severity().unwrap();
            let w = well_being.color.severity().unwrap();
            assert_eq!(s.inverted(), w, "colors not mirrored at {}", v);
        }
    }

    #[test]
    fn test_default_kind_is_metric() {
        assert_eq!(MeasurementKind::default(), MeasurementKind::Metric);
    }

    #[test]
    fn test_nan_is_treated_as_zero() {
        let c = classify(f64::NAN, MeasurementKind::Stress);
        assert_eq!(c.clamped_value, 0.0);
        assert_eq!(c.label(), "Low");
        assert_eq!(c.color, ColorToken::Severity(Level::Low));
    }

    #[test]
    fn test_infinities_clamp_to_bounds() {
        assert_eq!(classify(f64::INFINITY, MeasurementKind::Metric).clamped_value, 100.0);
        assert_eq!(classify(f64::NEG_INFINITY, MeasurementKind::Metric).clamped_value, 0.0);
        assert_eq!(
            classify(f64::INFINITY, MeasurementKind::WellBeing).color,
            ColorToken::Severity(Level::Low)
        );
    }

    #[test]
    fn test_readout_formatting() {
        assert_eq!(classify(72.0, MeasurementKind::Stress).readout(), "72% (High)");
        assert_eq!(classify(40.5, MeasurementKind::WellBeing).readout(), "40.5% (Medium)");
        assert_eq!(classify(85.0, MeasurementKind::Metric).readout(), "85%");
        assert_eq!(classify(-3.0, MeasurementKind::Metric).readout(), "0%");
    }

    #[test]
    fn test_css_values() {
        assert_eq!(ColorToken::Severity(Level::Low).css_value(), "var(--color-stress-low)");
        assert_eq!(ColorToken::Severity(Level::Medium).css_value(), "var(--color-stress-medium)");
        assert_eq!(ColorToken::Severity(Level::High).css_value(), "var(--color-stress-high)");
        assert_eq!(ColorToken::Accent.css_value(), "var(--color-accent-primary)");
    }

    fn kind_strategy() -> impl Strategy<Value = MeasurementKind> {
        prop_oneof![
            Just(MeasurementKind::Stress),
            Just(MeasurementKind::WellBeing),
            Just(MeasurementKind::Metric),
        ]
    }

    proptest! {
        #[test]
        fn clamped_value_stays_in_range(v in any::<f64>(), kind in kind_strategy()) {
            let c = classify(v, kind);
            prop_assert!(c.clamped_value >= MIN_VALUE && c.clamped_value <= MAX_VALUE);
        }

        #[test]
        fn values_below_zero_clamp_to_zero(v in -1.0e9f64..=0.0) {
            prop_assert_eq!(clamp_measurement(v), 0.0);
        }

        #[test]
        fn values_above_hundred_clamp_to_hundred(v in 100.0f64..1.0e9) {
            prop_assert_eq!(clamp_measurement(v), 100.0);
        }

        #[test]
        fn clamping_is_idempotent(v in any::<f64>(), kind in kind_strategy()) {
            let once = classify(v, kind);
            let twice = classify(once.clamped_value, kind);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn stress_severity_is_non_decreasing(a in -50.0f64..150.0, b in -50.0f64..150.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let s_lo = classify(lo, MeasurementKind::Stress).color.severity();
            let s_hi = classify(hi, MeasurementKind::Stress).color.severity();
            prop_assert!(s_lo <= s_hi);
        }

        #[test]
        fn well_being_severity_is_non_increasing(a in -50.0f64..150.0, b in -50.0f64..150.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let w_lo = classify(lo, MeasurementKind::WellBeing);
            let w_hi = classify(hi, MeasurementKind::WellBeing);
            prop_assert!(w_lo.color.severity() >= w_hi.color.severity());
            prop_assert_eq!(w_lo.label(), classify(lo, MeasurementKind::Stress).label());
            prop_assert_eq!(w_hi.label(), classify(hi, MeasurementKind::Stress).label());
        }

        #[test]
        fn metric_never_has_a_label(v in any::<f64>()) {
            let c = classify(v, MeasurementKind::Metric);
            prop_assert_eq!(c.label(), "");
            prop_assert_eq!(c.color, ColorToken::Accent);
        }
    }
}

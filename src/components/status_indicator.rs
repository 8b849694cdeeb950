use crate::components::typography::{Typography, TypographyColor, TypographyVariant};
use crate::status::{classify, Classification, MeasurementKind};
use leptos::*;

/// Inline style for the track fill: width from the clamped value, color from the token.
pub fn fill_style(c: &Classification) -> String {
    format!(
        "width: {}%; background-color: {};",
        c.clamped_value,
        c.color.css_value()
    )
}

/// Labelled progress track colored by [`classify`].
#[component]
pub fn StatusIndicator(
    #[prop(into)] value: MaybeSignal<f64>,
    #[prop(optional)] kind: MeasurementKind,
    #[prop(default = "Status")] label: &'static str,
    /// Show the `"72% (High)"` readout next to the label.
    #[prop(default = true)]
    show_value: bool,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] aria_label: Option<&'static str>,
) -> impl IntoView {
    let classification = create_memo(move |_| classify(value.get(), kind));

    let track_style = move || fill_style(&classification.get());

    view! {
        <div
            class=format!("status-indicator {}", class).trim_end().to_string()
            aria-label=aria_label
        >
            <div class="status-indicator__header">
                <Typography variant=TypographyVariant::BodySmall color=TypographyColor::Secondary>
                    {label}
                </Typography>
                <Show when=move || show_value>
                    <Typography variant=TypographyVariant::BodySmall color=TypographyColor::Primary>
                        {move || classification.get().readout()}
                    </Typography>
                </Show>
            </div>
            <div class="status-indicator__track">
                <div class="status-indicator__progress" style=track_style></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_style_uses_clamped_value_and_token() {
        let stress = classify(140.0, MeasurementKind::Stress);
        assert_eq!(fill_style(&stress), "width: 100%; background-color: var(--color-stress-high);");

        let well_being = classify(20.0, MeasurementKind::WellBeing);
        assert_eq!(fill_style(&well_being), "width: 20%; background-color: var(--color-stress-high);");
    }

    #[test]
    fn test_fill_style_for_nan_metric() {
        let style = fill_style(&classify(f64::NAN, MeasurementKind::Metric));
        assert_eq!(style, "width: 0%; background-color: var(--color-accent-primary);");
    }
}

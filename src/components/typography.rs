use leptos::ev::MouseEvent;
use leptos::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypographyVariant {
    DisplayLarge,
    DisplayMedium,
    HeadingLarge,
    HeadingMedium,
    BodyLarge,
    #[default]
    BodyRegular,
    BodySmall,
    Caption,
    Button,
    TabLabel,
}

impl TypographyVariant {
    fn class_suffix(&self) -> &'static str {
        match self {
            TypographyVariant::DisplayLarge => "display-large",
            TypographyVariant::DisplayMedium => "display-medium",
            TypographyVariant::HeadingLarge => "heading-large",
            TypographyVariant::HeadingMedium => "heading-medium",
            TypographyVariant::BodyLarge => "body-large",
            TypographyVariant::BodyRegular => "body-regular",
            TypographyVariant::BodySmall => "body-small",
            TypographyVariant::Caption => "caption",
            TypographyVariant::Button => "button",
            TypographyVariant::TabLabel => "tab-label",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypographyColor {
    #[default]
    Primary,
    Secondary,
    Disabled,
    Success,
    Warning,
    Error,
    Inherit,
}

impl TypographyColor {
    fn class_suffix(&self) -> &'static str {
        match self {
            TypographyColor::Primary => "primary",
            TypographyColor::Secondary => "secondary",
            TypographyColor::Disabled => "disabled",
            TypographyColor::Success => "success",
            TypographyColor::Warning => "warning",
            TypographyColor::Error => "error",
            TypographyColor::Inherit => "inherit",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypographyAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl TypographyAlign {
    fn class_suffix(&self) -> &'static str {
        match self {
            TypographyAlign::Left => "left",
            TypographyAlign::Center => "center",
            TypographyAlign::Right => "right",
            TypographyAlign::Justify => "justify",
        }
    }
}

/// Element a piece of text renders as. Closed on purpose: callers pick from
/// these instead of passing arbitrary tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    Div,
    H1,
    H2,
    H3,
    P,
    Span,
}

impl RenderTarget {
    /// Default element for a variant.
    pub fn for_variant(variant: TypographyVariant) -> RenderTarget {
        match variant {
            TypographyVariant::DisplayLarge | TypographyVariant::DisplayMedium => RenderTarget::H1,
            TypographyVariant::HeadingLarge => RenderTarget::H2,
            TypographyVariant::HeadingMedium => RenderTarget::H3,
            TypographyVariant::Caption => RenderTarget::Span,
            TypographyVariant::BodyLarge
            | TypographyVariant::BodyRegular
            | TypographyVariant::BodySmall
            | TypographyVariant::Button
            | TypographyVariant::TabLabel => RenderTarget::P,
        }
    }
}

/// Style flags for [`typography_classes`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TextStyle {
    pub variant: TypographyVariant,
    pub color: TypographyColor,
    pub align: TypographyAlign,
    pub bold: bool,
    pub italic: bool,
    pub truncate: bool,
}

/// Build the class attribute. Empty pieces are dropped.
pub fn typography_classes(style: TextStyle, extra: &str) -> String {
    let variant = format!("typography--{}", style.variant.class_suffix());
    let color = format!("typography--color-{}", style.color.class_suffix());
    let align = format!("typography--align-{}", style.align.class_suffix());

    [
        "typography",
        variant.as_str(),
        color.as_str(),
        align.as_str(),
        if style.bold { "typography--bold" } else { "" },
        if style.italic { "typography--italic" } else { "" },
        if style.truncate { "typography--truncate" } else { "" },
        extra,
    ]
    .iter()
    .filter(|c| !c.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" ")
}

#[component]
pub fn Typography(
    #[prop(optional)] variant: TypographyVariant,
    #[prop(optional)] color: TypographyColor,
    #[prop(optional)] align: TypographyAlign,
    #[prop(optional)] bold: bool,
    #[prop(optional)] italic: bool,
    #[prop(optional)] truncate: bool,
    #[prop(optional)] class: &'static str,
    /// Overrides the element picked by [`RenderTarget::for_variant`].
    #[prop(optional)]
    target: Option<RenderTarget>,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let style = TextStyle {
        variant,
        color,
        align,
        bold,
        italic,
        truncate,
    };
    let classes = typography_classes(style, class);
    let target = target.unwrap_or_else(|| RenderTarget::for_variant(variant));
    let handle_click = move |ev: MouseEvent| {
        if let Some(cb) = on_click {
            cb.call(ev);
        }
    };

    match target {
        RenderTarget::Div => view! { <div class=classes on:click=handle_click>{children()}</div> }.into_view(),
        RenderTarget::H1 => view! { <h1 class=classes on:click=handle_click>{children()}</h1> }.into_view(),
        RenderTarget::H2 => view! { <h2 class=classes on:click=handle_click>{children()}</h2> }.into_view(),
        RenderTarget::H3 => view! { <h3 class=classes on:click=handle_click>{children()}</h3> }.into_view(),
        RenderTarget::P => view! { <p class=classes on:click=handle_click>{children()}</p> }.into_view(),
        RenderTarget::Span => view! { <span class=classes on:click=handle_click>{children()}</span> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classes() {
        assert_eq!(
            typography_classes(TextStyle::default(), ""),
            "typography typography--body-regular typography--color-primary typography--align-left"
        );
    }

    #[test]
    fn test_all_flags_and_extra_class() {
        let style = TextStyle {
            variant: TypographyVariant::HeadingLarge,
            color: TypographyColor::Secondary,
            align: TypographyAlign::Center,
            bold: true,
            italic: true,
            truncate: true,
        };
        assert_eq!(
            typography_classes(style, "section-title"),
            "typography typography--heading-large typography--color-secondary \
             typography--align-center typography--bold typography--italic \
             typography--truncate section-title"
        );
    }

    #[test]
    fn test_render_target_lookup() {
        use RenderTarget as T;
        use TypographyVariant as V;
        let expected = [
            (V::DisplayLarge, T::H1),
            (V::DisplayMedium, T::H1),
            (V::HeadingLarge, T::H2),
            (V::HeadingMedium, T::H3),
            (V::BodyLarge, T::P),
            (V::BodyRegular, T::P),
            (V::BodySmall, T::P),
            (V::Caption, T::Span),
            (V::Button, T::P),
            (V::TabLabel, T::P),
        ];
        for (variant, target) in expected {
            assert_eq!(RenderTarget::for_variant(variant), target, "{:?}", variant);
        }
    }
}

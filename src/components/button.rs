use crate::components::typography::{RenderTarget, Typography, TypographyAlign, TypographyColor, TypographyVariant};
use leptos::ev::MouseEvent;
use leptos::*;
use leptos_router::A;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Text,
    Danger,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Audience theme. `Default` adds no class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonColor {
    #[default]
    Default,
    Family,
    Professional,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonStyle {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub color: ButtonColor,
    pub disabled: bool,
    pub loading: bool,
    pub full_width: bool,
}

impl ButtonStyle {
    /// Clicks are swallowed while disabled or loading.
    pub fn is_inert(&self) -> bool {
        self.disabled || self.loading
    }

    /// Typography used for the label.
    pub fn label_text(&self) -> (TypographyVariant, TypographyColor) {
        let variant = match self.size {
            ButtonSize::Small => TypographyVariant::BodySmall,
            ButtonSize::Medium | ButtonSize::Large => TypographyVariant::Button,
        };
        let color = match self.variant {
            ButtonVariant::Primary => TypographyColor::Inherit,
            _ => TypographyColor::Primary,
        };
        (variant, color)
    }
}

pub fn button_classes(style: ButtonStyle, extra: &str) -> String {
    let variant = match style.variant {
        ButtonVariant::Primary => "button--primary",
        ButtonVariant::Secondary => "button--secondary",
        ButtonVariant::Text => "button--text",
        ButtonVariant::Danger => "button--danger",
    };
    let size = match style.size {
        ButtonSize::Small => "button--small",
        ButtonSize::Medium => "button--medium",
        ButtonSize::Large => "button--large",
    };
    let color = match style.color {
        ButtonColor::Default => "",
        ButtonColor::Family => "button--family",
        ButtonColor::Professional => "button--professional",
    };

    [
        "button",
        variant,
        size,
        color,
        if style.disabled { "button--disabled" } else { "" },
        if style.loading { "button--loading" } else { "" },
        if style.full_width { "button--full-width" } else { "" },
        extra,
    ]
    .iter()
    .filter(|c| !c.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" ")
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] color: ButtonColor,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] loading: bool,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] button_type: ButtonType,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional, into)] aria_label: Option<MaybeSignal<String>>,
    #[prop(optional, into)] aria_expanded: Option<MaybeSignal<bool>>,
    #[prop(optional)] test_id: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let style = ButtonStyle {
        variant,
        size,
        color,
        disabled,
        loading,
        full_width,
    };
    let classes = button_classes(style, class);
    let (label_variant, label_color) = style.label_text();

    let handle_click = move |ev: MouseEvent| {
        if style.is_inert() {
            return;
        }
        if let Some(cb) = on_click {
            cb.call(ev);
        }
    };

    view! {
        <button
            class=classes
            type=button_type.as_str()
            disabled=style.is_inert()
            aria-label=move || aria_label.as_ref().map(|l| l.get())
            aria-expanded=move || aria_expanded.map(|e| e.get().to_string())
            aria-busy=loading.to_string()
            data-testid=test_id
            on:click=handle_click
        >
            {if loading {
                view! {
                    <div class="button__loading-container">
                        <div class="button__spinner" aria-hidden="true"></div>
                        <span class="button__content--hidden">{children()}</span>
                    </div>
                }
                .into_view()
            } else {
                view! {
                    <Typography
                        variant=label_variant
                        color=label_color
                        align=TypographyAlign::Center
                        class="button__content"
                        target=RenderTarget::Span
                    >
                        {children()}
                    </Typography>
                }
                .into_view()
            }}
        </button>
    }
}

/// `rel` for a link button; external links open in a new tab.
fn link_rel(external: bool) -> Option<&'static str> {
    external.then_some("noopener noreferrer")
}

/// Navigation styled as a button. Renders an anchor, never a `<button>`
/// inside one.
///
/// Internal hrefs go through the router; `external` ones open in a new tab.
#[component]
pub fn LinkButton(
    #[prop(into)] href: String,
    #[prop(optional)] external: bool,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] color: ButtonColor,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let style = ButtonStyle {
        variant,
        size,
        color,
        full_width,
        ..Default::default()
    };
    let classes = button_classes(style, class);
    let (label_variant, label_color) = style.label_text();
    let label = view! {
        <Typography
            variant=label_variant
            color=label_color
            align=TypographyAlign::Center
            class="button__content"
            target=RenderTarget::Span
        >
            {children()}
        </Typography>
    };

    if external {
        view! {
            <a href=href class=classes target="_blank" rel=link_rel(external)>
                {label}
            </a>
        }
        .into_view()
    } else {
        view! { <A href=href class=classes>{label}</A> }.into_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classes() {
        assert_eq!(
            button_classes(ButtonStyle::default(), ""),
            "button button--primary button--medium"
        );
    }

    #[test]
    fn test_theme_and_state_classes() {
        let style = ButtonStyle {
            variant: ButtonVariant::Secondary,
            size: ButtonSize::Small,
            color: ButtonColor::Family,
            disabled: true,
            loading: true,
            full_width: true,
        };
        assert_eq!(
            button_classes(style, "header__menu-toggle"),
            "button button--secondary button--small button--family button--disabled \
             button--loading button--full-width header__menu-toggle"
        );
    }

    #[test]
    fn test_inert_when_disabled_or_loading() {
        assert!(!ButtonStyle::default().is_inert());
        assert!(ButtonStyle { disabled: true, ..Default::default() }.is_inert());
        assert!(ButtonStyle { loading: true, ..Default::default() }.is_inert());
    }

    #[test]
    fn test_label_text_follows_size_and_variant() {
        let small_text = ButtonStyle {
            variant: ButtonVariant::Text,
            size: ButtonSize::Small,
            ..Default::default()
        };
        assert_eq!(
            small_text.label_text(),
            (TypographyVariant::BodySmall, TypographyColor::Primary)
        );

        let large_primary = ButtonStyle {
            size: ButtonSize::Large,
            ..Default::default()
        };
        assert_eq!(
            large_primary.label_text(),
            (TypographyVariant::Button, TypographyColor::Inherit)
        );
    }

    #[test]
    fn test_link_button_uses_button_classes() {
        let style = ButtonStyle {
            variant: ButtonVariant::Secondary,
            size: ButtonSize::Small,
            full_width: true,
            ..Default::default()
        };
        assert_eq!(
            button_classes(style, "footer__subscribe"),
            "button button--secondary button--small button--full-width footer__subscribe"
        );
    }

    #[test]
    fn test_link_rel_only_for_external() {
        assert_eq!(link_rel(true), Some("noopener noreferrer"));
        assert_eq!(link_rel(false), None);
    }

    #[test]
    fn test_button_type_attribute() {
        assert_eq!(ButtonType::default().as_str(), "button");
        assert_eq!(ButtonType::Submit.as_str(), "submit");
        assert_eq!(ButtonType::Reset.as_str(), "reset");
    }
}

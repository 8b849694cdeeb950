use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Elevated,
    Outlined,
    Filled,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardPadding {
    None,
    Small,
    #[default]
    Medium,
    Large,
}

/// Container element for a card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardElement {
    #[default]
    Div,
    Section,
    Article,
}

pub fn card_classes(
    variant: CardVariant,
    padding: CardPadding,
    interactive: bool,
    full_width: bool,
    extra: &str,
) -> String {
    let variant = match variant {
        CardVariant::Elevated => "card--elevated",
        CardVariant::Outlined => "card--outlined",
        CardVariant::Filled => "card--filled",
    };
    let padding = match padding {
        CardPadding::None => "card--padding-none",
        CardPadding::Small => "card--padding-small",
        CardPadding::Medium => "card--padding-medium",
        CardPadding::Large => "card--padding-large",
    };

    [
        "card",
        variant,
        padding,
        if interactive { "card--interactive" } else { "" },
        if full_width { "card--full-width" } else { "" },
        extra,
    ]
    .iter()
    .filter(|c| !c.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" ")
}

/// Keys that activate a card acting as a button.
fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

/// Pointer clicks are gated on `interactive`.
fn pointer_activates(interactive: bool, clickable: bool) -> bool {
    interactive && clickable
}

/// Enter/Space activate any card with a callback, interactive or not.
fn keyboard_activates(clickable: bool, key: &str) -> bool {
    clickable && is_activation_key(key)
}

#[component]
pub fn Card(
    #[prop(optional)] variant: CardVariant,
    #[prop(optional)] padding: CardPadding,
    #[prop(optional)] interactive: bool,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] element: CardElement,
    /// Pointer clicks fire only when `interactive` is set; Enter/Space
    /// always fire.
    #[prop(optional, into)]
    on_click: Option<Callback<()>>,
    #[prop(optional)] aria_label: Option<&'static str>,
    #[prop(optional)] test_id: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let classes = card_classes(variant, padding, interactive, full_width, class);
    let clickable = on_click.is_some();
    let role = clickable.then_some("button");
    let tabindex = clickable.then_some("0");

    let handle_click = move |_: MouseEvent| {
        if !pointer_activates(interactive, clickable) {
            return;
        }
        if let Some(cb) = on_click {
            cb.call(());
        }
    };

    let handle_keydown = move |ev: KeyboardEvent| {
        if !keyboard_activates(clickable, &ev.key()) {
            return;
        }
        ev.prevent_default();
        if let Some(cb) = on_click {
            cb.call(());
        }
    };

    match element {
        CardElement::Div => view! {
            <div
                class=classes
                role=role
                tabindex=tabindex
                aria-label=aria_label
                data-testid=test_id
                on:click=handle_click
                on:keydown=handle_keydown
            >
                {children()}
            </div>
        }
        .into_view(),
        CardElement::Section => view! {
            <section
                class=classes
                role=role
                tabindex=tabindex
                aria-label=aria_label
                data-testid=test_id
                on:click=handle_click
                on:keydown=handle_keydown
            >
                {children()}
            </section>
        }
        .into_view(),
        CardElement::Article => view! {
            <article
                class=classes
                role=role
                tabindex=tabindex
                aria-label=aria_label
                data-testid=test_id
                on:click=handle_click
                on:keydown=handle_keydown
            >
                {children()}
            </article>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classes() {
        assert_eq!(
            card_classes(CardVariant::default(), CardPadding::default(), false, false, ""),
            "card card--elevated card--padding-medium"
        );
    }

    #[test]
    fn test_interactive_full_width_with_extra() {
        assert_eq!(
            card_classes(CardVariant::Filled, CardPadding::Large, true, true, "cta-card"),
            "card card--filled card--padding-large card--interactive card--full-width cta-card"
        );
    }

    #[test]
    fn test_padding_none() {
        assert_eq!(
            card_classes(CardVariant::Outlined, CardPadding::None, false, false, ""),
            "card card--outlined card--padding-none"
        );
    }

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("Escape"));
    }

    #[test]
    fn test_keyboard_activates_without_interactive() {
        // A non-interactive card with a callback still has role="button".
        assert!(!pointer_activates(false, true));
        assert!(keyboard_activates(true, "Enter"));
        assert!(keyboard_activates(true, " "));
        assert!(!keyboard_activates(true, "Tab"));
    }

    #[test]
    fn test_no_activation_without_callback() {
        assert!(!pointer_activates(true, false));
        assert!(!keyboard_activates(false, "Enter"));
        assert!(pointer_activates(true, true));
    }
}

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const SCROLL_KEY: &str = "chronomind_scroll";

/// Take over scroll restoration from the browser.
///
/// The current offset is written to sessionStorage on `beforeunload`, so a
/// reload (including the popstate reload in `lib.rs`) lands where the reader
/// left off. Nothing outlives the tab.
pub fn setup_scroll_restoration() {
    let Some(window) = web_sys::window() else {
        return;
    };

    if let Ok(history) = window.history() {
        let _ = history.set_scroll_restoration(web_sys::ScrollRestoration::Manual);
    }

    let closure = Closure::wrap(Box::new(move || {
        if let Some(win) = web_sys::window() {
            let scroll_y = win.scroll_y().unwrap_or(0.0);
            if let Some(storage) = win.session_storage().ok().flatten() {
                let _ = storage.set_item(SCROLL_KEY, &scroll_y.to_string());
            }
        }
    }) as Box<dyn Fn()>);

    let _ = window.add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn restore_scroll_position() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let saved = window
        .session_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(SCROLL_KEY).ok().flatten());
    if let Some(scroll_y) = saved.as_deref().and_then(parse_scroll_offset) {
        window.scroll_to_with_x_and_y(0.0, scroll_y);
    }
}

/// Restore the saved offset once the first render has had time to lay out.
pub fn restore_scroll_after_delay(delay_ms: i32) {
    if let Some(window) = web_sys::window() {
        let closure = Closure::once(Box::new(restore_scroll_position) as Box<dyn FnOnce()>);

        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        );
        closure.forget();
    }
}

/// Jump to the top of the page after client-side navigation.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Parse a stored offset, rejecting garbage and negative or non-finite values.
fn parse_scroll_offset(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|y| y.is_finite() && *y >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scroll_offset_accepts_numbers() {
        assert_eq!(parse_scroll_offset("0"), Some(0.0));
        assert_eq!(parse_scroll_offset("1240.5"), Some(1240.5));
        assert_eq!(parse_scroll_offset(" 42 "), Some(42.0));
    }

    #[test]
    fn test_parse_scroll_offset_rejects_garbage() {
        assert_eq!(parse_scroll_offset(""), None);
        assert_eq!(parse_scroll_offset("top"), None);
        assert_eq!(parse_scroll_offset("-10"), None);
        assert_eq!(parse_scroll_offset("NaN"), None);
        assert_eq!(parse_scroll_offset("inf"), None);
    }
}

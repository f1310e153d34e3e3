//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{HtmlElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

/// Ask the user to confirm `message`. No window means no confirmation.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Replace whichever of `family` is on `<body>` with `active`.
pub fn set_body_class(family: &[&str], active: &str) {
    let Some(body) = body() else {
        return;
    };
    let classes = body.class_list();
    for class in family {
        if *class != active {
            let _ = classes.remove_1(class);
        }
    }
    let _ = classes.add_1(active);
}


//! Jump-to-letter bar.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::ALPHABET;

stylance::import_crate_style!(css, "src/components/toolbar/toolbar.module.css");

#[component]
pub fn LetterBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let active = Memo::new(move |_| ctx.with(|s| s.query().letter_filter.clone()));

    // "" is the "All" button.
    let button = move |letter: &'static str| {
        let label = if letter.is_empty() { "All" } else { letter };
        view! {
            <button
                class=move || {
                    if active.get() == letter {
                        format!("{} {}", css::letter, css::letterActive)
                    } else {
                        css::letter.to_string()
                    }
                }
                on:click=move |_| ctx.load_if(|s| s.on_letter_selected(letter))
            >
                {label}
            </button>
        }
    };

    view! {
        <nav class=css::letters aria-label="Jump to letter">
            {std::iter::once("")
                .chain(ALPHABET.iter().copied())
                .map(button)
                .collect_view()}
        </nav>
    }
}

//! Header toolbar.
//!
//! Search, sort, filter and settings controls plus the edit-mode switch.
//! Every control that changes the query goes through [`AppContext::load`],
//! which starts the listing request the session asks for.

mod filters;
mod letters;
mod search;
mod settings;

use leptos::prelude::*;
use leptos_icons::Icon;
use reelshelf_core::SortOrder;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;

pub use filters::FilterMenu;
pub use letters::LetterBar;
pub use search::SearchBox;
pub use settings::SettingsMenu;

stylance::import_crate_style!(css, "src/components/toolbar/toolbar.module.css");

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let editing = Memo::new(move |_| ctx.with(|s| s.selection().is_editing()));
    let total = Memo::new(move |_| ctx.with(|s| s.grid().map(|g| g.total_count)));

    view! {
        <header class=css::toolbar>
            <h1 class=css::brand>{APP_NAME}</h1>
            <span class=css::total>
                {move || total.get().map(|n| format!("{n} movies")).unwrap_or_default()}
            </span>
            <SearchBox />
            <SortSelect />
            <FilterMenu />
            <button
                class=move || {
                    if editing.get() {
                        format!("{} {}", css::iconButton, css::iconButtonActive)
                    } else {
                        css::iconButton.to_string()
                    }
                }
                title="Select movies for bulk changes"
                on:click=move |_| {
                    ctx.update(|s| s.toggle_edit_mode());
                }
            >
                <Icon icon=ic::EDIT />
            </button>
            <SettingsMenu />
        </header>
    }
}

#[component]
fn SortSelect() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let sort = Memo::new(move |_| ctx.with(|s| s.query().sort));

    let on_change = move |ev: leptos::ev::Event| {
        if let Some(order) = SortOrder::parse(&event_target_value(&ev)) {
            ctx.load(|s| s.on_sort_selected(order));
        }
    };

    view! {
        <select class=css::select prop:value=move || sort.get().as_str() on:change=on_change>
            {SortOrder::ALL
                .into_iter()
                .map(|order| view! { <option value=order.as_str()>{order.label()}</option> })
                .collect_view()}
        </select>
    }
}

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/grid/grid.module.css");

/// Previous/next controls under the grid. Hidden until the first listing
/// arrives; each control only shows when there is a page to go to.
#[component]
pub fn Pagination() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let pages = Memo::new(move |_| ctx.with(|s| s.grid().map(|g| g.pagination.clone())));

    view! {
        {move || pages.get().map(|p| view! {
            <nav class=css::pagination aria-label="Pages">
                {p.prev.map(|_| view! {
                    <button class=css::pageButton on:click=move |_| ctx.load_if(|s| s.on_prev_page())>
                        <Icon icon=ic::CHEVRON_LEFT />
                        "Prev"
                    </button>
                })}
                <span class=css::pageLabel>{p.label}</span>
                {p.next.map(|_| view! {
                    <button class=css::pageButton on:click=move |_| ctx.load_if(|s| s.on_next_page())>
                        "Next"
                        <Icon icon=ic::CHEVRON_RIGHT />
                    </button>
                })}
            </nav>
        })}
    }
}

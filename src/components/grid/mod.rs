//! Poster grid and pagination.
//!
//! The grid re-renders from the session's [`GridView`](reelshelf_core::GridView)
//! whenever a listing is applied. Display settings (poster size, badges,
//! titles) only change classes and a CSS variable.

mod card;
mod pagination;

use leptos::prelude::*;

use crate::app::AppContext;
use card::PosterTile;

pub use pagination::Pagination;

stylance::import_crate_style!(css, "src/components/grid/grid.module.css");

#[component]
pub fn PosterGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let grid = Memo::new(move |_| ctx.with(|s| s.grid().cloned()));
    let display = Memo::new(move |_| ctx.with(|s| s.display().clone()));
    let loading = Memo::new(move |_| ctx.with(|s| s.is_loading()));

    let grid_class = move || {
        let mut class = css::grid.to_string();
        if display.with(|d| d.hide_edit_unless_hover) {
            class.push(' ');
            class.push_str(css::editOnHover);
        }
        if loading.get() {
            class.push(' ');
            class.push_str(css::loading);
        }
        class
    };

    view! {
        <section
            class=grid_class
            style=move || format!("--poster-size: {}px", display.with(|d| d.poster_size))
            aria-busy=move || loading.get().to_string()
        >
            {move || match grid.get() {
                None => view! { <p class=css::placeholder>"Loading movies…"</p> }.into_any(),
                Some(view) if view.is_empty() => {
                    view! { <p class=css::placeholder>"No movies found"</p> }.into_any()
                }
                Some(view) => view
                    .cards
                    .into_iter()
                    .map(|card| view! { <PosterTile card=card display=display /> })
                    .collect_view()
                    .into_any(),
            }}
        </section>
    }
}

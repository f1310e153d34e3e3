//! A single poster tile.

use leptos::prelude::*;
use leptos_icons::Icon;
use reelshelf_core::session;
use reelshelf_core::{DisplayPrefs, PosterCard};

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/grid/grid.module.css");

#[component]
pub fn PosterTile(card: PosterCard, display: Memo<DisplayPrefs>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let id = card.id;

    let editing = Memo::new(move |_| ctx.with(|s| s.selection().is_editing()));
    let selected = Memo::new(move |_| ctx.with(|s| s.selection().is_selected(id)));

    let on_edit = move |_| {
        ctx.spawn("open edit", move |ctx| async move {
            session::open_edit(&ctx.session, &ctx.api, id).await
        });
    };

    let poster = match card.poster_url.clone() {
        Some(url) => view! { <img class=css::poster src=url alt=card.title.clone() loading="lazy" /> }
            .into_any(),
        None => view! { <div class=css::noPoster>{card.title.clone()}</div> }.into_any(),
    };

    let version = card.version_badge.clone();
    let format = card.format_badge.clone();
    let title = card.title.clone();

    view! {
        <article class=move || {
            if selected.get() {
                format!("{} {}", css::tile, css::tileSelected)
            } else {
                css::tile.to_string()
            }
        }>
            <div class=css::frame>
                {poster}
                <Show when=move || editing.get()>
                    <input
                        type="checkbox"
                        class=css::selectBox
                        aria-label="Select movie"
                        prop:checked=move || selected.get()
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            ctx.update(|s| s.toggle_item(id, checked));
                        }
                    />
                </Show>
                {card.wanted.then(|| view! { <span class=css::needBadge>"NEED"</span> })}
                <div class=css::badges>
                    {move || {
                        version
                            .clone()
                            .filter(|_| display.with(|d| d.show_version_badges))
                            .map(|v| view! { <span class=css::versionBadge>{v}</span> })
                    }}
                    {move || {
                        format
                            .clone()
                            .filter(|_| display.with(|d| d.show_format_badges))
                            .map(|f| view! { <span class=css::formatBadge>{f}</span> })
                    }}
                </div>
                <div class=css::actions>
                    <button class=css::editButton title="Edit" on:click=on_edit>
                        <Icon icon=ic::EDIT />
                    </button>
                    <a
                        class=css::linkButton
                        href=card.link_url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        title="Open on TMDb"
                    >
                        <Icon icon=ic::EXTERNAL_LINK />
                    </a>
                </div>
            </div>
            <Show when=move || display.with(|d| d.show_titles)>
                <p class=css::title>{title.clone()}</p>
            </Show>
        </article>
    }
}

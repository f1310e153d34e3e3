//! Status and format filter dropdown.

use leptos::prelude::*;
use leptos_icons::Icon;
use reelshelf_core::StatusFilter;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::FORMATS;

stylance::import_crate_style!(css, "src/components/toolbar/toolbar.module.css");

const STATUSES: [(StatusFilter, &str); 2] =
    [(StatusFilter::Owned, "Owned"), (StatusFilter::Wanted, "Wanted")];

/// Checkbox state implied by a stored filter. "No restriction" shows both
/// boxes unchecked.
fn checked_statuses(filter: StatusFilter) -> Vec<StatusFilter> {
    match filter {
        StatusFilter::Any => Vec::new(),
        only => vec![only],
    }
}

#[component]
pub fn FilterMenu() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let open = RwSignal::new(false);

    let statuses = RwSignal::new(ctx.with_untracked(|s| checked_statuses(s.query().status_filter)));
    let formats = Memo::new(move |_| ctx.with(|s| s.query().format_filters.clone()));
    let active = Memo::new(move |_| {
        ctx.with(|s| {
            s.query().status_filter != StatusFilter::Any || !s.query().format_filters.is_empty()
        })
    });

    let on_status = move |status: StatusFilter, checked: bool| {
        statuses.update(|list| {
            list.retain(|s| *s != status);
            if checked {
                list.push(status);
            }
        });
        let filter = StatusFilter::from_checked(&statuses.get_untracked());
        ctx.load(|s| s.on_status_filter_changed(filter));
    };

    let on_format = move |format: &'static str, checked: bool| {
        ctx.load(|s| {
            let mut list: Vec<String> = s
                .query()
                .format_filters
                .iter()
                .filter(|f| f.as_str() != format)
                .cloned()
                .collect();
            if checked {
                list.push(format.to_string());
            }
            s.on_format_filters_changed(list)
        });
    };

    let on_clear = move |_| {
        statuses.set(Vec::new());
        ctx.load(|s| s.on_filters_cleared());
    };

    view! {
        <div class=css::menu>
            <button
                class=move || {
                    if active.get() {
                        format!("{} {}", css::iconButton, css::iconButtonActive)
                    } else {
                        css::iconButton.to_string()
                    }
                }
                title="Filters"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <Icon icon=ic::FILTER />
            </button>
            <Show when=move || open.get()>
                <div class=css::dropdown>
                    <fieldset class=css::group>
                        <legend>"Status"</legend>
                        {STATUSES
                            .into_iter()
                            .map(|(status, label)| view! {
                                <label class=css::check>
                                    <input
                                        type="checkbox"
                                        prop:checked=move || statuses.with(|l| l.contains(&status))
                                        on:change=move |ev| on_status(status, event_target_checked(&ev))
                                    />
                                    {label}
                                </label>
                            })
                            .collect_view()}
                    </fieldset>
                    <fieldset class=css::group>
                        <legend>"Format"</legend>
                        {FORMATS
                            .iter()
                            .map(|&format| view! {
                                <label class=css::check>
                                    <input
                                        type="checkbox"
                                        prop:checked=move || formats.with(|f| f.contains(format))
                                        on:change=move |ev| on_format(format, event_target_checked(&ev))
                                    />
                                    {format}
                                </label>
                            })
                            .collect_view()}
                    </fieldset>
                    <button class=css::textButton on:click=on_clear>"Clear filters"</button>
                </div>
            </Show>
        </div>
    }
}

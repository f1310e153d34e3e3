//! Display settings dropdown.
//!
//! Every change is applied through the session so it is persisted and the
//! rest of the UI picks it up from the same signal.

use leptos::prelude::*;
use leptos_icons::Icon;
use reelshelf_core::config::POSTER_SIZE_RANGE;
use reelshelf_core::{DisplayPrefs, DisplayToggle, Skin};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::PAGE_SIZES;

stylance::import_crate_style!(css, "src/components/toolbar/toolbar.module.css");

type ToggleFn = fn(bool) -> DisplayToggle;

const TOGGLES: [(&str, fn(&DisplayPrefs) -> bool, ToggleFn); 4] = [
    ("Show titles", |d| d.show_titles, DisplayToggle::ShowTitles),
    ("Version badges", |d| d.show_version_badges, DisplayToggle::ShowVersionBadges),
    ("Format badges", |d| d.show_format_badges, DisplayToggle::ShowFormatBadges),
    ("Edit button on hover only", |d| d.hide_edit_unless_hover, DisplayToggle::HideEditUnlessHover),
];

fn skin_label(skin: Skin) -> &'static str {
    match skin {
        Skin::Dark => "Dark",
        Skin::Light => "Light",
        Skin::Classic => "Classic",
    }
}

#[component]
pub fn SettingsMenu() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let open = RwSignal::new(false);

    let display = Memo::new(move |_| ctx.with(|s| s.display().clone()));
    let page_size = Memo::new(move |_| ctx.with(|s| s.query().page_size));

    let apply = move |toggle: DisplayToggle| {
        ctx.update(|s| s.apply_display(toggle));
    };

    let on_page_size = move |ev: leptos::ev::Event| {
        let size = event_target_value(&ev).parse::<u32>().ok();
        ctx.load_if(|s| s.on_page_size_changed(size));
    };

    view! {
        <div class=css::menu>
            <button
                class=css::iconButton
                title="Settings"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <Icon icon=ic::SETTINGS />
            </button>
            <Show when=move || open.get()>
                <div class=css::dropdown>
                    <label class=css::field>
                        "Skin"
                        <select
                            class=css::select
                            prop:value=move || display.get().skin.as_str()
                            on:change=move |ev| {
                                if let Some(skin) = Skin::parse(&event_target_value(&ev)) {
                                    apply(DisplayToggle::Skin(skin));
                                }
                            }
                        >
                            {Skin::ALL
                                .into_iter()
                                .map(|skin| view! { <option value=skin.as_str()>{skin_label(skin)}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label class=css::field>
                        {move || format!("Poster size ({}px)", display.get().poster_size)}
                        <input
                            type="range"
                            min=POSTER_SIZE_RANGE.start().to_string()
                            max=POSTER_SIZE_RANGE.end().to_string()
                            step="10"
                            prop:value=move || display.get().poster_size.to_string()
                            on:input=move |ev| {
                                if let Ok(px) = event_target_value(&ev).parse() {
                                    apply(DisplayToggle::PosterSize(px));
                                }
                            }
                        />
                    </label>
                    <label class=css::field>
                        "Movies per page"
                        <select
                            class=css::select
                            prop:value=move || page_size.get().map(|n| n.to_string()).unwrap_or_default()
                            on:change=on_page_size
                        >
                            {PAGE_SIZES
                                .iter()
                                .map(|size| {
                                    let (value, label) = match size {
                                        Some(n) => (n.to_string(), n.to_string()),
                                        None => (String::new(), "Default".to_string()),
                                    };
                                    view! { <option value=value>{label}</option> }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    {TOGGLES
                        .into_iter()
                        .map(|(label, read, toggle)| view! {
                            <label class=css::check>
                                <input
                                    type="checkbox"
                                    prop:checked=move || read(&display.get())
                                    on:change=move |ev| apply(toggle(event_target_checked(&ev)))
                                />
                                {label}
                            </label>
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

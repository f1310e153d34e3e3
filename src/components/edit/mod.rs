//! Edit dialog.
//!
//! Rendered while the session holds a [`PendingEdit`](reelshelf_core::edit::PendingEdit).
//! Reopening the dialog bumps its generation, which rebuilds the modal and
//! drops any lookup results from the previous opening.

mod identify;

use leptos::prelude::*;
use leptos_icons::Icon;
use reelshelf_core::edit::EditField;
use reelshelf_core::session;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::FORMATS;
use crate::utils::dom;
use identify::IdentifyButton;

stylance::import_crate_style!(css, "src/components/edit/edit.module.css");

/// Text fields laid out in the two-column grid, with their labels.
const TEXT_FIELDS: [(EditField, &str); 7] = [
    (EditField::Year, "Year"),
    (EditField::Version, "Version"),
    (EditField::Country, "Country"),
    (EditField::Language, "Language"),
    (EditField::Region, "Region"),
    (EditField::DiscCount, "Discs"),
    (EditField::ExternalId, "TMDb ID"),
];

#[component]
pub fn EditDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let generation = Memo::new(move |_| ctx.with(|s| s.edit().map(|e| e.generation)));

    move || generation.get().map(|_| view! { <EditModal /> })
}

#[component]
fn EditModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let form = Memo::new(move |_| ctx.with(|s| s.edit().map(|e| e.form.clone()).unwrap_or_default()));
    let error = Memo::new(move |_| ctx.with(|s| s.edit().and_then(|e| e.error.clone())));
    let poster = ctx.with_untracked(|s| s.edit().map(|e| e.poster_url.clone()).unwrap_or_default());

    let value = move |field: EditField| move || form.with(|f| f.get(field).to_string());
    let set = move |field: EditField| {
        move |ev: leptos::ev::Event| {
            let text = event_target_value(&ev);
            ctx.update(|s| s.set_edit_field(field, text));
        }
    };

    let close = move |_: leptos::ev::MouseEvent| {
        ctx.update(|s| s.close_edit());
    };
    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ctx.spawn("save edit", |ctx| async move {
            session::save_edit(&ctx.session, &ctx.api).await
        });
    };
    let on_delete = move |_: leptos::ev::MouseEvent| {
        ctx.spawn("delete movie", |ctx| async move {
            session::delete_one(&ctx.session, &ctx.api, dom::confirm).await
        });
    };

    view! {
        <div class=css::backdrop on:click=close>
            <form
                class=css::dialog
                role="dialog"
                aria-modal="true"
                on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                on:submit=on_save
            >
                <header class=css::header>
                    <h2>"Edit movie"</h2>
                    <button type="button" class=css::iconButton title="Close" on:click=close>
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>

                <div class=css::content>
                    {(!poster.is_empty()).then(|| view! {
                        <img class=css::poster src=poster.clone() alt="" />
                    })}
                    <div class=css::fields>
                        <div class=css::wide>
                            <label>
                                "Title"
                                <input
                                    class=css::input
                                    prop:value=value(EditField::Title)
                                    on:input=set(EditField::Title)
                                />
                            </label>
                            <IdentifyButton />
                        </div>
                        <label>
                            "Format"
                            <select
                                class=css::input
                                prop:value=value(EditField::Format)
                                on:change=set(EditField::Format)
                            >
                                <option value="">"—"</option>
                                {FORMATS
                                    .iter()
                                    .map(|&f| view! { <option value=f>{f}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                        <label>
                            "Status"
                            <select
                                class=css::input
                                prop:value=value(EditField::Status)
                                on:change=set(EditField::Status)
                            >
                                <option value="owned">"Owned"</option>
                                <option value="wanted">"Wanted"</option>
                            </select>
                        </label>
                        {TEXT_FIELDS
                            .into_iter()
                            .map(|(field, label)| view! {
                                <label>
                                    {label}
                                    <input
                                        class=css::input
                                        prop:value=value(field)
                                        on:input=set(field)
                                    />
                                </label>
                            })
                            .collect_view()}
                        <label class=css::wide>
                            "Collections"
                            <input
                                class=css::input
                                placeholder="Comma separated"
                                prop:value=value(EditField::Collections)
                                on:input=set(EditField::Collections)
                            />
                        </label>
                        <label class=css::wide>
                            "Notes"
                            <textarea
                                class=css::input
                                rows="3"
                                prop:value=value(EditField::Notes)
                                on:input=set(EditField::Notes)
                            />
                        </label>
                    </div>
                </div>

                {move || error.get().map(|message| view! { <p class=css::error role="alert">{message}</p> })}

                <footer class=css::footer>
                    <button type="button" class=css::danger on:click=on_delete>
                        <Icon icon=ic::TRASH />
                        "Delete"
                    </button>
                    <span class=css::spacer></span>
                    <button type="button" class=css::secondary on:click=close>"Cancel"</button>
                    <button type="submit" class=css::primary>"Save"</button>
                </footer>
            </form>
        </div>
    }
}

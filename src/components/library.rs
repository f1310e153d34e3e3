//! Add form and CSV import/export.
//!
//! The add form draft is persisted on every keystroke, so a reload keeps
//! half-entered movies. CSV import is a plain multipart form post that the
//! server answers with a redirect back to the catalogue.

use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;
use reelshelf_core::DisplayToggle;
use reelshelf_core::config::endpoints;
use reelshelf_core::edit::AddField;
use reelshelf_core::session;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::FORMATS;

stylance::import_crate_style!(css, "src/components/library.module.css");

#[component]
pub fn LibraryPanel() -> impl IntoView {
    view! {
        <section class=css::panel>
            <AddForm />
            <CsvTransfer />
        </section>
    }
}

#[component]
fn AddForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let form = Memo::new(move |_| ctx.with(|s| s.add_form().clone()));
    let advanced = Memo::new(move |_| ctx.with(|s| s.display().advanced_fields_visible));

    let set = move |field: AddField| {
        move |ev: leptos::ev::Event| {
            let text = event_target_value(&ev);
            ctx.update(|s| s.set_add_field(field, text));
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ctx.spawn("add movie", |ctx| async move {
            session::add_item(&ctx.session, &ctx.api).await
        });
    };

    let toggle_advanced = move |_| {
        let visible = !advanced.get_untracked();
        ctx.update(|s| s.apply_display(DisplayToggle::AdvancedFieldsVisible(visible)));
    };

    view! {
        <form class=css::form on:submit=on_submit>
            <h2 class=css::heading>
                <Icon icon=ic::PLUS />
                "Add movie"
            </h2>
            <input
                class=css::input
                placeholder="Title"
                prop:value=move || form.get().title
                on:input=set(AddField::Title)
            />
            <input
                class=css::input
                placeholder="Year"
                inputmode="numeric"
                prop:value=move || form.get().year
                on:input=set(AddField::Year)
            />
            <button type="button" class=css::textButton on:click=toggle_advanced>
                {move || if advanced.get() { "Hide options" } else { "More options" }}
            </button>
            <Show when=move || advanced.get()>
                <div class=css::advanced>
                    <input
                        class=css::input
                        placeholder="Barcode"
                        prop:value=move || form.get().barcode
                        on:input=set(AddField::Barcode)
                    />
                    <select
                        class=css::input
                        prop:value=move || form.get().format
                        on:change=set(AddField::Format)
                    >
                        {FORMATS
                            .iter()
                            .map(|&f| view! { <option value=f>{f}</option> })
                            .collect_view()}
                    </select>
                    <select
                        class=css::input
                        prop:value=move || form.get().status
                        on:change=set(AddField::Status)
                    >
                        <option value="owned">"Owned"</option>
                        <option value="wanted">"Wanted"</option>
                    </select>
                </div>
            </Show>
            <button type="submit" class=css::button>"Add"</button>
        </form>
    }
}

#[component]
fn CsvTransfer() -> impl IntoView {
    let form_ref = NodeRef::<html::Form>::new();

    let on_file = move |ev: leptos::ev::Event| {
        if event_target_value(&ev).is_empty() {
            return;
        }
        if let Some(form) = form_ref.get()
            && let Err(e) = form.submit()
        {
            tracing::warn!(error = ?e, "csv upload not submitted");
        }
    };

    view! {
        <div class=css::transfer>
            <form
                node_ref=form_ref
                action=endpoints::IMPORT_CSV
                method="post"
                enctype="multipart/form-data"
            >
                <label class=css::fileButton>
                    <Icon icon=ic::UPLOAD />
                    "Import CSV"
                    <input type="file" name="csv_file" accept=".csv" hidden on:change=on_file />
                </label>
            </form>
            <a class=css::fileButton href=endpoints::EXPORT_CSV download>
                <Icon icon=ic::DOWNLOAD />
                "Export CSV"
            </a>
        </div>
    }
}

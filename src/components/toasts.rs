//! Notification stack.
//!
//! Each toast dismisses itself after [`TOAST_DURATION_MS`]; clicking one
//! dismisses it early.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use reelshelf_core::{Notice, NoticeLevel};
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::config::TOAST_DURATION_MS;

stylance::import_crate_style!(css, "src/components/toasts.module.css");

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let notices = Memo::new(move |_| ctx.with(|s| s.notices().items().to_vec()));

    view! {
        <div class=css::stack aria-live="polite">
            <For each=move || notices.get() key=|n| n.id let:notice>
                <Toast notice />
            </For>
        </div>
    }
}

fn level_class(level: NoticeLevel) -> String {
    let accent = match level {
        NoticeLevel::Info => css::info,
        NoticeLevel::Success => css::success,
        NoticeLevel::Error => css::error,
    };
    format!("{} {}", css::toast, accent)
}

#[component]
fn Toast(notice: Notice) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let id = notice.id;

    spawn_local(async move {
        TimeoutFuture::new(TOAST_DURATION_MS).await;
        ctx.update(|s| s.dismiss_notice(id));
    });

    let poster = notice.poster_url.filter(|url| !url.is_empty());

    view! {
        <div
            class=level_class(notice.level)
            role="status"
            on:click=move |_| {
                ctx.update(|s| s.dismiss_notice(id));
            }
        >
            {poster.map(|url| view! { <img class=css::thumb src=url alt="" /> })}
            <div class=css::text>
                <strong class=css::title>{notice.title}</strong>
                <span class=css::subtitle>{notice.subtitle}</span>
            </div>
        </div>
    }
}

//! Root application module.
//!
//! Contains the main App component, the [`AppContext`] every component reads
//! from, and the glue that lets the engine's async drivers borrow the session
//! signal.

use std::future::Future;

use leptos::prelude::*;
use reelshelf_core::session;
use reelshelf_core::{
    ActionError, CatalogueSession, Config, FetchTicket, HttpApi, LocalStorage, SessionHost, Skin,
};
use wasm_bindgen_futures::spawn_local;

use crate::components::{
    BulkBar, CollectionsPanel, EditDialog, LibraryPanel, LetterBar, Pagination, PosterGrid,
    ToastStack, Toolbar,
};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

/// Catalogue session as the browser build holds it.
pub type Session = CatalogueSession<LocalStorage>;

// ============================================================================
// SessionHandle
// ============================================================================

/// The session signal, lent to async drivers one short update at a time.
///
/// Once the owning reactive scope is disposed, `try_update` yields `None` and
/// the drivers drop whatever response they were waiting on.
#[derive(Clone, Copy)]
pub struct SessionHandle(RwSignal<Session>);

impl SessionHost for SessionHandle {
    type Store = LocalStorage;

    fn with_session<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`. Copy is cheap: the session is a signal and
/// the API client is a base URL.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: SessionHandle,
    pub api: HttpApi,
}

impl AppContext {
    /// Restores the query, display settings and add-form draft from
    /// localStorage.
    pub fn new() -> Self {
        Self {
            session: SessionHandle(RwSignal::new(CatalogueSession::new(LocalStorage))),
            api: HttpApi::new(Config::default()),
        }
    }

    /// Tracked read of the session.
    pub fn with<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        self.session.0.with(f)
    }

    pub fn with_untracked<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        self.session.0.with_untracked(f)
    }

    /// Apply a synchronous session command.
    pub fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        self.session.with_session(f)
    }

    /// Run a query command and fetch the listing it asks for.
    pub fn load(self, f: impl FnOnce(&mut Session) -> FetchTicket) {
        if let Some(ticket) = self.update(f) {
            self.refresh(ticket);
        }
    }

    /// Like [`load`](Self::load) for commands that may reject their input.
    pub fn load_if(self, f: impl FnOnce(&mut Session) -> Option<FetchTicket>) {
        if let Some(ticket) = self.update(f).flatten() {
            self.refresh(ticket);
        }
    }

    fn refresh(self, ticket: FetchTicket) {
        self.spawn("load listing", move |ctx| async move {
            session::refresh(&ctx.session, &ctx.api, ticket).await
        });
    }

    /// Run an async driver in the background.
    ///
    /// The session has already shown any failure to the user by the time
    /// the driver returns, so the error is only logged here.
    pub fn spawn<F, Fut, T>(self, action: &'static str, f: F)
    where
        F: FnOnce(AppContext) -> Fut,
        Fut: Future<Output = Result<T, ActionError>> + 'static,
    {
        let fut = f(self);
        spawn_local(async move {
            match fut.await {
                Ok(_) => {}
                Err(ActionError::Fetch(e)) => tracing::warn!(action, error = %e, "request failed"),
                Err(e) => tracing::debug!(action, error = %e, "action not completed"),
            }
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts the first listing load and the collections list
/// - Keeps the `<body>` skin class in step with the display settings
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    ctx.load(|s| s.start());
    ctx.spawn("load collections", |ctx| async move {
        session::load_collections(&ctx.session, &ctx.api).await
    });

    let skin = Memo::new(move |_| ctx.with(|s| s.display().skin));
    Effect::new(move || {
        let classes = Skin::ALL.map(Skin::body_class);
        dom::set_body_class(&classes, skin.get().body_class());
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fallback>
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <details>
                        <summary>"Error details"</summary>
                        <ul>
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                    </details>
                    <button on:click=move |_| {
                        if let Some(window) = dom::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <div class=css::app>
                <Toolbar />
                <LetterBar />
                <div class=css::body>
                    <main class=css::catalogue>
                        <BulkBar />
                        <PosterGrid />
                        <Pagination />
                    </main>
                    <aside class=css::sidebar>
                        <LibraryPanel />
                        <CollectionsPanel />
                    </aside>
                </div>
                <EditDialog />
                <ToastStack />
            </div>
        </ErrorBoundary>
    }
}

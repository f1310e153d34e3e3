//! Browser-only checks for the localStorage-backed store.
//!
//! Run with `wasm-pack test --headless --firefox crates/reelshelf-core`.

#![cfg(target_arch = "wasm32")]

use reelshelf_core::config::keys;
use reelshelf_core::{LocalStorage, PreferenceStore, QueryState, SortOrder};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_local_storage_roundtrip() {
    let mut store = LocalStorage;
    store.set("reelshelf-test", "value").unwrap();
    assert_eq!(store.get("reelshelf-test").as_deref(), Some("value"));
    store.remove("reelshelf-test").unwrap();
    assert_eq!(store.get("reelshelf-test"), None);
}

#[wasm_bindgen_test]
fn test_query_survives_reload() {
    let mut store = LocalStorage;
    let mut query = QueryState::load(&store);
    query.set_sort(&mut store, SortOrder::Recent);
    query.set_format_filters(&mut store, vec!["DVD".to_string()]);

    let restored = QueryState::load(&LocalStorage);
    assert_eq!(restored.sort, SortOrder::Recent);
    assert!(restored.format_filters.contains("DVD"));

    store.remove(keys::SORT).unwrap();
    store.remove(keys::FORMATS).unwrap();
}

mod common;

use common::{ScriptedApi, TestHost, item, listing, loaded_host};
use reelshelf_core::config::keys;
use reelshelf_core::session;
use reelshelf_core::{
    ActionError, CatalogueSession, FetchError, MemoryStore, PreferenceStore, SessionHost,
    SortOrder, StatusFilter,
};

#[tokio::test]
async fn test_empty_listing_renders_empty_grid() {
    let api = ScriptedApi::new();
    let host = loaded_host(&api, 1, vec![]).await;
    host.read(|s| {
        let grid = s.grid().unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.total_count, 0);
        assert_eq!(grid.pagination.prev, None);
        assert_eq!(grid.pagination.next, None);
        assert_eq!(grid.pagination.label, "Page 1 of 1");
    });
}

#[tokio::test]
async fn test_slow_page_one_does_not_overwrite_page_two() {
    let api = ScriptedApi::new();
    let host = TestHost::new(MemoryStore::new());

    // Page 1 answers after page 2.
    api.push_delayed_listing(5, Ok(listing(1, 2, vec![item(1, "Alien")])));
    api.push_delayed_listing(0, Ok(listing(2, 2, vec![item(2, "Brazil")])));

    let first = host.with_session(|s| s.start()).unwrap();
    let second = host.with_session(|s| s.on_page_requested(2)).unwrap().unwrap();
    let (slow, fast) = tokio::join!(
        session::refresh(&host, &api, first),
        session::refresh(&host, &api, second),
    );

    assert_eq!(slow, Ok(false));
    assert_eq!(fast, Ok(true));
    host.read(|s| {
        let grid = s.grid().unwrap();
        assert_eq!(grid.ids(), vec![2]);
        assert_eq!(grid.pagination.label, "Page 2 of 2");
        assert!(!s.is_loading());
    });
}

#[tokio::test]
async fn test_stale_failure_raises_no_notice() {
    let api = ScriptedApi::new();
    let host = TestHost::new(MemoryStore::new());
    api.push_delayed_listing(3, Err(FetchError::Network("reset".into())));
    api.push_delayed_listing(0, Ok(listing(1, 1, vec![item(1, "Alien")])));

    let first = host.with_session(|s| s.start()).unwrap();
    let second = host
        .with_session(|s| s.on_sort_selected(SortOrder::Recent))
        .unwrap();
    let (slow, fast) = tokio::join!(
        session::refresh(&host, &api, first),
        session::refresh(&host, &api, second),
    );

    assert_eq!(slow, Ok(false));
    assert_eq!(fast, Ok(true));
    host.read(|s| assert!(s.notices().items().is_empty()));
}

#[tokio::test]
async fn test_failed_fetch_keeps_previous_grid() {
    let api = ScriptedApi::new();
    let host = loaded_host(&api, 2, vec![item(1, "Alien"), item(2, "Brazil")]).await;

    api.push_listing(Err(FetchError::Network("offline".into())));
    let ticket = host.with_session(|s| s.on_next_page()).unwrap().unwrap();
    let result = session::refresh(&host, &api, ticket).await;

    assert_eq!(
        result,
        Err(ActionError::Fetch(FetchError::Network("offline".into())))
    );
    host.read(|s| {
        assert_eq!(s.grid().unwrap().ids(), vec![1, 2]);
        let notice = s.notices().latest().unwrap();
        assert_eq!(notice.title, "Load failed");
        assert_eq!(notice.subtitle, "Network error");
    });
}

#[tokio::test]
async fn test_select_all_carries_over_to_next_page() {
    let api = ScriptedApi::new();
    let host = loaded_host(&api, 2, vec![item(1, "Alien"), item(2, "Brazil")]).await;
    host.with_session(|s| {
        s.toggle_edit_mode();
        s.set_select_all(true);
    });

    api.push_listing(Ok(listing(2, 2, vec![item(3, "Heat"), item(4, "Ran")])));
    let ticket = host.with_session(|s| s.on_next_page()).unwrap().unwrap();
    session::refresh(&host, &api, ticket).await.unwrap();

    host.read(|s| {
        assert_eq!(s.selection().selected_ids(), vec![3, 4]);
        assert!(s.selection().select_all_checked());
        assert!(s.grid().unwrap().pagination.next.is_none());
    });
}

#[tokio::test]
async fn test_filters_persist_across_sessions() {
    let api = ScriptedApi::new();
    let host = loaded_host(&api, 1, vec![]).await;
    host.with_session(|s| {
        s.on_format_filters_changed(vec!["DVD".to_string(), "4K".to_string()]);
        s.on_status_filter_changed(StatusFilter::from_checked(&[StatusFilter::Wanted]));
        s.on_search_changed("star wars");
        s.on_page_size_changed(Some(24));
    });

    let store = host.read(|s| s.store().clone());
    assert_eq!(store.get(keys::FORMATS).as_deref(), Some(r#"["4K","DVD"]"#));

    let restored = CatalogueSession::new(store);
    let query = restored.query();
    assert_eq!(query.page, 1);
    assert_eq!(query.status_filter, StatusFilter::Wanted);
    assert_eq!(query.query, "star wars");
    assert_eq!(query.page_size, Some(24));
    assert_eq!(
        query.listing_path(),
        "/api/search?page=1&sort=alpha&status=wanted&page_size=24&q=star%20wars&formats=4K%2CDVD"
    );
}

#[tokio::test]
async fn test_cleared_filters_survive_reload() {
    let store = MemoryStore::with_entries([(keys::STATUS, "wanted"), (keys::FORMATS, r#"["DVD"]"#)]);
    let mut session = CatalogueSession::new(store);
    session.on_filters_cleared();

    let restored = CatalogueSession::new(session.store().clone());
    assert_eq!(restored.query().status_filter, StatusFilter::Any);
    assert!(restored.query().format_filters.is_empty());
}

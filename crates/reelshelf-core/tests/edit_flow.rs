mod common;

use common::{Call, ScriptedApi, item, listing, loaded_host};
use reelshelf_core::edit::{AddField, EditField};
use reelshelf_core::models::{AddReply, CollectionEntry, CollectionSummary, Suggestion};
use reelshelf_core::session;
use reelshelf_core::{ActionError, FetchError, NoticeLevel, SessionHost, ValidationError};

fn alien() -> reelshelf_core::ItemSummary {
    let mut alien = item(3, "Alien");
    alien.year = "1979".to_string();
    alien.poster_url = "/posters/alien.jpg".to_string();
    alien
}

#[tokio::test]
async fn test_open_edit_fills_collections() {
    let api = ScriptedApi::new();
    let host = loaded_host(&api, 1, vec![alien()]).await;
    api.item_collections
        .borrow_mut()
        .push_back(Ok(vec!["Sci-Fi".to_string(), "Horror".to_string()]));

    session::open_edit(&host, &api, 3).await.unwrap();

    host.read(|s| {
        let edit = s.edit().unwrap();
        assert_eq!(edit.form.title, "Alien");
        assert_eq!(edit.form.collections, "Sci-Fi, Horror");
    });
}

#[tokio::test]
async fn test_collections_for_reopened_dialog_are_discarded() {
    let api = ScriptedApi::new();
    let host = loaded_host(&api, 1, vec![alien(), item(7, "Heat")]).await;
    api.item_collections
        .borrow_mut()
        .push_back(Ok(vec!["Sci-Fi".to_string()]));

    // The dialog is reopened for another movie while the first lookup waits.
    let (first, reopened) = tokio::join!(session::open_edit(&host, &api, 3), async {
        host.with_session(|s| s.open_edit(7))
    });
    first.unwrap();
    assert!(reopened.flatten().is_some());

    host.read(|s| {
        let edit = s.edit().unwrap();
        assert_eq!(edit.id, 7);
        assert_eq!(edit.form.collections, "");
    });
}

#[tokio::test]
async fn test_save_edit_reports_changed_fields() {
    let api = ScriptedApi::new();
    let host = loaded_host(&api, 1, vec![alien()]).await;
    api.item_collections
        .borrow_mut()
        .push_back(Ok(vec!["Sci-Fi".to_string()]));
    session::open_edit(&host, &api, 3).await.unwrap();

    host.with_session(|s| {
        s.set_edit_field(EditField::Title, "Aliens");
        s.set_edit_field(EditField::Year, "1986");
    });
    api.unit_replies.borrow_mut().push_back(Ok(()));
    api.push_listing(Ok(listing(1, 1, vec![item(3, "Aliens")])));
    api.collections.borrow_mut().push_back(Ok(vec![]));

    session::save_edit(&host, &api).await.unwrap();

    let saved = api
        .calls()
        .into_iter()
        .find_map(|c| match c {
            Call::Save(id, payload) => Some((id, payload)),
            _ => None,
        })
        .unwrap();
    assert_eq!(saved.0, 3);
    assert_eq!(saved.1.title, "Aliens");
    assert_eq!(saved.1.collections, vec!["Sci-Fi"]);

    host.read(|s| {
        assert!(s.edit().is_none());
        let notice = s.notices().latest().unwrap();
        assert_eq!(notice.title, "Aliens");
        assert_eq!(notice.subtitle, "Edited: title, year");
        assert_eq!(notice.poster_url.as_deref(), Some("/posters/alien.jpg"));
        assert_eq!(s.grid().unwrap().cards[0].title, "Aliens");
    });
}

#[tokio::test]
async fn test_failed_save_keeps_dialog_with_inline_error() {
    let api = ScriptedApi::new();
    let host = loaded_host(&api, 1, vec![alien()]).await;
    host.with_session(|s| s.open_edit(3));
    api.unit_replies
        .borrow_mut()
        .push_back(Err(FetchError::Network("reset".into())));

    let result = session::save_edit(&host, &api).await;

    assert_eq!(
        result,
        Err(ActionError::Fetch(FetchError::Network("reset".into())))
    );
    assert_eq!(api.listing_pages(), vec![1]);
    host.read(|s| {
        let edit = s.edit().unwrap();
        assert_eq!(edit.error.as_deref(), Some("Save failed: Network error"));
    });
}

#[tokio::test]
async fn test_save_with_empty_title_sends_nothing() {
    let api = ScriptedApi::new();
    let host = loaded_host(&api, 1, vec![alien()]).await;
    host.with_session(|s| {
        s.open_edit(3);
        s.set_edit_field(EditField::Title, "  ");
    });

    let result = session::save_edit(&host, &api).await;
    assert_eq!(
        result,
        Err(ActionError::Validation(ValidationError::EmptyTitle))
    );
    assert!(api.mutations().is_empty());
}

#[tokio::test]
async fn test_delete_one_refreshes_current_page() {
    let api = ScriptedApi::new();
    let host = loaded_host(&api, 2, vec![alien()]).await;
    api.push_listing(Ok(listing(2, 2, vec![alien()])));
    let ticket = host.with_session(|s| s.on_next_page()).unwrap().unwrap();
    session::refresh(&host, &api, ticket).await.unwrap();

    host.with_session(|s| s.open_edit(3));
    api.unit_replies.borrow_mut().push_back(Ok(()));
    api.push_listing(Ok(listing(2, 2, vec![])));

    session::delete_one(&host, &api, |_| true).await.unwrap();

    assert_eq!(api.mutations(), vec![Call::Delete(3)]);
    assert_eq!(api.listing_pages(), vec![1, 2, 2]);
    host.read(|s| {
        assert!(s.edit().is_none());
        let notice = s.notices().latest().unwrap();
        assert_eq!(notice.title, "Alien");
        assert_eq!(notice.subtitle, "Removed");
    });
}

#[tokio::test]
async fn test_identify_and_apply_suggestion() {
    let api = ScriptedApi::new();
    let host = loaded_host(&api, 1, vec![alien()]).await;
    host.with_session(|s| s.open_edit(3));
    api.suggestions.borrow_mut().push_back(Ok(vec![Suggestion {
        title: "Alien".to_string(),
        release_date: "1979-05-25".to_string(),
        external_id: Some("348".to_string()),
    }]));

    let suggestions = session::identify(&host, &api).await.unwrap();
    assert_eq!(
        api.mutations(),
        vec![Call::Suggestions("Alien".to_string(), "1979".to_string())]
    );

    host.with_session(|s| s.apply_suggestion(&suggestions[0]));
    host.read(|s| assert_eq!(s.edit().unwrap().form.external_id, "348"));
}

#[tokio::test]
async fn test_identify_without_dialog_is_detached() {
    let api = ScriptedApi::new();
    let host = loaded_host(&api, 1, vec![alien()]).await;
    let result = session::identify(&host, &api).await;
    assert_eq!(result, Err(ActionError::Detached));
    assert!(api.mutations().is_empty());
}

#[tokio::test]
async fn test_add_item_notifies_and_clears_draft() {
    let api = ScriptedApi::new();
    let host = loaded_host(&api, 3, vec![alien()]).await;
    host.with_session(|s| {
        s.set_add_field(AddField::Title, "Heat");
        s.set_add_field(AddField::Year, "1995");
        s.set_add_field(AddField::Format, "DVD");
    });
    api.adds.borrow_mut().push_back(Ok(AddReply {
        title: "Heat".to_string(),
        poster_url: "/posters/heat.jpg".to_string(),
    }));
    api.push_listing(Ok(listing(1, 3, vec![item(9, "Heat")])));

    session::add_item(&host, &api).await.unwrap();

    host.read(|s| {
        let notice = s.notices().latest().unwrap();
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.title, "Heat");
        assert_eq!(notice.subtitle, "Added");
        assert_eq!(notice.poster_url.as_deref(), Some("/posters/heat.jpg"));
        assert_eq!(s.add_form().title, "");
        assert_eq!(s.add_form().format, "DVD");
        assert_eq!(s.query().page, 1);
    });
}

#[tokio::test]
async fn test_add_without_title_is_rejected() {
    let api = ScriptedApi::new();
    let host = loaded_host(&api, 1, vec![]).await;
    let result = session::add_item(&host, &api).await;
    assert_eq!(
        result,
        Err(ActionError::Validation(ValidationError::EmptyTitle))
    );
    assert!(api.mutations().is_empty());
}

#[tokio::test]
async fn test_expand_collection_fetches_members_once() {
    let api = ScriptedApi::new();
    let host = loaded_host(&api, 1, vec![]).await;
    api.collections.borrow_mut().push_back(Ok(vec![CollectionSummary {
        id: 4,
        name: "Noir".to_string(),
        count: 1,
    }]));
    api.members.borrow_mut().push_back(Ok(vec![CollectionEntry {
        title: "Chinatown".to_string(),
        poster_url: String::new(),
    }]));

    session::load_collections(&host, &api).await.unwrap();
    session::expand_collection(&host, &api, 4).await.unwrap();
    session::expand_collection(&host, &api, 4).await.unwrap();

    assert_eq!(
        api.mutations(),
        vec![Call::Collections, Call::CollectionMovies(4)]
    );
    host.read(|s| {
        let members = s.collections().members(4).unwrap();
        assert_eq!(members[0].title, "Chinatown");
    });
}

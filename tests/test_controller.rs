use forkify::{BookmarkStore, Controller, Event, ForkifyClient, TerminalView};
use std::path::{Path, PathBuf};
use std::time::Duration;

fn recipe_body(id: &str, title: &str) -> String {
    format!(
        r#"{{
            "status": "success",
            "data": {{
                "recipe": {{
                    "id": "{id}",
                    "title": "{title}",
                    "publisher": "Simply Recipes",
                    "source_url": "https://example.com/{id}",
                    "image_url": "https://example.com/{id}.jpg",
                    "servings": 4,
                    "cooking_time": 60,
                    "ingredients": [
                        {{"quantity": 2, "unit": "cups", "description": "flour"}},
                        {{"quantity": null, "unit": "", "description": "salt"}}
                    ]
                }}
            }}
        }}"#
    )
}

fn temp_storage(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("forkify-it-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn output(app: &Controller<ForkifyClient, TerminalView<Vec<u8>>>) -> String {
    String::from_utf8_lossy(app.view().get_ref()).to_string()
}

async fn app(
    server: &mockito::Server,
    storage: &Path,
) -> Controller<ForkifyClient, TerminalView<Vec<u8>>> {
    let client =
        ForkifyClient::with_base_url(server.url(), None, Duration::from_secs(5)).unwrap();
    Controller::with_store(client, TerminalView::new(Vec::new()), BookmarkStore::new(storage))
        .await
}

#[tokio::test]
async fn test_missing_recipe_shows_error_instead_of_spinner() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes/abc123")
        .with_status(400)
        .with_body(r#"{"status": "fail", "message": "Invalid _id: abc123"}"#)
        .create_async()
        .await;

    let storage = temp_storage("missing");
    let mut app = app(&server, &storage).await;
    app.dispatch(Event::RouteChanged("#abc123".to_string())).await;

    let text = output(&app);
    let spinner = text.find("Loading...").expect("spinner rendered");
    let error = text.find("⚠ We could not find that recipe").expect("error rendered");
    assert!(error > spinner);
    assert!(text.contains("Invalid _id: abc123 (400)"));
    assert!(app.state().recipe.is_none());
    let _ = std::fs::remove_dir_all(storage);
}

#[tokio::test]
async fn test_search_without_results() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes")
        .match_query(mockito::Matcher::UrlEncoded("search".into(), "pizza".into()))
        .with_status(200)
        .with_body(r#"{"status": "success", "results": 0, "data": {"recipes": []}}"#)
        .create_async()
        .await;

    let storage = temp_storage("empty-search");
    let mut app = app(&server, &storage).await;
    app.dispatch(Event::Search("pizza".to_string())).await;

    assert!(app.state().search.results.is_empty());
    assert_eq!(app.state().search.page, 1);
    assert!(output(&app).contains("No recipes found for your query"));
    let _ = std::fs::remove_dir_all(storage);
}

#[tokio::test]
async fn test_bookmarks_persist_across_sessions() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes/r1")
        .with_status(200)
        .with_body(recipe_body("r1", "Banana Bread"))
        .create_async()
        .await;

    let storage = temp_storage("persist");
    {
        let mut first = app(&server, &storage).await;
        first.dispatch(Event::RouteChanged("#r1".to_string())).await;
        first.dispatch(Event::ToggleBookmark).await;
        assert!(first.state().bookmarks.contains("r1"));
    }

    let mut second = app(&server, &storage).await;
    assert!(second.state().bookmarks.contains("r1"));
    assert!(output(&second).contains("#r1  Banana Bread (Simply Recipes)"));

    second.dispatch(Event::RouteChanged("r1".to_string())).await;
    assert!(second.state().recipe.as_ref().unwrap().bookmarked);
    assert!(output(&second).contains("# Banana Bread  [bookmarked]"));

    second.dispatch(Event::ToggleBookmark).await;
    let third = app(&server, &storage).await;
    assert!(third.state().bookmarks.is_empty());
    let _ = std::fs::remove_dir_all(storage);
}

#[tokio::test]
async fn test_servings_update_rerenders_recipe() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes/r2")
        .with_status(200)
        .with_body(recipe_body("r2", "Pancakes"))
        .create_async()
        .await;

    let storage = temp_storage("servings");
    let mut app = app(&server, &storage).await;
    app.dispatch(Event::RouteChanged("#r2".to_string())).await;
    app.dispatch(Event::UpdateServings(6)).await;

    let recipe = app.state().recipe.as_ref().unwrap();
    assert_eq!(recipe.servings, 6);
    assert_eq!(recipe.ingredients[0].quantity, Some(3.0));
    assert_eq!(recipe.ingredients[1].quantity, None);
    assert!(output(&app).contains("60 minutes · 6 servings"));
    let _ = std::fs::remove_dir_all(storage);
}

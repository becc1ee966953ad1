use std::net::SocketAddr;

use axum::Router;
use models::db::DatabaseConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use server::startup::{app, connect_and_migrate};

struct TestApp {
    base_url: String,
}

/// Serve the full stack on an ephemeral port. Storage is a private in-memory
/// SQLite database unless `TEST_DATABASE_URL` is set.
async fn start_server() -> anyhow::Result<TestApp> {
    let cfg = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => DatabaseConfig { url, ..Default::default() },
        Err(_) => DatabaseConfig::sqlite_memory(),
    };
    let db = connect_and_migrate(&cfg).await?;

    let app: Router = app(db);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_movie_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    // Create
    let res = c.post(format!("{}/movies", app.base_url))
        .json(&json!({"name": "Avatar", "genre": "Action", "releaseDate": "1999-04-22"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<Value>().await?;
    assert_eq!(created["name"], "Avatar");
    assert_eq!(created["genre"], "Action");
    assert_eq!(created["releaseDate"], "1999-04-22");
    let id = created["id"].as_i64().expect("assigned id");
    let movie_url = format!("{}/movies/{}", app.base_url, id);

    // Read
    let res = c.get(&movie_url).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let found = res.json::<Value>().await?;
    assert_eq!(found["name"], "Avatar");
    assert_eq!(found["genre"], "Action");

    // Update
    let res = c.put(&movie_url)
        .json(&json!({"name": "Avatar", "genre": "Sci-Fi", "releaseDate": "1999-04-22"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated = res.json::<Value>().await?;
    assert_eq!(updated["id"], id);
    assert_eq!(updated["genre"], "Sci-Fi");

    // Delete, then it is gone
    let res = c.delete(&movie_url).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    assert!(res.bytes().await?.is_empty());

    let res = c.get(&movie_url).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    // Deleting again still succeeds
    let res = c.delete(&movie_url).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn e2e_list_counts_stored_movies() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let before = c.get(format!("{}/movies", app.base_url)).send().await?
        .json::<Vec<Value>>().await?.len();

    for (name, genre, date) in [("Avatar", "Action", "1999-04-22"), ("Titanic", "Romance", "2004-01-10")] {
        let res = c.post(format!("{}/movies", app.base_url))
            .json(&json!({"name": name, "genre": genre, "releaseDate": date}))
            .send().await?;
        assert_eq!(res.status(), HttpStatusCode::CREATED);
    }

    let res = c.get(format!("{}/movies", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let list = res.json::<Vec<Value>>().await?;
    assert!(list.len() >= before + 2);
    assert!(list.iter().any(|m| m["name"] == "Titanic" && m["releaseDate"] == "2004-01-10"));
    Ok(())
}

#[tokio::test]
async fn e2e_client_id_is_ignored_on_create() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let first = c.post(format!("{}/movies", app.base_url))
        .json(&json!({"name": "Avatar", "genre": "Action", "releaseDate": "1999-04-22"}))
        .send().await?.json::<Value>().await?;
    // an id already in use must not overwrite the existing row
    let res = c.post(format!("{}/movies", app.base_url))
        .json(&json!({"id": first["id"], "name": "Titanic", "genre": "Romance", "releaseDate": "2004-01-10"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let second = res.json::<Value>().await?;
    assert_ne!(second["id"], first["id"]);

    let res = c.get(format!("{}/movies/{}", app.base_url, first["id"])).send().await?;
    assert_eq!(res.json::<Value>().await?["name"], "Avatar");
    Ok(())
}

#[tokio::test]
async fn e2e_update_unknown_id_is_not_found() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::Client::new()
        .put(format!("{}/movies/{}", app.base_url, i64::MAX))
        .json(&json!({"name": "Avatar", "genre": "Sci-Fi", "releaseDate": "1999-04-22"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Not Found");
    Ok(())
}

#[tokio::test]
async fn e2e_large_id_delete_then_get() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let url = format!("{}/movies/3000000000", app.base_url);

    let res = c.delete(&url).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let res = c.get(&url).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

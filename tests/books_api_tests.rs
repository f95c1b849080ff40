use book_api::{build_router, AppState, Book, MemoryBookStore, MessageBody, Settings};
use serde_json::{json, Value};
use std::sync::Arc;

const CRIME_AND_PUNISHMENT: &str = r#"{"Title":"Crime and Punishment","Author":"Fyodor Dostoyevsky","Publisher":"The Russian Messenger","Publish_Date":"1886-02-15","Rating":2.8,"Status":false}"#;
const CHAMBER_OF_SECRETS: &str = r#"{"Title":"Harry Potter and the Chamber of Secrets","Author":"J.K. Rowling","Publisher":"Bloomsbury","Publish_Date":"1998-07-02T00:00:00Z","Rating":3,"Status":false}"#;

/// Spin up the HTTP server on an OS-assigned port with an empty in-memory store.
async fn spawn_test_server() -> String {
    let app = build_router(
        AppState::new(Arc::new(MemoryBookStore::new())),
        &Settings::default(),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

async fn post_book(client: &reqwest::Client, base: &str, body: &'static str) -> reqwest::Response {
    client
        .post(format!("{}/api/newbook", base))
        .header("content-type", "application/json")
        .body(body)
        .send()
        .await
        .unwrap()
}

async fn put_book(client: &reqwest::Client, base: &str, id: i64, body: Value) -> MessageBody {
    let resp = client
        .put(format!("{}/api/book/{}", base, id))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    resp.json().await.unwrap()
}

async fn seed(client: &reqwest::Client, base: &str) {
    for body in [CRIME_AND_PUNISHMENT, CHAMBER_OF_SECRETS] {
        let resp = post_book(client, base, body).await;
        assert_eq!(resp.status(), 200);
    }
}

#[tokio::test]
async fn create_returns_id_and_success_message() {
    let base = spawn_test_server().await;
    let client = reqwest::Client::new();

    let first: MessageBody = post_book(&client, &base, CRIME_AND_PUNISHMENT).await.json().await.unwrap();
    let second: MessageBody = post_book(&client, &base, CHAMBER_OF_SECRETS).await.json().await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.message, "Book added successfully");
}

#[tokio::test]
async fn create_out_of_range_rating_is_rejected_with_200() {
    let base = spawn_test_server().await;
    let client = reqwest::Client::new();

    for body in [
        r#"{"Title":"Harry Potter and the Chamber of Secrets","Rating":5,"Status":true}"#,
        r#"{"Title":"Harry Potter and the Chamber of Secrets","Rating":0,"Status":true}"#,
    ] {
        let resp = post_book(&client, &base, body).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.text().await.unwrap(),
            r#"{"id":-1,"message":"Rating needs to be in range 1-3"}"#
        );
    }

    let books: Vec<Book> = reqwest::get(format!("{}/api/book", base)).await.unwrap().json().await.unwrap();
    assert!(books.is_empty());
}

#[tokio::test]
async fn list_returns_books_in_insertion_order() {
    let base = spawn_test_server().await;
    let client = reqwest::Client::new();
    seed(&client, &base).await;

    let resp = reqwest::get(format!("{}/api/book", base)).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.text().await.unwrap(),
        r#"[{"ID":1,"Title":"Crime and Punishment","Author":"Fyodor Dostoyevsky","Publisher":"The Russian Messenger","Publish_Date":"1886-02-15T00:00:00Z","Rating":2.8,"Status":false},{"ID":2,"Title":"Harry Potter and the Chamber of Secrets","Author":"J.K. Rowling","Publisher":"Bloomsbury","Publish_Date":"1998-07-02T00:00:00Z","Rating":3,"Status":false}]"#
    );
}

#[tokio::test]
async fn empty_list_is_json_array() {
    let base = spawn_test_server().await;
    let resp = reqwest::get(format!("{}/api/book", base)).await.unwrap();
    assert_eq!(resp.text().await.unwrap(), "[]");
}

#[tokio::test]
async fn get_existing_and_missing_book() {
    let base = spawn_test_server().await;
    let client = reqwest::Client::new();
    seed(&client, &base).await;

    let resp = reqwest::get(format!("{}/api/book/2", base)).await.unwrap();
    assert_eq!(
        resp.text().await.unwrap(),
        r#"{"ID":2,"Title":"Harry Potter and the Chamber of Secrets","Author":"J.K. Rowling","Publisher":"Bloomsbury","Publish_Date":"1998-07-02T00:00:00Z","Rating":3,"Status":false}"#
    );

    for id in [3, 999_999] {
        let resp = reqwest::get(format!("{}/api/book/{}", base, id)).await.unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.text().await.unwrap(),
            r#"{"ID":0,"Title":"","Author":"","Publisher":"","Publish_Date":"","Rating":0,"Status":false}"#
        );
    }
}

#[tokio::test]
async fn update_reports_rows_affected() {
    let base = spawn_test_server().await;
    let client = reqwest::Client::new();
    seed(&client, &base).await;

    let mut edited: Value = serde_json::from_str(CHAMBER_OF_SECRETS).unwrap();
    edited["ID"] = json!(2);
    edited["Rating"] = json!(2.65);
    edited["Status"] = json!(true);

    let body = put_book(&client, &base, 2, edited.clone()).await;
    assert_eq!(body.id, 1);
    assert_eq!(body.message, "User updated successfully. Total rows/record affected 1 ");

    let stored: Book = reqwest::get(format!("{}/api/book/2", base)).await.unwrap().json().await.unwrap();
    assert_eq!(stored.rating, 2.65);
    assert!(stored.status);

    let missing = put_book(&client, &base, 3, edited).await;
    assert_eq!(missing.id, 0);
    assert_eq!(missing.message, "User updated successfully. Total rows/record affected 0 ");
}

#[tokio::test]
async fn update_out_of_range_rating_is_rejected_for_any_id() {
    let base = spawn_test_server().await;
    let client = reqwest::Client::new();
    seed(&client, &base).await;

    for (id, rating) in [(2, 5), (2, 0), (42, 5)] {
        let mut edited: Value = serde_json::from_str(CHAMBER_OF_SECRETS).unwrap();
        edited["Rating"] = json!(rating);
        let body = put_book(&client, &base, id, edited).await;
        assert_eq!(
            body,
            MessageBody {
                id,
                message: "Rating needs to be in range 1-3".into()
            }
        );
    }

    let stored: Book = reqwest::get(format!("{}/api/book/2", base)).await.unwrap().json().await.unwrap();
    assert_eq!(stored.rating, 3.0);
}

#[tokio::test]
async fn delete_existing_then_missing() {
    let base = spawn_test_server().await;
    let client = reqwest::Client::new();
    seed(&client, &base).await;

    let resp = client.delete(format!("{}/api/deletebook/1", base)).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.text().await.unwrap(),
        r#"{"id":1,"message":"User updated successfully. Total rows/record affected 1"}"#
    );

    let gone: Book = reqwest::get(format!("{}/api/book/1", base)).await.unwrap().json().await.unwrap();
    assert_eq!(gone, Book::default());

    let resp = client.delete(format!("{}/api/deletebook/3", base)).send().await.unwrap();
    assert_eq!(
        resp.text().await.unwrap(),
        r#"{"id":3,"message":"User updated successfully. Total rows/record affected 0"}"#
    );
}

#[tokio::test]
async fn bad_input_does_not_take_the_server_down() {
    let base = spawn_test_server().await;
    let client = reqwest::Client::new();

    let resp = reqwest::get(format!("{}/api/book/not-a-number", base)).await.unwrap();
    assert_eq!(resp.status(), 400);
    let err: Value = resp.json().await.unwrap();
    assert_eq!(err["error"]["code"], "bad_request");

    let resp = post_book(&client, &base, r#"{"Title": "#).await;
    assert_eq!(resp.status(), 400);

    let resp = post_book(&client, &base, r#"{"Publish_Date":"someday","Rating":2}"#).await;
    assert_eq!(resp.status(), 400);

    let resp = post_book(&client, &base, CHAMBER_OF_SECRETS).await;
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn responses_carry_permissive_cors_headers() {
    let base = spawn_test_server().await;
    let client = reqwest::Client::new();
    let resp = client
        .get(format!("{}/api/book", base))
        .header("origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.headers().get("access-control-allow-origin").unwrap(), "*");
}

#[tokio::test]
async fn operational_routes_respond() {
    let base = spawn_test_server().await;

    let health: Value = reqwest::get(format!("{}/health", base)).await.unwrap().json().await.unwrap();
    assert_eq!(health, json!({"status": "ok"}));

    let ready: Value = reqwest::get(format!("{}/ready", base)).await.unwrap().json().await.unwrap();
    assert_eq!(ready, json!({"status": "ok", "database": "ok"}));

    let version: Value = reqwest::get(format!("{}/version", base)).await.unwrap().json().await.unwrap();
    assert_eq!(version["name"], "book-api");
}

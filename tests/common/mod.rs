//! Shared test harness: spawns the real application router on an
//! ephemeral port, backed by a seeded in-memory SQLite database. Each
//! test gets its own app and store, mirroring a fresh-fixtures-per-test
//! setup.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;

use biztime::common::{migrations, AppState};

pub struct TestApp {
    base_url: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

pub async fn spawn_app() -> TestApp {
    // A single connection keeps every statement on the same in-memory
    // database.
    let connect_options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("sqlite connect options")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(connect_options)
        .await
        .expect("connect to in-memory sqlite");

    migrations::run_migrations(&pool)
        .await
        .expect("run migrations");
    seed(&pool).await;

    let state = Arc::new(RwLock::new(AppState { db: pool }));
    let app = biztime::app(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test app");
    });

    TestApp {
        base_url: format!("http://{}", addr),
        client: reqwest::Client::new(),
    }
}

/// Fixtures: two companies; invoices 1 and 2 belong to apple (unpaid),
/// invoice 3 belongs to ibm and is already paid.
async fn seed(pool: &SqlitePool) {
    sqlx::query(
        r#"
        INSERT INTO companies (code, name, description)
        VALUES
            ('apple', 'Apple Computer', 'Maker of OSX.'),
            ('ibm', 'IBM', 'Big blue.')
        "#,
    )
    .execute(pool)
    .await
    .expect("seed companies");

    sqlx::query(
        r#"
        INSERT INTO invoices (comp_code, amt, paid, add_date, paid_date)
        VALUES
            ('apple', 100, 0, '2023-07-27T07:00:00.000Z', NULL),
            ('apple', 200, 0, '2023-07-27T07:00:00.000Z', NULL),
            ('ibm', 300, 1, '2023-07-27T07:00:00.000Z', '2023-08-01T07:00:00.000Z')
        "#,
    )
    .execute(pool)
    .await
    .expect("seed invoices");
}

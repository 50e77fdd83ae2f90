use std::time::Duration;

use pmboard_api::db::{Database, DbConfig, DbError};
use pmboard_id::UuidArray;
use sqlx::Row;
use testcontainers::{core::IntoContainerPort, runners::AsyncRunner, GenericImage, ImageExt};
use uuid::Uuid;

async fn wait_for_postgres(config: &DbConfig) {
    let max_wait = Duration::from_secs(10);
    let start = std::time::Instant::now();

    loop {
        match sqlx::PgPool::connect_with(config.connect_options()).await {
            Ok(pool) => {
                pool.close().await;
                return;
            }
            Err(_) => {
                if start.elapsed() > max_wait {
                    panic!("postgres did not become ready within {max_wait:?}");
                }
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        }
    }
}

async fn create_schema(db: &Database) {
    sqlx::query(
        r#"
        CREATE TABLE lists (
            internal_id BIGSERIAL PRIMARY KEY,
            public_id UUID NOT NULL UNIQUE,
            board_public_id UUID NOT NULL,
            title TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            board_internal_id BIGINT NOT NULL
        )
        "#,
    )
    .execute(db.pool())
    .await
    .unwrap();

    sqlx::query(
        r#"
        CREATE TABLE list_members (
            list_public_id UUID PRIMARY KEY,
            member_ids UUID[] NOT NULL
        )
        "#,
    )
    .execute(db.pool())
    .await
    .unwrap();

    sqlx::query(
        r#"
        CREATE TABLE legacy_members (
            list_public_id UUID PRIMARY KEY,
            member_ids TEXT NOT NULL
        )
        "#,
    )
    .execute(db.pool())
    .await
    .unwrap();
}

#[tokio::test]
async fn uuid_array_column_roundtrip() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pmboard_id=debug,sqlx=warn".into()),
        )
        .with_test_writer()
        .try_init();

    let postgres = GenericImage::new("postgres", "16-alpine")
        .with_exposed_port(5432.tcp())
        .with_env_var("POSTGRES_USER", "pmboard")
        .with_env_var("POSTGRES_PASSWORD", "pmboard_test")
        .with_env_var("POSTGRES_DB", "pmboard")
        .start()
        .await
        .expect("failed to start postgres container");

    let port = postgres
        .get_host_port_ipv4(5432.tcp())
        .await
        .expect("failed to resolve postgres host port");

    let config = DbConfig {
        host: "127.0.0.1".to_string(),
        port,
        user: "pmboard".to_string(),
        password: "pmboard_test".to_string(),
        name: "pmboard".to_string(),
        max_connections: 4,
        min_connections: 0,
        ..Default::default()
    };
    wait_for_postgres(&config).await;

    let db = Database::connect(&config).await.unwrap();
    db.health_check().await.unwrap();
    create_schema(&db).await;

    let list_id = Uuid::from_u128(1);
    let board_id = Uuid::from_u128(0xb0a4d);
    sqlx::query(
        "INSERT INTO lists (public_id, board_public_id, title, board_internal_id) VALUES ($1, $2, $3, $4)",
    )
    .bind(list_id)
    .bind(board_id)
    .bind("Backlog")
    .bind(42_i64)
    .execute(db.pool())
    .await
    .unwrap();

    let list = db.lists().get(list_id).await.unwrap().unwrap();
    assert_eq!(list.title, "Backlog");
    assert_eq!(list.board_public_id, board_id);
    assert_eq!(list.board_internal_id, 42);
    assert!(db.lists().get(Uuid::from_u128(99)).await.unwrap().is_none());

    let a = Uuid::from_u128(0x2222);
    let b = Uuid::from_u128(0x1111);

    // Native binding keeps order and duplicates.
    let members = UuidArray::from(vec![a, b, a]);
    db.lists().set_members(list_id, &members).await.unwrap();

    let read = db.lists().members(list_id).await.unwrap().unwrap();
    assert_eq!(read.member_ids, members);

    // Text literal binding lands in the same column type.
    db.lists()
        .append_members(list_id, &UuidArray::from(vec![b]))
        .await
        .unwrap();
    let read = db.lists().members(list_id).await.unwrap().unwrap();
    assert_eq!(read.member_ids.as_slice(), &[a, b, a, b]);

    // Empty arrays.
    let empty_id = Uuid::from_u128(2);
    db.lists()
        .set_members(empty_id, &UuidArray::new())
        .await
        .unwrap();
    let read = db.lists().members(empty_id).await.unwrap().unwrap();
    assert!(read.member_ids.is_empty());

    // The server's own text rendering decodes through the codec.
    let row = sqlx::query(
        "SELECT member_ids::text AS literal FROM list_members WHERE list_public_id = $1",
    )
    .bind(list_id)
    .fetch_one(db.pool())
    .await
    .unwrap();
    let literal: UuidArray = row.try_get("literal").unwrap();
    assert_eq!(literal.as_slice(), &[a, b, a, b]);

    // Legacy text rows: loose formatting reads, a bad element fails the read.
    sqlx::query("INSERT INTO legacy_members VALUES ($1, $2), ($3, $4)")
        .bind(Uuid::from_u128(10))
        .bind(format!("{{ {a} , \"{b}\" }}"))
        .bind(Uuid::from_u128(11))
        .bind("{\"not-a-uuid\"}")
        .execute(db.pool())
        .await
        .unwrap();

    let row = sqlx::query("SELECT member_ids FROM legacy_members WHERE list_public_id = $1")
        .bind(Uuid::from_u128(10))
        .fetch_one(db.pool())
        .await
        .unwrap();
    let legacy: UuidArray = row.try_get("member_ids").unwrap();
    assert_eq!(legacy.as_slice(), &[a, b]);

    let row = sqlx::query("SELECT member_ids FROM legacy_members WHERE list_public_id = $1")
        .bind(Uuid::from_u128(11))
        .fetch_one(db.pool())
        .await
        .unwrap();
    let err = row.try_get::<UuidArray, _>("member_ids").unwrap_err();
    let err = DbError::from(err);
    assert!(matches!(err, DbError::Decode { ref column, .. } if column == "member_ids"));

    db.close().await;
}

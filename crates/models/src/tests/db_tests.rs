use crate::db::{connect_options, connect_with_config, is_memory_sqlite, ping};
use anyhow::Result;
use configs::DatabaseConfig;

#[test]
fn detects_memory_sqlite_urls() {
    assert!(is_memory_sqlite("sqlite::memory:"));
    assert!(is_memory_sqlite("sqlite://:memory:"));
    assert!(!is_memory_sqlite("sqlite://data/college.db"));
    assert!(!is_memory_sqlite("postgres://localhost/:memory:"));
}

#[test]
fn memory_sqlite_is_pinned_to_one_connection() {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), max_connections: 10, ..Default::default() };
    let opt = connect_options(&cfg);
    assert_eq!(opt.get_max_connections(), Some(1));
    assert_eq!(opt.get_min_connections(), Some(1));
}

#[test]
fn pool_settings_follow_config() {
    let cfg = DatabaseConfig {
        url: "postgres://localhost/college".into(),
        max_connections: 7,
        min_connections: 2,
        ..Default::default()
    };
    let opt = connect_options(&cfg);
    assert_eq!(opt.get_max_connections(), Some(7));
    assert_eq!(opt.get_min_connections(), Some(2));
    assert_eq!(opt.get_url(), "postgres://localhost/college");
}

#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    ping(&db).await?;
    Ok(())
}

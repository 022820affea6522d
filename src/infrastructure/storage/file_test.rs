use anyhow::Result;

use super::FileStore;
use crate::domain::models::KeyValueStore;

#[tokio::test]
async fn it_returns_none_without_a_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileStore::new(dir.path().join("local-storage.json"));

    assert_eq!(store.get("sessionId").await?, None);
    assert!(!store.file_path().exists());

    return Ok(());
}

#[tokio::test]
async fn it_persists_values_across_instances() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let file_path = dir.path().join("nested/state/local-storage.json");

    FileStore::new(file_path.clone())
        .set("sessionId", "abc123")
        .await?;

    let reopened = FileStore::new(file_path);
    assert_eq!(reopened.get("sessionId").await?, Some("abc123".to_string()));

    return Ok(());
}

#[tokio::test]
async fn it_keeps_other_keys_when_setting() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileStore::new(dir.path().join("local-storage.json"));

    store.set("theme", "dark").await?;
    store.set("sessionId", "abc123").await?;

    assert_eq!(store.get("theme").await?, Some("dark".to_string()));
    assert_eq!(store.get("sessionId").await?, Some("abc123".to_string()));

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_corrupt_files() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let file_path = dir.path().join("local-storage.json");
    std::fs::write(&file_path, "not json")?;

    let err = FileStore::new(file_path).get("sessionId").await.unwrap_err();
    assert!(err.to_string().contains("is not a JSON object of strings"));

    return Ok(());
}

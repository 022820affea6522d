use anyhow::Result;
use strum::IntoEnumIterator;

use super::Assets;
use crate::domain::models::Emotion;

#[test]
fn it_bundles_an_icon_for_every_emotion() {
    let names = Assets::list();
    for emotion in Emotion::iter() {
        assert!(names.contains(&format!("icons/{}", emotion.icon_file())));
    }
}

#[test]
fn it_lists_assets_sorted() {
    let names = Assets::list();

    assert!(names.contains(&"icons/neutral.svg".to_string()));
    assert!(names.contains(&"style.css".to_string()));

    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[tokio::test]
async fn it_exports_assets_at_served_paths() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let written = Assets::export(dir.path()).await?;

    assert_eq!(written.len(), Assets::list().len());
    assert!(dir.path().join("static/assets/neutral.svg").exists());
    assert!(dir.path().join("static/assets/happy.svg").exists());
    assert!(dir.path().join("static/style.css").exists());

    return Ok(());
}

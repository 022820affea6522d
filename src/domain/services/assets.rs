#[cfg(test)]
#[path = "assets_test.rs"]
mod tests;

use std::path;

use anyhow::Result;
use rust_embed::RustEmbed;
use tokio::fs;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Embedded;

pub struct Assets {}

impl Assets {
    pub fn list() -> Vec<String> {
        let mut names = Embedded::iter()
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();
        names.sort();

        return names;
    }

    /// Where an embedded asset is served from, relative to a page.
    fn served_path(name: &str) -> path::PathBuf {
        if let Some(icon) = name.strip_prefix("icons/") {
            return path::PathBuf::from("static/assets").join(icon);
        }

        return path::PathBuf::from("static").join(name);
    }

    /// Writes every embedded asset under `out_dir` using the paths pages link
    /// to. Returns the written files.
    pub async fn export(out_dir: &path::Path) -> Result<Vec<path::PathBuf>> {
        let mut written = vec![];

        for name in Assets::list() {
            let Some(file) = Embedded::get(&name) else {
                continue;
            };

            let file_path = out_dir.join(Assets::served_path(&name));
            if let Some(parent) = file_path.parent() {
                fs::create_dir_all(parent).await?;
            }

            fs::write(&file_path, file.data.as_ref()).await?;
            written.push(file_path);
        }

        tracing::debug!(count = written.len(), out_dir = ?out_dir, "Exported assets");
        return Ok(written);
    }
}

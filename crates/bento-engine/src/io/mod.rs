use crate::models::Page;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PageIoError {
    #[error("Page file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid page file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid page path: {0}")]
    InvalidPath(String),
}

/// Read a saved page
pub fn load_page(path: &Path) -> Result<Page, PageIoError> {
    if !path.exists() {
        return Err(PageIoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let page: Page = serde_json::from_str(&content)?;
    log::info!("Loaded {} blocks from {}", page.blocks.len(), path.display());
    Ok(page)
}

/// Write a page as pretty JSON, creating parent directories as needed
pub fn save_page(path: &Path, page: &Page) -> Result<(), PageIoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(page)?;
    fs::write(path, json)?;
    log::debug!("Saved page to {}", path.display());
    Ok(())
}

/// A page path must name a `.json` file; it may not exist yet
pub fn validate_page_path(path: &Path) -> Result<(), PageIoError> {
    if path.is_dir() {
        return Err(PageIoError::InvalidPath(format!(
            "{} is a directory",
            path.display()
        )));
    }
    match path.extension() {
        Some(ext) if ext == "json" => Ok(()),
        _ => Err(PageIoError::InvalidPath(format!(
            "{} is not a .json file",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Block, BlockType, Profile};
    use crate::tests::{create_test_dir, write_test_file};
    use pretty_assertions::assert_eq;

    fn sample_page() -> Page {
        let mut social = Block::new("yt", BlockType::Social);
        social.channel_id = Some("UC1".to_string());
        social.col_span = 2;
        Page {
            profile: Profile {
                name: "Ada".to_string(),
                bio: "Engines".to_string(),
                avatar_url: None,
            },
            blocks: vec![Block::new("a", BlockType::Link).with_title("Blog"), social],
        }
    }

    #[test]
    fn test_save_then_load() {
        // Given a page saved into a nested directory
        let dir = create_test_dir();
        let path = dir.path().join("pages").join("me.json");
        save_page(&path, &sample_page()).unwrap();

        // When loading it back
        let page = load_page(&path).unwrap();

        // Then nothing was lost
        assert_eq!(page, sample_page());
    }

    #[test]
    fn test_load_saved_bento_shape() {
        let dir = create_test_dir();
        let path = write_test_file(
            &dir,
            "saved.json",
            r#"{
                "profile": {"name": "Ada", "bio": "", "avatarUrl": "https://example.com/a.png"},
                "blocks": [
                    {"id": "m", "type": "MAP", "content": "Berlin", "colSpan": 2, "rowSpan": 2},
                    {"id": "s", "type": "SPACER"}
                ]
            }"#,
        );

        let page = load_page(&path).unwrap();

        assert_eq!(page.profile.avatar_url.as_deref(), Some("https://example.com/a.png"));
        assert_eq!(page.blocks.len(), 2);
        assert_eq!(page.blocks[0].content, "Berlin");
        assert_eq!(page.blocks[1].kind, BlockType::Spacer);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = create_test_dir();
        let result = load_page(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(PageIoError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = create_test_dir();
        let path = write_test_file(&dir, "broken.json", "{\"blocks\": [");

        let result = load_page(&path);

        assert!(matches!(result, Err(PageIoError::Json(_))));
        assert!(result.unwrap_err().to_string().starts_with("Invalid page file"));
    }

    #[test]
    fn test_validate_page_path() {
        let dir = create_test_dir();
        assert!(validate_page_path(&dir.path().join("new.json")).is_ok());
        assert!(matches!(
            validate_page_path(dir.path()),
            Err(PageIoError::InvalidPath(_))
        ));
        assert!(matches!(
            validate_page_path(&dir.path().join("page.md")),
            Err(PageIoError::InvalidPath(_))
        ));
    }
}

//! Shared helpers for unit tests.

use crate::feed::{FeedError, FeedSource};
use crate::models::{Block, BlockType, VideoDescriptor};
use std::cell::RefCell;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn write_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}

/// SOCIAL block pointing at a channel, with no cached videos
pub fn feed_block(channel_id: &str) -> Block {
    let mut block = Block::new("feed", BlockType::Social);
    block.channel_id = Some(channel_id.to_string());
    block
}

pub fn video(id: &str) -> VideoDescriptor {
    VideoDescriptor {
        id: id.to_string(),
        title: format!("Title of {id}"),
        thumbnail: format!("https://img.youtube.com/vi/{id}/mqdefault.jpg"),
    }
}

/// Channel feed with `entries` videos `vid0..`
pub fn channel_feed(entries: usize) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns:yt="http://www.youtube.com/xml/schemas/2015" xmlns:media="http://search.yahoo.com/mrss/" xmlns="http://www.w3.org/2005/Atom">
 <title>Test Channel</title>
 <author><name>Test Channel</name></author>
"#,
    );
    for i in 0..entries {
        xml.push_str(&format!(
            r#" <entry>
  <id>yt:video:vid{i}</id>
  <yt:videoId>vid{i}</yt:videoId>
  <title>Video {i} &amp; friends</title>
  <media:group>
   <media:title>Media title {i}</media:title>
  </media:group>
 </entry>
"#
        ));
    }
    xml.push_str("</feed>\n");
    xml
}

/// Feed source answering every request with a canned response
pub struct MockFeedSource {
    response: Result<String, u16>,
    requested: RefCell<Vec<String>>,
}

impl MockFeedSource {
    pub fn ok(body: String) -> Self {
        Self {
            response: Ok(body),
            requested: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            response: Err(status),
            requested: RefCell::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl FeedSource for MockFeedSource {
    async fn fetch_text(&self, url: &str) -> Result<String, FeedError> {
        self.requested.borrow_mut().push(url.to_string());
        match &self.response {
            Ok(body) => Ok(body.clone()),
            Err(status) => Err(FeedError::Status(*status)),
        }
    }
}

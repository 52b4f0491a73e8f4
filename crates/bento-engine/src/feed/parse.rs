use crate::feed::FeedError;
use crate::feed::urls::{ThumbnailSize, thumbnail_url};
use crate::models::VideoDescriptor;
use quick_xml::Reader;
use quick_xml::events::Event;

/// Entries taken from the top of a channel feed
pub const MAX_FEED_ENTRIES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    VideoId,
    Title,
}

impl Field {
    fn tag(self) -> &'static [u8] {
        match self {
            Field::VideoId => b"yt:videoId",
            Field::Title => b"title",
        }
    }
}

#[derive(Default)]
struct EntryFields {
    video_id: Option<String>,
    title: Option<String>,
}

impl EntryFields {
    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::VideoId => &mut self.video_id,
            Field::Title => &mut self.title,
        }
    }

    fn into_descriptor(self) -> VideoDescriptor {
        let id = self.video_id.unwrap_or_default();
        let thumbnail = thumbnail_url(&id, ThumbnailSize::Medium);
        VideoDescriptor {
            id,
            title: self.title.unwrap_or_default(),
            thumbnail,
        }
    }
}

/// Extract the newest videos from an Atom channel feed.
///
/// Only the first occurrence of `yt:videoId` and `title` inside each `entry`
/// is read. Entries missing either field keep an empty string for it.
pub fn parse_feed(xml: &str) -> Result<Vec<VideoDescriptor>, FeedError> {
    let mut reader = Reader::from_str(xml);
    let mut videos = Vec::new();
    let mut entry: Option<EntryFields> = None;
    let mut capture: Option<Field> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let name = start.name();
                if name.as_ref() == b"entry" {
                    entry = Some(EntryFields::default());
                } else if let Some(fields) = entry.as_mut()
                    && capture.is_none()
                {
                    let field = [Field::VideoId, Field::Title]
                        .into_iter()
                        .find(|field| field.tag() == name.as_ref());
                    if let Some(field) = field
                        && fields.slot(field).is_none()
                    {
                        *fields.slot(field) = Some(String::new());
                        capture = Some(field);
                    }
                }
            }
            Event::Text(text) => {
                if let (Some(field), Some(fields)) = (capture, entry.as_mut())
                    && let Some(value) = fields.slot(field)
                {
                    value.push_str(&text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let (Some(field), Some(fields)) = (capture, entry.as_mut())
                    && let Some(value) = fields.slot(field)
                {
                    value.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::End(end) => {
                let name = end.name();
                if capture.is_some_and(|field| field.tag() == name.as_ref()) {
                    capture = None;
                } else if name.as_ref() == b"entry"
                    && let Some(fields) = entry.take()
                {
                    videos.push(fields.into_descriptor());
                    if videos.len() == MAX_FEED_ENTRIES {
                        break;
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(videos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::channel_feed;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_takes_first_four_entries_in_order() {
        let xml = channel_feed(6);

        let videos = parse_feed(&xml).unwrap();

        assert_eq!(videos.len(), 4);
        let ids: Vec<_> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["vid0", "vid1", "vid2", "vid3"]);
        assert_eq!(videos[2].title, "Video 2 & friends");
        assert_eq!(
            videos[0].thumbnail,
            "https://img.youtube.com/vi/vid0/mqdefault.jpg"
        );
    }

    #[test]
    fn test_feed_title_is_not_an_entry_title() {
        let xml = channel_feed(1);
        let videos = parse_feed(&xml).unwrap();
        assert_eq!(videos[0].title, "Video 0 & friends");
    }

    #[test]
    fn test_missing_fields_degrade_to_empty() {
        let xml = r#"<?xml version="1.0"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:yt="http://www.youtube.com/xml/schemas/2015">
  <entry><title>No id here</title></entry>
  <entry><yt:videoId>abc</yt:videoId></entry>
  <entry><yt:videoId>def</yt:videoId><title/></entry>
</feed>"#;

        let videos = parse_feed(xml).unwrap();

        assert_eq!(videos.len(), 3);
        assert_eq!(videos[0].id, "");
        assert_eq!(videos[0].title, "No id here");
        assert_eq!(videos[0].thumbnail, "https://img.youtube.com/vi//mqdefault.jpg");
        assert_eq!(videos[1].id, "abc");
        assert_eq!(videos[1].title, "");
        assert_eq!(videos[2].title, "");
    }

    #[test]
    fn test_media_title_does_not_override_entry_title() {
        let xml = r#"<feed xmlns:yt="y" xmlns:media="m">
  <entry>
    <yt:videoId>x1</yt:videoId>
    <title>Real title</title>
    <media:group><media:title>Media title</media:title></media:group>
  </entry>
</feed>"#;

        let videos = parse_feed(xml).unwrap();
        assert_eq!(videos[0].title, "Real title");
    }

    #[test]
    fn test_no_entries() {
        let videos = parse_feed("<feed><title>Empty channel</title></feed>").unwrap();
        assert!(videos.is_empty());
    }

    #[test]
    fn test_mismatched_tags_are_an_error() {
        assert!(parse_feed("<feed><entry></feed>").is_err());
    }
}

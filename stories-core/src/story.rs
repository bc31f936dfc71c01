use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use crate::error::StoryError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Story {
    pub title: String,
    pub url: String,
    pub author: String,
    pub num_comments: u32,
    pub points: u32,
    #[serde(rename = "objectID")]
    pub object_id: u64,
}

/// A story as it appears in a dataset file, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawStory {
    pub title: Option<String>,
    pub url: Option<String>,
    pub author: Option<String>,
    pub num_comments: Option<u32>,
    pub points: Option<u32>,
    #[serde(rename = "objectID")]
    pub object_id: Option<u64>,
}

impl TryFrom<RawStory> for Story {
    type Error = StoryError;

    fn try_from(raw: RawStory) -> Result<Self, Self::Error> {
        let title = raw.title.ok_or(StoryError::MissingField("title"))?;
        let url = raw.url.ok_or(StoryError::MissingField("url"))?;
        Url::parse(&url)?;

        Ok(Self {
            title,
            url,
            author: raw.author.ok_or(StoryError::MissingField("author"))?,
            num_comments: raw
                .num_comments
                .ok_or(StoryError::MissingField("num_comments"))?,
            points: raw.points.ok_or(StoryError::MissingField("points"))?,
            object_id: raw.object_id.ok_or(StoryError::MissingField("objectID"))?,
        })
    }
}

/// The built-in dataset shown when no stories file is configured.
pub fn sample_stories() -> Vec<Story> {
    vec![
        Story {
            title: "React".to_owned(),
            url: "https://reactjs.org/".to_owned(),
            author: "Jordan Walke".to_owned(),
            num_comments: 3,
            points: 4,
            object_id: 0,
        },
        Story {
            title: "Redux".to_owned(),
            url: "https://redux.js.org/".to_owned(),
            author: "Dan Abramov, Andrew Clark".to_owned(),
            num_comments: 2,
            points: 5,
            object_id: 1,
        },
    ]
}

/// Keeps the valid records in their original order and drops the rest.
pub fn validate_stories(raw: Vec<RawStory>) -> Vec<Story> {
    raw.into_iter()
        .enumerate()
        .filter_map(|(index, candidate)| match Story::try_from(candidate) {
            Ok(story) => Some(story),
            Err(err) => {
                warn!(index, error = %err, "skipping malformed story");
                None
            }
        })
        .collect()
}

/// Loads a JSON array of stories. Entries that fail to decode or validate are
/// skipped; only an unreadable file or a non-array document is an error.
pub fn load_stories(path: impl AsRef<Path>) -> Result<Vec<Story>, StoryError> {
    let bytes = std::fs::read(path.as_ref())?;
    let values: Vec<serde_json::Value> = serde_json::from_slice(&bytes)?;

    let raw = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<RawStory>(value) {
            Ok(raw) => Some(raw),
            Err(err) => {
                warn!(index, error = %err, "skipping undecodable story");
                None
            }
        })
        .collect();

    Ok(validate_stories(raw))
}

use crate::story::Story;

/// Returns the stories whose title contains `query`, ignoring case, in their
/// original order. An empty query matches every story.
pub fn filter_stories<'a>(stories: &'a [Story], query: &str) -> Vec<&'a Story> {
    let needle = query.to_lowercase();
    stories
        .iter()
        .filter(|story| matches_title(story, &needle))
        .collect()
}

/// `needle` must already be lowercased.
pub fn matches_title(story: &Story, needle: &str) -> bool {
    needle.is_empty() || story.title.to_lowercase().contains(needle)
}

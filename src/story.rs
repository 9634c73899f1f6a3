use super::*;

pub(crate) fn filter_stories<'a>(
  stories: &'a [Story],
  term: &str,
) -> Vec<&'a Story> {
  let term = term.to_lowercase();

  stories
    .iter()
    .filter(|story| story.title.to_lowercase().contains(&term))
    .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Story {
  pub(crate) author: String,
  pub(crate) comment_count: u64,
  pub(crate) id: String,
  pub(crate) points: i64,
  pub(crate) title: String,
  pub(crate) url: Option<String>,
}

impl From<SearchHit> for Story {
  fn from(hit: SearchHit) -> Self {
    Self {
      author: hit.author.unwrap_or_else(|| "unknown".to_string()),
      comment_count: hit.num_comments.unwrap_or(0),
      id: hit.object_id,
      points: hit.points.unwrap_or(0),
      title: hit.title.unwrap_or_else(|| "Untitled".to_string()),
      url: hit.url,
    }
  }
}

impl Story {
  pub(crate) fn detail(&self) -> String {
    format!(
      "{} by {} • {}",
      format_points(self.points),
      self.author,
      format_comments(self.comment_count)
    )
  }

  pub(crate) fn resolved_url(&self) -> String {
    self
      .url
      .clone()
      .filter(|url| !url.is_empty())
      .unwrap_or_else(|| {
        format!("https://news.ycombinator.com/item?id={}", self.id)
      })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_story(id: &str, title: &str) -> Story {
    Story {
      author: "dev".to_string(),
      comment_count: 3,
      id: id.to_string(),
      points: 7,
      title: title.to_string(),
      url: Some(format!("https://example.com/{id}")),
    }
  }

  #[test]
  fn empty_term_keeps_every_story_in_order() {
    let stories = vec![
      sample_story("0", "React"),
      sample_story("1", "Redux"),
      sample_story("2", "Vue"),
    ];

    let filtered = filter_stories(&stories, "");

    assert_eq!(filtered.len(), 3);
    assert_eq!(filtered[0].id, "0");
    assert_eq!(filtered[1].id, "1");
    assert_eq!(filtered[2].id, "2");
  }

  #[test]
  fn term_narrows_by_title_substring() {
    let stories = vec![sample_story("0", "React"), sample_story("1", "Redux")];

    let both = filter_stories(&stories, "Re");
    assert_eq!(both.len(), 2);
    assert_eq!(both[0].id, "0");
    assert_eq!(both[1].id, "1");

    let only_redux = filter_stories(&stories, "Red");
    assert_eq!(only_redux.len(), 1);
    assert_eq!(only_redux[0].id, "1");
  }

  #[test]
  fn matching_ignores_case() {
    let stories = vec![sample_story("0", "React")];

    assert_eq!(filter_stories(&stories, "react").len(), 1);
    assert_eq!(filter_stories(&stories, "REACT").len(), 1);
    assert_eq!(filter_stories(&stories, "eAc").len(), 1);
  }

  #[test]
  fn result_is_a_subsequence_of_the_input() {
    let stories = vec![
      sample_story("0", "Rust in production"),
      sample_story("1", "Go at scale"),
      sample_story("2", "Why Rust"),
    ];

    let filtered = filter_stories(&stories, "rust");

    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].id, "0");
    assert_eq!(filtered[1].id, "2");
  }

  #[test]
  fn hit_with_missing_fields_falls_back() {
    let hit = SearchHit {
      author: None,
      num_comments: None,
      object_id: "99".to_string(),
      points: None,
      title: None,
      url: None,
    };

    let story = Story::from(hit);

    assert_eq!(story.author, "unknown");
    assert_eq!(story.comment_count, 0);
    assert_eq!(story.id, "99");
    assert_eq!(story.points, 0);
    assert_eq!(story.title, "Untitled");
    assert_eq!(story.url, None);
  }

  #[test]
  fn resolved_url_falls_back_to_item_page() {
    let mut story = sample_story("42", "Example");

    assert_eq!(story.resolved_url(), "https://example.com/42");

    story.url = None;
    assert_eq!(
      story.resolved_url(),
      "https://news.ycombinator.com/item?id=42"
    );

    story.url = Some(String::new());
    assert_eq!(
      story.resolved_url(),
      "https://news.ycombinator.com/item?id=42"
    );
  }

  #[test]
  fn detail_reads_points_author_and_comments() {
    let story = sample_story("7", "Example");

    assert_eq!(story.detail(), "7 points by dev • 3 comments");
  }
}

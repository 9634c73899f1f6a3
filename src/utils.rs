pub(crate) fn format_comments(count: u64) -> String {
  match count {
    1 => "1 comment".to_string(),
    _ => format!("{count} comments"),
  }
}

pub(crate) fn format_points(points: i64) -> String {
  match points {
    1 => "1 point".to_string(),
    _ => format!("{points} points"),
  }
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  match text.char_indices().nth(max_chars) {
    None => text.to_string(),
    Some((index, _)) => {
      let mut result = text[..index].trim_end().to_string();
      result.push_str("...");
      result
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn truncate_returns_original_when_within_limit() {
    assert_eq!(truncate("short", 10), "short");
  }

  #[test]
  fn truncate_preserves_exact_length_strings() {
    assert_eq!(truncate("exact", 5), "exact");
  }

  #[test]
  fn truncate_appends_ellipsis_when_exceeding_limit() {
    assert_eq!(truncate("This is a longer line", 4), "This...");
  }

  #[test]
  fn truncate_drops_trailing_whitespace_before_the_ellipsis() {
    assert_eq!(truncate("one two", 4), "one...");
  }

  #[test]
  fn format_points_handles_singular_plural_and_negative() {
    assert_eq!(format_points(1), "1 point");
    assert_eq!(format_points(2), "2 points");
    assert_eq!(format_points(0), "0 points");
    assert_eq!(format_points(-3), "-3 points");
  }

  #[test]
  fn format_comments_handles_singular_and_plural() {
    assert_eq!(format_comments(1), "1 comment");
    assert_eq!(format_comments(0), "0 comments");
    assert_eq!(format_comments(71), "71 comments");
  }
}

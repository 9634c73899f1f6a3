use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
  pub(crate) hits: Vec<SearchHit>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_algolia_search_payload() {
    let payload = r#"{
      "hits": [
        {
          "objectID": "8863",
          "title": "My YC app: Dropbox",
          "url": "http://www.getdropbox.com/u/2/screencast.html",
          "author": "dhouston",
          "num_comments": 71,
          "points": 111,
          "created_at": "2007-04-04T19:16:40Z"
        },
        {
          "objectID": "8952",
          "title": null,
          "url": null,
          "author": null,
          "num_comments": null,
          "points": null
        }
      ],
      "nbHits": 2,
      "page": 0,
      "nbPages": 1
    }"#;

    let response =
      serde_json::from_str::<SearchResponse>(payload).expect("payload decodes");

    assert_eq!(response.hits.len(), 2);

    assert_eq!(response.hits[0].object_id, "8863");
    assert_eq!(response.hits[0].title.as_deref(), Some("My YC app: Dropbox"));
    assert_eq!(response.hits[0].num_comments, Some(71));
    assert_eq!(response.hits[0].points, Some(111));

    assert_eq!(response.hits[1].object_id, "8952");
    assert_eq!(response.hits[1].title, None);
    assert_eq!(response.hits[1].num_comments, None);
  }

  #[test]
  fn rejects_payload_without_hits() {
    assert!(serde_json::from_str::<SearchResponse>(r#"{"page": 0}"#).is_err());
  }
}

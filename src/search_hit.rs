use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchHit {
  pub(crate) author: Option<String>,
  pub(crate) num_comments: Option<u64>,
  #[serde(rename = "objectID")]
  pub(crate) object_id: String,
  pub(crate) points: Option<i64>,
  pub(crate) title: Option<String>,
  pub(crate) url: Option<String>,
}

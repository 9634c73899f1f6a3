use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  client: reqwest::Client,
}

impl Default for Client {
  fn default() -> Self {
    Self {
      client: reqwest::Client::new(),
    }
  }
}

impl Client {
  const API_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search?query=";

  pub(crate) async fn search_stories(
    &self,
    query: &str,
  ) -> Result<Vec<Story>> {
    Ok(
      self
        .client
        .get(format!("{}{query}", Self::API_ENDPOINT))
        .send()
        .await?
        .json::<SearchResponse>()
        .await?
        .hits
        .into_iter()
        .map(Story::from)
        .collect(),
    )
  }
}

#[derive(Clone, Debug)]
pub(crate) enum Effect {
  FetchStories {
    query: String,
    request_id: u64,
  },
  OpenUrl {
    url: String,
  },
}

use super::*;

#[derive(Clone, Debug)]
pub(crate) enum StoriesAction {
  FetchFailure,
  FetchInit,
  FetchSuccess(Vec<Story>),
  RemoveStory(Story),
}

use super::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct StoriesState {
  pub(crate) is_error: bool,
  pub(crate) is_loading: bool,
  pub(crate) stories: Vec<Story>,
}

impl StoriesState {
  pub(crate) fn reduce(self, action: StoriesAction) -> Self {
    match action {
      StoriesAction::FetchFailure => Self {
        is_error: true,
        is_loading: false,
        ..self
      },
      StoriesAction::FetchInit => Self {
        is_error: false,
        is_loading: true,
        ..self
      },
      StoriesAction::FetchSuccess(stories) => Self {
        is_error: false,
        is_loading: false,
        stories,
      },
      StoriesAction::RemoveStory(story) => Self {
        is_error: self.is_error,
        is_loading: self.is_loading,
        stories: self
          .stories
          .into_iter()
          .filter(|candidate| candidate.id != story.id)
          .collect(),
      },
    }
  }
}

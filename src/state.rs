use super::*;

pub(crate) struct State {
  help: HelpView,
  list: ListView,
  list_height: usize,
  next_request_id: u64,
  pending_effects: Vec<Effect>,
  pending_search: Option<PendingSearch>,
  search_term: SearchTerm,
  status: StatusLine,
  stories: StoriesState,
}

impl State {
  fn append_to_term(&mut self, ch: char) -> Result {
    let mut value = self.search_term.get().to_string();

    value.push(ch);

    self.search_term.set(value)
  }

  fn clamp_list(&mut self) {
    let len = self.visible_len();
    self.list.clamp(len);
  }

  pub(crate) fn clear_pending_effects(&mut self) {
    self.pending_effects.clear();
  }

  fn delete_from_term(&mut self) -> Result {
    let mut value = self.search_term.get().to_string();

    value.pop();

    self.search_term.set(value)
  }

  fn dismiss_selected(&mut self) {
    let Some(story) = self.selected_story().cloned() else {
      return;
    };

    let title = truncate(&story.title, 40);

    self.stories =
      std::mem::take(&mut self.stories).reduce(StoriesAction::RemoveStory(story));

    self.clamp_list();

    if !self.help.is_visible() {
      self.flash(format!("Dismissed \"{title}\""));
    }
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> Result<CommandDispatch> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::DismissSelected => self.dismiss_selected(),
      Command::HideHelp => self.help.hide(&mut self.status),
      Command::None => {}
      Command::OpenSelectedInBrowser => self.open_selected(),
      Command::PageDown => {
        let len = self.visible_len();
        let page = self.page_jump();
        self.list.page_down(len, page);
      }
      Command::PageUp => {
        let len = self.visible_len();
        let page = self.page_jump();
        self.list.page_up(len, page);
      }
      Command::Quit => should_exit = true,
      Command::SelectFirst => {
        let len = self.visible_len();
        self.list.select(0, len);
      }
      Command::SelectLast => {
        let len = self.visible_len();
        self.list.select(len.saturating_sub(1), len);
      }
      Command::SelectNext => {
        let len = self.visible_len();
        self.list.select_next(len);
      }
      Command::SelectPrevious => {
        let len = self.visible_len();
        self.list.select_previous(len);
      }
      Command::ShowHelp => self.help.show(&mut self.status),
      Command::SubmitSearch => self.submit_search()?,
    }

    Ok(CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    })
  }

  pub(crate) fn flash(&mut self, message: String) {
    self.status.flash(message);
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::SearchResults { request_id, result } => {
        let Some(pending) = self.pending_search.as_ref() else {
          return;
        };

        if pending.request_id != request_id {
          return;
        }

        let Some(pending) = self.pending_search.take() else {
          return;
        };

        match result {
          Ok(stories) => {
            let result_count = stories.len();

            self.stories = std::mem::take(&mut self.stories)
              .reduce(StoriesAction::FetchSuccess(stories));

            self.list.reset();
            self.clamp_list();

            if !self.help.is_visible() {
              let truncated = truncate(&pending.query, 40);

              self.status.set(match result_count {
                0 => format!("No results for \"{truncated}\""),
                1 => format!("Found 1 result for \"{truncated}\""),
                _ => {
                  format!("Found {result_count} results for \"{truncated}\"")
                }
              });
            }
          }
          Err(error) => {
            self.stories = std::mem::take(&mut self.stories)
              .reduce(StoriesAction::FetchFailure);

            if !self.help.is_visible() {
              self.status.set(LIST_STATUS.into());
              self.flash(format!("Could not search: {error}"));
            }
          }
        }
      }
    }
  }

  pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Command> {
    let modifiers = key.modifiers;

    Ok(match key.code {
      KeyCode::Backspace => {
        self.delete_from_term()?;
        self.clamp_list();

        Command::None
      }
      KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
        Command::Quit
      }
      KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
        Command::DismissSelected
      }
      KeyCode::Char('o') if modifiers.contains(KeyModifiers::CONTROL) => {
        Command::OpenSelectedInBrowser
      }
      KeyCode::Char(ch) => {
        if modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
          || modifiers.contains(KeyModifiers::SUPER)
        {
          return Ok(Command::None);
        }

        self.append_to_term(ch)?;
        self.clamp_list();

        Command::None
      }
      KeyCode::Delete => Command::DismissSelected,
      KeyCode::Down => Command::SelectNext,
      KeyCode::End => Command::SelectLast,
      KeyCode::Enter => Command::SubmitSearch,
      KeyCode::Esc => Command::Quit,
      KeyCode::F(1) => Command::ShowHelp,
      KeyCode::Home => Command::SelectFirst,
      KeyCode::PageDown => Command::PageDown,
      KeyCode::PageUp => Command::PageUp,
      KeyCode::Up => Command::SelectPrevious,
      _ => Command::None,
    })
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  pub(crate) fn list_offset(&self) -> usize {
    self.list.offset()
  }

  pub(crate) fn new(search_term: SearchTerm) -> Self {
    Self {
      help: HelpView::new(),
      list: ListView::default(),
      list_height: 0,
      next_request_id: 0,
      pending_effects: Vec::new(),
      pending_search: None,
      search_term,
      status: StatusLine::new(LIST_STATUS.into()),
      stories: StoriesState::default(),
    }
  }

  fn open_selected(&mut self) {
    let Some(url) = self.selected_story().map(Story::resolved_url) else {
      return;
    };

    self.pending_effects.push(Effect::OpenUrl { url });
  }

  fn page_jump(&self) -> usize {
    self.list_height.saturating_sub(1).max(1)
  }

  pub(crate) fn search_term(&self) -> &str {
    self.search_term.get()
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    self.list.selected(self.visible_len())
  }

  fn selected_story(&self) -> Option<&Story> {
    let visible = self.visible_stories();

    self
      .list
      .selected(visible.len())
      .and_then(|index| visible.get(index).copied())
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_list_offset(&mut self, offset: usize) {
    self.list.set_offset(offset);
  }

  pub(crate) fn status(&self) -> &str {
    self.status.current()
  }

  pub(crate) fn stories(&self) -> &StoriesState {
    &self.stories
  }

  fn submit_search(&mut self) -> Result {
    let query = self.search_term.get().trim().to_string();

    if query.is_empty() {
      return Ok(());
    }

    self.stories =
      std::mem::take(&mut self.stories).reduce(StoriesAction::FetchInit);

    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    self.pending_search = Some(PendingSearch {
      query: query.clone(),
      request_id,
    });

    if !self.help.is_visible() {
      self
        .status
        .set(format!("Searching for \"{}\"...", truncate(&query, 40)));
    }

    self
      .pending_effects
      .push(Effect::FetchStories { query, request_id });

    Ok(())
  }

  pub(crate) fn tick_status(&mut self) {
    self.status.tick();
  }

  fn visible_len(&self) -> usize {
    self.visible_stories().len()
  }

  pub(crate) fn visible_stories(&self) -> Vec<&Story> {
    filter_stories(&self.stories.stories, self.search_term.get())
  }
}

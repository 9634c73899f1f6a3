use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.state.set_list_height(layout[3].height as usize);

    let title = Paragraph::new(Line::from(Span::styled(
      TITLE,
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    )));

    frame.render_widget(title, layout[0]);

    let input = Paragraph::new(Line::from(vec![
      Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
      Span::styled(
        self.state.search_term().to_string(),
        Style::default().fg(Color::White),
      ),
      Span::styled("█", Style::default().fg(Color::DarkGray)),
    ]));

    frame.render_widget(input, layout[1]);

    let (is_error, is_loading) = {
      let stories = self.state.stories();

      (stories.is_error, stories.is_loading)
    };

    if is_error {
      let notice = Paragraph::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(ERROR_NOTICE, Style::default().fg(Color::Red)),
      ]));

      frame.render_widget(notice, layout[2]);
    }

    let (list_items, selected_index, offset) = if is_loading {
      let items = vec![ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw(LOADING_NOTICE),
      ]))];

      (items, None, 0)
    } else {
      let visible = self.state.visible_stories();

      if visible.is_empty() {
        let text = if self.state.search_term().trim().is_empty() {
          "Type a query and press enter to search."
        } else {
          "No stories to show."
        };

        let items = vec![ListItem::new(Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::raw(text),
        ]))];

        (items, None, 0)
      } else {
        let items = visible
          .iter()
          .map(|story| {
            let lines = vec![
              Line::from(vec![
                Span::raw(BASE_INDENT),
                Span::styled(
                  story.title.clone(),
                  Style::default().fg(Color::White),
                ),
              ]),
              Line::from(vec![
                Span::raw(BASE_INDENT),
                Span::styled(
                  story.detail(),
                  Style::default().fg(Color::DarkGray),
                ),
              ]),
              Line::from(Span::raw(BASE_INDENT)),
            ];

            ListItem::new(lines)
          })
          .collect();

        (items, self.state.selected_index(), self.state.list_offset())
      }
    };

    let mut list_state = ListState::default()
      .with_selected(selected_index)
      .with_offset(offset);

    let list = List::new(list_items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, layout[3], &mut list_state);

    if selected_index.is_some() {
      self.state.set_list_offset(list_state.offset());
    }

    let status = Paragraph::new(self.state.status().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[4]);

    self.state.help().draw(frame);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::FetchStories { query, request_id } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        let handle = self.handle.clone();

        handle.spawn(async move {
          let _ = sender.send(Event::SearchResults {
            request_id,
            result: client.search_stories(&query).await,
          });
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          self.state.flash(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          self
            .state
            .flash(format!("Could not open link: {error}"));
        }
      },
    }
  }

  pub(crate) fn new(client: Client, search_term: SearchTerm) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let state = State::new(search_term);

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state,
    }
  }

  fn process_pending_events(&mut self) {
    self.state.tick_status();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    self.submit_initial()?;

    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        self.process_pending_events();
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        self.process_pending_events();
        continue;
      };

      if key.kind != KeyEventKind::Press {
        self.process_pending_events();
        continue;
      }

      let command = if self.state.help_is_visible() {
        Ok(HelpView::handle_key(key))
      } else {
        self.state.handle_key(key)
      };

      match command.and_then(|command| self.state.dispatch_command(command)) {
        Ok(dispatch) => {
          for effect in dispatch.effects {
            self.execute_effect(effect);
          }

          if dispatch.should_exit {
            break;
          }

          self.process_pending_events();
        }
        Err(error) => {
          self.state.clear_pending_effects();
          self.state.flash(format!("error: {error}"));
          self.process_pending_events();
        }
      }
    }

    Ok(())
  }

  // The startup fetch takes the same dispatch path as a submit.
  fn submit_initial(&mut self) -> Result {
    let dispatch = self.state.dispatch_command(Command::SubmitSearch)?;

    for effect in dispatch.effects {
      self.execute_effect(effect);
    }

    Ok(())
  }
}

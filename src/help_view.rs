use super::*;

pub(crate) struct HelpView {
  message_backup: Option<String>,
  visible: bool,
}

impl HelpView {
  pub(crate) fn draw(&self, frame: &mut Frame) {
    if !self.visible {
      return;
    }

    let area = Self::help_area(frame.area());

    frame.render_widget(Clear, area);

    let help = Paragraph::new(HELP_TEXT)
      .block(Block::default().title(HELP_TITLE).borders(Borders::ALL))
      .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
        Command::Quit
      }
      KeyCode::Char('q' | 'Q') => Command::Quit,
      KeyCode::Esc | KeyCode::F(1) => Command::HideHelp,
      _ => Command::None,
    }
  }

  fn help_area(area: Rect) -> Rect {
    fn saturating_usize_to_u16(value: usize) -> u16 {
      u16::try_from(value).unwrap_or(u16::MAX)
    }

    let line_count = HELP_TEXT.lines().count();

    let max_line_width = HELP_TEXT
      .lines()
      .map(|line| line.chars().count())
      .max()
      .unwrap_or(0);

    let desired_width =
      saturating_usize_to_u16(max_line_width.saturating_add(2)).max(1);

    let desired_height =
      saturating_usize_to_u16(line_count.saturating_add(2)).max(1);

    let width = desired_width
      .min(area.width.saturating_sub(2).max(1))
      .min(area.width);

    let height = desired_height
      .min(area.height.saturating_sub(2).max(1))
      .min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width, height)
  }

  pub(crate) fn hide(&mut self, status: &mut StatusLine) {
    if !self.visible {
      return;
    }

    status.set(
      self
        .message_backup
        .take()
        .unwrap_or_else(|| LIST_STATUS.into()),
    );

    self.visible = false;
  }

  pub(crate) fn is_visible(&self) -> bool {
    self.visible
  }

  pub(crate) fn new() -> Self {
    Self {
      message_backup: None,
      visible: false,
    }
  }

  pub(crate) fn show(&mut self, status: &mut StatusLine) {
    if self.visible {
      return;
    }

    self.message_backup = Some(status.message().to_string());

    status.set(HELP_STATUS.into());

    self.visible = true;
  }
}

use super::*;

struct Flash {
  expires_at: Instant,
  text: String,
}

pub(crate) struct StatusLine {
  flash: Option<Flash>,
  message: String,
}

impl StatusLine {
  pub(crate) fn current(&self) -> &str {
    match &self.flash {
      Some(flash) => &flash.text,
      None => &self.message,
    }
  }

  pub(crate) fn flash(&mut self, text: String) {
    self.flash = Some(Flash {
      expires_at: Instant::now() + Duration::from_secs(3),
      text,
    });
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn new(message: String) -> Self {
    Self {
      flash: None,
      message,
    }
  }

  pub(crate) fn set(&mut self, message: String) {
    self.flash = None;
    self.message = message;
  }

  pub(crate) fn tick(&mut self) {
    let expired = self
      .flash
      .as_ref()
      .is_some_and(|flash| Instant::now() >= flash.expires_at);

    if expired {
      self.flash = None;
    }
  }
}

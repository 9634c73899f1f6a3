#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  DismissSelected,
  HideHelp,
  None,
  OpenSelectedInBrowser,
  PageDown,
  PageUp,
  Quit,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
  SubmitSearch,
}

use std::fmt;

use crate::presentation::view_models::{CreateView, NoticeViewModel, ViewMode};

impl CreateView for NoticeViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(NoticeView { data: self, mode })
    }
}

struct NoticeView<'a> {
    data: &'a NoticeViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for NoticeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Other modes already printed the message as the badge
        if self.mode == ViewMode::Minimal {
            writeln!(f, "{}", self.data.message)?;
        }
        Ok(())
    }
}

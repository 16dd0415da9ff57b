use kodata_runtime::LoadError;

use crate::i18n::Messages;
use crate::presentation::view_models::{CommandResultViewModel, NoticeViewModel, StatusBadge};

/// Locale key of the message shown when `page` fails to load
pub fn fallback_key(page: &str) -> &'static str {
    match page {
        "catalog" => "catalog.fallback",
        "changelog" => "changelog.fallback",
        "trends" => "trends.fallback",
        _ => "stats.fallback",
    }
}

pub fn notice(page: &'static str, messages: &Messages) -> NoticeViewModel {
    NoticeViewModel {
        page,
        message: messages.get(fallback_key(page)).to_string(),
    }
}

/// The page-specific fallback and nothing else. The cause goes to the log only.
pub fn present_failure(
    page: &'static str,
    error: &LoadError,
    messages: &Messages,
) -> CommandResultViewModel<NoticeViewModel> {
    tracing::debug!(page, resource = error.resource(), "rendering fallback");

    let content = notice(page, messages);
    let badge = StatusBadge::error(content.message.clone());
    CommandResultViewModel::new(content).with_badge(badge)
}

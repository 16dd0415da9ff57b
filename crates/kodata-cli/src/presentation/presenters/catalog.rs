use kodata_runtime::CatalogPage;
use kodata_types::Dataset;
use std::path::Path;

use super::stats::present_statistics_panel;
use crate::i18n::Messages;
use crate::presentation::formatters::truncate_with_ellipsis;
use crate::presentation::view_models::{
    CatalogQuery, CatalogViewModel, CommandResultViewModel, DatasetCard, ExportViewModel,
    FilterOptionsViewModel, Guidance, PaginationControl, StatusBadge,
};

const CARD_BODY_CHARS: usize = 150;
const CARD_LANGUAGES: usize = 3;
const CARD_TASKS: usize = 2;

pub fn present_dataset_card(dataset: &Dataset, messages: &Messages) -> DatasetCard {
    let (body, has_description) = match dataset.description() {
        Some(text) => (truncate_with_ellipsis(text, CARD_BODY_CHARS), true),
        None => (messages.get("dataset.no_description").to_string(), false),
    };

    let (languages, more_languages) = split_at_most(&dataset.languages, CARD_LANGUAGES);
    let (tasks, more_tasks) = split_at_most(&dataset.tasks, CARD_TASKS);

    DatasetCard {
        id: dataset.id.clone(),
        author: dataset
            .author()
            .unwrap_or(messages.get("dataset.unknown_author"))
            .to_string(),
        body,
        has_description,
        languages,
        tasks,
        more_languages,
        more_tasks,
        downloads: dataset.downloads,
        likes: dataset.likes,
        url: dataset.url.clone(),
        last_modified: dataset.last_modified.clone(),
    }
}

fn split_at_most(values: &[String], n: usize) -> (Vec<String>, Vec<String>) {
    let cut = n.min(values.len());
    (values[..cut].to_vec(), values[cut..].to_vec())
}

pub fn present_pagination(page: usize, total_pages: usize) -> PaginationControl {
    PaginationControl {
        page,
        total_pages,
        label: format!("{} / {}", page, total_pages),
        prev_disabled: page == 1,
        next_disabled: page >= total_pages || total_pages == 0,
    }
}

pub fn present_catalog(
    catalog: &CatalogPage,
    messages: Messages,
) -> CommandResultViewModel<CatalogViewModel> {
    let view = catalog.view();
    let criteria = catalog.criteria();

    let view_model = CatalogViewModel {
        last_updated: catalog.snapshot().last_updated.clone(),
        statistics: catalog.statistics().map(present_statistics_panel),
        query: CatalogQuery {
            search: criteria.search.clone(),
            author: criteria.author.clone(),
            task: criteria.task.clone(),
            sort: catalog.sort().map(|key| key.to_string()),
        },
        match_count: view.match_count,
        cards: view
            .items
            .iter()
            .map(|dataset| present_dataset_card(dataset, &messages))
            .collect(),
        pagination: present_pagination(view.page, view.total_pages),
        messages,
    };

    let match_count = view_model.match_count;
    let mut result = CommandResultViewModel::new(view_model);

    if match_count == 0 {
        result = result
            .with_badge(StatusBadge::info(messages.get("catalog.empty")))
            .with_suggestion(Guidance::new("Clear the filters").with_command("kodata catalog"));
    } else if view.items.is_empty() {
        result = result.with_badge(StatusBadge::warning(messages.format(
            "catalog.page",
            &[
                ("page", &view.page.to_string()),
                ("total", &view.total_pages.to_string()),
            ],
        )));
    } else {
        result = result.with_badge(StatusBadge::success(
            messages.format("catalog.matches", &[("count", &match_count.to_string())]),
        ));
    }

    result
}

pub fn present_filter_options(
    catalog: &CatalogPage,
    messages: Messages,
) -> CommandResultViewModel<FilterOptionsViewModel> {
    let options = catalog.options();
    let label = messages.format(
        "filters.summary",
        &[
            ("authors", &options.authors.len().to_string()),
            ("tasks", &options.tasks.len().to_string()),
        ],
    );

    CommandResultViewModel::new(FilterOptionsViewModel {
        authors: options.authors.clone(),
        tasks: options.tasks.clone(),
        messages,
    })
    .with_badge(StatusBadge::info(label))
}

pub fn present_export(
    path: &Path,
    rows: usize,
    messages: &Messages,
) -> CommandResultViewModel<ExportViewModel> {
    let path = path.display().to_string();
    let label = messages.format(
        "catalog.exported",
        &[("count", &rows.to_string()), ("path", &path)],
    );

    CommandResultViewModel::new(ExportViewModel { path, rows }).with_badge(StatusBadge::success(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    fn en() -> Messages {
        Messages::new(Locale::En)
    }

    #[test]
    fn test_long_description_is_truncated_to_150() {
        let mut dataset = Dataset::new("org/long");
        dataset.description = Some("x".repeat(200));

        let card = present_dataset_card(&dataset, &en());
        assert_eq!(card.body, format!("{}...", "x".repeat(150)));
        assert!(card.has_description);
    }

    #[test]
    fn test_short_description_is_unchanged() {
        let mut dataset = Dataset::new("org/short");
        dataset.description = Some("y".repeat(100));

        let card = present_dataset_card(&dataset, &en());
        assert_eq!(card.body, "y".repeat(100));
    }

    #[test]
    fn test_missing_fields_use_placeholders() {
        let mut dataset = Dataset::new("org/bare");
        dataset.author = Some(String::new());

        let card = present_dataset_card(&dataset, &en());
        assert_eq!(card.author, "Unknown");
        assert_eq!(card.body, "No description available.");
        assert!(!card.has_description);
        assert_eq!(card.downloads, 0);
        assert_eq!(card.likes, 0);
        assert_eq!(card.url, "https://huggingface.co/datasets/org/bare");
    }

    #[test]
    fn test_tags_are_truncated_not_filtered() {
        let mut dataset = Dataset::new("org/multi");
        dataset.languages = ["ko", "en", "ja", "zh"].map(String::from).to_vec();
        dataset.tasks = ["qa", "translation", "summarization"].map(String::from).to_vec();

        let card = present_dataset_card(&dataset, &en());
        assert_eq!(card.languages, vec!["ko", "en", "ja"]);
        assert_eq!(card.more_languages, vec!["zh"]);
        assert_eq!(card.tasks, vec!["qa", "translation"]);
        assert_eq!(card.more_tasks, vec!["summarization"]);
        assert_eq!(dataset.languages.len(), 4);
    }

    #[test]
    fn test_pagination_control_disable_rules() {
        let first = present_pagination(1, 3);
        assert_eq!(first.label, "1 / 3");
        assert!(first.prev_disabled);
        assert!(!first.next_disabled);

        let middle = present_pagination(2, 3);
        assert!(!middle.prev_disabled);
        assert!(!middle.next_disabled);

        let last = present_pagination(3, 3);
        assert!(last.next_disabled);

        let only = present_pagination(1, 1);
        assert!(only.prev_disabled && only.next_disabled);

        let none = present_pagination(1, 0);
        assert!(none.next_disabled);
    }
}

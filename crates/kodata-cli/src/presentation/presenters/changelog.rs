use kodata_types::{Changelog, CounterChange, Dataset, UpdatedDataset};

use super::display_date;
use crate::i18n::Messages;
use crate::presentation::formatters::{format_signed, format_thousands, truncate_with_ellipsis};
use crate::presentation::view_models::{
    Badge, BadgeKind, BadgeTone, ChangeKind, ChangelogItem, ChangelogSummary, ChangelogViewModel,
    CommandResultViewModel, StatusBadge,
};

const DESCRIPTION_CHARS: usize = 200;

pub fn present_changelog(
    changelog: &Changelog,
    messages: Messages,
) -> CommandResultViewModel<ChangelogViewModel> {
    let summary = &changelog.summary;

    let view_model = ChangelogViewModel {
        previous_date: display_date(&changelog.previous_date),
        current_date: display_date(&changelog.current_date),
        previous_count: changelog.previous_count,
        current_count: changelog.current_count,
        summary: ChangelogSummary {
            new_count: summary.new_count,
            removed_count: summary.removed_count,
            updated_count: summary.updated_count,
            unchanged_count: summary.unchanged_count,
            net_change: summary.net_change(),
        },
        new_datasets: changelog
            .changes
            .new_datasets
            .iter()
            .map(|d| present_new(d, &messages))
            .collect(),
        updated_datasets: changelog
            .changes
            .updated_datasets
            .iter()
            .map(|d| present_updated(d, &messages))
            .collect(),
        removed_datasets: changelog
            .changes
            .removed_datasets
            .iter()
            .map(|d| present_removed(d, &messages))
            .collect(),
        messages,
    };

    let label = messages.format(
        "changelog.loaded",
        &[
            ("new", &summary.new_count.to_string()),
            ("removed", &summary.removed_count.to_string()),
            ("updated", &summary.updated_count.to_string()),
        ],
    );
    CommandResultViewModel::new(view_model).with_badge(StatusBadge::info(label))
}

fn author_or_unknown(author: Option<&str>, messages: &Messages) -> String {
    author
        .unwrap_or(messages.get("dataset.unknown_author"))
        .to_string()
}

fn short_description(dataset: &Dataset) -> Option<String> {
    dataset
        .description()
        .map(|text| truncate_with_ellipsis(text, DESCRIPTION_CHARS))
}

fn present_new(dataset: &Dataset, messages: &Messages) -> ChangelogItem {
    let mut badges = Vec::new();

    if dataset.downloads > 0 {
        badges.push(Badge {
            kind: BadgeKind::Downloads,
            tone: BadgeTone::Positive,
            label: messages.format(
                "badge.downloads",
                &[("count", &format_thousands(dataset.downloads))],
            ),
        });
    }
    if dataset.likes > 0 {
        badges.push(Badge {
            kind: BadgeKind::Likes,
            tone: BadgeTone::Positive,
            label: messages.format("badge.likes", &[("count", &format_thousands(dataset.likes))]),
        });
    }

    ChangelogItem {
        kind: ChangeKind::New,
        id: dataset.id.clone(),
        url: dataset.url.clone(),
        author: author_or_unknown(dataset.author(), messages),
        badges,
        description: short_description(dataset),
    }
}

fn present_removed(dataset: &Dataset, messages: &Messages) -> ChangelogItem {
    let badges = vec![
        Badge {
            kind: BadgeKind::Downloads,
            tone: BadgeTone::Neutral,
            label: messages.format(
                "badge.had_downloads",
                &[("count", &format_thousands(dataset.downloads))],
            ),
        },
        Badge {
            kind: BadgeKind::Likes,
            tone: BadgeTone::Neutral,
            label: messages.format(
                "badge.had_likes",
                &[("count", &format_thousands(dataset.likes))],
            ),
        },
    ];

    ChangelogItem {
        kind: ChangeKind::Removed,
        id: dataset.id.clone(),
        url: dataset.url.clone(),
        author: author_or_unknown(dataset.author(), messages),
        badges,
        description: short_description(dataset),
    }
}

fn present_updated(dataset: &UpdatedDataset, messages: &Messages) -> ChangelogItem {
    ChangelogItem {
        kind: ChangeKind::Updated,
        id: dataset.id.clone(),
        url: dataset.url.clone(),
        author: author_or_unknown(dataset.author(), messages),
        badges: present_updated_badges(dataset, messages),
        description: None,
    }
}

/// One badge per counter that moved, plus one when the description changed
pub fn present_updated_badges(dataset: &UpdatedDataset, messages: &Messages) -> Vec<Badge> {
    let changes = &dataset.changes;
    let mut badges = Vec::new();

    if let Some(badge) = counter_badge(
        BadgeKind::Downloads,
        "badge.downloads_change",
        &changes.downloads,
        messages,
    ) {
        badges.push(badge);
    }
    if let Some(badge) = counter_badge(
        BadgeKind::Likes,
        "badge.likes_change",
        &changes.likes,
        messages,
    ) {
        badges.push(badge);
    }
    if changes.description_changed {
        badges.push(Badge {
            kind: BadgeKind::Description,
            tone: BadgeTone::Neutral,
            label: messages.get("badge.description_updated").to_string(),
        });
    }

    badges
}

fn counter_badge(
    kind: BadgeKind,
    key: &str,
    counter: &CounterChange,
    messages: &Messages,
) -> Option<Badge> {
    let tone = match counter.change {
        0 => return None,
        c if c > 0 => BadgeTone::Positive,
        _ => BadgeTone::Negative,
    };

    Some(Badge {
        kind,
        tone,
        label: messages.format(
            key,
            &[
                ("delta", &format_signed(counter.change)),
                ("previous", &format_thousands(counter.previous)),
                ("current", &format_thousands(counter.current)),
            ],
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use kodata_types::FieldChanges;

    fn en() -> Messages {
        Messages::new(Locale::En)
    }

    fn updated(downloads: CounterChange, likes: CounterChange, description_changed: bool) -> UpdatedDataset {
        UpdatedDataset {
            id: "org/updated".to_string(),
            author: None,
            url: "https://huggingface.co/datasets/org/updated".to_string(),
            changes: FieldChanges {
                downloads,
                likes,
                description_changed,
            },
        }
    }

    #[test]
    fn test_only_nonzero_deltas_get_badges() {
        let dataset = updated(CounterChange::new(100, 100), CounterChange::new(10, 5), false);
        let badges = present_updated_badges(&dataset, &en());

        assert_eq!(badges.len(), 1);
        assert_eq!(badges[0].kind, BadgeKind::Likes);
        assert_eq!(badges[0].tone, BadgeTone::Negative);
        assert_eq!(badges[0].label, "Likes: -5 (10 → 5)");
    }

    #[test]
    fn test_description_change_adds_neutral_badge() {
        let dataset = updated(CounterChange::new(1_000, 2_500), CounterChange::default(), true);
        let badges = present_updated_badges(&dataset, &en());

        assert_eq!(badges.len(), 2);
        assert_eq!(badges[0].label, "Downloads: +1,500 (1,000 → 2,500)");
        assert_eq!(badges[0].tone, BadgeTone::Positive);
        assert_eq!(badges[1].kind, BadgeKind::Description);
        assert_eq!(badges[1].tone, BadgeTone::Neutral);
    }

    #[test]
    fn test_unchanged_dataset_has_no_badges() {
        let dataset = updated(CounterChange::new(3, 3), CounterChange::new(1, 1), false);
        assert!(present_updated_badges(&dataset, &en()).is_empty());
    }

    #[test]
    fn test_new_dataset_badges_are_conditional() {
        let mut dataset = Dataset::new("org/new");
        dataset.likes = 4;

        let item = present_new(&dataset, &en());
        assert_eq!(item.badges.len(), 1);
        assert_eq!(item.badges[0].label, "4 likes");
        assert_eq!(item.author, "Unknown");
        assert!(item.description.is_none());
    }

    #[test]
    fn test_removed_dataset_badges_are_unconditional() {
        let mut dataset = Dataset::new("org/gone");
        dataset.description = Some("z".repeat(250));

        let item = present_removed(&dataset, &en());
        let labels: Vec<&str> = item.badges.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Had 0 downloads", "Had 0 likes"]);
        assert_eq!(item.description, Some(format!("{}...", "z".repeat(200))));
    }
}

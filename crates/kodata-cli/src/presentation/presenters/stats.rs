use kodata_engine::rank_counts;
use kodata_types::Statistics;
use std::collections::BTreeMap;

use crate::i18n::Messages;
use crate::presentation::view_models::{
    CommandResultViewModel, RankedEntry, StatisticsPanel, StatisticsViewModel, StatusBadge,
};

pub fn present_statistics_panel(statistics: &Statistics) -> StatisticsPanel {
    StatisticsPanel {
        total_datasets: statistics.total_datasets,
        total_downloads: statistics.total_downloads,
        total_likes: statistics.total_likes,
        multilingual_count: statistics.multilingual_count,
        top_authors: ranked(&statistics.top_authors),
        top_tasks: ranked(&statistics.top_tasks),
    }
}

fn ranked(counts: &BTreeMap<String, u64>) -> Vec<RankedEntry> {
    rank_counts(counts)
        .into_iter()
        .map(|(name, count)| RankedEntry {
            name: name.to_string(),
            count,
        })
        .collect()
}

pub fn present_statistics(
    statistics: &Statistics,
    last_updated: Option<&str>,
    messages: Messages,
) -> CommandResultViewModel<StatisticsViewModel> {
    let view_model = StatisticsViewModel {
        last_updated: last_updated.map(String::from),
        panel: present_statistics_panel(statistics),
        messages,
    };

    let label = messages.format(
        "catalog.matches",
        &[("count", &statistics.total_datasets.to_string())],
    );
    CommandResultViewModel::new(view_model).with_badge(StatusBadge::success(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_lists_are_ranked() {
        let statistics = Statistics {
            total_datasets: 3,
            top_tasks: BTreeMap::from([
                ("translation".to_string(), 1),
                ("text-generation".to_string(), 2),
                ("qa".to_string(), 1),
            ]),
            ..Default::default()
        };

        let panel = present_statistics_panel(&statistics);
        let names: Vec<&str> = panel.top_tasks.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["text-generation", "qa", "translation"]);
        assert!(panel.top_authors.is_empty());
    }
}

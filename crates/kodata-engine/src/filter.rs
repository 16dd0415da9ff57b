use kodata_types::Dataset;
use serde::Serialize;
use std::collections::BTreeSet;

/// Distinct values offered by the author and task selectors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub authors: Vec<String>,
    pub tasks: Vec<String>,
}

/// Union of non-empty authors and all tasks, deduplicated and sorted by code point
pub fn derive_filter_options(collection: &[Dataset]) -> FilterOptions {
    let mut authors = BTreeSet::new();
    let mut tasks = BTreeSet::new();

    for dataset in collection {
        if let Some(author) = dataset.author() {
            authors.insert(author);
        }
        for task in &dataset.tasks {
            tasks.insert(task.as_str());
        }
    }

    FilterOptions {
        authors: authors.into_iter().map(String::from).collect(),
        tasks: tasks.into_iter().map(String::from).collect(),
    }
}

/// Catalog filter state. An unset (or empty) criterion matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = non_empty(term.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = non_empty(author.into());
        self
    }

    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.task = non_empty(task.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.author.is_none() && self.task.is_none()
    }

    /// True when the dataset satisfies every criterion that is set
    pub fn matches(&self, dataset: &Dataset) -> bool {
        self.matches_search(dataset) && self.matches_author(dataset) && self.matches_task(dataset)
    }

    fn matches_search(&self, dataset: &Dataset) -> bool {
        let Some(term) = self.search.as_deref().filter(|t| !t.is_empty()) else {
            return true;
        };
        let needle = term.to_lowercase();

        dataset.id.to_lowercase().contains(&needle)
            || dataset
                .description()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }

    fn matches_author(&self, dataset: &Dataset) -> bool {
        match self.author.as_deref().filter(|a| !a.is_empty()) {
            Some(author) => dataset.author.as_deref() == Some(author),
            None => true,
        }
    }

    fn matches_task(&self, dataset: &Dataset) -> bool {
        match self.task.as_deref().filter(|t| !t.is_empty()) {
            Some(task) => dataset.tasks.iter().any(|t| t == task),
            None => true,
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Records satisfying `criteria`, in collection order
pub fn apply_filters<'a>(collection: &'a [Dataset], criteria: &FilterCriteria) -> Vec<&'a Dataset> {
    collection.iter().filter(|d| criteria.matches(d)).collect()
}

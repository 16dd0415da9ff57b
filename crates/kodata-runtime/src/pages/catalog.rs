use kodata_engine::{
    FilterCriteria, FilterOptions, PAGE_SIZE, SortKey, compare, derive_filter_options, paginate,
    total_pages,
};
use kodata_types::{CatalogSnapshot, Dataset, Statistics, StatisticsDocument};
use serde::Serialize;

use super::Page;
use crate::error::LoadError;
use crate::loader::{RESOURCE_CATALOG, RESOURCE_STATISTICS, load};
use crate::source::SnapshotSource;

/// Catalog page state: the canonical snapshot plus the current query.
///
/// The filtered view is kept as indices into `snapshot.datasets`, so it can only
/// ever be a reordered subset of the canonical collection.
#[derive(Debug, Clone)]
pub struct CatalogPage {
    snapshot: CatalogSnapshot,
    statistics: Option<Statistics>,
    options: FilterOptions,
    criteria: FilterCriteria,
    sort: Option<SortKey>,
    page: usize,
    matches: Vec<usize>,
}

/// One rendered window of the filtered view
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView<'a> {
    pub items: Vec<&'a Dataset>,
    pub page: usize,
    pub total_pages: usize,
    pub match_count: usize,
}

impl CatalogPage {
    pub fn new(snapshot: CatalogSnapshot, statistics: Option<Statistics>) -> Self {
        let options = derive_filter_options(&snapshot.datasets);
        let mut page = Self {
            snapshot,
            statistics,
            options,
            criteria: FilterCriteria::default(),
            sort: None,
            page: 1,
            matches: Vec::new(),
        };
        page.recompute();
        page
    }

    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }

    pub fn statistics(&self) -> Option<&Statistics> {
        self.statistics.as_ref()
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> Option<SortKey> {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.matches.len(), PAGE_SIZE)
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.criteria = self.criteria.clone().with_search(term);
        self.recompute();
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.criteria = self.criteria.clone().with_author(author);
        self.recompute();
    }

    pub fn set_task(&mut self, task: impl Into<String>) {
        self.criteria = self.criteria.clone().with_task(task);
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.sort = sort;
        self.recompute();
    }

    /// Replace the whole query at once
    pub fn set_query(&mut self, criteria: FilterCriteria, sort: Option<SortKey>) {
        self.criteria = criteria;
        self.sort = sort;
        self.recompute();
    }

    /// Advance one page; no-op on the last page
    pub fn next_page(&mut self) {
        if self.page < self.total_pages() {
            self.page += 1;
        }
    }

    /// Go back one page; no-op on the first page
    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Jump to `page` (1-based). Pages past the end render empty.
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn view(&self) -> CatalogView<'_> {
        let window = paginate(&self.matches, self.page, PAGE_SIZE);

        CatalogView {
            items: window
                .items
                .iter()
                .map(|&i| &self.snapshot.datasets[i])
                .collect(),
            page: window.page,
            total_pages: window.total_pages,
            match_count: self.matches.len(),
        }
    }

    /// Every match across all pages, in display order
    pub fn matched(&self) -> impl Iterator<Item = &Dataset> {
        self.matches.iter().map(|&i| &self.snapshot.datasets[i])
    }

    // Any query change starts again from page 1
    fn recompute(&mut self) {
        let datasets = &self.snapshot.datasets;

        let mut matches: Vec<usize> = (0..datasets.len())
            .filter(|&i| self.criteria.matches(&datasets[i]))
            .collect();

        if let Some(key) = self.sort {
            matches.sort_by(|&a, &b| compare(&datasets[a], &datasets[b], key));
        }

        self.matches = matches;
        self.page = 1;
    }
}

impl Page for CatalogPage {
    const NAME: &'static str = "catalog";

    fn load(source: &dyn SnapshotSource) -> Result<Self, LoadError> {
        let snapshot: CatalogSnapshot = load(source, RESOURCE_CATALOG)?;

        // The statistics header is optional; its absence never fails the catalog
        let statistics = load::<StatisticsDocument>(source, RESOURCE_STATISTICS)
            .ok()
            .map(|doc| doc.statistics);

        tracing::info!(
            datasets = snapshot.datasets.len(),
            last_updated = %snapshot.last_updated,
            "catalog loaded"
        );

        Ok(Self::new(snapshot, statistics))
    }
}

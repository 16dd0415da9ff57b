use anyhow::{Context, Result};
use kodata_engine::{FilterCriteria, SortKey};
use kodata_runtime::CatalogPage;
use kodata_types::Dataset;
use std::io;
use std::path::PathBuf;

use super::HandlerContext;
use crate::presentation::presenters;

const CSV_HEADER: [&str; 8] = [
    "id",
    "author",
    "downloads",
    "likes",
    "languages",
    "tasks",
    "last_modified",
    "url",
];

#[derive(Debug, Clone, Default)]
pub struct CatalogArgs {
    pub search: Option<String>,
    pub author: Option<String>,
    pub task: Option<String>,
    pub sort: Option<SortKey>,
    pub page: usize,
    pub export: Option<PathBuf>,
}

impl CatalogArgs {
    fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();
        if let Some(search) = &self.search {
            criteria = criteria.with_search(search.clone());
        }
        if let Some(author) = &self.author {
            criteria = criteria.with_author(author.clone());
        }
        if let Some(task) = &self.task {
            criteria = criteria.with_task(task.clone());
        }
        criteria
    }
}

pub fn handle(ctx: &HandlerContext, args: CatalogArgs) -> Result<()> {
    let Some(mut catalog) = ctx.open_page::<CatalogPage>()? else {
        return Ok(());
    };

    catalog.set_query(args.criteria(), args.sort);

    if let Some(path) = &args.export {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let rows = write_csv(file, catalog.matched())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(rows, path = %path.display(), "catalog exported");

        return ctx.render(presenters::present_export(path, rows, &ctx.messages));
    }

    catalog.go_to_page(args.page);
    ctx.render(presenters::present_catalog(&catalog, ctx.messages))
}

/// One row per dataset; list columns are `;`-joined. Returns the row count.
pub(crate) fn write_csv<'a, W: io::Write>(
    writer: W,
    datasets: impl Iterator<Item = &'a Dataset>,
) -> Result<usize> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADER)?;

    let mut rows = 0;
    for dataset in datasets {
        let downloads = dataset.downloads.to_string();
        let likes = dataset.likes.to_string();
        let languages = dataset.languages.join(";");
        let tasks = dataset.tasks.join(";");

        csv.write_record([
            dataset.id.as_str(),
            dataset.author().unwrap_or(""),
            downloads.as_str(),
            likes.as_str(),
            languages.as_str(),
            tasks.as_str(),
            dataset.last_modified.as_deref().unwrap_or(""),
            dataset.url.as_str(),
        ])?;
        rows += 1;
    }

    csv.flush()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_rows_and_joined_lists() {
        let mut first = Dataset::new("org/first");
        first.author = Some("org".to_string());
        first.downloads = 1200;
        first.languages = vec!["ko".to_string(), "en".to_string()];
        first.tasks = vec!["qa".to_string()];

        let second = Dataset::new("solo/second");

        let mut out = Vec::new();
        let rows = write_csv(&mut out, [&first, &second].into_iter()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(rows, 2);
        assert_eq!(lines[0], "id,author,downloads,likes,languages,tasks,last_modified,url");
        assert_eq!(
            lines[1],
            "org/first,org,1200,0,ko;en,qa,,https://huggingface.co/datasets/org/first"
        );
        assert_eq!(lines[2], "solo/second,,0,0,,,,https://huggingface.co/datasets/solo/second");
    }

    #[test]
    fn test_criteria_from_args() {
        let args = CatalogArgs {
            search: Some("news".to_string()),
            task: Some(String::new()),
            page: 1,
            ..CatalogArgs::default()
        };
        let criteria = args.criteria();

        assert_eq!(criteria.search.as_deref(), Some("news"));
        assert!(criteria.author.is_none());
        assert!(criteria.task.is_none());
    }
}

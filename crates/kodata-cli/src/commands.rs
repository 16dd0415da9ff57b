use anyhow::Result;

use super::args::{Cli, Commands};
use super::handlers::{self, HandlerContext, catalog::CatalogArgs};
use crate::config::Settings;

pub fn run(cli: Cli) -> Result<()> {
    let settings = Settings::resolve(&cli)?;
    tracing::debug!(site = %settings.site, locale = settings.locale.as_str(), "settings resolved");

    let Some(command) = cli.command else {
        show_guidance(&settings);
        return Ok(());
    };

    let ctx = HandlerContext::new(&settings)?;

    match command {
        Commands::Catalog {
            search,
            author,
            task,
            sort,
            page,
            export,
        } => handlers::catalog::handle(
            &ctx,
            CatalogArgs {
                search,
                author,
                task,
                sort: sort.map(Into::into),
                page,
                export,
            },
        ),
        Commands::Filters => handlers::filters::handle(&ctx),
        Commands::Stats => handlers::stats::handle(&ctx),
        Commands::Changelog => handlers::changelog::handle(&ctx),
        Commands::Trends => handlers::trends::handle(&ctx),
        Commands::Browse => handlers::browse::handle(&ctx),
    }
}

fn show_guidance(settings: &Settings) {
    println!("kodata - Korean Hugging Face datasets catalog\n");
    println!("Reading snapshots from: {}\n", settings.site);

    println!("Quick commands:");
    println!("  kodata catalog                    # First page of datasets");
    println!("  kodata catalog --search news      # Search ids and descriptions");
    println!("  kodata catalog --sort downloads   # Most downloaded first");
    println!("  kodata changelog                  # What changed this week");
    println!("  kodata trends                     # Weekly growth");
    println!("  kodata browse                     # Interactive dashboard\n");

    println!("For more commands:");
    println!("  kodata --help");
}

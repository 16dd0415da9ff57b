use anyhow::Result;
use kodata_runtime::CatalogPage;

use super::HandlerContext;
use crate::presentation::presenters;

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    let Some(catalog) = ctx.open_page::<CatalogPage>()? else {
        return Ok(());
    };

    ctx.render(presenters::present_filter_options(&catalog, ctx.messages))
}

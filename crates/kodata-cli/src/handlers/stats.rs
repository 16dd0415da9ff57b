use anyhow::Result;
use kodata_runtime::StatisticsPage;

use super::HandlerContext;
use crate::presentation::presenters;

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    let Some(page) = ctx.open_page::<StatisticsPage>()? else {
        return Ok(());
    };

    ctx.render(presenters::present_statistics(
        page.statistics(),
        page.last_updated(),
        ctx.messages,
    ))
}

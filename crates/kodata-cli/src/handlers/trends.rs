use anyhow::Result;
use kodata_runtime::TrendsPage;

use super::HandlerContext;
use crate::presentation::presenters;

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    let Some(page) = ctx.open_page::<TrendsPage>()? else {
        return Ok(());
    };

    ctx.render(presenters::present_trends(
        page.trend(),
        page.generated_at(),
        ctx.messages,
    ))
}

use anyhow::Result;
use kodata_runtime::ChangelogPage;

use super::HandlerContext;
use crate::presentation::presenters;

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    let Some(page) = ctx.open_page::<ChangelogPage>()? else {
        return Ok(());
    };

    ctx.render(presenters::present_changelog(page.changelog(), ctx.messages))
}

use ninja_site::{PageMeta, robots_txt, sitemap_xml};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MetaArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ncms sitemap`.
pub fn sitemap(ctx: &AppContext) -> anyhow::Result<()> {
    print!("{}", sitemap_xml(&ctx.config.site, chrono::Utc::now()));
    Ok(())
}

/// Handle `ncms robots`.
pub fn robots(ctx: &AppContext) -> anyhow::Result<()> {
    print!("{}", robots_txt(&ctx.config.site));
    Ok(())
}

/// Handle `ncms meta`.
pub fn meta(args: &MetaArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let meta = PageMeta::for_page(&ctx.config.site, args.title.as_deref(), args.description.as_deref());
    output(&meta, flags.format)
}

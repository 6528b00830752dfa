use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Entities => commands::entities::handle(ctx, flags),
        Commands::Schema(args) => commands::schema::handle(&args, ctx, flags),
        Commands::List(args) => commands::list::handle(&args, ctx, flags).await,
        Commands::Get(args) => commands::get::handle(&args, ctx, flags).await,
        Commands::Create(args) => commands::create::handle(&args, ctx, flags).await,
        Commands::Update(args) => commands::update::handle(&args, ctx, flags).await,
        Commands::Delete(args) => {
            commands::delete::handle(&args, ctx, flags, &commands::shared::prompt::confirm_on_terminal).await
        }
        Commands::Serve(args) => commands::serve::handle(&args, ctx).await,
        Commands::Sitemap => commands::seo::sitemap(ctx),
        Commands::Robots => commands::seo::robots(ctx),
        Commands::Meta(args) => commands::seo::meta(&args, ctx, flags),
        Commands::Launch(_) => unreachable!("launch is pre-dispatched in main"),
    }
}

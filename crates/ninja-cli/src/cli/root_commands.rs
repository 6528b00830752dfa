use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List the managed entity types.
    Entities,
    /// Show one entity's field schema.
    Schema(SchemaArgs),
    /// List the items of an entity.
    List(ListArgs),
    /// Show one item.
    Get(GetArgs),
    /// Create an item from `--set field=value` pairs.
    Create(CreateArgs),
    /// Update an item from `--set field=value` pairs.
    Update(UpdateArgs),
    /// Delete an item after confirmation.
    Delete(DeleteArgs),
    /// Run the admin web server.
    Serve(ServeArgs),
    /// Start `ncms serve` as a child process with PORT set.
    Launch(ServeArgs),
    /// Print sitemap.xml for the public site.
    Sitemap,
    /// Print robots.txt for the public site.
    Robots,
    /// Print the head metadata of a public page.
    Meta(MetaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Entity key or resource slug, e.g. `faq` or `faqs`.
    #[arg(required_unless_present = "meta")]
    pub entity: Option<String>,
    /// Emit a JSON Schema document instead of the field list.
    #[arg(long)]
    pub json_schema: bool,
    /// Emit the JSON Schemas of the schema model itself.
    #[arg(long, conflicts_with_all = ["entity", "json_schema"])]
    pub meta: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    pub entity: String,
}

#[derive(Clone, Debug, Args)]
pub struct GetArgs {
    pub entity: String,
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    pub entity: String,
    /// Field assignment, repeatable: `--set question="Socks?"`.
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub assignments: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct UpdateArgs {
    pub entity: String,
    pub id: String,
    /// Field assignment, repeatable. Only the given fields are sent.
    #[arg(long = "set", value_name = "FIELD=VALUE", required = true)]
    pub assignments: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DeleteArgs {
    pub entity: String,
    pub id: String,
    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on (default: server.port, or $PORT).
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Clone, Debug, Args)]
pub struct MetaArgs {
    /// Page title; omitted means the site's default title.
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}

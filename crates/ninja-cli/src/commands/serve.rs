use anyhow::Context;

use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;
use crate::server::AdminServer;

/// Handle `ncms serve`. Runs until the process is stopped.
pub async fn handle(args: &ServeArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let mut config = ctx.config.clone();
    if let Some(port) = args.port {
        config.server.port = port;
    }
    let addr = config.server.bind_addr();

    let server = tiny_http::Server::http(&addr)
        .map_err(|e| anyhow::anyhow!("failed to bind admin server on {addr}: {e}"))?;
    tracing::info!(%addr, "admin server listening");
    eprintln!("ncms admin listening on http://{addr}/admin/cms");

    let admin = AdminServer::new(config, ctx.service.clone());
    let runtime = tokio::runtime::Handle::current();

    // tiny_http::recv() blocks, so the request loop runs in spawn_blocking.
    tokio::task::spawn_blocking(move || admin.run(&server, &runtime))
        .await
        .context("admin server loop panicked")?;
    Ok(())
}

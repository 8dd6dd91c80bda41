use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use server::server_arguments::ServerArguments;
use server::{build_router, AppState};

async fn tokio_main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cla = ServerArguments::parse();

    if cla.api_token.is_none() {
        warn!("No API token configured (--api-token / ARTIC_API_TOKEN), upstream requests are sent without Authorization");
    }

    let static_dir = cla.shellexpand_static_dir()?;
    let addr = cla.get_socket_addr()?;
    let app = build_router(AppState::new(cla), &static_dir);

    info!("Serving client from {}", static_dir.display());
    info!("HTTP server running on http://{}", addr);

    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(tokio_main())
}

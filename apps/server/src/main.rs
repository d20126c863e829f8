use anyhow::Context;
use tln::domain::config::ApiConfig;
use tln::kernel::config::load_config;
use tln_logger::Logger;
use tln_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig =
        load_config(Some("server")).context("Critical: Configuration is malformed")?;

    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &cfg.logging)?.init()?;

    Server::builder().config(cfg).build().await?.run().await
}

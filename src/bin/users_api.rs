//! Users service entry point.

use core_services::{config::Service, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run(Service::Users).await
}

use std::io::Write;

use log::info;
use onering_devtools::{
    error::Result,
    services::{
        checker::{check_services, write_report},
        CheckerConfig,
    },
};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = CheckerConfig::default();
    info!("Probing {} services", config.services.len());
    let report = check_services(&config).await;

    let mut stdout = std::io::stdout().lock();
    write_report(&mut stdout, &report)?;
    stdout.flush()?;

    Ok(())
}

use std::io::Write;

use onering_devtools::{
    error::Result,
    setup::{
        env_file::ensure_env_file,
        guidance::{write_banner, write_network_guidance, write_next_steps},
        network::{discover_addresses, SystemInterfaces},
        EnvPaths,
    },
};

fn main() -> Result<()> {
    env_logger::init();

    let mut stdout = std::io::stdout().lock();
    write_banner(&mut stdout)?;

    ensure_env_file(&EnvPaths::project(), &mut stdout)?;

    let addresses = discover_addresses(&SystemInterfaces);
    write_network_guidance(&mut stdout, &addresses)?;
    write_next_steps(&mut stdout)?;
    stdout.flush()?;

    Ok(())
}

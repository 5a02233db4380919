use anyhow::Context;
use clap::Parser;

use verlet_md::args_parser::Args;
use verlet_md::system::System;
use verlet_md::writers::thermo_log::ThermoLog;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.into_config().context("failed to read configuration")?;
    let system = System::new(config).context("failed to set up the system")?;

    let stdout = std::io::stdout();
    let mut log = ThermoLog::new(stdout.lock());
    system.run(&mut log).context("simulation run failed")?;
    Ok(())
}

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use tuplist::demo::{self, DemoConfig};
use tuplist::DEFAULT_CAPACITY;

#[derive(Parser)]
#[command(name = "tuplist")]
#[command(version, about = "Show a fixed-size tuple and a doubling list over the same values")]
struct Cli {
    /// Starting capacity of the list
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Label of the tuple
    #[arg(long, default_value = "mytuple")]
    name: String,

    /// Also print the memory footprint of both containers
    #[arg(long)]
    layout: bool,

    /// Log container allocation and growth to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for DemoConfig {
    fn from(cli: Cli) -> Self {
        DemoConfig {
            name: cli.name,
            capacity: cli.capacity,
            layout: cli.layout,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let config = DemoConfig::from(cli);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = demo::run(&config, &mut out).and_then(|()| out.flush().map_err(Into::into));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

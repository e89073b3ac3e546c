mod commands;
mod terminal;

use commands::{CommandLine, Commands, list, run};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet)?;

    let cfg = commands.config();
    cfg.validate().map_err(anyhow::Error::msg)?;

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::List => {
            print::header("exercise catalog", cfg.quiet);
            list::list(cfg.quiet);
        }
        Commands::Run { exercises } => {
            let dataset = run::load_dataset(&cfg)?;
            run::run(&exercises, &dataset, &cfg);
        }
    }

    if cfg.quiet == 0 {
        print::end_of_program();
    }
    Ok(())
}

use clap::Parser;

use activity_stats::cli::{Cli, Commands};
use activity_stats::commands::{
    run_compute, run_config, run_history, run_init, run_record, run_summary,
};
use activity_stats::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Summary(args) => run_summary(args, &cli),
        Commands::Compute(args) => run_compute(args, &cli),
        Commands::Record(args) => run_record(args, &cli),
        Commands::History(args) => run_history(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}

use breakc_cli::commands::Cli;
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

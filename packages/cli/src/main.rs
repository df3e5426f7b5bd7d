use clap::Parser;

/// doggybag - flatten directory listings into path -> contents mappings
#[derive(Parser, Debug)]
#[command(name = "doggybag")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: doggybag_cli::Command,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = doggybag_cli::logging::init(args.verbose) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    match doggybag_cli::run(args.command) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

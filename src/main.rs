use clap::Parser;

use sbsp_lca::report::{self, Cli};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = report::run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

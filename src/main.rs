use clap::Parser;
use std::process;

use bolide::cli::Cli;

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    match bolide::run(args).await {
        Ok(0) => {}
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

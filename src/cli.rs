use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file to use
    #[arg(short = 'f', long = "file", default_value = "bolide.toml")]
    pub file: String,

    /// Run the task's sequential dependencies before the task itself
    #[arg(short = 'a', long = "all")]
    pub depend: bool,

    /// Set this environment variable (NAME=NAME) on every spawned task
    #[arg(short = 'e', long = "env", value_name = "NAME")]
    pub env: Option<String>,

    /// Treat missing dependencies and process failures as hard errors
    #[arg(long = "strict")]
    pub strict: bool,

    /// Alias of the task to run
    pub task: String,
}

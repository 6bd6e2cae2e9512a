use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "drill",
    about = concat!("drill v", env!("CARGO_PKG_VERSION"), " - scaffold a practice problem and check it off"),
    version
)]
pub struct Cli {
    /// Problem name, e.g. "Two Sum"
    pub name: String,

    /// Link to the problem statement
    pub link: String,

    /// Category directory, e.g. two_pointers (shown as "Two Pointers")
    pub category: String,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true)]
    pub rest: Vec<String>,

    /// Record the problem as solved
    #[arg(long)]
    pub done: bool,

    /// Difficulty written into the template (default from drill.toml, else TBD)
    #[arg(long)]
    pub difficulty: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Run against a different project directory
    #[arg(short = 'C', long = "project-dir")]
    pub project_dir: Option<String>,

    /// Log what is being read and written
    #[arg(short, long)]
    pub verbose: bool,
}

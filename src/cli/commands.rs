use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "td", about = concat!("[x] td v", env!("CARGO_PKG_VERSION"), " - your to-do list is one json file"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task to the end of the list
    Add(AddArgs),
    /// List tasks
    List(ListArgs),
    /// Flip a task between done and not done
    Toggle(IdArgs),
    /// Remove a task
    Delete(IdArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    pub text: String,
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter to apply (all, completed, incomplete)
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Args)]
pub struct IdArgs {
    /// Task id
    pub id: i64,
}

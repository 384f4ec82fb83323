use clap::Parser;
use task_pool::cli::{execute_run, Cli};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = execute_run(&cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

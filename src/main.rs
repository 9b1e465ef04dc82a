mod aggregate;
mod catalog;
mod cli;
mod discovery;
mod formatters;
mod types;

fn main() {
    // Delegate to CLI runner; errors carry their context chain.
    if let Err(err) = cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

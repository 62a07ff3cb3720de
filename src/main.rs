// Module declarations
mod builder;
mod cli;
mod config;
mod front_matter;
mod layout;
mod locale;
mod markdown;
mod utils;

fn main() {
    if let Err(e) = cli::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

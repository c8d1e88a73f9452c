use clap::Parser;
use contact_book::prelude::{Cli, Config, Terminal, start_session};
use std::io;
use std::process::exit;

fn main() {
    let env = env_logger::Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    Cli::parse();
    let config = Config::from_env();

    let mut console = Terminal::new(io::stdin().lock(), io::stdout());
    if let Err(e) = start_session(&config, &mut console) {
        eprintln!("{}", e);
        exit(1);
    }
}

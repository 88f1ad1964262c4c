use agentflow_rust::cli::{self, Command};
use agentflow_rust::{build_store, AppConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
    };
    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[agentflow] {e}");
            std::process::exit(e.exit_code());
        }
    };
    log::debug!("command {command:?} with {:?}", config.store);
    let mut store = build_store(&config);
    match cli::execute(&command, &mut store) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("[agentflow] {e}");
            std::process::exit(e.exit_code());
        }
    }
}

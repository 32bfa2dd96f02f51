use anyhow::Result;

use ittf_rankings::cli::Command;
use ittf_rankings::{handle_player_id, handle_profile, handle_rankings, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(command)
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Rankings {
            r#type,
            gender,
            category,
            top,
            delay_ms,
        } => handle_rankings(&r#type, &gender, &category, &top, delay_ms),
        Command::PlayerId {
            full_name,
            given_name,
            family_name,
        } => handle_player_id(full_name, given_name, family_name),
        Command::Profile {
            full_name,
            ittf_id,
            extended,
        } => handle_profile(full_name, ittf_id, extended),
    }
}

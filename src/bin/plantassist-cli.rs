//! PlantAssist CLI - offline catalog access
//!
//! Usage:
//!   plantassist-cli lookup <query>
//!   plantassist-cli list
//!   plantassist-cli prompt <plant-name>

use std::env;
use std::process::ExitCode;

use plantassist_lib::catalog::PlantCatalog;
use plantassist_lib::prompts;

#[derive(Debug)]
enum Command {
    Lookup { query: String },
    List,
    Prompt { plant_name: String },
    Help,
    Version,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match parse_args(&args) {
        Ok(cmd) => match run_command(cmd) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            print_help();
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    if args.len() < 2 {
        return Ok(Command::Help);
    }

    match args[1].as_str() {
        "help" | "--help" | "-h" => Ok(Command::Help),
        "version" | "--version" | "-V" => Ok(Command::Version),
        "list" => Ok(Command::List),
        "lookup" => {
            let query = args.get(2).ok_or("lookup requires a query")?;
            Ok(Command::Lookup { query: query.clone() })
        }
        "prompt" => {
            let plant_name = args.get(2).ok_or("prompt requires a plant name")?;
            Ok(Command::Prompt { plant_name: plant_name.clone() })
        }
        other => Err(format!("unknown command: {}", other)),
    }
}

fn run_command(cmd: Command) -> Result<(), String> {
    match cmd {
        Command::Lookup { query } => {
            let catalog = PlantCatalog::global();
            match catalog.resolve(&query) {
                Some(fact) => {
                    let json = serde_json::to_string_pretty(fact)
                        .map_err(|e| format!("failed to serialize record: {}", e))?;
                    println!("{}", json);
                    Ok(())
                }
                None => Err(format!("no catalog entry matches '{}'", query)),
            }
        }
        Command::List => {
            let catalog = PlantCatalog::global();
            for (key, fact) in catalog.entries() {
                println!("{:<14} {} ({})", key, fact.name, fact.scientific_name);
            }
            Ok(())
        }
        Command::Prompt { plant_name } => {
            println!("{}", prompts::plant_info_prompt(&plant_name));
            Ok(())
        }
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Version => {
            println!(
                "plantassist {} (prompt templates {})",
                env!("CARGO_PKG_VERSION"),
                prompts::PROMPT_TEMPLATE_VERSION
            );
            Ok(())
        }
    }
}

fn print_help() {
    println!("PlantAssist CLI - offline catalog access");
    println!();
    println!("Usage:");
    println!("  plantassist-cli lookup <query>        Resolve a plant name against the catalog");
    println!("  plantassist-cli list                  List all catalog entries");
    println!("  plantassist-cli prompt <plant-name>   Print the plant-info prompt for a name");
    println!("  plantassist-cli help                  Show this help");
    println!("  plantassist-cli version               Show version");
}

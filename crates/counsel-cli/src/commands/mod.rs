use std::path::Path;

use anyhow::{Context, Result};
use counsel_core::Counsel;
use serde::Serialize;

use crate::cli::{Commands, TopicsCommand};

pub(crate) fn run_from_root(root: &Path, command: Commands) -> Result<()> {
    let app = Counsel::new(root).context("failed to create guidance service")?;

    match command {
        Commands::Ask(args) => {
            let response = app.ask(&args.query);
            print_json(&response)?;
        }
        Commands::Classify(args) => {
            if args.explain {
                let (response, breakdown) = app.classify_with_breakdown(&args.query);
                print_json(&serde_json::json!({
                    "response": response,
                    "breakdown": breakdown,
                }))?;
            } else {
                let response = app.classify(&args.query);
                print_json(&response)?;
            }
        }
        Commands::Topics(args) => match args.command {
            TopicsCommand::Ls => {
                let listing = app
                    .topics()
                    .iter()
                    .map(|record| {
                        serde_json::json!({
                            "key": record.key,
                            "keywords": record.keywords,
                        })
                    })
                    .collect::<Vec<_>>();
                print_json(&listing)?;
            }
            TopicsCommand::Show { key } => {
                let record = app.topic(&key)?;
                print_json(record)?;
            }
        },
        Commands::Status => {
            print_json(&app.status())?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

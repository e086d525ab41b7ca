use chrono::Local;
use clap::Parser;
use daybook::application::{init, ConfigService, JournalSession};
use daybook::cli::{Cli, Commands};
use daybook::domain::{journal, DatePhrase};
use daybook::error::DaybookError;
use daybook::infrastructure::config::{self, Settings};
use daybook::infrastructure::HookRegistry;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Diagnostics are opt-in; stdout stays reserved for hook reports
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("DAYBOOK_LOG").unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), DaybookError> {
    match cli.command {
        Some(Commands::Init { force }) => init::init(&config::config_file_path(), force),
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::new(config::config_file_path());

            if list {
                print!("{}", service.list()?);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    println!("{}", service.get(&k)?);
                    Ok(())
                }
            } else {
                println!("Usage: daybook config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: journal_directory, preferred_editor, date_format, \
                     file_extension, scratch_directory"
                );
                Ok(())
            }
        }
        None => {
            let settings = Settings::load()?;

            let phrase = cli.date_phrase();
            let date = DatePhrase::parse(&phrase)?.resolve(Local::now().date_naive());
            debug!("Resolved '{}' to {}", phrase, date);

            let filename =
                journal::filename_for_date(date, &settings.date_format, &settings.file_extension)?;

            let registry = HookRegistry::with_builtins();
            let session = JournalSession::new(&settings, &registry)?;
            session.open(&filename)
        }
    }
}

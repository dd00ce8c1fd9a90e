use std::{env, process};

use chrono::Local;

use expense_core::{
    cli::{self, app::App, output},
    config::ConfigManager,
    expenses::{self, seed_expenses},
    init,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let config = ConfigManager::new().load()?;
    let today = Local::now().date_naive();

    match args.next().as_deref() {
        None | Some("app") => {
            let mut app = App::new(config, today)?;
            cli::run(&mut app)?;
        }
        Some("expenses") => {
            let seed = seed_expenses(today)?;
            let selected = match args.next() {
                Some(category) => expenses::filter_by_category(&seed, &category),
                None => seed.iter().collect(),
            };
            println!("{}", serde_json::to_string_pretty(&selected)?);
        }
        Some("total") => {
            let seed = seed_expenses(today)?;
            let selected = match args.next() {
                Some(category) => expenses::filter_by_category(&seed, &category),
                None => seed.iter().collect(),
            };
            let amount = expenses::total(selected);
            println!(
                "{}",
                expense_core::currency::format_currency_value(
                    amount,
                    &config.currency_code(),
                    &config.locale_config(),
                )
            );
        }
        Some(other) => {
            let prefs = output::OutputPreferences {
                plain_mode: config.plain_mode,
                screen_reader_mode: false,
            };
            output::error(format!("unknown command `{other}`"), &prefs);
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn print_usage() {
    eprintln!(
        "Usage: expense_core_cli [command]\n\
         Commands:\n  \
         app                  interactive session (default)\n  \
         expenses [category]  print the expense list as JSON\n  \
         total [category]     print the formatted total"
    );
}

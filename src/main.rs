use std::env;
use std::process::ExitCode;

use finholidays::{Configuration, FinnishCalendar, HolidayError};

const USAGE: &str = "usage: finholidays <year> [config.json]";

fn run(year: i32, config_path: Option<String>) -> Result<(), HolidayError> {
    let config = match config_path {
        Some(path) => Configuration::from_reader(path)?,
        None => Configuration::default()
    };
    let calendar = FinnishCalendar::new(&config)?;
    let holidays = calendar.get_holidays(year)?;
    println!("{}", serde_json::to_string_pretty(&holidays)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1);
    let year = match args.next().map(|s| s.parse::<i32>()) {
        Some(Ok(year)) => year,
        _ => {
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };
    let config_path = args.next();

    match run(year, config_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("finholidays: {}", error);
            ExitCode::from(1)
        }
    }
}

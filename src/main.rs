use std::io::{self, Write};

use anyhow::{Result, bail};
use tracing_subscriber::EnvFilter;

use beachday::{BeachDayConfig, BeachDayReport, BeachDayService, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = BeachDayConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let first = args.next();

    match first.as_deref() {
        Some("serve") => web::run(config).await,
        Some(city) => {
            let Some(state) = args.next() else {
                bail!("usage: beachday [<city> <state> | serve]");
            };
            run_console(&config, city, &state).await
        }
        None => {
            let city = prompt("Enter the city: ")?;
            let state = prompt("Enter the state abbreviation (ex. 'NJ' for New Jersey): ")?;
            run_console(&config, &city, &state).await
        }
    }
}

async fn run_console(config: &BeachDayConfig, city: &str, state: &str) -> Result<()> {
    let service = BeachDayService::new(config)?;

    match service.report(city, state).await {
        Ok(report) => {
            print_report(&report);
            Ok(())
        }
        Err(err) => {
            // The error message is the entire output for a failed request
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn print_report(report: &BeachDayReport) {
    let days = [("Today", &report.today), ("Tomorrow", &report.tomorrow)];

    for (label, outlook) in days {
        println!(
            "Weather data for ZIP code {} ({label}):\n\n{}",
            report.zip_code, outlook.summary
        );
        println!(
            "Beach day rating for {}, {} ({label}):\nUV Index: {}\n{} / ⭐⭐⭐⭐⭐",
            report.city, report.state, outlook.uv_warning, outlook.stars
        );
        println!("{}\n", outlook.verdict);
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

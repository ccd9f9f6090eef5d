//! Offer Projection CLI
//!
//! Command-line interface for projecting job offers over ten years

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use offer_projection::format::{format_currency, format_share_price, format_units, format_valuation};
use offer_projection::offer::load_offers;
use offer_projection::parameters::load_parameter_grid;
use offer_projection::{Cents, Offer, ProjectionParameters, ProjectionResult, ScenarioRunner};

/// Project equity and cash compensation for job offers
#[derive(Parser, Debug)]
#[command(name = "offer_projection")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Offer JSON file (one offer or a list)
    offer: PathBuf,

    /// Annual valuation growth (%)
    #[arg(long)]
    growth_rate: Option<f64>,

    /// Exit / liquidity year to summarize
    #[arg(long)]
    exit_year: Option<u32>,

    /// Annual salary increase (%)
    #[arg(long)]
    salary_increase: Option<f64>,

    /// Annual bonus (% of salary)
    #[arg(long)]
    bonus: Option<f64>,

    /// Annual equity refresh (% of the original grant)
    #[arg(long)]
    refresh: Option<f64>,

    /// Starting valuation in cents (defaults to the offer's valuation)
    #[arg(long)]
    valuation_cents: Option<i64>,

    /// CSV scenario grid; each row is run against the first offer
    #[arg(long)]
    scenarios: Option<PathBuf>,

    /// Write the yearly rows of the first projection to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print results as JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Offer slider defaults overridden by any flags given
    fn parameters_for(&self, offer: &Offer) -> ProjectionParameters {
        let base = ProjectionParameters::for_offer(offer);
        ProjectionParameters {
            annual_growth_rate: self.growth_rate.unwrap_or(base.annual_growth_rate),
            exit_year: self.exit_year.unwrap_or(base.exit_year),
            salary_increase_rate: self.salary_increase.unwrap_or(base.salary_increase_rate),
            bonus_rate: self.bonus.unwrap_or(base.bonus_rate),
            equity_refresh_rate: self.refresh.unwrap_or(base.equity_refresh_rate),
            current_valuation: self.valuation_cents.map(Cents).or(base.current_valuation),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let offers = load_offers(&cli.offer)
        .with_context(|| format!("failed to load offers from {}", cli.offer.display()))?;
    if offers.is_empty() {
        bail!("{} contains no offers", cli.offer.display());
    }
    info!("loaded {} offer(s) from {}", offers.len(), cli.offer.display());

    // Every run keeps the offer it projected, for the grant line in the table
    let runs: Vec<(&Offer, ProjectionResult)> = if let Some(grid_path) = &cli.scenarios {
        let offer = &offers[0];
        let base = cli.parameters_for(offer);
        let grid = load_parameter_grid(grid_path, &base)
            .with_context(|| format!("failed to load scenarios from {}", grid_path.display()))?;
        info!("running {} scenario(s)", grid.len());
        ScenarioRunner::new()
            .run_scenarios(offer, &grid)
            .into_iter()
            .map(|result| (offer, result))
            .collect()
    } else {
        offers
            .iter()
            .map(|offer| (offer, ScenarioRunner::with_parameters(cli.parameters_for(offer)).run(offer)))
            .collect()
    };

    if runs.is_empty() {
        bail!("no projections to report");
    }

    if let Some(csv_path) = &cli.csv {
        let file = File::create(csv_path)
            .with_context(|| format!("unable to create {}", csv_path.display()))?;
        runs[0].1.write_csv(BufWriter::new(file))?;
        eprintln!("Yearly rows written to: {}", csv_path.display());
    }

    if cli.json {
        let results: Vec<&ProjectionResult> = runs.iter().map(|(_, result)| result).collect();
        serde_json::to_writer_pretty(io::stdout().lock(), &results)?;
        println!();
        return Ok(());
    }

    for (i, (offer, result)) in runs.iter().enumerate() {
        if runs.len() > 1 {
            println!("\n=== Projection {} ===", i + 1);
        }
        print_result(offer, result);
    }

    Ok(())
}

/// Grant line, e.g. `20,000 units: 15,000 ISO + 5,000 RSU`
fn describe_grant(offer: &Offer) -> String {
    let mut line = format!("{} units", format_units(offer.equity_units as f64));
    if let Some(packages) = offer.equity_packages.breakdown() {
        let parts: Vec<String> = packages
            .iter()
            .map(|p| format!("{} {}", format_units(p.units as f64), p.unit_type.as_str()))
            .collect();
        line.push_str(&format!(": {}", parts.join(" + ")));
    }
    line
}

fn print_result(offer: &Offer, result: &ProjectionResult) {
    println!("Grant: {}", describe_grant(offer));
    println!();
    println!(
        "{:>4} {:>10} {:>10} {:>10} {:>12} {:>14} {:>16} {:>12} {:>10} {:>16}",
        "Year", "Valuation", "Vested", "Total", "Price/Share", "Invest Cost", "Net Equity Gain", "Salary", "Bonus", "Total Comp"
    );
    println!("{}", "-".repeat(124));

    for row in &result.years {
        let marker = if row.year == result.exit_year { "*" } else { " " };
        println!(
            "{:>3}{} {:>10} {:>10} {:>10} {:>12} {:>14} {:>16} {:>12} {:>10} {:>16}",
            row.year,
            marker,
            format_valuation(row.valuation),
            format_units(row.vested_units),
            format_units(row.total_granted_units),
            format_share_price(row.price_per_share),
            format!("({})", format_currency(row.investment_cost)),
            format_currency(row.net_gain),
            format_currency(row.salary),
            format_currency(row.bonus),
            format_currency(row.total_comp),
        );
    }

    match result.summary() {
        Ok(summary) => {
            println!("\nYear {} Summary:", summary.exit_year);
            println!("  Total Compensation: {}", format_currency(summary.total_comp));
            println!("  Company Valuation:  {}", format_valuation(summary.valuation));
            println!("  Investment Cost:    {}", format_currency(summary.investment_cost));
            println!("  Net Equity Gain:    {}", format_currency(summary.net_gain));
            println!("  Vested Equity:      {} units", format_units(summary.vested_units));
            if let Some(percent) = summary.ownership_percent {
                println!("  Ownership:          {}%", percent);
            }
            println!("  Cash To Exit:       {}", format_currency(summary.cumulative_cash));
            println!("  Full Grant Exercise Cost: {}", format_currency(summary.full_grant_exercise_cost));
        }
        Err(err) => println!("\nNo exit summary: {}", err),
    }
}

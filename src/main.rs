//! WealthTracker Engine CLI
//!
//! Command-line interface for running wealth projections and freedom scores

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use wealthtracker_engine::metrics::load_payload;
use wealthtracker_engine::projection::{
    project_schedule, retirement_estimate, ProjectionInput, WITHDRAWAL_RATE,
};
use wealthtracker_engine::scenario::{default_scenarios, ScenarioRunner};
use wealthtracker_engine::{score, FreedomScoreInput};

#[derive(Parser)]
#[command(name = "wealthtracker_engine", version, about = "Wealth projection and freedom scoring")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct ProjectionArgs {
    /// Current total wealth (£)
    #[arg(long, default_value_t = 250_000.0)]
    current_wealth: f64,

    /// Monthly contribution (£); negative models a drawdown
    #[arg(long, default_value_t = 2_000.0)]
    monthly_contribution: f64,

    /// Expected annual inflation (%)
    #[arg(long, default_value_t = 3.0)]
    inflation_pct: f64,

    /// Projection horizon in years
    #[arg(long, default_value_t = 10)]
    years: u32,
}

impl ProjectionArgs {
    fn to_input(&self, annual_return_pct: f64) -> ProjectionInput {
        ProjectionInput {
            current_wealth: self.current_wealth,
            monthly_contribution: self.monthly_contribution,
            annual_return_pct,
            annual_inflation_pct: self.inflation_pct,
            horizon_years: self.years,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Project wealth to the horizon, with an optional year-by-year CSV
    Project {
        #[command(flatten)]
        args: ProjectionArgs,

        /// Expected annual return (%)
        #[arg(long, default_value_t = 7.0)]
        return_pct: f64,

        /// Write the year-by-year schedule to this CSV path
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Compare the conservative/moderate/aggressive return scenarios
    Scenarios {
        #[command(flatten)]
        args: ProjectionArgs,
    },
    /// Estimate retirement income under the 4% withdrawal rule
    Retire {
        /// Current total wealth (£)
        #[arg(long, default_value_t = 250_000.0)]
        current_wealth: f64,

        /// Expected annual return (%)
        #[arg(long, default_value_t = 7.0)]
        return_pct: f64,

        /// Years until retirement
        #[arg(long, default_value_t = 30)]
        years: u32,
    },
    /// Compute the financial freedom score from an analytics payload JSON
    Score {
        /// Path to the exported analytics payload
        payload: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Project { args, return_pct, output } => {
            let input = args.to_input(return_pct);
            input.validate().context("invalid projection input")?;

            let result = wealthtracker_engine::project(&input);
            println!("Projection over {} years at {:.1}% return:", input.horizon_years, return_pct);
            println!("  Projected Value:      £{:.0}", result.future_value);
            println!("  Inflation-Adjusted:   £{:.0}", result.inflation_adjusted_value);
            println!("  Total Contributions:  £{:.0}", result.total_contributions);
            println!("  Investment Growth:    £{:.0}", result.growth);

            if let Some(path) = output {
                write_schedule_csv(&input, &path)?;
                println!("\nYear-by-year schedule written to: {}", path.display());
            }
        }
        Command::Scenarios { args } => {
            let input = args.to_input(7.0);
            input.validate().context("invalid projection input")?;

            let runner = ScenarioRunner::new(input.clone());
            println!("Scenario analysis over {} years:", input.horizon_years);
            println!("{:>14} {:>8} {:>16}  {}", "Scenario", "Return", "Projected", "Profile");
            println!("{}", "-".repeat(72));
            for (scenario, result) in runner.run_scenarios(&default_scenarios()) {
                println!(
                    "{:>14} {:>7.1}% {:>15.0}  {}",
                    scenario.name,
                    scenario.annual_return_pct,
                    result.future_value,
                    scenario.description,
                );
            }
        }
        Command::Retire { current_wealth, return_pct, years } => {
            let estimate = retirement_estimate(current_wealth, return_pct, years);
            println!("Retirement in {} years at {:.1}% return:", years, return_pct);
            println!("  Expected at Retirement:  £{:.0}", estimate.expected_at_retirement);
            println!(
                "  {:.0}% Withdrawal Rule:     £{:.0}/year",
                WITHDRAWAL_RATE * 100.0,
                estimate.annual_withdrawal
            );
            println!("  Monthly Income:          £{:.0}", estimate.monthly_income);
        }
        Command::Score { payload } => {
            let payload = load_payload(&payload)
                .with_context(|| format!("failed to load payload {}", payload.display()))?;
            let result = score(&FreedomScoreInput::from(&payload));

            println!("Financial Freedom Score: {} / 1000 ({})", result.score, result.label.as_str());
            println!("  Net Worth:        {:>6.1} / 300", result.components.net_worth);
            println!("  Emergency Fund:   {:>6.1} / 200", result.components.emergency_fund);
            println!("  Savings Rate:     {:>6.1} / 200", result.components.savings_rate);
            println!("  Debt Management:  {:>6.1} / 150", result.components.debt_management);
            println!("  Diversification:  {:>6.1} / 150", result.components.diversification);

            if !result.suggestions.is_empty() {
                println!("\nWays to improve your score:");
                for suggestion in &result.suggestions {
                    println!("  - {}", suggestion);
                }
            }
        }
    }

    Ok(())
}

/// Write the year-by-year schedule in the CSV layout the dashboard charts expect
fn write_schedule_csv(input: &ProjectionInput, path: &std::path::Path) -> anyhow::Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("unable to create CSV file {}", path.display()))?;

    writeln!(file, "Year,FutureValue,InflationAdjusted,TotalContributions,Growth")?;
    for row in project_schedule(input) {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2}",
            row.year,
            row.future_value,
            row.inflation_adjusted_value,
            row.total_contributions,
            row.growth,
        )?;
    }

    Ok(())
}

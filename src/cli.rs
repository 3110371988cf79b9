use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fmt::Write as _;

use crate::core::{ChatReply, TaxBreakdown, format_rupees};
use crate::requests::{
    ChatRequest, ProjectionOutcome, ProjectionRequest, SavingsRequest, TaxRequest,
};

#[derive(Parser, Debug)]
#[command(
    name = "finchat",
    about = "Personal finance assistant: savings goal, tax estimate and investment projection"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Log filter, e.g. debug or finchat=trace; defaults to RUST_LOG, then info"
    )]
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Estimate tax on an annual income using the example slabs.
    Tax {
        #[arg(long, allow_negative_numbers = true, help = "Annual taxable income (₹)")]
        income: f64,
        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },
    /// Monthly amount needed to reach a savings target.
    Savings {
        #[arg(long, allow_negative_numbers = true, help = "Target amount (₹)")]
        target: f64,
        #[arg(long, help = "Months to save, 1 to 600")]
        months: u32,
        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },
    /// Year-by-year compounding projection.
    Project {
        #[arg(long, allow_negative_numbers = true, help = "Initial principal (₹)")]
        principal: f64,
        #[arg(
            long,
            allow_negative_numbers = true,
            help = "Expected annual return in percent, e.g. 8"
        )]
        rate: f64,
        #[arg(long, help = "Number of years, 1 to 100")]
        years: u32,
        #[arg(
            long,
            allow_negative_numbers = true,
            default_value_t = 0.0,
            help = "Yearly contribution added after each year's growth (₹)"
        )]
        contribution: f64,
        #[arg(long, help = "Print the result and chart series as JSON")]
        json: bool,
    },
    /// Ask the assistant a question.
    Chat {
        #[arg(required = true, num_args = 1.., help = "Message to the assistant")]
        message: Vec<String>,
        #[arg(long, help = "Seed for the fallback tip; random when omitted")]
        seed: Option<u64>,
    },
    /// Serve the JSON API.
    Serve {
        #[arg(long, env = "FINCHAT_PORT", default_value_t = 8080)]
        port: u16,
    },
}

pub async fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Serve { port } => crate::api::run_http_server(port)
            .await
            .map_err(|e| format!("server error: {e}")),
        other => {
            let output = render(&other)?;
            println!("{output}");
            Ok(())
        }
    }
}

/// Produces the stdout text for every command except `serve`.
pub fn render(command: &Command) -> Result<String, String> {
    match command {
        Command::Tax { income, json } => {
            let outcome = TaxRequest { income: *income }.run()?;
            if *json {
                to_json(&outcome)
            } else {
                Ok(format!(
                    "{}\n{}",
                    outcome.message,
                    tax_table(&outcome.breakdown)
                ))
            }
        }
        Command::Savings {
            target,
            months,
            json,
        } => {
            let outcome = SavingsRequest {
                target: *target,
                months: *months,
            }
            .validate()?
            .run()?;
            if *json {
                to_json(&outcome)
            } else {
                Ok(outcome.message)
            }
        }
        Command::Project {
            principal,
            rate,
            years,
            contribution,
            json,
        } => {
            let outcome = ProjectionRequest {
                principal: *principal,
                rate: *rate,
                years: *years,
                contribution: *contribution,
            }
            .validate()?
            .run()?;
            if *json {
                to_json(&outcome)
            } else {
                Ok(format!(
                    "{}\n{}",
                    outcome.message,
                    projection_table(&outcome)
                ))
            }
        }
        Command::Chat { message, seed } => {
            let reply = ChatRequest::new(message.join(" "), *seed)
                .validate()?
                .run();
            Ok(chat_text(&reply))
        }
        Command::Serve { .. } => Err("serve does not render output".to_string()),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("failed to serialize result: {e}"))
}

fn tax_table(breakdown: &TaxBreakdown) -> String {
    let mut out = String::new();
    for slab in &breakdown.slabs {
        let band = match slab.upper {
            Some(upper) => format!("{} - {}", format_rupees(slab.lower), format_rupees(upper)),
            None => format!("above {}", format_rupees(slab.lower)),
        };
        let _ = writeln!(
            out,
            "  {band:<26} @ {:>2}%  {}",
            (slab.rate * 100.0).round(),
            format_rupees(slab.tax)
        );
    }
    let _ = write!(
        out,
        "  subtotal {} x {} = {}",
        format_rupees(breakdown.subtotal),
        breakdown.surcharge_multiplier,
        format_rupees(breakdown.total)
    );
    out
}

fn projection_table(outcome: &ProjectionOutcome) -> String {
    let mut out = String::new();
    for point in &outcome.chart.points {
        let _ = writeln!(out, "  year {:>3}  {}", point.x, format_rupees(point.y));
    }
    let projection = &outcome.projection;
    let _ = write!(
        out,
        "  contributed {}, growth {}",
        format_rupees(projection.total_contributed),
        format_rupees(projection.growth)
    );
    out
}

fn chat_text(reply: &ChatReply) -> String {
    match reply.suggested_tool {
        Some(tool) => format!("{}\n(suggested tool: {})", reply.text, tool.label()),
        None => reply.text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn project_accepts_negative_rate_and_default_contribution() {
        let cli = parse(&[
            "finchat",
            "project",
            "--principal",
            "1000",
            "--rate",
            "-5",
            "--years",
            "2",
        ]);
        assert_eq!(
            cli.command,
            Command::Project {
                principal: 1_000.0,
                rate: -5.0,
                years: 2,
                contribution: 0.0,
                json: false,
            }
        );
    }

    #[test]
    fn log_level_is_global() {
        let cli = parse(&["finchat", "tax", "--income", "1", "--log-level", "debug"]);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn chat_joins_words_into_one_message() {
        let cli = parse(&["finchat", "chat", "how", "to", "save", "--seed", "3"]);
        let output = render(&cli.command).expect("chat renders");
        assert!(output.starts_with("Try the 'Savings Goal' tool"));
        assert!(output.ends_with("(suggested tool: Savings Goal)"));
    }

    #[test]
    fn savings_renders_chat_message() {
        let output = render(&Command::Savings {
            target: 20_000.0,
            months: 6,
            json: false,
        })
        .expect("valid plan");
        assert_eq!(output, "Save ₹3,333/month to reach ₹20,000 in 6 months.");
    }

    #[test]
    fn tax_renders_slab_table() {
        let output = render(&Command::Tax {
            income: 600_000.0,
            json: false,
        })
        .expect("valid income");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Estimated tax on ₹600,000 : ₹33,800 (example slabs).");
        assert_eq!(lines.len(), 6);
        assert!(lines[4].contains("above ₹1,000,000"));
        assert!(lines[5].ends_with("= ₹33,800"));
    }

    #[test]
    fn project_json_contains_chart() {
        let output = render(&Command::Project {
            principal: 1_000.0,
            rate: 10.0,
            years: 3,
            contribution: 0.0,
            json: true,
        })
        .expect("valid projection");
        let json: serde_json::Value = serde_json::from_str(&output).expect("valid json");
        assert_eq!(json["chart"]["points"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["chart"]["title"], "Projection @ 10% p.a.");
    }

    #[test]
    fn project_text_lists_every_year() {
        let output = render(&Command::Project {
            principal: 0.0,
            rate: 0.0,
            years: 2,
            contribution: 100.0,
            json: false,
        })
        .expect("valid projection");
        assert_eq!(
            output,
            "Projection: ₹200 after 2 years.\n  year   1  ₹100\n  year   2  ₹200\n  contributed ₹200, growth ₹0"
        );
    }

    #[test]
    fn invalid_input_surfaces_as_error() {
        let err = render(&Command::Savings {
            target: 1_000.0,
            months: 0,
            json: false,
        })
        .expect_err("zero months");
        assert!(err.contains("months"));
    }

    #[test]
    fn negative_amounts_reach_the_calculators() {
        let cli = parse(&["finchat", "tax", "--income", "-5"]);
        let err = render(&cli.command).expect_err("negative income");
        assert_eq!(err, "invalid income: must be >= 0, got -5");

        let cli = parse(&["finchat", "savings", "--target", "-1", "--months", "3"]);
        assert!(render(&cli.command).expect_err("negative target").contains("target"));

        let cli = parse(&[
            "finchat",
            "project",
            "--principal",
            "-100",
            "--rate",
            "5",
            "--years",
            "2",
            "--contribution",
            "-1",
        ]);
        let err = render(&cli.command).expect_err("negative principal");
        assert!(err.contains("principal"));
    }

    #[test]
    fn serve_port_defaults_to_8080() {
        let cli = parse(&["finchat", "serve"]);
        if std::env::var_os("FINCHAT_PORT").is_none() {
            assert_eq!(cli.command, Command::Serve { port: 8080 });
        }
    }
}

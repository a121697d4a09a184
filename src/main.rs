//! Secgate CLI
//!
//! Usage:
//!   secgate                          # Banner, gate tables, circuit, scenarios
//!   secgate --section circuit        # Only the access circuit table
//!   secgate --gate xor               # A single gate's table
//!   secgate --json                   # Full report as JSON
//!   secgate --gate nand --json       # One gate's table as JSON

use clap::Parser;
use colored::Colorize;

use secgate::core::{render_selection, Section, Selection};
use secgate::types::GateKind;
use secgate::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "secgate",
    version = VERSION,
    about = "Logic gate truth tables and the security-gate access circuit",
    long_about = "Secgate prints truth tables for AND, OR, NOT, NAND, NOR and XOR,\n\
                  then the access circuit OUT = (A AND B) AND (NOT C):\n\n  \
                  A  authentication valid\n  \
                  B  permission valid\n  \
                  C  emergency alarm active\n\n\
                  and walks through five fixed access scenarios."
)]
struct Args {
    /// Which part of the report to print
    #[arg(short, long, value_enum, default_value_t = Section::All)]
    section: Section,

    /// Print only this gate's truth table (AND, OR, NOT, NAND, NOR, XOR)
    #[arg(short, long, conflicts_with = "section")]
    gate: Option<GateKind>,

    /// Output as JSON (applies to --section and --gate)
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

impl Args {
    fn selection(&self) -> Selection {
        Selection {
            section: self.section,
            gate: self.gate,
            json: self.json,
            color: !self.no_color,
        }
    }
}

fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&args) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", render_selection(&args.selection())?);
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

//! Report rendering: banner, truth tables and scenario narration
//!
//! Everything here consumes the gate library and the circuit; nothing here
//! decides a logic value.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::core::circuit::ACCESS_FORMULA;
use crate::core::scenarios::run_scenarios;
use crate::core::truth_table::{circuit_table, gate_tables, truth_table};
use crate::types::{GateError, GateKind, Result, ScenarioOutcome, Signal, TruthTable, Verdict};
use crate::VERSION;

/// Which part of the report to show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    All,
    Gates,
    Circuit,
    Scenarios,
}

impl Section {
    pub fn includes_gates(&self) -> bool {
        matches!(self, Section::All | Section::Gates)
    }

    pub fn includes_circuit(&self) -> bool {
        matches!(self, Section::All | Section::Circuit)
    }

    pub fn includes_scenarios(&self) -> bool {
        matches!(self, Section::All | Section::Scenarios)
    }
}

/// What the CLI asked for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub section: Section,
    /// A single gate; takes the place of `section`
    pub gate: Option<GateKind>,
    pub json: bool,
    pub color: bool,
}

/// JSON view of one section; absent parts are omitted
#[derive(Debug, Serialize)]
struct SectionView<'a> {
    version: &'a str,
    generated_at: DateTime<Utc>,
    section: Section,
    #[serde(skip_serializing_if = "Option::is_none")]
    formula: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gates: Option<&'a [TruthTable]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    circuit: Option<&'a TruthTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scenarios: Option<&'a [ScenarioOutcome]>,
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| GateError::Serialization(e.to_string()))
}

/// Everything the program shows, in one serializable record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub formula: String,
    pub gates: Vec<TruthTable>,
    pub circuit: TruthTable,
    pub scenarios: Vec<ScenarioOutcome>,
}

impl Report {
    /// Enumerate every table and run every scenario
    pub fn build() -> Result<Self> {
        Ok(Self {
            version: VERSION.to_string(),
            generated_at: Utc::now(),
            formula: ACCESS_FORMULA.to_string(),
            gates: gate_tables()?,
            circuit: circuit_table()?,
            scenarios: run_scenarios(),
        })
    }

    /// Do all scenarios produce their expected output?
    pub fn all_scenarios_pass(&self) -> bool {
        self.scenarios.iter().all(|outcome| outcome.matches_expected)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// JSON for one section only
    pub fn section_json(&self, section: Section) -> Result<String> {
        if section == Section::All {
            return self.to_json().map_err(|e| GateError::Serialization(e.to_string()));
        }
        let view = SectionView {
            version: &self.version,
            generated_at: self.generated_at,
            section,
            formula: section.includes_circuit().then_some(self.formula.as_str()),
            gates: section.includes_gates().then_some(self.gates.as_slice()),
            circuit: section.includes_circuit().then_some(&self.circuit),
            scenarios: section.includes_scenarios().then_some(self.scenarios.as_slice()),
        };
        to_pretty_json(&view)
    }

    /// Text for one section, with headings
    pub fn section_text(&self, section: Section, color: bool) -> String {
        let mut out = String::new();
        if section == Section::All {
            out.push_str(&banner(color));
            out.push('\n');
        }
        if section.includes_gates() {
            out.push_str(&heading("Logic gates", color));
            out.push_str(&render_gates(&self.gates, color));
            out.push('\n');
        }
        if section.includes_circuit() {
            out.push_str(&heading("Access circuit", color));
            out.push_str(&render_circuit(&self.circuit, color));
            out.push('\n');
        }
        if section.includes_scenarios() {
            out.push_str(&heading("Scenarios", color));
            out.push_str(&render_scenarios(&self.scenarios, color));
        }
        out
    }
}

/// Produce exactly what the CLI prints for a selection
pub fn render_selection(selection: &Selection) -> Result<String> {
    if let Some(gate) = selection.gate {
        return if selection.json {
            to_pretty_json(&truth_table(&gate)?)
        } else {
            render_gate(gate, selection.color)
        };
    }

    let report = Report::build()?;
    if selection.json {
        report.section_json(selection.section)
    } else {
        Ok(report.section_text(selection.section, selection.color))
    }
}

/// Section heading
pub fn heading(title: &str, color: bool) -> String {
    let line = format!("── {} ──", title);
    if color {
        format!("{}\n\n", line.cyan().bold())
    } else {
        format!("{}\n\n", line)
    }
}

/// Program banner
pub fn banner(color: bool) -> String {
    let rule = "=".repeat(56);
    let title = format!("  Secgate v{} - Logic gates & access circuit", VERSION);
    if color {
        format!("{}\n{}\n{}\n", rule.bold(), title.bold(), rule.bold())
    } else {
        format!("{}\n{}\n{}\n", rule, title, rule)
    }
}

fn paint_signal(signal: Signal, color: bool) -> String {
    let text = signal.to_string();
    if !color {
        return text;
    }
    match signal {
        Signal::High => text.green().bold().to_string(),
        Signal::Low => text.red().to_string(),
    }
}

fn paint_verdict(verdict: Verdict, color: bool) -> String {
    let text = verdict.to_string();
    if !color {
        return text;
    }
    match verdict {
        Verdict::Granted => text.green().bold().to_string(),
        Verdict::Denied => text.red().bold().to_string(),
    }
}

fn dim(text: &str, color: bool) -> String {
    if color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

/// Render one truth table with an optional caption
pub fn render_table(table: &TruthTable, caption: Option<&str>, color: bool) -> String {
    let mut out = String::new();

    let heading = match caption {
        Some(caption) => format!("{}: {}", table.name, caption),
        None => table.name.clone(),
    };
    out.push_str(&if color { heading.bold().to_string() } else { heading });
    out.push('\n');

    let mut header: Vec<String> = table.input_labels.iter().map(|l| format!(" {} ", l)).collect();
    header.push(" OUT".to_string());
    out.push_str(&dim(&header.join("|"), color));
    out.push('\n');

    let mut rule: Vec<String> = table.input_labels.iter().map(|_| "---".to_string()).collect();
    rule.push("----".to_string());
    out.push_str(&dim(&rule.join("+"), color));
    out.push('\n');

    for row in &table.rows {
        let mut cells: Vec<String> = row.inputs.iter().map(|s| format!(" {} ", s)).collect();
        cells.push(format!("  {}", paint_signal(row.output, color)));
        out.push_str(&cells.join("|"));
        out.push('\n');
    }

    out.push_str(&dim(
        &format!("{} of {} rows HIGH", table.ones().count(), table.len()),
        color,
    ));
    out.push('\n');
    out
}

/// Render the six gate tables
pub fn render_gates(tables: &[TruthTable], color: bool) -> String {
    tables
        .iter()
        .map(|table| {
            let caption = table
                .name
                .parse::<GateKind>()
                .map(|gate| gate.description())
                .ok();
            render_table(table, caption, color)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a single gate's table
pub fn render_gate(gate: GateKind, color: bool) -> Result<String> {
    let table = truth_table(&gate)?;
    Ok(render_table(&table, Some(gate.description()), color))
}

/// Render the circuit formula and its 8-row table
pub fn render_circuit(table: &TruthTable, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&dim("A = authentication valid, B = permission valid, C = emergency alarm", color));
    out.push('\n');
    out.push_str(ACCESS_FORMULA);
    out.push_str("\n\n");
    out.push_str(&render_table(table, Some("access granted when 1"), color));
    out
}

/// Render one scenario: inputs, intermediate wires, verdict
pub fn render_scenario(outcome: &ScenarioOutcome, color: bool) -> String {
    let s = &outcome.scenario;
    let t = &outcome.trace;
    let mut out = String::new();

    let heading = format!("Scenario {}: {}", s.number, s.title);
    out.push_str(&if color { heading.bold().to_string() } else { heading });
    out.push('\n');
    out.push_str(&format!(
        "  inputs:  A={} B={} C={}\n",
        paint_signal(t.a, color),
        paint_signal(t.b, color),
        paint_signal(t.c, color)
    ));
    out.push_str(&format!(
        "  wires:   A AND B = {} | NOT C = {}\n",
        paint_signal(t.authorized, color),
        paint_signal(t.clear, color)
    ));

    let emoji = if color {
        format!("{} ", outcome.verdict.emoji())
    } else {
        String::new()
    };
    out.push_str(&format!(
        "  output:  {} {}{} ({})\n",
        paint_signal(t.output, color),
        emoji,
        paint_verdict(outcome.verdict, color),
        dim(&outcome.reason.to_string(), color)
    ));

    if !outcome.matches_expected {
        let warning = format!("  expected {}, circuit produced {}", s.expected, t.output);
        out.push_str(&if color { warning.yellow().to_string() } else { warning });
        out.push('\n');
    }
    out
}

/// Render every scenario
pub fn render_scenarios(outcomes: &[ScenarioOutcome], color: bool) -> String {
    outcomes
        .iter()
        .map(|outcome| render_scenario(outcome, color))
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// TESTS
// =============================================================================

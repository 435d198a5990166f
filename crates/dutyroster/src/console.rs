//! Colorful console output for solver events.
//!
//! Provides a `tracing` layer that renders the solver's structured events
//! with colors. Enabled by the `console` feature.

use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_DIRECTIVES: [&str; 2] = ["dutyroster_solver=info", "dutyroster=info"];

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect. `RUST_LOG`
/// directives are applied on top of the defaults.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = DEFAULT_DIRECTIVES
            .iter()
            .filter_map(|d| d.parse::<Directive>().ok())
            .fold(EnvFilter::from_default_env(), EnvFilter::add_directive);

        // Another global subscriber may already be installed.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolverConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats solver events with colors.
pub struct SolverConsoleLayer;

impl<S: Subscriber> Layer<S> for SolverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("dutyroster") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(*metadata.level(), &visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout().lock(), "{output}");
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    phase: Option<String>,
    phase_index: Option<u64>,
    duration_ms: Option<u64>,
    steps: Option<u64>,
    step: Option<u64>,
    moves_evaluated: Option<u64>,
    speed: Option<u64>,
    score: Option<String>,
    worker: Option<u64>,
    shift_count: Option<u64>,
    person_count: Option<u64>,
    date: Option<String>,
    available: Option<u64>,
}

impl EventVisitor {
    fn set_text(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "message" => self.message = Some(value),
            "phase" => self.phase = Some(value),
            "score" => self.score = Some(value),
            "date" => self.date = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{value:?}");
        self.set_text(field.name(), s.trim_matches('"').to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field.name(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "phase_index" => self.phase_index = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "steps" => self.steps = Some(value),
            "step" => self.step = Some(value),
            "moves_evaluated" => self.moves_evaluated = Some(value),
            "speed" => self.speed = Some(value),
            "worker" => self.worker = Some(value),
            "shift_count" => self.shift_count = Some(value),
            "person_count" => self.person_count = Some(value),
            "available" => self.available = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }
}

fn format_event(level: Level, v: &EventVisitor) -> String {
    match (level, v.event.as_deref()) {
        (Level::WARN, Some("availability")) => format_availability_warning(v),
        (_, Some("solve_start")) => format_solve_start(v),
        (_, Some("phase_start")) => format_phase_start(v),
        (_, Some("phase_end")) => format_phase_end(v),
        (_, Some("new_best")) => format_new_best(v),
        (_, Some("progress")) => format_progress(v),
        (_, Some("solve_end")) => format_solve_end(v),
        (_, Some("roster_solved")) => format_roster_solved(v),
        _ => String::new(),
    }
}

fn prefix(label: &str) -> String {
    format!(
        "{} {} {}",
        timestamp().bright_black(),
        "INFO".bright_green(),
        format!("[{label}]").bright_cyan()
    )
}

fn format_solve_start(v: &EventVisitor) -> String {
    format!(
        "{} worker ({}) started: shifts ({}), people ({}), slots ({})",
        prefix("Solver"),
        v.worker.unwrap_or(0).to_string().yellow(),
        v.shift_count.unwrap_or(0).bright_yellow(),
        v.person_count.unwrap_or(0).bright_yellow(),
        (v.shift_count.unwrap_or(0) * 2).bright_yellow(),
    )
}

fn format_phase_start(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");
    format!(
        "{} {} phase ({}) started",
        prefix(phase),
        phase.white().bold(),
        v.phase_index.unwrap_or(0).to_string().yellow()
    )
}

fn format_phase_end(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");
    format!(
        "{} {} phase ({}) ended: time spent ({}), best score ({}), \
         move evaluation speed ({}/sec), step total ({})",
        prefix(phase),
        phase.white().bold(),
        v.phase_index.unwrap_or(0).to_string().yellow(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        format_score(v.score.as_deref().unwrap_or("N/A")),
        v.speed
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta()
            .bold(),
        v.steps.unwrap_or(0).to_formatted_string(&Locale::en).white()
    )
}

fn format_new_best(v: &EventVisitor) -> String {
    format!(
        "    {} Step {:>7} | {}",
        "->".bright_blue(),
        v.step.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        format_score(v.score.as_deref().unwrap_or("N/A"))
    )
}

fn format_progress(v: &EventVisitor) -> String {
    format!(
        "    {} {} steps, {}/sec, best {}",
        "..".bright_black(),
        v.steps.unwrap_or(0).to_formatted_string(&Locale::en),
        v.speed.unwrap_or(0).to_formatted_string(&Locale::en),
        format_score(v.score.as_deref().unwrap_or("N/A"))
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    format!(
        "{} worker ({}) ended: best score ({}), moves evaluated ({})",
        prefix("Solver"),
        v.worker.unwrap_or(0).to_string().yellow(),
        format_score(v.score.as_deref().unwrap_or("N/A")),
        v.moves_evaluated
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .white()
    )
}

fn format_availability_warning(v: &EventVisitor) -> String {
    format!(
        "{} {} {} {} has only {} available people",
        timestamp().bright_black(),
        "WARN".bright_yellow(),
        "[Input]".bright_cyan(),
        v.date.as_deref().unwrap_or("?").white().bold(),
        v.available.unwrap_or(0).bright_red()
    )
}

fn format_roster_solved(v: &EventVisitor) -> String {
    let score = v.score.as_deref().unwrap_or("N/A");
    let feasible = score.starts_with("0hard");
    let (status, colored) = if feasible {
        let text = "FEASIBLE ROSTER FOUND";
        (text, format!("  {text}  ").bright_green().bold().to_string())
    } else {
        let text = "INFEASIBLE (hard constraints violated)";
        (text, format!("  {text}  ").bright_red().bold().to_string())
    };

    let border = "═".repeat(58);
    let padding = 56 - status.len() - 4;
    let left = padding / 2;
    let right = padding - left;

    let mut output = String::new();
    output.push('\n');
    output.push_str(&format!("╔{border}╗").bright_cyan().to_string());
    output.push('\n');
    output.push_str(&format!(
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left),
        colored,
        " ".repeat(right),
        "║".bright_cyan()
    ));
    output.push('\n');
    output.push_str(&format!("╠{border}╣").bright_cyan().to_string());
    output.push('\n');
    output.push_str(&format!(
        "{}  {:<18}{:>36}  {}",
        "║".bright_cyan(),
        "Final Score:",
        score,
        "║".bright_cyan()
    ));
    output.push('\n');
    output.push_str(&format!("╚{border}╝").bright_cyan().to_string());
    output.push('\n');
    output
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| format!("{:5}.{:03}", d.as_secs() % 100_000, d.subsec_millis()))
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        format!("{}m {}s", ms / 60_000, (ms % 60_000) / 1000)
    }
}

/// Colors a `"2hard/4.25soft"` penalty score: any penalty is highlighted.
fn format_score(score: &str) -> String {
    let Some((hard, soft)) = score.split_once('/') else {
        return score.white().to_string();
    };
    let hard_num: f64 = hard.trim_end_matches("hard").parse().unwrap_or(0.0);
    let soft_num: f64 = soft.trim_end_matches("soft").parse().unwrap_or(0.0);

    let hard = if hard_num > 0.0 {
        hard.bright_red().to_string()
    } else {
        hard.bright_green().to_string()
    };
    let soft = if soft_num > 0.0 {
        soft.yellow().to_string()
    } else {
        soft.bright_green().to_string()
    };
    format!("{hard}/{soft}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_format_score_keeps_text() {
        let formatted = format_score("2hard/4.25soft");
        assert!(formatted.contains("2hard"));
        assert!(formatted.contains("4.25soft"));
        assert!(format_score("N/A").contains("N/A"));
    }

    #[test]
    fn test_unknown_events_are_silent() {
        let v = EventVisitor {
            event: Some("step".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(Level::TRACE, &v).is_empty());
    }

    #[test]
    fn test_init_twice() {
        init();
        init();
    }
}

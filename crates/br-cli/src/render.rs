//! Turning a finished roll into terminal output.
//!
//! Action rolls show position and effect; resistance rolls show the
//! stress they cost.

use colored::{ColoredString, Colorize};

use br_mechanics::{RollKind, RollReport, RollStatus, Stress};

/// Render a roll as a short chat-style message.
pub fn render_report(report: &RollReport) -> String {
    let mut out = String::new();

    let dice = report
        .dice
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let title = if report.attribute_label.is_empty() {
        "Roll".to_string()
    } else {
        report.attribute_label.clone()
    };
    out.push_str(&format!("  {}  [{dice}]", title.as_str().bold()));
    if report.zero_mode {
        out.push_str(&format!(" {}", "(0d: lowest of 2)".dimmed()));
    }
    out.push('\n');

    out.push_str(&format!("  {}\n", headline(report.status)));

    match report.kind {
        RollKind::Action { position, effect } => {
            out.push_str(&format!(
                "  Position: {} | Effect: {}\n",
                position.label(),
                effect.label()
            ));
        }
        RollKind::Resistance { stress } => {
            out.push_str(&format!("  {}\n", stress_line(stress)));
        }
    }

    out
}

fn headline(status: RollStatus) -> ColoredString {
    let label = status.label();
    match status {
        RollStatus::CriticalSuccess => label.bright_green().bold(),
        RollStatus::Success => label.green().bold(),
        RollStatus::PartialSuccess => label.yellow().bold(),
        RollStatus::Failure => label.red().bold(),
    }
}

fn stress_line(stress: Stress) -> String {
    match stress {
        Stress::None => "No stress".to_string(),
        Stress::Points(n) => format!("Take {n} stress"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use br_mechanics::{Effect, Position};

    fn plain(report: &RollReport) -> String {
        colored::control::set_override(false);
        render_report(report)
    }

    fn report(dice: Vec<u32>, zero_mode: bool, status: RollStatus, kind: RollKind) -> RollReport {
        RollReport {
            dice,
            zero_mode,
            status,
            kind,
            attribute: String::new(),
            attribute_label: String::new(),
        }
    }

    #[test]
    fn action_message() {
        let mut r = report(
            vec![2, 5],
            false,
            RollStatus::PartialSuccess,
            RollKind::Action {
                position: Position::Desperate,
                effect: Effect::Great,
            },
        );
        r.attribute = "hack".to_string();
        r.attribute_label = "Hack".to_string();

        let text = plain(&r);
        assert!(text.contains("Hack  [2, 5]"));
        assert!(text.contains("Partial Success"));
        assert!(text.contains("Position: Desperate | Effect: Great"));
        assert!(!text.contains("stress"));
    }

    #[test]
    fn resistance_message() {
        let r = report(
            vec![3],
            false,
            RollStatus::Failure,
            RollKind::Resistance {
                stress: Stress::Points(3),
            },
        );
        let text = plain(&r);
        assert!(text.contains("Roll  [3]"));
        assert!(text.contains("Failure"));
        assert!(text.contains("Take 3 stress"));
    }

    #[test]
    fn critical_resistance_costs_nothing() {
        let r = report(
            vec![6, 6],
            true,
            RollStatus::CriticalSuccess,
            RollKind::Resistance {
                stress: Stress::None,
            },
        );
        let text = plain(&r);
        assert!(text.contains("(0d: lowest of 2)"));
        assert!(text.contains("Critical Success"));
        assert!(text.contains("No stress"));
    }

    #[test]
    fn stress_lines() {
        assert_eq!(stress_line(Stress::Points(0)), "Take 0 stress");
        assert_eq!(stress_line(Stress::Points(1)), "Take 1 stress");
        assert_eq!(stress_line(Stress::None), "No stress");
    }
}

//! Text report for terminal output.

use std::fmt;

use colored::{ColoredString, Colorize};

use jsoncmp_core::{DiffEntry, DiffKind, DiffResult, JsonValue, LineKind};

/// Placeholder for a side that has no value.
const ABSENT: &str = "—";

/// Human-readable rendering of a [`DiffResult`].
pub struct TextReport<'a>(pub &'a DiffResult);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        let count = result.differences.len();

        if count == 0 {
            writeln!(f, "{}", "No differences detected".green().bold())?;
            writeln!(f, "The expected and actual JSON blocks match.")?;
            return Ok(());
        }

        let plural = if count == 1 { "" } else { "s" };
        let summary = format!(
            "{count} difference{plural} found (+{} -{} lines)",
            result.additions, result.deletions
        );
        writeln!(f, "{}", summary.yellow().bold())?;

        if !result.unified_diff.is_empty() {
            writeln!(f, "\n{}", "Unified Diff".bold())?;
            for line in result.unified_diff.lines() {
                writeln!(f, "{}", color_line(line))?;
            }
        }

        writeln!(f, "\n{}", "Differences".bold())?;
        for entry in &result.differences {
            write_entry(f, entry)?;
        }
        Ok(())
    }
}

pub fn render_text(result: &DiffResult) -> String {
    TextReport(result).to_string()
}

fn write_entry(f: &mut fmt::Formatter<'_>, entry: &DiffEntry) -> fmt::Result {
    let label = entry.kind().label();
    let label = match entry.kind() {
        DiffKind::Missing => label.blue(),
        DiffKind::Extra => label.green(),
        DiffKind::Mismatch => label.yellow(),
    };
    writeln!(f, "  {}  [{}]", entry.path().to_string().bold(), label)?;
    writeln!(f, "    expected: {}", indent(&display_value(entry.expected())))?;
    writeln!(f, "    actual:   {}", indent(&display_value(entry.actual())))
}

fn color_line(line: &str) -> ColoredString {
    match LineKind::of(line) {
        LineKind::Header => line.dimmed(),
        LineKind::Hunk => line.cyan(),
        LineKind::Added => line.green(),
        LineKind::Removed => line.red(),
        LineKind::Context => line.normal(),
    }
}

/// Strings are shown raw, other values as pretty JSON.
fn display_value(value: Option<&JsonValue>) -> String {
    match value {
        None => ABSENT.to_string(),
        Some(JsonValue::String(s)) => s.clone(),
        Some(other) => other
            .to_pretty_string()
            .unwrap_or_else(|_| other.to_string()),
    }
}

/// Align continuation lines of multi-line values under the first line.
fn indent(text: &str) -> String {
    text.replace('\n', "\n              ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsoncmp_core::analyze;

    #[test]
    fn clean_report() {
        let result = analyze(r#"{"expected": {"a": 1}, "actual": {"a": 1}}"#, None).unwrap();
        let text = render_text(&result);
        assert!(text.contains("No differences detected"));
        assert!(!text.contains("Unified Diff"));
    }

    #[test]
    fn report_lists_entries() {
        let payload = r#"{"expected": {"item": {"price": 5}}, "actual": {"item": {"price": 7, "discount": 1}}}"#;
        let result = analyze(payload, None).unwrap();
        let text = render_text(&result);

        assert!(text.contains("2 differences found"));
        assert!(text.contains("Unified Diff"));
        assert!(text.contains("--- expected.json"));
        assert!(text.contains("item.price"));
        assert!(text.contains("Value mismatch"));
        assert!(text.contains("item.discount"));
        assert!(text.contains("Extra in actual"));
    }

    #[test]
    fn single_difference_is_singular() {
        let result = analyze(r#"{"expected": 1, "actual": 2}"#, None).unwrap();
        let text = render_text(&result);
        assert!(text.contains("1 difference found (+1 -1 lines)"));
        assert!(text.contains("root"));
    }

    #[test]
    fn value_display() {
        assert_eq!(display_value(None), "—");
        assert_eq!(display_value(Some(&JsonValue::from("USD"))), "USD");
        assert_eq!(display_value(Some(&JsonValue::Number(7.0))), "7");
        assert_eq!(display_value(Some(&JsonValue::Null)), "null");
    }

    #[test]
    fn multi_line_values_are_indented() {
        let value = JsonValue::parse(r#"{"a": 1}"#).unwrap();
        let shown = indent(&display_value(Some(&value)));
        assert_eq!(shown, "{\n                \"a\": 1\n              }");
    }
}

//! Terminal rendering of computation results

use crate::application::ResultView;
use crate::cli::output;
use crate::domain::{BinaryString, ComputationResult, Steps};

/// Split bits into space-separated groups counted from the least-significant end.
///
/// A `size` of 0 leaves the bits untouched.
pub fn group_bits(bits: &str, size: usize) -> String {
    if size == 0 || bits.len() <= size {
        return bits.to_string();
    }
    let head = bits.len() % size;
    let mut grouped = String::with_capacity(bits.len() + bits.len() / size);
    for (i, c) in bits.chars().enumerate() {
        if i > 0 && (i + size - head) % size == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

/// The six labelled result slots, in display order.
pub fn result_rows(result: &ComputationResult, group_size: usize) -> Vec<(&'static str, String)> {
    let bits = |b: &BinaryString| group_bits(b.as_str(), group_size);
    vec![
        ("Binary", bits(result.normalized())),
        ("Decimal", result.decimal().to_string()),
        ("1's complement", bits(result.ones_complement())),
        ("1's decimal", result.ones_decimal().to_string()),
        ("2's complement", bits(result.twos_complement())),
        ("2's decimal", result.twos_decimal().to_string()),
    ]
}

/// Step-by-step explanation lines.
pub fn step_lines(steps: &Steps, group_size: usize) -> Vec<String> {
    let bits = |b: &BinaryString| group_bits(b.as_str(), group_size);
    vec![
        format!("1. Original:        {}", bits(&steps.original)),
        format!("2. Invert all bits: {}", bits(&steps.ones_complement)),
        format!(
            "3. Add 1:           {} + 1 = {}",
            bits(&steps.ones_complement),
            bits(&steps.twos_complement)
        ),
    ]
}

/// [`ResultView`] printing to the terminal.
#[derive(Debug, Default)]
pub struct TerminalView {
    group_size: usize,
}

impl TerminalView {
    pub fn new(group_size: usize) -> Self {
        Self { group_size }
    }
}

impl ResultView for TerminalView {
    fn show_result(&mut self, result: &ComputationResult) {
        let rows = result_rows(result, self.group_size);
        let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        output::header("Results");
        for (label, value) in &rows {
            output::field(label, width, value);
        }
    }

    fn show_steps(&mut self, steps: &Steps) {
        output::header("Steps");
        for line in step_lines(steps, self.group_size) {
            output::detail(&line);
        }
    }

    fn show_error(&mut self, message: &str) {
        // nothing to hide: earlier output has already scrolled by
        output::error(message);
    }

    // printed errors stay in the scrollback
    fn clear_error(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::compute;
    use rstest::rstest;

    #[rstest]
    #[case("1011", 0, "1011")]
    #[case("1011", 4, "1011")]
    #[case("110110", 4, "11 0110")]
    #[case("10110110", 4, "1011 0110")]
    #[case("1101101", 3, "1 101 101")]
    #[case("1", 1, "1")]
    #[case("101", 1, "1 0 1")]
    fn given_bits_when_grouping_then_groups_from_lsb(
        #[case] bits: &str,
        #[case] size: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(group_bits(bits, size), expected);
    }

    #[test]
    fn given_result_when_rendering_rows_then_six_slots_in_order() {
        let rows = result_rows(&compute("101").unwrap(), 0);
        let values: Vec<&str> = rows.iter().map(|(_, v)| v.as_str()).collect();
        assert_eq!(values, ["101", "5", "010", "2", "011", "3"]);
    }

    #[test]
    fn given_steps_when_rendering_then_shows_addition() {
        let lines = step_lines(&compute("0").unwrap().steps(), 0);
        assert_eq!(lines.len(), 3);
        assert!(lines[2].ends_with("1 + 1 = 10"));
    }
}

//! Help table listing every pairing's result.

use super::{CyclicRules, Outcome};
use std::fmt;

const CORNER: &str = "PC \\ User";

/// Caption printed under the table
pub const PERSPECTIVE_NOTE: &str = "Rows are the computer's move, columns are yours; cells show your result.";

/// Table of results with one row per computer move and one column per user move
pub struct HelpMatrix<'a> {
    rules: &'a CyclicRules,
}

impl<'a> HelpMatrix<'a> {
    pub fn new(rules: &'a CyclicRules) -> Self {
        Self { rules }
    }

    /// Cell text, from the user's point of view
    pub fn cell(outcome: Outcome) -> &'static str {
        match outcome {
            Outcome::Draw => "Draw",
            Outcome::UserWins => "Win",
            Outcome::ComputerWins => "Lose",
        }
    }

    fn rows(&self) -> Vec<Vec<&str>> {
        let moves = self.rules.moves();
        let mut rows = Vec::with_capacity(moves.len() + 1);

        rows.push(std::iter::once(CORNER).chain(moves.iter()).collect());
        for (label, outcomes) in moves.iter().zip(self.rules.matrix()) {
            rows.push(
                std::iter::once(label)
                    .chain(outcomes.into_iter().map(|o| -> &str { Self::cell(o) }))
                    .collect(),
            );
        }
        rows
    }
}

impl fmt::Display for HelpMatrix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();
        let columns = rows.first().map_or(0, Vec::len);
        let widths: Vec<usize> = (0..columns)
            .map(|c| rows.iter().map(|r| r[c].chars().count()).max().unwrap_or(0))
            .collect();

        let border: String = widths
            .iter()
            .map(|w| format!("+{}", "-".repeat(w + 2)))
            .collect::<String>()
            + "+";

        writeln!(f, "{border}")?;
        for (i, row) in rows.iter().enumerate() {
            for (cell, &width) in row.iter().zip(&widths) {
                write!(f, "| {cell:<width$} ")?;
            }
            writeln!(f, "|")?;
            if i == 0 {
                writeln!(f, "{border}")?;
            }
        }
        writeln!(f, "{border}")?;
        write!(f, "{PERSPECTIVE_NOTE}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::MoveSet;

    fn classic() -> CyclicRules {
        CyclicRules::new(MoveSet::validate(["rock", "paper", "scissors"]).unwrap())
    }

    #[test]
    fn test_classic_table_layout() {
        let rules = classic();
        let rendered = HelpMatrix::new(&rules).to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines,
            vec![
                "+-----------+------+-------+----------+",
                "| PC \\ User | rock | paper | scissors |",
                "+-----------+------+-------+----------+",
                "| rock      | Draw | Win   | Lose     |",
                "| paper     | Lose | Draw  | Win      |",
                "| scissors  | Win  | Lose  | Draw     |",
                "+-----------+------+-------+----------+",
                PERSPECTIVE_NOTE,
            ]
        );
    }

    #[test]
    fn test_cells_agree_with_rules_engine() {
        let labels: Vec<String> = (0..5).map(|i| format!("m{i}")).collect();
        let rules = CyclicRules::new(MoveSet::validate(labels).unwrap());
        let rendered = HelpMatrix::new(&rules).to_string();

        let body: Vec<Vec<String>> = rendered
            .lines()
            .skip(3)
            .take(5)
            .map(|line| {
                line.split('|')
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .collect()
            })
            .collect();

        for (computer, row) in body.iter().enumerate() {
            for user in 0..5 {
                let expected = HelpMatrix::cell(rules.resolve_indices(user, computer));
                assert_eq!(row[user + 1], expected);
            }
        }
    }

    #[test]
    fn test_forward_half_cycle_is_a_win() {
        // Row i, column j: Win when j sits within the half-cycle after i.
        let labels: Vec<String> = (0..7).map(|i| format!("m{i}")).collect();
        let rules = CyclicRules::new(MoveSet::validate(labels).unwrap());
        let grid = rules.matrix();
        for i in 0..7 {
            for j in 0..7 {
                let ahead = (j + 7 - i) % 7;
                let expected = match ahead {
                    0 => "Draw",
                    1..=3 => "Win",
                    _ => "Lose",
                };
                assert_eq!(HelpMatrix::cell(grid[i][j]), expected, "i={i} j={j}");
            }
        }
    }
}

use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Counters accumulated over one `solve` call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchStats {
    /// Search-tree nodes entered (including the root).
    pub nodes_visited: u64,
    /// Candidate values abandoned after a failed branch.
    pub backtracks: u64,
    /// Arc revisions performed by AC-3.
    pub revisions: u64,
    /// Revisions that removed at least one value.
    pub prunings: u64,
    /// Whether the search was cut off by a [`SearchBudget`] before the tree
    /// was exhausted.
    ///
    /// [`SearchBudget`]: crate::solver::budget::SearchBudget
    pub budget_exhausted: bool,
}

pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Count")]));
    table.add_row(Row::new(vec![
        Cell::new("Nodes visited"),
        Cell::new(&stats.nodes_visited.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Backtracks"),
        Cell::new(&stats.backtracks.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Arc revisions"),
        Cell::new(&stats.revisions.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Prunings"),
        Cell::new(&stats.prunings.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Budget exhausted"),
        Cell::new(&stats.budget_exhausted.to_string()),
    ]));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_counter() {
        let stats = SearchStats {
            nodes_visited: 12,
            backtracks: 3,
            revisions: 40,
            prunings: 7,
            budget_exhausted: false,
        };
        let rendered = render_stats_table(&stats);
        assert!(rendered.contains("Nodes visited"));
        assert!(rendered.contains("12"));
        assert!(rendered.contains("Backtracks"));
        assert!(rendered.contains("Arc revisions"));
    }
}

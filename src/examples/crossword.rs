//! The crossword-filling instance: slots carved out of a structure grid,
//! candidate words as domains, and shared-cell crossings as the binary
//! constraints.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    solver::{
        constraints::overlap::OverlapConstraint,
        domains::Domains,
        engine::SolverEngine,
        graph::{ConstraintGraph, GraphBuilder, VariableId},
        semantics::ProblemSemantics,
        stats::SearchStats,
    },
};

/// The character marking a fillable cell in a structure grid. Every other
/// character is a blocked cell.
pub const OPEN_CELL: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

/// A word slot in the grid: where it starts, which way it runs, and how
/// many letters it takes.
///
/// Slots are the variables of the crossword CSP. Two slots are the same
/// variable exactly when all four fields match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Slot {
    /// The grid cells this slot covers, in word order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |k| match self.direction {
            Direction::Across => (self.row, self.col + k),
            Direction::Down => (self.row + k, self.col),
        })
    }
}

/// Problem semantics for crossword filling: values are candidate words,
/// tags are slots, and a word is admissible for a slot when the lengths
/// match.
///
/// Word lists are uppercased ASCII; lengths and crossing offsets are in
/// bytes.
#[derive(Debug)]
pub struct CrosswordSemantics;

impl ProblemSemantics for CrosswordSemantics {
    type Value = String;
    type VariableTag = Slot;

    fn admits(&self, slot: &Slot, word: &String) -> bool {
        word.len() == slot.length
    }

    fn check_variable(&self, slot: &Slot) -> Result<(), String> {
        if slot.length == 0 {
            return Err("slot has zero length".to_string());
        }
        Ok(())
    }
}

/// A crossword puzzle: the structure grid, the slots found in it, and the
/// candidate word list.
#[derive(Debug)]
pub struct Crossword {
    height: usize,
    width: usize,
    grid: Vec<Vec<bool>>,
    slots: Vec<Slot>,
    words: Vec<String>,
}

impl Crossword {
    /// Parses a structure grid and a word list into a puzzle.
    ///
    /// In the grid text, [`OPEN_CELL`] marks a fillable cell and anything
    /// else a blocked one; short rows are padded with blocked cells to the
    /// widest row. Slots are the maximal horizontal and vertical runs of
    /// at least two open cells. Words are trimmed, uppercased, and
    /// deduplicated.
    pub fn parse<I, W>(structure: &str, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let rows: Vec<&str> = structure.lines().collect();
        let width = rows
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0);
        if rows.is_empty() || width == 0 {
            return Err(Error::EmptyStructure);
        }

        let grid: Vec<Vec<bool>> = rows
            .iter()
            .map(|row| {
                let mut cells: Vec<bool> = row.chars().map(|c| c == OPEN_CELL).collect();
                cells.resize(width, false);
                cells
            })
            .collect();

        let slots = scan_slots(&grid);

        let mut seen = std::collections::HashSet::new();
        let mut word_list = Vec::new();
        for word in words {
            let word = word.as_ref().trim().to_uppercase();
            if !word.is_empty() && seen.insert(word.clone()) {
                word_list.push(word);
            }
        }

        Ok(Self {
            height: grid.len(),
            width,
            grid,
            slots,
            words: word_list,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Builds the constraint graph and the initial domains.
    ///
    /// Every slot starts with the entire word list as its domain; node
    /// consistency narrows it by length once the engine runs. Crossings are
    /// computed from slot geometry: each cell shared by two slots becomes
    /// an overlap constraint on the respective word offsets. The
    /// no-repeated-words rule is registered on the graph.
    pub fn build(&self) -> Result<(ConstraintGraph<CrosswordSemantics>, Domains<String>)> {
        let mut builder = GraphBuilder::new(Arc::new(CrosswordSemantics));
        let ids: Vec<VariableId> = self
            .slots
            .iter()
            .map(|&slot| builder.add_variable(slot))
            .collect();

        let mut cell_index: HashMap<(usize, usize), Vec<(usize, usize)>> = HashMap::new();
        for (slot_index, slot) in self.slots.iter().enumerate() {
            for (offset, cell) in slot.cells().enumerate() {
                cell_index.entry(cell).or_default().push((slot_index, offset));
            }
        }
        for sharers in cell_index.values() {
            for (first, &(i, ours)) in sharers.iter().enumerate() {
                for &(j, theirs) in &sharers[first + 1..] {
                    builder.add_constraint(
                        ids[i],
                        ids[j],
                        Box::new(OverlapConstraint::new(ours, theirs)),
                    );
                }
            }
        }
        builder.require_distinct_values();

        let graph = builder.build()?;
        let mut domains = Domains::new();
        for &id in &ids {
            domains.seed(id, self.words.iter().cloned());
        }
        Ok((graph, domains))
    }

    /// Fills the puzzle, returning one word per slot or `None` when the
    /// word list cannot fill this grid.
    pub fn fill(&self) -> Result<(Option<HashMap<Slot, String>>, SearchStats)> {
        let (graph, domains) = self.build()?;
        let engine = SolverEngine::default();
        let (solution, stats) = engine.solve(&graph, domains);
        let fill = solution.map(|assignment| {
            assignment
                .iter()
                .map(|(&id, word)| (*graph.tag(id), word.clone()))
                .collect()
        });
        Ok((fill, stats))
    }

    /// Renders a fill as grid text: letters on open cells, `█` on blocked
    /// ones. Cells not covered by any filled slot come out blank.
    pub fn render(&self, fill: &HashMap<Slot, String>) -> String {
        let mut letters = vec![vec![None; self.width]; self.height];
        for (slot, word) in fill {
            for (k, (row, col)) in slot.cells().enumerate() {
                letters[row][col] = word.chars().nth(k);
            }
        }

        let mut out = String::new();
        for row in 0..self.height {
            for col in 0..self.width {
                if self.grid[row][col] {
                    out.push(letters[row][col].unwrap_or(' '));
                } else {
                    out.push('█');
                }
            }
            out.push('\n');
        }
        out
    }
}

/// Finds the maximal open runs of length at least two, across then down.
fn scan_slots(grid: &[Vec<bool>]) -> Vec<Slot> {
    let height = grid.len();
    let width = grid.first().map_or(0, |row| row.len());
    let mut slots = Vec::new();

    for row in 0..height {
        let mut col = 0;
        while col < width {
            if grid[row][col] {
                let mut length = 1;
                while col + length < width && grid[row][col + length] {
                    length += 1;
                }
                if length >= 2 {
                    slots.push(Slot {
                        row,
                        col,
                        direction: Direction::Across,
                        length,
                    });
                }
                col += length;
            } else {
                col += 1;
            }
        }
    }

    for col in 0..width {
        let mut row = 0;
        while row < height {
            if grid[row][col] {
                let mut length = 1;
                while row + length < height && grid[row + length][col] {
                    length += 1;
                }
                if length >= 2 {
                    slots.push(Slot {
                        row,
                        col,
                        direction: Direction::Down,
                        length,
                    });
                }
                row += length;
            } else {
                row += 1;
            }
        }
    }

    slots
}

//! Single-agent boustrophedon planner.
//!
//! [`SweepPlanner`] walks one agent across its sub-grid row by row: a full
//! horizontal pass, one row in the current vertical phase, a pass back, and
//! so on. When the sweep reaches its end position the vertical phase flips
//! and the agent works its way back toward the local origin, where the phase
//! flips again. The planner never terminates on its own except for the
//! single-cell sub-grid, which is searched once.
//!
//! Actions are pulled one at a time through [`Iterator::next`]; the planner
//! resumes exactly where it stopped on the previous pull.

use std::iter::FusedIterator;

use tracing::trace;

use super::config::SweepConfig;
use super::types::{Action, Cell, HorizontalDirection, SweepPhase};

/// What the next pull produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// First pull: checks for the degenerate single-cell sweep.
    Start,
    /// Search the current cell.
    Search,
    /// Move one column in the current direction.
    Horizontal,
    /// Move one row in the current phase.
    Vertical,
    /// Degenerate sweep finished; nothing more is produced.
    Halted,
}

/// Pull-based action producer for one agent's sub-grid.
#[derive(Debug, Clone)]
pub struct SweepPlanner {
    config: SweepConfig,
    end_position: Cell,
    position: Cell,
    phase: SweepPhase,
    direction: HorizontalDirection,
    stage: Stage,
}

impl SweepPlanner {
    /// Creates a planner positioned at the configuration's initial cell,
    /// sweeping down and to the right.
    pub fn new(config: SweepConfig) -> Self {
        let end_position = config.end_position();
        Self {
            position: config.initial_position(),
            end_position,
            config,
            phase: SweepPhase::SweepingDown,
            direction: HorizontalDirection::Right,
            stage: Stage::Start,
        }
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Current local cell.
    pub fn position(&self) -> Cell {
        self.position
    }

    /// Cell at which the downward sweep turns around.
    pub fn end_position(&self) -> Cell {
        self.end_position
    }

    pub fn phase(&self) -> SweepPhase {
        self.phase
    }

    pub fn direction(&self) -> HorizontalDirection {
        self.direction
    }

    /// Checks whether the current cell is the turnaround point of the
    /// current phase, flipping the phase when it is.
    ///
    /// Sweeping down, the turnaround is the end position; sweeping up, it is
    /// the local origin. This is the only place the phase changes, so call it
    /// once per candidate position.
    pub fn is_at_turnaround(&mut self) -> bool {
        let turnaround = match self.phase {
            SweepPhase::SweepingDown => self.end_position,
            SweepPhase::SweepingUp => Cell::origin(),
        };
        let reached = self.position == turnaround;
        if reached {
            self.phase = self.phase.flipped();
            trace!(position = %self.position, phase = ?self.phase, "sweep turnaround");
        }
        reached
    }

    /// Consumes the planner, yielding wire codes instead of actions.
    pub fn codes(self) -> impl Iterator<Item = u8> {
        self.map(Action::code)
    }

    fn at_column_boundary(&self) -> bool {
        match self.direction {
            HorizontalDirection::Right => self.position.col == self.config.grid_size() as i64 - 1,
            HorizontalDirection::Left => self.position.col == 0,
        }
    }

    fn move_horizontally(&mut self) -> Action {
        let action = self.direction.action();
        self.position = self.position.moved(action);
        self.stage = Stage::Search;
        if self.at_column_boundary() {
            self.direction = self.direction.flipped();
            if !self.is_at_turnaround() {
                self.stage = Stage::Vertical;
            }
        }
        action
    }

    fn move_vertically(&mut self) -> Action {
        let action = self.phase.vertical_action();
        self.position = self.position.moved(action);
        self.stage = Stage::Search;
        action
    }

    /// A one-column sweep has no horizontal leg. At a turnaround the cell is
    /// searched again before the reverse leg starts.
    fn advance_single_column(&mut self) -> Action {
        if self.is_at_turnaround() {
            Action::Search
        } else {
            self.move_vertically()
        }
    }
}

impl Iterator for SweepPlanner {
    type Item = Action;

    fn next(&mut self) -> Option<Action> {
        let action = match self.stage {
            Stage::Halted => return None,
            Stage::Start => {
                self.stage = if self.is_at_turnaround() {
                    Stage::Halted
                } else {
                    Stage::Horizontal
                };
                Action::Search
            }
            Stage::Search => {
                self.stage = Stage::Horizontal;
                Action::Search
            }
            Stage::Horizontal if self.config.grid_size() == 1 => self.advance_single_column(),
            Stage::Horizontal => self.move_horizontally(),
            Stage::Vertical => self.move_vertically(),
        };
        Some(action)
    }
}

impl FusedIterator for SweepPlanner {}

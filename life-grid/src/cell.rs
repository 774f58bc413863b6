/// A single grid cell: current state plus a staged next state.
///
/// The staged value is only meaningful between the compute and commit phases
/// of a [`Grid::step`](crate::Grid::step); `commit` always clears it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Cell {
    alive: bool,
    next: bool,
}

impl Cell {
    pub fn new(alive: bool) -> Self {
        Self { alive, next: false }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Overwrites the current state immediately (manual edits, initialization).
    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    pub fn next_state(&self) -> bool {
        self.next
    }

    /// Stages the next state without touching the current one.
    pub fn set_next_state(&mut self, state: bool) {
        self.next = state;
    }

    /// Clears any stale staged value without touching the current state.
    pub fn reset_next_state(&mut self) {
        self.next = false;
    }

    /// Moves the staged state into the current state and clears the stage.
    pub fn commit(&mut self) {
        self.alive = self.next;
        self.next = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_dead_with_nothing_staged() {
        let cell = Cell::default();
        assert!(!cell.is_alive());
        assert!(!cell.next_state());
    }

    #[test]
    fn staging_does_not_touch_current_state() {
        let mut cell = Cell::new(false);
        cell.set_next_state(true);
        assert!(!cell.is_alive());
        assert!(cell.next_state());
    }

    #[test]
    fn commit_applies_and_clears_the_stage() {
        let mut cell = Cell::new(false);
        cell.set_next_state(true);
        cell.commit();
        assert!(cell.is_alive());
        assert!(!cell.next_state());
    }

    #[test]
    fn second_commit_without_staging_kills_the_cell() {
        let mut cell = Cell::new(false);
        cell.set_next_state(true);
        cell.commit();
        cell.commit();
        assert!(!cell.is_alive());
    }

    #[test]
    fn reset_next_state_leaves_current_state_alone() {
        let mut cell = Cell::new(true);
        cell.set_next_state(true);
        cell.reset_next_state();
        assert!(cell.is_alive());
        assert!(!cell.next_state());
    }
}

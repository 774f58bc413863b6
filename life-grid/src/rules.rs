/// Rule table mapping (current state, live neighbor count) to the next state.
///
/// A pure function: growth and commit logic never depend on which table is
/// active.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Ruleset {
    /// Conway's classic rules: a live cell survives with 2 or 3 live
    /// neighbors; a dead cell comes alive with exactly 3.
    #[default]
    Classic,
    /// Variant rules: a live cell survives with 2 or 4 live neighbors; a dead
    /// cell comes alive with 3 or 4.
    Alternative,
}

impl Ruleset {
    pub fn next_state(self, alive: bool, live_neighbors: u8) -> bool {
        match (self, alive) {
            (Self::Classic, true) => live_neighbors == 2 || live_neighbors == 3,
            (Self::Classic, false) => live_neighbors == 3,
            (Self::Alternative, true) => live_neighbors == 2 || live_neighbors == 4,
            (Self::Alternative, false) => live_neighbors == 3 || live_neighbors == 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_live_cell_survives_only_on_2_or_3() {
        for n in 0..=8 {
            let expected = n == 2 || n == 3;
            assert_eq!(Ruleset::Classic.next_state(true, n), expected, "n = {n}");
        }
    }

    #[test]
    fn classic_dead_cell_births_only_on_3() {
        for n in 0..=8 {
            assert_eq!(Ruleset::Classic.next_state(false, n), n == 3, "n = {n}");
        }
    }

    #[test]
    fn alternative_live_cell_survives_only_on_2_or_4() {
        for n in 0..=8 {
            let expected = n == 2 || n == 4;
            assert_eq!(
                Ruleset::Alternative.next_state(true, n),
                expected,
                "n = {n}"
            );
        }
    }

    #[test]
    fn alternative_dead_cell_births_only_on_3_or_4() {
        for n in 0..=8 {
            let expected = n == 3 || n == 4;
            assert_eq!(
                Ruleset::Alternative.next_state(false, n),
                expected,
                "n = {n}"
            );
        }
    }
}

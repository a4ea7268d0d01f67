/// State of a single grid square.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// The opposite state; applying it twice is the identity
    pub const fn toggle(self) -> Self {
        if self.is_alive() { Cell::Dead } else { Cell::Alive }
    }

    /// State in the next generation given `neighbors` live Moore neighbors.
    ///
    /// Birth needs exactly three; survival needs two or three (B3/S23).
    pub const fn evolve(self, neighbors: u8) -> Self {
        let alive = match self {
            Cell::Alive => neighbors == 2 || neighbors == 3,
            Cell::Dead => neighbors == 3,
        };
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

use rand::Rng;

/// Toroidal boolean grid with three generation buffers.
///
/// The buffers rotate by index on every step: the scratch buffer receives the
/// new generation and becomes current, the old current becomes previous, and
/// the old previous is reused as scratch. Cell contents are never copied.
pub struct LifeGrid {
    rows: usize,
    cols: usize,
    buffers: [Vec<bool>; 3],
    current: usize,
}

/// Next state of a cell given its state and live neighbor count.
#[inline]
pub fn next_state(alive: bool, neighbors: u32) -> bool {
    if alive {
        if neighbors < 2 {
            false
        } else {
            neighbors < 4
        }
    } else {
        neighbors == 3
    }
}

impl LifeGrid {
    /// Create an all-dead grid. Both dimensions must be non-zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        let cell_count = rows * cols;
        Self {
            rows,
            cols,
            buffers: [
                vec![false; cell_count],
                vec![false; cell_count],
                vec![false; cell_count],
            ],
            current: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    fn previous_slot(&self) -> usize {
        (self.current + 2) % 3
    }

    #[inline]
    fn next_slot(&self) -> usize {
        (self.current + 1) % 3
    }

    /// Current generation, row-major.
    pub fn current(&self) -> &[bool] {
        &self.buffers[self.current]
    }

    /// Generation before the current one, row-major.
    pub fn previous(&self) -> &[bool] {
        &self.buffers[self.previous_slot()]
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.buffers[self.current][self.offset(row, col)]
    }

    pub fn was_alive(&self, row: usize, col: usize) -> bool {
        self.buffers[self.previous_slot()][self.offset(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let i = self.offset(row, col);
        self.buffers[self.current][i] = alive;
    }

    pub fn clear(&mut self) {
        self.buffers[self.current].fill(false);
    }

    pub fn population(&self) -> usize {
        self.current().iter().filter(|&&alive| alive).count()
    }

    /// Randomize a `height × width` block of the current generation starting
    /// at `(row, col)`, wrapping past the edges. Each cell comes up alive with
    /// probability `1 / probability`.
    pub fn seed<R: Rng>(
        &mut self,
        rng: &mut R,
        row: usize,
        col: usize,
        height: usize,
        width: usize,
        probability: u32,
    ) {
        for r in row..row + height {
            for c in col..col + width {
                let alive = rng.gen_range(0..probability) == 0;
                self.set(r % self.rows, c % self.cols, alive);
            }
        }
    }

    /// Randomize the whole current generation.
    pub fn seed_all<R: Rng>(&mut self, rng: &mut R, probability: u32) {
        self.seed(rng, 0, 0, self.rows, self.cols, probability);
    }

    /// Live cells among the 8 toroidal neighbors of `(row, col)`. On grids
    /// narrower than 3 a neighbor position can land back on the cell itself;
    /// such positions are skipped.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u32 {
        let cells = self.current();
        let mut count = 0;
        for dr in 0..3 {
            let nr = (row + self.rows + dr - 1) % self.rows;
            for dc in 0..3 {
                let nc = (col + self.cols + dc - 1) % self.cols;
                if (nr != row || nc != col) && cells[self.offset(nr, nc)] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Compute the next generation into the scratch buffer and rotate.
    pub fn step(&mut self) {
        let next = self.next_slot();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let alive = next_state(self.is_alive(row, col), self.live_neighbors(row, col));
                let i = self.offset(row, col);
                self.buffers[next][i] = alive;
            }
        }
        self.current = next;
    }
}

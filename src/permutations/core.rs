use log::info;

/// Lazy enumerator over every permutation of the input sequence.
///
/// Elements are tracked by their original position, not by value, so an input
/// with duplicate values (e.g. `[1, 1, 2]`) still yields all `n!`
/// arrangements. Backtracking runs over an explicit frame stack rather than
/// recursion, so call depth stays constant regardless of input length.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    /// Original positions chosen so far, in output order.
    chosen: Vec<usize>,
    /// Unused original positions, kept in ascending original order.
    pool: Vec<usize>,
    /// One cursor per depth: which pool slot the depth currently holds.
    cursors: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl<T: Clone> Permutations<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        let items: Vec<T> = items.into_iter().collect();
        let pool: Vec<usize> = (0..items.len()).collect();

        info!(
            "Initialized permutation enumerator over {} elements",
            items.len()
        );

        Self {
            chosen: Vec::with_capacity(items.len()),
            cursors: Vec::with_capacity(items.len()),
            pool,
            items,
            started: false,
            exhausted: false,
        }
    }

    /// Take the first remaining candidate at every depth below the current
    /// one, completing `chosen` into a full permutation.
    fn descend(&mut self) {
        while !self.pool.is_empty() {
            self.cursors.push(0);
            self.chosen.push(self.pool.remove(0));
        }
    }

    /// Undo the deepest choice and move its cursor to the next candidate.
    /// Returns false when every frame has run out of candidates.
    fn backtrack_and_advance(&mut self) -> bool {
        while let Some(cursor) = self.cursors.pop() {
            let returned = match self.chosen.pop() {
                Some(position) => position,
                None => return false,
            };
            self.pool.insert(cursor, returned);

            let next_cursor = cursor + 1;
            if next_cursor < self.pool.len() {
                self.cursors.push(next_cursor);
                self.chosen.push(self.pool.remove(next_cursor));
                return true;
            }
        }
        false
    }

    fn materialize(&self) -> Vec<T> {
        self.chosen
            .iter()
            .map(|&position| self.items[position].clone())
            .collect()
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        if !self.started {
            self.started = true;
            // Zero elements still have one arrangement: the empty one.
            if self.items.is_empty() {
                self.exhausted = true;
                return Some(Vec::new());
            }
            self.descend();
            return Some(self.materialize());
        }

        if self.backtrack_and_advance() {
            self.descend();
            Some(self.materialize())
        } else {
            self.exhausted = true;
            None
        }
    }
}

/// Enumerate every permutation of `items` lazily, in lexicographic order of
/// original element positions.
pub fn iter_permutations<T: Clone>(items: impl IntoIterator<Item = T>) -> Permutations<T> {
    Permutations::new(items)
}

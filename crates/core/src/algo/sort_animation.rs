/// Snapshot of the sequence after one comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortFrame {
    pub values: Vec<u32>,
    /// One-based index of the comparison that produced this frame.
    pub step: usize,
    pub total_steps: usize,
    /// Positions compared in this step.
    pub compared: (usize, usize),
    pub swapped: bool,
}

impl SortFrame {
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.total_steps == 0 {
            return 1.0;
        }
        self.step as f64 / self.total_steps as f64
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.step == self.total_steps
    }
}

/// Bubble sort that yields a frame after every adjacent comparison.
///
/// No early exit on a clean pass, so exactly `n·(n−1)/2` frames are produced
/// and the last one holds the sorted sequence.
#[derive(Debug, Clone)]
pub struct SortAnimation {
    values: Vec<u32>,
    pass: usize,
    index: usize,
    step: usize,
    total_steps: usize,
}

impl SortAnimation {
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        let n = values.len();
        Self {
            total_steps: n * n.saturating_sub(1) / 2,
            values,
            pass: 0,
            index: 0,
            step: 0,
        }
    }

    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Sequence as of the most recent frame.
    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }
}

impl Iterator for SortAnimation {
    type Item = SortFrame;

    fn next(&mut self) -> Option<SortFrame> {
        if self.step >= self.total_steps {
            return None;
        }

        let n = self.values.len();
        let (left, right) = (self.index, self.index + 1);
        let swapped = self.values[left] > self.values[right];
        if swapped {
            self.values.swap(left, right);
        }

        self.step += 1;
        self.index += 1;
        if self.index >= n - self.pass - 1 {
            self.pass += 1;
            self.index = 0;
        }

        Some(SortFrame {
            values: self.values.clone(),
            step: self.step,
            total_steps: self.total_steps,
            compared: (left, right),
            swapped,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total_steps - self.step;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SortAnimation {}

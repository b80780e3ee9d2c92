use crate::expression::compile::Producer;

/// Drives a root producer once per tick.
///
/// The driver neither caches nor schedules: every [`Driver::tick`] is a full
/// evaluation pass over the closure graph.
#[derive(Debug)]
pub struct Driver {
    root: Producer,
    passes: u64,
}

impl Driver {
    /// Wrap a compiled root.
    pub fn new(root: Producer) -> Self {
        Self { root, passes: 0 }
    }

    /// Run one evaluation pass.
    #[tracing::instrument(level = "trace", skip(self), fields(pass = self.passes))]
    pub fn tick(&mut self) -> f64 {
        let out = self.root.eval();
        self.passes += 1;
        tracing::trace!(result = out, "pass complete");
        out
    }

    /// Run `n` passes, collecting each result.
    pub fn run(&mut self, n: u64) -> Vec<f64> {
        (0..n).map(|_| self.tick()).collect()
    }

    /// Number of completed passes.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Give back the root producer.
    pub fn into_inner(self) -> Producer {
        self.root
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/driver.rs"]
mod tests;

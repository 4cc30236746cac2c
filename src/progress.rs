// src/progress.rs
/// Lightweight progress reporting used by long-running operations.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (e.g., a feat page landed).
    fn item_done(&mut self, _name: &str) {}

    /// Called when one logical unit fails non-fatally.
    fn item_failed(&mut self, _name: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Single-line console bar: `Grabbing feats |████----| 50.0% (2 of 4)`,
/// redrawn in place with a carriage return.
pub struct ConsoleProgress {
    prefix: String,
    length: usize,
    total: usize,
    count: usize,
    started: std::time::Instant,
}

impl ConsoleProgress {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: s!(prefix),
            length: 50,
            total: 0,
            count: 0,
            started: std::time::Instant::now(),
        }
    }

    pub fn set_prefix(&mut self, prefix: &str) {
        self.prefix = s!(prefix);
    }

    fn draw(&self) {
        use std::io::Write;
        if self.total == 0 {
            return;
        }
        let percent = 100.0 * self.count as f64 / self.total as f64;
        let filled = self.length * self.count / self.total;
        let bar: String = "\u{2588}".repeat(filled) + &"-".repeat(self.length - filled);
        print!(
            "\r{} |{}| {:.1}% ({} of {})",
            self.prefix, bar, percent, self.count, self.total
        );
        let _ = std::io::stdout().flush();
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.count = 0;
        self.started = std::time::Instant::now();
        self.draw();
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, _name: &str) {
        self.count += 1;
        self.draw();
    }

    fn item_failed(&mut self, _name: &str) {
        self.count += 1;
        self.draw();
    }

    fn finish(&mut self) {
        let spent = self.started.elapsed().as_secs();
        println!(
            "\nProcess finished in {} minutes and {} seconds",
            spent / 60,
            spent % 60
        );
    }
}

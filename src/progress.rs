use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Instant;

/// Throttled progress logging for a long-running pass.
///
/// Ticks may come from several rayon workers at once. Only every
/// `check`-th tick logs, so the output stays at a fixed number of lines
/// regardless of the pass size. Purely a side effect.
pub struct Progress {
    label: &'static str,
    total: usize,
    check: usize,
    ticks: AtomicUsize,
    begin: Instant,
}

impl Progress {
    pub fn new(label: &'static str, total: usize, n: usize) -> Self {
        Self {
            label,
            total,
            check: (total / n.max(1)).max(1),
            ticks: AtomicUsize::new(0),
            begin: Instant::now(),
        }
    }

    pub fn tick(&self) {
        let ticks = self.ticks.fetch_add(1, Ordering::Relaxed) + 1;
        if ticks % self.check == 0 || ticks == self.total {
            let elapsed = self.begin.elapsed();
            log::info!(
                "{:<12} {:8.0?} {:>10} {:6.2}%   mean {:8.1}/s",
                self.label,
                elapsed,
                ticks,
                ticks as f32 / self.total.max(1) as f32 * 100f32,
                ticks as f32 / elapsed.as_secs_f32().max(f32::MIN_POSITIVE),
            );
        }
    }

    pub fn ticks(&self) -> usize {
        self.ticks.load(Ordering::Relaxed)
    }
}

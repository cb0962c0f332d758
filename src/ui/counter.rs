//! Animated number counter
//!
//! Each counter runs as a background task on the app's tokio runtime and
//! writes its formatted value into a shared display cell. The task is tied to
//! the lifetime of its [`CounterTask`] handle: cancelling or dropping the
//! handle stops all further writes.

use crate::constants::COUNTER_TICK_MS;
use crate::ui::motion::{ease_out_cubic, lerp};
use eframe::egui;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Parameters of one counting animation
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
    pub prefix: String,
    pub suffix: String,
}

impl CountUp {
    /// Displayed text `elapsed` into the animation
    pub fn text_at(&self, elapsed: Duration) -> String {
        if elapsed >= self.duration {
            return self.final_text();
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let value = lerp(self.from, self.to, ease_out_cubic(t) as f64);
        self.render(value)
    }

    pub fn final_text(&self) -> String {
        self.render(self.to)
    }

    fn render(&self, value: f64) -> String {
        format!("{}{}{}", self.prefix, format_grouped(value.round() as i64), self.suffix)
    }
}

/// Format an integer with comma thousands separators (`120000` -> `120,000`)
pub fn format_grouped(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Handle to a running counter animation
pub struct CounterTask {
    display: Arc<Mutex<String>>,
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl CounterTask {
    /// Start interpolating on `runtime`. `on_write` runs after every display
    /// update (the app uses it to request a repaint).
    pub fn spawn<F>(runtime: &tokio::runtime::Handle, count: CountUp, on_write: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        let token = CancellationToken::new();

        if count.duration.is_zero() {
            return Self {
                display: Arc::new(Mutex::new(count.final_text())),
                token,
                handle: None,
            };
        }

        let display = Arc::new(Mutex::new(count.text_at(Duration::ZERO)));
        let task_display = display.clone();
        let task_token = token.clone();

        let handle = runtime.spawn(async move {
            let start = tokio::time::Instant::now();
            let mut ticker = tokio::time::interval(Duration::from_millis(COUNTER_TICK_MS));
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = task_token.cancelled() => break,
                    _ = ticker.tick() => {}
                }

                let elapsed = start.elapsed();
                let done = elapsed >= count.duration;
                let text = count.text_at(elapsed);
                {
                    let Ok(mut cell) = task_display.lock() else { break };
                    // Checked under the lock so cancel() can't race a write
                    if task_token.is_cancelled() {
                        break;
                    }
                    *cell = text;
                }
                on_write();

                if done {
                    break;
                }
            }
        });

        Self { display, token, handle: Some(handle) }
    }

    /// Current displayed text
    pub fn text(&self) -> String {
        match self.display.lock() {
            Ok(cell) => cell.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Stop the animation. No writes happen after this returns.
    pub fn cancel(&self) {
        let _cell = self.display.lock();
        self.token.cancel();
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for CounterTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Counters mounted by the currently visible slide, keyed by widget id
#[derive(Default)]
pub struct CounterSet {
    counters: HashMap<String, CounterTask>,
}

impl CounterSet {
    /// Start the counter on first use and return its current text
    pub fn mount(
        &mut self,
        key: &str,
        count: impl FnOnce() -> CountUp,
        runtime: &tokio::runtime::Handle,
        ctx: &egui::Context,
    ) -> String {
        self.counters
            .entry(key.to_string())
            .or_insert_with(|| {
                debug!(counter = key, "Mounting counter");
                let ctx = ctx.clone();
                CounterTask::spawn(runtime, count(), move || ctx.request_repaint())
            })
            .text()
    }

    /// Text of a mounted counter without starting one
    pub fn text(&self, key: &str) -> Option<String> {
        self.counters.get(key).map(CounterTask::text)
    }

    /// Stop every counter where it stands; the texts stay readable
    pub fn freeze(&self) {
        for task in self.counters.values() {
            task.cancel();
        }
    }

    /// Cancel every mounted counter
    pub fn clear(&mut self) {
        if !self.counters.is_empty() {
            debug!(count = self.counters.len(), "Unmounting counters");
        }
        self.counters.clear();
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn budget(duration: Duration) -> CountUp {
        CountUp {
            from: 0.0,
            to: 120_000.0,
            duration,
            prefix: "RM ".into(),
            suffix: String::new(),
        }
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1000), "1,000");
        assert_eq!(format_grouped(120_000), "120,000");
        assert_eq!(format_grouped(1_234_567), "1,234,567");
        assert_eq!(format_grouped(-1_234_567), "-1,234,567");
    }

    #[test]
    fn test_text_at_endpoints() {
        let count = budget(Duration::from_secs(2));
        assert_eq!(count.text_at(Duration::ZERO), "RM 0");
        assert_eq!(count.text_at(Duration::from_secs(2)), "RM 120,000");
        assert_eq!(count.text_at(Duration::from_secs(5)), "RM 120,000");
    }

    #[test]
    fn test_text_at_eases_out() {
        let count = CountUp {
            from: 0.0,
            to: 100.0,
            duration: Duration::from_secs(2),
            prefix: String::new(),
            suffix: "%".into(),
        };
        // Ease-out is past the linear midpoint halfway through
        let mid: i64 = count.text_at(Duration::from_secs(1)).trim_end_matches('%').parse().unwrap();
        assert!(mid > 50);
    }

    #[test]
    fn test_suffix_applied() {
        let count = CountUp {
            from: 0.0,
            to: 6.0,
            duration: Duration::from_secs(2),
            prefix: String::new(),
            suffix: " Months".into(),
        };
        assert_eq!(count.final_text(), "6 Months");
    }

    #[tokio::test]
    async fn test_counter_reaches_terminal_value() {
        let writes = Arc::new(AtomicUsize::new(0));
        let w = writes.clone();
        let task = CounterTask::spawn(
            &tokio::runtime::Handle::current(),
            budget(Duration::from_millis(60)),
            move || {
                w.fetch_add(1, Ordering::SeqCst);
            },
        );

        tokio::time::sleep(Duration::from_millis(300)).await;

        assert_eq!(task.text(), "RM 120,000");
        assert!(task.is_finished());
        assert!(writes.load(Ordering::SeqCst) > 0);
    }

    #[tokio::test]
    async fn test_cancel_stops_writes() {
        let writes = Arc::new(AtomicUsize::new(0));
        let w = writes.clone();
        let task = CounterTask::spawn(
            &tokio::runtime::Handle::current(),
            budget(Duration::from_secs(10)),
            move || {
                w.fetch_add(1, Ordering::SeqCst);
            },
        );

        tokio::time::sleep(Duration::from_millis(50)).await;
        task.cancel();
        let text = task.text();
        let count = writes.load(Ordering::SeqCst);

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(task.text(), text);
        assert_eq!(writes.load(Ordering::SeqCst), count);
        assert_ne!(text, "RM 120,000");
        assert!(task.is_finished());
    }

    #[tokio::test]
    async fn test_drop_cancels() {
        let writes = Arc::new(AtomicUsize::new(0));
        let w = writes.clone();
        let task = CounterTask::spawn(
            &tokio::runtime::Handle::current(),
            budget(Duration::from_secs(10)),
            move || {
                w.fetch_add(1, Ordering::SeqCst);
            },
        );

        tokio::time::sleep(Duration::from_millis(30)).await;
        drop(task);
        let count = writes.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(writes.load(Ordering::SeqCst), count);
    }

    #[test]
    fn test_zero_duration_jumps_to_end() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let task = CounterTask::spawn(runtime.handle(), budget(Duration::ZERO), || {});
        assert_eq!(task.text(), "RM 120,000");
        assert!(task.is_finished());
    }

    #[test]
    fn test_counter_set_mounts_once_and_clears() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let ctx = egui::Context::default();
        let mut set = CounterSet::default();

        let first = set.mount("budget", || budget(Duration::ZERO), runtime.handle(), &ctx);
        let second = set.mount("budget", || panic!("already mounted"), runtime.handle(), &ctx);
        assert_eq!(first, "RM 120,000");
        assert_eq!(first, second);
        assert_eq!(set.len(), 1);

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_frozen_counter_keeps_its_text() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let ctx = egui::Context::default();
        let mut set = CounterSet::default();

        set.mount("budget", || budget(Duration::from_secs(10)), runtime.handle(), &ctx);
        std::thread::sleep(Duration::from_millis(50));
        set.freeze();
        let frozen = set.text("budget").unwrap();
        std::thread::sleep(Duration::from_millis(100));

        assert_eq!(set.text("budget").unwrap(), frozen);
        assert_ne!(frozen, "RM 120,000");
        assert!(set.text("duration").is_none());
    }
}

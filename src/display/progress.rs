use indicatif::ProgressBar;
use std::panic;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

/// Runs `work` on the current thread while a scoped ticker prints a status
/// line every `interval`. The ticker is cancelled and joined before this
/// returns, so the caller reads results only after it has stopped.
pub fn with_ticker<R, F>(progress: &ProgressBar, interval: Duration, work: F) -> R
where
    F: FnOnce() -> R,
{
    run_with_ticker(interval, || progress.println(status_line(progress)), work)
}

/// A panic on the ticker thread is re-raised here once `work` has finished.
fn run_with_ticker<R, T, F>(interval: Duration, tick: T, work: F) -> R
where
    T: Fn() + Send + Sync,
    F: FnOnce() -> R,
{
    let (stop_tx, stop_rx) = mpsc::channel::<()>();

    thread::scope(|scope| {
        let ticker = scope.spawn(|| run_ticker(&tick, interval, stop_rx));

        let result = work();

        drop(stop_tx);
        if let Err(payload) = ticker.join() {
            panic::resume_unwind(payload);
        }
        result
    })
}

fn run_ticker<T: Fn()>(tick: &T, interval: Duration, stop: Receiver<()>) -> u32 {
    let mut ticks = 0;
    loop {
        tick();
        ticks += 1;

        match stop.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => continue,
            Ok(()) | Err(RecvTimeoutError::Disconnected) => return ticks,
        }
    }
}

pub fn status_line(progress: &ProgressBar) -> String {
    let elapsed = progress.elapsed().as_secs();
    format!(
        "⏳ [{:02}:{:02}] {}/{} matches scanned",
        elapsed / 60,
        elapsed % 60,
        progress.position(),
        progress.length().unwrap_or(0)
    )
}

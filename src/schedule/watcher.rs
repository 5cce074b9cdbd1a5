use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Duration, MissedTickBehavior};

use super::{Clock, MealPeriod, ServiceHours};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Polls the clock on a fixed interval and publishes period changes.
///
/// Observers may see a stale period for up to one interval after a
/// boundary. Dropping the watcher stops the polling task.
pub struct PeriodWatcher {
    receiver: watch::Receiver<MealPeriod>,
    task: JoinHandle<()>,
}

impl PeriodWatcher {
    pub fn spawn<C: Clock>(
        hours: ServiceHours,
        clock: C,
        every: Duration,
    ) -> Self {
        let (sender, receiver) =
            watch::channel(hours.period_at(clock.hour()));

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let next = hours.period_at(clock.hour());

                sender.send_if_modified(|current| {
                    if *current == next {
                        return false;
                    }
                    log::info!(
                        "meal period changed from {} to {}",
                        current,
                        next
                    );
                    *current = next;
                    true
                });
            }
        });

        Self { receiver, task }
    }

    pub fn current(&self) -> MealPeriod {
        *self.receiver.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<MealPeriod> {
        self.receiver.clone()
    }
}

impl Drop for PeriodWatcher {
    fn drop(&mut self) {
        self.task.abort();
    }
}

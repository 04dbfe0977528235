//! Simulated module playback
//!
//! While a module is open its progress bar fills in fixed steps on a timer.
//! The timer runs as a tokio task that reports through a channel and stops
//! when it reaches 100, when its handle is cancelled, or when its handle is
//! dropped.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Progress report from a running playback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackTick {
    /// Module the playback belongs to
    pub module_id: String,
    /// Progress after this tick (0-100)
    pub progress: u8,
}

/// Timer settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSettings {
    pub interval: Duration,
    pub step: u8,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self { interval: Duration::from_millis(500), step: 10 }
    }
}

/// What to do with the timer after the view may have changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackPlan {
    /// The running timer already belongs to the open module
    Keep,
    /// Stop any timer and start one for this module at 0
    Start(String),
    /// Stop any timer; the module is done and shows 100
    ShowComplete(String),
    /// No module is open
    Stop,
}

/// Decide the timer for the open module, given as `(id, completed)`, and
/// the module the running timer belongs to.
pub fn playback_plan(open_module: Option<(&str, bool)>, running: Option<&str>) -> PlaybackPlan {
    match open_module {
        Some((id, false)) if running == Some(id) => PlaybackPlan::Keep,
        Some((id, false)) => PlaybackPlan::Start(id.to_string()),
        Some((id, true)) => PlaybackPlan::ShowComplete(id.to_string()),
        None => PlaybackPlan::Stop,
    }
}

/// Owner of a running playback task
#[derive(Debug)]
pub struct PlaybackHandle {
    module_id: String,
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl PlaybackHandle {
    /// Start a playback for `module_id`, reporting ticks on `tx`
    pub fn spawn(
        module_id: impl Into<String>,
        settings: PlaybackSettings,
        tx: mpsc::UnboundedSender<PlaybackTick>,
    ) -> Self {
        let module_id = module_id.into();
        let token = CancellationToken::new();
        let task = tokio::spawn(run(module_id.clone(), settings, tx, token.clone()));
        tracing::debug!(module = %module_id, "Playback started");
        Self { module_id, token, task }
    }

    pub fn module_id(&self) -> &str {
        &self.module_id
    }

    /// Stop the timer. No further ticks are sent after the task observes this.
    pub fn cancel(&self) {
        if !self.token.is_cancelled() {
            tracing::debug!(module = %self.module_id, "Playback cancelled");
            self.token.cancel();
        }
    }

    /// Wait for the task to exit
    pub async fn join(&mut self) {
        let _ = (&mut self.task).await;
    }
}

impl Drop for PlaybackHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

async fn run(
    module_id: String,
    settings: PlaybackSettings,
    tx: mpsc::UnboundedSender<PlaybackTick>,
    token: CancellationToken,
) {
    let step = settings.step.max(1);
    let mut ticker = tokio::time::interval(settings.interval.max(Duration::from_millis(1)));
    // The first tick of an interval fires immediately
    ticker.tick().await;

    let mut progress: u8 = 0;
    loop {
        tokio::select! {
            biased;

            _ = token.cancelled() => break,

            _ = ticker.tick() => {
                progress = progress.saturating_add(step).min(100);
                let tick = PlaybackTick { module_id: module_id.clone(), progress };
                if tx.send(tick).is_err() || progress >= 100 {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast(step: u8) -> PlaybackSettings {
        PlaybackSettings { interval: Duration::from_millis(1), step }
    }

    async fn collect(mut rx: mpsc::UnboundedReceiver<PlaybackTick>) -> Vec<u8> {
        let mut seen = Vec::new();
        while let Some(tick) = rx.recv().await {
            seen.push(tick.progress);
        }
        seen
    }

    #[test]
    fn opening_a_module_starts_the_timer() {
        assert_eq!(playback_plan(Some(("mod-1-1", false)), None), PlaybackPlan::Start("mod-1-1".into()));
    }

    #[test]
    fn same_module_keeps_the_timer() {
        assert_eq!(playback_plan(Some(("mod-1-1", false)), Some("mod-1-1")), PlaybackPlan::Keep);
    }

    #[test]
    fn leaving_the_module_view_stops_the_timer() {
        assert_eq!(playback_plan(None, Some("mod-1-1")), PlaybackPlan::Stop);
        assert_eq!(playback_plan(None, None), PlaybackPlan::Stop);
    }

    #[test]
    fn next_module_restarts_for_the_new_id() {
        assert_eq!(
            playback_plan(Some(("mod-1-2", false)), Some("mod-1-1")),
            PlaybackPlan::Start("mod-1-2".into())
        );
    }

    #[test]
    fn completed_module_shows_full_without_timer() {
        assert_eq!(
            playback_plan(Some(("mod-3-1", true)), None),
            PlaybackPlan::ShowComplete("mod-3-1".into())
        );
    }

    #[test]
    fn completing_the_open_module_stops_its_timer() {
        assert_eq!(
            playback_plan(Some(("mod-3-1", true)), Some("mod-3-1")),
            PlaybackPlan::ShowComplete("mod-3-1".into())
        );
    }

    #[tokio::test]
    async fn runs_to_completion() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut handle = PlaybackHandle::spawn("mod-1-1", fast(25), tx);
        handle.join().await;

        assert_eq!(collect(rx).await, vec![25, 50, 75, 100]);
    }

    #[tokio::test]
    async fn last_step_is_capped_at_100() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut handle = PlaybackHandle::spawn("mod-1-1", fast(30), tx);
        handle.join().await;

        assert_eq!(collect(rx).await, vec![30, 60, 90, 100]);
    }

    #[tokio::test]
    async fn ticks_carry_module_id() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _handle = PlaybackHandle::spawn("mod-4-2", fast(50), tx);
        let tick = rx.recv().await.unwrap();
        assert_eq!(tick.module_id, "mod-4-2");
    }

    #[tokio::test]
    async fn cancel_stops_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let settings = PlaybackSettings { interval: Duration::from_secs(10), step: 10 };
        let mut handle = PlaybackHandle::spawn("mod-2-2", settings, tx);

        handle.cancel();
        handle.join().await;

        assert!(handle.task.is_finished());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn dropping_handle_stops_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let settings = PlaybackSettings { interval: Duration::from_secs(10), step: 10 };
        let handle = PlaybackHandle::spawn("mod-2-2", settings, tx);
        drop(handle);

        // The task exits and drops its sender, closing the channel
        let closed = tokio::time::timeout(Duration::from_secs(2), rx.recv()).await;
        assert_eq!(closed, Ok(None));
    }

    #[tokio::test]
    async fn zero_step_still_progresses() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut handle = PlaybackHandle::spawn("mod-1-1", fast(0), tx);
        handle.join().await;

        let seen = collect(rx).await;
        assert_eq!(seen.len(), 100);
        assert_eq!(seen.last(), Some(&100));
    }
}

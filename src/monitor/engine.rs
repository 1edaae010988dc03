//! The accuracy evaluation engine.
//!
//! Owns the monitor state, the single watch slot, and the calibration-prompt
//! hysteresis. Every evaluation pass runs under one lock so no two passes can
//! interleave their reads and writes of the state; prompt commands are
//! fire-and-forget onto the presentation thread and never block evaluation.

use crate::accuracy::{display_name, AccuracyLevel};
use crate::config::MonitorSettings;
use crate::monitor::events::WatchEvent;
use crate::monitor::state::{MonitorState, Watch, WatchHandle};
use crate::prompt::PromptDriver;
use crate::sensor::{AccuracyListener, AccuracyReading, SensorFeed};
use crate::stats::{MonitorStats, SharedMonitorStats, StatsSnapshot};
use crossbeam_channel::unbounded;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

/// Errors surfaced to callers of the monitor operations.
#[derive(Debug, PartialEq, Eq)]
pub enum MonitorError {
    /// `simulateAccuracyChange` was called without an accuracy value
    MissingAccuracy,
}

impl std::fmt::Display for MonitorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonitorError::MissingAccuracy => write!(f, "accuracy parameter is required"),
        }
    }
}

impl std::error::Error for MonitorError {}

struct Inner {
    state: MonitorState,
    /// Requirement used by evaluation; set by `start_monitoring` and
    /// retained after the watch ends
    required_accuracy: AccuracyLevel,
    watch: Option<Watch>,
}

/// The compass accuracy monitor.
///
/// Consumes raw sensor readings through [`AccuracyListener`], deduplicates
/// them, evaluates them against the active watch's requirement, and emits
/// [`WatchEvent`]s. With a [`PromptDriver`] attached it additionally drives
/// the calibration prompt's show/update/hide lifecycle: shown once per
/// inaccurate episode, updated in place while visible, hidden exactly when
/// accuracy becomes sufficient again.
pub struct AccuracyMonitor {
    inner: Mutex<Inner>,
    settings: MonitorSettings,
    prompt: Option<PromptDriver>,
    stats: SharedMonitorStats,
    source: Mutex<Option<Arc<SensorFeed>>>,
}

impl AccuracyMonitor {
    /// Create a monitor without a calibration prompt (event-only variant).
    pub fn new(settings: MonitorSettings) -> Arc<Self> {
        Self::build(settings, None)
    }

    /// Create a monitor driving a calibration prompt.
    pub fn with_prompt(settings: MonitorSettings, prompt: PromptDriver) -> Arc<Self> {
        Self::build(settings, Some(prompt))
    }

    fn build(settings: MonitorSettings, prompt: Option<PromptDriver>) -> Arc<Self> {
        Arc::new(Self {
            inner: Mutex::new(Inner {
                state: MonitorState::default(),
                required_accuracy: AccuracyLevel::High,
                watch: None,
            }),
            settings,
            prompt,
            stats: Arc::new(MonitorStats::new()),
            source: Mutex::new(None),
        })
    }

    /// Wire a sensor feed; `start_monitoring` subscribes to it lazily.
    pub fn connect_source(&self, feed: Arc<SensorFeed>) {
        *lock(&self.source) = Some(feed);
    }

    /// Start (or restart) the accuracy watch.
    ///
    /// Replaces any existing watch; the previous watch's receiver simply
    /// disconnects, with no terminal event. The `started` event is emitted
    /// synchronously, and if an accuracy is already known a full evaluation
    /// pass runs immediately so a late subscriber does not have to wait for
    /// the next physical sensor event to learn it is out of tolerance.
    pub fn start_monitoring(self: &Arc<Self>, required: Option<&str>) -> WatchHandle {
        let required_accuracy = AccuracyLevel::from_text(required);
        let (sender, events) = unbounded();
        let id = Uuid::new_v4();
        let watch = Watch {
            id,
            required_accuracy,
            sender,
        };

        {
            let mut inner = lock(&self.inner);
            if let Some(old) = inner.watch.replace(watch.clone()) {
                tracing::debug!(watch_id = %old.id, "Replacing active accuracy watch");
            }
            inner.required_accuracy = required_accuracy;
            // A fresh watch starts with no episode history
            inner.state.reset_episode();

            tracing::info!(
                watch_id = %id,
                required = %required_accuracy,
                "Starting compass accuracy watch"
            );

            let current = inner.state.previous_accuracy;
            self.emit(
                &watch,
                WatchEvent::Started {
                    required_accuracy,
                    current_accuracy: current,
                },
            );

            if current.is_some() {
                tracing::debug!("Accuracy already known before monitoring started, evaluating it");
                self.evaluate_locked(&mut inner, current, current);
            }
        }

        self.ensure_subscribed();
        WatchHandle { id, events }
    }

    /// Stop the active watch, if any. Calling with no active watch is a
    /// no-op success.
    pub fn stop_monitoring(&self) {
        let mut inner = lock(&self.inner);
        if let Some(watch) = inner.watch.take() {
            tracing::info!(watch_id = %watch.id, "Stopping compass accuracy watch");
        }
        inner.state.reset_episode();
        if inner.state.prompt_visible {
            if let Some(prompt) = &self.prompt {
                if let Err(e) = prompt.hide() {
                    tracing::error!("Error hiding calibration prompt: {e}");
                }
            }
            inner.state.prompt_visible = false;
        }
    }

    /// The last accuracy level the sensor reported, independent of watch
    /// state. Never fails.
    pub fn current_accuracy(&self) -> Option<AccuracyLevel> {
        lock(&self.inner).state.previous_accuracy
    }

    /// Inject an accuracy value as if the sensor had reported it.
    ///
    /// Evaluates the decoded level directly without touching the
    /// sensor-observed history or the dedup gate. Depending on settings,
    /// clears the shown-once suppression first so a simulation can force a
    /// fresh prompt. A missing or empty accuracy value is rejected; an
    /// unrecognized token silently decodes to `high` like any other input.
    pub fn simulate_accuracy_change(&self, accuracy: Option<&str>) -> Result<(), MonitorError> {
        let token = accuracy
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(MonitorError::MissingAccuracy)?;
        let level = AccuracyLevel::from_text(Some(token));

        let mut inner = lock(&self.inner);
        if self.settings.simulate_resets_prompt {
            inner.state.reset_episode();
        }
        let previous = inner.state.previous_accuracy;
        self.evaluate_locked(&mut inner, Some(level), previous);
        Ok(())
    }

    /// Notify the monitor that the user dismissed the calibration prompt.
    ///
    /// Clears only visibility: the shown-once suppression stays, so the
    /// prompt does not immediately reappear while the same inaccurate
    /// episode continues.
    pub fn notify_prompt_dismissed(&self) {
        let mut inner = lock(&self.inner);
        inner.state.prompt_visible = false;
    }

    /// Snapshot of the monitor state, for inspection.
    pub fn state(&self) -> MonitorState {
        lock(&self.inner).state.clone()
    }

    /// Snapshot of the monitor's session counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.stats()
    }

    /// Human-readable session summary.
    pub fn stats_summary(&self) -> String {
        self.stats.summary()
    }

    fn ensure_subscribed(self: &Arc<Self>) {
        let source = lock(&self.source);
        if let Some(feed) = source.as_ref() {
            let listener: Arc<dyn AccuracyListener> = self.clone();
            // The feed ignores repeated registration, so this cannot
            // duplicate delivery
            feed.attach(Arc::downgrade(&listener));
        }
    }

    /// The evaluation pass. `current` is the accuracy being judged;
    /// `previous` is the prior observed level for the event payload.
    fn evaluate_locked(
        &self,
        inner: &mut Inner,
        current: Option<AccuracyLevel>,
        previous: Option<AccuracyLevel>,
    ) {
        let required = inner.required_accuracy;
        // Recomputed in full every pass. A requirement of `Unreliable` is
        // never satisfiable: even minimally unreliable readings are
        // unacceptable. Unknown current accuracy counts as below any
        // requirement.
        let is_inaccurate = match (required, current) {
            (AccuracyLevel::Unreliable, _) => true,
            (_, None) => true,
            (required, Some(current)) => current < required,
        };
        inner.state.is_inaccurate = is_inaccurate;

        let Some(watch) = inner.watch.clone() else {
            return;
        };

        self.emit(
            &watch,
            WatchEvent::AccuracyChanged {
                required_accuracy: required,
                current_accuracy: current,
                previous_accuracy: previous,
                is_inaccurate,
            },
        );

        self.drive_prompt(inner, current);
    }

    /// Prompt hysteresis: show once per inaccurate episode, update while
    /// visible, hide exactly when accuracy becomes sufficient again.
    /// Presentation failures are caught here, logged, and never propagate.
    fn drive_prompt(&self, inner: &mut Inner, current: Option<AccuracyLevel>) {
        let Some(prompt) = &self.prompt else {
            if !inner.state.is_inaccurate {
                inner.state.reset_episode();
            }
            return;
        };

        if inner.state.is_inaccurate {
            if !inner.state.has_shown_prompt && !inner.state.prompt_visible {
                inner.state.has_shown_prompt = true;
                match prompt.show(current) {
                    Ok(()) => {
                        inner.state.prompt_visible = true;
                        self.stats.record_prompt_shown();
                    }
                    Err(e) => tracing::error!("Error showing calibration prompt: {e}"),
                }
            } else if inner.state.prompt_visible {
                // Already up (possibly from before an episode reset): only
                // refresh the live accuracy line
                inner.state.has_shown_prompt = true;
                if let Err(e) = prompt.update(current) {
                    tracing::error!("Error updating calibration prompt: {e}");
                }
            }
        } else {
            if inner.state.prompt_visible {
                if let Err(e) = prompt.hide() {
                    tracing::error!("Error hiding calibration prompt: {e}");
                }
                inner.state.prompt_visible = false;
            }
            // Episode over; the next inaccurate episode can show again
            inner.state.reset_episode();
        }
    }

    fn emit(&self, watch: &Watch, event: WatchEvent) {
        match watch.sender.send(event) {
            Ok(()) => self.stats.record_event_emitted(),
            Err(_) => tracing::debug!(watch_id = %watch.id, "Watch receiver dropped, event discarded"),
        }
    }
}

impl AccuracyListener for AccuracyMonitor {
    fn on_sensor_changed(&self, reading: AccuracyReading) {
        self.stats.record_reading_observed();
        let mut inner = lock(&self.inner);
        let reported = reading.level();

        // Coarse gate: collapse repeated identical readings into a single
        // logical change
        if inner.state.previous_accuracy.is_some() && reported == inner.state.previous_accuracy {
            self.stats.record_reading_deduped();
            return;
        }
        // Finer check catches the remaining no-change case (nothing decoded
        // yet on either side)
        if reported == inner.state.previous_accuracy {
            self.stats.record_reading_deduped();
            return;
        }

        let prior = inner.state.previous_accuracy;
        tracing::info!(
            "Magnetometer accuracy changed from {} to {}",
            display_name(prior),
            display_name(reported)
        );
        inner.state.previous_accuracy = reported;
        self.evaluate_locked(&mut inner, reported, prior);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{PresentationError, PromptCommand, PromptPresenter};
    use std::time::Duration;

    /// Presenter that records commands for hysteresis assertions.
    struct RecordingPresenter {
        commands: Arc<Mutex<Vec<PromptCommand>>>,
    }

    impl PromptPresenter for RecordingPresenter {
        fn show(&mut self, level: Option<AccuracyLevel>) -> Result<(), PresentationError> {
            self.commands
                .lock()
                .unwrap()
                .push(PromptCommand::Show(level));
            Ok(())
        }

        fn update(&mut self, level: Option<AccuracyLevel>) -> Result<(), PresentationError> {
            self.commands
                .lock()
                .unwrap()
                .push(PromptCommand::Update(level));
            Ok(())
        }

        fn hide(&mut self) -> Result<(), PresentationError> {
            self.commands.lock().unwrap().push(PromptCommand::Hide);
            Ok(())
        }
    }

    fn prompt_monitor(
        settings: MonitorSettings,
    ) -> (Arc<AccuracyMonitor>, Arc<Mutex<Vec<PromptCommand>>>) {
        let commands = Arc::new(Mutex::new(Vec::new()));
        let driver = PromptDriver::new(Box::new(RecordingPresenter {
            commands: commands.clone(),
        }));
        (AccuracyMonitor::with_prompt(settings, driver), commands)
    }

    fn recv(handle: &WatchHandle) -> WatchEvent {
        handle
            .events
            .recv_timeout(Duration::from_secs(1))
            .expect("expected a watch event")
    }

    fn report(monitor: &Arc<AccuracyMonitor>, level: AccuracyLevel) {
        monitor.on_sensor_changed(AccuracyReading::new(level));
    }

    fn wait_for<F: Fn() -> bool>(cond: F) {
        for _ in 0..100 {
            if cond() {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_inaccuracy_property_for_all_pairs() {
        for required in AccuracyLevel::ALL {
            for level in AccuracyLevel::ALL {
                let monitor = AccuracyMonitor::new(MonitorSettings::default());
                let handle = monitor.start_monitoring(Some(required.as_str()));
                let _ = recv(&handle); // started

                report(&monitor, level);
                let event = recv(&handle);
                let expected =
                    required == AccuracyLevel::Unreliable || level < required;
                match event {
                    WatchEvent::AccuracyChanged { is_inaccurate, .. } => assert_eq!(
                        is_inaccurate, expected,
                        "required={required}, level={level}"
                    ),
                    other => panic!("unexpected event: {other:?}"),
                }
            }
        }
    }

    #[test]
    fn test_started_event_with_unknown_accuracy() {
        let monitor = AccuracyMonitor::new(MonitorSettings::default());
        let handle = monitor.start_monitoring(None);

        let event = recv(&handle);
        assert_eq!(
            event,
            WatchEvent::Started {
                required_accuracy: AccuracyLevel::High,
                current_accuracy: None,
            }
        );
        // No accuracy known, so no immediate evaluation
        assert!(handle.events.try_recv().is_err());
    }

    #[test]
    fn test_dedup_drops_repeated_level() {
        let monitor = AccuracyMonitor::new(MonitorSettings::default());
        let handle = monitor.start_monitoring(Some("high"));
        let _ = recv(&handle);

        report(&monitor, AccuracyLevel::Medium);
        report(&monitor, AccuracyLevel::Medium);

        let _ = recv(&handle);
        assert!(
            handle.events.try_recv().is_err(),
            "second identical reading must be dropped"
        );
        assert_eq!(monitor.stats().readings_deduped, 1);
    }

    #[test]
    fn test_start_with_known_accuracy_evaluates_immediately() {
        let monitor = AccuracyMonitor::new(MonitorSettings::default());
        report(&monitor, AccuracyLevel::Medium);

        let handle = monitor.start_monitoring(Some("high"));
        assert_eq!(
            recv(&handle),
            WatchEvent::Started {
                required_accuracy: AccuracyLevel::High,
                current_accuracy: Some(AccuracyLevel::Medium),
            }
        );
        // A second event arrives without any new sensor reading
        match recv(&handle) {
            WatchEvent::AccuracyChanged {
                current_accuracy,
                is_inaccurate,
                ..
            } => {
                assert_eq!(current_accuracy, Some(AccuracyLevel::Medium));
                assert!(is_inaccurate);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_no_emission_without_watch() {
        let monitor = AccuracyMonitor::new(MonitorSettings::default());
        report(&monitor, AccuracyLevel::Low);
        // State is recorded even though nothing is emitted
        assert_eq!(monitor.current_accuracy(), Some(AccuracyLevel::Low));
        assert!(monitor.state().is_inaccurate);
        assert_eq!(monitor.stats().events_emitted, 0);
    }

    #[test]
    fn test_watch_replacement_releases_old_slot() {
        let monitor = AccuracyMonitor::new(MonitorSettings::default());
        let first = monitor.start_monitoring(Some("high"));
        let _ = recv(&first);

        let second = monitor.start_monitoring(Some("medium"));
        let _ = recv(&second);

        report(&monitor, AccuracyLevel::Low);
        let event = recv(&second);
        match event {
            WatchEvent::AccuracyChanged {
                required_accuracy, ..
            } => assert_eq!(required_accuracy, AccuracyLevel::Medium),
            other => panic!("unexpected event: {other:?}"),
        }
        // The replaced watch got no terminal event and nothing further
        assert!(first.events.try_recv().is_err());
    }

    #[test]
    fn test_stop_without_watch_is_noop() {
        let monitor = AccuracyMonitor::new(MonitorSettings::default());
        monitor.stop_monitoring();
        monitor.stop_monitoring();
        assert_eq!(monitor.current_accuracy(), None);
    }

    #[test]
    fn test_simulate_missing_accuracy_rejected() {
        let monitor = AccuracyMonitor::new(MonitorSettings::default());
        let handle = monitor.start_monitoring(Some("high"));
        let _ = recv(&handle);

        assert_eq!(
            monitor.simulate_accuracy_change(None),
            Err(MonitorError::MissingAccuracy)
        );
        assert_eq!(
            monitor.simulate_accuracy_change(Some("  ")),
            Err(MonitorError::MissingAccuracy)
        );
        // No state change, no event
        assert!(handle.events.try_recv().is_err());
        assert!(!monitor.state().is_inaccurate);
    }

    #[test]
    fn test_simulate_does_not_touch_observed_history() {
        let monitor = AccuracyMonitor::new(MonitorSettings::default());
        let handle = monitor.start_monitoring(Some("high"));
        let _ = recv(&handle);
        report(&monitor, AccuracyLevel::High);
        let _ = recv(&handle);

        monitor.simulate_accuracy_change(Some("low")).unwrap();
        match recv(&handle) {
            WatchEvent::AccuracyChanged {
                current_accuracy,
                previous_accuracy,
                is_inaccurate,
                ..
            } => {
                assert_eq!(current_accuracy, Some(AccuracyLevel::Low));
                assert_eq!(previous_accuracy, Some(AccuracyLevel::High));
                assert!(is_inaccurate);
            }
            other => panic!("unexpected event: {other:?}"),
        }
        // The sensor-observed history is unchanged
        assert_eq!(monitor.current_accuracy(), Some(AccuracyLevel::High));
    }

    #[test]
    fn test_prompt_shown_once_per_episode_and_updated() {
        // Scenario: requirement high, sensor reports medium then low
        let (monitor, commands) = prompt_monitor(MonitorSettings::default());
        let handle = monitor.start_monitoring(Some("high"));
        let _ = recv(&handle);

        report(&monitor, AccuracyLevel::Medium);
        report(&monitor, AccuracyLevel::Low);

        wait_for(|| commands.lock().unwrap().len() == 2);
        let seen = commands.lock().unwrap().clone();
        assert_eq!(
            seen,
            vec![
                PromptCommand::Show(Some(AccuracyLevel::Medium)),
                PromptCommand::Update(Some(AccuracyLevel::Low)),
            ]
        );
        assert!(monitor.state().has_shown_prompt);
        assert!(monitor.state().prompt_visible);
    }

    #[test]
    fn test_no_prompt_when_accuracy_sufficient() {
        // Scenario: requirement medium, sensor reports medium
        let (monitor, commands) = prompt_monitor(MonitorSettings::default());
        let handle = monitor.start_monitoring(Some("medium"));
        let _ = recv(&handle);

        report(&monitor, AccuracyLevel::Medium);
        match recv(&handle) {
            WatchEvent::AccuracyChanged { is_inaccurate, .. } => assert!(!is_inaccurate),
            other => panic!("unexpected event: {other:?}"),
        }
        std::thread::sleep(Duration::from_millis(50));
        assert!(commands.lock().unwrap().is_empty());
        assert!(!monitor.state().has_shown_prompt);
    }

    #[test]
    fn test_prompt_hidden_when_accuracy_recovers() {
        // Scenario: prompt visible, sensor reports high
        let (monitor, commands) = prompt_monitor(MonitorSettings::default());
        let handle = monitor.start_monitoring(Some("high"));
        let _ = recv(&handle);

        report(&monitor, AccuracyLevel::Low);
        report(&monitor, AccuracyLevel::High);

        wait_for(|| commands.lock().unwrap().len() == 2);
        let seen = commands.lock().unwrap().clone();
        assert_eq!(
            seen,
            vec![PromptCommand::Show(Some(AccuracyLevel::Low)), PromptCommand::Hide]
        );
        let state = monitor.state();
        assert!(!state.prompt_visible);
        assert!(!state.has_shown_prompt, "episode history must be cleared");

        // A new inaccurate episode shows the prompt again
        report(&monitor, AccuracyLevel::Medium);
        wait_for(|| commands.lock().unwrap().len() == 3);
        assert_eq!(
            commands.lock().unwrap()[2],
            PromptCommand::Show(Some(AccuracyLevel::Medium))
        );
    }

    #[test]
    fn test_simulate_forces_fresh_prompt_after_dismissal() {
        let (monitor, commands) = prompt_monitor(MonitorSettings::default());
        let handle = monitor.start_monitoring(Some("high"));
        let _ = recv(&handle);

        report(&monitor, AccuracyLevel::Medium);
        wait_for(|| commands.lock().unwrap().len() == 1);
        monitor.notify_prompt_dismissed();

        // The episode continues but the prompt stays suppressed
        report(&monitor, AccuracyLevel::Low);
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(commands.lock().unwrap().len(), 1);

        // Simulating bypasses the shown-once suppression under the default
        // policy
        monitor.simulate_accuracy_change(Some("low")).unwrap();
        wait_for(|| commands.lock().unwrap().len() == 2);
        assert_eq!(
            commands.lock().unwrap()[1],
            PromptCommand::Show(Some(AccuracyLevel::Low))
        );
    }

    #[test]
    fn test_simulate_reset_policy_disabled() {
        let settings = MonitorSettings {
            simulate_resets_prompt: false,
            ..MonitorSettings::default()
        };
        let (monitor, commands) = prompt_monitor(settings);
        let handle = monitor.start_monitoring(Some("high"));
        let _ = recv(&handle);

        report(&monitor, AccuracyLevel::Medium);
        wait_for(|| commands.lock().unwrap().len() == 1);
        monitor.notify_prompt_dismissed();

        // Without the reset policy the suppression holds even for simulation
        monitor.simulate_accuracy_change(Some("low")).unwrap();
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(commands.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_simulate_updates_visible_prompt() {
        let (monitor, commands) = prompt_monitor(MonitorSettings::default());
        let handle = monitor.start_monitoring(Some("high"));
        let _ = recv(&handle);

        report(&monitor, AccuracyLevel::Medium);
        wait_for(|| commands.lock().unwrap().len() == 1);

        // Prompt still up: simulation refreshes it rather than re-showing
        monitor.simulate_accuracy_change(Some("low")).unwrap();
        wait_for(|| commands.lock().unwrap().len() == 2);
        assert_eq!(
            commands.lock().unwrap()[1],
            PromptCommand::Update(Some(AccuracyLevel::Low))
        );
    }

    #[test]
    fn test_stop_hides_visible_prompt() {
        let (monitor, commands) = prompt_monitor(MonitorSettings::default());
        let handle = monitor.start_monitoring(Some("high"));
        let _ = recv(&handle);

        report(&monitor, AccuracyLevel::Low);
        wait_for(|| commands.lock().unwrap().len() == 1);

        monitor.stop_monitoring();
        wait_for(|| commands.lock().unwrap().len() == 2);
        assert_eq!(commands.lock().unwrap()[1], PromptCommand::Hide);
        assert!(!monitor.state().prompt_visible);
        assert!(!monitor.state().has_shown_prompt);
    }

    #[test]
    fn test_fresh_watch_clears_episode_history() {
        let (monitor, commands) = prompt_monitor(MonitorSettings::default());
        let handle = monitor.start_monitoring(Some("high"));
        let _ = recv(&handle);
        report(&monitor, AccuracyLevel::Medium);
        wait_for(|| commands.lock().unwrap().len() == 1);

        // The user dismissed the prompt; restarting clears the episode
        // history, and the immediate evaluation shows a fresh prompt
        monitor.notify_prompt_dismissed();
        let handle = monitor.start_monitoring(Some("high"));
        let _ = recv(&handle);
        wait_for(|| commands.lock().unwrap().len() >= 2);
        assert_eq!(
            commands.lock().unwrap()[1],
            PromptCommand::Show(Some(AccuracyLevel::Medium))
        );
    }

    #[test]
    fn test_unreliable_requirement_never_satisfiable() {
        let monitor = AccuracyMonitor::new(MonitorSettings::default());
        let handle = monitor.start_monitoring(Some("unreliable"));
        let _ = recv(&handle);

        report(&monitor, AccuracyLevel::High);
        match recv(&handle) {
            WatchEvent::AccuracyChanged { is_inaccurate, .. } => assert!(is_inaccurate),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}

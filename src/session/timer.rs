//! The session timer: focus phase, grace phase, lock, repeat.
//!
//! The timer owns its phase and deadline as local state and talks to the
//! outside world only through the [`Clock`], [`Notifier`], and
//! [`ScreenLocker`] traits, so the whole cycle can be tested with a virtual
//! clock and mock collaborators.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::core::duration::format_duration;
use crate::error::FocusGuardError;

/// How long a single blocking sleep may last.
///
/// Sleeping in short chunks keeps the loop responsive to shutdown signals;
/// deadlines are absolute, so chunking never drifts the schedule.
const SLEEP_CHUNK: Duration = Duration::from_secs(1);

/// Time source for the timer loop.
pub trait Clock {
    /// Current monotonic instant.
    fn now(&self) -> Instant;

    /// Block for the given duration.
    fn sleep(&self, duration: Duration);
}

/// Delivers break reminders to the user.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Show a notification.
    ///
    /// # Errors
    ///
    /// Returns [`FocusGuardError::Notify`] if delivery fails. The timer
    /// treats this as non-fatal.
    fn notify(&self, summary: &str, body: &str) -> Result<(), FocusGuardError>;
}

/// Locks the user's session.
#[cfg_attr(test, mockall::automock)]
pub trait ScreenLocker {
    /// Lock the screen.
    ///
    /// # Errors
    ///
    /// Returns [`FocusGuardError::Lock`] if no lock method succeeds. The
    /// timer treats this as non-fatal and starts the next cycle anyway.
    fn lock(&self) -> Result<(), FocusGuardError>;
}

impl<T: Notifier + ?Sized> Notifier for Box<T> {
    fn notify(&self, summary: &str, body: &str) -> Result<(), FocusGuardError> {
        self.as_ref().notify(summary, body)
    }
}

impl<T: ScreenLocker + ?Sized> ScreenLocker for Box<T> {
    fn lock(&self) -> Result<(), FocusGuardError> {
        self.as_ref().lock()
    }
}

/// Phase of the session cycle. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The user is presumed working; ends with a break reminder.
    Focus,
    /// The reminder has fired; ends with a screen lock.
    Grace,
}

impl Phase {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::Grace => "Grace",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Validated timer configuration. Immutable for the process lifetime.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    focus: Duration,
    grace: Duration,
}

impl SessionConfig {
    /// Create a config from the two phase durations.
    ///
    /// # Errors
    ///
    /// Returns [`FocusGuardError::Config`] if either duration is zero or
    /// negative.
    pub fn new(
        focus: chrono::Duration,
        grace: chrono::Duration,
    ) -> Result<Self, FocusGuardError> {
        Ok(Self {
            focus: to_positive_std(focus, "focus")?,
            grace: to_positive_std(grace, "grace")?,
        })
    }

    /// Focus phase length.
    #[must_use]
    pub const fn focus(&self) -> Duration {
        self.focus
    }

    /// Grace phase length.
    #[must_use]
    pub const fn grace(&self) -> Duration {
        self.grace
    }
}

fn to_positive_std(
    d: chrono::Duration,
    which: &str,
) -> Result<Duration, FocusGuardError> {
    let std = d.to_std().map_err(|_| {
        FocusGuardError::Config(format!("{which} duration must be positive"))
    })?;
    if std.is_zero() {
        return Err(FocusGuardError::Config(format!(
            "{which} duration must be positive"
        )));
    }
    Ok(std)
}

fn humanize(d: Duration) -> String {
    let secs = i64::try_from(d.as_secs()).unwrap_or(i64::MAX);
    format_duration(chrono::Duration::seconds(secs))
}

/// The focus/grace countdown state machine.
///
/// Created in the focus phase with the deadline one focus interval out.
/// The deadline is always advanced by exact phase lengths, so the cycle is
/// periodic with period focus + grace regardless of sleep granularity.
pub struct SessionTimer<C, N, L> {
    config: SessionConfig,
    clock: C,
    notifier: N,
    locker: L,
    phase: Phase,
    deadline: Instant,
}

impl<C: Clock, N: Notifier, L: ScreenLocker> SessionTimer<C, N, L> {
    /// Create a timer starting a fresh focus phase now.
    pub fn new(config: SessionConfig, clock: C, notifier: N, locker: L) -> Self {
        let deadline = clock.now() + config.focus();
        Self {
            config,
            clock,
            notifier,
            locker,
            phase: Phase::Focus,
            deadline,
        }
    }

    /// The currently active phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Run until `shutdown` is set.
    pub fn run(&mut self, shutdown: &AtomicBool) {
        info!(
            "session timer started: focus {}, grace {}",
            humanize(self.config.focus()),
            humanize(self.config.grace()),
        );
        while self.step(shutdown) {}
        info!("session timer stopped");
    }

    /// Sleep out the remainder of the current phase, perform its side
    /// effect, and move to the next phase.
    ///
    /// Returns `false` without performing the side effect if `shutdown` was
    /// set while waiting.
    pub fn step(&mut self, shutdown: &AtomicBool) -> bool {
        while self.clock.now() < self.deadline {
            if shutdown.load(Ordering::SeqCst) {
                return false;
            }
            let remaining = self.deadline - self.clock.now();
            self.clock.sleep(remaining.min(SLEEP_CHUNK));
        }
        if shutdown.load(Ordering::SeqCst) {
            return false;
        }
        self.transition();
        true
    }

    /// Perform the expiring phase's side effect and swap phases.
    ///
    /// Collaborator failures are logged, never propagated: a missed
    /// notification still starts the grace phase, and a failed lock still
    /// starts the next focus phase.
    fn transition(&mut self) {
        match self.phase {
            Phase::Focus => {
                info!("focus phase over, sending break reminder");
                if let Err(e) = self.notifier.notify(
                    "Time to take a break",
                    &format!(
                        "You've hit your focus limit. {} until auto-lock.",
                        humanize(self.config.grace())
                    ),
                ) {
                    warn!("break reminder failed: {e}");
                }
                self.phase = Phase::Grace;
                self.deadline += self.config.grace();
            }
            Phase::Grace => {
                info!("grace phase over, locking session");
                match self.locker.lock() {
                    Ok(()) => info!("session locked"),
                    Err(e) => {
                        warn!("{e}");
                        // Best effort; the cycle restarts regardless.
                        if let Err(e) = self.notifier.notify(
                            "Auto-lock failed",
                            "Could not lock the session automatically.",
                        ) {
                            warn!("auto-lock failure notice failed: {e}");
                        }
                    }
                }
                self.phase = Phase::Focus;
                self.deadline += self.config.focus();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// A clock where `sleep` advances virtual time instead of blocking.
    #[derive(Clone)]
    struct VirtualClock {
        start: Instant,
        elapsed: Arc<Mutex<Duration>>,
    }

    impl VirtualClock {
        fn new() -> Self {
            Self {
                start: Instant::now(),
                elapsed: Arc::new(Mutex::new(Duration::ZERO)),
            }
        }

        fn elapsed(&self) -> Duration {
            *self.elapsed.lock().unwrap()
        }
    }

    impl Clock for VirtualClock {
        fn now(&self) -> Instant {
            self.start + self.elapsed()
        }

        fn sleep(&self, duration: Duration) {
            *self.elapsed.lock().unwrap() += duration;
        }
    }

    fn config(focus_secs: i64, grace_secs: i64) -> SessionConfig {
        SessionConfig::new(
            chrono::Duration::seconds(focus_secs),
            chrono::Duration::seconds(grace_secs),
        )
        .unwrap()
    }

    fn not_shutting_down() -> AtomicBool {
        AtomicBool::new(false)
    }

    #[test]
    fn test_config_rejects_zero_durations() {
        assert!(SessionConfig::new(
            chrono::Duration::zero(),
            chrono::Duration::seconds(1)
        )
        .is_err());
        assert!(SessionConfig::new(
            chrono::Duration::seconds(1),
            chrono::Duration::zero()
        )
        .is_err());
    }

    #[test]
    fn test_config_rejects_negative_durations() {
        assert!(SessionConfig::new(
            chrono::Duration::seconds(-45),
            chrono::Duration::seconds(1)
        )
        .is_err());
    }

    #[test]
    fn test_focus_expiry_notifies_and_enters_grace() {
        let clock = VirtualClock::new();
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .times(1)
            .returning(|_, _| Ok(()));
        let mut locker = MockScreenLocker::new();
        locker.expect_lock().times(0);

        let mut timer = SessionTimer::new(config(120, 60), clock.clone(), notifier, locker);
        assert_eq!(timer.phase(), Phase::Focus);

        assert!(timer.step(&not_shutting_down()));

        assert_eq!(timer.phase(), Phase::Grace);
        assert_eq!(clock.elapsed(), Duration::from_secs(120));
    }

    #[test]
    fn test_grace_expiry_locks_and_restarts_focus() {
        let clock = VirtualClock::new();
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .times(1)
            .returning(|_, _| Ok(()));
        let mut locker = MockScreenLocker::new();
        locker.expect_lock().times(1).returning(|| Ok(()));

        let shutdown = not_shutting_down();
        let mut timer = SessionTimer::new(config(120, 60), clock.clone(), notifier, locker);
        assert!(timer.step(&shutdown));
        assert!(timer.step(&shutdown));

        assert_eq!(timer.phase(), Phase::Focus);
        assert_eq!(clock.elapsed(), Duration::from_secs(180));
    }

    #[test]
    fn test_cycle_is_periodic() {
        // F = 2, G = 1: events at t = 2 (notify), 3 (lock), 5, 6, 8, 9.
        let clock = VirtualClock::new();
        let events = Arc::new(Mutex::new(Vec::new()));

        let mut notifier = MockNotifier::new();
        {
            let events = Arc::clone(&events);
            let clock = clock.clone();
            notifier.expect_notify().times(3).returning(move |_, _| {
                events.lock().unwrap().push(("notify", clock.elapsed()));
                Ok(())
            });
        }
        let mut locker = MockScreenLocker::new();
        {
            let events = Arc::clone(&events);
            let clock = clock.clone();
            locker.expect_lock().times(3).returning(move || {
                events.lock().unwrap().push(("lock", clock.elapsed()));
                Ok(())
            });
        }

        let shutdown = not_shutting_down();
        let mut timer = SessionTimer::new(config(2, 1), clock, notifier, locker);
        for _ in 0..6 {
            assert!(timer.step(&shutdown));
        }
        assert_eq!(timer.phase(), Phase::Focus);

        let expected: Vec<(&str, Duration)> = [
            ("notify", 2),
            ("lock", 3),
            ("notify", 5),
            ("lock", 6),
            ("notify", 8),
            ("lock", 9),
        ]
        .into_iter()
        .map(|(kind, t)| (kind, Duration::from_secs(t)))
        .collect();
        assert_eq!(*events.lock().unwrap(), expected);
    }

    #[test]
    fn test_notifier_failure_still_enters_grace() {
        let clock = VirtualClock::new();
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().times(1).returning(|_, _| {
            Err(FocusGuardError::Notify("no notification daemon".to_string()))
        });
        let mut locker = MockScreenLocker::new();
        locker.expect_lock().times(0);

        let mut timer = SessionTimer::new(config(30, 30), clock, notifier, locker);
        assert!(timer.step(&not_shutting_down()));
        assert_eq!(timer.phase(), Phase::Grace);
    }

    #[test]
    fn test_locker_failure_still_restarts_focus() {
        let clock = VirtualClock::new();
        let mut notifier = MockNotifier::new();
        // Break reminder plus the auto-lock failure notice.
        notifier
            .expect_notify()
            .times(2)
            .returning(|_, _| Ok(()));
        let mut locker = MockScreenLocker::new();
        locker.expect_lock().times(1).returning(|| {
            Err(FocusGuardError::Lock("no lock command succeeded".to_string()))
        });

        let shutdown = not_shutting_down();
        let mut timer = SessionTimer::new(config(30, 30), clock.clone(), notifier, locker);
        assert!(timer.step(&shutdown));
        assert!(timer.step(&shutdown));

        assert_eq!(timer.phase(), Phase::Focus);
        assert_eq!(clock.elapsed(), Duration::from_secs(60));
    }

    #[test]
    fn test_shutdown_interrupts_wait_without_side_effects() {
        let clock = VirtualClock::new();
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().times(0);
        let mut locker = MockScreenLocker::new();
        locker.expect_lock().times(0);

        let shutdown = AtomicBool::new(true);
        let mut timer = SessionTimer::new(config(120, 60), clock, notifier, locker);
        assert!(!timer.step(&shutdown));
        assert_eq!(timer.phase(), Phase::Focus);
    }
}

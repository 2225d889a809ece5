//! Platform collaborators: the real clock, notifier, and screen locker.
//!
//! These are the OS-facing implementations of the capability traits the
//! session timer depends on. All of them are thin glue; the timer never
//! calls the OS directly.

pub mod clock;
pub mod locker;
pub mod notifier;

pub use clock::SystemClock;
pub use locker::{NoopLocker, SessionLocker};
pub use notifier::{DesktopNotifier, TerminalNotifier};

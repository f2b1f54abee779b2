//! Ageing counter component for Bubble Tea applications.
//!
//! The counter displays how long ago a reference timestamp occurred,
//! refreshed once per second. Until the host supplies that timestamp the
//! widget shows a placeholder. Once a reference arrives, the elapsed time is
//! decomposed into years, months, days, hours, minutes and seconds (see
//! [`crate::breakdown`]) and a repeating tick command keeps the display
//! advancing.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_agecounter::counter::{new, with_placeholder};
//! use std::time::{Duration, SystemTime};
//!
//! // Fresh counters render the placeholder.
//! let counter = new(&[]);
//! assert!(counter.view().contains("---"));
//!
//! // Delivering a reference timestamp computes the breakdown and returns
//! // the command that starts the tick chain.
//! let mut counter = new(&[with_placeholder("n/a")]);
//! let started = counter.set_reference(Some(SystemTime::now() - Duration::from_secs(5)));
//! assert!(started.is_some());
//! assert!(counter.running());
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Model as BubbleTeaModel, Msg, Cmd};
//! use bubbletea_agecounter::counter;
//! use std::time::SystemTime;
//!
//! struct MyApp {
//!     created_at: Option<SystemTime>,
//!     age: counter::Model,
//! }
//!
//! impl BubbleTeaModel for MyApp {
//!     fn init() -> (Self, Option<Cmd>) {
//!         (Self { created_at: None, age: counter::new(&[]) }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         // Hand the bound field to the counter whenever the host delivers
//!         // new data; absent values leave the placeholder in place.
//!         if let Some(cmd) = self.age.set_reference(self.created_at) {
//!             return Some(cmd);
//!         }
//!
//!         // Forward tick messages so the display keeps advancing.
//!         self.age.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("age: {}", self.age.view())
//!     }
//! }
//! ```
//!
//! # Teardown
//!
//! Call [`Model::stop`] when the widget is removed. Ticks already in flight
//! are discarded, and stopping an idle counter is a no-op.

use crate::breakdown::Breakdown;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{Duration, SystemTime};

// Internal ID management for counter instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Generates unique identifiers for counter instances.
///
/// Unique IDs let several counters coexist in one application without
/// picking up each other's tick messages.
fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Text shown while no reference timestamp has been supplied.
pub const DEFAULT_PLACEHOLDER: &str = "---";

/// Message sent on every counter tick.
///
/// The counter schedules one of these per interval while running. Messages
/// carry the owning counter's `id` and an internal `tag`; the counter
/// rejects ticks whose id or tag does not match its own, so stray messages
/// from other counters, or from a tick chain that has since been replaced,
/// cannot advance the display.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Time at which the tick occurred.
    pub time: SystemTime,
    /// Identifier of the counter this message belongs to.
    pub id: i64,
    /// tag is used internally to keep at most one tick chain live.
    tag: i64,
}

/// The ageing counter model.
///
/// The model owns the reference timestamp (once supplied), the current
/// elapsed-time [`Breakdown`], and the identity of its tick chain. The
/// public fields hold display configuration and may be set directly or
/// through the option functions accepted by [`new`].
///
/// # Examples
///
/// ```rust
/// use bubbletea_agecounter::counter::{new, with_interval};
/// use std::time::Duration;
///
/// let counter = new(&[with_interval(Duration::from_secs(1))]);
/// assert!(counter.id() > 0);
/// assert!(!counter.running());
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Style applied to the formatted elapsed time.
    pub style: Style,
    /// Text shown while no reference timestamp is set.
    pub placeholder: String,
    /// Style applied to the placeholder text.
    pub placeholder_style: Style,
    /// Time between ticks. One second keeps the seconds field honest.
    pub interval: Duration,
    reference: Option<SystemTime>,
    breakdown: Breakdown,
    running: bool,
    id: i64,
    tag: i64,
}

/// Configuration option accepted by [`new`].
///
/// Implements the same functional options pattern the rest of the widget
/// family uses for construction.
pub enum CounterOption {
    /// Sets the style for the formatted elapsed time.
    WithStyle(Box<Style>),
    /// Sets the placeholder text shown before a reference arrives.
    WithPlaceholder(String),
    /// Sets the style for the placeholder text.
    WithPlaceholderStyle(Box<Style>),
    /// Sets the tick interval.
    WithInterval(Duration),
}

impl CounterOption {
    fn apply(&self, m: &mut Model) {
        match self {
            CounterOption::WithStyle(style) => m.style = style.as_ref().clone(),
            CounterOption::WithPlaceholder(text) => m.placeholder = text.clone(),
            CounterOption::WithPlaceholderStyle(style) => {
                m.placeholder_style = style.as_ref().clone()
            }
            CounterOption::WithInterval(interval) => m.interval = *interval,
        }
    }
}

/// Creates a CounterOption that sets the elapsed-time style.
pub fn with_style(style: Style) -> CounterOption {
    CounterOption::WithStyle(Box::new(style))
}

/// Creates a CounterOption that sets the placeholder text.
///
/// # Examples
///
/// ```rust
/// use bubbletea_agecounter::counter::{new, with_placeholder};
///
/// let counter = new(&[with_placeholder("pending")]);
/// assert!(counter.view().contains("pending"));
/// ```
pub fn with_placeholder(text: impl Into<String>) -> CounterOption {
    CounterOption::WithPlaceholder(text.into())
}

/// Creates a CounterOption that sets the placeholder style.
pub fn with_placeholder_style(style: Style) -> CounterOption {
    CounterOption::WithPlaceholderStyle(Box::new(style))
}

/// Creates a CounterOption that sets the tick interval.
pub fn with_interval(interval: Duration) -> CounterOption {
    CounterOption::WithInterval(interval)
}

/// Creates a new counter with the given configuration options.
///
/// # Examples
///
/// ```rust
/// use bubbletea_agecounter::counter::{new, with_placeholder, with_style};
/// use lipgloss_extras::prelude::*;
///
/// let plain = new(&[]);
///
/// let styled = new(&[
///     with_placeholder("waiting"),
///     with_style(Style::new().foreground(Color::from("212"))),
/// ]);
/// ```
pub fn new(opts: &[CounterOption]) -> Model {
    Model::new_with_options(opts)
}

impl Model {
    /// Creates a counter with default settings.
    ///
    /// The counter starts idle: no reference timestamp, placeholder `"---"`,
    /// one-second interval, and a fresh unique id.
    pub fn new() -> Self {
        Self {
            style: Style::new(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            placeholder_style: Style::new().foreground(Color::from("240")),
            interval: Duration::from_secs(1),
            reference: None,
            breakdown: Breakdown::default(),
            running: false,
            id: next_id(),
            tag: 0,
        }
    }

    /// Creates a counter from a slice of configuration options.
    pub fn new_with_options(opts: &[CounterOption]) -> Self {
        let mut m = Self::new();
        for opt in opts {
            opt.apply(&mut m);
        }
        m
    }

    /// Sets the elapsed-time style using the builder pattern.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Sets the placeholder text using the builder pattern.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Sets the placeholder style using the builder pattern.
    pub fn with_placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = style;
        self
    }

    /// Sets the tick interval using the builder pattern.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Returns the counter's unique identifier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_agecounter::counter::Model;
    ///
    /// let a = Model::new();
    /// let b = Model::new();
    /// assert_ne!(a.id(), b.id());
    /// ```
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns whether the tick chain is currently live.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Returns the last reference timestamp delivered by the host.
    ///
    /// This echoes the stored input value unchanged. It is never derived
    /// from the ticking breakdown.
    pub fn reference(&self) -> Option<SystemTime> {
        self.reference
    }

    /// Returns the current elapsed-time breakdown.
    pub fn breakdown(&self) -> Breakdown {
        self.breakdown
    }

    /// Delivers the host's reference timestamp, starting the counter if idle.
    ///
    /// `None` means the bound value is still absent: nothing starts and the
    /// placeholder stays up. With `Some`, the stored reference and the
    /// breakdown are recomputed from the wall clock on every call, which
    /// also corrects any drift accumulated by per-second incrementing. A
    /// reference in the future clamps to zero elapsed time.
    ///
    /// Returns the command that begins the tick chain on the idle-to-running
    /// transition, and `None` when the counter was already running: the
    /// existing chain keeps driving the display and no duplicate chain is
    /// created.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_agecounter::counter::new;
    /// use std::time::{Duration, SystemTime};
    ///
    /// let mut counter = new(&[]);
    /// assert!(counter.set_reference(None).is_none());
    /// assert!(!counter.running());
    ///
    /// let reference = SystemTime::now() - Duration::from_secs(90);
    /// assert!(counter.set_reference(Some(reference)).is_some());
    /// assert!(counter.set_reference(Some(reference)).is_none()); // already running
    /// ```
    pub fn set_reference(&mut self, reference: Option<SystemTime>) -> Option<Cmd> {
        let reference = reference?;
        self.reference = Some(reference);
        let elapsed = SystemTime::now()
            .duration_since(reference)
            .unwrap_or(Duration::ZERO);
        self.breakdown = Breakdown::from_duration(elapsed);
        self.start()
    }

    /// Starts the tick chain if a reference is set and the counter is idle.
    ///
    /// Returns `None` when already running or when no reference timestamp
    /// has been delivered yet; in both cases nothing changes.
    pub fn start(&mut self) -> Option<Cmd> {
        if self.running || self.reference.is_none() {
            return None;
        }
        self.running = true;
        Some(self.tick())
    }

    /// Stops the counter. Safe to call at any time, including when idle.
    ///
    /// Ticks already scheduled are rejected when they arrive, so no further
    /// updates happen after this returns.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Creates a tick message addressed to this counter.
    ///
    /// Useful in tests and for applications that want to drive an update
    /// manually.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_agecounter::counter::Model;
    ///
    /// let counter = Model::new();
    /// assert_eq!(counter.tick_msg().id, counter.id());
    /// ```
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            time: SystemTime::now(),
            id: self.id,
            tag: self.tag,
        }
    }

    /// Schedules the next tick after `interval`.
    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        let interval = self.interval;

        bubbletea_tick(interval, move |_| {
            Box::new(TickMsg {
                time: SystemTime::now(),
                id,
                tag,
            }) as Msg
        })
    }

    /// Processes messages and advances the counter.
    ///
    /// Only [`TickMsg`] is handled. A tick is accepted when the counter is
    /// running, the message id matches this counter, and the message tag
    /// matches the current chain; everything else returns `None` with no
    /// state change. An accepted tick advances the breakdown by one second,
    /// retires the old tag, and schedules the next tick.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_agecounter::counter::new;
    /// use std::time::{Duration, SystemTime};
    ///
    /// let mut counter = new(&[]);
    /// counter.set_reference(Some(SystemTime::now()));
    ///
    /// let tick = counter.tick_msg();
    /// let next = counter.update(Box::new(tick));
    /// assert!(next.is_some());
    /// assert_eq!(counter.breakdown().seconds, 1);
    /// ```
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(tick_msg) = msg.downcast_ref::<TickMsg>() {
            if !self.running {
                return None;
            }
            if tick_msg.id > 0 && tick_msg.id != self.id {
                return None;
            }
            // A stale tag means the tick belongs to a superseded chain.
            // Rejecting it keeps the counter from advancing twice per second.
            if tick_msg.tag > 0 && tick_msg.tag != self.tag {
                return None;
            }

            self.breakdown.advance();
            self.tag += 1;
            return Some(self.tick());
        }

        None
    }

    /// Renders the counter as a styled string.
    ///
    /// Shows the placeholder until a reference timestamp has been set, then
    /// the formatted breakdown, e.g. `5d 1h 2m 3s` or `2Y 5d 1h 2m 3s`.
    pub fn view(&self) -> String {
        if self.reference.is_none() {
            return self.placeholder_style.render(&self.placeholder);
        }
        self.style.render(&self.breakdown.to_string())
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl BubbleTeaModel for Model {
    /// Creates an idle counter showing the placeholder.
    ///
    /// No command is returned: ticking only begins once the host delivers a
    /// reference timestamp through [`Model::set_reference`].
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn past(secs: u64) -> SystemTime {
        SystemTime::now() - Duration::from_secs(secs)
    }

    #[test]
    fn test_new_defaults() {
        let counter = Model::new();
        assert!(counter.id() > 0);
        assert!(!counter.running());
        assert!(counter.reference().is_none());
        assert_eq!(counter.breakdown(), Breakdown::default());
        assert_eq!(counter.interval, Duration::from_secs(1));
        assert_eq!(counter.placeholder, DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn test_unique_ids() {
        let a = Model::new();
        let b = Model::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_options() {
        let counter = new(&[
            with_placeholder("pending"),
            with_interval(Duration::from_millis(500)),
        ]);
        assert_eq!(counter.placeholder, "pending");
        assert_eq!(counter.interval, Duration::from_millis(500));
    }

    #[test]
    fn test_builder_methods() {
        let counter = Model::new()
            .with_placeholder("n/a")
            .with_interval(Duration::from_secs(2));
        assert_eq!(counter.placeholder, "n/a");
        assert_eq!(counter.interval, Duration::from_secs(2));
    }

    #[test]
    fn test_view_shows_placeholder_until_reference() {
        let counter = Model::new();
        assert!(counter.view().contains(DEFAULT_PLACEHOLDER));
    }

    #[test]
    fn test_set_reference_none_is_noop() {
        let mut counter = Model::new();
        assert!(counter.set_reference(None).is_none());
        assert!(!counter.running());
        assert!(counter.reference().is_none());
        assert!(counter.view().contains(DEFAULT_PLACEHOLDER));
    }

    #[test]
    fn test_set_reference_computes_breakdown_and_starts() {
        let mut counter = Model::new();
        let cmd = counter.set_reference(Some(past(90_061)));

        assert!(cmd.is_some());
        assert!(counter.running());
        let b = counter.breakdown();
        assert_eq!((b.days, b.hours, b.minutes), (1, 1, 1));
    }

    #[test]
    fn test_set_reference_twice_starts_one_chain() {
        let mut counter = Model::new();
        let reference = past(10);

        assert!(counter.set_reference(Some(reference)).is_some());
        // A second delivery resyncs the breakdown but must not produce a
        // second tick chain.
        assert!(counter.set_reference(Some(reference)).is_none());
        assert!(counter.running());
    }

    #[test]
    fn test_set_reference_future_clamps_to_zero() {
        let mut counter = Model::new();
        let cmd = counter.set_reference(Some(SystemTime::now() + Duration::from_secs(3_600)));

        assert!(cmd.is_some());
        assert_eq!(counter.breakdown(), Breakdown::default());
    }

    #[test]
    fn test_reference_echoes_input() {
        let mut counter = Model::new();
        let reference = past(42);
        counter.set_reference(Some(reference));
        assert_eq!(counter.reference(), Some(reference));
    }

    #[test]
    fn test_start_without_reference_is_noop() {
        let mut counter = Model::new();
        assert!(counter.start().is_none());
        assert!(!counter.running());
    }

    #[test]
    fn test_stop_when_idle_is_noop() {
        let mut counter = Model::new();
        counter.stop();
        assert!(!counter.running());
        assert!(counter.reference().is_none());
        assert_eq!(counter.breakdown(), Breakdown::default());
    }

    #[test]
    fn test_update_tick_advances_breakdown() {
        let mut counter = Model::new();
        counter.set_reference(Some(past(0)));
        let before = counter.breakdown().total_secs();

        let next = counter.update(Box::new(counter.tick_msg()));
        assert!(next.is_some());
        assert_eq!(counter.breakdown().total_secs(), before + 1);
    }

    #[test]
    fn test_update_tick_rejected_when_idle() {
        let mut counter = Model::new();
        let msg = TickMsg {
            time: SystemTime::now(),
            id: counter.id(),
            tag: 0,
        };

        assert!(counter.update(Box::new(msg)).is_none());
        assert_eq!(counter.breakdown(), Breakdown::default());
    }

    #[test]
    fn test_update_tick_rejected_after_stop() {
        let mut counter = Model::new();
        counter.set_reference(Some(past(5)));
        let pending = counter.tick_msg();

        counter.stop();
        let before = counter.breakdown();
        assert!(counter.update(Box::new(pending)).is_none());
        assert_eq!(counter.breakdown(), before);
    }

    #[test]
    fn test_update_tick_rejected_for_wrong_id() {
        let mut counter = Model::new();
        counter.set_reference(Some(past(5)));
        let msg = TickMsg {
            time: SystemTime::now(),
            id: counter.id() + 999,
            tag: 0,
        };

        let before = counter.breakdown();
        assert!(counter.update(Box::new(msg)).is_none());
        assert_eq!(counter.breakdown(), before);
    }

    #[test]
    fn test_update_tick_rejected_for_stale_tag() {
        let mut counter = Model::new();
        counter.set_reference(Some(past(5)));

        // First accepted tick retires tag 0.
        let first = counter.tick_msg();
        assert!(counter.update(Box::new(first.clone())).is_some());

        // A replayed tick from the old chain is discarded.
        let before = counter.breakdown();
        let stale = TickMsg { tag: 999, ..first };
        assert!(counter.update(Box::new(stale)).is_none());
        assert_eq!(counter.breakdown(), before);
    }

    #[test]
    fn test_update_ignores_unrelated_messages() {
        let mut counter = Model::new();
        counter.set_reference(Some(past(5)));

        struct Other;
        let before = counter.breakdown();
        assert!(counter.update(Box::new(Other)).is_none());
        assert_eq!(counter.breakdown(), before);
    }

    #[test]
    fn test_view_renders_breakdown_after_reference() {
        let mut counter = Model::new();
        counter.set_reference(Some(past(90_061)));
        // Default style renders unadorned text.
        assert_eq!(counter.view(), counter.breakdown().to_string());
    }

    #[test]
    fn test_minute_carry_through_updates() {
        let mut counter = Model::new();
        counter.set_reference(Some(past(59)));
        assert_eq!(counter.breakdown().seconds, 59);

        counter.update(Box::new(counter.tick_msg()));
        let b = counter.breakdown();
        assert_eq!((b.minutes, b.seconds), (1, 0));
    }
}

#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-agecounter/")]

//! # bubbletea-agecounter
//!
//! A live ageing counter widget for terminal applications built with
//! [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs).
//!
//! The widget shows how much time has passed since a reference timestamp
//! supplied by the hosting application, refreshed once per second and
//! formatted as years, months, days, hours, minutes and seconds using
//! fixed-length calendar units (12 months per year, 30 days per month).
//! Until the host provides the timestamp, a placeholder (`---` by default)
//! is displayed.
//!
//! ## Overview
//!
//! The crate follows the Elm Architecture conventions used across the
//! bubbletea-rs ecosystem: the counter is a model with `update()` and
//! `view()` methods, driven by messages the runtime delivers. Ticking is
//! scheduled through `bubbletea_rs::tick`, and every counter instance
//! carries a unique id so several counters can coexist in one program
//! without stealing each other's ticks.
//!
//! - [`counter`] holds the widget model: lifecycle, tick scheduling,
//!   styling, and rendering.
//! - [`breakdown`] holds the elapsed-time arithmetic: decomposition,
//!   one-second advancement with carry propagation, and formatting.
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_agecounter::prelude::*;
//! use bubbletea_rs::{Model, Msg, Cmd};
//! use std::time::SystemTime;
//!
//! struct App {
//!     record_created: Option<SystemTime>,
//!     age: AgeCounter,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let app = App {
//!             record_created: None,
//!             age: counter_new(&[]),
//!         };
//!         (app, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         // Deliver the bound timestamp whenever the host refreshes it;
//!         // the counter starts ticking the first time one is present.
//!         if let Some(cmd) = self.age.set_reference(self.record_created) {
//!             return Some(cmd);
//!         }
//!         self.age.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("In current substatus for: {}", self.age.view())
//!     }
//! }
//! ```
//!
//! When the hosting view is torn down, call [`counter::Model::stop`]; any
//! tick still in flight is discarded and stopping an idle counter does
//! nothing.
//!
//! ## Quick Start
//!
//! Add the crate to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bubbletea-agecounter = "0.1"
//! bubbletea-rs = "0.0.7"
//! ```
//!
//! Then create a counter and hand it the timestamp to age against:
//!
//! ```rust
//! use bubbletea_agecounter::counter::new;
//! use std::time::{Duration, SystemTime};
//!
//! let mut age = new(&[]);
//! let start_cmd = age.set_reference(Some(SystemTime::now() - Duration::from_secs(3_723)));
//! assert!(start_cmd.is_some());
//! assert_eq!(age.view(), "0d 1h 2m 3s");
//! ```

pub mod breakdown;
pub mod counter;

pub use breakdown::Breakdown;
pub use counter::Model as AgeCounter;

/// Convenient re-exports for typical usage.
///
/// ```rust
/// use bubbletea_agecounter::prelude::*;
///
/// let counter = counter_new(&[]);
/// assert!(!counter.running());
/// ```
pub mod prelude {
    pub use crate::breakdown::{
        Breakdown, SECS_PER_DAY, SECS_PER_HOUR, SECS_PER_MINUTE, SECS_PER_MONTH, SECS_PER_YEAR,
    };
    pub use crate::counter::{
        new as counter_new, with_interval, with_placeholder, with_placeholder_style, with_style,
        CounterOption, Model as AgeCounter, TickMsg as CounterTickMsg, DEFAULT_PLACEHOLDER,
    };
}

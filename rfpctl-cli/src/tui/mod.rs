//! Three-pane TUI for the RFP workflow
//!
//! One page, three independent panes, no shared store:
//! - Composer: draft free-form text, create an RFP, see the server's record
//! - Roster: list/add vendors, multi-select, dispatch an RFP by id
//! - Comparator: fetch and view the comparison payload for an RFP id
//!
//! The panes never talk to each other in-process; the user carries the RFP
//! id between them by typing it, exactly like the source system.

pub mod app;
pub mod event;
pub mod terminal;
pub mod ui;

pub use app::{App, Mode, Pane, Phase};
pub use terminal::run;

//! A searchable, keyboard-accessible combobox for the terminal.
//!
//! The combobox offers a list of Star Wars characters, narrowed down as the user
//! types. Whether its menu is open is *controlled* by the application: the
//! [`Controller`] owns that flag and the displayed items, while the
//! [`ComboboxState`] owns the query, the highlighted row and the selection, and
//! reports every change to the controller.
//!
//! # Examples
//!
//! ```no_run
//! use combobox::prelude::*;
//!
//! let options = ComboboxOptionsBuilder::default()
//!     .height(String::from("12"))
//!     .build()
//!     .unwrap();
//!
//! let output = Session::run_with(options).unwrap();
//! if let Some(item) = output.selected_item {
//!     println!("{}", item.name);
//! }
//! ```
//!
//! Filtering can be used on its own:
//!
//! ```
//! use combobox::{filter, item::ITEMS};
//!
//! let names: Vec<String> = filter(&ITEMS, "solo").into_iter().map(|i| i.name).collect();
//! assert_eq!(
//!     names,
//!     ["Anakin Solo", "Han Solo", "Jacen Solo", "Jaina Solo", "Senator Bail Organa"]
//! );
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub use crate::combobox::{ComboboxState, StateChangeType, StateChanges};
pub use crate::controller::Controller;
pub use crate::filter::filter;
pub use crate::item::{Item, item_to_string};
pub use crate::options::ComboboxOptions;
pub use crate::output::ComboboxOutput;
pub use crate::session::Session;

pub mod binds;
pub mod combobox;
pub mod controller;
pub mod filter;
pub mod fuzzy_matcher;
pub mod item;
pub mod names;
pub mod options;
mod output;
pub mod prelude;
mod session;
pub mod theme;
pub mod tui;

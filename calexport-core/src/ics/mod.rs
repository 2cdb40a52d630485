//! ICS document export.
//!
//! This is separate from the `webcal://` link, which points calendar apps at
//! a hosted `.ics`. Here the document itself is produced locally.

mod generate;

pub use generate::{generate_ics, ics_data_uri};

//! Presentation adapters: currency text, schedule export, share links

mod currency;
pub mod export;
mod share;

pub use currency::{format_brl, format_percent};
pub use export::{export_schedule, write_schedule_csv, DEFAULT_EXPORT_FILE};
pub use share::share_link;

//! Repository Implementations
//!
//! File-backed implementations of the domain storage ports.

mod dish;
mod order;
mod report;

pub use dish::{decode_dish, encode_dish, TextDishStore};
pub use order::{render_ticket, TicketOrderStore};
pub use report::TextReportWriter;

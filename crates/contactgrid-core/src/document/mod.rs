//! Contact sheet state and logic (UI-agnostic).

mod eval;
mod io;
mod sort;
mod state;

pub use eval::eval_function;
pub use state::{ContactRow, ContactSheet, HEADERS, SortOptions};

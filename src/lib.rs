//! Tally
pub mod core;
pub mod layout;
pub mod logging;
pub mod rendering;
pub mod systems;
#[cfg(test)]
mod tests;
pub mod ui;

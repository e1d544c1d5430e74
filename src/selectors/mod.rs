#[cfg(feature = "dialog")]
pub mod dialog;
pub mod fixed;
pub mod prompt;

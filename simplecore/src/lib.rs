//! simplecore — shared library for the simple calculator

pub mod eval;
pub mod repaint;
pub mod theme;

pub use eval::{evaluate, CalcResult, EvalError, Operator};
pub use repaint::RepaintController;
pub use theme::FlatTheme;

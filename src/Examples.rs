//! examples of usage of RustedComputor
/// worked equations of every kind the solver reports
pub mod equation_examples;

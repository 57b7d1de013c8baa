//! Mathematical utilities: closed-form log-densities for the renewal model.

pub mod loglik;

pub use loglik::*;

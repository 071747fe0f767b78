//! Game controllers built on the engine.

pub mod tab;

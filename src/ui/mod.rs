//! Per-step render functions. Each one reads the answer record, renders its
//! panel, and pushes actions for the manager; no step talks to the record
//! directly.

pub mod extras;
pub mod housing;
pub mod lifestyle;
pub mod personal;
pub mod widgets;

//! Core library for battleplan: intel intake and deterministic battle plan
//! generation. Pure logic, no I/O beyond reading intel files.

pub mod intel;
pub mod plan;

pub use intel::{Intel, StrategicChoice};
pub use plan::{BattlePlan, generate_battle_plan};

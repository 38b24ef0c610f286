//! Core data models for the standings service.

mod fixture;
mod ids;
mod season;
mod sport;
mod stage;
mod team;

pub use fixture::*;
pub use ids::*;
pub use season::*;
pub use sport::*;
pub use stage::*;
pub use team::*;

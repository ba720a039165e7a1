//! Daycycle - simulated day/night clock and sun angle engine

pub mod core;
pub mod cycle;

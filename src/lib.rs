//! Wound Sim - zone damage and bleeding for living entities

pub mod combat;
pub mod core;
pub mod entity;
pub mod simulation;

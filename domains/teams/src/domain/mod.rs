//! Teams domain layer: entities, reconciliation, selection, wire decoding

pub mod entities;
pub mod reconcile;
pub mod selection;
pub mod wire;

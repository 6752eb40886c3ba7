//! Shared graph algorithms used by all three analyzers: components, bounded
//! path/cycle enumeration, classical centralities, and the dense
//! eigensolver behind the signed-balance bipartition.

pub mod centrality;
pub mod components;
pub mod cycles;
pub mod paths;
pub mod spectral;

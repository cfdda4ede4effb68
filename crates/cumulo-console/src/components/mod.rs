//! View components
//!
//! Each view owns its own mock collections and signals; the shell (sidebar +
//! header) and the primitives are shared.

pub mod clusters;
pub mod header;
pub mod icons;
pub mod inspection;
pub mod middleware;
pub mod network;
pub mod overview;
pub mod primitives;
pub mod settings;
pub mod sidebar;
pub mod storage;
pub mod workloads;

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat`, `session`, `ui`) so individual
//! components can depend on small focused models. The structs are plain data
//! wrapped in `RwSignal` contexts by the app root, which keeps every
//! transition testable on the host without a browser.

pub mod chat;
pub mod session;
pub mod ui;

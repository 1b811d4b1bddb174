// ABOUTME: Persistence layer for itemd, wrapping a SQLite-backed item table.
// ABOUTME: Provides the Item model, a per-request Session, and the SessionManager.

pub mod item;
pub mod session;

pub use item::Item;
pub use session::{Session, SessionManager, StoreError};

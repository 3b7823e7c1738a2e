//! # Quickboard Core
//!
//! Core business logic and domain models for the Quickboard kanban ticket
//! board.
//!
//! This crate provides the grouping/sorting engine that turns a flat list
//! of tickets into ordered board columns, the display-preference model it
//! consumes, and the two collaborators around it: a remote board source and
//! a persisted settings store. It carries no dependency on any specific UI
//! implementation.

pub mod domain;
pub mod error;
pub mod remote;
pub mod storage;

// Re-export commonly used types
pub use domain::{
    board::BoardSnapshot,
    grouping::{group_and_sort, group_tickets, GroupKey, GroupMap, TicketGroup},
    settings::DisplaySettings,
    sorting::{sort_tickets, SortKey},
    ticket::{Priority, Ticket, TicketId, TicketStatus},
    user::{User, UserId},
};
pub use error::{QuickboardError, Result};
pub use remote::BoardSource;
pub use storage::SettingsStore;

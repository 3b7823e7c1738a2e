use crate::domain::grouping::{group_and_sort, GroupMap};
use crate::domain::settings::DisplaySettings;
use crate::domain::ticket::Ticket;
use crate::domain::user::User;
use serde::{Deserialize, Serialize};

/// The complete dataset one board fetch delivers
///
/// Applied atomically: the engine only ever sees a fully populated (or
/// fully empty) snapshot, never a partial one. The default value is the
/// empty dataset the shell falls back to when a fetch fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl BoardSnapshot {
    pub fn new(tickets: Vec<Ticket>, users: Vec<User>) -> Self {
        Self { tickets, users }
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty() && self.users.is_empty()
    }

    /// Runs the full engine pass over this snapshot
    pub fn group_and_sort(&self, settings: &DisplaySettings) -> GroupMap {
        group_and_sort(&self.tickets, &self.users, settings)
    }
}

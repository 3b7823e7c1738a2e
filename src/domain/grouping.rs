use crate::domain::settings::DisplaySettings;
use crate::domain::sorting::sort_tickets;
use crate::domain::ticket::{Priority, Ticket};
use crate::domain::user::User;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Group name for tickets whose user reference does not resolve
pub const UNASSIGNED_GROUP: &str = "Unassigned";

/// Fields available for partitioning tickets into board columns
///
/// Conversion from a string never fails: any unrecognized key becomes
/// `Unknown`, which produces an empty board instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GroupKey {
    Status,
    User,
    Priority,
    Unknown,
}

impl GroupKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::User => "user",
            Self::Priority => "priority",
            Self::Unknown => "unknown",
        }
    }
}

impl From<&str> for GroupKey {
    fn from(s: &str) -> Self {
        match s {
            "status" => Self::Status,
            "user" => Self::User,
            "priority" => Self::Priority,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for GroupKey {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<GroupKey> for String {
    fn from(key: GroupKey) -> Self {
        key.as_str().to_string()
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named board column holding its tickets in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketGroup {
    pub name: String,
    pub tickets: Vec<Ticket>,
}

impl TicketGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tickets: Vec::new(),
        }
    }

    /// Number of tickets in this column, shown in the column header
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

/// Derived view mapping group names to their ordered tickets
///
/// Groups keep insertion order: status and user groups appear in first-seen
/// order, priority groups in fixed ascending label order. The map is
/// recomputed from its inputs on every change and never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupMap {
    groups: Vec<TicketGroup>,
}

impl GroupMap {
    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Looks up a group by its display name
    pub fn get(&self, name: &str) -> Option<&TicketGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn groups(&self) -> &[TicketGroup] {
        &self.groups
    }

    pub fn iter(&self) -> impl Iterator<Item = &TicketGroup> {
        self.groups.iter()
    }

    /// Total tickets across all groups
    pub fn total_tickets(&self) -> usize {
        self.groups.iter().map(TicketGroup::len).sum()
    }

    /// Returns the group with the given name, creating it at the end of the
    /// map if it does not exist yet
    fn entry(&mut self, name: &str) -> &mut TicketGroup {
        let index = match self.groups.iter().position(|g| g.name == name) {
            Some(index) => index,
            None => {
                self.groups.push(TicketGroup::new(name));
                self.groups.len() - 1
            }
        };
        &mut self.groups[index]
    }
}

impl<'a> IntoIterator for &'a GroupMap {
    type Item = &'a TicketGroup;
    type IntoIter = std::slice::Iter<'a, TicketGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Partitions tickets into named groups according to the group key
///
/// Every ticket lands in exactly one group. Status and user groupings are
/// sparse (only values actually observed), priority grouping is total
/// (always all five levels, possibly empty). An unrecognized key yields an
/// empty map; this function never fails.
pub fn group_tickets(tickets: &[Ticket], users: &[User], key: GroupKey) -> GroupMap {
    match key {
        GroupKey::Status => group_by_status(tickets),
        GroupKey::User => group_by_user(tickets, users),
        GroupKey::Priority => group_by_priority(tickets),
        GroupKey::Unknown => GroupMap::default(),
    }
}

/// Groups then orders: the full engine pass the board shell runs on every
/// recomputation
pub fn group_and_sort(tickets: &[Ticket], users: &[User], settings: &DisplaySettings) -> GroupMap {
    let mut map = group_tickets(tickets, users, settings.group_by);
    for group in &mut map.groups {
        group.tickets = sort_tickets(&group.tickets, settings.sort_by);
    }
    map
}

fn group_by_status(tickets: &[Ticket]) -> GroupMap {
    let mut map = GroupMap::default();
    for ticket in tickets {
        map.entry(ticket.status.label()).tickets.push(ticket.clone());
    }
    map
}

fn group_by_user(tickets: &[Ticket], users: &[User]) -> GroupMap {
    // Index users by id up front so the lookup stays linear in tickets.
    let names_by_id: HashMap<&str, &str> = users
        .iter()
        .map(|u| (u.id.as_str(), u.name.as_str()))
        .collect();

    let mut map = GroupMap::default();
    for ticket in tickets {
        let name = ticket
            .user_id
            .as_ref()
            .and_then(|id| names_by_id.get(id.as_str()))
            .copied()
            .unwrap_or(UNASSIGNED_GROUP);
        map.entry(name).tickets.push(ticket.clone());
    }
    map
}

fn group_by_priority(tickets: &[Ticket]) -> GroupMap {
    let mut map = GroupMap::default();
    for level in Priority::ALL {
        let group = map.entry(level.label());
        group
            .tickets
            .extend(tickets.iter().filter(|t| t.priority == level).cloned());
    }
    map
}

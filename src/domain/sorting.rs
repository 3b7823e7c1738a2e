use crate::domain::ticket::Ticket;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Fields available for ordering tickets within a group
///
/// Conversion from a string never fails: any unrecognized key becomes
/// `Unknown`, which sorts like `Title`. Persisted preferences therefore
/// degrade instead of erroring when they carry a stale key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    Priority,
    Title,
    Unknown,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::Title => "title",
            Self::Unknown => "unknown",
        }
    }
}

impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        match s {
            "priority" => Self::Priority,
            "title" => Self::Title,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for SortKey {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Orders tickets by the given sort key, returning a new vector
///
/// The input is never reordered in place. The sort is stable: tickets that
/// compare equal keep the relative order they had in the input, so a board
/// re-render cannot visibly swap equal-priority cards.
///
/// # Examples
/// ```
/// use quickboard_core::domain::sorting::{sort_tickets, SortKey};
/// use quickboard_core::domain::ticket::{Priority, Ticket, TicketStatus};
///
/// let tickets = vec![
///     Ticket::new("CAM-1", "Zeta", TicketStatus::Todo, Priority::Medium),
///     Ticket::new("CAM-2", "Alpha", TicketStatus::Todo, Priority::Urgent),
/// ];
///
/// let ordered = sort_tickets(&tickets, SortKey::Priority);
/// assert_eq!(ordered[0].id.as_str(), "CAM-2");
/// ```
pub fn sort_tickets(tickets: &[Ticket], key: SortKey) -> Vec<Ticket> {
    let mut ordered = tickets.to_vec();
    ordered.sort_by(|a, b| match key {
        SortKey::Priority => b.priority.cmp(&a.priority),
        // Unrecognized keys fall back to title ordering.
        SortKey::Title | SortKey::Unknown => compare_titles(a, b),
    });
    ordered
}

/// Case-insensitive title comparison, ascending
fn compare_titles(a: &Ticket, b: &Ticket) -> Ordering {
    a.title.to_lowercase().cmp(&b.title.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ticket::{Priority, TicketStatus};

    fn ticket(id: &str, title: &str, priority: Priority) -> Ticket {
        Ticket::new(id, title, TicketStatus::Todo, priority)
    }

    #[test]
    fn test_sort_by_priority_descending() {
        let tickets = vec![
            ticket("CAM-1", "Low", Priority::Low),
            ticket("CAM-2", "Urgent", Priority::Urgent),
            ticket("CAM-3", "Medium", Priority::Medium),
        ];

        let ordered = sort_tickets(&tickets, SortKey::Priority);

        assert_eq!(ordered[0].id.as_str(), "CAM-2");
        assert_eq!(ordered[1].id.as_str(), "CAM-3");
        assert_eq!(ordered[2].id.as_str(), "CAM-1");
    }

    #[test]
    fn test_sort_by_priority_is_stable_for_ties() {
        let tickets = vec![
            ticket("CAM-1", "First", Priority::High),
            ticket("CAM-2", "Second", Priority::High),
            ticket("CAM-3", "Third", Priority::High),
            ticket("CAM-4", "Above", Priority::Urgent),
        ];

        let ordered = sort_tickets(&tickets, SortKey::Priority);

        assert_eq!(ordered[0].id.as_str(), "CAM-4");
        // Equal priorities keep input order
        assert_eq!(ordered[1].id.as_str(), "CAM-1");
        assert_eq!(ordered[2].id.as_str(), "CAM-2");
        assert_eq!(ordered[3].id.as_str(), "CAM-3");
    }

    #[test]
    fn test_sort_by_title_ascending() {
        let tickets = vec![
            ticket("CAM-1", "Charlie", Priority::Low),
            ticket("CAM-2", "Alpha", Priority::Urgent),
            ticket("CAM-3", "Bravo", Priority::Medium),
        ];

        let ordered = sort_tickets(&tickets, SortKey::Title);

        assert_eq!(ordered[0].title, "Alpha");
        assert_eq!(ordered[1].title, "Bravo");
        assert_eq!(ordered[2].title, "Charlie");
    }

    #[test]
    fn test_sort_by_title_case_insensitive() {
        let tickets = vec![
            ticket("CAM-1", "zebra", Priority::Low),
            ticket("CAM-2", "Apple", Priority::Low),
            ticket("CAM-3", "BANANA", Priority::Low),
        ];

        let ordered = sort_tickets(&tickets, SortKey::Title);

        assert_eq!(ordered[0].title, "Apple");
        assert_eq!(ordered[1].title, "BANANA");
        assert_eq!(ordered[2].title, "zebra");
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let tickets = vec![
            ticket("CAM-1", "B", Priority::Low),
            ticket("CAM-2", "A", Priority::Urgent),
        ];

        let _ = sort_tickets(&tickets, SortKey::Title);

        assert_eq!(tickets[0].id.as_str(), "CAM-1");
        assert_eq!(tickets[1].id.as_str(), "CAM-2");
    }

    #[test]
    fn test_unknown_key_sorts_like_title() {
        let tickets = vec![
            ticket("CAM-1", "Charlie", Priority::Urgent),
            ticket("CAM-2", "Alpha", Priority::Low),
        ];

        let by_unknown = sort_tickets(&tickets, SortKey::from("bogus"));
        let by_title = sort_tickets(&tickets, SortKey::Title);

        assert_eq!(by_unknown, by_title);
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!(SortKey::from("priority"), SortKey::Priority);
        assert_eq!(SortKey::from("title"), SortKey::Title);
        assert_eq!(SortKey::from("bogus"), SortKey::Unknown);
    }
}

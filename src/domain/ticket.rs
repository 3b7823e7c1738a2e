use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::user::UserId;
use crate::error::QuickboardError;

/// Unique identifier for a ticket (e.g., CAM-1, CAM-2)
///
/// Ticket ids are assigned by the remote board service and treated as
/// opaque strings on this side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TicketId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TicketId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of a ticket on the board
///
/// Serialized with the same display strings the remote endpoint uses,
/// so the wire value and the column label coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    Todo,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
    Cancelled,
}

impl TicketStatus {
    /// Display label, used as the group name when grouping by status
    pub fn label(&self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Column-header glyph for this status
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Todo => "○",
            Self::InProgress => "⟳",
            Self::Done => "✓",
            Self::Cancelled => "✕",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Ticket priority, ordered from no priority (0) up to urgent (4)
///
/// The remote endpoint encodes priority as a bare integer; values outside
/// 0-4 are rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    NoPriority = 0,
    Low = 1,
    Medium = 2,
    High = 3,
    Urgent = 4,
}

impl Priority {
    /// All priority levels in ascending order; priority grouping emits one
    /// group per entry regardless of the tickets observed.
    pub const ALL: [Priority; 5] = [
        Self::NoPriority,
        Self::Low,
        Self::Medium,
        Self::High,
        Self::Urgent,
    ];

    /// Display label, used as the group name when grouping by priority
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoPriority => "No priority",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }

    /// Card badge icon for this priority level
    pub fn icon(&self) -> &'static str {
        match self {
            Self::NoPriority => "◽",
            Self::Low => "🔹",
            Self::Medium => "🔷",
            Self::High => "🔺",
            Self::Urgent => "🔴",
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = QuickboardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NoPriority),
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            3 => Ok(Self::High),
            4 => Ok(Self::Urgent),
            other => Err(QuickboardError::InvalidPriority(other)),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority as u8
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A board ticket as delivered by the remote endpoint
///
/// Tickets are immutable once fetched; the engine only ever copies them
/// into derived views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    pub status: TicketStatus,
    pub priority: Priority,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub tag: Vec<String>,
}

impl Ticket {
    /// Creates an unassigned, untagged ticket
    pub fn new(
        id: impl Into<TicketId>,
        title: impl Into<String>,
        status: TicketStatus,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status,
            priority,
            user_id: None,
            tag: Vec::new(),
        }
    }

    /// Assigns the ticket to a user
    pub fn with_user(mut self, user_id: impl Into<UserId>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Attaches tag labels
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tag = tags;
        self
    }
}

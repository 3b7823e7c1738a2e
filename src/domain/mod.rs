pub mod board;
pub mod grouping;
pub mod settings;
pub mod sorting;
pub mod ticket;
pub mod user;

pub use board::BoardSnapshot;
pub use grouping::{group_and_sort, group_tickets, GroupKey, GroupMap, TicketGroup};
pub use settings::DisplaySettings;
pub use sorting::{sort_tickets, SortKey};
pub use ticket::{Priority, Ticket, TicketId, TicketStatus};
pub use user::{User, UserId};

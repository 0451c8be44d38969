use serde::{Deserialize, Serialize};

/// Ticket category. Fixed, closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

impl TicketCategory {
    pub const ALL: [TicketCategory; 3] = [
        TicketCategory::Adult,
        TicketCategory::Child,
        TicketCategory::Infant,
    ];

    /// Infants sit on an adult's lap and are not allocated a seat.
    pub const fn occupies_seat(self) -> bool {
        !matches!(self, TicketCategory::Infant)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TicketCategory::Adult => "ADULT",
            TicketCategory::Child => "CHILD",
            TicketCategory::Infant => "INFANT",
        }
    }
}

impl core::fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

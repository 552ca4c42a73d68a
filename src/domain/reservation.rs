use std::fmt;

/// Receipt numbers are handed out by the ledger, starting at 1.
pub type Receipt = u64;

/// Lifecycle state of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    Confirmed,
    Completed,
    Cancelled,
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReservationStatus::Confirmed => "Confirmed",
            ReservationStatus::Completed => "Completed",
            ReservationStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

/// A table booking held by the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub receipt: Receipt,
    pub name: String,
    /// `YYYY/MM/DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub num_people: u32,
    pub contact_num: String,
    pub status: ReservationStatus,
    pub payment: f64,
}

/// Payload for creating a new reservation.
///
/// The receipt, status and payment are assigned by the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationCreate {
    pub name: String,
    pub date: String,
    pub time: String,
    pub num_people: u32,
    pub contact_num: String,
}

impl ReservationCreate {
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        num_people: u32,
        contact_num: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            time: time.into(),
            num_people,
            contact_num: contact_num.into(),
        }
    }
}

impl Reservation {
    pub(crate) fn from_create(receipt: Receipt, params: ReservationCreate) -> Self {
        Self {
            receipt,
            name: params.name,
            date: params.date,
            time: params.time,
            num_people: params.num_people,
            contact_num: params.contact_num,
            status: ReservationStatus::Confirmed,
            payment: 0.0,
        }
    }

    pub fn is_confirmed_on(&self, date: &str) -> bool {
        self.status == ReservationStatus::Confirmed && self.date == date
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Receipt: {}", self.receipt)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Date: {}", self.date)?;
        writeln!(f, "Time: {}", self.time)?;
        writeln!(f, "Number of People: {}", self.num_people)?;
        writeln!(f, "Contact Number: {}", self.contact_num)?;
        writeln!(f, "Status: {}", self.status)?;
        write!(f, "{}", "-".repeat(40))
    }
}

/// What a successful payment reports back.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSummary {
    pub receipt: Receipt,
    pub bill_amount: f64,
    pub reservation_fee: f64,
    /// May be negative when the bill is below the fee.
    pub remaining_balance: f64,
}

/// What a successful cancellation reports back.
#[derive(Debug, Clone, PartialEq)]
pub struct CancelOutcome {
    pub receipt: Receipt,
    pub date: String,
    pub tables_available: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reservation_block_rendering() {
        let reservation = Reservation::from_create(
            3,
            ReservationCreate::new("Alice", "2025/05/10", "12:00", 4, "555"),
        );
        let rendered = reservation.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Receipt: 3");
        assert_eq!(lines[4], "Number of People: 4");
        assert_eq!(lines[6], "Status: Confirmed");
        assert_eq!(lines[7], "-".repeat(40));
    }
}

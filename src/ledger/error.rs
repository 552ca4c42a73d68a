use thiserror::Error;

use crate::domain::Receipt;

/// Errors that can occur during reservation operations.
///
/// Every variant is a rejection; the ledger is left unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LedgerError {
    #[error("Invalid date: {0}. Please enter a valid date in the format YYYY/MM/DD.")]
    InvalidDate(String),
    #[error("Invalid time format: {0}. Please use HH:MM format.")]
    InvalidTimeFormat(String),
    #[error("Reservation time {time} is outside of operating hours ({opening} - {closing}).")]
    OutsideOperatingHours {
        time: String,
        opening: String,
        closing: String,
    },
    #[error("Invalid party size {requested}: between 1 and {max} people per table allowed.")]
    InvalidPartySize { requested: u32, max: u32 },
    #[error("Sorry, all tables are booked for {0}.")]
    DateFullyBooked(String),
    #[error("Reservation with receipt number {0} not found.")]
    NotFound(Receipt),
    #[error("The receipt {0} is cancelled.")]
    ReceiptCancelled(Receipt),
    #[error("Invalid bill amount: {0}. Please enter a finite amount.")]
    InvalidBillAmount(f64),
    #[error("Reservation with receipt number {0} not found or not confirmed.")]
    NotConfirmed(Receipt),
    #[error("Reservation service unavailable: {0}")]
    ServiceUnavailable(String),
}

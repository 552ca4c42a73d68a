//! The reservation ledger: an ordered, in-memory record store with business rules.

pub mod error;
pub mod validation;

pub use error::*;

use tracing::{debug, info, warn};

use crate::config::{CancellationPolicy, LedgerConfig};
use crate::domain::{
    CancelOutcome, PaymentSummary, Receipt, Reservation, ReservationCreate, ReservationStatus,
};
use validation::{is_time_format_valid, is_time_within_operating_hours, is_valid_date};

/// Owns every reservation in insertion order along with the receipt counter.
#[derive(Debug)]
pub struct Ledger {
    config: LedgerConfig,
    reservations: Vec<Reservation>,
    next_receipt: Receipt,
}

impl Ledger {
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            reservations: Vec::new(),
            next_receipt: 1,
        }
    }

    pub fn add_reservation(&mut self, params: ReservationCreate) -> Result<Receipt, LedgerError> {
        self.check_slot(&params.date, &params.time)?;

        let max = self.config.max_people_per_table;
        if params.num_people == 0 || params.num_people > max {
            return Err(LedgerError::InvalidPartySize {
                requested: params.num_people,
                max,
            });
        }

        self.check_capacity(&params.date, None)?;

        let receipt = self.next_receipt;
        self.next_receipt += 1;
        self.reservations
            .push(Reservation::from_create(receipt, params));

        info!(receipt, "Reservation added");
        Ok(receipt)
    }

    pub fn search_reservation(&self, receipt: Receipt) -> Result<&Reservation, LedgerError> {
        self.reservations
            .iter()
            .find(|r| r.receipt == receipt)
            .ok_or(LedgerError::NotFound(receipt))
    }

    pub fn cancel_reservation(&mut self, receipt: Receipt) -> Result<CancelOutcome, LedgerError> {
        let index = self.position(receipt)?;

        let date = match self.config.cancellation {
            CancellationPolicy::Remove => self.reservations.remove(index).date,
            CancellationPolicy::Retain => {
                let reservation = &mut self.reservations[index];
                if reservation.status == ReservationStatus::Cancelled {
                    return Err(LedgerError::ReceiptCancelled(receipt));
                }
                reservation.status = ReservationStatus::Cancelled;
                reservation.date.clone()
            }
        };

        let tables_available = self.tables_available(&date);
        info!(receipt, %date, tables_available, "Reservation cancelled");
        Ok(CancelOutcome {
            receipt,
            date,
            tables_available,
        })
    }

    /// Settles the bill for a confirmed reservation and marks it completed.
    ///
    /// The full bill is stored as the payment; the fee only affects the reported balance.
    /// Bills below the fee are accepted, NaN and infinite bills are not.
    pub fn make_payment(
        &mut self,
        receipt: Receipt,
        bill_amount: f64,
    ) -> Result<PaymentSummary, LedgerError> {
        if !bill_amount.is_finite() {
            debug!(receipt, bill_amount, "Rejected bill amount");
            return Err(LedgerError::InvalidBillAmount(bill_amount));
        }

        let fee = self.config.reservation_fee;
        let Some(reservation) = self.reservations.iter_mut().find(|r| r.receipt == receipt) else {
            return Err(LedgerError::NotConfirmed(receipt));
        };

        match reservation.status {
            ReservationStatus::Confirmed => {
                reservation.payment = bill_amount;
                reservation.status = ReservationStatus::Completed;
                let summary = PaymentSummary {
                    receipt,
                    bill_amount,
                    reservation_fee: fee,
                    remaining_balance: bill_amount - fee,
                };
                info!(receipt, bill_amount, remaining = summary.remaining_balance, "Payment recorded");
                Ok(summary)
            }
            ReservationStatus::Cancelled => Err(LedgerError::ReceiptCancelled(receipt)),
            ReservationStatus::Completed => Err(LedgerError::NotConfirmed(receipt)),
        }
    }

    /// Moves a reservation to a new slot.
    ///
    /// The new slot goes through the same date, time and capacity checks as a new booking.
    /// The reservation being moved does not count against its own capacity.
    pub fn update_date_time(
        &mut self,
        receipt: Receipt,
        new_date: &str,
        new_time: &str,
    ) -> Result<&Reservation, LedgerError> {
        self.check_slot(new_date, new_time)?;

        let index = self.position(receipt)?;
        let current = &self.reservations[index];
        match current.status {
            ReservationStatus::Cancelled => return Err(LedgerError::ReceiptCancelled(receipt)),
            ReservationStatus::Confirmed if current.date != new_date => {
                self.check_capacity(new_date, Some(receipt))?;
            }
            _ => {}
        }

        let reservation = &mut self.reservations[index];
        reservation.date = new_date.to_string();
        reservation.time = new_time.to_string();
        info!(receipt, date = new_date, time = new_time, "Reservation updated");
        Ok(&*reservation)
    }

    pub fn show_all_reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn calculate_daily_income(&self, date: &str) -> f64 {
        self.reservations
            .iter()
            .filter(|r| r.date == date && r.status == ReservationStatus::Completed)
            .map(|r| r.payment)
            .sum()
    }

    pub fn confirmed_count(&self, date: &str) -> u32 {
        self.reservations
            .iter()
            .filter(|r| r.is_confirmed_on(date))
            .count() as u32
    }

    pub fn tables_available(&self, date: &str) -> u32 {
        self.config
            .max_tables_per_date
            .saturating_sub(self.confirmed_count(date))
    }

    fn position(&self, receipt: Receipt) -> Result<usize, LedgerError> {
        self.reservations
            .iter()
            .position(|r| r.receipt == receipt)
            .ok_or(LedgerError::NotFound(receipt))
    }

    fn check_slot(&self, date: &str, time: &str) -> Result<(), LedgerError> {
        if !is_valid_date(date) {
            debug!(date, "Rejected date");
            return Err(LedgerError::InvalidDate(date.to_string()));
        }
        if !is_time_format_valid(time) {
            debug!(time, "Rejected time format");
            return Err(LedgerError::InvalidTimeFormat(time.to_string()));
        }
        let LedgerConfig {
            opening_time,
            closing_time,
            ..
        } = &self.config;
        if !is_time_within_operating_hours(time, opening_time, closing_time) {
            return Err(LedgerError::OutsideOperatingHours {
                time: time.to_string(),
                opening: opening_time.clone(),
                closing: closing_time.clone(),
            });
        }
        Ok(())
    }

    fn check_capacity(&self, date: &str, moving: Option<Receipt>) -> Result<(), LedgerError> {
        let booked = self
            .reservations
            .iter()
            .filter(|r| r.is_confirmed_on(date) && Some(r.receipt) != moving)
            .count() as u32;
        if booked >= self.config.max_tables_per_date {
            warn!(date, booked, "Date fully booked");
            return Err(LedgerError::DateFullyBooked(date.to_string()));
        }
        Ok(())
    }
}

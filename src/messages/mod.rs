use tokio::sync::oneshot;

use crate::domain::{
    CancelOutcome, PaymentSummary, Receipt, Reservation, ReservationCreate,
};
use crate::ledger::LedgerError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed messages for the reservation service. Each variant carries its
/// parameters and a oneshot channel for the response.
#[derive(Debug)]
pub enum ReservationRequest {
    AddReservation {
        reservation: ReservationCreate,
        respond_to: ServiceResponse<Receipt, LedgerError>,
    },
    SearchReservation {
        receipt: Receipt,
        respond_to: ServiceResponse<Reservation, LedgerError>,
    },
    CancelReservation {
        receipt: Receipt,
        respond_to: ServiceResponse<CancelOutcome, LedgerError>,
    },
    MakePayment {
        receipt: Receipt,
        bill_amount: f64,
        respond_to: ServiceResponse<PaymentSummary, LedgerError>,
    },
    UpdateDateTime {
        receipt: Receipt,
        new_date: String,
        new_time: String,
        respond_to: ServiceResponse<Reservation, LedgerError>,
    },
    ShowAllReservations {
        respond_to: ServiceResponse<Vec<Reservation>, LedgerError>,
    },
    CalculateDailyIncome {
        date: String,
        respond_to: ServiceResponse<f64, LedgerError>,
    },
    TablesAvailable {
        date: String,
        respond_to: ServiceResponse<u32, LedgerError>,
    },
    Shutdown,
}

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::domain::{
    CancelOutcome, PaymentSummary, Receipt, Reservation, ReservationCreate,
};
use crate::ledger::LedgerError;
use crate::messages::ReservationRequest;

/// Generate client methods with oneshot channel boilerplate and automatic tracing.
/// Channel failures surface as `LedgerError::ServiceUnavailable`.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, LedgerError> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender
                    .send($request::$variant {
                        $($param,)*
                        respond_to,
                    })
                    .await
                    .map_err(|_| LedgerError::ServiceUnavailable("service closed".to_string()))?;

                response
                    .await
                    .map_err(|_| LedgerError::ServiceUnavailable("service dropped the request".to_string()))?
            }
        }
    };
}

/// Handle to the reservation service. Cheap to clone.
#[derive(Clone)]
pub struct ReservationClient {
    sender: mpsc::Sender<ReservationRequest>,
}

impl ReservationClient {
    pub fn new(sender: mpsc::Sender<ReservationRequest>) -> Self {
        Self { sender }
    }

    pub async fn shutdown(&self) -> Result<(), LedgerError> {
        self.sender
            .send(ReservationRequest::Shutdown)
            .await
            .map_err(|_| LedgerError::ServiceUnavailable("service closed".to_string()))
    }
}

client_method!(ReservationClient => fn add_reservation(reservation: ReservationCreate) -> Receipt as ReservationRequest::AddReservation);
client_method!(ReservationClient => fn search_reservation(receipt: Receipt) -> Reservation as ReservationRequest::SearchReservation);
client_method!(ReservationClient => fn cancel_reservation(receipt: Receipt) -> CancelOutcome as ReservationRequest::CancelReservation);
client_method!(ReservationClient => fn make_payment(receipt: Receipt, bill_amount: f64) -> PaymentSummary as ReservationRequest::MakePayment);
client_method!(ReservationClient => fn update_date_time(receipt: Receipt, new_date: String, new_time: String) -> Reservation as ReservationRequest::UpdateDateTime);
client_method!(ReservationClient => fn show_all_reservations() -> Vec<Reservation> as ReservationRequest::ShowAllReservations);
client_method!(ReservationClient => fn calculate_daily_income(date: String) -> f64 as ReservationRequest::CalculateDailyIncome);
client_method!(ReservationClient => fn tables_available(date: String) -> u32 as ReservationRequest::TablesAvailable);

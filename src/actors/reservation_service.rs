use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::clients::ReservationClient;
use crate::config::LedgerConfig;
use crate::domain::{
    CancelOutcome, PaymentSummary, Receipt, Reservation, ReservationCreate,
};
use crate::ledger::{Ledger, LedgerError};
use crate::messages::{ReservationRequest, ServiceResponse};

/// Owns the single ledger instance and applies requests to it one at a time.
pub struct ReservationService {
    receiver: mpsc::Receiver<ReservationRequest>,
    ledger: Ledger,
}

impl ReservationService {
    pub fn new(buffer_size: usize, config: LedgerConfig) -> (Self, ReservationClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            ledger: Ledger::new(config),
        };
        let client = ReservationClient::new(sender);
        (service, client)
    }

    #[instrument(name = "reservation_service", skip(self))]
    pub async fn run(mut self) {
        info!("ReservationService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ReservationRequest::AddReservation {
                    reservation,
                    respond_to,
                } => self.handle_add_reservation(reservation, respond_to),
                ReservationRequest::SearchReservation {
                    receipt,
                    respond_to,
                } => self.handle_search_reservation(receipt, respond_to),
                ReservationRequest::CancelReservation {
                    receipt,
                    respond_to,
                } => self.handle_cancel_reservation(receipt, respond_to),
                ReservationRequest::MakePayment {
                    receipt,
                    bill_amount,
                    respond_to,
                } => self.handle_make_payment(receipt, bill_amount, respond_to),
                ReservationRequest::UpdateDateTime {
                    receipt,
                    new_date,
                    new_time,
                    respond_to,
                } => self.handle_update_date_time(receipt, new_date, new_time, respond_to),
                ReservationRequest::ShowAllReservations { respond_to } => {
                    self.handle_show_all_reservations(respond_to)
                }
                ReservationRequest::CalculateDailyIncome { date, respond_to } => {
                    self.handle_calculate_daily_income(date, respond_to)
                }
                ReservationRequest::TablesAvailable { date, respond_to } => {
                    self.handle_tables_available(date, respond_to)
                }
                ReservationRequest::Shutdown => {
                    info!("ReservationService shutting down");
                    break;
                }
            }
        }

        info!("ReservationService stopped");
    }

    #[instrument(
        fields(date = %reservation.date, time = %reservation.time, num_people = reservation.num_people),
        skip(self, reservation, respond_to)
    )]
    fn handle_add_reservation(
        &mut self,
        reservation: ReservationCreate,
        respond_to: ServiceResponse<Receipt, LedgerError>,
    ) {
        debug!("Processing add_reservation request");
        let result = self.ledger.add_reservation(reservation);
        if let Err(e) = &result {
            warn!(error = %e, "Reservation rejected");
        }
        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_search_reservation(
        &self,
        receipt: Receipt,
        respond_to: ServiceResponse<Reservation, LedgerError>,
    ) {
        debug!("Processing search_reservation request");
        let result = self.ledger.search_reservation(receipt).cloned();
        match &result {
            Ok(reservation) => info!(status = %reservation.status, "Reservation found"),
            Err(_) => debug!("Reservation not found"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_cancel_reservation(
        &mut self,
        receipt: Receipt,
        respond_to: ServiceResponse<CancelOutcome, LedgerError>,
    ) {
        debug!("Processing cancel_reservation request");
        let result = self.ledger.cancel_reservation(receipt);
        if let Err(e) = &result {
            warn!(error = %e, "Cancellation rejected");
        }
        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_make_payment(
        &mut self,
        receipt: Receipt,
        bill_amount: f64,
        respond_to: ServiceResponse<PaymentSummary, LedgerError>,
    ) {
        debug!("Processing make_payment request");
        let result = self.ledger.make_payment(receipt, bill_amount);
        if let Err(e) = &result {
            warn!(error = %e, "Payment rejected");
        }
        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_update_date_time(
        &mut self,
        receipt: Receipt,
        new_date: String,
        new_time: String,
        respond_to: ServiceResponse<Reservation, LedgerError>,
    ) {
        debug!("Processing update_date_time request");
        let result = self
            .ledger
            .update_date_time(receipt, &new_date, &new_time)
            .cloned();
        if let Err(e) = &result {
            warn!(error = %e, "Update rejected");
        }
        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_show_all_reservations(&self, respond_to: ServiceResponse<Vec<Reservation>, LedgerError>) {
        let reservations = self.ledger.show_all_reservations().to_vec();
        debug!(count = reservations.len(), "Listing reservations");
        let _ = respond_to.send(Ok(reservations));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_tables_available(&self, date: String, respond_to: ServiceResponse<u32, LedgerError>) {
        let tables_available = self.ledger.tables_available(&date);
        debug!(tables_available, "Tables available checked");
        let _ = respond_to.send(Ok(tables_available));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_calculate_daily_income(
        &self,
        date: String,
        respond_to: ServiceResponse<f64, LedgerError>,
    ) {
        let income = self.ledger.calculate_daily_income(&date);
        info!(income, "Daily income calculated");
        let _ = respond_to.send(Ok(income));
    }
}

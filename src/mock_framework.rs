//! # Mock Framework
//!
//! Utilities for testing code that talks to the reservation service without
//! spinning one up.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! channel, then helpers like [`expect_add`] to inspect what was sent and
//! decide the reply.

use tokio::sync::mpsc;

use crate::clients::ReservationClient;
use crate::domain::{PaymentSummary, Receipt, ReservationCreate};
use crate::ledger::LedgerError;
use crate::messages::{ReservationRequest, ServiceResponse};

/// Creates a client whose requests land on the returned receiver.
pub fn create_mock_client(buffer_size: usize) -> (ReservationClient, mpsc::Receiver<ReservationRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ReservationClient::new(sender), receiver)
}

/// Helper to verify that the next message is an AddReservation request
pub async fn expect_add(
    receiver: &mut mpsc::Receiver<ReservationRequest>,
) -> Option<(ReservationCreate, ServiceResponse<Receipt, LedgerError>)> {
    match receiver.recv().await {
        Some(ReservationRequest::AddReservation { reservation, respond_to }) => Some((reservation, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a MakePayment request
pub async fn expect_payment(
    receiver: &mut mpsc::Receiver<ReservationRequest>,
) -> Option<(Receipt, f64, ServiceResponse<PaymentSummary, LedgerError>)> {
    match receiver.recv().await {
        Some(ReservationRequest::MakePayment { receipt, bill_amount, respond_to }) => {
            Some((receipt, bill_amount, respond_to))
        }
        _ => None,
    }
}

/// Helper to verify that the next message is an UpdateDateTime request.
/// Replies with `NotFound` and returns what was asked for.
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<ReservationRequest>,
) -> Option<(Receipt, String, String)> {
    match receiver.recv().await {
        Some(ReservationRequest::UpdateDateTime { receipt, new_date, new_time, respond_to }) => {
            let _ = respond_to.send(Err(LedgerError::NotFound(receipt)));
            Some((receipt, new_date, new_time))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task = tokio::spawn(async move {
            let reservation = ReservationCreate::new("Test", "2025/01/01", "10:00", 2, "1");
            client.add_reservation(reservation).await
        });

        let (payload, responder) = expect_add(&mut receiver).await.expect("Expected AddReservation request");
        assert_eq!(payload.name, "Test");
        responder.send(Ok(41)).unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(result, Ok(41));
    }

    #[tokio::test]
    async fn test_dropped_responder_is_service_unavailable() {
        let (client, mut receiver) = create_mock_client(10);

        let pay_task = tokio::spawn(async move { client.make_payment(3, 120.0).await });

        let (receipt, bill_amount, responder) = expect_payment(&mut receiver).await.expect("Expected MakePayment request");
        assert_eq!((receipt, bill_amount), (3, 120.0));
        drop(responder);

        let result = pay_task.await.unwrap();
        assert!(matches!(result, Err(LedgerError::ServiceUnavailable(_))));
    }
}

//! Interactive menu over the reservation client.
//!
//! The console only parses numbers and formats results. Every business rule
//! lives in the ledger, so a rejection is printed and the menu comes back.

use std::io;
use std::str::FromStr;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{debug, info, instrument};

use crate::clients::ReservationClient;
use crate::config::{CancellationPolicy, LedgerConfig};
use crate::domain::{Receipt, ReservationCreate};

const MENU: &str = "\
Welcome to the Restaurant Reservation System (RRS)...
Please choose from the following menu:
1- Add reservation.
2- Search for a reservation.
3- Make a payment.
4- Cancel a reservation.
5- Show all reservations.
6- Update reservation date and time.
7- Calculate daily income.
8- Exit.";

enum Flow {
    Continue,
    Exit,
}

pub struct Console<R, W> {
    client: ReservationClient,
    input: Lines<R>,
    output: W,
    max_people_per_table: u32,
    cancellation: CancellationPolicy,
    currency: String,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(client: ReservationClient, input: R, output: W, config: &LedgerConfig) -> Self {
        Self {
            client,
            input: input.lines(),
            output,
            max_people_per_table: config.max_people_per_table,
            cancellation: config.cancellation,
            currency: config.currency.clone(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Shows the menu until the user exits or input runs out.
    #[instrument(name = "console", skip(self))]
    pub async fn run(&mut self) -> io::Result<()> {
        info!("Console session started");
        loop {
            self.say("").await?;
            self.say(MENU).await?;
            let Some(choice) = self.input.next_line().await? else {
                debug!("Input closed");
                break;
            };
            let flow = match choice.trim() {
                "1" => self.add_reservation().await?,
                "2" => self.search_reservation().await?,
                "3" => self.make_payment().await?,
                "4" => self.cancel_reservation().await?,
                "5" => self.show_all_reservations().await?,
                "6" => self.update_date_time().await?,
                "7" => self.calculate_daily_income().await?,
                "8" => {
                    self.say("Exiting the system.").await?;
                    Flow::Exit
                }
                _ => {
                    self.say("Invalid choice. Please try again.").await?;
                    Flow::Continue
                }
            };
            if let Flow::Exit = flow {
                break;
            }
        }
        info!("Console session ended");
        Ok(())
    }

    async fn add_reservation(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("Enter name: ").await? else {
            return Ok(Flow::Exit);
        };
        let Some(date) = self.prompt("Enter date (YYYY/MM/DD): ").await? else {
            return Ok(Flow::Exit);
        };
        let Some(time) = self.prompt("Enter time (HH:MM): ").await? else {
            return Ok(Flow::Exit);
        };
        let note = format!(
            "**Note that the maximum number of people allowed at one table is {}",
            self.max_people_per_table
        );
        self.say(&note).await?;
        let Some(num_people) = self.prompt_parsed::<u32>("Enter number of people : ").await? else {
            return Ok(Flow::Exit);
        };
        let Some(contact_num) = self.prompt("Enter contact number : ").await? else {
            return Ok(Flow::Exit);
        };

        let reservation = ReservationCreate::new(name, date.clone(), time, num_people, contact_num);
        match self.client.add_reservation(reservation).await {
            Ok(receipt) => {
                self.say(&format!("Reservation added successfully. Receipt number: {receipt}"))
                    .await?;
                let message = match self.client.tables_available(date.clone()).await {
                    Ok(tables) => format!("Tables still available for {date}: {tables}"),
                    Err(e) => e.to_string(),
                };
                self.say(&message).await?;
            }
            Err(e) => self.say(&e.to_string()).await?,
        }
        Ok(Flow::Continue)
    }

    async fn search_reservation(&mut self) -> io::Result<Flow> {
        let Some(receipt) = self.prompt_receipt().await? else {
            return Ok(Flow::Exit);
        };
        let message = match self.client.search_reservation(receipt).await {
            Ok(reservation) => reservation.to_string(),
            Err(e) => e.to_string(),
        };
        self.say(&message).await?;
        Ok(Flow::Continue)
    }

    async fn make_payment(&mut self) -> io::Result<Flow> {
        let Some(receipt) = self.prompt_receipt().await? else {
            return Ok(Flow::Exit);
        };
        let Some(bill_amount) = self.prompt_parsed::<f64>("Enter total bill amount: ").await? else {
            return Ok(Flow::Exit);
        };
        let message = match self.client.make_payment(receipt, bill_amount).await {
            Ok(summary) => format!(
                "Payment details for Receipt {}: \nTotal bill amount: {}\nReservation fee: {}\nRemaining balance: {}",
                summary.receipt, summary.bill_amount, summary.reservation_fee, summary.remaining_balance
            ),
            Err(e) => e.to_string(),
        };
        self.say(&message).await?;
        Ok(Flow::Continue)
    }

    async fn cancel_reservation(&mut self) -> io::Result<Flow> {
        let Some(receipt) = self.prompt_receipt().await? else {
            return Ok(Flow::Exit);
        };
        let verb = match self.cancellation {
            CancellationPolicy::Remove => "cancelled and deleted",
            CancellationPolicy::Retain => "cancelled",
        };
        let message = match self.client.cancel_reservation(receipt).await {
            Ok(outcome) => format!(
                "Reservation with receipt number {} has been {verb}.\nUpdated total tables available for {}: {}",
                outcome.receipt, outcome.date, outcome.tables_available
            ),
            Err(e) => e.to_string(),
        };
        self.say(&message).await?;
        Ok(Flow::Continue)
    }

    async fn show_all_reservations(&mut self) -> io::Result<Flow> {
        self.say("All Reservations:").await?;
        match self.client.show_all_reservations().await {
            Ok(reservations) if reservations.is_empty() => {
                self.say("No reservations found.").await?;
            }
            Ok(reservations) => {
                for reservation in reservations {
                    self.say(&reservation.to_string()).await?;
                }
            }
            Err(e) => self.say(&e.to_string()).await?,
        }
        Ok(Flow::Continue)
    }

    async fn update_date_time(&mut self) -> io::Result<Flow> {
        let Some(receipt) = self.prompt_receipt().await? else {
            return Ok(Flow::Exit);
        };
        let Some(new_date) = self.prompt("Enter new date (YYYY/MM/DD): ").await? else {
            return Ok(Flow::Exit);
        };
        let Some(new_time) = self.prompt("Enter new time (HH:MM): ").await? else {
            return Ok(Flow::Exit);
        };
        let message = match self.client.update_date_time(receipt, new_date, new_time).await {
            Ok(reservation) => format!(
                "Reservation with receipt number {} has been updated.",
                reservation.receipt
            ),
            Err(e) => e.to_string(),
        };
        self.say(&message).await?;
        Ok(Flow::Continue)
    }

    async fn calculate_daily_income(&mut self) -> io::Result<Flow> {
        let Some(date) = self.prompt("Enter date to calculate daily income: ").await? else {
            return Ok(Flow::Exit);
        };
        let message = match self.client.calculate_daily_income(date.clone()).await {
            Ok(income) => format!("Total income for {date}: {income} {}", self.currency),
            Err(e) => e.to_string(),
        };
        self.say(&message).await?;
        Ok(Flow::Continue)
    }

    async fn prompt_receipt(&mut self) -> io::Result<Option<Receipt>> {
        self.prompt_parsed("Enter receipt number: ").await
    }

    /// Re-prompts until the line parses. `None` means input ran out.
    async fn prompt_parsed<T: FromStr>(&mut self, text: &str) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(text).await? else {
                return Ok(None);
            };
            match line.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say("Please enter a number.").await?,
            }
        }
    }

    async fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(self
            .input
            .next_line()
            .await?
            .map(|line| line.trim().to_string()))
    }

    async fn say(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actors::ReservationService;
    use crate::config::CancellationPolicy;
    use tokio::io::BufReader;

    async fn run_session(config: LedgerConfig, script: &str) -> String {
        let (service, client) = ReservationService::new(10, config.clone());
        let _handle = tokio::spawn(service.run());

        let mut console = Console::new(client, BufReader::new(script.as_bytes()), Vec::new(), &config);
        console.run().await.unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[tokio::test]
    async fn test_book_pay_and_report_income() {
        let script = "\
1
Alice
2025/05/10
12:00
4
555
3
1
300
7
2025/05/10
8
";
        let output = run_session(LedgerConfig::default(), script).await;

        assert!(output.contains("Reservation added successfully. Receipt number: 1"));
        assert!(output.contains("Payment details for Receipt 1: \nTotal bill amount: 300\nReservation fee: 150\nRemaining balance: 150"));
        assert!(output.contains("Total income for 2025/05/10: 300 SAR"));
        assert!(output.trim_end().ends_with("Exiting the system."));
    }

    #[tokio::test]
    async fn test_rejections_are_printed_and_menu_returns() {
        let script = "\
1
Bob
2025/05/10
08:59
2
1
9
2
42
8
";
        let output = run_session(LedgerConfig::default(), script).await;

        assert!(output.contains("Reservation time 08:59 is outside of operating hours (09:00 - 21:00)."));
        assert!(output.contains("Invalid choice. Please try again."));
        assert!(output.contains("Reservation with receipt number 42 not found."));
        assert_eq!(output.matches("1- Add reservation.").count(), 4);
    }

    #[tokio::test]
    async fn test_bad_numbers_reprompt() {
        let script = "\
1
Carol
2025/06/01
13:00
lots
3
777
2
1
";
        let output = run_session(LedgerConfig::default(), script).await;

        assert_eq!(output.matches("Please enter a number.").count(), 1);
        assert!(output.contains("Reservation added successfully. Receipt number: 1"));
        assert!(output.contains("Name: Carol"));
        assert!(output.contains("Number of People: 3"));
    }

    #[tokio::test]
    async fn test_show_cancel_and_update() {
        let script = "\
5
1
Dan
2025/07/01
19:00
2
1
1
Eve
2025/07/01
20:00
2
2
6
1
2025/07/02
18:30
4
2
5
";
        let output = run_session(LedgerConfig::default(), script).await;

        assert!(output.contains("All Reservations:\nNo reservations found."));
        assert!(output.contains("Reservation with receipt number 1 has been updated."));
        assert!(output.contains(
            "Reservation with receipt number 2 has been cancelled and deleted.\nUpdated total tables available for 2025/07/01: 2"
        ));
        assert!(output.contains("Receipt number: 1\nTables still available for 2025/07/01: 1"));
        assert!(output.contains("Receipt number: 2\nTables still available for 2025/07/01: 0"));
        assert!(output.contains("Date: 2025/07/02\nTime: 18:30"));
        assert!(!output.contains("Name: Eve\nDate"));
    }

    #[tokio::test]
    async fn test_nan_bill_leaves_income_intact() {
        let script = "\
1
Hana
2025/09/09
12:00
2
1
3
1
NaN
7
2025/09/09
2
1
";
        let output = run_session(LedgerConfig::default(), script).await;

        assert!(output.contains("Invalid bill amount: NaN. Please enter a finite amount."));
        assert!(output.contains("Total income for 2025/09/09: 0 SAR"));
        assert!(output.contains("Status: Confirmed"));
    }

    #[tokio::test]
    async fn test_retained_cancellation_blocks_payment() {
        let config = LedgerConfig {
            cancellation: CancellationPolicy::Retain,
            ..LedgerConfig::default()
        };
        let script = "\
1
Finn
2025/08/08
12:00
2
5
4
1
3
1
200
2
1
";
        let output = run_session(config, script).await;

        assert!(output.contains(
            "Reservation with receipt number 1 has been cancelled.\nUpdated total tables available for 2025/08/08: 2"
        ));
        assert!(output.contains("The receipt 1 is cancelled."));
        assert!(output.contains("Status: Cancelled"));
    }
}

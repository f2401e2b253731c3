use chrono::{Local, NaiveDate, TimeDelta};
use std::path::PathBuf;

use crate::config::{AppConfig, DEFAULT_DUE_IN_DAYS};
use crate::types::{AmountInput, Currency, PaymentMethod};

pub const READY_STATUS: &str = "Ready";
pub const BILL_SAVED_STATUS: &str = "Bill saved successfully";

/// File extensions the invoice picker offers.
pub const INVOICE_EXTENSIONS: [&str; 4] = ["pdf", "png", "jpg", "jpeg"];

/// The bill being typed into the "Enter Bill" dialog. Nothing keeps it once the dialog closes.
#[derive(Debug, Clone, PartialEq)]
pub struct BillDraft {
    pub vendor: String,
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    pub currency: Currency,
    pub amount: AmountInput,
    pub payment_method: PaymentMethod,
    pub bank_account: String,
    pub notes: String,
}

impl BillDraft {
    pub fn new(today: NaiveDate, config: &AppConfig) -> Self {
        Self {
            vendor: config.vendors.first().cloned().unwrap_or_default(),
            invoice_number: String::new(),
            invoice_date: today,
            due_date: due_date_after(today, config.due_in_days),
            currency: Currency::default(),
            amount: AmountInput::default(),
            payment_method: PaymentMethod::default(),
            bank_account: config.default_bank_account(),
            notes: String::new(),
        }
    }

    pub fn summary(&self) -> String {
        let amount = self
            .amount
            .value()
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string());

        format!(
            "{} #{} {} {} due {}",
            self.vendor,
            self.invoice_number,
            self.currency,
            amount,
            self.due_date.format("%Y-%m-%d")
        )
    }
}

/// `today + days`, or the default term when that date is out of range.
fn due_date_after(today: NaiveDate, days: i64) -> NaiveDate {
    TimeDelta::try_days(days)
        .and_then(|term| today.checked_add_signed(term))
        .or_else(|| today.checked_add_signed(TimeDelta::days(DEFAULT_DUE_IN_DAYS)))
        .unwrap_or(today)
}

/// One line of the bills table, already formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct BillRow {
    pub invoice_number: String,
    pub vendor: String,
    pub due_date: String,
    pub amount: String,
    pub status: String,
    pub process_date: String,
    pub payment_type: String,
    pub pay_from: String,
}

impl BillRow {
    pub const HEADERS: [&'static str; 8] = [
        "Invoice #",
        "Vendor",
        "Due date",
        "Amount",
        "Status",
        "Process date",
        "Payment type",
        "Pay from",
    ];

    pub fn cells(&self) -> [&str; 8] {
        [
            &self.invoice_number,
            &self.vendor,
            &self.due_date,
            &self.amount,
            &self.status,
            &self.process_date,
            &self.payment_type,
            &self.pay_from,
        ]
    }
}

pub fn sample_bills() -> Vec<BillRow> {
    let row = |cells: [&str; 8]| BillRow {
        invoice_number: cells[0].to_string(),
        vendor: cells[1].to_string(),
        due_date: cells[2].to_string(),
        amount: cells[3].to_string(),
        status: cells[4].to_string(),
        process_date: cells[5].to_string(),
        payment_type: cells[6].to_string(),
        pay_from: cells[7].to_string(),
    };

    vec![
        row(["2023-09-13", "Hacienda Design", "09/20/23", "USD 800.00", "Manual", "09/28/23", "ePayment→9/29", "Bank of America"]),
        row(["34234234", "Cisco's", "10/10/23", "EUR 1,201.00", "Manual", "09/25/23", "Wire→9/15", "Bank of America"]),
        row(["11/28/2022", "FedEx", "10/13/23", "USD 705.27", "Manual", "10/05/23", "Virtual→9/28", "Bank of America"]),
        row(["89K227", "Snyder Uniform Supply", "12/23/23", "USD 500.00", "Manual", "12/21/23", "Check→9/27", "Bank of America"]),
    ]
}

pub struct ApManagerApp {
    pub config: AppConfig,
    pub bills: Vec<BillRow>,
    pub status: String,

    // UI State
    pub search_text: String,
    pub editing_bill: Option<BillDraft>,
    pub show_bill_saved: bool,
}

impl ApManagerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        crate::style::apply(&cc.egui_ctx);
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            bills: sample_bills(),
            status: READY_STATUS.to_string(),
            search_text: String::new(),
            editing_bill: None,
            show_bill_saved: false,
        }
    }

    pub fn upload_invoice(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Invoice files", &INVOICE_EXTENSIONS)
            .pick_file();
        self.record_upload(picked);
    }

    pub fn record_upload(&mut self, path: Option<PathBuf>) {
        match path {
            Some(path) => {
                tracing::info!(path = %path.display(), "invoice selected");
                self.status = format!("Uploaded: {}", path.display());
            }
            None => tracing::debug!("invoice upload cancelled"),
        }
    }

    pub fn open_bill_dialog(&mut self) {
        self.open_bill_dialog_on(Local::now().date_naive());
    }

    pub fn open_bill_dialog_on(&mut self, today: NaiveDate) {
        if self.editing_bill.is_none() {
            tracing::debug!(%today, "opening bill entry");
            self.editing_bill = Some(BillDraft::new(today, &self.config));
        }
    }

    /// Accepts the dialog. The draft is handed back and otherwise dropped.
    pub fn save_bill(&mut self) -> Option<BillDraft> {
        let bill = self.editing_bill.take()?;
        tracing::info!(bill = %bill.summary(), "bill entered");
        self.show_bill_saved = true;
        self.status = BILL_SAVED_STATUS.to_string();
        Some(bill)
    }

    pub fn cancel_bill(&mut self) {
        if self.editing_bill.take().is_some() {
            tracing::debug!("bill entry cancelled");
        }
    }

    pub fn dismiss_bill_saved(&mut self) {
        self.show_bill_saved = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn starts_ready_with_sample_rows() {
        let app = ApManagerApp::with_config(AppConfig::default());
        assert_eq!(app.status, "Ready");
        assert_eq!(app.bills.len(), 4);
        assert!(app.editing_bill.is_none());
        assert!(!app.show_bill_saved);
    }

    #[test]
    fn sample_rows_fill_every_column() {
        for bill in sample_bills() {
            assert!(bill.cells().iter().all(|cell| !cell.is_empty()));
        }
        assert_eq!(sample_bills()[1].amount, "EUR 1,201.00");
    }

    #[test]
    fn draft_defaults() {
        let config = AppConfig::default();
        let draft = BillDraft::new(date(2026, 10, 19), &config);

        assert_eq!(draft.vendor, "Hacienda Design");
        assert_eq!(draft.invoice_date, date(2026, 10, 19));
        assert_eq!(draft.due_date, date(2026, 11, 18));
        assert_eq!(draft.currency, Currency::Usd);
        assert_eq!(draft.payment_method, PaymentMethod::Check);
        assert_eq!(draft.bank_account, "Bank of America - 1408");
        assert_eq!(draft.amount.text(), "");
    }

    #[test]
    fn due_date_crosses_year_end() {
        let draft = BillDraft::new(date(2026, 12, 15), &AppConfig::default());
        assert_eq!(draft.due_date, date(2027, 1, 14));
    }

    #[test]
    fn out_of_range_due_term_falls_back_to_default() {
        let config = AppConfig {
            due_in_days: i64::MAX,
            ..AppConfig::default()
        };
        let draft = BillDraft::new(date(2026, 10, 19), &config);
        assert_eq!(draft.due_date, date(2026, 11, 18));

        let config = AppConfig {
            due_in_days: 1_000_000_000,
            ..AppConfig::default()
        };
        let mut app = ApManagerApp::with_config(config);
        app.open_bill_dialog_on(date(2026, 10, 19));
        assert_eq!(app.editing_bill.unwrap().due_date, date(2026, 11, 18));
    }

    #[test]
    fn summary_shows_amount_or_dash() {
        let mut draft = BillDraft::new(date(2026, 10, 19), &AppConfig::default());
        draft.invoice_number = "INV-1".to_string();
        assert_eq!(draft.summary(), "Hacienda Design #INV-1 USD - due 2026-11-18");

        draft.amount.edit("800");
        draft.currency = Currency::Eur;
        assert_eq!(draft.summary(), "Hacienda Design #INV-1 EUR 800.00 due 2026-11-18");
    }

    #[test]
    fn upload_updates_status_only_when_a_file_is_chosen() {
        let mut app = ApManagerApp::with_config(AppConfig::default());

        app.record_upload(None);
        assert_eq!(app.status, "Ready");

        app.record_upload(Some(PathBuf::from("/tmp/invoice.pdf")));
        assert_eq!(app.status, "Uploaded: /tmp/invoice.pdf");
    }

    #[test]
    fn saving_discards_the_bill() {
        let mut app = ApManagerApp::with_config(AppConfig::default());
        app.open_bill_dialog_on(date(2026, 10, 19));

        if let Some(bill) = &mut app.editing_bill {
            bill.vendor = "FedEx".to_string();
            bill.amount.edit("705.27");
        }

        let saved = app.save_bill().unwrap();
        assert_eq!(saved.vendor, "FedEx");
        assert!(app.editing_bill.is_none());
        assert!(app.show_bill_saved);
        assert_eq!(app.status, "Bill saved successfully");
        assert_eq!(app.bills, sample_bills());

        app.dismiss_bill_saved();
        assert!(!app.show_bill_saved);
    }

    #[test]
    fn cancelling_leaves_status_alone() {
        let mut app = ApManagerApp::with_config(AppConfig::default());
        app.record_upload(Some(PathBuf::from("scan.png")));
        app.open_bill_dialog_on(date(2026, 10, 19));
        app.cancel_bill();

        assert!(app.editing_bill.is_none());
        assert!(!app.show_bill_saved);
        assert_eq!(app.status, "Uploaded: scan.png");
        assert!(app.save_bill().is_none());
    }

    #[test]
    fn reopening_keeps_the_open_draft() {
        let mut app = ApManagerApp::with_config(AppConfig::default());
        app.open_bill_dialog_on(date(2026, 10, 19));
        if let Some(bill) = &mut app.editing_bill {
            bill.notes = "rush".to_string();
        }

        app.open_bill_dialog_on(date(2026, 10, 20));
        let bill = app.editing_bill.as_ref().unwrap();
        assert_eq!(bill.notes, "rush");
        assert_eq!(bill.invoice_date, date(2026, 10, 19));
    }
}

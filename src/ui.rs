use eframe::egui::{self, Align, Color32, Layout, RichText, Vec2};
use egui_extras::{Column, DatePickerButton, TableBuilder};

use crate::app::{ApManagerApp, BillRow};
use crate::style::{self, ButtonPalette};
use crate::types::{Currency, PaymentMethod};

const TOP_BAR_ICONS: [&str; 6] = ["🔍", "👤", "🕒", "🔄", "⚙", "📋"];

const BILL_FILTERS: [&str; 4] = ["Unpaid bills", "All bills", "Recurring bills", "Vendor credits"];

/// Sidebar categories with their (label, tooltip) entries.
const SIDEBAR_MENU: [(&str, &[(&str, &str)]); 4] = [
    (
        "DASHBOARD",
        &[
            ("📊 Overview", "View key metrics and summaries"),
            ("💰 Cash Flow", "Track incoming and outgoing money"),
            ("📈 Analytics", "View detailed financial reports"),
            ("⚡ Quick Actions", "Common tasks and shortcuts"),
        ],
    ),
    (
        "PAYABLES",
        &[
            ("📥 Inbox", "Review incoming documents"),
            ("📄 Documents", "Manage all documents"),
            ("👥 Vendors", "Manage vendor relationships"),
            ("✓ Approvals", "Review and approve items"),
            ("💳 Bills", "Manage and pay bills"),
            ("💸 Payments out", "Track outgoing payments"),
        ],
    ),
    (
        "RECEIVABLES",
        &[
            ("🏢 Customers", "Manage customer relationships"),
            ("📋 Invoices", "Create and track invoices"),
            ("💱 Payments in", "Track incoming payments"),
        ],
    ),
    (
        "OTHER",
        &[
            ("📊 Reports", "Generate financial reports"),
            ("❓ Support", "Get help and support"),
        ],
    ),
];

impl eframe::App for ApManagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar")
            .frame(style::bar_frame(Color32::WHITE))
            .show(ctx, |ui| show_top_bar(self, ui));

        egui::TopBottomPanel::top("action_bar")
            .frame(style::bar_frame(style::PANEL))
            .show(ctx, |ui| show_action_bar(self, ui));

        egui::TopBottomPanel::bottom("status_bar")
            .frame(style::bar_frame(style::PANEL))
            .show(ctx, |ui| {
                ui.label(&self.status);
            });

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(200.0)
            .frame(egui::Frame::new().fill(style::PANEL))
            .show(ctx, show_sidebar);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(Color32::WHITE).inner_margin(egui::Margin::same(8)))
            .show(ctx, |ui| show_bills_table(&self.bills, ui));

        // Modal dialogs
        if self.editing_bill.is_some() {
            show_bill_form_window(self, ctx);
        }

        if self.show_bill_saved {
            show_bill_saved_window(self, ctx);
        }
    }
}

fn show_top_bar(app: &mut ApManagerApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("AP").size(24.0).strong().color(style::LOGO));

        egui::ComboBox::from_id_salt("company_select")
            .width(150.0)
            .selected_text(&app.config.company_name)
            .show_ui(ui, |ui| {
                ui.selectable_label(true, &app.config.company_name);
            });

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            for icon in TOP_BAR_ICONS.iter().rev() {
                style::button(
                    ui,
                    RichText::new(*icon).size(16.0),
                    ButtonPalette::ICON,
                    Some(Vec2::splat(32.0)),
                );
            }

            ui.add(
                egui::TextEdit::singleline(&mut app.search_text)
                    .hint_text("Search...")
                    .desired_width(300.0)
                    .background_color(style::PANEL),
            );
        });
    });
}

fn show_action_bar(app: &mut ApManagerApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Bills").size(18.0).strong());
        ui.add_space(20.0);

        for filter in BILL_FILTERS {
            style::button(ui, filter, ButtonPalette::FILTER, None);
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if style::button(ui, "Enter Bill", ButtonPalette::PRIMARY, None).clicked() {
                app.open_bill_dialog();
            }
            if style::button(ui, "Upload Invoice", ButtonPalette::SECONDARY, None).clicked() {
                app.upload_invoice();
            }
        });
    });
}

fn show_sidebar(ui: &mut egui::Ui) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.with_layout(Layout::top_down_justified(Align::LEFT), |ui| {
            ui.spacing_mut().item_spacing.y = 0.0;

            for (category, entries) in SIDEBAR_MENU {
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.add_space(10.0);
                    ui.label(RichText::new(category).size(12.0).strong().color(style::MUTED));
                });
                ui.add_space(10.0);

                for (label, tooltip) in entries {
                    style::button(ui, *label, ButtonPalette::SIDEBAR, None).on_hover_text(*tooltip);
                }
            }
        });
    });
}

fn show_bills_table(bills: &[BillRow], ui: &mut egui::Ui) {
    TableBuilder::new(ui)
        .striped(false)
        .resizable(false)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::remainder(), BillRow::HEADERS.len())
        .header(36.0, |mut header| {
            for title in BillRow::HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for bill in bills {
                body.row(32.0, |mut row| {
                    for cell in bill.cells() {
                        row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                });
            }
        });
}

fn show_bill_form_window(app: &mut ApManagerApp, ctx: &egui::Context) {
    let mut save_bill = false;
    let mut cancel_bill = false;

    let vendors = app.config.vendors.clone();
    let bank_accounts = app.config.bank_accounts.clone();

    let response = egui::Modal::new(egui::Id::new("enter_bill")).show(ctx, |ui| {
        ui.set_min_width(500.0);
        ui.heading("Enter Bill");
        ui.separator();

        let Some(bill) = &mut app.editing_bill else {
            return;
        };

        egui::Grid::new("bill_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Vendor:");
                ui.horizontal(|ui| {
                    ui.text_edit_singleline(&mut bill.vendor);
                    egui::ComboBox::from_id_salt("vendor_select")
                        .selected_text("📋")
                        .width(40.0)
                        .show_ui(ui, |ui| {
                            for vendor in &vendors {
                                if ui.selectable_label(bill.vendor == *vendor, vendor).clicked() {
                                    bill.vendor = vendor.clone();
                                }
                            }
                        });
                });
                ui.end_row();

                ui.label("Invoice #:");
                ui.text_edit_singleline(&mut bill.invoice_number);
                ui.end_row();

                ui.label("Invoice Date:");
                ui.add(DatePickerButton::new(&mut bill.invoice_date).id_salt("invoice_date"));
                ui.end_row();

                ui.label("Due Date:");
                ui.add(DatePickerButton::new(&mut bill.due_date).id_salt("due_date"));
                ui.end_row();

                ui.label("Amount:");
                ui.horizontal(|ui| {
                    egui::ComboBox::from_id_salt("currency_select")
                        .selected_text(bill.currency.to_string())
                        .show_ui(ui, |ui| {
                            for currency in Currency::ALL {
                                ui.selectable_value(&mut bill.currency, currency, currency.to_string());
                            }
                        });

                    // Rejected keystrokes are dropped; the field redraws from the last accepted text
                    let mut amount_text = bill.amount.text().to_string();
                    if ui.text_edit_singleline(&mut amount_text).changed() {
                        bill.amount.edit(&amount_text);
                    }
                });
                ui.end_row();

                ui.label("Payment Method:");
                egui::ComboBox::from_id_salt("payment_method_select")
                    .selected_text(bill.payment_method.to_string())
                    .show_ui(ui, |ui| {
                        for method in PaymentMethod::ALL {
                            ui.selectable_value(&mut bill.payment_method, method, method.to_string());
                        }
                    });
                ui.end_row();

                ui.label("Pay From:");
                egui::ComboBox::from_id_salt("bank_account_select")
                    .selected_text(&bill.bank_account)
                    .show_ui(ui, |ui| {
                        for account in &bank_accounts {
                            ui.selectable_value(&mut bill.bank_account, account.clone(), account);
                        }
                    });
                ui.end_row();

                ui.label("Notes:");
                egui::ScrollArea::vertical()
                    .id_salt("notes_scroll")
                    .max_height(100.0)
                    .show(ui, |ui| {
                        ui.add(egui::TextEdit::multiline(&mut bill.notes).desired_rows(4));
                    });
                ui.end_row();
            });

        ui.separator();

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if style::button(ui, "Save", ButtonPalette::PRIMARY, None).clicked() {
                save_bill = true;
            }
            if style::button(ui, "Cancel", ButtonPalette::SECONDARY, None).clicked() {
                cancel_bill = true;
            }
        });
    });

    if save_bill {
        app.save_bill();
    } else if cancel_bill || response.should_close() {
        app.cancel_bill();
    }
}

fn show_bill_saved_window(app: &mut ApManagerApp, ctx: &egui::Context) {
    let mut dismissed = false;

    let response = egui::Modal::new(egui::Id::new("bill_saved")).show(ctx, |ui| {
        ui.set_min_width(260.0);
        ui.heading("Success");
        ui.add_space(8.0);
        ui.label("Bill saved successfully!");
        ui.add_space(8.0);

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if style::button(ui, "OK", ButtonPalette::PRIMARY, None).clicked() {
                dismissed = true;
            }
        });
    });

    if dismissed || response.should_close() {
        app.dismiss_bill_saved();
    }
}

//! CLI probe for the AlmaPaid core crate.
//!
//! # Responsibility
//! - Exercise the staff flow end to end: search a term, resolve the
//!   student, print the monthly due and payment links.
//! - Keep output deterministic for quick local sanity checks.

use almapaid_core::{
    bank_link, gateway_preference, load_settings, open_db, BillingService, CheckoutRequest,
    MonthlyDue, SearchOutcome, Settings, SqliteEnrollmentRepository, SqliteStudentRepository,
};
use chrono::Local;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (db_path, term, settings_path) = match args.as_slice() {
        [db_path, term] => (db_path.clone(), term.clone(), None),
        [db_path, term, settings_path] => {
            (db_path.clone(), term.clone(), Some(settings_path.clone()))
        }
        _ => {
            eprintln!("usage: almapaid_cli <db-path> <search-term> [settings.toml]");
            return ExitCode::FAILURE;
        }
    };

    let settings = match settings_path {
        Some(path) => match load_settings(&path) {
            Ok(settings) => settings,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    let conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let service = BillingService::new(
        SqliteStudentRepository::new(&conn),
        SqliteEnrollmentRepository::new(&conn),
        settings.billing.clone(),
    );

    let student = match service.search(&term) {
        Ok(SearchOutcome::NoMatch) => {
            println!("No matches for `{term}`.");
            return ExitCode::SUCCESS;
        }
        Ok(SearchOutcome::Ambiguous(students)) => {
            println!("Several matches for `{term}`:");
            for student in students {
                println!("  {}", student.summary_line());
            }
            return ExitCode::SUCCESS;
        }
        Ok(SearchOutcome::Unique(student)) => student,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("Student: {}", student.summary_line());

    let today = Local::now().date_naive();
    let invoice = match service.monthly_due(student.id, today) {
        Ok(MonthlyDue::NothingDue) => {
            println!("No enrolled courses; nothing payable this month.");
            return ExitCode::SUCCESS;
        }
        Ok(MonthlyDue::Due(invoice)) => invoice.rounded(),
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("Subtotal:  $ {:.2}", invoice.subtotal);
    println!("Surcharge: $ {:.2}", invoice.surcharge);
    println!("Total:     $ {:.2}", invoice.total);

    let request = CheckoutRequest {
        reference: service.payment_reference(&student),
        total: invoice.total,
    };

    match gateway_preference(&request, &settings.gateway) {
        Ok(payload) => {
            println!("Gateway reference: {}", payload.external_reference);
            println!("Gateway return URL: {}", payload.back_urls.success);
        }
        Err(err) => println!("{err}"),
    }

    match bank_link(&settings.bank, invoice.total) {
        Ok(uri) => println!("Bank link: {uri}"),
        Err(err) => println!("{err}"),
    }

    ExitCode::SUCCESS
}

//! Plain-text rendering of pipeline output and detail profiles

use lendboard_core::{
    page_buttons, PageSize, QueryResult, Stats, UserProfile, UserRecord, UserStatus,
};
use lendboard_storage::edits::EditRow;
use std::fmt::Write;

const COLUMNS: [&str; 6] = [
    "ORGANIZATION",
    "USERNAME",
    "EMAIL",
    "PHONE NUMBER",
    "DATE JOINED",
    "STATUS",
];

/// `1234567` -> `1,234,567`
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn render_stats(stats: &Stats) -> String {
    let cards = [
        ("USERS", stats.total),
        ("ACTIVE USERS", stats.active),
        ("USERS WITH LOANS", stats.with_loans),
        ("USERS WITH SAVINGS", stats.with_savings),
    ];

    let mut out = String::new();
    for (label, value) in cards {
        let _ = writeln!(out, "{:<20}{}", label, group_thousands(value));
    }
    out
}

fn row_cells(record: &UserRecord) -> [String; 6] {
    [
        record.organization.clone(),
        record.username.clone(),
        record.email.clone(),
        record.phone.clone(),
        record.date_joined.clone(),
        record.status.to_string(),
    ]
}

/// Table of the visible rows, prefixed by their ids
pub fn render_rows(rows: &[UserRecord]) -> String {
    let cells: Vec<[String; 6]> = rows.iter().map(row_cells).collect();

    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let id_width = rows
        .iter()
        .map(|r| r.id.to_string().len())
        .max()
        .unwrap_or(0)
        .max(2);

    let mut out = String::new();
    let _ = write!(out, "{:<id_width$}", "ID");
    for (name, width) in COLUMNS.iter().zip(widths) {
        let _ = write!(out, "  {:<width$}", name);
    }
    out.push('\n');

    for (record, row) in rows.iter().zip(&cells) {
        let _ = write!(out, "{:<id_width$}", record.id);
        for (cell, width) in row.iter().zip(widths) {
            let _ = write!(out, "  {:<width$}", cell);
        }
        out.push('\n');
    }
    out
}

/// "Showing X to Y of Z", page size, and the numbered page buttons
pub fn render_footer(result: &QueryResult, page_size: PageSize) -> String {
    let buttons = page_buttons(result.total_pages);
    let mut pages: Vec<String> = buttons
        .numbers
        .iter()
        .map(|&n| {
            if n == result.effective_page {
                format!("[{}]", n)
            } else {
                n.to_string()
            }
        })
        .collect();
    if buttons.overflow {
        pages.push("…".to_string());
    }

    format!(
        "Showing {} to {} of {}\nRows per page: {}\nPages: {}\n",
        result.range_start,
        result.range_end,
        result.total_filtered,
        page_size,
        pages.join(" ")
    )
}

pub fn render_list(result: &QueryResult, page_size: PageSize) -> String {
    format!(
        "{}\n{}\n{}",
        render_stats(&result.stats),
        render_rows(&result.visible),
        render_footer(result, page_size)
    )
}

pub fn render_error(message: &str) -> String {
    format!("Error: {}", message)
}

fn status_label(status: UserStatus) -> String {
    status.as_str().to_uppercase()
}

fn field(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {:<24}{}", label, value);
}

pub fn render_profile(profile: &UserProfile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "User Details  [{}]", status_label(profile.status));
    let _ = writeln!(
        out,
        "{} ({}) - {} - joined {}",
        profile.full_name, profile.id, profile.organization, profile.date_joined
    );

    out.push_str("\nPersonal Information\n");
    field(&mut out, "FULL NAME", &profile.full_name);
    field(&mut out, "PHONE NUMBER", &profile.phone);
    field(&mut out, "EMAIL ADDRESS", &profile.email);
    field(&mut out, "BVN", &profile.bvn);
    field(&mut out, "GENDER", &profile.gender);
    field(&mut out, "MARITAL STATUS", &profile.marital_status);
    field(&mut out, "CHILDREN", &profile.children);
    field(&mut out, "TYPE OF RESIDENCE", &profile.residence_type);

    out.push_str("\nEducation and Employment\n");
    field(&mut out, "LEVEL OF EDUCATION", &profile.education_level);
    field(&mut out, "EMPLOYMENT STATUS", &profile.employment_status);
    field(&mut out, "SECTOR OF EMPLOYMENT", &profile.sector);
    field(&mut out, "DURATION OF EMPLOYMENT", &profile.duration_of_employment);
    field(&mut out, "OFFICE EMAIL", &profile.office_email);
    field(&mut out, "MONTHLY INCOME", &profile.monthly_income);
    field(&mut out, "LOAN REPAYMENT", &profile.loan_repayment);

    out.push_str("\nSocials\n");
    field(&mut out, "TWITTER", &profile.socials.twitter);
    field(&mut out, "FACEBOOK", &profile.socials.facebook);
    field(&mut out, "INSTAGRAM", &profile.socials.instagram);

    out.push_str("\nGuarantor\n");
    for guarantor in &profile.guarantors {
        field(&mut out, "FULL NAME", &guarantor.full_name);
        field(&mut out, "PHONE NUMBER", &guarantor.phone);
        field(&mut out, "EMAIL ADDRESS", &guarantor.email);
        field(&mut out, "RELATIONSHIP", &guarantor.relationship);
        out.push('\n');
    }
    out
}

/// One line per stored override: key, last write time, and JSON size
pub fn render_edits(rows: &[EditRow]) -> String {
    if rows.is_empty() {
        return "No stored edits".to_string();
    }

    let mut out = String::new();
    for row in rows {
        let written = chrono::DateTime::from_timestamp_millis(row.updated_at)
            .map_or_else(|| row.updated_at.to_string(), |t| t.to_rfc3339());
        let _ = writeln!(out, "{:<12}{}  {} bytes", row.key, written, row.value.len());
    }
    out
}

//! Date duration calculator
//!
//! Decomposes the span between two dates into whole years, months, and
//! days, borrowing from the month component when the day-of-month of the
//! end date precedes that of the start date.

use chrono::{Datelike, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date duration state; the duration fields are always derived
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateState {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_years: i32,
    pub duration_months: i32,
    pub duration_days: i32,
    pub show_start_picker: bool,
    pub show_end_picker: bool,
}

/// Operations accepted by the date duration reducer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DateAction {
    StartDateChanged(NaiveDate),
    EndDateChanged(NaiveDate),
    ShowStartPicker,
    ShowEndPicker,
    HidePickers,
}

impl Default for DateState {
    fn default() -> Self {
        let today = Local::now().date_naive();
        Self::new(today, today + chrono::Days::new(1))
    }
}

impl DateState {
    /// Build a state with the duration already computed
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        recompute(Self {
            start_date,
            end_date,
            duration_years: 0,
            duration_months: 0,
            duration_days: 0,
            show_start_picker: false,
            show_end_picker: false,
        })
    }
}

/// Apply a date action, returning the next state
pub fn apply(mut state: DateState, action: DateAction) -> DateState {
    match action {
        DateAction::StartDateChanged(date) => state.start_date = date,
        DateAction::EndDateChanged(date) => state.end_date = date,
        DateAction::ShowStartPicker => state.show_start_picker = true,
        DateAction::ShowEndPicker => state.show_end_picker = true,
        DateAction::HidePickers => {
            state.show_start_picker = false;
            state.show_end_picker = false;
        }
    }
    recompute(state)
}

fn recompute(mut state: DateState) -> DateState {
    let (years, months, days) = period_between(state.start_date, state.end_date);
    state.duration_years = years;
    state.duration_months = months;
    state.duration_days = days;
    state
}

/// Calendar period between two dates as (years, months, days)
///
/// Matches the java.time `Period.between` decomposition: the month total
/// borrows one when the trailing day component would otherwise be
/// negative, and the day remainder is measured from the month-shifted
/// start date (day-of-month clamped to the target month's length).
pub fn period_between(start: NaiveDate, end: NaiveDate) -> (i32, i32, i32) {
    let mut total_months = i64::from(end.year() - start.year()) * 12
        + (i64::from(end.month()) - i64::from(start.month()));
    let mut days = i64::from(end.day()) - i64::from(start.day());

    if total_months > 0 && days < 0 {
        total_months -= 1;
        let shifted = start
            .checked_add_months(Months::new(total_months as u32))
            .unwrap_or(start);
        days = (end - shifted).num_days();
    } else if total_months < 0 && days > 0 {
        total_months += 1;
        days -= i64::from(days_in_month(end.year(), end.month()));
    }

    (
        (total_months / 12) as i32,
        (total_months % 12) as i32,
        days as i32,
    )
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid month start");
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("valid next month start");
    (next - first).num_days() as u32
}

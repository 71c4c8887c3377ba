use chrono::{Datelike, NaiveDate};

pub const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Number of days in the month of `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    // Only December of the last representable year has no successor month
    shift_month(date, 1)
        .and_then(|next| next.pred_opt())
        .map_or(31, |last| last.day())
}

/// First day of the month `delta` months away from the month of `date`
pub fn shift_month(date: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let index = date.year() * 12 + date.month0() as i32 + delta;
    NaiveDate::from_ymd_opt(index.div_euclid(12), index.rem_euclid(12) as u32 + 1, 1)
}

/// Weeks of the month containing `date`, Monday first, padded with `None`
pub fn month_grid(date: NaiveDate) -> Vec<[Option<NaiveDate>; 7]> {
    let first = first_of_month(date);
    let offset = first.weekday().num_days_from_monday() as usize;
    let days = days_in_month(first) as usize;

    let mut cells: Vec<Option<NaiveDate>> = vec![None; offset];
    cells.extend(first.iter_days().take(days).map(Some));
    while cells.len() % 7 != 0 {
        cells.push(None);
    }

    cells
        .chunks(7)
        .map(|week| {
            let mut row = [None; 7];
            row.copy_from_slice(week);
            row
        })
        .collect()
}

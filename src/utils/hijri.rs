use chrono::{Datelike, Duration, NaiveDate};
use hijri_date::HijriDate;

const RAMADAN: usize = 9;

/// Hijri month names as written in Indonesian (index 0 = Muharram = month 1)
const HIJRI_MONTH_NAMES: &[&str] = &[
    "Muharram",
    "Safar",
    "Rabiul Awal",
    "Rabiul Akhir",
    "Jumadil Awal",
    "Jumadil Akhir",
    "Rajab",
    "Syaban",
    "Ramadan",
    "Syawal",
    "Zulkaidah",
    "Zulhijah",
];

fn hijri_month_name(month: usize) -> &'static str {
    if (1..=12).contains(&month) {
        HIJRI_MONTH_NAMES[month - 1]
    } else {
        "?"
    }
}

fn to_hijri(date: NaiveDate, offset_days: i32) -> Option<HijriDate> {
    let adjusted = date + Duration::days(offset_days as i64);
    match HijriDate::from_gr(
        adjusted.year() as usize,
        adjusted.month() as usize,
        adjusted.day() as usize,
    ) {
        Ok(hd) => Some(hd),
        Err(e) => {
            log::debug!("Hijri conversion failed for {}: {}", adjusted, e);
            None
        }
    }
}

/// "5 Ramadan 1447 H". `offset_days` shifts for local moon sighting.
pub fn hijri_string(date: NaiveDate, offset_days: i32) -> Option<String> {
    to_hijri(date, offset_days)
        .map(|hd| format!("{} {} {} H", hd.day(), hijri_month_name(hd.month()), hd.year()))
}

/// Day number within Ramadan, if `date` falls inside it.
pub fn ramadan_day(date: NaiveDate, offset_days: i32) -> Option<usize> {
    to_hijri(date, offset_days)
        .filter(|hd| hd.month() == RAMADAN)
        .map(|hd| hd.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names_are_one_based() {
        assert_eq!(hijri_month_name(1), "Muharram");
        assert_eq!(hijri_month_name(RAMADAN), "Ramadan");
        assert_eq!(hijri_month_name(12), "Zulhijah");
        assert_eq!(hijri_month_name(0), "?");
        assert_eq!(hijri_month_name(13), "?");
    }
}

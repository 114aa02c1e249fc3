//! Lenient parsers for the free-text price, date and duration columns.

use chrono::{Days, NaiveDate};

/// Price in the listing currency, `None` when not bookable.
///
/// Everything except digits and `.` is stripped first, so `"£1,299.00"`
/// reads as 1299. `"N/A"` (any case, anywhere in the string), empty and
/// unparseable inputs are `None`.
pub fn parse_price(raw: &str) -> Option<f64> {
    let t = raw.trim();
    if t.is_empty() || t.to_ascii_lowercase().contains("n/a") {
        return None;
    }
    let numeric: String = t
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let value = leading_decimal(&numeric)?;
    (value >= 0.0).then_some(value)
}

/// Longest `digits[.digits]` prefix, as a float.
fn leading_decimal(s: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }
    let prefix = s[..end].trim_end_matches('.');
    if prefix.is_empty() || prefix == "." {
        return None;
    }
    prefix.parse().ok()
}

/// First day of a sailing.
///
/// Takes the part before `" - "` of ranges like `"29 Aug '25 - 5 Sep '25"`.
/// Accepts `D Mon 'YY`, `D Mon YYYY` (month name or abbreviation), ISO
/// `YYYY-MM-DD` and `Mon D, YYYY`.
pub fn parse_departure_date(raw: &str) -> Option<NaiveDate> {
    let first = raw.split(" - ").next()?.trim();
    if first.is_empty() {
        return None;
    }

    let parts: Vec<&str> = first.split_whitespace().collect();
    if let [day, month, year] = parts.as_slice() {
        if let Some(d) = day_month_year(day, month, year) {
            return Some(d);
        }
    }

    let iso = first.split('T').next().unwrap_or(first);
    if let Ok(d) = NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        return Some(d);
    }

    let expanded = first.replace('\'', "20");
    ["%b %d, %Y", "%B %d, %Y", "%b %d %Y", "%B %d %Y", "%d %b %Y", "%d %B %Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&expanded, fmt).ok())
}

fn day_month_year(day: &str, month: &str, year: &str) -> Option<NaiveDate> {
    let day: u32 = day.trim_end_matches(',').parse().ok()?;
    let month = month_number(month)?;
    let year = match year.strip_prefix('\'') {
        Some(yy) if yy.len() == 2 => 2000 + yy.parse::<i32>().ok()?,
        Some(_) => return None,
        None => year.parse::<i32>().ok()?,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_number(name: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ];
    let lower = name.trim_end_matches(['.', ',']).to_ascii_lowercase();
    if lower.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|m| lower.starts_with(m))
        .map(|i| i as u32 + 1)
}

/// Number of nights: the first run of digits in the duration text.
pub fn parse_nights(duration: &str) -> Option<u32> {
    let digits: String = duration
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Departure plus the number of nights in `duration`.
pub fn parse_arrival_date(departure: &str, duration: &str) -> Option<NaiveDate> {
    let dep = parse_departure_date(departure)?;
    let nights = parse_nights(duration)?;
    dep.checked_add_days(Days::new(u64::from(nights)))
}

//! Console formatting: section banners and balance lines

use std::io::Write;

use crate::error::{ConsoleError, ValidationError};

/// Smallest field width that fits `d.dd`
pub const MIN_AMOUNT_WIDTH: usize = 4;

/// Build the three lines of a banner framing the upper-cased `title`
///
/// The top and bottom rows repeat `border` once per title character plus
/// four, so the frame lines up with `border + ' ' + TITLE + ' ' + border`.
pub fn banner_lines(title: &str, border: &str) -> Result<[String; 3], ValidationError> {
    if border.chars().count() != 1 {
        return Err(ValidationError::InvalidBorder(border.to_string()));
    }

    let edge = border.repeat(title.chars().count() + 4);
    let middle = format!("{border} {} {border}", title.to_uppercase());
    Ok([edge.clone(), middle, edge])
}

/// Write a banner to `out`
pub fn banner<W: Write>(out: &mut W, title: &str, border: &str) -> Result<(), ConsoleError> {
    for line in banner_lines(title, border)? {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Minimum width needed to print `amount` with two decimals
fn required_width(amount: f64) -> f64 {
    amount.log10().floor() + 4.0
}

/// Format `$<amount> in year <year>` with the amount right-aligned in
/// `amount_width` characters
pub fn balance_line(amount: f64, amount_width: usize, year: u32) -> Result<String, ValidationError> {
    if amount.is_nan() || amount <= 0.0 {
        return Err(ValidationError::NonPositiveAmount(amount));
    }

    let required = required_width(amount);
    if (amount_width as f64) < required {
        return Err(ValidationError::InsufficientWidth {
            amount,
            width: amount_width,
            required,
        });
    }

    Ok(format!("${amount:>amount_width$.2} in year {year}"))
}

/// Field width for every balance line of a session, derived from the target
pub fn field_width(target_balance: f64) -> usize {
    if target_balance > 0.0 && target_balance.is_finite() {
        required_width(target_balance).max(0.0) as usize
    } else {
        MIN_AMOUNT_WIDTH
    }
}

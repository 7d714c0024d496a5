/// Separator used between digit groups and before the currency symbol (no-break space).
pub const MZN_SPACE: char = '\u{a0}';

/// Integer digits needed before thousands are grouped at all.
const MIN_GROUPED_DIGITS: usize = 5;

/// Formats a local-currency amount the way customers read it: `4020,00 MTn`,
/// `12 345,50 MTn`.
///
/// Rounds to two decimals with `,` as the decimal mark. Thousands are split by a
/// no-break space only once the integer part reaches five digits.
pub fn format_mzn(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let negative = cents < 0;
    let cents = cents.unsigned_abs();

    let units = (cents / 100).to_string();
    let fraction = cents % 100;

    let grouped = if units.len() < MIN_GROUPED_DIGITS {
        units
    } else {
        let mut grouped = String::with_capacity(units.len() + units.len() / 3 * 2);
        for (i, ch) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                grouped.push(MZN_SPACE);
            }
            grouped.push(ch);
        }
        grouped
    };

    format!(
        "{}{},{:02}{}MTn",
        if negative { "-" } else { "" },
        grouped,
        fraction,
        MZN_SPACE
    )
}

// Monetary value normalization for cells that mix pt-BR and en-US number
// conventions ("R$ 1.234,56", "1,234.56", "1234,56", "USD 10").
use shared::models::RawCell;

const CURRENCY_MARKERS: &[&str] = &["R$", "$", "USD", "€"];

/// Converts a raw monetary cell into an amount.
///
/// Returns `None` for blank cells and for anything that cannot be read as a
/// number. Numeric cells are passed through untouched. This never fails
/// loudly: a malformed cell only loses its own value.
pub fn normalize_amount(raw: &RawCell) -> Option<f64> {
    match raw {
        RawCell::Empty => None,
        RawCell::Number(v) if v.is_nan() => None,
        RawCell::Number(v) => Some(*v),
        RawCell::Text(s) => normalize_amount_text(s),
    }
}

/// Text half of [`normalize_amount`].
pub fn normalize_amount_text(raw: &str) -> Option<f64> {
    let text = strip_currency(raw);
    if text.is_empty() {
        return None;
    }

    if !is_thousands_grouped(&text) {
        if let Some(value) = parse_plain_decimal(&text) {
            return Some(value);
        }
        if has_malformed_exponent(&text) {
            return None;
        }
    }

    let localized = localize_separators(&text);
    let cleaned = clean_number(&localized)?;
    parse_plain_decimal(&cleaned)
}

fn strip_currency(raw: &str) -> String {
    let mut text = raw.trim().to_string();
    // "R$" goes before "$" so the "R" is not left behind.
    for marker in CURRENCY_MARKERS {
        text = text.replace(marker, "");
    }
    text.chars()
        .filter(|c| *c != '"' && *c != '\'' && !c.is_whitespace())
        .collect()
}

// Optional sign, digits with at most one '.', then an optional exponent
// ("1.5E+06"). "inf", "nan" and overflowing values are not accepted.
fn parse_plain_decimal(text: &str) -> Option<f64> {
    let body = text.strip_prefix(['-', '+']).unwrap_or(text);
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body, None),
    };

    let mut digits = 0usize;
    let mut dots = 0usize;
    for ch in mantissa.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return None,
        }
    }
    if digits == 0 || dots > 1 {
        return None;
    }
    if let Some(exponent) = exponent {
        let exp_digits = exponent.strip_prefix(['-', '+']).unwrap_or(exponent);
        if exp_digits.is_empty() || !exp_digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

// A digit followed by e/E and a (signed) digit: scientific notation that
// failed the plain parse, which must not be collapsed into its digits.
fn has_malformed_exponent(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    chars.windows(3).any(|w| {
        w[0].is_ascii_digit()
            && matches!(w[1], 'e' | 'E')
            && (w[2].is_ascii_digit() || matches!(w[2], '+' | '-'))
    })
}

/// `1.234`, `-12.500`: a single dot, 1-3 leading digits not starting with
/// zero and exactly three trailing digits. Read as a grouped integer.
fn is_thousands_grouped(text: &str) -> bool {
    let body = text.strip_prefix(['-', '+']).unwrap_or(text);
    let Some((int_part, frac_part)) = body.split_once('.') else {
        return false;
    };
    (1..=3).contains(&int_part.len())
        && !int_part.starts_with('0')
        && int_part.chars().all(|c| c.is_ascii_digit())
        && frac_part.len() == 3
        && frac_part.chars().all(|c| c.is_ascii_digit())
}

// Rewrites the text so that '.' is the only decimal mark left.
fn localize_separators(text: &str) -> String {
    let has_dot = text.contains('.');
    let has_comma = text.contains(',');
    match (has_dot, has_comma) {
        (true, true) => {
            let last_dot = text.rfind('.');
            let last_comma = text.rfind(',');
            if last_comma > last_dot {
                text.replace('.', "").replace(',', ".")
            } else {
                text.replace(',', "")
            }
        }
        (false, true) => text.replace(',', "."),
        (true, false) => {
            let digits_and_dots: String = text.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
            if text.matches('.').count() > 1 || is_thousands_grouped(&digits_and_dots) {
                text.replace('.', "")
            } else {
                text.to_string()
            }
        }
        (false, false) => text.to_string(),
    }
}

// Keeps digits and dots, plus a leading minus. With several dots left, the
// last one is the decimal point and the rest are merged into the integer part.
fn clean_number(text: &str) -> Option<String> {
    let negative = text.starts_with('-');
    let body: String = text.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    if !body.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    let body = match body.rfind('.') {
        Some(last_dot) if body.matches('.').count() > 1 => {
            let int_part = body[..last_dot].replace('.', "");
            format!("{}.{}", int_part, &body[last_dot + 1..])
        }
        _ => body,
    };

    Some(if negative { format!("-{}", body) } else { body })
}

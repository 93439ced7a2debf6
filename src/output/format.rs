//! Fixed-width formatting of raw quantities for tabular console output.
//!
//! Every function right-justifies its result so columns line up in a
//! monospaced terminal, and renders missing values as a placeholder of the
//! same width class.

/// Binary byte units, largest first.
const BYTE_UNITS: [(u32, &str); 5] = [(40, "T"), (30, "G"), (20, "M"), (10, "K"), (0, "B")];

/// Siacoin denominations in hastings, largest first.
const HASTINGS_UNITS: [(f64, &str); 3] = [(1e27, "KS"), (1e24, "SC"), (1e21, "mS")];

/// Format a byte count using the largest binary unit the value reaches.
///
/// `None` renders as a 4-wide placeholder; a value below one byte renders as
/// a bare `0`. Everything else gets three decimal digits and a unit suffix,
/// right-justified to width 9.
pub fn format_bytes(bytes: Option<u64>) -> String {
    let Some(bytes) = bytes else {
        return "  - ".to_string();
    };
    for (magnitude, suffix) in BYTE_UNITS {
        let scale = (1u64 << magnitude) as f64;
        if bytes as f64 >= scale {
            return format!("{:>9}", format!("{:.3}{}", bytes as f64 / scale, suffix));
        }
    }
    format!("{:>9}", "0")
}

/// Format a hastings amount using the largest denomination it reaches.
///
/// `None` renders as a 5-wide placeholder; a value below one millisiacoin
/// renders as `0SC`. Everything else gets three decimal digits and a
/// two-letter suffix, right-justified to width 9.
pub fn format_hastings(hastings: Option<u128>) -> String {
    let Some(hastings) = hastings else {
        return "  -  ".to_string();
    };
    let hastings = hastings as f64;
    for (scale, suffix) in HASTINGS_UNITS {
        if hastings / scale >= 1.0 {
            return format!("{:>9}", format!("{:.3}{}", hastings / scale, suffix));
        }
    }
    format!("{:>9}", "0SC")
}

/// Format a contract count right-justified to width 3, `-` when missing.
pub fn format_contract_count(count: Option<u64>) -> String {
    match count {
        None => "-  ".to_string(),
        Some(count) => format!("{:>3}", count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_picks_the_largest_unit() {
        assert_eq!(format_bytes(Some(1 << 20)), "   1.000M");
        assert_eq!(format_bytes(Some(1 << 40)), "   1.000T");
        assert_eq!(format_bytes(Some(1536)), "   1.500K");
        assert_eq!(format_bytes(Some(999)), " 999.000B");
    }

    #[test]
    fn zero_bytes_renders_as_bare_zero() {
        assert_eq!(format_bytes(Some(0)), "        0");
    }

    #[test]
    fn missing_bytes_render_as_placeholder() {
        assert_eq!(format_bytes(None), "  - ");
    }

    #[test]
    fn hastings_pick_the_largest_denomination() {
        // 1 KS
        assert_eq!(
            format_hastings(Some(1_000_000_000_000_000_000_000_000_000)),
            "  1.000KS"
        );
        // 2.5 SC
        assert_eq!(
            format_hastings(Some(2_500_000_000_000_000_000_000_000)),
            "  2.500SC"
        );
        // 7 mS
        assert_eq!(
            format_hastings(Some(7_000_000_000_000_000_000_000)),
            "  7.000mS"
        );
    }

    #[test]
    fn sub_millisiacoin_renders_as_zero() {
        assert_eq!(format_hastings(Some(1)), "      0SC");
        assert_eq!(format_hastings(Some(0)), "      0SC");
    }

    #[test]
    fn missing_hastings_render_as_placeholder() {
        assert_eq!(format_hastings(None), "  -  ");
    }

    #[test]
    fn contract_counts_are_right_justified() {
        assert_eq!(format_contract_count(Some(3)), "  3");
        assert_eq!(format_contract_count(Some(123)), "123");
        assert_eq!(format_contract_count(None), "-  ");
    }
}

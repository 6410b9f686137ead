use std::cmp::Ordering;

/// Returns the first run of ASCII digits in `name` as an integer.
///
/// The run may appear anywhere in the name, not only as a prefix. A run too
/// large for `u64` yields `None`, the same as a name without digits.
pub fn sequence_number(name: &str) -> Option<u64> {
    let start = name.find(|c: char| c.is_ascii_digit())?;
    let rest = &name[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}

/// Total order used for listing and merging folder contents.
///
/// Numbered names compare by their sequence number, ties broken
/// lexicographically. Names without a usable number compare lexicographically
/// among themselves and sort after every numbered name.
pub fn compare_filenames(a: &str, b: &str) -> Ordering {
    match (sequence_number(a), sequence_number(b)) {
        (Some(left), Some(right)) => left.cmp(&right).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

pub fn sort_filenames(names: &mut [String]) {
    names.sort_by(|a, b| compare_filenames(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut owned: Vec<String> = names.iter().map(|name| name.to_string()).collect();
        sort_filenames(&mut owned);
        owned
    }

    #[test]
    fn extracts_first_digit_run() {
        assert_eq!(sequence_number("12-document.pdf"), Some(12));
        assert_eq!(sequence_number("scan_007_page3.pdf"), Some(7));
        assert_eq!(sequence_number("document.pdf"), None);
    }

    #[test]
    fn overflowing_run_counts_as_unnumbered() {
        assert_eq!(sequence_number("99999999999999999999999-a.pdf"), None);
    }

    #[test]
    fn orders_by_numeric_value_not_text() {
        assert_eq!(
            sorted(&["2-document.pdf", "12-document.pdf", "1-document.pdf"]),
            vec!["1-document.pdf", "2-document.pdf", "12-document.pdf"]
        );
    }

    #[test]
    fn larger_batch_orders_numerically() {
        assert_eq!(
            sorted(&[
                "2-document.pdf",
                "12-document.pdf",
                "1-document.pdf",
                "16-document.pdf",
                "31-document.pdf",
                "30-document.pdf",
                "3-document.pdf",
            ]),
            vec![
                "1-document.pdf",
                "2-document.pdf",
                "3-document.pdf",
                "12-document.pdf",
                "16-document.pdf",
                "30-document.pdf",
                "31-document.pdf",
            ]
        );
    }

    #[test]
    fn names_without_digits_sort_lexicographically() {
        assert_eq!(
            sorted(&["c-document.pdf", "a-document.pdf", "b-document.pdf"]),
            vec!["a-document.pdf", "b-document.pdf", "c-document.pdf"]
        );
    }

    #[test]
    fn equal_numbers_fall_back_to_full_name() {
        assert_eq!(
            sorted(&["3-zeta.pdf", "3-alpha.pdf", "03-beta.pdf"]),
            vec!["03-beta.pdf", "3-alpha.pdf", "3-zeta.pdf"]
        );
    }

    #[test]
    fn embedded_digits_are_used() {
        assert_eq!(compare_filenames("a2-b1.pdf", "a1-b2.pdf"), Ordering::Greater);
        assert_eq!(compare_filenames("page10.pdf", "page9.pdf"), Ordering::Greater);
    }

    #[test]
    fn numbered_names_precede_unnumbered_ones() {
        assert_eq!(compare_filenames("2-document.pdf", "document.pdf"), Ordering::Less);
        assert_eq!(
            sorted(&["c1.pdf", "b.pdf", "a2.pdf"]),
            vec!["c1.pdf", "a2.pdf", "b.pdf"]
        );
    }
}

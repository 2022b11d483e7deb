//! Locale-style string ordering for catalogue sorting.

use std::cmp::Ordering;

/// Compare two strings the way a default-locale collator would for the
/// dataset's mostly-ASCII text.
///
/// Letters compare case-insensitively first. When two strings only differ by
/// case, the first differing position puts lowercase ahead of uppercase.
/// Anything still tied falls back to code-point order so the result is total.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use dishes_backend::domain::locale_cmp;
///
/// assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
/// assert_eq!(locale_cmp("naan", "Naan"), Ordering::Less);
/// ```
pub fn locale_cmp(left: &str, right: &str) -> Ordering {
    let folded = left
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase));

    folded
        .then_with(|| case_tiebreak(left, right))
        .then_with(|| left.cmp(right))
}

fn case_tiebreak(left: &str, right: &str) -> Ordering {
    left.chars()
        .zip(right.chars())
        .find(|(a, b)| a != b)
        .map_or(Ordering::Equal, |(a, b)| {
            match (a.is_lowercase(), b.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => Ordering::Equal,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Aloo gobi", "aloo tikki", Ordering::Less)]
    #[case("biryani", "Biryani", Ordering::Less)]
    #[case("Biryani", "biryani", Ordering::Greater)]
    #[case("dal", "Dal makhani", Ordering::Less)]
    #[case("Zarda", "adhirasam", Ordering::Greater)]
    #[case("kheer", "kheer", Ordering::Equal)]
    fn orders_like_a_collator(#[case] left: &str, #[case] right: &str, #[case] expected: Ordering) {
        assert_eq!(locale_cmp(left, right), expected);
    }

    #[rstest]
    fn sorting_groups_case_variants_together() {
        let mut names = vec!["Rasgulla", "appam", "Bhatura", "rasam", "Appam"];
        names.sort_by(|a, b| locale_cmp(a, b));
        assert_eq!(names, vec!["appam", "Appam", "Bhatura", "rasam", "Rasgulla"]);
    }
}

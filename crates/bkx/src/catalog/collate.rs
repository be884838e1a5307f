//! 🔤 Collation — "is 'apple' before 'Banana'?" Yes. Byte order says no. Byte order is wrong.
//!
//! Plain `str::cmp` puts every uppercase letter before every lowercase one,
//! and every accented letter after 'z'. That's how you end up with "Émile" filed
//! somewhere behind "Zola". Humans hate that.
//!
//! 🧠 Knowledge graph, three levels, compared in order:
//! - primary: NFD-decompose, drop combining marks, lowercase (`ß` counts as `ss`).
//!   "Émile" and "emile" are the same letters here.
//! - secondary: the accents. Unaccented wins: "e" < "é".
//! - tertiary: case. Lowercase wins: "apple" < "Apple".
//!
//! No ICU tables hauled in. Latin-script shelves come out the way a reader expects.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// 🔑 A precomputed sort key. Build once per item, compare many times.
///
/// Field order matters: derived `Ord` compares `base` first, then `accents`, then `case_marks`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    base: String,
    accents: String,
    // -- (is_uppercase, char) per char. false < true, so lowercase sorts first on a case-only tie.
    case_marks: Vec<(bool, char)>,
}

impl CollationKey {
    pub fn new(text: &str) -> Self {
        let decomposed: Vec<char> = text.nfd().collect();
        let mut base = String::with_capacity(text.len());
        for c in decomposed
            .iter()
            .filter(|c| !is_combining_mark(**c))
            .flat_map(|c| c.to_lowercase())
        {
            match c {
                'ß' => base.push_str("ss"),
                other => base.push(other),
            }
        }
        let accents = decomposed.iter().flat_map(|c| c.to_lowercase()).collect();
        let case_marks = decomposed.iter().map(|c| (c.is_uppercase(), *c)).collect();
        Self {
            base,
            accents,
            case_marks,
        }
    }
}

/// ⚖️ Compare two strings the way a reader expects a book list to be ordered.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut names: Vec<&str>) -> Vec<&str> {
        names.sort_by(|a, b| locale_cmp(a, b));
        names
    }

    #[test]
    fn the_one_where_case_stops_bullying_the_alphabet() {
        assert_eq!(
            sorted(vec!["cherry", "Banana", "apple", "banana", "Apple"]),
            vec!["apple", "Apple", "banana", "Banana", "cherry"]
        );
    }

    #[test]
    fn the_one_where_prefixes_go_first() {
        assert_eq!(locale_cmp("Adam", "Adams"), Ordering::Less);
        assert_eq!(locale_cmp("", "a"), Ordering::Less);
        assert_eq!(locale_cmp("Zeta", "Zeta"), Ordering::Equal);
    }

    #[test]
    fn the_one_where_accents_stop_getting_sent_to_the_back_of_the_line() {
        assert_eq!(
            sorted(vec!["Zola", "Émile", "Müller", "Mz", "Eve"]),
            vec!["Émile", "Eve", "Müller", "Mz", "Zola"]
        );
        assert_eq!(locale_cmp("le Carré", "le Carre"), Ordering::Greater);
        assert_eq!(locale_cmp("le Carré", "Lem"), Ordering::Less);
    }

    #[test]
    fn the_one_where_the_sharp_s_reads_as_two_of_them() {
        assert_eq!(locale_cmp("Strauß", "Strauss"), Ordering::Greater);
        assert_eq!(locale_cmp("Strauß", "Straust"), Ordering::Less);
        assert_eq!(sorted(vec!["Weiß", "Weiz", "Weis"]), vec!["Weis", "Weiß", "Weiz"]);
    }

    #[test]
    fn the_one_where_precomposed_and_decomposed_agree_on_the_letters() {
        // -- U+00E9 vs 'e' + U+0301: same book, different keyboard
        assert_eq!(locale_cmp("Caf\u{e9}", "Cafe\u{301}"), Ordering::Equal);
    }
}

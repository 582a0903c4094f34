//! Name ordering for French display data.
//!
//! Names compare on a folded key: canonical decomposition with combining marks
//! removed, then lowercased, so "Équitation" sorts next to "Escrime" instead of
//! after "Voile". Names with equal keys fall back to their raw text.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Accent- and case-folded form of `name`.
#[must_use]
pub fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Dictionary order of two names.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Équitation", "equitation")]
    #[case("Athlétisme", "athletisme")]
    #[case("Pentathlon Moderne", "pentathlon moderne")]
    #[case("", "")]
    fn folds_accents_and_case(#[case] name: &str, #[case] key: &str) {
        assert_eq!(collation_key(name), key);
    }

    #[test]
    fn accented_names_sort_with_their_letter() {
        let mut names = vec!["Voile", "Équitation", "escalade", "Escrime"];
        names.sort_by(|a, b| collate(a, b));
        assert_eq!(names, vec!["Équitation", "escalade", "Escrime", "Voile"]);
    }

    #[test]
    fn equal_keys_tie_break_on_raw_text() {
        assert_eq!(collate("Epee", "Épée"), Ordering::Less);
        assert_eq!(collate("Épée", "Épée"), Ordering::Equal);
    }
}

//! Removal of markup artifacts from roll-call identifiers and links.
//!
//! The listing markup sometimes leaks pagination text ("Page2") and a
//! duplicated session year into the detail href. These rules patch the
//! observed quirks; they are not a general URL normalizer.

use std::sync::LazyLock;

use regex::Regex;

/// "Page<digits>" at the very end of a link.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TRAILING_PAGE_ARTIFACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Page\d+$").expect("valid regex"));

/// "Page<digits>" plus any trailing whitespace or closing parentheses.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PAGE_ARTIFACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Page\d+[\s)]*").expect("valid regex"));

/// Apply `step` until the text stops changing.
///
/// Every step only removes characters, so this terminates.
fn until_stable(text: &str, step: impl Fn(&str) -> String) -> String {
    let mut result = text.to_string();
    loop {
        let next = step(&result);
        if next == result {
            return result;
        }
        result = next;
    }
}

fn strip_query_chars(text: &str) -> String {
    text.replace(['?', '='], "")
}

/// Clean a synthesized detail link.
///
/// Strips `?` and `=`, collapses a doubled year token and drops a trailing
/// `Page<digits>`.
///
/// # Examples
/// ```
/// use rollcall_harvester::normalize::clean_link;
///
/// assert_eq!(
///     clean_link("https://clerk.house.gov/Votes/20252025?page=2", 2025),
///     "https://clerk.house.gov/Votes/2025"
/// );
/// ```
pub fn clean_link(link: &str, year: i32) -> String {
    let year = year.to_string();
    let doubled = format!("{year}{year}");
    until_stable(link.trim(), |s| {
        let mut out = strip_query_chars(s);
        if out.matches(year.as_str()).count() > 1 {
            out = out.replace(&doubled, &year);
        }
        TRAILING_PAGE_ARTIFACT.replace(&out, "").into_owned()
    })
}

/// Clean a raw roll-call number.
///
/// Strips `?` and `=`, every `Page<digits>` artifact (with trailing spaces or
/// parentheses) and every occurrence of the year token.
///
/// # Examples
/// ```
/// use rollcall_harvester::normalize::clean_identifier;
///
/// assert_eq!(clean_identifier("2025123?page=2", 2025), "123");
/// ```
pub fn clean_identifier(raw: &str, year: i32) -> String {
    let year = year.to_string();
    until_stable(raw, |s| {
        let out = strip_query_chars(s);
        let out = PAGE_ARTIFACT.replace_all(&out, "");
        out.replace(year.as_str(), "").trim().to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://clerk.house.gov/Votes";

    #[test]
    fn test_clean_link_plain() {
        assert_eq!(clean_link(&format!("{BASE}/202512"), 2025), format!("{BASE}/202512"));
    }

    #[test]
    fn test_clean_link_query_chars() {
        assert_eq!(clean_link(&format!("{BASE}/2025?a=12"), 2025), format!("{BASE}/2025a12"));
    }

    #[test]
    fn test_clean_link_doubled_year() {
        assert_eq!(
            clean_link(&format!("{BASE}/20252025"), 2025),
            format!("{BASE}/2025")
        );
    }

    #[test]
    fn test_clean_link_year_not_adjacent_is_kept() {
        assert_eq!(
            clean_link(&format!("{BASE}/2025x2025"), 2025),
            format!("{BASE}/2025x2025")
        );
    }

    #[test]
    fn test_clean_link_trailing_page() {
        assert_eq!(
            clean_link(&format!("{BASE}/2025page=3"), 2025),
            format!("{BASE}/2025")
        );
        assert_eq!(
            clean_link(&format!("{BASE}/2025PAGE12"), 2025),
            format!("{BASE}/2025")
        );
    }

    #[test]
    fn test_clean_link_page_not_at_end_is_kept() {
        assert_eq!(
            clean_link(&format!("{BASE}/Page2/202512"), 2025),
            format!("{BASE}/Page2/202512")
        );
    }

    #[test]
    fn test_clean_identifier_plain() {
        assert_eq!(clean_identifier("123", 2025), "123");
        assert_eq!(clean_identifier("", 2025), "");
    }

    #[test]
    fn test_clean_identifier_page_artifacts() {
        assert_eq!(clean_identifier("?page=2", 2025), "");
        assert_eq!(clean_identifier("12Page3 ", 2025), "12");
        assert_eq!(clean_identifier("12page3) )", 2025), "12");
        assert_eq!(clean_identifier("Page4 (12)", 2025), "(12)");
    }

    #[test]
    fn test_clean_identifier_year() {
        assert_eq!(clean_identifier("202545", 2025), "45");
        assert_eq!(clean_identifier("45", 2024), "45");
    }

    #[test]
    fn test_cleaning_is_idempotent() {
        let links = [
            format!("{BASE}/202520252025"),
            format!("{BASE}/2025Page1Page2"),
            format!("{BASE}/2025?page=1page2"),
        ];
        for link in &links {
            let once = clean_link(link, 2025);
            assert_eq!(clean_link(&once, 2025), once, "link {link}");
        }

        let ids = ["PaPage1ge2 12", "220255", "Page1Page2)", "2025?page=2"];
        for id in ids {
            let once = clean_identifier(id, 2025);
            assert_eq!(clean_identifier(&once, 2025), once, "identifier {id}");
        }
    }

    #[test]
    fn test_stacked_artifacts_fully_removed() {
        assert_eq!(clean_link(&format!("{BASE}/202520252025"), 2025), format!("{BASE}/2025"));
        assert_eq!(clean_link(&format!("{BASE}/2025Page1Page2"), 2025), format!("{BASE}/2025"));
        assert_eq!(clean_identifier("PaPage1ge2 12", 2025), "12");
        assert_eq!(clean_identifier("220255", 2025), "25");
    }
}

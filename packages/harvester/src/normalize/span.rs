//! Labelled-span extraction from flattened record text.

/// Text between `start` and the first end label that occurs after it.
///
/// End labels are tried in priority order, not by position: the first label
/// in `ends` that occurs after `start` closes the span. When none occurs the
/// span runs to the end of the text. Returns `None` only when `start` is
/// missing. The span is trimmed.
///
/// # Examples
/// ```
/// use rollcall_harvester::normalize::between;
///
/// let text = "Vote Question:On PassageBill Number:H R 1";
/// assert_eq!(between(text, "Vote Question:", &["Bill", "Author"]), Some("On Passage"));
/// assert_eq!(between(text, "Vote Type", &["Bill"]), None);
/// ```
pub fn between<'a>(text: &'a str, start: &str, ends: &[&str]) -> Option<&'a str> {
    let from = text.find(start)? + start.len();
    let rest = &text[from..];
    let end = ends
        .iter()
        .find_map(|label| rest.find(label))
        .unwrap_or(rest.len());
    Some(rest[..end].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = "Jan 16, 2025, 11:48 AM|119th Congress, 1st SessionVote Question:\
        On Motion to Suspend the Rules and PassBill Number:H R 23\
        Bill Title & Description: Illegitimate Court Counteraction Act Vote Type:2/3 YEA-AND-NAY\
        Status:Passed";

    #[test]
    fn test_question_stops_at_bill() {
        assert_eq!(
            between(RECORD, "Vote Question:", &["Bill", "Author"]),
            Some("On Motion to Suspend the Rules and Pass")
        );
    }

    #[test]
    fn test_question_falls_back_to_author() {
        let text = "Vote Question:On Agreeing to the AmendmentAuthor:Mr. Smith Vote Type:RECORDED VOTE";
        assert_eq!(
            between(text, "Vote Question:", &["Bill", "Author"]),
            Some("On Agreeing to the Amendment")
        );
    }

    #[test]
    fn test_end_labels_by_priority_not_position() {
        let text = "Vote Question:On the MotionAuthor:Ms. JonesBill Number:H R 5";
        assert_eq!(
            between(text, "Vote Question:", &["Bill", "Author"]),
            Some("On the MotionAuthor:Ms. Jones")
        );
    }

    #[test]
    fn test_bill_title_to_vote_type() {
        assert_eq!(
            between(RECORD, "Bill Title & Description:", &["Vote Type"]),
            Some("Illegitimate Court Counteraction Act")
        );
    }

    #[test]
    fn test_author_to_vote_type() {
        let text = "Vote Question:On Agreeing to the AmendmentAuthor: Mr. Smith Vote Type:RECORDED VOTE";
        assert_eq!(between(text, "Author:", &["Vote Type"]), Some("Mr. Smith"));
    }

    #[test]
    fn test_missing_end_runs_to_end() {
        assert_eq!(
            between("Author: Ms. Jones of Ohio", "Author:", &["Vote Type"]),
            Some("Ms. Jones of Ohio")
        );
    }

    #[test]
    fn test_missing_start_is_none() {
        assert_eq!(between(RECORD, "Author:", &["Vote Type"]), None);
        assert_eq!(between("", "Vote Question:", &["Bill"]), None);
    }

    #[test]
    fn test_empty_span() {
        assert_eq!(between("Vote Question:Bill", "Vote Question:", &["Bill"]), Some(""));
    }
}

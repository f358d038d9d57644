//! Common regex patterns for receipt field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Date-like substring: 2024/1/5, 2024-01-05, 2024.1.5, 2024年1月5日.
    // The month/day separator may be the 月 marker or any of the ASCII
    // separators; the trailing 日 marker is optional.
    pub static ref DATE_PATTERN: Regex = Regex::new(
        r"(\d{4})[/\-.年](\d{1,2})(?:月|[/\-.])(\d{1,2})日?"
    ).unwrap();

    /// Canonical zero-padded form emitted by the date extractor.
    pub static ref CANONICAL_DATE: Regex = Regex::new(
        r"^\d{4}/\d{2}/\d{2}$"
    ).unwrap();

    // Amount candidate on a single line: optional currency prefix, a digit
    // run that may contain commas or hyphens, optional 円 suffix.
    // Hyphenated runs are captured whole so they can be rejected as phone
    // numbers instead of being split into bogus price fragments.
    pub static ref AMOUNT_CANDIDATE: Regex = Regex::new(
        r"[¥￥]?(\d(?:[\d,\-]*\d)?)円?"
    ).unwrap();

    // Currency-prefixed number for the whole-text fallback scan.
    pub static ref YEN_AMOUNT: Regex = Regex::new(
        r"[¥￥](\d(?:[\d,]*\d)?)"
    ).unwrap();
}

use crate::parser::dom::{find_first, DomNode};

const LOCATION_MARKER: &str = "📍";
const ROOM_WORD: &str = "Room";
/// "LAM" contains "AM"; text holding it is never a time or a location.
const FALSE_POSITIVE: &str = "LAM";

/// Extraction-time check: any `AM`/`PM` marker.
pub fn mentions_time(text: &str) -> bool {
    (text.contains("AM") || text.contains("PM")) && !text.contains(FALSE_POSITIVE)
}

pub fn mentions_location(text: &str) -> bool {
    (text.contains(LOCATION_MARKER) || text.contains(ROOM_WORD)) && !text.contains(FALSE_POSITIVE)
}

/// First element whose own text looks like a schedule.
pub fn date_time<N: DomNode>(block: N) -> Option<String> {
    find_first(block, |n| n.sole_text().is_some_and(|t| mentions_time(&t)))
        .map(|n| n.full_text().trim().to_string())
        .filter(|t| !t.is_empty())
}

/// First element whose own text carries the location marker or "Room".
pub fn location<N: DomNode>(block: N) -> Option<String> {
    find_first(block, |n| n.sole_text().is_some_and(|t| mentions_location(&t)))
        .map(|n| n.full_text().replace(LOCATION_MARKER, "").trim().to_string())
        .filter(|t| !t.is_empty())
}

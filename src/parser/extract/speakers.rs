use crate::model::{push_speaker, Speaker};
use crate::parser::dom::{class_contains, find_after, find_all, find_first, is_tag, DomNode};

/// Speakers listed inside the block's `speaker-details` area.
///
/// Structured `speaker` buttons are paired with the next span as their
/// title/organization. Without buttons, each non-empty text line is a name.
pub fn extract<N: DomNode>(block: N) -> Vec<Speaker> {
    let Some(area) = find_first(block, |n| {
        is_tag(n, "div") && class_contains(n, "speaker-details")
    }) else {
        return Vec::new();
    };

    let mut speakers = Vec::new();
    let buttons = find_all(area, |n| is_tag(n, "button") && class_contains(n, "speaker"));

    if buttons.is_empty() {
        for line in area.full_text().lines() {
            push_speaker(
                &mut speakers,
                Speaker {
                    name: line.trim().to_string(),
                    title_organization: None,
                },
            );
        }
        return speakers;
    }

    for button in buttons {
        let title_organization = find_after(block, button, |n| is_tag(n, "span"))
            .map(|span| span.full_text().trim().to_string())
            .filter(|t| !t.is_empty());
        push_speaker(
            &mut speakers,
            Speaker {
                name: button.full_text().trim().to_string(),
                title_organization,
            },
        );
    }
    speakers
}

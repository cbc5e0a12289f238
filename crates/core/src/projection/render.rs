//! Human-readable rendering

use chroney_common::format_long_date;
use chroney_domain::constants::TEXT_EVENT_SEPARATOR;
use chroney_domain::ProjectedEvent;

/// Render events as blank-line separated blocks of title, long date and
/// description
///
/// No events renders as the empty string.
pub fn render_text(events: &[ProjectedEvent]) -> String {
    events
        .iter()
        .map(|event| {
            format!("{}\n{}\n{}", event.title, format_long_date(event.date), event.description)
        })
        .collect::<Vec<_>>()
        .join(TEXT_EVENT_SEPARATOR)
}

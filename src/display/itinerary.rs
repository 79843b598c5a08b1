//! Itinerary display formatting
//!
//! Renders the itinerary view as plain text for the CLI.

use crate::services::ItineraryView;

/// Format the itinerary page: title, then one block per day
pub fn format_itinerary(view: &ItineraryView) -> String {
    let mut output = String::new();

    if !view.title.is_empty() {
        output.push_str(&view.title);
        output.push('\n');
        output.push_str(&"=".repeat(view.title.chars().count()));
        output.push_str("\n\n");
    }

    if let Some(placeholder) = &view.placeholder {
        output.push_str(placeholder);
        output.push('\n');
        return output;
    }

    for card in &view.days {
        output.push_str(&card.heading);
        output.push('\n');
        for line in card.content.lines() {
            output.push_str("  ");
            output.push_str(line);
            output.push('\n');
        }
        output.push('\n');
    }

    output
}

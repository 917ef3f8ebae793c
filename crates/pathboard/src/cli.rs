//! CLI output formatting for roadmap content

use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use pathboard_types::RoadmapSummary;

/// Format roadmap summaries as table (human) or JSON
pub fn format_roadmap_table(roadmaps: &[RoadmapSummary], json: bool, no_color: bool) -> String {
    if json {
        return serde_json::to_string_pretty(roadmaps).unwrap_or_else(|_| "[]".to_string());
    }

    if roadmaps.is_empty() {
        return "No roadmaps found.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if no_color {
        table.set_header(vec!["ID", "Title", "Difficulty", "Rating", "Enrolled"]);
    } else {
        table.set_header(vec![
            Cell::new("ID").fg(Color::Cyan),
            Cell::new("Title").fg(Color::Cyan),
            Cell::new("Difficulty").fg(Color::Cyan),
            Cell::new("Rating").fg(Color::Cyan),
            Cell::new("Enrolled").fg(Color::Cyan),
        ]);
    }

    for roadmap in roadmaps {
        let rating = format!("{:.1}", roadmap.rating);
        let enrolled = roadmap.enrolled_count.to_string();
        table.add_row(Row::from(vec![
            &roadmap.id,
            &roadmap.title,
            &roadmap.difficulty,
            &rating,
            &enrolled,
        ]));
    }

    table.to_string()
}

//! Comparison report rendering. Pure formatting; never fails.

use crate::flight::Cabin;
use crate::itinerary::Itinerary;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

/// Sentinel for columns with nothing to show.
const NOT_APPLICABLE: &str = "N/A";

/// One report row: a search mode's outcome.
pub struct ComparisonRow {
    pub mode: String,
    pub cabin: Option<Cabin>,
    pub itinerary: Option<Itinerary>,
    pub note: String,
}

impl ComparisonRow {
    pub fn new(mode: impl Into<String>, cabin: Option<Cabin>, itinerary: Option<Itinerary>) -> Self {
        let note = if itinerary.is_none() {
            "no feasible itinerary".to_string()
        } else {
            String::new()
        };
        Self {
            mode: mode.into(),
            cabin,
            itinerary,
            note,
        }
    }
}

#[derive(Tabled)]
struct DisplayRow {
    #[tabled(rename = "Mode")]
    mode: String,
    #[tabled(rename = "Cabin")]
    cabin: String,
    #[tabled(rename = "Dep")]
    dep: String,
    #[tabled(rename = "Arr")]
    arr: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Stops")]
    stops: String,
    #[tabled(rename = "Total Price")]
    total_price: String,
    #[tabled(rename = "Note")]
    note: String,
}

impl From<&ComparisonRow> for DisplayRow {
    fn from(row: &ComparisonRow) -> Self {
        let cabin = row
            .cabin
            .map_or_else(|| NOT_APPLICABLE.to_string(), |c| c.to_string());
        match &row.itinerary {
            Some(it) => DisplayRow {
                mode: row.mode.clone(),
                cabin,
                dep: it.depart_time().to_string(),
                arr: it.arrive_time().to_string(),
                duration: format_duration(it.duration_minutes()),
                stops: it.num_stops().to_string(),
                // Price only makes sense for rows that name a cabin.
                total_price: row.cabin.map_or_else(
                    || NOT_APPLICABLE.to_string(),
                    |c| it.total_price(c).to_string(),
                ),
                note: row.note.clone(),
            },
            None => DisplayRow {
                mode: row.mode.clone(),
                cabin,
                dep: NOT_APPLICABLE.to_string(),
                arr: NOT_APPLICABLE.to_string(),
                duration: NOT_APPLICABLE.to_string(),
                stops: NOT_APPLICABLE.to_string(),
                total_price: NOT_APPLICABLE.to_string(),
                note: row.note.clone(),
            },
        }
    }
}

fn format_duration(minutes: u16) -> String {
    format!("{}h{:02}m", minutes / 60, minutes % 60)
}

/// Render the route header and the fixed-column comparison table.
pub fn format_comparison(origin: &str, dest: &str, rows: &[ComparisonRow]) -> String {
    let display: Vec<DisplayRow> = rows.iter().map(DisplayRow::from).collect();
    let mut table = Table::new(&display);
    table.with(Style::psql());
    table.with(Alignment::left());
    format!("{} -> {}\n{}", origin, dest, table)
}

// src/data.rs
//
// Scraped records.
//
// - Section: one bookable area (a court) on one date, with its slots in page order.
// - Slot: one time window; times are None when the label could not be read.
// - Dataset: every Section of a run, date order first, page order second.
//
// Flattening to one row per (section, slot) happens only at export time.

use chrono::NaiveDate;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    pub start_hour: Option<String>,
    pub end_hour: Option<String>,
    pub reserved: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub section_name: String,
    pub date_scraped: NaiveDate,
    pub hour_slots: Vec<Slot>,
}

/// One output line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row<'a> {
    pub section_name: &'a str,
    pub date_scraped: NaiveDate,
    pub start_hour: Option<&'a str>,
    pub end_hour: Option<&'a str>,
    pub reserved: bool,
}

impl Row<'_> {
    /// Cells in `CSV_HEADERS` order. Absent times become empty cells.
    pub fn to_cells(&self) -> Vec<String> {
        vec![
            s!(self.section_name),
            self.date_scraped.format("%Y-%m-%d").to_string(),
            s!(self.start_hour.unwrap_or("")),
            s!(self.end_hour.unwrap_or("")),
            s!(if self.reserved { "True" } else { "False" }),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    pub sections: Vec<Section>,
}

impl Dataset {
    pub fn new() -> Self { Self::default() }

    pub fn extend(&mut self, sections: Vec<Section>) {
        self.sections.extend(sections);
    }

    pub fn is_empty(&self) -> bool { self.sections.is_empty() }

    pub fn slot_count(&self) -> usize {
        self.sections.iter().map(|s| s.hour_slots.len()).sum()
    }

    /// Flattened view, one row per (section, slot), in dataset order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.sections.iter().flat_map(|section| {
            section.hour_slots.iter().map(move |slot| Row {
                section_name: &section.section_name,
                date_scraped: section.date_scraped,
                start_hour: slot.start_hour.as_deref(),
                end_hour: slot.end_hour.as_deref(),
                reserved: slot.reserved,
            })
        })
    }
}

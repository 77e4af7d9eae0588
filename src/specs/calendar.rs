// src/specs/calendar.rs
//
// Calendar page → Section records. Pure; no I/O.

use chrono::NaiveDate;
use scraper::{ElementRef, Html};

use super::hours::parse_range;
use super::layout::PageLayout;
use crate::data::{Section, Slot};
use crate::error::{Result, ScrapeError};

/// Every section on a calendar page, in document order.
/// A page without sections (closed day, error page) gives an empty list.
pub fn extract_page<L: PageLayout + ?Sized>(layout: &L, html: &str, date: NaiveDate) -> Result<Vec<Section>> {
    let doc = Html::parse_document(html);
    layout
        .sections(&doc)
        .into_iter()
        .map(|section| extract_section(layout, section, date))
        .collect()
}

/// One section block → its name and slots. Every slot element yields a Slot,
/// readable or not, so counts match the page.
pub fn extract_section<L: PageLayout + ?Sized>(
    layout: &L,
    section: ElementRef<'_>,
    date: NaiveDate,
) -> Result<Section> {
    let section_name = layout
        .section_title(section)
        .ok_or_else(|| ScrapeError::Extraction(format!("section title not found on {date}")))?;

    let hour_slots = layout
        .slot_elements(section)
        .into_iter()
        .map(|el| {
            let label = layout.slot_label(el).unwrap_or_default();
            let (start_hour, end_hour) = parse_range(label.trim());
            if start_hour.is_none() {
                tracing::debug!(section = %section_name, %date, label = %label.trim(), "unreadable slot label");
            }
            Slot {
                start_hour,
                end_hour,
                reserved: layout.slot_status(el).is_reserved(),
            }
        })
        .collect();

    Ok(Section { section_name, date_scraped: date, hour_slots })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::layout::CssLayout;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn slot(start: Option<&str>, end: Option<&str>, reserved: bool) -> Slot {
        Slot { start_hour: start.map(String::from), end_hour: end.map(String::from), reserved }
    }

    #[test]
    fn court_with_available_and_booked_slot() {
        let html = r#"
            <div class="shadow rounded p-3">
              <h4 class="txt-c-primary">Court 1</h4>
              <a class="btn btn-success" href="/r/1"><span>9:00 > 10:00</span></a>
              <a class="btn btn-secondary"><span>10:00 > 11:00</span></a>
            </div>
        "#;
        let layout = CssLayout::casa_padel().unwrap();
        let sections = extract_page(&layout, html, date()).unwrap();
        assert_eq!(sections, vec![Section {
            section_name: s!("Court 1"),
            date_scraped: date(),
            hour_slots: vec![
                slot(Some("9:00"), Some("10:00"), false),
                slot(Some("10:00"), Some("11:00"), true),
            ],
        }]);
    }

    #[test]
    fn unreadable_and_unlabelled_slots_are_kept() {
        let html = r#"
            <div class="shadow rounded p-3">
              <h4 class="txt-c-primary">
                 Pista   Cristal
              </h4>
              <a class="btn btn-success"><span>Cerrado</span></a>
              <a class="btn"></a>
              <a class="btn btn-success"><span>
                 20:30 > 22:00 </span></a>
            </div>
        "#;
        let layout = CssLayout::casa_padel().unwrap();
        let sections = extract_page(&layout, html, date()).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].section_name, "Pista Cristal");
        assert_eq!(sections[0].hour_slots, vec![
            slot(None, None, false),
            slot(None, None, true),
            slot(Some("20:30"), Some("22:00"), false),
        ]);
    }

    #[test]
    fn missing_title_is_an_extraction_error() {
        let html = r#"<div class="shadow rounded p-3"><h5>Court 1</h5><a class="btn-success"><span>9:00 > 10:00</span></a></div>"#;
        let layout = CssLayout::casa_padel().unwrap();
        let err = extract_page(&layout, html, date()).unwrap_err();
        assert!(matches!(err, ScrapeError::Extraction(_)));
    }

    #[test]
    fn page_without_sections_is_empty() {
        let layout = CssLayout::casa_padel().unwrap();
        let sections = extract_page(&layout, "<html><body><p>No hay pistas</p></body></html>", date()).unwrap();
        assert!(sections.is_empty());
    }

    #[test]
    fn partial_class_match_is_not_a_section() {
        let html = r#"<div class="shadow rounded"><h4 class="txt-c-primary">Court 9</h4></div>"#;
        let layout = CssLayout::casa_padel().unwrap();
        assert!(extract_page(&layout, html, date()).unwrap().is_empty());
    }
}

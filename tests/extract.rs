// tests/extract.rs
//
// Extraction against a saved calendar page.
//
use chrono::NaiveDate;
use padel_scrape::data::Slot;
use padel_scrape::specs::{extract_page, CssLayout};

const PAGE: &str = include_str!("fixtures/casapadel_calendar.html");

fn slot(times: Option<(&str, &str)>, reserved: bool) -> Slot {
    Slot {
        start_hour: times.map(|(s, _)| s.to_string()),
        end_hour: times.map(|(_, e)| e.to_string()),
        reserved,
    }
}

#[test]
fn saved_page_yields_both_courts() {
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let layout = CssLayout::casa_padel().unwrap();
    let sections = extract_page(&layout, PAGE, date).unwrap();

    let names: Vec<&str> = sections.iter().map(|s| s.section_name.as_str()).collect();
    assert_eq!(names, vec!["Pista 1 - Cristal", "Pista 2 - Muro"]);
    assert!(sections.iter().all(|s| s.date_scraped == date));

    assert_eq!(sections[0].hour_slots, vec![
        slot(Some(("9:00", "10:00")), false),
        slot(Some(("10:00", "11:00")), true),
        slot(Some(("11:00", "12:00")), true),
        slot(Some(("12:00", "13:00")), false),
    ]);
    // navbar links sit outside the section blocks and are ignored
    assert_eq!(sections[1].hour_slots, vec![
        slot(Some(("9:00", "10:00")), true),
        slot(None, true),
        slot(Some(("20:30", "21:30")), false),
    ]);
}

#[test]
fn extraction_is_deterministic() {
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let layout = CssLayout::casa_padel().unwrap();
    assert_eq!(
        extract_page(&layout, PAGE, date).unwrap(),
        extract_page(&layout, PAGE, date).unwrap()
    );
}

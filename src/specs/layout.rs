// src/specs/layout.rs
//! Where things live in the calendar markup.
//!
//! All site-specific selectors sit behind [`PageLayout`], so a redesign of the
//! calendar page means a new layout value, not changes to extraction.

use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::normalize_ws;
use crate::error::{Result, ScrapeError};

// CasaPadel calendar (reservadeportes.com)
pub const SECTION_SELECTOR: &str = "div.shadow.rounded.p-3";
pub const TITLE_SELECTOR: &str = "h4.txt-c-primary";
pub const SLOT_SELECTOR: &str = "a";
pub const LABEL_SELECTOR: &str = "span";
pub const AVAILABLE_CLASS: &str = "btn-success";

/// Availability of one slot as read from its marker classes.
///
/// Only an explicit "available" marker counts as available; anything else,
/// including classes never seen before, is treated as reserved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotStatus {
    Available,
    Reserved,
}

impl SlotStatus {
    pub fn from_classes<'a, I>(classes: I, available_marker: &str) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        if classes.into_iter().any(|c| c == available_marker) {
            SlotStatus::Available
        } else {
            SlotStatus::Reserved
        }
    }

    pub fn is_reserved(self) -> bool {
        matches!(self, SlotStatus::Reserved)
    }
}

pub trait PageLayout {
    /// Section blocks (one per court), in document order.
    fn sections<'a>(&self, doc: &'a Html) -> Vec<ElementRef<'a>>;
    fn section_title(&self, section: ElementRef<'_>) -> Option<String>;
    /// Clickable slot elements inside a section, in document order.
    fn slot_elements<'a>(&self, section: ElementRef<'a>) -> Vec<ElementRef<'a>>;
    /// Raw text of the slot's time label, if it has one.
    fn slot_label(&self, slot: ElementRef<'_>) -> Option<String>;
    fn slot_status(&self, slot: ElementRef<'_>) -> SlotStatus;
}

/// CSS-selector driven layout.
#[derive(Clone, Debug)]
pub struct CssLayout {
    section: Selector,
    title: Selector,
    slot: Selector,
    label: Selector,
    available_class: String,
}

impl CssLayout {
    pub fn new(section: &str, title: &str, slot: &str, label: &str, available_class: &str) -> Result<Self> {
        Ok(Self {
            section: parse_selector(section)?,
            title: parse_selector(title)?,
            slot: parse_selector(slot)?,
            label: parse_selector(label)?,
            available_class: s!(available_class),
        })
    }

    /// Layout of the CasaPadel calendar page.
    pub fn casa_padel() -> Result<Self> {
        Self::new(SECTION_SELECTOR, TITLE_SELECTOR, SLOT_SELECTOR, LABEL_SELECTOR, AVAILABLE_CLASS)
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ScrapeError::InvalidParameter(format!("bad selector {css:?}: {e}")))
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>()
}

impl PageLayout for CssLayout {
    fn sections<'a>(&self, doc: &'a Html) -> Vec<ElementRef<'a>> {
        doc.select(&self.section).collect()
    }

    fn section_title(&self, section: ElementRef<'_>) -> Option<String> {
        section.select(&self.title).next().map(|t| normalize_ws(&text_of(t)))
    }

    fn slot_elements<'a>(&self, section: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        section.select(&self.slot).collect()
    }

    fn slot_label(&self, slot: ElementRef<'_>) -> Option<String> {
        slot.select(&self.label).next().map(text_of)
    }

    fn slot_status(&self, slot: ElementRef<'_>) -> SlotStatus {
        SlotStatus::from_classes(slot.value().classes(), &self.available_class)
    }
}

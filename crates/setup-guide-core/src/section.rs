use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GuideError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Steps,
    Methods,
    Finish,
}

impl Section {
    /// Keyboard and swipe navigation walk the page in this order.
    pub const ORDER: [Section; 3] = [Section::Steps, Section::Methods, Section::Finish];

    pub fn id(self) -> &'static str {
        match self {
            Section::Steps => "steps",
            Section::Methods => "methods",
            Section::Finish => "finish",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ORDER.into_iter().find(|section| section.id() == id)
    }

    pub fn index(self) -> usize {
        match self {
            Section::Steps => 0,
            Section::Methods => 1,
            Section::Finish => 2,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = GuideError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_id(value).ok_or_else(|| GuideError::UnknownSection(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavDirection {
    Up,
    Down,
}

impl FromStr for NavDirection {
    type Err = GuideError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "up" => Ok(NavDirection::Up),
            "down" => Ok(NavDirection::Down),
            other => Err(GuideError::UnknownDirection(other.to_string())),
        }
    }
}

/// Layout of one `.section` element at measurement time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn contains(&self, offset: f64, top_offset: f64) -> bool {
        let start = self.top - top_offset;
        offset >= start && offset < start + self.height
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollSnapshot {
    pub offset: f64,
    pub spans: Vec<SectionSpan>,
}

impl ScrollSnapshot {
    pub fn new(offset: f64, spans: Vec<SectionSpan>) -> Self {
        Self { offset, spans }
    }

    /// Id of the section under the scroll offset. Later sections win when
    /// spans overlap, which happens when the top offset reaches into the
    /// previous section.
    pub fn current_section_id(&self, top_offset: f64) -> Option<&str> {
        self.spans
            .iter()
            .rev()
            .find(|span| span.contains(self.offset, top_offset))
            .map(|span| span.id.as_str())
    }
}

/// Target of a keyboard or swipe step from the section currently in view.
///
/// An inferred id outside [`Section::ORDER`] behaves like a position before
/// the first section: `Down` lands on the first section and `Up` wraps to
/// the last.
pub fn step_from(current_id: Option<&str>, direction: NavDirection) -> Section {
    let current = current_id
        .unwrap_or(Section::Steps.id())
        .parse::<Section>()
        .ok()
        .map(Section::index);
    let last = Section::ORDER.len() - 1;
    let next = match (direction, current) {
        (NavDirection::Up, Some(index)) if index > 0 => index - 1,
        (NavDirection::Up, _) => last,
        (NavDirection::Down, Some(index)) if index < last => index + 1,
        (NavDirection::Down, Some(_)) => 0,
        (NavDirection::Down, None) => 0,
    };
    Section::ORDER[next]
}

/// Whether a `.nav-btn` points at `section_id`, either through a
/// `data-section` attribute or an inline `onclick="scrollToSection('id')"`.
pub fn nav_button_targets(
    data_section: Option<&str>,
    onclick: Option<&str>,
    section_id: &str,
) -> bool {
    if section_id.is_empty() {
        return false;
    }
    if data_section == Some(section_id) {
        return true;
    }
    onclick.is_some_and(|handler| handler.contains(section_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{TestResult, quickcheck};

    fn page() -> Vec<SectionSpan> {
        vec![
            SectionSpan::new("hero", 0.0, 600.0),
            SectionSpan::new("steps", 600.0, 900.0),
            SectionSpan::new("methods", 1_500.0, 1_200.0),
            SectionSpan::new("finish", 2_700.0, 700.0),
        ]
    }

    #[test]
    fn offset_inside_span_picks_that_section() {
        let snapshot = ScrollSnapshot::new(1_450.0, page());
        assert_eq!(snapshot.current_section_id(100.0), Some("methods"));
    }

    #[test]
    fn span_end_is_exclusive() {
        // methods starts at 1400 after the offset and ends at 2600.
        let snapshot = ScrollSnapshot::new(2_600.0, page());
        assert_eq!(snapshot.current_section_id(100.0), Some("finish"));
    }

    #[test]
    fn no_match_returns_none() {
        let snapshot = ScrollSnapshot::new(10_000.0, page());
        assert_eq!(snapshot.current_section_id(100.0), None);
    }

    #[test]
    fn later_section_wins_on_overlap() {
        let spans = vec![
            SectionSpan::new("steps", 0.0, 1_000.0),
            SectionSpan::new("methods", 500.0, 1_000.0),
        ];
        let snapshot = ScrollSnapshot::new(600.0, spans);
        assert_eq!(snapshot.current_section_id(100.0), Some("methods"));
    }

    #[test]
    fn every_offset_in_span_selects_it() {
        fn prop(top: u16, height: u16, delta: u16) -> TestResult {
            if height == 0 {
                return TestResult::discard();
            }
            let within = delta % height;
            let top = f64::from(top) + 100.0;
            let offset = top - 100.0 + f64::from(within);
            let spans = vec![SectionSpan::new("methods", top, f64::from(height))];
            let snapshot = ScrollSnapshot::new(offset, spans);
            TestResult::from_bool(snapshot.current_section_id(100.0) == Some("methods"))
        }
        quickcheck(prop as fn(u16, u16, u16) -> TestResult);
    }

    #[test]
    fn down_advances_and_wraps() {
        assert_eq!(step_from(Some("steps"), NavDirection::Down), Section::Methods);
        assert_eq!(step_from(Some("methods"), NavDirection::Down), Section::Finish);
        assert_eq!(step_from(Some("finish"), NavDirection::Down), Section::Steps);
    }

    #[test]
    fn up_retreats_and_wraps() {
        assert_eq!(step_from(Some("finish"), NavDirection::Up), Section::Methods);
        assert_eq!(step_from(Some("methods"), NavDirection::Up), Section::Steps);
        assert_eq!(step_from(Some("steps"), NavDirection::Up), Section::Finish);
    }

    #[test]
    fn missing_section_defaults_to_steps() {
        assert_eq!(step_from(None, NavDirection::Down), Section::Methods);
        assert_eq!(step_from(None, NavDirection::Up), Section::Finish);
    }

    #[test]
    fn foreign_section_id_starts_from_the_edges() {
        assert_eq!(step_from(Some("hero"), NavDirection::Down), Section::Steps);
        assert_eq!(step_from(Some("hero"), NavDirection::Up), Section::Finish);
    }

    #[test]
    fn nav_buttons_match_inline_handler_or_data_attribute() {
        assert!(nav_button_targets(
            None,
            Some("scrollToSection('methods')"),
            "methods"
        ));
        assert!(nav_button_targets(Some("finish"), None, "finish"));
        assert!(!nav_button_targets(
            None,
            Some("scrollToSection('steps')"),
            "finish"
        ));
        assert!(!nav_button_targets(
            None,
            Some("scrollToSection('steps')"),
            ""
        ));
    }

    #[test]
    fn parses_ids_and_directions() {
        assert_eq!("finish".parse::<Section>(), Ok(Section::Finish));
        assert_eq!(
            "intro".parse::<Section>(),
            Err(GuideError::UnknownSection("intro".to_string()))
        );
        assert_eq!("up".parse::<NavDirection>(), Ok(NavDirection::Up));
        assert!("sideways".parse::<NavDirection>().is_err());
    }
}

//! Scroll and intersection state behind the floating navigation, the progress
//! bar and the reveal-on-scroll wrapper. The browser side only feeds offsets
//! and element bounds in; every decision is made here.

pub const NAV_REVEAL_OFFSET: f64 = 100.0;
pub const PROGRESS_REVEAL_OFFSET: f64 = 300.0;

pub fn nav_visible(scroll_y: f64) -> bool {
    scroll_y > NAV_REVEAL_OFFSET
}

pub fn progress_visible(scroll_y: f64) -> bool {
    scroll_y > PROGRESS_REVEAL_OFFSET
}

/// Fraction of the page scrolled, clamped to `[0, 1]`.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let max_scroll = document_height - viewport_height;
    if max_scroll <= 0.0 {
        return 0.0;
    }
    (scroll_y / max_scroll).clamp(0.0, 1.0)
}

/// Viewport-relative bounds of a page section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub top: f64,
    pub bottom: f64,
}

/// The section under the line one third down the viewport. When sections
/// overlap that line the later one wins.
pub fn active_section<'a, I>(sections: I, viewport_height: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = SectionBounds<'a>>,
{
    let marker = viewport_height / 3.0;
    sections
        .into_iter()
        .filter(|s| s.top <= marker && s.bottom >= marker)
        .last()
        .map(|s| s.id)
}

/// Visible/hidden state of an element that fades in when scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    once: bool,
    visible: bool,
}

impl Reveal {
    pub fn new(once: bool) -> Self {
        Self {
            once,
            visible: false,
        }
    }

    pub fn observe(&mut self, intersecting: bool) {
        if self.once && self.visible {
            return;
        }
        self.visible = intersecting;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_offsets_are_exclusive() {
        assert!(!nav_visible(100.0));
        assert!(nav_visible(100.5));
        assert!(!progress_visible(300.0));
        assert!(progress_visible(301.0));
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(5000.0, 3000.0, 1000.0), 1.0);
        // page shorter than the viewport
        assert_eq!(scroll_progress(10.0, 500.0, 1000.0), 0.0);
    }

    #[test]
    fn test_active_section() {
        let sections = [
            SectionBounds {
                id: "home",
                top: -900.0,
                bottom: -100.0,
            },
            SectionBounds {
                id: "journey",
                top: -100.0,
                bottom: 700.0,
            },
            SectionBounds {
                id: "projects",
                top: 700.0,
                bottom: 1500.0,
            },
        ];
        assert_eq!(active_section(sections, 900.0), Some("journey"));
        assert_eq!(active_section(sections[2..].iter().copied(), 900.0), None);
        assert_eq!(active_section(Vec::new(), 900.0), None);
    }

    #[test]
    fn test_active_section_prefers_later_on_overlap() {
        let sections = [
            SectionBounds {
                id: "skills",
                top: 0.0,
                bottom: 300.0,
            },
            SectionBounds {
                id: "contact",
                top: 300.0,
                bottom: 900.0,
            },
        ];
        assert_eq!(active_section(sections, 900.0), Some("contact"));
    }

    #[test]
    fn test_reveal_once_stays_visible() {
        let mut reveal = Reveal::new(true);
        assert!(!reveal.is_visible());
        reveal.observe(true);
        reveal.observe(false);
        assert!(reveal.is_visible());
    }

    #[test]
    fn test_reveal_repeating_follows_intersection() {
        let mut reveal = Reveal::new(false);
        reveal.observe(true);
        assert!(reveal.is_visible());
        reveal.observe(false);
        assert!(!reveal.is_visible());
    }
}

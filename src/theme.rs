/// Display mode shared by every section. Lives for the session only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Pick the class (or any value) for the current mode.
    pub fn pick<T>(self, dark: T, light: T) -> T {
        match self {
            Theme::Dark => dark,
            Theme::Light => light,
        }
    }

    pub fn toggle_label(self) -> &'static str {
        self.pick("Switch to light mode", "Switch to dark mode")
    }

    pub fn text_class(self) -> &'static str {
        self.pick("text-white", "text-gray-900")
    }

    pub fn background_class(self) -> &'static str {
        self.pick(
            "bg-gradient-to-b from-[#001f3f] to-black",
            "bg-gradient-to-b from-white to-[#ffdfa6]",
        )
    }

    pub fn card_class(self) -> &'static str {
        self.pick("bg-gray-900/50", "bg-white/50")
    }

    pub fn muted_class(self) -> &'static str {
        self.pick("text-gray-400", "text-gray-600")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_dark() {
        assert!(Theme::default().is_dark());
    }

    #[test]
    fn test_toggle_flips_and_returns() {
        let theme = Theme::default().toggle();
        assert_eq!(theme, Theme::Light);
        assert_eq!(theme.toggle_label(), "Switch to dark mode");
        assert_eq!(theme.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light mode");
    }

    #[test]
    fn test_pick() {
        assert_eq!(Theme::Dark.pick(1, 2), 1);
        assert_eq!(Theme::Light.text_class(), "text-gray-900");
    }
}

mod projects;
mod skills;
mod timeline;

pub use projects::{all_technologies, Project, PROJECTS};
pub use skills::{Proficiency, Skill, SkillCategory, SKILLS};
pub use timeline::{timeline_side, Side, TimelineEvent, TIMELINE};

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub caption: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub roles: &'static [&'static str],
    pub photo: &'static str,
    pub cv: &'static str,
    pub email: &'static str,
    pub github: SocialLink,
    pub linkedin: SocialLink,
}

pub const PROFILE: Profile = Profile {
    name: "Tariq Amarneh",
    headline: "Web Developer & AI Enthusiast",
    roles: &["Web Developer", "Java And Python Expert", "AI Enthusiast"],
    photo: "/images/my_photo.png",
    cv: "/Tariq_Naser.pdf",
    email: "tariqs.naser@gmail.com",
    github: SocialLink {
        label: "GitHub",
        caption: "Check out my projects",
        href: "https://github.com/tariqamarneh",
    },
    linkedin: SocialLink {
        label: "LinkedIn",
        caption: "Connect professionally",
        href: "https://www.linkedin.com/in/tariq-naser/",
    },
};

/// An entry in the floating navigation bar. `section` is the DOM id of the
/// section the entry scrolls to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.section)
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Home",
        section: "home",
    },
    NavItem {
        label: "Journey",
        section: "journey",
    },
    NavItem {
        label: "Projects",
        section: "projects",
    },
    NavItem {
        label: "Skills",
        section: "skills",
    },
    NavItem {
        label: "Contact",
        section: "contact",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_items_follow_page_order() {
        let sections = NAV_ITEMS.iter().map(|n| n.section).collect::<Vec<_>>();
        assert_eq!(
            sections,
            vec!["home", "journey", "projects", "skills", "contact"]
        );
        assert_eq!(NAV_ITEMS[3].href(), "#skills");
    }

    #[test]
    fn test_build_year_is_plausible() {
        assert!(BUILD_YEAR >= 2024);
    }
}

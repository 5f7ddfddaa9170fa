//! Client-side filtering for the skills and projects sections.
//!
//! Filters are pure derived state: they borrow the literal lists and never
//! mutate them.

use crate::content::{Project, Skill, SkillCategory};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(SkillCategory),
}

impl CategoryFilter {
    /// Buttons shown above the skills grid, in display order.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(SkillCategory::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    pub fn matches(&self, category: SkillCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    Stats,
}

impl ViewMode {
    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::Stats,
            ViewMode::Stats => ViewMode::Grid,
        }
    }
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillFilter {
    pub category: CategoryFilter,
    pub query: String,
}

impl SkillFilter {
    pub fn apply<'a>(&self, skills: &'a [Skill]) -> Vec<&'a Skill> {
        let query = self.query.trim().to_lowercase();
        skills
            .iter()
            .filter(|s| self.category.matches(s.category))
            .filter(|s| {
                contains_ignore_case(s.name, &query)
                    || s.description
                        .is_some_and(|d| contains_ignore_case(d, &query))
            })
            .collect()
    }
}

/// Number of skills per category, one entry per category in display order.
pub fn category_counts(skills: &[&Skill]) -> Vec<(SkillCategory, usize)> {
    SkillCategory::ALL
        .into_iter()
        .map(|c| (c, skills.iter().filter(|s| s.category == c).count()))
        .collect()
}

/// Percentage of `total` that `count` represents, `0.0` for an empty list.
pub fn share(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub technology: Option<String>,
    pub query: String,
}

impl ProjectFilter {
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        let query = self.query.trim().to_lowercase();
        projects
            .iter()
            .filter(|p| self.technology.as_deref().map_or(true, |t| p.uses(t)))
            .filter(|p| {
                contains_ignore_case(p.title, &query) || contains_ignore_case(p.description, &query)
            })
            .collect()
    }

    /// Selecting the active tag again clears it.
    pub fn toggle_technology(&mut self, technology: &str) {
        if self
            .technology
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case(technology))
        {
            self.technology = None;
        } else {
            self.technology = Some(technology.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{PROJECTS, SKILLS};

    fn names(skills: &[&Skill]) -> Vec<&'static str> {
        skills.iter().map(|s| s.name).collect()
    }

    #[test]
    fn test_all_with_empty_query_keeps_everything() {
        let filter = SkillFilter::default();
        assert_eq!(filter.apply(SKILLS).len(), SKILLS.len());
    }

    #[test]
    fn test_category_filter() {
        let filter = SkillFilter {
            category: CategoryFilter::Only(SkillCategory::Database),
            query: String::new(),
        };
        assert_eq!(
            names(&filter.apply(SKILLS)),
            vec!["MongoDB", "Postgres", "MySQL"]
        );
    }

    #[test]
    fn test_query_matches_name_or_description_ignoring_case() {
        let filter = SkillFilter {
            category: CategoryFilter::All,
            query: "SPRING".to_string(),
        };
        // "Spring Boot" by name, "Java" by its description
        assert_eq!(names(&filter.apply(SKILLS)), vec!["Java", "Spring Boot"]);

        let filter = SkillFilter {
            category: CategoryFilter::All,
            query: "containerization".to_string(),
        };
        assert_eq!(names(&filter.apply(SKILLS)), vec!["Docker"]);
    }

    #[test]
    fn test_category_with_no_matches_is_empty() {
        let filter = SkillFilter {
            category: CategoryFilter::Only(SkillCategory::Frontend),
            query: "docker".to_string(),
        };
        assert!(filter.apply(SKILLS).is_empty());

        let only_backend = SKILLS
            .iter()
            .copied()
            .filter(|s| s.category == SkillCategory::Backend)
            .collect::<Vec<_>>();
        let filter = SkillFilter {
            category: CategoryFilter::Only(SkillCategory::Devops),
            query: String::new(),
        };
        assert!(filter.apply(&only_backend).is_empty());
    }

    #[test]
    fn test_category_counts_and_share() {
        let all = SkillFilter::default().apply(SKILLS);
        let counts = category_counts(&all);
        assert_eq!(
            counts,
            vec![
                (SkillCategory::Frontend, 2),
                (SkillCategory::Backend, 4),
                (SkillCategory::Database, 3),
                (SkillCategory::Devops, 3),
            ]
        );
        assert_eq!(share(3, 12), 25.0);
        assert_eq!(share(0, 0), 0.0);
        assert!(category_counts(&[]).iter().all(|(_, n)| *n == 0));
    }

    #[test]
    fn test_options_and_view_mode() {
        let labels = CategoryFilter::options()
            .map(|o| o.label())
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec!["All", "Frontend", "Backend", "Database", "Devops"]
        );
        assert_eq!(ViewMode::Grid.toggle(), ViewMode::Stats);
        assert_eq!(ViewMode::Stats.toggle(), ViewMode::Grid);
    }

    #[test]
    fn test_project_filter() {
        let mut filter = ProjectFilter::default();
        assert_eq!(filter.apply(PROJECTS).len(), PROJECTS.len());

        filter.toggle_technology("mongodb");
        let titles = filter
            .apply(PROJECTS)
            .iter()
            .map(|p| p.title)
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["DocViz", "AccesibilityHelper"]);

        filter.query = "voice".to_string();
        assert_eq!(filter.apply(PROJECTS).len(), 1);

        filter.query = "spring".to_string();
        assert!(filter.apply(PROJECTS).is_empty());

        filter.toggle_technology("MongoDB");
        assert_eq!(filter.technology, None);
        assert_eq!(filter.apply(PROJECTS).len(), 1);
    }
}

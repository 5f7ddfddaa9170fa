use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Devops,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Devops,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Database => "Database",
            SkillCategory::Devops => "Devops",
        }
    }

    /// Icon class shown next to the category.
    pub fn icon(&self) -> &'static str {
        match self {
            SkillCategory::Frontend | SkillCategory::Backend => "icon-code",
            SkillCategory::Database => "icon-database",
            SkillCategory::Devops => "icon-cloud",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proficiency {
    Intermediate,
    Expert,
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Proficiency::Intermediate => f.write_str("Intermediate"),
            Proficiency::Expert => f.write_str("Expert"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: Proficiency,
    pub category: SkillCategory,
    pub icon: &'static str,
    pub description: Option<&'static str>,
    pub year_started: Option<i32>,
    pub color: Option<&'static str>,
}

impl Skill {
    pub fn years_of_experience(&self, current_year: i32) -> Option<i32> {
        self.year_started
            .map(|started| (current_year - started).max(0))
    }

    /// Experience badge printed on the card, always visible.
    pub fn experience_label(&self, current_year: i32) -> Option<String> {
        self.years_of_experience(current_year)
            .map(|years| format!("{years}+ years of experience"))
    }
}

macro_rules! remote_icon {
    ($file:literal) => {
        concat!(
            "https://raw.githubusercontent.com/danielcranney/readme-generator/main/public/icons/skills/",
            $file
        )
    };
}

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "Java",
        level: Proficiency::Expert,
        category: SkillCategory::Backend,
        icon: remote_icon!("java-colored.svg"),
        description: Some("Enterprise application development, Spring ecosystem"),
        year_started: Some(2024),
        color: Some("#f89820"),
    },
    Skill {
        name: "Spring Boot",
        level: Proficiency::Intermediate,
        category: SkillCategory::Backend,
        icon: "/skills_logo/spring-boot-logo.svg",
        description: Some("Enterprise application development, Spring ecosystem"),
        year_started: Some(2024),
        color: Some("#6db33f"),
    },
    Skill {
        name: "Python",
        level: Proficiency::Expert,
        category: SkillCategory::Backend,
        icon: remote_icon!("python-colored.svg"),
        description: Some("Web application development, machine learning"),
        year_started: Some(2020),
        color: Some("#3776ab"),
    },
    Skill {
        name: "FastAPI",
        level: Proficiency::Expert,
        category: SkillCategory::Backend,
        icon: remote_icon!("fastapi-colored.svg"),
        description: Some("Backend web application, clean code"),
        year_started: Some(2022),
        color: Some("#009688"),
    },
    Skill {
        name: "MongoDB",
        level: Proficiency::Expert,
        category: SkillCategory::Database,
        icon: remote_icon!("mongodb-colored.svg"),
        description: Some("NoSQL database design and optimization"),
        year_started: Some(2021),
        color: Some("#47A248"),
    },
    Skill {
        name: "Postgres",
        level: Proficiency::Expert,
        category: SkillCategory::Database,
        icon: remote_icon!("postgresql-colored.svg"),
        description: Some("Relational database management and optimization"),
        year_started: Some(2023),
        color: Some("#336791"),
    },
    Skill {
        name: "MySQL",
        level: Proficiency::Expert,
        category: SkillCategory::Database,
        icon: remote_icon!("mysql-colored.svg"),
        description: Some("Database design and performance tuning"),
        year_started: Some(2023),
        color: Some("#4479A1"),
    },
    Skill {
        name: "Next.js",
        level: Proficiency::Intermediate,
        category: SkillCategory::Frontend,
        icon: "/skills_logo/nextjs_icon_dark.svg",
        description: Some("Modern frontend development with React"),
        year_started: Some(2023),
        color: Some("#000000"),
    },
    Skill {
        name: "Tailwind CSS",
        level: Proficiency::Intermediate,
        category: SkillCategory::Frontend,
        icon: remote_icon!("tailwindcss-colored.svg"),
        description: Some("Utility-first CSS framework"),
        year_started: Some(2023),
        color: Some("#38B2AC"),
    },
    Skill {
        name: "Git",
        level: Proficiency::Expert,
        category: SkillCategory::Devops,
        icon: remote_icon!("git-colored.svg"),
        description: Some("Version control and collaboration"),
        year_started: Some(2019),
        color: Some("#F05032"),
    },
    Skill {
        name: "Docker",
        level: Proficiency::Expert,
        category: SkillCategory::Devops,
        icon: remote_icon!("docker-colored.svg"),
        description: Some("Containerization and orchestration"),
        year_started: Some(2019),
        color: Some("#2496ED"),
    },
    Skill {
        name: "Azure",
        level: Proficiency::Expert,
        category: SkillCategory::Devops,
        icon: "/skills_logo/azure-icon.svg",
        description: Some("Cloud services and infrastructure"),
        year_started: Some(2023),
        color: Some("#0089D6"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_of_experience() {
        let python = SKILLS.iter().find(|s| s.name == "Python").unwrap();
        assert_eq!(python.years_of_experience(2025), Some(5));
        // a start year in the future never goes negative
        assert_eq!(python.years_of_experience(2019), Some(0));

        let mut no_start = *python;
        no_start.year_started = None;
        assert_eq!(no_start.years_of_experience(2025), None);
    }

    #[test]
    fn test_every_card_carries_description_and_experience() {
        for skill in SKILLS {
            assert!(skill.description.is_some(), "{}", skill.name);
            assert!(skill.experience_label(2025).is_some(), "{}", skill.name);
        }
        let python = SKILLS.iter().find(|s| s.name == "Python").unwrap();
        assert_eq!(
            python.experience_label(2025).as_deref(),
            Some("5+ years of experience")
        );
    }

    #[test]
    fn test_remote_icons_use_shared_base() {
        let java = &SKILLS[0];
        assert!(java.icon.starts_with("https://raw.githubusercontent.com/"));
        assert!(java.icon.ends_with("java-colored.svg"));
    }

    #[test]
    fn test_every_category_has_skills() {
        for category in SkillCategory::ALL {
            assert!(SKILLS.iter().any(|s| s.category == category), "{category}");
        }
    }
}

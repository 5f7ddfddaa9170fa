#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub link: &'static str,
}

impl Project {
    pub fn is_github_link(&self) -> bool {
        self.link.contains("github.com")
    }

    pub fn link_label(&self) -> &'static str {
        if self.is_github_link() {
            "View on GitHub"
        } else {
            "Visit Project"
        }
    }

    pub fn uses(&self, technology: &str) -> bool {
        self.technologies
            .iter()
            .any(|t| t.eq_ignore_ascii_case(technology))
    }
}

/// Distinct technology tags across `projects`, in first-seen order.
pub fn all_technologies(projects: &[Project]) -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for tech in projects.iter().flat_map(|p| p.technologies.iter()) {
        if !seen.iter().any(|s| s.eq_ignore_ascii_case(tech)) {
            seen.push(tech);
        }
    }
    seen
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Hogwarts artifacts",
        description: "Back-end application designed to demonstrate typical use cases and best practices in Spring Boot development",
        technologies: &["Java", "Spring Boot", "CI/CD", "Azure"],
        image: "/images/hogwarts.png",
        link: "https://github.com/tariqamarneh/hogwarts-artifacts-online",
    },
    Project {
        title: "DocViz",
        description: "A web app that summarizes documents and extract key phrases and insights using the power of AI.",
        technologies: &["Python", "Next.js", "FastAPI", "MongoDB"],
        image: "/images/docviz.png",
        link: "https://docviz.online",
    },
    Project {
        title: "AiRefMe",
        description: "A web app with three chatbots, normal chat, chat with your document, and weather API chatbot",
        technologies: &["Python", "selenium", "FastAPI", "Langchain", "JavaScript"],
        image: "/images/airefme.png",
        link: "https://github.com/tariqamarneh/AI_Reference_Application",
    },
    Project {
        title: "AccesibilityHelper",
        description: "Application that will add a little a button to any website you visit, that will perform any action you want, eather by writing it or by voice command.",
        technologies: &["Python", "MongoDB", "FastAPI", "Langchain"],
        image: "/images/accesHelp.png",
        link: "https://github.com/tariqamarneh/AccesibilityHelper",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_labels() {
        assert_eq!(PROJECTS[0].link_label(), "View on GitHub");
        assert!(!PROJECTS[1].is_github_link());
        assert_eq!(PROJECTS[1].link_label(), "Visit Project");
    }

    #[test]
    fn test_all_technologies_dedups_in_order() {
        let techs = all_technologies(PROJECTS);
        assert_eq!(&techs[..4], &["Java", "Spring Boot", "CI/CD", "Azure"]);
        assert_eq!(techs.iter().filter(|t| **t == "Python").count(), 1);
        assert_eq!(techs.len(), 11);
    }

    #[test]
    fn test_uses_ignores_case() {
        assert!(PROJECTS[2].uses("Selenium"));
        assert!(!PROJECTS[0].uses("Python"));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEvent {
    pub date: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Events alternate sides down the timeline, starting on the left.
pub fn timeline_side(index: usize) -> Side {
    if index % 2 == 0 {
        Side::Left
    } else {
        Side::Right
    }
}

// Newest first
pub const TIMELINE: &[TimelineEvent] = &[
    TimelineEvent {
        date: "2024-10",
        title: "SDE I (L4) at Amazon",
        description: "Working as a Software Development Engineer at Amazon, building and optimizing scalable applications that impact millions of users globally.",
        icon: "/journey_logo/amazon.svg",
    },
    TimelineEvent {
        date: "2024-07",
        title: "Software engineer at ProgressSoft",
        description: "Associate at ProgressSoft as Java Software Engineer, working on web application projects using Spring Boot.",
        icon: "/journey_logo/progressoft.svg",
    },
    TimelineEvent {
        date: "2024-03",
        title: "Microsoft Certified",
        description: "Achieved the Microsoft Certified: Azure AI fundamentals certification, demonstrating proficiency in AI and machine learning concepts.",
        icon: "/journey_logo/azure-ai-fundamentals.svg",
    },
    TimelineEvent {
        date: "2023-09",
        title: "Internship at PwC",
        description: "Interned at PwC as Generative AI Engineer, working on AI projects and developing web applications.",
        icon: "/journey_logo/pwc.svg",
    },
    TimelineEvent {
        date: "2022-07",
        title: "Internship at Arab Bank",
        description: "Gained practical experience working with data and analytics, and building machine learning models.",
        icon: "/journey_logo/arabbank.svg",
    },
    TimelineEvent {
        date: "2021-05",
        title: "Google Professional Certified",
        description: "Achieved the Google Professional Data Analytics Certificate, mastering the foundations of data analytics, data visualization, and data quality.",
        icon: "https://images.credly.com/size/340x340/images/7abb071f-772a-46fe-a899-5a11699a62dc/GCC_badge_DA_1000x1000.png",
    },
    TimelineEvent {
        date: "2019-09",
        title: "University",
        description: "Embarked on a transformative journey in Data Science and Artificial Intelligence at Princess Sumaya University for Technology, culminating in a successful graduation in 2023 with a commendable 3.23 GPA.",
        icon: "/journey_logo/psut.svg",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_is_newest_first() {
        let dates = TIMELINE.iter().map(|e| e.date).collect::<Vec<_>>();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_dates_are_unique() {
        // the journey section keys hover state by date
        let mut dates = TIMELINE.iter().map(|e| e.date).collect::<Vec<_>>();
        dates.dedup();
        assert_eq!(dates.len(), TIMELINE.len());
    }

    #[test]
    fn test_sides_alternate() {
        assert_eq!(timeline_side(0), Side::Left);
        assert_eq!(timeline_side(1), Side::Right);
        assert_eq!(timeline_side(6), Side::Left);
    }
}

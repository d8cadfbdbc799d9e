//! Landing-page subject catalog.

use serde::{Deserialize, Serialize};

/// A study topic inside a subject. `linked` topics open the circle tutorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: &'static str,
    pub description: &'static str,
    pub linked: bool,
}

/// One subject circle on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
    pub topics: [Topic; 4],
}

impl Subject {
    #[must_use]
    pub fn find(key: &str) -> Option<&'static Subject> {
        SUBJECTS.iter().find(|subject| subject.key == key)
    }
}

/// The fixed subject catalog shown on the landing page.
pub const SUBJECTS: [Subject; 3] = [
    Subject {
        key: "physics",
        name: "Physics",
        icon: "\u{269b}\u{fe0f}",
        accent: "#3b82f6",
        topics: [
            Topic {
                name: "Force & Motion",
                description: "Explore the basic laws governing how objects move",
                linked: false,
            },
            Topic {
                name: "Sound & Light",
                description: "Understand how sound and light travel",
                linked: false,
            },
            Topic {
                name: "Electricity & Magnetism",
                description: "Master the relationship between current and fields",
                linked: false,
            },
            Topic {
                name: "Energy Conversion",
                description: "Learn how energy changes from one form to another",
                linked: false,
            },
        ],
    },
    Subject {
        key: "chemistry",
        name: "Chemistry",
        icon: "\u{1f9ea}",
        accent: "#10b981",
        topics: [
            Topic {
                name: "Structure of Matter",
                description: "Get to know atoms and molecules",
                linked: false,
            },
            Topic {
                name: "Chemical Reactions",
                description: "Master the basic reaction types",
                linked: false,
            },
            Topic {
                name: "Acids, Bases & Salts",
                description: "Learn the properties of common compounds",
                linked: false,
            },
            Topic {
                name: "Lab Work",
                description: "Carry out experiments safely",
                linked: false,
            },
        ],
    },
    Subject {
        key: "mathematics",
        name: "Mathematics",
        icon: "\u{1f4d0}",
        accent: "#8b5cf6",
        topics: [
            Topic {
                name: "Algebra Basics",
                description: "Solve equations and inequalities",
                linked: false,
            },
            Topic {
                name: "Geometry",
                description: "Understand the core theorems of plane geometry",
                linked: true,
            },
            Topic {
                name: "Functions",
                description: "Study linear and quadratic functions",
                linked: false,
            },
            Topic {
                name: "Statistics",
                description: "Master basic data analysis",
                linked: false,
            },
        ],
    },
];

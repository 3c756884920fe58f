use serde::Serialize;

/// A sample card shown in the demo gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoProject {
    pub id: &'static str,
    pub title: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub author: &'static str,
}

const DEMO_PROJECTS: [DemoProject; 6] = [
    DemoProject {
        id: "1",
        title: "Vercelerate Reimagined",
        url: "https://vercel.com",
        description: "A modern take on the learning platform with enhanced gamification features and AI-powered project suggestions.",
        author: "Sarah Chen",
    },
    DemoProject {
        id: "2",
        title: "DevQuest Platform",
        url: "https://github.com",
        description: "Interactive coding challenges with real-time feedback and community-driven content.",
        author: "Alex Rodriguez",
    },
    DemoProject {
        id: "3",
        title: "BuildSpace Clone",
        url: "https://nextjs.org",
        description: "A comprehensive learning environment for web3 developers with integrated deployment tools.",
        author: "Jamie Kim",
    },
    DemoProject {
        id: "4",
        title: "CodeCraft Academy",
        url: "https://tailwindcss.com",
        description: "Step-by-step tutorials for building full-stack applications with modern frameworks.",
        author: "Mike Johnson",
    },
    DemoProject {
        id: "5",
        title: "WebDev Bootcamp",
        url: "https://react.dev",
        description: "Intensive learning program with mentorship and project-based curriculum.",
        author: "Lisa Wang",
    },
    DemoProject {
        id: "6",
        title: "FullStack Journey",
        url: "https://supabase.com",
        description: "End-to-end development course covering frontend, backend, and deployment strategies.",
        author: "David Brown",
    },
];

pub fn demo_projects() -> &'static [DemoProject] {
    &DEMO_PROJECTS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_projects_unique_ids() {
        let ids: HashSet<&str> = demo_projects().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), demo_projects().len());
    }

    #[test]
    fn test_demo_projects_have_urls() {
        assert!(demo_projects().iter().all(|p| p.url.starts_with("https://")));
    }
}

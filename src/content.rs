#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub bio: &'static str,
}

impl PersonalInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub github: &'static str,
    pub demo: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectLink {
    Code(&'static str),
    Demo(&'static str),
}

impl ProjectLink {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectLink::Code(_) => "Code",
            ProjectLink::Demo(_) => "Demo",
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            ProjectLink::Code(href) | ProjectLink::Demo(href) => href,
        }
    }
}

impl Project {
    // links without a URL are skipped
    pub fn links(&self) -> Vec<ProjectLink> {
        [ProjectLink::Code(self.github), ProjectLink::Demo(self.demo)]
            .into_iter()
            .filter(|link| !link.href().is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub credential_id: &'static str,
}

impl Certification {
    pub fn issued_by(&self) -> String {
        match (self.issuer.is_empty(), self.date.is_empty()) {
            (false, false) => format!("{} • {}", self.issuer, self.date),
            (false, true) => self.issuer.to_string(),
            (true, false) => self.date.to_string(),
            (true, true) => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

impl NavItem {
    pub fn section_id(&self) -> &'static str {
        self.href.trim_start_matches('#')
    }
}

pub const PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Your Name",
    title: "Full Stack Developer",
    email: "your.email@example.com",
    linkedin: "https://linkedin.com/in/yourprofile",
    github: "https://github.com/yourusername",
    bio: "Passionate developer with expertise in modern web technologies. I love creating innovative solutions and bringing ideas to life through code.",
};

pub const ABOUT: &str = "I'm a passionate developer who loves creating digital experiences that make a difference. With a strong foundation in both frontend and backend technologies, I enjoy tackling complex problems and turning ideas into reality.";

pub static SKILLS: &[Skill] = &[
    Skill { name: "JavaScript" },
    Skill { name: "React" },
    Skill { name: "Node.js" },
    Skill { name: "Python" },
    Skill { name: "TypeScript" },
    Skill { name: "Next.js" },
    Skill { name: "MongoDB" },
    Skill { name: "PostgreSQL" },
    Skill { name: "AWS" },
    Skill { name: "Docker" },
    Skill { name: "Git" },
    Skill { name: "Tailwind CSS" },
];

pub static PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        description: "A full-stack e-commerce solution with React frontend and Node.js backend",
        technologies: &["React", "Node.js", "MongoDB", "Stripe"],
        github: "https://github.com/yourusername/ecommerce",
        demo: "https://your-ecommerce-demo.com",
        image: "/img/projects/ecommerce.svg",
    },
    Project {
        title: "Task Management App",
        description: "A collaborative task management application with real-time updates",
        technologies: &["React", "Socket.io", "Express", "PostgreSQL"],
        github: "https://github.com/yourusername/taskapp",
        demo: "https://your-taskapp-demo.com",
        image: "/img/projects/taskapp.svg",
    },
    Project {
        title: "Weather Dashboard",
        description: "A responsive weather dashboard with location-based forecasts",
        technologies: &["JavaScript", "API Integration", "Chart.js"],
        github: "https://github.com/yourusername/weather",
        demo: "https://your-weather-demo.com",
        image: "/img/projects/weather.svg",
    },
];

pub static CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "AWS Certified Developer",
        issuer: "Amazon Web Services",
        date: "2024",
        credential_id: "ABC123456",
    },
    Certification {
        name: "React Developer Certification",
        issuer: "Meta",
        date: "2023",
        credential_id: "DEF789012",
    },
];

pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "Hackathon Winner",
        description: "First place in Tech Innovation Hackathon 2024",
        date: "2024",
    },
    Achievement {
        title: "Open Source Contributor",
        description: "Contributed to 15+ open source projects with 500+ stars",
        date: "2023-2024",
    },
];

pub static NAVIGATION: &[NavItem] = &[
    NavItem {
        name: "About",
        href: "#about",
    },
    NavItem {
        name: "Skills",
        href: "#skills",
    },
    NavItem {
        name: "Projects",
        href: "#projects",
    },
    NavItem {
        name: "Certifications",
        href: "#certifications",
    },
    NavItem {
        name: "Achievements",
        href: "#achievements",
    },
    NavItem {
        name: "Contact",
        href: "#contact",
    },
];

//! Portfolio content configuration.
//!
//! Uses `figment` for layered configuration: built-in defaults -> user
//! config file -> `portfolio.toml` in the working directory -> environment.
//! The interpreter core only depends on the *shape* of this data
//! (enumerable lists addressable by 1-based index, key/value sections),
//! never on its content.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// A portfolio project with an external link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub link: String,
}

/// One work experience entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

/// One education entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub description: String,
}

/// Skill groups shown by the `skills` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub frontend: Vec<String>,
    #[serde(default)]
    pub backend: Vec<String>,
    #[serde(default)]
    pub devops: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub practices: Vec<String>,
}

/// Social and contact endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    pub website: String,
}

/// A single enumerable social link: label plus URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: String,
}

/// Biography section shown by the `about` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub greeting: String,
    pub description: String,
    #[serde(default)]
    pub details: Vec<String>,
}

/// Top-level portfolio content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    pub username: String,
    pub hostname: String,
    pub title: String,
    /// ASCII art banner, one string per row.
    #[serde(default)]
    pub ascii_banner: Vec<String>,
    pub about: About,
    pub social: Social,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub skills: Skills,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
}

impl PortfolioConfig {
    /// The prompt string shown before every command, e.g.
    /// `visitor@terminal.chris.dev:~$`.
    pub fn prompt(&self) -> String {
        format!("{}@{}:~$", self.username, self.hostname)
    }

    /// Social links in enumeration order, addressable by 1-based index
    /// via `social go <n>`.
    pub fn social_links(&self) -> Vec<SocialLink> {
        vec![
            SocialLink {
                label: "GitHub",
                url: self.social.github.clone(),
            },
            SocialLink {
                label: "LinkedIn",
                url: self.social.linkedin.clone(),
            },
            SocialLink {
                label: "Twitter",
                url: self.social.twitter.clone(),
            },
            SocialLink {
                label: "Website",
                url: self.social.website.clone(),
            },
        ]
    }
}

/// Load the portfolio configuration with layering:
/// defaults -> user config -> `portfolio.toml` in cwd -> `TERMFOLIO_*` env.
///
/// An explicit path replaces the file layers and must exist.
pub fn load_config(explicit: Option<&Path>) -> Result<PortfolioConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(PortfolioConfig::default()));

    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        figment = figment.merge(Toml::file(path));
    } else {
        if let Some(dirs) = directories::ProjectDirs::from("dev", "termfolio", "termfolio") {
            let user_config = dirs.config_dir().join("portfolio.toml");
            if user_config.exists() {
                figment = figment.merge(Toml::file(&user_config));
            }
        }
        let local = Path::new("portfolio.toml");
        if local.exists() {
            figment = figment.merge(Toml::file(local));
        }
    }

    // Environment variables (TERMFOLIO_USERNAME, TERMFOLIO_SOCIAL__GITHUB, ...)
    figment = figment.merge(Env::prefixed("TERMFOLIO_").split("__"));

    figment.extract().map_err(|err| ConfigError::ParseError {
        message: err.to_string(),
    })
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            username: "visitor".to_string(),
            hostname: "terminal.chris.dev".to_string(),
            title: "Terminal".to_string(),
            ascii_banner: vec![
                r"  ██████╗██╗  ██╗██████╗ ██╗███████╗    ███╗   ███╗ █████╗ ███████╗██╗  ██╗███████╗██╗   ██╗".to_string(),
                r" ██╔════╝██║  ██║██╔══██╗██║██╔════╝    ████╗ ████║██╔══██╗██╔════╝██║ ██╔╝██╔════╝╚██╗ ██╔╝".to_string(),
                r" ██║     ███████║██████╔╝██║███████╗    ██╔████╔██║███████║███████╗█████╔╝ █████╗   ╚████╔╝ ".to_string(),
                r" ██║     ██╔══██║██╔══██╗██║╚════██║    ██║╚██╔╝██║██╔══██║╚════██║██╔═██╗ ██╔══╝    ╚██╔╝  ".to_string(),
                r" ╚██████╗██║  ██║██║  ██║██║███████║    ██║ ╚═╝ ██║██║  ██║███████║██║  ██╗███████╗   ██║   ".to_string(),
                r"  ╚═════╝╚═╝  ╚═╝╚═╝  ╚═╝╚═╝╚══════╝    ╚═╝     ╚═╝╚═╝  ╚═╝╚══════╝╚═╝  ╚═╝╚══════╝   ╚═╝   ".to_string(),
            ],
            about: About {
                greeting: "Welcome to my terminal portfolio!".to_string(),
                description: "I'm a software engineer based in Kathmandu, Nepal, with a passion \
                              for building robust products and seamless user experiences."
                    .to_string(),
                details: vec![
                    "Software Engineer at InvisiRisk, focusing on scalable monorepos and feature management".to_string(),
                    "Specialized in React, Next.js, TypeScript, and modern full-stack development".to_string(),
                    "Experienced in building both web and mobile applications (React Native)".to_string(),
                    "First Class Honours graduate in Computing from Islington College".to_string(),
                ],
            },
            social: Social {
                email: "chrismaskey@example.com".to_string(),
                github: "https://github.com/chrismaskey".to_string(),
                linkedin: "https://linkedin.com/in/chrismaskey".to_string(),
                twitter: "https://twitter.com/chrismaskey".to_string(),
                website: "https://chrismaskey.com.np".to_string(),
            },
            projects: vec![
                Project {
                    name: "Korra".to_string(),
                    description: "A comprehensive pet community platform featuring social \
                                  networking, adoption management, and e-commerce."
                        .to_string(),
                    tech: vec![
                        "React".to_string(),
                        "Next.js".to_string(),
                        "TypeScript".to_string(),
                        "Supabase".to_string(),
                        "Tailwind CSS".to_string(),
                        "Stripe".to_string(),
                        "Leaflet".to_string(),
                    ],
                    link: "https://github.com/chrismaskey/korra".to_string(),
                },
                Project {
                    name: "Station Control".to_string(),
                    description: "An internal monorepo system for feature flagging, plan-based \
                                  access control, and billing management."
                        .to_string(),
                    tech: vec![
                        "React".to_string(),
                        "Next.js".to_string(),
                        "TypeScript".to_string(),
                        "Node.js".to_string(),
                        "PostgreSQL".to_string(),
                        "Drizzle".to_string(),
                        "Tailwind CSS".to_string(),
                    ],
                    link: "https://github.com/chrismaskey/station-control".to_string(),
                },
                Project {
                    name: "Kharpan".to_string(),
                    description: "A mobile e-commerce application designed for groceries, \
                                  focusing on a smooth shopping experience."
                        .to_string(),
                    tech: vec!["React Native".to_string(), "TypeScript".to_string()],
                    link: "https://github.com/chrismaskey/kharpan".to_string(),
                },
            ],
            skills: Skills {
                languages: vec![
                    "TypeScript".to_string(),
                    "JavaScript".to_string(),
                    "Python".to_string(),
                    "SQL".to_string(),
                ],
                frontend: vec![
                    "React".to_string(),
                    "Next.js".to_string(),
                    "React Native".to_string(),
                    "Tailwind CSS".to_string(),
                    "HTML5".to_string(),
                    "CSS3".to_string(),
                ],
                backend: vec![
                    "Node.js".to_string(),
                    "FastAPI".to_string(),
                    "PostgreSQL".to_string(),
                    "MySQL".to_string(),
                    "REST APIs".to_string(),
                    "GraphQL".to_string(),
                ],
                devops: vec!["Docker".to_string(), "AWS".to_string()],
                tools: vec![
                    "Git".to_string(),
                    "Neovim".to_string(),
                    "Jira".to_string(),
                    "Figma".to_string(),
                    "Postman".to_string(),
                ],
                practices: vec![
                    "Full-Stack Development".to_string(),
                    "Performance Optimization".to_string(),
                    "Code Reviews".to_string(),
                    "Agile / Scrum".to_string(),
                ],
            },
            experience: vec![
                Experience {
                    role: "Software Engineer".to_string(),
                    company: "InvisiRisk".to_string(),
                    period: "March 2025 - Present".to_string(),
                    description: "Developing and maintaining InvisiRisk, contributing across \
                                  both frontend and backend, while also building internal \
                                  monorepo systems for feature flagging and billing management."
                        .to_string(),
                },
                Experience {
                    role: "Junior Software Engineer".to_string(),
                    company: "Vertex Special Technology".to_string(),
                    period: "April 2024 - February 2025".to_string(),
                    description: "Maintained responsive web and mobile apps; reduced code \
                                  errors by 25% through active reviews and Jira-based sprint \
                                  management."
                        .to_string(),
                },
                Experience {
                    role: "Software Engineer (Trainee/Intern)".to_string(),
                    company: "Vertex Special Technology".to_string(),
                    period: "September 2023 - April 2024".to_string(),
                    description: "Progressed from intern to trainee, gaining hands-on \
                                  experience in production-level software development."
                        .to_string(),
                },
            ],
            education: vec![
                Education {
                    degree: "BSc (Hons) in Computing".to_string(),
                    institution: "Islington College (London Metropolitan University)".to_string(),
                    period: "2020 - 2023".to_string(),
                    description: "Graduated with First Class Honours; focused on software \
                                  engineering and computing principles."
                        .to_string(),
                },
                Education {
                    degree: "School Leaving Certificate".to_string(),
                    institution: "Ace Higher Secondary School".to_string(),
                    period: "2018 - 2020".to_string(),
                    description: "Major in Computing and Economics; achieved a GPA of 3.27."
                        .to_string(),
                },
                Education {
                    degree: "Secondary Education Examination".to_string(),
                    institution: "Brihaspati Vidya Sadan".to_string(),
                    period: "Completed 2018".to_string(),
                    description: "Achieved a GPA of 3.63.".to_string(),
                },
            ],
        }
    }
}

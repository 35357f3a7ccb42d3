//! Typed views over the static site sections.

use crate::config::SiteConfig;
use crate::i18n::Translator;
use serde::{Deserialize, Serialize};

/// A navigation anchor and the key of its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub id: &'static str,
    pub title_key: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        id: "about",
        title_key: "nav.about",
    },
    NavLink {
        id: "skills",
        title_key: "nav.skills",
    },
    NavLink {
        id: "projects",
        title_key: "nav.projects",
    },
    NavLink {
        id: "contact",
        title_key: "nav.contact",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub id: &'static str,
    pub title: String,
}

pub fn navigation(translator: &Translator<'_>) -> Vec<NavEntry> {
    NAV_LINKS
        .iter()
        .map(|link| NavEntry {
            id: link.id,
            title: translator.text(link.title_key),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub image: String,
    #[serde(default)]
    pub fallback_image: Option<String>,
}

/// Projects in catalog order, with image paths resolved against the base path.
pub fn projects(translator: &Translator<'_>, config: &SiteConfig) -> Vec<Project> {
    translator
        .items::<Project>("projects.items")
        .into_iter()
        .map(|mut project| {
            project.image = config.asset_url(&project.image);
            project.fallback_image = project
                .fallback_image
                .map(|fallback| config.asset_url(&fallback));
            project
        })
        .collect()
}

pub const SKILL_CATEGORIES: [&str; 4] = ["frontend", "backend", "tools", "additional"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub id: &'static str,
    pub title: String,
    pub items: Vec<String>,
}

pub fn skill_categories(translator: &Translator<'_>) -> Vec<SkillCategory> {
    SKILL_CATEGORIES
        .into_iter()
        .map(|id| SkillCategory {
            id,
            title: translator.text(&format!("skills.categories.{id}.title")),
            items: translator.list(&format!("skills.categories.{id}.items")),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct About {
    pub title: String,
    pub subtitle: String,
    pub paragraphs: Vec<String>,
    pub specializations: Vec<String>,
    pub closing: String,
}

pub fn about(translator: &Translator<'_>) -> About {
    About {
        title: translator.text("about.title"),
        subtitle: translator.text("about.subtitle"),
        paragraphs: translator.list("about.description"),
        specializations: translator.list("about.specializations"),
        closing: translator.text("about.closing"),
    }
}

/// The landing section above the fold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub greeting: String,
    pub name: String,
    pub role: String,
    pub description: String,
    pub contact_label: String,
    pub projects_label: String,
    pub scroll_hint: String,
}

pub fn hero(translator: &Translator<'_>) -> Hero {
    Hero {
        greeting: translator.text("hero.greetings"),
        name: translator.text("hero.name"),
        role: translator.text("hero.role"),
        description: translator.text("hero.description"),
        contact_label: translator.text("hero.contact"),
        projects_label: translator.text("hero.projects"),
        scroll_hint: translator.text("hero.scroll"),
    }
}

/// An external profile listed next to the contact form. Not translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    /// Material icon name.
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "LinkedIn",
        url: "https://linkedin.com/in/szymon-dobrodziej",
        icon: "work_outline",
    },
    SocialLink {
        name: "GitHub",
        url: "https://github.com/szymon-dobrodziej",
        icon: "code",
    },
    SocialLink {
        name: "Email",
        url: "mailto:szymon.dobrodziej@gmail.com",
        icon: "mail_outline",
    },
];

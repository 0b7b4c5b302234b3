// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Serialize, Serializer};
use time::Month;

use crate::catalog::Catalog;
use crate::keys::{ProjectKey, ServiceKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Business,
    Productivity,
    Commerce,
    Automation,
    Development,
    Ai,
}

impl ServiceCategory {
    pub const ALL: [Self; 6] = [
        Self::Business,
        Self::Productivity,
        Self::Commerce,
        Self::Automation,
        Self::Development,
        Self::Ai,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Productivity => "productivity",
            Self::Commerce => "commerce",
            Self::Automation => "automation",
            Self::Development => "development",
            Self::Ai => "ai",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "business" => Some(Self::Business),
            "productivity" => Some(Self::Productivity),
            "commerce" => Some(Self::Commerce),
            "automation" => Some(Self::Automation),
            "development" => Some(Self::Development),
            "ai" => Some(Self::Ai),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Business => "Business",
            Self::Productivity => "Productivity",
            Self::Commerce => "Commerce",
            Self::Automation => "Automation",
            Self::Development => "Development",
            Self::Ai => "AI/ML",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Business => "💼",
            Self::Productivity => "⚡",
            Self::Commerce => "🛒",
            Self::Automation => "⚙️",
            Self::Development => "💻",
            Self::Ai => "🤖",
        }
    }
}

/// Chip state for the services grid. `All` admits everything; `Only`
/// narrows to a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CategoryFilter {
    All,
    Only(ServiceCategory),
}

impl CategoryFilter {
    /// Chip order as displayed, `All` first.
    pub const ALL: [Self; 7] = [
        Self::All,
        Self::Only(ServiceCategory::Business),
        Self::Only(ServiceCategory::Productivity),
        Self::Only(ServiceCategory::Commerce),
        Self::Only(ServiceCategory::Automation),
        Self::Only(ServiceCategory::Development),
        Self::Only(ServiceCategory::Ai),
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        if value == "all" {
            return Some(Self::All);
        }
        ServiceCategory::parse(value).map(Self::Only)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Services",
            Self::Only(category) => category.label(),
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::All => "🌟",
            Self::Only(category) => category.icon(),
        }
    }

    /// Whether an entry carrying `tag` is visible under this filter.
    /// Untagged entries are visible everywhere.
    pub fn admits(self, tag: Option<ServiceCategory>) -> bool {
        match (self, tag) {
            (Self::All, _) | (_, None) => true,
            (Self::Only(want), Some(have)) => want == have,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Home,
    Services,
    Process,
    Tools,
    Work,
    Contact,
}

impl SectionKind {
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Services,
        Self::Process,
        Self::Tools,
        Self::Work,
        Self::Contact,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Services => "services",
            Self::Process => "process",
            Self::Tools => "tools",
            Self::Work => "work",
            Self::Contact => "contact",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "home" => Some(Self::Home),
            "services" => Some(Self::Services),
            "process" => Some(Self::Process),
            "tools" => Some(Self::Tools),
            "work" => Some(Self::Work),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }
}

/// Gradient endpoints carried over from the studio's brand palette,
/// kept as plain RGB so any renderer can map them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Accent {
    pub from: (u8, u8, u8),
    pub to: (u8, u8, u8),
}

impl Accent {
    pub const fn new(from: (u8, u8, u8), to: (u8, u8, u8)) -> Self {
        Self { from, to }
    }
}

/// Month-resolution ship date, displayed as e.g. "January 2025".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipDate {
    pub month: Month,
    pub year: i32,
}

impl ShipDate {
    pub const fn new(month: Month, year: i32) -> Self {
        Self { month, year }
    }

    pub fn display(self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

impl Serialize for ShipDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.display())
    }
}

const fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "January",
        Month::February => "February",
        Month::March => "March",
        Month::April => "April",
        Month::May => "May",
        Month::June => "June",
        Month::July => "July",
        Month::August => "August",
        Month::September => "September",
        Month::October => "October",
        Month::November => "November",
        Month::December => "December",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UseCase {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub popular: bool,
    pub features: &'static [&'static str],
}

impl PricingTier {
    /// "$499/month", "$15k one-time", "Custom".
    pub fn price_line(&self) -> String {
        if self.period.is_empty() {
            self.price.to_owned()
        } else if self.period.starts_with('/') {
            format!("{}{}", self.price, self.period)
        } else {
            format!("{} {}", self.price, self.period)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub metric: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessStep {
    pub number: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tool {
    pub name: &'static str,
    pub icon: &'static str,
    pub desc: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Service {
    pub key: ServiceKey,
    pub title: &'static str,
    pub category: ServiceCategory,
    pub icon: &'static str,
    pub blurb: &'static str,
    pub accent: Accent,
    pub features: &'static [&'static str],
    pub detailed_features: &'static [Feature],
    pub tech_stack: &'static [&'static str],
    pub pricing: &'static [PricingTier],
    pub use_cases: &'static [UseCase],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub key: ProjectKey,
    pub title: &'static str,
    pub sector: &'static str,
    pub client: &'static str,
    pub shipped: ShipDate,
    pub icon: &'static str,
    pub blurb: &'static str,
    pub accent: Accent,
    pub tags: &'static [&'static str],
    pub results: &'static [Outcome],
    pub features: &'static [&'static str],
    pub challenge: &'static str,
    pub solution: &'static str,
    pub testimonial: Option<Testimonial>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tagline: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub phone_label: &'static str,
    pub phone: &'static str,
    pub email_label: &'static str,
    pub email: &'static str,
    pub links: &'static [FooterLink],
    pub taglines: &'static [&'static str],
    pub copyright: &'static str,
}

/// Heading plus optional tagline shown at the top of a section body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionCopy {
    pub heading: &'static str,
    pub tagline: &'static str,
}

/// Everything the prospectus shows, validated at assembly time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteContent {
    pub studio: &'static str,
    pub hero: Hero,
    pub services_copy: SectionCopy,
    pub services: Catalog<Service>,
    pub process_copy: SectionCopy,
    pub process: &'static [ProcessStep],
    pub tools_copy: SectionCopy,
    pub tools: &'static [Tool],
    pub work_copy: SectionCopy,
    pub work: Catalog<Project>,
    pub contact: Contact,
}

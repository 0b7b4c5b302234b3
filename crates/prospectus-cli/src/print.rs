// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use prospectus_app::{CategoryFilter, SectionKind, SiteContent};

pub fn render_json(content: &SiteContent) -> Result<String> {
    serde_json::to_string_pretty(content).context("encode site content as JSON")
}

pub fn render_section(
    content: &SiteContent,
    section: SectionKind,
    filter: CategoryFilter,
) -> String {
    match section {
        SectionKind::Home => render_home(content),
        SectionKind::Services => render_services(content, filter),
        SectionKind::Process => render_process(content),
        SectionKind::Tools => render_tools(content),
        SectionKind::Work => render_work(content),
        SectionKind::Contact => render_contact(content),
    }
}

fn render_home(content: &SiteContent) -> String {
    let hero = &content.hero;
    finish(vec![
        content.studio.to_owned(),
        String::new(),
        hero.title.to_owned(),
        hero.subtitle.to_owned(),
        String::new(),
        hero.tagline.to_owned(),
        String::new(),
        format!("{} | {}", hero.primary_cta, hero.secondary_cta),
    ])
}

fn render_services(content: &SiteContent, filter: CategoryFilter) -> String {
    let visible = content.services.by_category(filter);
    let mut lines = vec![
        content.services_copy.heading.to_owned(),
        content.services_copy.tagline.to_owned(),
        String::new(),
        format!(
            "filter: {} ({} of {} shown)",
            filter.label(),
            visible.len(),
            content.services.len()
        ),
    ];

    for service in visible {
        lines.push(String::new());
        lines.push(format!(
            "{} {} [{}]",
            service.icon,
            service.title,
            service.category.label()
        ));
        lines.push(format!("  {}", service.blurb));
        for feature in service.features {
            lines.push(format!("  - {feature}"));
        }
        let tiers: Vec<String> = service
            .pricing
            .iter()
            .map(|tier| {
                let mark = if tier.popular { " (MOST POPULAR)" } else { "" };
                format!("{} {}{}", tier.name, tier.price_line(), mark)
            })
            .collect();
        lines.push(format!("  pricing: {}", tiers.join(" | ")));
    }

    finish(lines)
}

fn render_process(content: &SiteContent) -> String {
    let mut lines = vec![content.process_copy.heading.to_owned()];
    if !content.process_copy.tagline.is_empty() {
        lines.push(content.process_copy.tagline.to_owned());
    }
    for step in content.process {
        lines.push(String::new());
        lines.push(format!("{} {} {}", step.number, step.icon, step.title));
        lines.push(format!("  {}", step.desc));
    }
    finish(lines)
}

fn render_tools(content: &SiteContent) -> String {
    let mut lines = vec![
        content.tools_copy.heading.to_owned(),
        content.tools_copy.tagline.to_owned(),
    ];
    for tool in content.tools {
        lines.push(String::new());
        lines.push(format!("{} {}", tool.icon, tool.name));
        lines.push(format!("  {}", tool.desc));
    }
    finish(lines)
}

fn render_work(content: &SiteContent) -> String {
    let mut lines = vec![
        content.work_copy.heading.to_owned(),
        content.work_copy.tagline.to_owned(),
    ];
    for project in content.work.entries() {
        lines.push(String::new());
        lines.push(format!(
            "{} {} [{}]",
            project.icon, project.title, project.sector
        ));
        lines.push(format!(
            "  {} | shipped {}",
            project.client,
            project.shipped.display()
        ));
        lines.push(format!("  {}", project.blurb));
        let tags: Vec<String> = project.tags.iter().map(|tag| format!("[{tag}]")).collect();
        lines.push(format!("  {}", tags.join(" ")));
        for result in project.results {
            lines.push(format!("  {} {}", result.metric, result.label));
        }
    }
    finish(lines)
}

fn render_contact(content: &SiteContent) -> String {
    let contact = &content.contact;
    let links: Vec<String> = contact
        .links
        .iter()
        .map(|link| format!("{} {}", link.icon, link.label))
        .collect();

    let mut lines = vec![
        format!("{}: {}", contact.phone_label, contact.phone),
        format!("{}: {}", contact.email_label, contact.email),
        String::new(),
        links.join(" | "),
        String::new(),
    ];
    for tagline in contact.taglines {
        lines.push((*tagline).to_owned());
    }
    lines.push(String::new());
    lines.push(contact.copyright.to_owned());
    finish(lines)
}

fn finish(lines: Vec<String>) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

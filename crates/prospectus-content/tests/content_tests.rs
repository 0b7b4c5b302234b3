// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use prospectus_app::{
    CatalogEntry, CategoryFilter, ProjectKey, ServiceCategory, ServiceKey, ShipDate,
};
use prospectus_content::stock;
use time::Month;

#[test]
fn stock_content_assembles() -> Result<()> {
    let content = stock()?;
    assert_eq!(content.studio, "TechForge");
    assert_eq!(content.services.len(), 6);
    assert_eq!(content.work.len(), 6);
    assert_eq!(content.process.len(), 4);
    assert_eq!(content.tools.len(), 6);
    Ok(())
}

#[test]
fn every_service_carries_full_detail() -> Result<()> {
    let content = stock()?;
    for service in content.services.entries() {
        assert_eq!(
            service.features.len(),
            4,
            "{:?} should list four card features",
            service.key
        );
        assert_eq!(
            service.detailed_features.len(),
            6,
            "{:?} should list six detailed features",
            service.key
        );
        assert_eq!(
            service.tech_stack.len(),
            6,
            "{:?} should list six stack entries",
            service.key
        );
        assert_eq!(
            service.pricing.len(),
            3,
            "{:?} should carry three pricing tiers",
            service.key
        );
        assert_eq!(
            service.pricing.iter().filter(|tier| tier.popular).count(),
            1,
            "{:?} should flag exactly one tier as popular",
            service.key
        );
        assert_eq!(
            service.use_cases.len(),
            4,
            "{:?} should list four use cases",
            service.key
        );
        assert!(!service.blurb.is_empty());
        for tier in service.pricing {
            assert!(!tier.features.is_empty());
        }
    }
    Ok(())
}

#[test]
fn each_category_maps_to_exactly_one_service() -> Result<()> {
    let content = stock()?;
    for category in ServiceCategory::ALL {
        let matching = content.services.by_category(CategoryFilter::Only(category));
        assert_eq!(
            matching.len(),
            1,
            "category {category:?} should own exactly one service"
        );
    }
    Ok(())
}

#[test]
fn ai_filter_selects_the_ml_service() -> Result<()> {
    let content = stock()?;
    let matching = content
        .services
        .by_category(CategoryFilter::Only(ServiceCategory::Ai));
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].key, ServiceKey::new("ai-ml"));
    assert_eq!(matching[0].title, "AI/ML Solutions");
    Ok(())
}

#[test]
fn business_filter_selects_the_crm_service() -> Result<()> {
    let content = stock()?;
    let matching = content
        .services
        .by_category(CategoryFilter::Only(ServiceCategory::Business));
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].key, ServiceKey::new("crm"));
    Ok(())
}

#[test]
fn all_filter_preserves_authoring_order() -> Result<()> {
    let content = stock()?;
    let keys: Vec<ServiceKey> = content
        .services
        .by_category(CategoryFilter::All)
        .into_iter()
        .map(|service| service.key)
        .collect();
    assert_eq!(
        keys,
        vec![
            ServiceKey::new("crm"),
            ServiceKey::new("internal-tools"),
            ServiceKey::new("ecommerce"),
            ServiceKey::new("automation"),
            ServiceKey::new("mobile"),
            ServiceKey::new("ai-ml"),
        ]
    );
    Ok(())
}

#[test]
fn service_lookup_by_key() -> Result<()> {
    let content = stock()?;
    let crm = content
        .services
        .get(ServiceKey::new("crm"))
        .expect("crm service present");
    assert_eq!(crm.title, "Custom CRM");
    assert_eq!(content.services.position(ServiceKey::new("mobile")), Some(4));
    assert!(content.services.get(ServiceKey::new("devops")).is_none());
    Ok(())
}

#[test]
fn every_project_carries_full_detail() -> Result<()> {
    let content = stock()?;
    for project in content.work.entries() {
        assert_eq!(project.tags.len(), 4, "{:?} should carry four tags", project.key);
        assert_eq!(
            project.results.len(),
            3,
            "{:?} should carry three outcomes",
            project.key
        );
        assert_eq!(
            project.features.len(),
            6,
            "{:?} should list six features",
            project.key
        );
        assert!(!project.challenge.is_empty());
        assert!(!project.solution.is_empty());
        let testimonial = project
            .testimonial
            .unwrap_or_else(|| panic!("{:?} should quote a client", project.key));
        assert!(!testimonial.quote.is_empty());
        assert!(!testimonial.author.is_empty());
    }
    Ok(())
}

#[test]
fn projects_ship_newest_first() -> Result<()> {
    let content = stock()?;
    let shipped: Vec<ShipDate> = content
        .work
        .entries()
        .iter()
        .map(|project| project.shipped)
        .collect();
    assert_eq!(shipped[0], ShipDate::new(Month::January, 2025));
    assert_eq!(shipped[5], ShipDate::new(Month::August, 2024));
    for pair in shipped.windows(2) {
        let newer = (pair[0].year, pair[0].month as u8);
        let older = (pair[1].year, pair[1].month as u8);
        assert!(newer > older, "work entries should run newest to oldest");
    }
    Ok(())
}

#[test]
fn project_lookup_by_key() -> Result<()> {
    let content = stock()?;
    let portal = content
        .work
        .get(ProjectKey::new("medicare-plus"))
        .expect("healthcare portal present");
    assert_eq!(portal.sector, "Healthcare");
    assert_eq!(portal.shipped.display(), "September 2024");
    assert!(content.work.get(ProjectKey::new("fashionhub")).is_some());
    assert!(content.work.get(ProjectKey::new("missing")).is_none());
    Ok(())
}

#[test]
fn projects_never_carry_a_filter_tag() -> Result<()> {
    let content = stock()?;
    for project in content.work.entries() {
        assert_eq!(project.filter_tag(), None);
    }
    let narrowed = content
        .work
        .by_category(CategoryFilter::Only(ServiceCategory::Commerce));
    assert_eq!(narrowed.len(), content.work.len());
    Ok(())
}

#[test]
fn process_steps_are_numbered_in_order() -> Result<()> {
    let content = stock()?;
    let numbers: Vec<&str> = content.process.iter().map(|step| step.number).collect();
    assert_eq!(numbers, vec!["01", "02", "03", "04"]);
    for step in content.process {
        assert!(!step.title.is_empty());
        assert!(!step.desc.is_empty());
    }
    Ok(())
}

#[test]
fn toolkit_names_are_unique() -> Result<()> {
    let content = stock()?;
    for (index, tool) in content.tools.iter().enumerate() {
        assert!(!tool.desc.is_empty());
        assert!(
            !content.tools[..index].iter().any(|prior| prior.name == tool.name),
            "duplicate tool name {}",
            tool.name
        );
    }
    Ok(())
}

#[test]
fn pricing_lines_format_per_period_shape() -> Result<()> {
    let content = stock()?;
    let crm = content.services.get(ServiceKey::new("crm")).expect("crm present");
    assert_eq!(crm.pricing[0].price_line(), "$499/month");
    assert_eq!(crm.pricing[2].price_line(), "Custom");
    let mobile = content
        .services
        .get(ServiceKey::new("mobile"))
        .expect("mobile present");
    assert_eq!(mobile.pricing[0].price_line(), "$15k one-time");
    Ok(())
}

#[test]
fn hero_and_contact_copy_present() -> Result<()> {
    let content = stock()?;
    assert_eq!(content.hero.title, "AI Driven Application Development");
    assert!(!content.hero.primary_cta.is_empty());
    assert!(!content.hero.secondary_cta.is_empty());
    assert_eq!(content.contact.links.len(), 4);
    assert_eq!(content.contact.taglines.len(), 2);
    assert!(content.contact.copyright.contains(content.studio));
    assert!(!content.contact.phone.is_empty());
    assert!(!content.contact.email.is_empty());
    Ok(())
}

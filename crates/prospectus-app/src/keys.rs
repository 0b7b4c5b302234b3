// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::Serialize;

macro_rules! entry_key {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(&'static str);

        impl $name {
            pub const fn new(slug: &'static str) -> Self {
                Self(slug)
            }

            pub const fn slug(self) -> &'static str {
                self.0
            }
        }
    };
}

entry_key!(ServiceKey);
entry_key!(ProjectKey);

#[cfg(test)]
mod tests {
    use super::{ProjectKey, ServiceKey};

    #[test]
    fn keys_compare_by_slug() {
        let crm = ServiceKey::new("crm");
        assert_eq!(crm, ServiceKey::new("crm"));
        assert_ne!(crm, ServiceKey::new("ecommerce"));
        assert_eq!(crm.slug(), "crm");
    }

    #[test]
    fn service_and_project_keys_are_distinct_types() {
        // Same slug, different namespaces; this only has to compile.
        let service = ServiceKey::new("fashionhub");
        let project = ProjectKey::new("fashionhub");
        assert_eq!(service.slug(), project.slug());
    }
}

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use prospectus_app::{CategoryFilter, SectionKind};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_VERSION: i64 = 1;
const APP_DIR: &str = "prospectus";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub ui: Ui,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            ui: Ui::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub start_section: Option<String>,
    pub start_filter: Option<String>,
    pub mouse: Option<bool>,
    pub mono: Option<bool>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            start_section: Some("home".to_owned()),
            start_filter: Some("all".to_owned()),
            mouse: Some(true),
            mono: Some(false),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("PROSPECTUS_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set PROSPECTUS_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_DIR);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned for the Rust prospectus. Add `version = 1` and move values under [ui]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1. Migrate your config to the v1 schema",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.version != CONFIG_VERSION {
            bail!(
                "config {} has version {}; expected 1",
                path.display(),
                self.version
            );
        }

        if let Some(section) = &self.ui.start_section
            && SectionKind::parse(section).is_none()
        {
            bail!(
                "ui.start_section in {} has unknown section {:?}; expected one of: {}",
                path.display(),
                section,
                section_names()
            );
        }

        if let Some(filter) = &self.ui.start_filter
            && CategoryFilter::parse(filter).is_none()
        {
            bail!(
                "ui.start_filter in {} has unknown filter {:?}; expected one of: {}",
                path.display(),
                filter,
                filter_names()
            );
        }

        Ok(())
    }

    /// Validated at load time, so an unparseable value can only mean the
    /// default config, which falls back to the home section.
    pub fn start_section(&self) -> SectionKind {
        self.ui
            .start_section
            .as_deref()
            .and_then(SectionKind::parse)
            .unwrap_or(SectionKind::Home)
    }

    pub fn start_filter(&self) -> CategoryFilter {
        self.ui
            .start_filter
            .as_deref()
            .and_then(CategoryFilter::parse)
            .unwrap_or(CategoryFilter::All)
    }

    pub fn mouse(&self) -> bool {
        self.ui.mouse.unwrap_or(true)
    }

    pub fn mono(&self) -> bool {
        self.ui.mono.unwrap_or(false)
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# prospectus Rust config\n# Place this file at: {}\n\nversion = 1\n\n[ui]\n# Section shown on launch. One of: {}\nstart_section = \"home\"\n# Filter preselected on the services grid. One of: {}\nstart_filter = \"all\"\n# Capture mouse clicks and wheel scrolling\nmouse = true\n# Disable accent colors for monochrome terminals\nmono = false\n",
            path.display(),
            section_names(),
            filter_names(),
        )
    }
}

pub fn section_names() -> String {
    SectionKind::ALL.map(SectionKind::label).join(", ")
}

pub fn filter_names() -> String {
    CategoryFilter::ALL.map(CategoryFilter::as_str).join(", ")
}

#[cfg(test)]
mod tests {
    use super::{Config, filter_names, section_names};
    use anyhow::Result;
    use prospectus_app::{CategoryFilter, SectionKind, ServiceCategory};
    use std::path::PathBuf;
    use std::sync::{Mutex, OnceLock};

    fn write_config(content: &str) -> Result<(tempfile::TempDir, PathBuf)> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        std::fs::write(&path, content)?;
        Ok((temp, path))
    }

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        match ENV_LOCK.get_or_init(|| Mutex::new(())).lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[test]
    fn missing_config_uses_defaults() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let config = Config::load(&temp.path().join("missing.toml"))?;
        assert_eq!(config.version, 1);
        assert_eq!(config.start_section(), SectionKind::Home);
        assert_eq!(config.start_filter(), CategoryFilter::All);
        assert!(config.mouse());
        assert!(!config.mono());
        Ok(())
    }

    #[test]
    fn old_unversioned_config_is_rejected_with_actionable_message() -> Result<()> {
        let (_temp, path) = write_config("[ui]\nmouse = true\n")?;
        let error = Config::load(&path).expect_err("old schema should fail");
        let message = error.to_string();
        assert!(message.contains("version = 1"));
        assert!(message.contains("[ui]"));
        Ok(())
    }

    #[test]
    fn v1_config_parses() -> Result<()> {
        let (_temp, path) = write_config(
            "version = 1\n[ui]\nstart_section = \"services\"\nstart_filter = \"ai\"\nmouse = false\nmono = true\n",
        )?;
        let config = Config::load(&path)?;
        assert_eq!(config.start_section(), SectionKind::Services);
        assert_eq!(
            config.start_filter(),
            CategoryFilter::Only(ServiceCategory::Ai)
        );
        assert!(!config.mouse());
        assert!(config.mono());
        Ok(())
    }

    #[test]
    fn partial_ui_table_keeps_other_defaults() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[ui]\nmono = true\n")?;
        let config = Config::load(&path)?;
        assert!(config.mono());
        assert!(config.mouse());
        assert_eq!(config.start_section(), SectionKind::Home);
        assert_eq!(config.start_filter(), CategoryFilter::All);
        Ok(())
    }

    #[test]
    fn malformed_config_returns_parse_error() -> Result<()> {
        let (_temp, path) = write_config("{{not toml")?;
        let error = Config::load(&path).expect_err("malformed config should fail");
        assert!(error.to_string().contains("parse TOML config"));
        Ok(())
    }

    #[test]
    fn unsupported_config_version_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 2\n")?;
        let error = Config::load(&path).expect_err("v2 config should fail");
        assert!(error.to_string().contains("unsupported config version 2"));
        Ok(())
    }

    #[test]
    fn unknown_start_section_is_rejected_with_accepted_values() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[ui]\nstart_section = \"pricing\"\n")?;
        let error = Config::load(&path).expect_err("unknown section should fail");
        let message = error.to_string();
        assert!(message.contains("ui.start_section"), "got: {message}");
        assert!(message.contains(&section_names()), "got: {message}");
        Ok(())
    }

    #[test]
    fn unknown_start_filter_is_rejected_with_accepted_values() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[ui]\nstart_filter = \"devops\"\n")?;
        let error = Config::load(&path).expect_err("unknown filter should fail");
        let message = error.to_string();
        assert!(message.contains("ui.start_filter"), "got: {message}");
        assert!(message.contains(&filter_names()), "got: {message}");
        Ok(())
    }

    #[test]
    fn default_path_honors_env_override() -> Result<()> {
        let _guard = env_lock();
        let temp = tempfile::tempdir()?;
        let override_path = temp.path().join("custom-config.toml");
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("PROSPECTUS_CONFIG_PATH", &override_path);
        }
        let resolved = Config::default_path()?;
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("PROSPECTUS_CONFIG_PATH");
        }
        assert_eq!(resolved, override_path);
        Ok(())
    }

    #[test]
    fn default_path_uses_config_toml_suffix_when_no_env_override() -> Result<()> {
        let _guard = env_lock();
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::remove_var("PROSPECTUS_CONFIG_PATH");
        }
        let path = Config::default_path()?;
        assert!(path.ends_with("config.toml"));
        Ok(())
    }

    #[test]
    fn example_config_includes_required_sections() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        let example = Config::example_config(&path);
        assert!(example.contains("version = 1"));
        assert!(example.contains("[ui]"));
        assert!(example.contains("start_section"));
        assert!(example.contains("start_filter"));
        Ok(())
    }

    #[test]
    fn name_lists_cover_every_variant() {
        let sections = section_names();
        for section in SectionKind::ALL {
            assert!(sections.contains(section.label()));
        }
        let filters = filter_names();
        for filter in CategoryFilter::ALL {
            assert!(filters.contains(filter.as_str()));
        }
    }
}

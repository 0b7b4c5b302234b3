// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::keys::{ProjectKey, ServiceKey};
use crate::model::{CategoryFilter, SectionKind};

/// Single-slot selection backing a detail overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<K> {
    Empty,
    Selected(K),
}

impl<K> Default for Selection<K> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<K: Copy + Eq> Selection<K> {
    /// Overwrites whatever was selected before, in one step. Returns
    /// whether the slot actually changed.
    pub fn select(&mut self, key: K) -> bool {
        if *self == Self::Selected(key) {
            return false;
        }
        *self = Self::Selected(key);
        true
    }

    /// Clearing an empty slot is a no-op, not an error.
    pub fn clear(&mut self) -> bool {
        if *self == Self::Empty {
            return false;
        }
        *self = Self::Empty;
        true
    }

    pub fn key(self) -> Option<K> {
        match self {
            Self::Empty => None,
            Self::Selected(key) => Some(key),
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServicesState {
    pub filter: CategoryFilter,
    pub selection: Selection<ServiceKey>,
}

impl Default for ServicesState {
    fn default() -> Self {
        Self {
            filter: CategoryFilter::All,
            selection: Selection::Empty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkState {
    pub selection: Selection<ProjectKey>,
}

/// The overlay currently on screen, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Service(ServiceKey),
    Project(ProjectKey),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub section: SectionKind,
    pub services: ServicesState,
    pub work: WorkState,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            section: SectionKind::Home,
            services: ServicesState::default(),
            work: WorkState::default(),
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    NextSection,
    PrevSection,
    GoToSection(SectionKind),
    SetFilter(CategoryFilter),
    OpenService(ServiceKey),
    OpenProject(ProjectKey),
    CloseOverlay,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    SectionChanged(SectionKind),
    FilterChanged(CategoryFilter),
    ServiceOpened(ServiceKey),
    ProjectOpened(ProjectKey),
    OverlayClosed,
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::NextSection => self.rotate_section(1),
            AppCommand::PrevSection => self.rotate_section(-1),
            AppCommand::GoToSection(section) => {
                if self.section == section {
                    return Vec::new();
                }
                self.section = section;
                vec![AppEvent::SectionChanged(section)]
            }
            AppCommand::SetFilter(filter) => {
                // Never touches the selection slot; an open overlay stays open.
                if self.services.filter == filter {
                    return Vec::new();
                }
                self.services.filter = filter;
                vec![AppEvent::FilterChanged(filter)]
            }
            AppCommand::OpenService(key) => {
                if self.services.selection.select(key) {
                    vec![AppEvent::ServiceOpened(key)]
                } else {
                    Vec::new()
                }
            }
            AppCommand::OpenProject(key) => {
                if self.work.selection.select(key) {
                    vec![AppEvent::ProjectOpened(key)]
                } else {
                    Vec::new()
                }
            }
            AppCommand::CloseOverlay => {
                let closed_service = self.services.selection.clear();
                let closed_project = self.work.selection.clear();
                if closed_service || closed_project {
                    vec![AppEvent::OverlayClosed]
                } else {
                    Vec::new()
                }
            }
            AppCommand::SetStatus(message) => {
                self.status_line = Some(message.clone());
                vec![AppEvent::StatusUpdated(message)]
            }
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn rotate_section(&mut self, delta: isize) -> Vec<AppEvent> {
        let sections = SectionKind::ALL;
        let current = sections
            .iter()
            .position(|section| *section == self.section)
            .unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(sections.len() as isize) as usize;
        self.section = sections[next];
        vec![AppEvent::SectionChanged(self.section)]
    }

    /// The service slot wins when both hold a selection, matching the
    /// services overlay being the one mounted last on top.
    pub fn active_overlay(&self) -> Option<OverlayKind> {
        match (self.services.selection, self.work.selection) {
            (Selection::Selected(key), _) => Some(OverlayKind::Service(key)),
            (_, Selection::Selected(key)) => Some(OverlayKind::Project(key)),
            (Selection::Empty, Selection::Empty) => None,
        }
    }

    pub fn overlay_open(&self) -> bool {
        self.active_overlay().is_some()
    }
}

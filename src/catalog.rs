use std::collections::HashSet;

use log::error;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::navigation::{NavError, Section, CONTACT, INTRO, SERVICES};

mod services;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub what: String,
    pub how: String,
    pub benefit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub description: Description,
    pub packages: Vec<Package>,
}

impl Service {
    pub fn find_package(&self, name: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.name == name)
    }

    /// Tier used on the services overview card: the middle one when there is one.
    pub fn highlighted_package(&self) -> Option<&Package> {
        self.packages.get(1).or_else(|| self.packages.last())
    }
}

/// Tiers at or past this index are the custom, contact-only ones.
pub const LOCKED_TIER_INDEX: usize = 2;

/// Display label for a chosen package, e.g. "Organizador de Inventarios - Avanzado".
pub fn package_label(service: &Service, package: &Package) -> String {
    format!("{} - {}", service.name, package.name)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("service name must not be empty")]
    EmptyName,
    #[error("service {0:?} is listed more than once")]
    DuplicateService(String),
    #[error("service {0:?} collides with a reserved section name")]
    ReservedName(String),
}

/// What a section resolves to when rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    Intro,
    Services,
    Packages(&'a Service),
    Contact,
}

/// Static, read-only list of services. Built once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    services: Vec<Service>,
}

impl Catalog {
    pub fn new(services: Vec<Service>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for service in &services {
            let name = service.name.trim();
            if name.is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if [INTRO, SERVICES, CONTACT].contains(&name) {
                return Err(CatalogError::ReservedName(service.name.clone()));
            }
            if !seen.insert(service.name.as_str()) {
                return Err(CatalogError::DuplicateService(service.name.clone()));
            }
        }
        Ok(Self { services })
    }

    /// The site's own offering.
    pub fn builtin() -> Self {
        Self::new(services::builtin_services()).unwrap_or_else(|e| {
            error!("Built-in catalog is invalid: {}", e);
            Self { services: Vec::new() }
        })
    }

    pub fn list_services(&self) -> &[Service] {
        &self.services
    }

    pub fn find_service(&self, name: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.name == name)
    }

    pub fn section(&self, name: &str) -> Result<Section, NavError> {
        Section::parse(name, self)
    }

    pub fn resolve(&self, section: &Section) -> Result<View<'_>, NavError> {
        match section.as_str() {
            INTRO => Ok(View::Intro),
            SERVICES => Ok(View::Services),
            CONTACT => Ok(View::Contact),
            name => self
                .find_service(name)
                .map(View::Packages)
                .ok_or_else(|| NavError::UnknownSection(name.to_string())),
        }
    }
}

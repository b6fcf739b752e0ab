use std::fmt;
use std::rc::Rc;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use yew::prelude::*;

use crate::catalog::{package_label, Catalog};

pub const INTRO: &str = "intro";
pub const SERVICES: &str = "services";
pub const CONTACT: &str = "contact";

/// Name of a displayable section. Only constructible through a catalog check,
/// so a `Section` is always one of the fixed screens or a known service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Section(String);

impl Section {
    pub fn parse(name: &str, catalog: &Catalog) -> Result<Self, NavError> {
        match name {
            INTRO | SERVICES | CONTACT => Ok(Self(name.to_string())),
            _ if catalog.find_service(name).is_some() => Ok(Self(name.to_string())),
            _ => Err(NavError::UnknownSection(name.to_string())),
        }
    }

    pub fn intro() -> Self {
        Self(INTRO.to_string())
    }

    pub fn services() -> Self {
        Self(SERVICES.to_string())
    }

    pub fn contact() -> Self {
        Self(CONTACT.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the per-service packages screens.
    pub fn is_service(&self) -> bool {
        !matches!(self.0.as_str(), INTRO | SERVICES | CONTACT)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Query string carried by every history entry: `/?section=<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionQuery {
    pub section: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    #[error("unknown section {0:?}")]
    UnknownSection(String),
    #[error("service {service:?} has no package {package:?}")]
    UnknownPackage { service: String, package: String },
    #[error("{action} is not available from section {from:?}")]
    IllegalTransition { from: String, action: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    Start,
    ViewPackages(String),
    Back,
    SelectPackage { service: String, package: String },
    BackToServices,
    /// Browser moved (back, forward or reload) to the entry with this `section` query.
    LocationChanged(Option<String>),
}

impl NavAction {
    fn name(&self) -> &'static str {
        match self {
            NavAction::Start => "start",
            NavAction::ViewPackages(_) => "view packages",
            NavAction::Back => "back",
            NavAction::SelectPackage { .. } => "select package",
            NavAction::BackToServices => "back to services",
            NavAction::LocationChanged(_) => "location change",
        }
    }
}

/// What the browser history has to do to match the state after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEffect {
    None,
    Push(Section),
    Go(isize),
    Replace(Section),
}

/// Current section, back-stack and selected package. The last history entry is
/// always the current section and the first one is always `intro`.
#[derive(Debug, Clone)]
pub struct Navigation {
    catalog: Rc<Catalog>,
    history: Vec<Section>,
    selected_package: Option<String>,
    effect: HistoryEffect,
    revision: u64,
    /// Set once the first transition has been applied. Before that, the browser
    /// location is whatever the page was loaded with.
    loaded: bool,
}

impl Navigation {
    pub fn new(catalog: Rc<Catalog>) -> Self {
        Self {
            catalog,
            history: vec![Section::intro()],
            selected_package: None,
            effect: HistoryEffect::None,
            revision: 0,
            loaded: false,
        }
    }

    pub fn current(&self) -> &Section {
        // history is never empty: it starts with intro and retreat_to keeps index 0
        &self.history[self.history.len() - 1]
    }

    #[cfg(test)]
    pub fn history(&self) -> &[Section] {
        &self.history
    }

    pub fn selected_package(&self) -> Option<&str> {
        self.selected_package.as_deref()
    }

    pub fn catalog(&self) -> &Rc<Catalog> {
        &self.catalog
    }

    /// Browser sync pending from the last transition.
    pub fn effect(&self) -> &HistoryEffect {
        &self.effect
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The single transition function. Buttons and browser navigation both end
    /// up here. Nothing is mutated when an error is returned.
    pub fn apply(&mut self, action: NavAction) -> Result<HistoryEffect, NavError> {
        let from = self.current().clone();
        let effect = match action {
            NavAction::Start => {
                self.require(&from, INTRO, "start")?;
                self.push(Section::services())
            }
            NavAction::ViewPackages(name) => {
                self.require(&from, SERVICES, "view packages")?;
                let target = self.catalog.section(&name)?;
                if !target.is_service() {
                    return Err(NavError::UnknownSection(name));
                }
                self.push(target)
            }
            NavAction::Back => {
                if self.history.len() < 2 {
                    return Ok(HistoryEffect::None);
                }
                let target = self.history[self.history.len() - 2].clone();
                let popped = self.retreat_to(&target);
                HistoryEffect::Go(-(popped as isize))
            }
            NavAction::SelectPackage { service, package } => {
                if from.as_str() != service || !from.is_service() {
                    return Err(NavError::IllegalTransition {
                        from: from.to_string(),
                        action: "select package",
                    });
                }
                let label = {
                    let owner = self
                        .catalog
                        .find_service(&service)
                        .ok_or_else(|| NavError::UnknownSection(service.clone()))?;
                    let chosen = owner
                        .find_package(&package)
                        .ok_or_else(|| NavError::UnknownPackage {
                            service: service.clone(),
                            package: package.clone(),
                        })?;
                    package_label(owner, chosen)
                };
                info!("Selected package {}", label);
                self.selected_package = Some(label);
                self.push(Section::contact())
            }
            NavAction::BackToServices => {
                self.require(&from, CONTACT, "back to services")?;
                let services = Section::services();
                if self.history.contains(&services) {
                    let popped = self.retreat_to(&services);
                    HistoryEffect::Go(-(popped as isize))
                } else {
                    self.push(services)
                }
            }
            NavAction::LocationChanged(query) => self.follow_location(query.as_deref()),
        };

        if self.current() != &from {
            info!("Navigated {} -> {}", from, self.current());
        }
        self.loaded = true;
        Ok(effect)
    }

    fn follow_location(&mut self, query: Option<&str>) -> HistoryEffect {
        let target = match self.catalog.section(query.unwrap_or(INTRO)) {
            Ok(section) => section,
            Err(e) => {
                warn!("Ignoring browser location: {}", e);
                return HistoryEffect::Replace(self.current().clone());
            }
        };
        if &target == self.current() {
            return HistoryEffect::None;
        }
        if !self.loaded {
            // a reload or deep link always starts over at intro
            warn!("Initial location {} rewritten to {}", target, self.current());
            return HistoryEffect::Replace(self.current().clone());
        }
        if self.history.contains(&target) {
            self.retreat_to(&target);
            return HistoryEffect::None;
        }
        if self.is_forward_step(&target) {
            self.history.push(target);
            return HistoryEffect::None;
        }
        warn!("Browser location {} is not reachable from {}", target, self.current());
        HistoryEffect::Replace(self.current().clone())
    }

    /// Browser forward may only replay a transition the buttons could have made.
    fn is_forward_step(&self, target: &Section) -> bool {
        let current = self.current();
        match (current.as_str(), target.as_str()) {
            (INTRO, SERVICES) => true,
            (SERVICES, _) => target.is_service(),
            (_, CONTACT) if current.is_service() => self
                .selected_package
                .as_deref()
                .map_or(false, |label| label.starts_with(&format!("{} - ", current))),
            _ => false,
        }
    }

    fn require(&self, from: &Section, expected: &str, action: &'static str) -> Result<(), NavError> {
        if from.as_str() == expected {
            Ok(())
        } else {
            Err(NavError::IllegalTransition {
                from: from.to_string(),
                action,
            })
        }
    }

    fn push(&mut self, section: Section) -> HistoryEffect {
        self.history.push(section.clone());
        HistoryEffect::Push(section)
    }

    /// Truncates the stack to the last occurrence of `target`, returning how many
    /// entries were dropped.
    fn retreat_to(&mut self, target: &Section) -> usize {
        match self.history.iter().rposition(|s| s == target) {
            Some(pos) => {
                let popped = self.history.len() - 1 - pos;
                self.history.truncate(pos + 1);
                popped
            }
            None => 0,
        }
    }
}

impl Reducible for Navigation {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let name = action.name();
        next.effect = match next.apply(action) {
            Ok(effect) => effect,
            Err(e) => {
                warn!("Rejected {}: {}", name, e);
                HistoryEffect::None
            }
        };
        next.revision += 1;
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INVENTORY: &str = "Organizador de Inventarios";

    fn nav() -> Navigation {
        Navigation::new(Rc::new(Catalog::builtin()))
    }

    fn names(nav: &Navigation) -> Vec<&str> {
        nav.history().iter().map(Section::as_str).collect()
    }

    fn select(service: &str, package: &str) -> NavAction {
        NavAction::SelectPackage {
            service: service.to_string(),
            package: package.to_string(),
        }
    }

    fn to_contact(nav: &mut Navigation, package: &str) {
        nav.apply(NavAction::Start).unwrap();
        nav.apply(NavAction::ViewPackages(INVENTORY.to_string())).unwrap();
        nav.apply(select(INVENTORY, package)).unwrap();
    }

    #[test]
    fn starts_at_intro() {
        let nav = nav();
        assert_eq!(nav.current().as_str(), INTRO);
        assert_eq!(nav.history().len(), 1);
        assert_eq!(nav.selected_package(), None);
    }

    #[test]
    fn forward_transitions_push_history() {
        let mut nav = nav();
        assert_eq!(
            nav.apply(NavAction::Start),
            Ok(HistoryEffect::Push(Section::services()))
        );
        let effect = nav.apply(NavAction::ViewPackages(INVENTORY.to_string())).unwrap();
        assert_eq!(effect, HistoryEffect::Push(nav.catalog().section(INVENTORY).unwrap()));
        assert_eq!(
            nav.apply(select(INVENTORY, "Avanzado")),
            Ok(HistoryEffect::Push(Section::contact()))
        );
        assert_eq!(names(&nav), vec![INTRO, SERVICES, INVENTORY, CONTACT]);
        assert_eq!(nav.selected_package(), Some("Organizador de Inventarios - Avanzado"));
    }

    #[test]
    fn locked_and_first_tier_both_reach_contact() {
        for tier in ["Hiper Personalizado", "Básico"] {
            let mut nav = nav();
            to_contact(&mut nav, tier);
            assert_eq!(nav.current().as_str(), CONTACT);
            assert_eq!(
                nav.selected_package(),
                Some(format!("{} - {}", INVENTORY, tier).as_str())
            );
        }
    }

    #[test]
    fn new_selection_overwrites_label() {
        let mut nav = nav();
        to_contact(&mut nav, "Básico");
        nav.apply(NavAction::Back).unwrap();
        nav.apply(select(INVENTORY, "Avanzado")).unwrap();
        assert_eq!(nav.selected_package(), Some("Organizador de Inventarios - Avanzado"));
    }

    #[test]
    fn back_pops_one_entry() {
        let mut nav = nav();
        nav.apply(NavAction::Start).unwrap();
        nav.apply(NavAction::ViewPackages(INVENTORY.to_string())).unwrap();
        assert_eq!(nav.apply(NavAction::Back), Ok(HistoryEffect::Go(-1)));
        assert_eq!(nav.current().as_str(), SERVICES);
        assert_eq!(names(&nav), vec![INTRO, SERVICES]);
    }

    #[test]
    fn back_at_intro_is_noop() {
        let mut nav = nav();
        assert_eq!(nav.apply(NavAction::Back), Ok(HistoryEffect::None));
        assert_eq!(names(&nav), vec![INTRO]);
    }

    #[test]
    fn back_to_services_from_contact_truncates() {
        let mut nav = nav();
        to_contact(&mut nav, "Avanzado");
        assert_eq!(nav.apply(NavAction::BackToServices), Ok(HistoryEffect::Go(-2)));
        assert_eq!(names(&nav), vec![INTRO, SERVICES]);
    }

    #[test]
    fn browser_back_three_times_returns_to_intro() {
        let mut nav = nav();
        to_contact(&mut nav, "Avanzado");
        let forward: Vec<Section> = nav.history().to_vec();

        for expected in forward.iter().rev().skip(1) {
            let query = match expected.as_str() {
                INTRO => None,
                other => Some(other.to_string()),
            };
            assert_eq!(nav.apply(NavAction::LocationChanged(query)), Ok(HistoryEffect::None));
            assert_eq!(nav.current(), expected);
        }
        assert_eq!(names(&nav), vec![INTRO]);
    }

    #[test]
    fn button_back_and_echoed_location_agree() {
        let mut by_button = nav();
        to_contact(&mut by_button, "Básico");
        let mut by_browser = by_button.clone();

        by_button.apply(NavAction::Back).unwrap();
        // the browser then reports the entry it landed on, which must be a no-op
        assert_eq!(
            by_button.apply(NavAction::LocationChanged(Some(INVENTORY.to_string()))),
            Ok(HistoryEffect::None)
        );
        by_browser
            .apply(NavAction::LocationChanged(Some(INVENTORY.to_string())))
            .unwrap();

        assert_eq!(by_button.history(), by_browser.history());
    }

    #[test]
    fn browser_forward_replays_legal_steps() {
        let mut nav = nav();
        to_contact(&mut nav, "Básico");
        nav.apply(NavAction::LocationChanged(None)).unwrap();
        assert_eq!(names(&nav), vec![INTRO]);

        for step in [SERVICES, INVENTORY, CONTACT] {
            assert_eq!(
                nav.apply(NavAction::LocationChanged(Some(step.to_string()))),
                Ok(HistoryEffect::None)
            );
        }
        assert_eq!(names(&nav), vec![INTRO, SERVICES, INVENTORY, CONTACT]);
    }

    #[test]
    fn unreachable_or_unknown_location_is_rewritten() {
        let mut nav = nav();
        assert_eq!(
            nav.apply(NavAction::LocationChanged(Some(CONTACT.to_string()))),
            Ok(HistoryEffect::Replace(Section::intro()))
        );
        assert_eq!(
            nav.apply(NavAction::LocationChanged(Some("nada".to_string()))),
            Ok(HistoryEffect::Replace(Section::intro()))
        );
        assert_eq!(names(&nav), vec![INTRO]);
    }

    #[test]
    fn fresh_load_at_services_is_rewritten_to_intro() {
        let mut nav = nav();
        assert_eq!(
            nav.apply(NavAction::LocationChanged(Some(SERVICES.to_string()))),
            Ok(HistoryEffect::Replace(Section::intro()))
        );
        assert_eq!(names(&nav), vec![INTRO]);

        // the rewritten location echoes back as intro
        assert_eq!(nav.apply(NavAction::LocationChanged(None)), Ok(HistoryEffect::None));
        assert_eq!(nav.current().as_str(), INTRO);
    }

    #[test]
    fn fresh_load_at_service_or_contact_starts_at_intro() {
        for section in [INVENTORY, CONTACT] {
            let mut nav = nav();
            assert_eq!(
                nav.apply(NavAction::LocationChanged(Some(section.to_string()))),
                Ok(HistoryEffect::Replace(Section::intro()))
            );
            assert_eq!(names(&nav), vec![INTRO]);
            assert_eq!(nav.selected_package(), None);
        }
    }

    #[test]
    fn forward_after_plain_load_is_still_replayed() {
        let mut nav = nav();
        assert_eq!(nav.apply(NavAction::LocationChanged(None)), Ok(HistoryEffect::None));
        assert_eq!(
            nav.apply(NavAction::LocationChanged(Some(SERVICES.to_string()))),
            Ok(HistoryEffect::None)
        );
        assert_eq!(names(&nav), vec![INTRO, SERVICES]);
    }

    #[test]
    fn illegal_actions_leave_state_untouched() {
        let mut nav = nav();
        assert!(matches!(
            nav.apply(NavAction::ViewPackages(INVENTORY.to_string())),
            Err(NavError::IllegalTransition { .. })
        ));
        nav.apply(NavAction::Start).unwrap();
        assert!(matches!(
            nav.apply(select(INVENTORY, "Básico")),
            Err(NavError::IllegalTransition { .. })
        ));
        assert_eq!(
            nav.apply(NavAction::ViewPackages("Inexistente".to_string())),
            Err(NavError::UnknownSection("Inexistente".to_string()))
        );
        assert_eq!(
            nav.apply(NavAction::ViewPackages(CONTACT.to_string())),
            Err(NavError::UnknownSection(CONTACT.to_string()))
        );
        nav.apply(NavAction::ViewPackages(INVENTORY.to_string())).unwrap();
        assert_eq!(
            nav.apply(select(INVENTORY, "Premium")),
            Err(NavError::UnknownPackage {
                service: INVENTORY.to_string(),
                package: "Premium".to_string(),
            })
        );
        assert_eq!(names(&nav), vec![INTRO, SERVICES, INVENTORY]);
        assert_eq!(nav.selected_package(), None);
    }

    #[test]
    fn reducer_records_effect_and_revision() {
        let state = Rc::new(nav());
        let state = state.reduce(NavAction::Start);
        assert_eq!(state.effect(), &HistoryEffect::Push(Section::services()));
        assert_eq!(state.revision(), 1);

        let state = state.reduce(NavAction::BackToServices);
        assert_eq!(state.effect(), &HistoryEffect::None);
        assert_eq!(state.current().as_str(), SERVICES);
        assert_eq!(state.revision(), 2);
    }

    #[test]
    fn section_parse_checks_catalog() {
        let catalog = Catalog::builtin();
        assert!(Section::parse(SERVICES, &catalog).is_ok());
        assert!(Section::parse(INVENTORY, &catalog).unwrap().is_service());
        assert_eq!(
            Section::parse("Servicios", &catalog),
            Err(NavError::UnknownSection("Servicios".to_string()))
        );
    }
}

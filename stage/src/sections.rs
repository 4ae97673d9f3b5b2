//! Canonical section and legal page identifiers.
//!
//! The string forms are stable: they double as DOM ids, dot titles and route
//! segments, so they must never change independently of the markup.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unknown section or legal page id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown id `{0}`")]
pub struct UnknownId(pub String);

/// A content section of the landing page, in canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Services,
    Portfolio,
    Contact,
    About,
}

impl SectionId {
    pub const ALL: [SectionId; 5] =
        [SectionId::Home, SectionId::Services, SectionId::Portfolio, SectionId::Contact, SectionId::About];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Services => "services",
            Self::Portfolio => "portfolio",
            Self::Contact => "contact",
            Self::About => "about",
        }
    }

    /// Capitalised id, used for dot tooltips and nav link labels.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Services => "Services",
            Self::Portfolio => "Portfolio",
            Self::Contact => "Contact",
            Self::About => "About",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = UnknownId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|id| id.as_str() == s).ok_or_else(|| UnknownId(s.to_owned()))
    }
}

/// Static legal pages served on their own routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LegalPage {
    Impressum,
    Datenschutz,
    Disclaimer,
}

impl LegalPage {
    pub const ALL: [LegalPage; 3] = [LegalPage::Impressum, LegalPage::Datenschutz, LegalPage::Disclaimer];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Impressum => "impressum",
            Self::Datenschutz => "datenschutz",
            Self::Disclaimer => "disclaimer",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Impressum => "Impressum",
            Self::Datenschutz => "Datenschutzerklärung",
            Self::Disclaimer => "Disclaimer",
        }
    }

    /// Route path, e.g. `/impressum`.
    #[must_use]
    pub fn path(self) -> String {
        format!("/{}", self.as_str())
    }
}

impl fmt::Display for LegalPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LegalPage {
    type Err = UnknownId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|page| page.as_str() == s).ok_or_else(|| UnknownId(s.to_owned()))
    }
}

/// One rendered slot of the carousel track.
///
/// In loop mode the track carries a clone of the last section before the
/// first and a clone of the first after the last. A clone repeats the id of
/// its real section and only exists so the wraparound can animate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: SectionId,
    pub is_clone: bool,
}

impl SectionDescriptor {
    #[must_use]
    pub fn real(id: SectionId) -> Self {
        Self { id, is_clone: false }
    }

    #[must_use]
    pub fn clone_of(id: SectionId) -> Self {
        Self { id, is_clone: true }
    }

    /// DOM key for the slot. Clones get a suffix so keys stay unique.
    #[must_use]
    pub fn key(&self) -> String {
        if self.is_clone { format!("{}-clone", self.id) } else { self.id.as_str().to_owned() }
    }
}

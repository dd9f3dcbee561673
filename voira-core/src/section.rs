//! Named page anchors

use crate::error::LandingError;
use std::str::FromStr;
use strum::{Display, EnumIter, IntoStaticStr};

/// Sections that navigation buttons can scroll to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Section {
    WhoItsFor,
    HowItWorks,
    Benefits,
    Demo,
    Faq,
}

impl Section {
    /// Element identifier of the section
    pub fn anchor(self) -> &'static str {
        self.into()
    }
}

impl FromStr for Section {
    type Err = LandingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim_start_matches('#');
        <Section as strum::IntoEnumIterator>::iter()
            .find(|section| section.anchor() == id)
            .ok_or_else(|| LandingError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Section::WhoItsFor, "who-its-for")]
    #[case(Section::HowItWorks, "how-it-works")]
    #[case(Section::Benefits, "benefits")]
    #[case(Section::Demo, "demo")]
    #[case(Section::Faq, "faq")]
    fn test_anchor(#[case] section: Section, #[case] id: &str) {
        assert_eq!(section.anchor(), id);
        assert_eq!(section.to_string(), id);
        assert_eq!(id.parse::<Section>(), Ok(section));
    }

    #[test]
    fn test_hash_prefix_accepted() {
        assert_eq!("#faq".parse::<Section>(), Ok(Section::Faq));
    }

    #[test]
    fn test_unknown_section() {
        assert_eq!(
            "pricing".parse::<Section>(),
            Err(LandingError::UnknownSection("pricing".to_string()))
        );
    }
}

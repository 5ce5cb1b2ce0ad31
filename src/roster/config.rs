use derive_getters::Getters;

const DEFAULT_MEMBERSHIP_YEAR: &str = "MY2016";
const DEFAULT_PROGRAM: &str = "Area 1/C Spring Cup";

/// Season constants stamped on every player card.
/// The eAYSO export doesn't carry them, so they ride along as configuration.
#[derive(Debug, Getters, Clone, Eq, PartialEq)]
pub struct SeasonConfig {
    membership_year: String,
    program: String,
}

impl SeasonConfig {
    pub fn new(membership_year: String, program: String) -> Self {
        Self {
            membership_year,
            program,
        }
    }
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_MEMBERSHIP_YEAR.to_owned(),
            DEFAULT_PROGRAM.to_owned(),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::roster::config::SeasonConfig;

    #[test]
    fn should_default_to_built_season() {
        let season = SeasonConfig::default();

        assert_eq!("MY2016", season.membership_year());
        assert_eq!("Area 1/C Spring Cup", season.program());
    }
}

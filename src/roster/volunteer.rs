use crate::roster::error::RosterError;
use crate::roster::error::RosterError::{MissingColumn, WrongRegex};
use crate::roster::legacy_row::read_rows;
use derive_getters::Getters;
use log::debug;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Certification descriptions are matched case-sensitively, in this priority order.
const SAFE_HAVEN_KEYWORD: &str = "Safe Haven";
const CONCUSSION_KEYWORD: &str = "Concussion";
const COACH_KEYWORD: &str = "Coach";
/// The coach levels worth printing: `U-<digits>`, `Adv` or `Inter`.
const COACH_LEVEL_PATTERN: &str = "(U-\\d+|Adv|Inter)";

/// One volunteer, accumulated across however many certification rows share the AYSO ID.
#[derive(Debug, Default, Getters, Clone, Eq, PartialEq)]
pub struct VolunteerEntry {
    name: String,
    my: String,
    certs: BTreeSet<String>,
    sh: Option<String>,
    cdc: Option<String>,
}

/// A certification extracted from one roster row.
#[derive(Debug, Clone, Eq, PartialEq)]
enum Certification {
    SafeHaven(String),
    Concussion(String),
    CoachLevel(String),
}

/// Read a volunteer roster export into a map keyed by AYSO ID.
/// Rows sharing an ID accumulate coach certifications into a set; name and
/// membership year keep the last row's values. Unlike the player reader,
/// a row missing an expected column aborts the whole import.
pub fn import_from_file(path: &Path) -> Result<BTreeMap<String, VolunteerEntry>, RosterError> {
    let coach_level_regex = Regex::new(COACH_LEVEL_PATTERN).or(Err(WrongRegex))?;
    let mut volunteers: BTreeMap<String, VolunteerEntry> = BTreeMap::new();

    for (index, row) in read_rows(path)?.iter().enumerate() {
        let line = index + 2;
        let ayso_id = column(row, 0, line)?;
        let entry = volunteers.entry(ayso_id.clone()).or_default();
        entry.my = column(row, 19, line)?.trim().to_owned();
        entry.name = column(row, 1, line)?.clone();

        match extract_certification(row, &coach_level_regex, line)? {
            Some(Certification::SafeHaven(value)) => entry.sh = Some(value),
            Some(Certification::Concussion(value)) => entry.cdc = Some(value),
            Some(Certification::CoachLevel(level)) => {
                entry.certs.insert(level);
            }
            None => {}
        }
    }

    debug!("Read {} volunteer(s) from {path:?}.", volunteers.len());
    Ok(volunteers)
}

/// Decide which certification a row carries from the description in column 9.
/// Safe-haven and concussion rows both take their value from column 12; that is
/// how the upstream export is mapped. Coach rows capture the level token out of
/// the description itself; a coach description without a recognizable level
/// contributes nothing.
fn extract_certification(
    row: &[String],
    coach_level_regex: &Regex,
    line: usize,
) -> Result<Option<Certification>, RosterError> {
    let description = column(row, 9, line)?;
    if description.contains(SAFE_HAVEN_KEYWORD) {
        Ok(Some(Certification::SafeHaven(
            column(row, 12, line)?.clone(),
        )))
    } else if description.contains(CONCUSSION_KEYWORD) {
        Ok(Some(Certification::Concussion(
            column(row, 12, line)?.clone(),
        )))
    } else if description.contains(COACH_KEYWORD) {
        Ok(coach_level_regex
            .captures(description)
            .map(|captures| Certification::CoachLevel(captures[1].to_owned())))
    } else {
        Ok(None)
    }
}

fn column(row: &[String], index: usize, line: usize) -> Result<&String, RosterError> {
    row.get(index).ok_or(MissingColumn {
        line,
        column: index,
    })
}

#[cfg(test)]
pub mod tests {
    use crate::roster::error::RosterError::MissingColumn;
    use crate::roster::volunteer::{
        COACH_LEVEL_PATTERN, Certification, VolunteerEntry, column, extract_certification,
        import_from_file,
    };
    use crate::tools::test::tests::temp_dir;
    use parameterized::{ide, parameterized};
    use regex::Regex;
    use std::collections::BTreeSet;
    use std::fs;

    ide!();

    /// A 20-column row shaped like the eAYSO volunteer export.
    pub fn volunteer_row(ayso_id: &str, name: &str, description: &str, value: &str) -> Vec<String> {
        let mut row = vec![String::new(); 20];
        row[0] = ayso_id.to_owned();
        row[1] = name.to_owned();
        row[9] = description.to_owned();
        row[12] = value.to_owned();
        row[19] = " MY2016 ".to_owned();

        row
    }

    pub fn volunteer_line(ayso_id: &str, name: &str, description: &str, value: &str) -> String {
        volunteer_row(ayso_id, name, description, value).join(",")
    }

    fn coach_level_regex() -> Regex {
        Regex::new(COACH_LEVEL_PATTERN).unwrap()
    }

    // region extract_certification
    #[parameterized(
        description = {
            "AYSO's Safe Haven",
            "CDC Concussion Awareness",
            "U-10 Coach",
            "Advanced Coach Course",
            "Intermediate Coach",
            "Regional Referee"
        },
        expected_certification = {
            Some(Certification::SafeHaven("2016-01-05".to_owned())),
            Some(Certification::Concussion("2016-01-05".to_owned())),
            Some(Certification::CoachLevel("U-10".to_owned())),
            Some(Certification::CoachLevel("Adv".to_owned())),
            Some(Certification::CoachLevel("Inter".to_owned())),
            None
        }
    )]
    fn should_extract_certification(
        description: &str,
        expected_certification: Option<Certification>,
    ) {
        let row = volunteer_row("12345678", "Sam Yoder", description, "2016-01-05");

        let result = extract_certification(&row, &coach_level_regex(), 2).unwrap();

        assert_eq!(expected_certification, result);
    }

    #[test]
    fn should_extract_nothing_from_coach_row_without_level() {
        let row = volunteer_row("12345678", "Sam Yoder", "Coach of the year", "2016-01-05");

        let result = extract_certification(&row, &coach_level_regex(), 2).unwrap();

        assert_eq!(None, result);
    }

    #[test]
    fn should_prefer_safe_haven_rule_over_coach_rule() {
        let row = volunteer_row("12345678", "Sam Yoder", "Safe Haven for Coach", "2016-01-05");

        let result = extract_certification(&row, &coach_level_regex(), 2).unwrap();

        assert_eq!(
            Some(Certification::SafeHaven("2016-01-05".to_owned())),
            result
        );
    }

    #[test]
    fn should_match_keywords_case_sensitively() {
        let row = volunteer_row("12345678", "Sam Yoder", "safe haven", "2016-01-05");

        let result = extract_certification(&row, &coach_level_regex(), 2).unwrap();

        assert_eq!(None, result);
    }
    // endregion

    // region import_from_file
    #[test]
    fn should_accumulate_certifications_for_one_volunteer() {
        let dir = temp_dir("vols-accumulate");
        let file = dir.join("vols.csv");
        let content = format!(
            "header\n{}\n{}\n{}\n{}\n",
            volunteer_line("12345678", "Sam Yoder", "U-10 Coach", ""),
            volunteer_line("12345678", "Sam Yoder", "U-12 Coach", ""),
            volunteer_line("12345678", "Sam Yoder", "U-10 Coach", ""),
            volunteer_line("12345678", "Sam Yoder", "AYSO's Safe Haven", "2016-01-05"),
        );
        fs::write(&file, content).unwrap();

        let volunteers = import_from_file(&file).unwrap();

        assert_eq!(1, volunteers.len());
        let entry = volunteers.get("12345678").unwrap();
        assert_eq!("Sam Yoder", entry.name());
        assert_eq!("MY2016", entry.my());
        assert_eq!(
            &BTreeSet::from(["U-10".to_owned(), "U-12".to_owned()]),
            entry.certs()
        );
        assert_eq!(&Some("2016-01-05".to_owned()), entry.sh());
        assert_eq!(&None, entry.cdc());
    }

    #[test]
    fn should_keep_last_row_values_for_name_and_membership_year() {
        let dir = temp_dir("vols-last-wins");
        let file = dir.join("vols.csv");
        let first = volunteer_line("12345678", "Sam Yoder", "U-10 Coach", "");
        let mut second_row = volunteer_row(
            "12345678",
            "Samuel Yoder",
            "CDC Concussion Awareness",
            "2016-02-01",
        );
        second_row[19] = "MY2017".to_owned();
        let content = format!("header\n{}\n{}\n", first, second_row.join(","));
        fs::write(&file, content).unwrap();

        let volunteers = import_from_file(&file).unwrap();

        let entry = volunteers.get("12345678").unwrap();
        assert_eq!("Samuel Yoder", entry.name());
        assert_eq!("MY2017", entry.my());
        assert_eq!(&Some("2016-02-01".to_owned()), entry.cdc());
    }

    #[test]
    fn should_overwrite_safe_haven_value_with_last_matching_row() {
        let dir = temp_dir("vols-sh-overwrite");
        let file = dir.join("vols.csv");
        let content = format!(
            "header\n{}\n{}\n",
            volunteer_line("12345678", "Sam Yoder", "AYSO's Safe Haven", "2015-11-30"),
            volunteer_line("12345678", "Sam Yoder", "AYSO's Safe Haven", "2016-01-05"),
        );
        fs::write(&file, content).unwrap();

        let volunteers = import_from_file(&file).unwrap();

        assert_eq!(
            &Some("2016-01-05".to_owned()),
            volunteers.get("12345678").unwrap().sh()
        );
    }

    #[test]
    fn should_import_several_volunteers() {
        let dir = temp_dir("vols-several");
        let file = dir.join("vols.csv");
        let content = format!(
            "header\n{}\n{}\n",
            volunteer_line("87654321", "Dana Cruz", "Advanced Coach Course", ""),
            volunteer_line("12345678", "Sam Yoder", "AYSO's Safe Haven", "2016-01-05"),
        );
        fs::write(&file, content).unwrap();

        let volunteers = import_from_file(&file).unwrap();

        assert_eq!(
            vec!["12345678", "87654321"],
            volunteers.keys().collect::<Vec<_>>()
        );
        assert_eq!(
            &BTreeSet::from(["Adv".to_owned()]),
            volunteers.get("87654321").unwrap().certs()
        );
    }

    #[test]
    fn should_abort_import_on_short_row() {
        let dir = temp_dir("vols-short-row");
        let file = dir.join("vols.csv");
        fs::write(&file, "header\n12345678,Sam Yoder,too short\n").unwrap();

        let result = import_from_file(&file);

        assert!(matches!(
            result,
            Err(MissingColumn { line: 2, column: 19 })
        ));
    }
    // endregion

    // region column
    #[test]
    fn should_read_column() {
        let row = vec!["a".to_owned(), "b".to_owned()];

        assert_eq!("b", column(&row, 1, 2).unwrap());
    }

    #[test]
    fn should_not_read_column_out_of_range() {
        let row = vec!["a".to_owned()];

        let result = column(&row, 12, 3);

        assert!(matches!(
            result,
            Err(MissingColumn { line: 3, column: 12 })
        ));
    }
    // endregion

    /// The entry a safe-haven row and a U-10 coach row accumulate into,
    /// for other modules to assert against.
    pub fn expected_volunteer_entry(name: &str) -> VolunteerEntry {
        VolunteerEntry {
            name: name.to_owned(),
            my: "MY2016".to_owned(),
            certs: BTreeSet::from(["U-10".to_owned()]),
            sh: Some("2016-01-05".to_owned()),
            cdc: None,
        }
    }
}

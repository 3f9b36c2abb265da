use anyhow::{Context, Result, bail};
use chrono::{Datelike, Months, NaiveDate};
use uuid::Uuid;

pub const DEFAULT_AVATAR_BASE: &str = "https://robohash.org/";
pub const DOB_FORMAT: &str = "%Y-%m-%d";

const SAMPLE_PEOPLE: [(&str, &str, &str); 2] = [
    ("Fast Nguyen", "fast.nguyen@work.com", "1995-08-26"),
    ("Andrew Jackson", "andrew.jackson@work.com", "1990-01-12"),
];

#[derive(Debug, Clone)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub dob: NaiveDate,
}

impl Person {
    /// Builds a person with a fresh id. `dob` must be a `YYYY-MM-DD` date.
    pub fn new(name: &str, email: &str, dob: &str) -> Result<Self> {
        let dob = NaiveDate::parse_from_str(dob, DOB_FORMAT)
            .with_context(|| format!("Invalid date of birth {dob:?} for {name}"))?;

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            dob,
        })
    }

    /// Whole years completed between the date of birth and `today`.
    pub fn age_on(&self, today: NaiveDate) -> Result<u32> {
        if self.dob > today {
            bail!(
                "Date of birth {} of {} is in the future",
                self.dob.format(DOB_FORMAT),
                self.name
            );
        }

        // Month arithmetic clamps to the end of the month, so a Feb 29 birthday
        // completes a year on Feb 28 of a non-leap year
        let mut years = (today.year() - self.dob.year()) as u32;
        let anniversary = self
            .dob
            .checked_add_months(Months::new(12 * years))
            .context("Anniversary date out of range")?;
        if anniversary > today {
            years -= 1;
        }

        Ok(years)
    }

    pub fn avatar_url(&self, base: &str) -> String {
        format!("{}{}", base, self.id)
    }
}

pub fn sample_people() -> Result<Vec<Person>> {
    SAMPLE_PEOPLE
        .iter()
        .map(|(name, email, dob)| Person::new(name, email, dob))
        .collect()
}

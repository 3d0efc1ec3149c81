//! Form-level flow: validate the raw inputs, run the calculator and the
//! converter, and hold everything the result panel needs.

use chrono::{Months, NaiveDate};
use tracing::{info, warn};

use crate::age::{AgeResult, compute_age, parse_birth_date};
use crate::convert::human_age;
use crate::error::AgeError;
use crate::prefs::{PreferenceStore, Preferences};
use crate::table::{LARGE_CAP_AGE, SizeCategory};

/// Age pre-filled on first use.
pub const DEFAULT_AGE_YEARS: u32 = 3;

pub const LARGE_CAP_NOTE: &str =
    "* Past 17 years a large dog's human-equivalent age exceeds 120; the table stops there.";

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub birth: NaiveDate,
    pub reference: NaiveDate,
    pub category: SizeCategory,
    pub age: AgeResult,
    /// Tabulated value on a checkpoint hit (may be 7.5), otherwise whole years.
    pub human_age: f64,
}

impl Report {
    pub fn calculate(
        birth_input: &str,
        category_input: &str,
        reference: NaiveDate,
    ) -> Result<Self, AgeError> {
        if birth_input.trim().is_empty() {
            return Err(AgeError::EmptyBirthDate);
        }
        let birth = parse_birth_date(birth_input)?;
        let age = compute_age(birth, reference);
        if age.is_before_birth() {
            return Err(AgeError::FutureDate { birth, reference });
        }
        let category: SizeCategory = category_input.parse()?;
        let human_age = human_age(age.total_years(), category);

        info!(
            %birth,
            %category,
            years = age.years,
            months = age.months,
            human_age,
            "computed human-equivalent age"
        );

        Ok(Self {
            birth,
            reference,
            category,
            age,
            human_age,
        })
    }

    /// "Y years M months", dropping the years part under one year.
    pub fn dog_age_display(&self) -> String {
        let months = format!("{} month{}", self.age.months, plural(self.age.months));
        if self.age.years > 0 {
            format!("{} year{} {months}", self.age.years, plural(self.age.years))
        } else {
            months
        }
    }

    pub fn cap_note(&self) -> Option<&'static str> {
        (self.category == SizeCategory::Large && self.human_age == LARGE_CAP_AGE)
            .then_some(LARGE_CAP_NOTE)
    }
}

/// What one run of the form produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Computed(Report),
    /// Input the user has to correct. Stored preferences were left alone.
    Rejected(AgeError),
}

/// One submission of the form: explicit arguments win over stored values,
/// a first run falls back to a dog born three years before `today`, and the
/// inputs are remembered only when the calculation succeeds.
///
/// A bad category typed by the user is rejected like any other input. A bad
/// category read back from the store is an error.
pub fn run(
    store: &mut dyn PreferenceStore,
    birth_arg: Option<String>,
    category_arg: Option<String>,
    today: NaiveDate,
) -> anyhow::Result<Outcome> {
    let stored = Preferences::load(store)?;

    let birth_input = match birth_arg {
        Some(arg) => arg,
        None if stored.is_first_use() => {
            let default = default_birth_date(today);
            info!(%default, "no stored birth date, using default");
            default.to_string()
        }
        None => stored.birth_date.unwrap_or_default(),
    };
    let category_typed = category_arg.is_some();
    let category_input = category_arg
        .or(stored.category)
        .unwrap_or_else(|| SizeCategory::Small.to_string());

    match Report::calculate(&birth_input, &category_input, today) {
        Ok(report) => {
            Preferences {
                birth_date: Some(report.birth.to_string()),
                category: Some(report.category.to_string()),
            }
            .save(store)?;
            Ok(Outcome::Computed(report))
        }
        Err(err) if err.is_user_error() || category_typed => {
            warn!(%err, "rejected input");
            Ok(Outcome::Rejected(err))
        }
        Err(err) => Err(anyhow::Error::new(err).context("Stored size category is invalid")),
    }
}

/// Birth date offered when nothing has been stored yet.
pub fn default_birth_date(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(DEFAULT_AGE_YEARS * 12))
        .unwrap_or(today)
}

fn plural(n: i32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

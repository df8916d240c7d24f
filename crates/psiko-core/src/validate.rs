//! Biodata validation.
//!
//! Runs once, after the last biodata field is collected and before anything
//! is persisted. Invalid biodata aborts the in-progress profile; values are
//! never silently corrected.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::models::biodata::{Biodata, BiodataField};

/// Indonesian mobile numbers: 08 / 628 / +628 prefix, 10–15 digits total.
/// Dashes and spaces are stripped before matching.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(08|\+628|628)\d{8,15}$").expect("phone regex"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email regex")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate accumulated biodata. Email is validated separately at account
/// creation and is not required here.
pub fn validate_biodata(biodata: &Biodata) -> Result<(), ValidationError> {
    for field in BiodataField::ALL {
        if field == BiodataField::Email {
            continue;
        }
        if field.applies(biodata) && !biodata.contains_key(field.key()) {
            return Err(ValidationError::MissingField(field.key()));
        }
    }

    let no_wa = biodata
        .get(BiodataField::NoWa.key())
        .ok_or(ValidationError::MissingField("no_wa"))?;
    let normalized: String = no_wa.chars().filter(|c| *c != '-' && *c != ' ').collect();
    if !PHONE_RE.is_match(&normalized) {
        return Err(ValidationError::InvalidPhone);
    }

    let usia = biodata
        .get(BiodataField::Usia.key())
        .ok_or(ValidationError::MissingField("usia"))?;
    let usia: i32 = usia
        .trim()
        .parse()
        .map_err(|_| ValidationError::AgeNotNumeric)?;
    if !(18..=65).contains(&usia) {
        return Err(ValidationError::AgeOutOfRange);
    }

    if biodata.get(BiodataField::JenisKelamin.key()).map(String::as_str) == Some("Laki-laki")
        && biodata
            .get(BiodataField::StatusKehamilan.key())
            .map(String::as_str)
            == Some("Ya")
    {
        return Err(ValidationError::MalePregnancy);
    }

    Ok(())
}

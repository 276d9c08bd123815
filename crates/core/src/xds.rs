//! Parsing of XDW workflow keys and XDS author fields.

use crate::constants::{HL7_COMPONENT_SEPARATOR, NHS_ID_LEN};
use serde::{Deserialize, Serialize};

/// A workflow key split into its pathway and NHS number.
///
/// Keys are the pathway name with the patient's 10-digit NHS number appended, e.g.
/// `POSTNATAL9999999468`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XdwKey {
    pub pathway: String,
    pub nhs_id: String,
}

/// Splits `key` into pathway and NHS number.
///
/// The NHS number is the trailing 10 characters. A key of 10 characters or fewer has no pathway
/// and yields an empty [`XdwKey`].
pub fn split_xdw_key(key: &str) -> XdwKey {
    let len = key.chars().count();
    if len <= NHS_ID_LEN {
        tracing::debug!("XDW key '{}' too short to split", key);
        return XdwKey::default();
    }

    let split_at = key
        .char_indices()
        .nth(len - NHS_ID_LEN)
        .map_or(key.len(), |(i, _)| i);
    let (pathway, nhs_id) = key.split_at(split_at);
    tracing::debug!("Pathway = {} NHS ID = {}", pathway, nhs_id);

    XdwKey {
        pathway: pathway.to_owned(),
        nhs_id: nhs_id.to_owned(),
    }
}

/// Returns the organisation name from an XON value, followed by a comma.
///
/// `"Leeds Teaching Hospitals^^^^^^^^^RR8"` becomes `"Leeds Teaching Hospitals,"`. Values without
/// a component separator are returned unchanged.
pub fn pretty_author_institution(institution: &str) -> String {
    match institution.split_once(HL7_COMPONENT_SEPARATOR) {
        Some((name, _)) => format!("{},", name),
        None => institution.to_owned(),
    }
}

/// Returns `"<family> <given>"` from an XCN value.
///
/// `"C1234^Smith^John^^^Dr"` becomes `"Smith John"`. With only an id and family name the family
/// name is returned alone. Values without a component separator are returned unchanged.
pub fn pretty_author_person(author: &str) -> String {
    if !author.contains(HL7_COMPONENT_SEPARATOR) {
        return author.to_owned();
    }

    let mut components = author.split(HL7_COMPONENT_SEPARATOR).skip(1);
    match (components.next(), components.next()) {
        (Some(family), Some(given)) => format!("{} {}", family, given),
        (Some(family), None) => family.to_owned(),
        _ => author.to_owned(),
    }
}

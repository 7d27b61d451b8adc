// SPDX-License-Identifier: MPL-2.0
//! Patient records table.
//!
//! Rows are built from [`PatientRecord`]s as structured nodes, so names and
//! symptoms are escaped like any other text. Status badges are tagged with
//! their label key and localized by [`localize_statuses`] on every render
//! pass.

use super::design_tokens::{button, icon as icon_tokens, table};
use super::pages::icon;
use crate::dom::{Document, Element, Node, Selector};
use crate::domain::{PatientRecord, PatientStatus};
use crate::i18n::{Dictionary, StaticKey, TranslationKey};

/// Table body receiving the rows.
pub const RECORDS_ID: &str = "patient-records";

/// Attribute on each badge naming its label key.
pub const STATUS_ATTRIBUTE: &str = "data-status";

const STATUSES: [PatientStatus; 4] = [
    PatientStatus::UnderObservation,
    PatientStatus::Critical,
    PatientStatus::Stable,
    PatientStatus::Discharged,
];

fn row(record: &PatientRecord) -> Element {
    let cell = |class: &str, content: &str| Element::new("td").class(class).text(content);
    let status_key = StaticKey::for_status(record.status);

    Element::new("tr")
        .class(table::ROW)
        .attr("data-patient", &record.id)
        .child(cell(table::CELL, &record.id))
        .child(cell(table::NAME_CELL, &record.name))
        .child(cell(table::CELL, &record.age.to_string()))
        .child(cell(table::CELL, &record.symptoms))
        .child(
            Element::new("td").class(table::CELL).child(
                Element::new("span")
                    .class(&format!("{} {}", table::BADGE, record.status.color().badge_classes()))
                    .attr(STATUS_ATTRIBUTE, status_key.id()),
            ),
        )
        .child(
            Element::new("td").class(table::CELL).child(
                Element::new("button")
                    .class(button::ROW_ACTION)
                    .child(icon("eye", icon_tokens::SMALL)),
            ),
        )
}

/// Replaces the table rows with `records`. Returns `false` when the page has
/// no records table.
pub fn populate(document: &mut Document, records: &[PatientRecord]) -> bool {
    let rows: Vec<Node> = records.iter().map(|record| Node::from(row(record))).collect();
    document.set_children(&Selector::id(RECORDS_ID), rows)
}

/// Writes the localized label into every status badge.
///
/// A status whose label is missing keeps its previous text.
pub fn localize_statuses(document: &mut Document, dictionary: &Dictionary) -> usize {
    let mut written = 0;
    for status in STATUSES {
        let key = StaticKey::for_status(status);
        let label = match dictionary.lookup(&TranslationKey::Static(key)) {
            Ok(label) => label,
            Err(err) => {
                tracing::warn!("{}", err);
                continue;
            }
        };
        written += document.for_each_mut(&Selector::attr(STATUS_ATTRIBUTE, key.id()), |badge| {
            badge.set_text(&label);
        });
    }
    written
}

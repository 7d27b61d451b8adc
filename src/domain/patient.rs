// SPDX-License-Identifier: MPL-2.0
//! Patient records shown on the dashboard.

/// Triage status of a patient record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientStatus {
    UnderObservation,
    Critical,
    Stable,
    Discharged,
}

impl PatientStatus {
    /// Badge colour family used to style the status.
    #[must_use]
    pub fn color(self) -> StatusColor {
        match self {
            PatientStatus::UnderObservation => StatusColor::Yellow,
            PatientStatus::Critical => StatusColor::Red,
            PatientStatus::Stable => StatusColor::Green,
            PatientStatus::Discharged => StatusColor::Blue,
        }
    }
}

/// Colour family of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Yellow,
    Red,
    Green,
    Blue,
}

impl StatusColor {
    /// Utility classes for the badge in both light and dark themes.
    #[must_use]
    pub fn badge_classes(self) -> &'static str {
        match self {
            StatusColor::Yellow => {
                "bg-yellow-100 text-yellow-800 dark:bg-yellow-900/50 dark:text-yellow-300"
            }
            StatusColor::Red => "bg-red-100 text-red-800 dark:bg-red-900/50 dark:text-red-300",
            StatusColor::Green => {
                "bg-green-100 text-green-800 dark:bg-green-900/50 dark:text-green-300"
            }
            StatusColor::Blue => "bg-blue-100 text-blue-800 dark:bg-blue-900/50 dark:text-blue-300",
        }
    }
}

/// A single row of the patient table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientRecord {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub symptoms: String,
    pub status: PatientStatus,
}

impl PatientRecord {
    fn new(id: &str, name: &str, age: u8, symptoms: &str, status: PatientStatus) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            age,
            symptoms: symptoms.to_string(),
            status,
        }
    }
}

/// Sample records displayed until the dashboard is wired to a data source.
#[must_use]
pub fn mock_patients() -> Vec<PatientRecord> {
    use PatientStatus::*;
    vec![
        PatientRecord::new("P001", "Anjali Das", 34, "Fever, Dehydration", UnderObservation),
        PatientRecord::new("P002", "Bikram Singh", 45, "Severe Diarrhea", Critical),
        PatientRecord::new("P003", "Chandra Rai", 28, "Mild Stomach Cramps", Stable),
        PatientRecord::new("P004", "Deepa Gurung", 52, "Vomiting, Weakness", UnderObservation),
        PatientRecord::new("P005", "Eshaan Chettri", 19, "Recovered", Discharged),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_data_has_five_unique_ids() {
        let patients = mock_patients();
        assert_eq!(patients.len(), 5);
        let ids: std::collections::HashSet<_> = patients.iter().map(|p| &p.id).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn critical_patients_are_red() {
        assert_eq!(PatientStatus::Critical.color(), StatusColor::Red);
        assert!(StatusColor::Red.badge_classes().contains("bg-red-100"));
    }
}

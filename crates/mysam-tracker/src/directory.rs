//! The rep's doctor directory with search and status filtering.

use serde::{Deserialize, Serialize};

use mysam_core::{Doctor, DoctorStatus};

/// Counts backing the status filter chips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryCounts {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    pub inactive: usize,
}

/// Doctors in the rep's territory.
#[derive(Clone, Debug, Default)]
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
}

impl DoctorDirectory {
    pub fn new(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }

    /// The built-in territory dataset.
    pub fn sample() -> Self {
        Self::new(vec![
            Doctor {
                id: 1,
                name: "Dr. Sarah Johnson".to_string(),
                specialty: "Cardiology".to_string(),
                organization: "City Hospital".to_string(),
                phone: "+1 234-567-8901".to_string(),
                email: "sarah.j@cityhospital.com".to_string(),
                last_visit: "2024-01-15".to_string(),
                status: DoctorStatus::Active,
            },
            Doctor {
                id: 2,
                name: "Dr. Michael Chen".to_string(),
                specialty: "Neurology".to_string(),
                organization: "Metro Medical Center".to_string(),
                phone: "+1 234-567-8902".to_string(),
                email: "mchen@metromedical.com".to_string(),
                last_visit: "2024-01-14".to_string(),
                status: DoctorStatus::Active,
            },
            Doctor {
                id: 3,
                name: "Dr. Emily Rodriguez".to_string(),
                specialty: "Pediatrics".to_string(),
                organization: "Children's Hospital".to_string(),
                phone: "+1 234-567-8903".to_string(),
                email: "e.rodriguez@childrens.com".to_string(),
                last_visit: "2024-01-10".to_string(),
                status: DoctorStatus::Pending,
            },
            Doctor {
                id: 4,
                name: "Dr. James Wilson".to_string(),
                specialty: "Orthopedics".to_string(),
                organization: "Sports Medicine Clinic".to_string(),
                phone: "+1 234-567-8904".to_string(),
                email: "jwilson@sportsmed.com".to_string(),
                last_visit: "2024-01-08".to_string(),
                status: DoctorStatus::Active,
            },
            Doctor {
                id: 5,
                name: "Dr. Lisa Anderson".to_string(),
                specialty: "Oncology".to_string(),
                organization: "Cancer Treatment Center".to_string(),
                phone: "+1 234-567-8905".to_string(),
                email: "landerson@cancercenter.com".to_string(),
                last_visit: "2023-12-20".to_string(),
                status: DoctorStatus::Inactive,
            },
        ])
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    /// Search by free text and optional status filter.
    ///
    /// The query matches case-insensitively as a substring of name,
    /// specialty, or organization. Both predicates must hold; an empty
    /// result set is a normal outcome, not an error.
    pub fn search(&self, query: &str, status: Option<DoctorStatus>) -> Vec<&Doctor> {
        let needle = query.to_lowercase();
        self.doctors
            .iter()
            .filter(|doctor| {
                let matches_query = needle.is_empty()
                    || doctor.name.to_lowercase().contains(&needle)
                    || doctor.specialty.to_lowercase().contains(&needle)
                    || doctor.organization.to_lowercase().contains(&needle);
                let matches_status = status.map_or(true, |s| doctor.status == s);
                matches_query && matches_status
            })
            .collect()
    }

    /// Per-status totals for the filter chips.
    pub fn status_counts(&self) -> DirectoryCounts {
        let mut counts = DirectoryCounts {
            total: self.doctors.len(),
            ..Default::default()
        };
        for doctor in &self.doctors {
            match doctor.status {
                DoctorStatus::Active => counts.active += 1,
                DoctorStatus::Pending => counts.pending += 1,
                DoctorStatus::Inactive => counts.inactive += 1,
            }
        }
        counts
    }
}

// =============================================================================
// Tests
// =============================================================================

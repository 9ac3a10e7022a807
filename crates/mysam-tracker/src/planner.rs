//! The day's scheduled visit list.

use serde::{Deserialize, Serialize};

use mysam_core::{ScheduledVisit, VisitStatus};

/// Counts for the planner's summary cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub cancelled: usize,
}

/// Scheduled visits for a single day, in schedule order.
#[derive(Clone, Debug, Default)]
pub struct VisitPlanner {
    visits: Vec<ScheduledVisit>,
}

impl VisitPlanner {
    pub fn new(visits: Vec<ScheduledVisit>) -> Self {
        Self { visits }
    }

    /// The built-in day schedule.
    pub fn sample() -> Self {
        Self::new(vec![
            ScheduledVisit {
                id: 1,
                doctor_name: "Dr. Sarah Johnson".to_string(),
                specialty: "Cardiology".to_string(),
                time: "09:00 AM".to_string(),
                location: "City Hospital, Building A".to_string(),
                status: VisitStatus::Completed,
                phone: "+1 234-567-8901".to_string(),
                email: "sarah.j@cityhospital.com".to_string(),
            },
            ScheduledVisit {
                id: 2,
                doctor_name: "Dr. Michael Chen".to_string(),
                specialty: "Neurology".to_string(),
                time: "11:30 AM".to_string(),
                location: "Metro Medical Center".to_string(),
                status: VisitStatus::Completed,
                phone: "+1 234-567-8902".to_string(),
                email: "mchen@metromedical.com".to_string(),
            },
            ScheduledVisit {
                id: 3,
                doctor_name: "Dr. Emily Rodriguez".to_string(),
                specialty: "Pediatrics".to_string(),
                time: "02:30 PM".to_string(),
                location: "Children's Hospital".to_string(),
                status: VisitStatus::Pending,
                phone: "+1 234-567-8903".to_string(),
                email: "e.rodriguez@childrens.com".to_string(),
            },
            ScheduledVisit {
                id: 4,
                doctor_name: "Dr. James Wilson".to_string(),
                specialty: "Orthopedics".to_string(),
                time: "04:00 PM".to_string(),
                location: "Sports Medicine Clinic".to_string(),
                status: VisitStatus::Pending,
                phone: "+1 234-567-8904".to_string(),
                email: "jwilson@sportsmed.com".to_string(),
            },
            ScheduledVisit {
                id: 5,
                doctor_name: "Dr. Lisa Anderson".to_string(),
                specialty: "Oncology".to_string(),
                time: "05:30 PM".to_string(),
                location: "Cancer Treatment Center".to_string(),
                status: VisitStatus::Pending,
                phone: "+1 234-567-8905".to_string(),
                email: "landerson@cancercenter.com".to_string(),
            },
        ])
    }

    pub fn visits(&self) -> &[ScheduledVisit] {
        &self.visits
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Append a visit, assigning it the next free id.
    pub fn add_visit(&mut self, mut visit: ScheduledVisit) -> u32 {
        let id = self.visits.iter().map(|v| v.id).max().unwrap_or(0) + 1;
        visit.id = id;
        tracing::info!(visit_id = id, doctor = %visit.doctor_name, "Visit added to planner");
        self.visits.push(visit);
        id
    }

    /// Mark a pending visit completed. Returns false when the id is unknown
    /// or the visit is not pending.
    pub fn complete_visit(&mut self, id: u32) -> bool {
        self.transition(id, VisitStatus::Completed)
    }

    /// Cancel a pending visit. Returns false when the id is unknown or the
    /// visit is not pending.
    pub fn cancel_visit(&mut self, id: u32) -> bool {
        self.transition(id, VisitStatus::Cancelled)
    }

    fn transition(&mut self, id: u32, to: VisitStatus) -> bool {
        match self
            .visits
            .iter_mut()
            .find(|v| v.id == id && v.status == VisitStatus::Pending)
        {
            Some(visit) => {
                visit.status = to;
                true
            }
            None => false,
        }
    }

    /// Counts for the Total / Done / Pending summary cards.
    pub fn summary(&self) -> PlannerSummary {
        let mut summary = PlannerSummary {
            total: self.visits.len(),
            ..Default::default()
        };
        for visit in &self.visits {
            match visit.status {
                VisitStatus::Completed => summary.completed += 1,
                VisitStatus::Pending => summary.pending += 1,
                VisitStatus::Cancelled => summary.cancelled += 1,
            }
        }
        summary
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn visit(doctor_name: &str) -> ScheduledVisit {
        ScheduledVisit {
            id: 0,
            doctor_name: doctor_name.to_string(),
            specialty: "General".to_string(),
            time: "10:00 AM".to_string(),
            location: "Clinic".to_string(),
            status: VisitStatus::Pending,
            phone: String::new(),
            email: String::new(),
        }
    }

    #[test]
    fn test_sample_summary() {
        let summary = VisitPlanner::sample().summary();
        assert_eq!(
            summary,
            PlannerSummary {
                total: 5,
                completed: 2,
                pending: 3,
                cancelled: 0,
            }
        );
    }

    #[test]
    fn test_add_visit_assigns_next_id() {
        let mut planner = VisitPlanner::sample();
        let id = planner.add_visit(visit("Dr. New"));
        assert_eq!(id, 6);
        assert_eq!(planner.len(), 6);
        assert_eq!(planner.visits().last().map(|v| v.id), Some(6));
    }

    #[test]
    fn test_add_to_empty_planner_starts_at_one() {
        let mut planner = VisitPlanner::default();
        assert_eq!(planner.add_visit(visit("Dr. First")), 1);
    }

    #[test]
    fn test_complete_pending_visit() {
        let mut planner = VisitPlanner::sample();
        assert!(planner.complete_visit(3));
        assert_eq!(planner.summary().completed, 3);
        // Already completed; not pending anymore.
        assert!(!planner.complete_visit(3));
    }

    #[test]
    fn test_cancel_pending_visit() {
        let mut planner = VisitPlanner::sample();
        assert!(planner.cancel_visit(4));
        let summary = planner.summary();
        assert_eq!(summary.cancelled, 1);
        assert_eq!(summary.pending, 2);
    }

    #[test]
    fn test_transition_unknown_id_is_false() {
        let mut planner = VisitPlanner::sample();
        assert!(!planner.complete_visit(99));
        // Completed visits cannot be cancelled.
        assert!(!planner.cancel_visit(1));
    }
}

//! Summary metrics over a set of surveys

use formcraft_core::Status;

use crate::model::Survey;

/// Dashboard counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurveyStats {
    pub total: usize,
    /// Published surveys
    pub active: usize,
    pub drafts: usize,
    pub closed: usize,
    pub total_responses: u64,
}

impl SurveyStats {
    pub fn collect<'a>(surveys: impl IntoIterator<Item = &'a Survey>) -> Self {
        surveys.into_iter().fold(Self::default(), |mut stats, survey| {
            stats.total += 1;
            match survey.status {
                Status::Draft => stats.drafts += 1,
                Status::Published => stats.active += 1,
                Status::Closed => stats.closed += 1,
            }
            stats.total_responses += u64::from(survey.response_count);
            stats
        })
    }

    /// Mean responses per survey, zero when there are none
    pub fn average_responses(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.total_responses as f64 / self.total as f64
    }
}

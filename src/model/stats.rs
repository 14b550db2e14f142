//! Read-only aggregate views produced by the analytics endpoint. Consumed
//! only for display.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusPercentages {
    pub pending: f64,
    pub approved: f64,
    pub rejected: f64,
}

/// Counts and percentages for one submission type (or the combined total).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
    pub total: u64,
    pub percentages: StatusPercentages,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubmissionStats {
    pub leave: StatusBreakdown,
    pub resignation: StatusBreakdown,
    pub total: StatusBreakdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendCounts {
    pub total: u64,
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
}

/// One month in the time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub year: i32,
    pub month: u32,
    pub leave: TrendCounts,
    pub resignation: TrendCounts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionTrend {
    pub trend: Vec<TrendPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_stats_payload() {
        let stats: SubmissionStats = serde_json::from_value(json!({
            "leave": {
                "pending": 3, "approved": 5, "rejected": 2, "total": 10,
                "percentages": {"pending": 30.0, "approved": 50.0, "rejected": 20.0}
            },
            "resignation": {
                "pending": 1, "approved": 0, "rejected": 1, "total": 2,
                "percentages": {"pending": 50.0, "approved": 0.0, "rejected": 50.0}
            },
            "total": {
                "pending": 4, "approved": 5, "rejected": 3, "total": 12,
                "percentages": {"pending": 33.3, "approved": 41.7, "rejected": 25.0}
            }
        }))
        .unwrap();

        assert_eq!(stats.leave.approved, 5);
        assert_eq!(stats.total.total, 12);
        assert_eq!(stats.resignation.percentages.pending, 50.0);
    }

    #[test]
    fn reads_trend_payload() {
        let trend: SubmissionTrend = serde_json::from_value(json!({
            "trend": [{
                "year": 2026,
                "month": 6,
                "leave": {"total": 4, "pending": 1, "approved": 2, "rejected": 1},
                "resignation": {"total": 1, "pending": 1, "approved": 0, "rejected": 0}
            }]
        }))
        .unwrap();

        assert_eq!(trend.trend.len(), 1);
        assert_eq!(trend.trend[0].month, 6);
        assert_eq!(trend.trend[0].leave.approved, 2);
    }
}

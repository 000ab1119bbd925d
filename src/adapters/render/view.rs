//! Pure projection from the stored result to what the screen shows.

use crate::domain::ResultState;
use chrono::{DateTime, Utc};

/// Slice colors of the proportion chart, in slice order.
pub const SLICE_COLORS: [(u8, u8, u8); 2] = [(0x88, 0x84, 0xd8), (0x82, 0xca, 0x9d)];

/// One "label: score (percent%)" line.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    pub label: &'static str,
    pub score: f64,
    pub percent: f64,
}

/// One slice of the two-slice proportion chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub name: &'static str,
    pub value: f64,
    pub color: (u8, u8, u8),
}

/// Display model of an analysis result.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub wellness_level: String,
    pub rows: [ScoreRow; 2],
    pub chart: [ChartSlice; 2],
    pub recommendations: Vec<String>,
    /// `None` when the service sent no links; the links section is then hidden.
    pub resources: Option<Vec<String>>,
    pub analyzed_at: DateTime<Utc>,
}

/// Project the result slot. `None` while no analysis has succeeded.
pub fn project(state: &ResultState) -> Option<ResultView> {
    let stored = state.stored()?;
    let r = &stored.result;
    Some(ResultView {
        wellness_level: r.wellness_level.clone(),
        rows: [
            ScoreRow {
                label: "Depression",
                score: r.depression_score,
                percent: r.depression_percent,
            },
            ScoreRow {
                label: "Loneliness",
                score: r.loneliness_score,
                percent: r.loneliness_percent,
            },
        ],
        chart: [
            ChartSlice {
                name: "Depression",
                value: r.depression_percent,
                color: SLICE_COLORS[0],
            },
            ChartSlice {
                name: "Loneliness",
                value: r.loneliness_percent,
                color: SLICE_COLORS[1],
            },
        ],
        recommendations: r.recommendations.clone(),
        resources: (!r.resources.is_empty()).then(|| r.resources.clone()),
        analyzed_at: stored.analyzed_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StoredResult, WellnessResult};
    use pretty_assertions::assert_eq;

    fn stored(resources: Vec<String>, recommendations: Vec<String>) -> ResultState {
        ResultState::Present(StoredResult {
            result: WellnessResult {
                wellness_level: "Good".to_string(),
                depression_score: 2.0,
                depression_percent: 20.0,
                loneliness_score: 1.0,
                loneliness_percent: 10.0,
                recommendations,
                resources,
            },
            analyzed_at: Utc::now(),
            request_id: 7,
        })
    }

    #[test]
    fn test_absent_projects_to_none() {
        assert_eq!(project(&ResultState::Absent), None);
    }

    #[test]
    fn test_rows_and_chart() {
        let view = project(&stored(Vec::new(), vec!["Sleep more".to_string()])).unwrap();
        assert_eq!(view.wellness_level, "Good");
        assert_eq!(view.rows[0].label, "Depression");
        assert_eq!(view.rows[0].score, 2.0);
        assert_eq!(view.rows[1].percent, 10.0);
        assert_eq!(
            view.chart
                .iter()
                .map(|s| (s.name, s.value))
                .collect::<Vec<_>>(),
            vec![("Depression", 20.0), ("Loneliness", 10.0)]
        );
        assert_eq!(view.recommendations, vec!["Sleep more".to_string()]);
    }

    #[test]
    fn test_empty_resources_hidden() {
        let view = project(&stored(Vec::new(), Vec::new())).unwrap();
        assert_eq!(view.resources, None);
        assert!(view.recommendations.is_empty());
    }

    #[test]
    fn test_resources_kept_in_order() {
        let links = vec![
            "https://www.meetup.com/".to_string(),
            "https://www.unv.org/".to_string(),
        ];
        let view = project(&stored(links.clone(), Vec::new())).unwrap();
        assert_eq!(view.resources, Some(links));
    }
}

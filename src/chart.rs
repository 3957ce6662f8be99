// 📈 Renderable chart datasets
// Pipelines produce these; surfaces (terminal, JSON) consume them

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chart {
    Line(LineChart),
    Scatter(ScatterChart),
}

impl Chart {
    pub fn title(&self) -> &str {
        match self {
            Chart::Line(chart) => &chart.title,
            Chart::Scatter(chart) => &chart.title,
        }
    }
}

/// One series per province, one x position per category (month)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_title: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    /// Aligned with `LineChart::categories`
    pub values: Vec<Option<f64>>,
}

impl Series {
    /// (category index, value) for every present value
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (i as f64, v)))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Draw each point's label next to it
    pub annotated: bool,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub label: String,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl ScatterChart {
    /// Points with both coordinates present
    pub fn drawable(&self) -> Vec<(&str, f64, f64)> {
        self.points
            .iter()
            .filter_map(|p| match (p.x, p.y) {
                (Some(x), Some(y)) => Some((p.label.as_str(), x, y)),
                _ => None,
            })
            .collect()
    }
}

/// Min/max of `values`, widened by 5% so points don't sit on the border
pub fn padded_bounds<I>(values: I) -> [f64; 2]
where
    I: IntoIterator<Item = f64>,
{
    let (min, max) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }

    let span = max - min;
    let pad = if span == 0.0 {
        min.abs().max(1.0) * 0.05
    } else {
        span * 0.05
    };

    [min - pad, max + pad]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_points_skip_missing() {
        let series = Series {
            name: "Ontario".to_string(),
            values: vec![Some(1.0), None, Some(3.0)],
        };

        assert_eq!(series.points(), vec![(0.0, 1.0), (2.0, 3.0)]);
    }

    #[test]
    fn test_drawable_requires_both_coordinates() {
        let chart = ScatterChart {
            title: "t".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            annotated: true,
            points: vec![
                ScatterPoint {
                    label: "Ontario".to_string(),
                    x: Some(67.0),
                    y: Some(51000.0),
                },
                ScatterPoint {
                    label: "Nunavut".to_string(),
                    x: None,
                    y: Some(40000.0),
                },
            ],
        };

        assert_eq!(chart.drawable(), vec![("Ontario", 67.0, 51000.0)]);
    }

    #[test]
    fn test_padded_bounds() {
        assert_eq!(padded_bounds(vec![0.0, 100.0]), [-5.0, 105.0]);
        assert_eq!(padded_bounds(Vec::new()), [0.0, 1.0]);

        let [lo, hi] = padded_bounds(vec![10.0]);
        assert!(lo < 10.0 && hi > 10.0);
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let chart = Chart::Line(LineChart {
            title: "Job Vacancies".to_string(),
            x_label: "Month".to_string(),
            y_label: "Vacancies".to_string(),
            legend_title: "Province".to_string(),
            categories: vec!["August 2024".to_string()],
            series: vec![],
        });

        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["kind"], "line");
        assert_eq!(json["categories"][0], "August 2024");
    }
}

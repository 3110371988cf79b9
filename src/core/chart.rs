use super::types::{ChartPoint, ChartSeries, Projection};

impl ChartSeries {
    /// Plot-ready line series: one point per projection year, starting at year 1.
    pub fn from_projection(projection: &Projection) -> Self {
        let points = (1u32..)
            .zip(&projection.balances)
            .map(|(x, &y)| ChartPoint { x, y })
            .collect();
        Self {
            title: format!("Projection @ {}% p.a.", projection.rate_pct),
            x_label: "Year".to_string(),
            y_label: "Value (₹)".to_string(),
            points,
        }
    }
}

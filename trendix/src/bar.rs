use chrono::{DateTime, Utc};

/// One daily OHLC record as delivered by a market-data source.
#[derive(Debug, Clone)]
pub struct DailyBar {
    pub datetime: DateTime<Utc>,
    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,
}

#[derive(Debug, Clone)]
pub struct PricePoint {
    pub index: usize,
    pub date: DateTime<Utc>,
    pub open_price: f64,
    pub close_price: f64,
    pub high_price: f64,
    pub low_price: f64,
}

impl PricePoint {
    /// Representative price of the bar, used for export columns.
    pub fn price(&self) -> f64 {
        self.close_price
    }
}

/// Ordered daily series. Index-contiguous from 0, insertion order is
/// chronological order, `points[i].index == i`.
#[derive(Debug, Clone, Default)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Builds a fresh series from provider bars, assigning indices in
    /// arrival order. Replaces any previous contents wholesale.
    pub fn from_bars(bars: Vec<DailyBar>) -> Self {
        let points = bars
            .into_iter()
            .enumerate()
            .map(|(index, bar)| PricePoint {
                index,
                date: bar.datetime,
                open_price: bar.open_price,
                close_price: bar.close_price,
                high_price: bar.high_price,
                low_price: bar.low_price,
            })
            .collect();
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&PricePoint> {
        self.points.get(index)
    }
}

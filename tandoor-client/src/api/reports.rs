//! Report endpoints (read-only dashboard data)

use chrono::NaiveDate;

use crate::{ClientResult, HttpClient};
use shared::ApiResponse;
use shared::models::{CuisineRevenue, DailySales, OrderStatusCount, PopularItem};

/// Date-range parameters shared by the range reports
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportRange {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ReportRange {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(start) = self.start_date {
            pairs.push(("start_date", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("end_date", end.format("%Y-%m-%d").to_string()));
        }
        pairs
    }
}

/// `/api/reports` operations
pub struct ReportsApi<'a> {
    pub(crate) http: &'a HttpClient,
}

impl ReportsApi<'_> {
    /// Sales totals for one day (server defaults to today)
    pub async fn daily_sales(&self, date: Option<NaiveDate>) -> ClientResult<DailySales> {
        let mut pairs = Vec::new();
        if let Some(date) = date {
            pairs.push(("date", date.format("%Y-%m-%d").to_string()));
        }
        let response = self
            .http
            .get_query::<ApiResponse<DailySales>>("/api/reports/daily-sales", &pairs)
            .await?;
        super::require_data(response, "daily sales")
    }

    /// Most-ordered items over a range
    pub async fn popular_items(
        &self,
        range: ReportRange,
        limit: Option<u32>,
    ) -> ClientResult<Vec<PopularItem>> {
        let mut pairs = range.query_pairs();
        if let Some(limit) = limit {
            pairs.push(("limit", limit.to_string()));
        }
        let response = self
            .http
            .get_query::<ApiResponse<Vec<PopularItem>>>("/api/reports/popular-items", &pairs)
            .await?;
        super::require_data(response, "popular items")
    }

    /// Revenue grouped by cuisine over a range
    pub async fn revenue_by_cuisine(&self, range: ReportRange) -> ClientResult<Vec<CuisineRevenue>> {
        let response = self
            .http
            .get_query::<ApiResponse<Vec<CuisineRevenue>>>(
                "/api/reports/revenue-by-cuisine",
                &range.query_pairs(),
            )
            .await?;
        super::require_data(response, "cuisine revenue")
    }

    /// Today's order counts per status
    pub async fn order_status_summary(&self) -> ClientResult<Vec<OrderStatusCount>> {
        let response = self
            .http
            .get::<ApiResponse<Vec<OrderStatusCount>>>("/api/reports/order-status")
            .await?;
        super::require_data(response, "order status summary")
    }
}

// Handler for the dashboard overview: KPIs plus the aggregated views
use super::DashboardService;
use crate::data::FilterSelection;
use crate::reports::{Breakdown, DimensionTotal, MonthlyTotal, MonthlyTotals, Report, Summary, TopEntry, TopRecords};
use serde::Serialize;
use shared::models::Role;
use shared::utils::brazilian_format;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// " (dd/mm/yyyy a dd/mm/yyyy)" when the date range is narrower than the data.
    pub period_label: Option<String>,
    pub summary: Summary,
    pub count_label: String,
    pub total_label: String,
    pub mean_label: String,
    pub monthly: Vec<MonthlyTotal>,
    /// `None` when the table has no source column.
    pub by_source: Option<Vec<DimensionTotal>>,
    pub top: Vec<TopEntry>,
}

pub fn handle_overview(service: &DashboardService, filter: &FilterSelection) -> DashboardView {
    let dataset = service.dataset();
    let settings = service.settings();
    let records = service.filtered(filter);

    let (data_min, data_max) = dataset.date_range();
    let from = filter.date_from.unwrap_or(data_min);
    let to = filter.date_to.unwrap_or(data_max);
    let period_label = if from != data_min || to != data_max {
        Some(format!(
            " ({} a {})",
            brazilian_format::format_date(from),
            brazilian_format::format_date(to)
        ))
    } else {
        None
    };

    let summary = Summary::default().calculate(records.iter().copied());
    let monthly = MonthlyTotals.calculate(records.iter().copied());
    let by_source = dataset
        .schema()
        .has(Role::Source)
        .then(|| Breakdown::new(Role::Source).calculate(records.iter().copied()));
    let top = TopRecords::new(settings.top_n, settings.title_max_chars).calculate(records.iter().copied());

    tracing::debug!(
        records = summary.count,
        total = summary.total,
        months = monthly.len(),
        "Computed dashboard overview"
    );

    DashboardView {
        period_label,
        count_label: summary.formatted_count(),
        total_label: summary.formatted_total(),
        mean_label: summary.formatted_mean(),
        summary,
        monthly,
        by_source,
        top,
    }
}

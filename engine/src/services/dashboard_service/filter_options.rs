// Handlers for the filter option lists offered to the user
use crate::data::{Dataset, FilterOptions};

pub fn handle_filter_options(dataset: &Dataset) -> FilterOptions {
    let options = FilterOptions::from_records(dataset.records());
    tracing::debug!(
        sources = options.sources.len(),
        regions = options.regions.len(),
        cities = options.cities.len(),
        "Computed filter options"
    );
    options
}

pub fn handle_cities_for_regions(dataset: &Dataset, regions: &[String]) -> Vec<String> {
    let cities = FilterOptions::cities_within(dataset.records(), regions);
    tracing::debug!(?regions, cities = cities.len(), "Computed cities for selected regions");
    cities
}

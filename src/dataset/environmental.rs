//! The environmental statistics table served by the dashboard

use super::error::DatasetResult;
use super::table::Dataset;
use super::types::Column;

pub const YEAR: &str = "Year";
pub const COUNTRY: &str = "Country";
pub const AIR_QUALITY_INDEX: &str = "Air Quality Index (AQI)";
pub const CO2_EMISSIONS: &str = "CO2 Emissions (Metric Tons)";
pub const RENEWABLE_ENERGY: &str = "Renewable Energy (% of Total)";
pub const DEFORESTATION_RATE: &str = "Deforestation Rate (sq km/year)";
pub const WATER_QUALITY_INDEX: &str = "Water Quality Index";
pub const WASTE_RECYCLED: &str = "Waste Recycled (%)";
pub const AVERAGE_TEMPERATURE: &str = "Average Temperature (°C)";

impl Dataset {
    /// Six observations across nine columns
    pub fn environmental() -> DatasetResult<Self> {
        Dataset::new(vec![
            Column::integer(YEAR, &[2020, 2003, 2000, 2023, 2008, 2015]),
            Column::text(
                COUNTRY,
                &["China", "China", "China", "Italy", "France", "India"],
            ),
            Column::integer(AIR_QUALITY_INDEX, &[178, 441, 418, 44, 224, 162]),
            Column::float(CO2_EMISSIONS, &[6.80, 3.91, 8.41, 5.63, 9.88, 2.48]),
            Column::float(
                RENEWABLE_ENERGY,
                &[93.29, 66.46, 26.64, 70.01, 90.46, 50.12],
            ),
            Column::float(
                DEFORESTATION_RATE,
                &[8858.34, 2092.38, 814.08, 4706.67, 6635.02, 1290.76],
            ),
            Column::integer(WATER_QUALITY_INDEX, &[33, 100, 5, 14, 6, 45]),
            Column::float(WASTE_RECYCLED, &[56.01, 37.73, 38.55, 47.45, 31.18, 12.37]),
            Column::float(
                AVERAGE_TEMPERATURE,
                &[38.64, 25.00, 25.14, -6.21, -0.65, 30.25],
            ),
        ])
    }
}

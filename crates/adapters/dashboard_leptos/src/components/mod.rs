mod age_group_chart;
mod card;
mod korea_map;
mod solitude_counter;

pub use age_group_chart::AgeGroupChart;
pub use card::{Card, CardContent, CardHeader, CardTitle};
pub use korea_map::KoreaMap;
pub use solitude_counter::SolitudeCounter;

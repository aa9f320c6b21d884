//! Static page copy.

pub const PAGE_TITLE: &str = "고독사 현황 대시보드";
pub const COUNTER_TITLE: &str = "실시간 고독사 수";
pub const MAP_TITLE: &str = "지역별 고독사 현황";
pub const CHART_TITLE: &str = "연령대별 고독사 현황";
pub const FOOTER_ATTRIBUTION: &str = "본 데이터는 보건복지부와 통계청의 공식 통계를 기반으로 합니다.";

/// Heading of the region detail panel, e.g. `서울 지역 고독사 현황`.
#[must_use]
pub fn region_heading(name: &str) -> String {
    format!("{name} 지역 고독사 현황")
}

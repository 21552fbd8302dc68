//! Travel mode counts area: a D3 bar chart, or a literal no-data message.

use dioxus::prelude::*;
use vdm_core::view::{ChartView, NO_DATA_TEXT};

#[derive(Props, Clone, PartialEq)]
pub struct ModeCountsChartProps {
    /// The DOM id D3 renders into when there are counts
    pub id: String,
    pub chart: ChartView,
    #[props(default = 300)]
    pub min_height: u32,
}

#[component]
pub fn ModeCountsChart(props: ModeCountsChartProps) -> Element {
    match props.chart {
        ChartView::NoData => rsx! {
            p {
                style: "color: #666; font-style: italic;",
                "{NO_DATA_TEXT}"
            }
        },
        ChartView::Bars(_) => rsx! {
            div {
                id: "{props.id}",
                style: "min-height: {props.min_height}px; width: 100%;",
            }
        },
    }
}

use dioxus::prelude::*;
use portfolio_core::model::ChartBackend;

use crate::vm::{ChartBar, SVG_WIDTH, svg_layout};

/// Horizontal bar chart drawn either as plain progress bars or as SVG.
#[component]
pub fn BarChart(bars: Vec<ChartBar>, backend: ChartBackend) -> Element {
    match backend {
        ChartBackend::Native => rsx! {
            div { class: "bars",
                for bar in bars.iter() {
                    div { class: if bar.highlighted { "bar bar--lit" } else { "bar" },
                        span { class: "bar-label", "{bar.label}" }
                        div { class: "bar-track",
                            div { class: "bar-fill", style: "{bar.width_style()}" }
                        }
                        span { class: "bar-value", "{bar.value}" }
                    }
                }
            }
        },
        ChartBackend::Svg => {
            let (height, rows) = svg_layout(&bars);
            rsx! {
                svg {
                    class: "chart",
                    width: "{SVG_WIDTH}",
                    height: "{height}",
                    view_box: "0 0 {SVG_WIDTH} {height}",
                    for row in rows.iter() {
                        g {
                            text {
                                x: "{row.label_x}",
                                y: "{row.y + row.height / 2}",
                                dominant_baseline: "middle",
                                "{row.label}"
                            }
                            rect {
                                class: if row.highlighted { "chart-bar chart-bar--lit" } else { "chart-bar" },
                                x: "{row.bar_x}",
                                y: "{row.y}",
                                width: "{row.width}",
                                height: "{row.height}",
                                rx: "3",
                            }
                            text {
                                x: "{row.bar_x + row.width + 6}",
                                y: "{row.y + row.height / 2}",
                                dominant_baseline: "middle",
                                "{row.value_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

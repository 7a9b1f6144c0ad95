mod chart_vm;
mod markdown_vm;
mod quiz_vm;

pub use chart_vm::{
    ChartBar, SVG_ROW_HEIGHT, SVG_WIDTH, SvgBar, frame_bars, proficiency_bars, progress_style,
    svg_layout,
};
pub use markdown_vm::{inline_markdown_to_html, markdown_to_html, sanitize_html};
pub use quiz_vm::{OptionMark, option_mark, progress_label};

use portfolio_core::algo::SortFrame;
use services::portfolio::SkillItem;

/// One bar of a proficiency or animation chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartBar {
    pub label: String,
    pub value: u32,
    pub max: u32,
    pub highlighted: bool,
}

impl ChartBar {
    /// Bar fill in percent of `max`, rounded down.
    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.max == 0 {
            return 0;
        }
        self.value.min(self.max) * 100 / self.max
    }

    #[must_use]
    pub fn width_style(&self) -> String {
        format!("width: {}%;", self.percent())
    }
}

#[must_use]
pub fn proficiency_bars(skills: &[SkillItem]) -> Vec<ChartBar> {
    skills
        .iter()
        .map(|skill| ChartBar {
            label: skill.name.clone(),
            value: u32::from(skill.proficiency.value()),
            max: 100,
            highlighted: false,
        })
        .collect()
}

/// Bars for one animation frame, labelled by position; the compared pair is highlighted.
#[must_use]
pub fn frame_bars(frame: &SortFrame) -> Vec<ChartBar> {
    let max = frame.values.iter().copied().max().unwrap_or(0).max(1);
    frame
        .values
        .iter()
        .enumerate()
        .map(|(position, value)| ChartBar {
            label: position.to_string(),
            value: *value,
            max,
            highlighted: position == frame.compared.0 || position == frame.compared.1,
        })
        .collect()
}

#[must_use]
pub fn progress_style(frame: Option<&SortFrame>) -> String {
    let percent = frame.map_or(0.0, |f| f.progress() * 100.0);
    format!("width: {percent:.0}%;")
}

//
// ─── SVG LAYOUT ────────────────────────────────────────────────────────────────
//

pub const SVG_WIDTH: u32 = 480;
pub const SVG_ROW_HEIGHT: u32 = 28;
const SVG_LABEL_WIDTH: u32 = 180;
const SVG_GAP: u32 = 6;

/// Horizontal bar placed in an SVG viewport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SvgBar {
    pub y: u32,
    pub label_x: u32,
    pub bar_x: u32,
    pub width: u32,
    pub height: u32,
    pub label: String,
    pub value_label: String,
    pub highlighted: bool,
}

/// Lay bars out one per row, widths scaled to each bar's `max`.
#[must_use]
pub fn svg_layout(bars: &[ChartBar]) -> (u32, Vec<SvgBar>) {
    let track = SVG_WIDTH - SVG_LABEL_WIDTH - 40;
    let rows = bars
        .iter()
        .zip(0u32..)
        .map(|(bar, row)| SvgBar {
            y: row * SVG_ROW_HEIGHT,
            label_x: 0,
            bar_x: SVG_LABEL_WIDTH,
            width: track * bar.percent() / 100,
            height: SVG_ROW_HEIGHT - SVG_GAP,
            label: bar.label.clone(),
            value_label: bar.value.to_string(),
            highlighted: bar.highlighted,
        })
        .collect::<Vec<_>>();
    let height = u32::try_from(rows.len()).unwrap_or(0) * SVG_ROW_HEIGHT;
    (height, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::algo::SortAnimation;
    use portfolio_core::model::{Proficiency, SkillId};

    #[test]
    fn proficiency_bars_use_percentages() {
        let bars = proficiency_bars(&[SkillItem {
            id: SkillId::new(0),
            name: "Python".to_string(),
            proficiency: Proficiency::new(92).unwrap(),
        }]);
        assert_eq!(bars[0].percent(), 92);
        assert_eq!(bars[0].width_style(), "width: 92%;");
    }

    #[test]
    fn frame_bars_highlight_the_compared_pair() {
        let frame = SortAnimation::new(vec![5, 3, 4]).next().unwrap();
        let bars = frame_bars(&frame);
        let lit: Vec<_> = bars.iter().filter(|b| b.highlighted).map(|b| b.label.as_str()).collect();
        assert_eq!(lit, ["0", "1"]);
        assert_eq!(bars[1].percent(), 100);
    }

    #[test]
    fn svg_rows_stack_vertically() {
        let bars = vec![
            ChartBar { label: "a".into(), value: 50, max: 100, highlighted: false },
            ChartBar { label: "b".into(), value: 100, max: 100, highlighted: false },
        ];
        let (height, rows) = svg_layout(&bars);
        assert_eq!(height, 2 * SVG_ROW_HEIGHT);
        assert_eq!(rows[1].y, SVG_ROW_HEIGHT);
        assert_eq!(rows[0].width * 2, rows[1].width);
    }

    #[test]
    fn progress_style_tracks_frames() {
        assert_eq!(progress_style(None), "width: 0%;");
        let last = SortAnimation::new(vec![2, 1]).last().unwrap();
        assert_eq!(progress_style(Some(&last)), "width: 100%;");
    }
}

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use plotters::prelude::*;
use plotters::style::register_font;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::analysis::TeamStats;
use crate::error::NbaError;

/// Where the team chart is written when no other path is given.
pub const DEFAULT_CHART_PATH: &str = "team_performance.png";

/// Number of top-ranked teams drawn.
pub const CHART_TEAM_LIMIT: usize = 20;

const FONT: &str = "sans-serif";
const STEEL_BLUE: RGBColor = RGBColor(70, 130, 180);
const NAVY: RGBColor = RGBColor(0, 0, 128);
const GRID_ROWS: usize = 10;
/// Gap left on each side of a bar, as a fraction of its slot.
const BAR_INSET: f64 = 0.12;

const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static FONT_REGISTERED: OnceLock<bool> = OnceLock::new();

/// Pass-through wrapper over a key-pointed f64 axis so it satisfies the
/// `ValueFormatter` bound `configure_mesh` requires (plotters does not
/// implement it for `WithKeyPoints`).
struct KeyPointAxis(plotters::coord::combinators::WithKeyPoints<plotters::coord::types::RangedCoordf64>);

impl Ranged for KeyPointAxis {
    type FormatOption = plotters::coord::ranged1d::NoDefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.0.map(value, limit)
    }

    fn key_points<Hint: plotters::coord::ranged1d::KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        self.0.key_points(hint)
    }

    fn range(&self) -> std::ops::Range<f64> {
        self.0.range()
    }

    fn axis_pixel_range(&self, limit: (i32, i32)) -> std::ops::Range<i32> {
        self.0.axis_pixel_range(limit)
    }
}

impl plotters::coord::ranged1d::ValueFormatter<f64> for KeyPointAxis {
    fn format(value: &f64) -> String {
        <plotters::coord::types::RangedCoordf64 as plotters::coord::ranged1d::ValueFormatter<f64>>::format(value)
    }
}

/// Output settings for the team chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub path: PathBuf,
    /// Pixel width; the default is 14 inches at 300 dpi.
    pub width: u32,
    /// Pixel height; the default is 8 inches at 300 dpi.
    pub height: u32,
    pub max_teams: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CHART_PATH),
            width: 4200,
            height: 2400,
            max_teams: CHART_TEAM_LIMIT,
        }
    }
}

fn register_system_font() -> bool {
    for candidate in FONT_CANDIDATES {
        let Ok(bytes) = std::fs::read(candidate) else {
            continue;
        };
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        if register_font(FONT, FontStyle::Normal, bytes).is_ok() {
            debug!(font = candidate, "registered chart font");
            return true;
        }
    }
    warn!("no TrueType font found; the chart will be drawn without text");
    false
}

fn font_available() -> bool {
    *FONT_REGISTERED.get_or_init(register_system_font)
}

/// Render the top-ranked teams' scoring rate as an annotated bar chart.
///
/// Teams must already be in rank order; only the first `options.max_teams`
/// are drawn. The image is written to `options.path`, replacing any previous
/// file, and the path is returned.
pub fn render_team_chart(teams: &[TeamStats], options: &ChartOptions) -> Result<PathBuf, NbaError> {
    if teams.is_empty() {
        return Err(NbaError::PreconditionViolation(
            "cannot chart an empty team ranking".to_string(),
        ));
    }
    let shown = &teams[..teams.len().min(options.max_teams)];
    draw_team_bars(shown, options, font_available())?;

    info!(path = %options.path.display(), teams = shown.len(), "team chart written");
    Ok(options.path.clone())
}

/// Horizontal centre of the bar drawn for the team at `index`.
fn bar_center(index: usize) -> f64 {
    index as f64 + 0.5
}

/// X-axis labels: each bar centre with the full team identifier under it.
fn team_labels(teams: &[TeamStats]) -> Vec<(f64, String)> {
    teams
        .iter()
        .enumerate()
        .map(|(i, t)| (bar_center(i), t.team.clone()))
        .collect()
}

fn draw_team_bars(
    teams: &[TeamStats],
    options: &ChartOptions,
    with_text: bool,
) -> Result<(), NbaError> {
    let root =
        BitMapBackend::new(&options.path, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE)?;

    // Sizes are laid out for an 800 px tall canvas and scaled from there.
    let scale = options.height as f64 / 800.0;
    let font_size = |size: f64| size * scale;
    let pixels = |size: f64| (size * scale).round().max(1.0) as u32;

    let slots = teams.len() as f64;
    let peak = teams
        .iter()
        .map(|t| t.avg_ppg_per_player)
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max);
    let y_max = if peak > 0.0 { peak * 1.15 } else { 1.0 };

    let labels = team_labels(teams);
    let label_style = TextStyle::from(
        (FONT, font_size(14.0))
            .into_font()
            .transform(FontTransform::Rotate90),
    )
    .pos(Pos::new(HPos::Left, VPos::Center));
    let label_gap = pixels(10.0);

    let area = if with_text {
        root.margin(pixels(16.0), 0, 0, 0)
            .titled("NBA Team Offensive Performance", (FONT, font_size(26.0)))?
            .titled(
                &format!(
                    "Average Points Per Game Per Player (Top {} Teams)",
                    options.max_teams
                ),
                (FONT, font_size(20.0)),
            )?
    } else {
        root.clone()
    };

    let mut builder = ChartBuilder::on(&area);
    builder.margin(pixels(20.0));
    if with_text {
        let mut longest = 0;
        for (_, name) in &labels {
            let (w, h) = root.estimate_text_size(name, &label_style)?;
            longest = longest.max(w.max(h));
        }
        builder
            .x_label_area_size(longest + label_gap + pixels(45.0))
            .y_label_area_size(pixels(80.0));
    }
    let x_axis = KeyPointAxis((0f64..slots).with_key_points(labels.iter().map(|(x, _)| *x).collect()));
    let mut chart = builder.build_cartesian_2d(x_axis, 0f64..y_max)?;

    if with_text {
        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(labels.len())
            .x_label_formatter(&|_: &f64| String::new())
            .y_labels(GRID_ROWS)
            .label_style((FONT, font_size(14.0)))
            .x_desc("Team")
            .y_desc("Average Points Per Game (Per Player)")
            .axis_desc_style((FONT, font_size(16.0)))
            .draw()?;
    }

    let grid_style = ShapeStyle {
        color: BLACK.mix(0.3),
        filled: false,
        stroke_width: 1,
    };
    let grid_rows: Vec<f64> = chart.as_coord_spec().y_spec().key_points(GRID_ROWS);
    for y in grid_rows {
        chart.draw_series(DashedLineSeries::new(
            vec![(0.0, y), (slots, y)],
            pixels(8.0),
            pixels(5.0),
            grid_style,
        ))?;
    }

    let bars: Vec<(usize, f64, f64)> = teams
        .iter()
        .enumerate()
        .filter_map(|(i, t)| {
            let value = t.avg_ppg_per_player;
            let height = if value.is_finite() {
                value
            } else if value == f64::INFINITY {
                y_max
            } else {
                return None;
            };
            Some((i, value, height))
        })
        .collect();

    let bar_rect = |index: usize, height: f64, style: ShapeStyle| {
        let left = index as f64 + BAR_INSET;
        let right = index as f64 + 1.0 - BAR_INSET;
        Rectangle::new([(left, 0.0), (right, height)], style)
    };

    chart.draw_series(
        bars.iter()
            .map(|&(i, _, height)| bar_rect(i, height, STEEL_BLUE.filled())),
    )?;
    chart.draw_series(bars.iter().map(|&(i, _, height)| {
        bar_rect(
            i,
            height,
            ShapeStyle {
                color: NAVY.to_rgba(),
                filled: false,
                stroke_width: pixels(1.2),
            },
        )
    }))?;

    if with_text {
        let annotation = TextStyle::from((FONT, font_size(12.0)).into_font())
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(bars.iter().map(|&(i, value, height)| {
            Text::new(
                format!("{value:.1}"),
                (bar_center(i), height + y_max * 0.005),
                annotation.clone(),
            )
        }))?;

        // Rotated names hang down from just below the axis.
        for (x, name) in &labels {
            let (px, py) = chart.backend_coord(&(*x, 0.0));
            root.draw(&Text::new(
                name.as_str(),
                (px, py + label_gap as i32),
                label_style.clone(),
            ))?;
        }
    }

    root.present()?;
    Ok(())
}

/// Open a rendered chart in the platform image viewer.
///
/// Returns `Ok(false)` without doing anything when no display is available.
pub fn present_chart(path: &Path) -> Result<bool, NbaError> {
    if !display_available() {
        debug!("no display available; skipping chart presentation");
        return Ok(false);
    }
    viewer_command(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(true)
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}

#[cfg(any(target_os = "macos", target_os = "windows"))]
fn display_available() -> bool {
    true
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn display_available() -> bool {
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|var| std::env::var_os(var).is_some_and(|v| !v.is_empty()))
}

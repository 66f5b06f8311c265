use super::colormap::Normalize;
use super::colormap::viridis;
use super::font::needs_fallback;
use super::font::select_font;
use super::font::system_fonts;
use super::matrix::check_shape;
use super::matrix::hand_name;
use super::matrix::percent;
use crate::DEFAULT_FONT;
use crate::Error;
use crate::FONT_FALLBACKS;
use crate::Probability;
use crate::RANKS;
use crate::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::HPos;
use plotters::style::text_anchor::Pos;
use plotters::style::text_anchor::VPos;
use std::path::PathBuf;

/// Side of one square cell, in pixels.
const CELL: u32 = 56;
/// Whitespace around the figure.
const MARGIN: u32 = 8;
/// Band reserved for tick labels on the top and left.
const TICKS: u32 = 24;
/// Band reserved for the title when there is one.
const TITLE: u32 = 28;

const CELL_FONT: f64 = 12.;
const TICK_FONT: f64 = 15.;
const TITLE_FONT: f64 = 17.;

/// What to draw and where to put it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    pub title: Option<String>,
    pub rows: Vec<String>,
    pub cols: Vec<String>,
    pub output: Option<PathBuf>,
}

impl Default for PlotOptions {
    fn default() -> Self {
        let ranks = RANKS.chars().rev().map(String::from).collect::<Vec<_>>();
        Self {
            title: None,
            rows: ranks.clone(),
            cols: ranks,
            output: None,
        }
    }
}

/// A rendered heat map.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Complete SVG document.
    pub svg: String,
    /// Font family everything was typeset in.
    pub font: String,
    /// Title as drawn. `None` when there was none or no font could render it.
    pub title: Option<String>,
    /// Whether a requested title was left out for lack of a font.
    pub title_dropped: bool,
}

/// Pixel geometry of a figure.
struct Layout {
    rows: u32,
    cols: u32,
    title: u32,
}

impl Layout {
    fn size(&self) -> (u32, u32) {
        let w = 2 * MARGIN + TICKS + self.cols * CELL;
        let h = 2 * MARGIN + self.title + TICKS + self.rows * CELL;
        (w, h)
    }
    /// Top-left corner of cell (i, j).
    fn cell(&self, i: usize, j: usize) -> (i32, i32) {
        let x = MARGIN + TICKS + j as u32 * CELL;
        let y = MARGIN + self.title + TICKS + i as u32 * CELL;
        (x as i32, y as i32)
    }
    fn center(&self, i: usize, j: usize) -> (i32, i32) {
        let (x, y) = self.cell(i, j);
        (x + CELL as i32 / 2, y + CELL as i32 / 2)
    }
}

fn render<E: std::fmt::Display>(e: E) -> Error {
    Error::Render(e.to_string())
}

/// Draws `matrix` as an annotated heat map.
///
/// Each cell is colored by its value relative to the matrix extremes and
/// labeled with its starting hand and its value as a percentage. Column
/// labels run along the top, row labels down the left. The document is
/// sized to its content and written to `options.output` when set.
///
/// A title outside the basic Latin range is typeset in the first installed
/// of [`FONT_FALLBACKS`]. When none is installed the title is dropped with a
/// warning rather than drawn with missing glyphs. An empty title counts as
/// no title.
pub fn plot(matrix: &[Vec<Probability>], options: &PlotOptions) -> Result<Figure> {
    let available = match options.title.as_deref() {
        Some(title) if needs_fallback(title) => system_fonts(),
        _ => vec![],
    };
    plot_with(matrix, options, &available)
}

/// [`plot`] against a known list of installed font families.
pub fn plot_with(matrix: &[Vec<Probability>], options: &PlotOptions, available: &[String]) -> Result<Figure> {
    check_shape(matrix, &options.rows, &options.cols)?;
    let requested = options.title.as_deref().filter(|t| !t.is_empty());
    let (font, title) = match requested {
        None => (DEFAULT_FONT.to_string(), None),
        Some(title) => match select_font(title, available, &FONT_FALLBACKS) {
            Some(font) => (font, Some(title.to_string())),
            None => {
                log::warn!("no installed font among {:?} can render the title, dropping it", FONT_FALLBACKS);
                (DEFAULT_FONT.to_string(), None)
            }
        },
    };
    let svg = draw(matrix, options, &font, title.as_deref())?;
    if let Some(path) = &options.output {
        std::fs::write(path, &svg)?;
        log::info!("saved heat map to {}", path.display());
    }
    Ok(Figure {
        svg,
        font,
        title_dropped: requested.is_some() && title.is_none(),
        title,
    })
}

fn draw(matrix: &[Vec<Probability>], options: &PlotOptions, font: &str, title: Option<&str>) -> Result<String> {
    let layout = Layout {
        rows: options.rows.len() as u32,
        cols: options.cols.len() as u32,
        title: title.map_or(0, |_| TITLE),
    };
    let (w, h) = layout.size();
    let norm = Normalize::fit(matrix);
    let centered = Pos::new(HPos::Center, VPos::Center);
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (w, h)).into_drawing_area();
        root.fill(&WHITE).map_err(render)?;
        if let Some(title) = title {
            let style = (font, TITLE_FONT).into_font().color(&BLACK).pos(centered);
            let at = ((w / 2) as i32, (MARGIN + TITLE / 2) as i32);
            root.draw(&Text::new(title, at, style)).map_err(render)?;
        }
        for (j, label) in options.cols.iter().enumerate() {
            let (x, _) = layout.center(0, j);
            let (_, y) = layout.cell(0, j);
            let style = (font, TICK_FONT).into_font().color(&BLACK).pos(centered);
            let at = (x, y - TICKS as i32 / 2);
            root.draw(&Text::new(label.as_str(), at, style)).map_err(render)?;
        }
        for (i, label) in options.rows.iter().enumerate() {
            let (_, y) = layout.center(i, 0);
            let (x, _) = layout.cell(i, 0);
            let style = (font, TICK_FONT).into_font().color(&BLACK).pos(centered);
            let at = (x - TICKS as i32 / 2, y);
            root.draw(&Text::new(label.as_str(), at, style)).map_err(render)?;
        }
        for (i, (row, label)) in matrix.iter().zip(&options.rows).enumerate() {
            for (j, (&value, col)) in row.iter().zip(&options.cols).enumerate() {
                let (x, y) = layout.cell(i, j);
                let corners = [(x, y), (x + CELL as i32, y + CELL as i32)];
                let fill = viridis(norm.scale(value)).filled();
                root.draw(&Rectangle::new(corners, fill)).map_err(render)?;
                let (cx, cy) = layout.center(i, j);
                let style = (font, CELL_FONT).into_font().color(&WHITE).pos(centered);
                let name = hand_name(i, j, label, col);
                let line = (CELL_FONT / 2.) as i32 + 1;
                root.draw(&Text::new(name, (cx, cy - line), style.clone())).map_err(render)?;
                root.draw(&Text::new(percent(value), (cx, cy + line), style)).map_err(render)?;
            }
        }
        root.present().map_err(render)?;
    }
    log::debug!("rendered {}x{} heat map at {}x{} px", layout.rows, layout.cols, w, h);
    Ok(svg)
}

//! PNG bar charts
//!
//! Charts are drawn with `imageproc` rectangles onto an `image` RGB buffer.
//! Titles, axis labels, bar labels and counts are rendered with an embedded
//! DejaVu Sans font through `ab_glyph`.

use crate::Result;
use ab_glyph::{FontRef, PxScale};
use anyhow::{anyhow, Context};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use std::path::Path;

/// Raw bit-pattern histogram size (pixels)
pub const RAW_CHART_SIZE: (u32, u32) = (800, 400);

/// Outcome chart size (pixels)
pub const OUTCOME_CHART_SIZE: (u32, u32) = (600, 400);

/// Vertical axis label shared by every chart
pub const Y_LABEL: &str = "Frequency";

const FONT_DATA: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([0, 0, 0]);
const BAR: Rgb<u8> = Rgb([100, 143, 255]);
const TEXT: Rgb<u8> = Rgb([40, 40, 40]);

const MARGIN_LEFT: u32 = 60;
const MARGIN_RIGHT: u32 = 20;
const MARGIN_TOP: u32 = 70;
const MARGIN_BOTTOM: u32 = 60;

/// Rows reserved for the title
const TITLE_BAND: u32 = 40;

const TITLE_SCALE: f32 = 24.0;
const LABEL_SCALE: f32 = 16.0;

/// Text drawn around the plot area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLabels<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
}

fn font() -> Result<FontRef<'static>> {
    FontRef::try_from_slice(FONT_DATA).map_err(|e| anyhow!("Failed to load chart font: {}", e))
}

/// Render a bar chart, one bar per entry in the given order
pub fn render_bar_chart(
    bars: &[(String, u64)],
    labels: ChartLabels<'_>,
    width: u32,
    height: u32,
) -> Result<RgbImage> {
    let font = font()?;
    let title_scale = PxScale::from(TITLE_SCALE);
    let label_scale = PxScale::from(LABEL_SCALE);

    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);

    let plot_left = MARGIN_LEFT;
    let plot_right = width.saturating_sub(MARGIN_RIGHT).max(plot_left + 1);
    let plot_top = MARGIN_TOP;
    let plot_bottom = height.saturating_sub(MARGIN_BOTTOM).max(plot_top + 1);
    let plot_width = plot_right - plot_left;
    let plot_height = plot_bottom - plot_top;

    // title and axis labels
    let (title_w, title_h) = text_size(title_scale, &font, labels.title);
    let title_y = TITLE_BAND.saturating_sub(title_h) / 2;
    draw_text_mut(
        &mut img,
        TEXT,
        centered(width / 2, title_w),
        title_y as i32,
        title_scale,
        &font,
        labels.title,
    );

    let (_, y_label_h) = text_size(label_scale, &font, Y_LABEL);
    let y_label_y = plot_top.saturating_sub(y_label_h + 10);
    draw_text_mut(&mut img, TEXT, 8, y_label_y as i32, label_scale, &font, Y_LABEL);

    let (x_label_w, x_label_h) = text_size(label_scale, &font, labels.x_label);
    let x_label_y = height.saturating_sub(x_label_h + 8);
    draw_text_mut(
        &mut img,
        TEXT,
        centered(plot_left + plot_width / 2, x_label_w),
        x_label_y as i32,
        label_scale,
        &font,
        labels.x_label,
    );

    // axes
    let y_axis = Rect::at(plot_left as i32, plot_top as i32).of_size(2, plot_height + 2);
    let x_axis = Rect::at(plot_left as i32, plot_bottom as i32).of_size(plot_width, 2);
    draw_filled_rect_mut(&mut img, y_axis, AXIS);
    draw_filled_rect_mut(&mut img, x_axis, AXIS);

    let max = bars.iter().map(|(_, v)| *v).max().unwrap_or(0);
    if bars.is_empty() || max == 0 {
        return Ok(img);
    }

    let slot = plot_width / bars.len() as u32;
    let bar_width = (slot * 3 / 5).max(1);

    for (i, (label, value)) in bars.iter().enumerate() {
        let slot_left = plot_left + i as u32 * slot;
        let center = slot_left + slot / 2;
        let bar_height = ((*value as f64 / max as f64) * plot_height as f64).round() as u32;

        if bar_height > 0 {
            let x = center.saturating_sub(bar_width / 2);
            let y = plot_bottom - bar_height;
            let rect = Rect::at(x as i32, y as i32).of_size(bar_width, bar_height);
            draw_filled_rect_mut(&mut img, rect, BAR);
        }

        let (label_w, _) = text_size(label_scale, &font, label);
        let label_y = plot_bottom + 8;
        draw_text_mut(
            &mut img,
            TEXT,
            centered(center, label_w),
            label_y as i32,
            label_scale,
            &font,
            label,
        );

        let count = value.to_string();
        let (count_w, count_h) = text_size(label_scale, &font, &count);
        let count_y = (plot_bottom - bar_height).saturating_sub(count_h + 4);
        draw_text_mut(
            &mut img,
            TEXT,
            centered(center, count_w),
            count_y as i32,
            label_scale,
            &font,
            &count,
        );
    }

    Ok(img)
}

/// Render and save a bar chart as PNG
pub fn save_bar_chart(
    path: &Path,
    bars: &[(String, u64)],
    labels: ChartLabels<'_>,
    size: (u32, u32),
) -> Result<()> {
    let img = render_bar_chart(bars, labels, size.0, size.1)?;
    img.save(path)
        .with_context(|| format!("Failed to save chart to {}", path.display()))
}

fn centered(center: u32, text_width: u32) -> i32 {
    center.saturating_sub(text_width / 2) as i32
}

// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! The textual progress bar renderer.
//!
//! A bar approximates a percentage at a fixed display width with glyphs drawn
//! from an ordered palette: the first glyph is empty, the last is full, and
//! glyph `i` stands for the fill level `i / (len - 1)`. The renderer scans
//! the candidate widths from largest to smallest and keeps the rendering
//! whose visually represented percentage deviates least from the requested
//! one.

use crate::configs::{VAXCAST_BAR_MAX_SIZE, VAXCAST_BAR_MIN_SIZE, VAXCAST_BAR_STYLE};

/// Renders `percentage` as a bar of glyphs drawn from `style`.
///
/// Candidate widths are scanned from `max_size` down to `min_size`, and only
/// a strictly smaller deviation replaces the best candidate, so ties keep the
/// widest rendering. Percentages at or above 100 render as `max_size` full
/// glyphs. Negative inputs are clamped to zero.
///
/// The result holds between `min_size` and `max_size` glyphs; callers that
/// need an exact display width right-pad with [`pad`].
pub fn render(percentage: f64, min_size: usize, max_size: usize, style: &[char]) -> String {
    debug_assert!(style.len() > 1);
    let n = style.len() - 1;
    let full_symbol = style[n];

    if percentage >= 100.0 {
        return full_symbol.to_string().repeat(max_size);
    }

    let p = percentage.max(0.0) / 100.0;

    let mut min_delta = f64::INFINITY;
    let mut bar = String::new();

    for i in (min_size..=max_size).rev() {
        let x = p * i as f64;
        let full = x.floor() as usize;
        let rest = x - x.floor();
        let mut middle = (rest * n as f64).floor() as usize;

        // A nonzero percentage must never render as a fully-empty bar.
        if p != 0.0 && full == 0 && middle == 0 {
            middle = 1;
        }

        let represented = (full as f64 + middle as f64 / n as f64) / i as f64;
        let delta = (p - represented).abs() * 100.0;
        if delta < min_delta {
            min_delta = delta;
            bar = assemble(full, middle, i, style);
        }
    }

    bar
}

/// Renders `percentage` with the deployed palette and size range.
pub fn render_default(percentage: f64) -> String {
    render(
        percentage,
        *VAXCAST_BAR_MIN_SIZE,
        *VAXCAST_BAR_MAX_SIZE,
        &VAXCAST_BAR_STYLE,
    )
}

/// Right-pads `bar` with the empty glyph up to `width` glyphs.
pub fn pad(bar: &str, width: usize, style: &[char]) -> String {
    let mut padded = bar.to_string();
    let mut count = padded.chars().count();
    while count < width {
        padded.push(style[0]);
        count += 1;
    }
    padded
}

/// Builds a bar of `size` glyphs: the fully-filled positions, the partial
/// glyph unless the integer part alone saturates the width, then the empty
/// tail.
fn assemble(full: usize, middle: usize, size: usize, style: &[char]) -> String {
    let full_symbol = style[style.len() - 1];
    let mut bar = String::with_capacity(size * full_symbol.len_utf8());
    for _ in 0..full {
        bar.push(full_symbol);
    }
    if full < size {
        bar.push(style[middle]);
    }
    for _ in 0..size.saturating_sub(full + 1) {
        bar.push(style[0]);
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLE: [char; 7] = ['⣀', '⣄', '⣤', '⣦', '⣶', '⣷', '⣿'];
    const WIDTH: usize = 20;

    fn render20(percentage: f64) -> String {
        render(percentage, WIDTH, WIDTH, &STYLE)
    }

    /// The fraction of fill a rendered bar visually encodes.
    fn represented(bar: &str) -> f64 {
        let total: f64 = bar
            .chars()
            .map(|g| STYLE.iter().position(|&s| s == g).unwrap() as f64 / 6.0)
            .sum();
        total / bar.chars().count() as f64
    }

    #[test]
    fn zero_renders_all_empty() {
        assert_eq!("⣀".repeat(WIDTH), render20(0.0));
    }

    #[test]
    fn hundred_and_above_render_all_full() {
        assert_eq!("⣿".repeat(WIDTH), render20(100.0));
        assert_eq!("⣿".repeat(WIDTH), render20(100.01));
        assert_eq!("⣿".repeat(WIDTH), render20(987.6));
    }

    #[test]
    fn negative_clamps_to_zero() {
        assert_eq!(render20(0.0), render20(-5.0));
    }

    #[test]
    fn output_width_is_exact() {
        for p in 0..=100 {
            let bar = render20(p as f64);
            assert_eq!(WIDTH, bar.chars().count(), "width mismatch at {}%", p);
        }
    }

    #[test]
    fn glyphs_come_from_palette() {
        for p in [0.1, 7.7, 33.3, 50.0, 61.8, 88.8, 99.99] {
            for glyph in render20(p).chars() {
                assert!(STYLE.contains(&glyph), "foreign glyph {:?} at {}%", glyph, p);
            }
        }
    }

    #[test]
    fn tiny_percentage_is_visible() {
        let bar = render20(0.1);
        let glyphs: Vec<char> = bar.chars().collect();
        assert_eq!(STYLE[1], glyphs[0]);
        assert!(glyphs[1..].iter().all(|&g| g == STYLE[0]));
    }

    #[test]
    fn fifty_percent_splits_at_the_middle() {
        let glyphs: Vec<char> = render20(50.0).chars().collect();
        assert_eq!(WIDTH, glyphs.len());
        assert!(glyphs[..10].iter().all(|&g| g == '⣿'));
        assert!(glyphs[10..].iter().all(|&g| g == '⣀'));
    }

    #[test]
    fn exact_quarters_pick_the_matching_partial_glyph() {
        // 12.5% of 20 positions is 2.5: two full glyphs and a half-filled
        // third, which quantizes to palette index 3.
        let glyphs: Vec<char> = render20(12.5).chars().collect();
        assert!(glyphs[..2].iter().all(|&g| g == '⣿'));
        assert_eq!(STYLE[3], glyphs[2]);
        assert!(glyphs[3..].iter().all(|&g| g == '⣀'));
    }

    #[test]
    fn just_below_hundred_keeps_one_partial_glyph() {
        let glyphs: Vec<char> = render20(99.99).chars().collect();
        assert!(glyphs[..19].iter().all(|&g| g == '⣿'));
        assert_eq!(STYLE[5], glyphs[19]);
    }

    #[test]
    fn represented_fill_trends_monotonically() {
        // Non-strict trend: a smaller percentage may out-represent a larger
        // one by at most the quantization step 1 / (width * (len - 1)).
        let step = 1.0 / (WIDTH as f64 * 6.0);
        let mut previous = represented(&render20(0.0));
        let mut p = 0.5;
        while p < 100.0 {
            let current = represented(&render20(p));
            assert!(
                previous <= current + step + 1e-9,
                "represented fill fell by more than one step at {}%",
                p
            );
            previous = current;
            p += 0.5;
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        for p in [0.0, 0.1, 42.0, 61.8, 100.0] {
            assert_eq!(render20(p), render20(p));
        }
    }

    #[test]
    fn pad_fills_to_width() {
        let padded = pad("⣿⣿", 5, &STYLE);
        assert_eq!("⣿⣿⣀⣀⣀", padded);
        assert_eq!("⣿⣿", pad("⣿⣿", 2, &STYLE));
        assert_eq!("⣀", pad("", 1, &STYLE));
    }

    #[test]
    fn default_palette_matches_deployment() {
        let bar = render_default(61.8);
        assert_eq!(*super::VAXCAST_BAR_MAX_SIZE, bar.chars().count());
        assert_eq!(render20(61.8), bar);
    }
}

//! Text waveform trace

/// Draw samples as a `width` x `height` grid of characters.
///
/// Each column averages its share of the samples; -1..1 spans the full
/// height. A center line is drawn where no trace passes.
pub fn render_ascii(samples: &[f32], width: usize, height: usize) -> Vec<String> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let mut grid = vec![vec![' '; width]; height];
    let center = height / 2;

    if !samples.is_empty() {
        let samples_per_col = samples.len() as f32 / width as f32;
        let half_height = (height / 2) as f32;

        for x in 0..width {
            let column = column_average(samples, x, samples_per_col);
            let offset = (column * half_height).clamp(-half_height, half_height).round() as isize;
            let (lo, hi) = if offset >= 0 {
                (center as isize - offset, center as isize)
            } else {
                (center as isize, center as isize - offset)
            };
            for y in lo.max(0)..=hi.min(height as isize - 1) {
                grid[y as usize][x] = '|';
            }
        }
    }

    for cell in grid[center].iter_mut() {
        if *cell == ' ' {
            *cell = '-';
        }
    }

    grid.into_iter().map(|row| row.into_iter().collect()).collect()
}

fn column_average(samples: &[f32], x: usize, samples_per_col: f32) -> f32 {
    let start = (x as f32 * samples_per_col) as usize;
    let end = (((x + 1) as f32 * samples_per_col) as usize).min(samples.len());

    if start < end {
        samples[start..end].iter().sum::<f32>() / (end - start) as f32
    } else if start < samples.len() {
        samples[start]
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_area() {
        assert!(render_ascii(&[0.5], 0, 5).is_empty());
        assert!(render_ascii(&[0.5], 5, 0).is_empty());
    }

    #[test]
    fn test_silence_is_center_line() {
        let rows = render_ascii(&[0.0; 16], 8, 5);
        assert_eq!(rows.len(), 5);
        // Zero samples still mark the center cell with the trace
        assert_eq!(rows[2], "||||||||");
        assert!(rows[0].chars().all(|c| c == ' '));
    }

    #[test]
    fn test_no_samples_draws_axis() {
        let rows = render_ascii(&[], 4, 3);
        assert_eq!(rows[1], "----");
    }

    #[test]
    fn test_full_scale_reaches_edges() {
        let rows = render_ascii(&[1.0, -1.0], 2, 5);
        // Positive column reaches the top, negative the bottom
        assert_eq!(rows[0].chars().next(), Some('|'));
        assert_eq!(rows[4].chars().nth(1), Some('|'));
        assert_eq!(rows[0].chars().nth(1), Some(' '));
    }
}

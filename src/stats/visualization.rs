//! Terminal charts for statistics.
//!
//! Labels are measured and truncated in characters, so category names with
//! accents or other multi-byte text are safe.

/// Characters for sparkline rendering.
const BAR_CHARS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];
const FULL_BLOCK: char = '█';
const LIGHT_SHADE: char = '░';

/// Render a horizontal bar chart.
///
/// # Arguments
///
/// * `data` - (label, value) pairs
/// * `label_width` - Width reserved for labels
/// * `bar_width` - Width of the bar portion
pub fn render_bar_chart(data: &[(String, usize)], label_width: usize, bar_width: usize) -> String {
    if data.is_empty() {
        return String::new();
    }

    let max_value = data.iter().map(|(_, v)| *v).max().unwrap_or(1).max(1);

    data.iter()
        .map(|(label, value)| {
            let bar_length = value * bar_width / max_value;
            format!(
                "{} |{}{} {}",
                fit_label(label, label_width),
                FULL_BLOCK.to_string().repeat(bar_length),
                " ".repeat(bar_width - bar_length),
                value
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a progress bar for a whole percentage (clamped to 100).
pub fn render_progress_bar(percent: u32, width: usize) -> String {
    let percent = percent.min(100) as usize;
    let filled = percent * width / 100;

    format!(
        "[{}{}] {}%",
        FULL_BLOCK.to_string().repeat(filled),
        LIGHT_SHADE.to_string().repeat(width - filled),
        percent
    )
}

/// Render a sparkline (compact inline chart).
pub fn render_sparkline(values: &[usize]) -> String {
    let max_value = values.iter().max().copied().unwrap_or(1).max(1);

    values
        .iter()
        .map(|&v| {
            if v == 0 {
                BAR_CHARS[0]
            } else {
                BAR_CHARS[(v * 7 / max_value).clamp(1, 7)]
            }
        })
        .collect()
}

/// Render a bordered box of `label : value` lines.
pub fn render_summary_box(title: &str, items: &[(&str, String)]) -> String {
    let max_label_len = items.iter().map(|(l, _)| width(l)).max().unwrap_or(0);
    let max_value_len = items.iter().map(|(_, v)| width(v)).max().unwrap_or(0);
    let content_width = max_label_len + max_value_len + 3;
    let box_width = content_width.max(width(title)) + 4;

    let mut lines = Vec::new();
    lines.push(format!("┌{}┐", "─".repeat(box_width)));

    let title_padding = (box_width - width(title)) / 2;
    lines.push(format!(
        "│{}{}{}│",
        " ".repeat(title_padding),
        title,
        " ".repeat(box_width - title_padding - width(title))
    ));
    lines.push(format!("├{}┤", "─".repeat(box_width)));

    for (label, value) in items {
        let item = format!("{}{} : {}", " ".repeat(max_label_len - width(label)), label, value);
        lines.push(format!("│ {}{} │", item, " ".repeat(box_width - width(&item) - 2)));
    }

    lines.push(format!("└{}┘", "─".repeat(box_width)));
    lines.join("\n")
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn fit_label(label: &str, label_width: usize) -> String {
    let len = width(label);
    if len <= label_width {
        return format!("{}{}", label, " ".repeat(label_width - len));
    }
    if label_width <= 3 {
        return label.chars().take(label_width).collect();
    }
    let head: String = label.chars().take(label_width - 3).collect();
    format!("{head}...")
}

//! Character-level layout for editable text.
//!
//! Prompts and the editor need the cursor position in screen coordinates,
//! so wrapping happens here rather than in `Paragraph::wrap`.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Maximum number of visible content lines inside a prompt input viewport.
pub const INPUT_MAX_VISIBLE_LINES: u16 = 10;

const INPUT_BORDER_HEIGHT: u16 = 2;

/// Calculate the prompt input widget height with a capped visible viewport.
///
/// The returned height includes top and bottom borders and limits the visible
/// content area to [`INPUT_MAX_VISIBLE_LINES`].
pub fn calculate_input_height(width: u16, input: &str) -> u16 {
    let char_count = input.chars().count();
    let (_, _, cursor_y) = compute_input_layout(input, width, char_count);

    let content_line_count = cursor_y.saturating_add(1);

    content_line_count
        .min(INPUT_MAX_VISIBLE_LINES)
        .saturating_add(INPUT_BORDER_HEIGHT)
}

/// Compute prompt input lines and the cursor position for rendering.
///
/// The first line starts with the visible prompt prefix (` › `). Continuation
/// lines (from wrapping or explicit newlines) keep the same horizontal padding
/// as spaces, so text never appears under the prompt icon.
pub fn compute_input_layout(
    input: &str,
    width: u16,
    cursor: usize,
) -> (Vec<Line<'static>>, u16, u16) {
    cursor_from_layout(
        compute_layout_data(input, width, LayoutPrefix::Prompt),
        cursor,
    )
}

/// Compute editor text lines and the cursor position without a prompt prefix.
pub fn compute_text_layout(
    input: &str,
    width: u16,
    cursor: usize,
) -> (Vec<Line<'static>>, u16, u16) {
    cursor_from_layout(compute_layout_data(input, width, LayoutPrefix::None), cursor)
}

/// Calculate the input viewport scroll offset and cursor row inside it.
///
/// Returns `(scroll_offset, cursor_row)` where:
/// - `scroll_offset` is the number of content lines hidden above the viewport.
/// - `cursor_row` is the cursor's row relative to the viewport top.
pub fn calculate_input_viewport(
    total_line_count: usize,
    cursor_y: u16,
    viewport_height: u16,
) -> (u16, u16) {
    if viewport_height == 0 {
        return (0, 0);
    }

    let total_line_count = u16::try_from(total_line_count).unwrap_or(u16::MAX).max(1);
    let clamped_cursor_y = cursor_y.min(total_line_count.saturating_sub(1));
    let viewport_height = viewport_height.min(total_line_count);
    let max_scroll = total_line_count.saturating_sub(viewport_height);
    let scroll_offset = clamped_cursor_y
        .saturating_sub(viewport_height.saturating_sub(1))
        .min(max_scroll);
    let cursor_row = clamped_cursor_y.saturating_sub(scroll_offset);

    (scroll_offset, cursor_row)
}

#[derive(Clone, Copy)]
enum LayoutPrefix {
    None,
    Prompt,
}

struct InputLayout {
    cursor_positions: Vec<(usize, usize)>,
    display_lines: Vec<Line<'static>>,
}

fn cursor_from_layout(layout: InputLayout, cursor: usize) -> (Vec<Line<'static>>, u16, u16) {
    let clamped_cursor = cursor.min(layout.cursor_positions.len().saturating_sub(1));
    let (cursor_x, cursor_y) = layout.cursor_positions[clamped_cursor];

    (
        layout.display_lines,
        u16::try_from(cursor_x).unwrap_or(u16::MAX),
        u16::try_from(cursor_y).unwrap_or(u16::MAX),
    )
}

fn compute_layout_data(input: &str, width: u16, prefix: LayoutPrefix) -> InputLayout {
    let inner_width = width.saturating_sub(2) as usize;
    let first_line_spans = match prefix {
        LayoutPrefix::None => Vec::new(),
        LayoutPrefix::Prompt => vec![Span::styled(
            " › ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )],
    };
    let prefix_width = first_line_spans.iter().map(Span::width).sum::<usize>();
    let continuation_padding = " ".repeat(prefix_width);

    let mut display_lines = Vec::new();
    let mut cursor_positions = Vec::with_capacity(input.chars().count() + 1);
    let mut current_line_spans = first_line_spans;
    let mut current_width = prefix_width;
    let mut line_index: usize = 0;

    for ch in input.chars() {
        if ch == '\n' {
            cursor_positions.push((current_width, line_index));
            display_lines.push(Line::from(std::mem::take(&mut current_line_spans)));
            current_line_spans = continuation_line_start(&continuation_padding);
            current_width = prefix_width;
            line_index += 1;

            continue;
        }

        let char_span = Span::raw(ch.to_string());
        let char_width = char_span.width();

        if current_width + char_width > inner_width {
            display_lines.push(Line::from(std::mem::take(&mut current_line_spans)));
            current_line_spans = continuation_line_start(&continuation_padding);
            current_width = prefix_width;
            line_index += 1;
        }

        cursor_positions.push((current_width, line_index));
        current_line_spans.push(char_span);
        current_width += char_width;
    }

    if current_width >= inner_width {
        cursor_positions.push((prefix_width, line_index + 1));
    } else {
        cursor_positions.push((current_width, line_index));
    }

    if !current_line_spans.is_empty() {
        display_lines.push(Line::from(current_line_spans));
    }

    if display_lines.is_empty() {
        display_lines.push(Line::from(""));
    }

    InputLayout {
        cursor_positions,
        display_lines,
    }
}

fn continuation_line_start(continuation_padding: &str) -> Vec<Span<'static>> {
    if continuation_padding.is_empty() {
        Vec::new()
    } else {
        vec![Span::raw(continuation_padding.to_string())]
    }
}

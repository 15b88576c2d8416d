use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use super::app::App;
use crate::types::waveform::Waveform;

/// Render the TUI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Plot
            Constraint::Length(4), // Help
        ])
        .split(frame.size());

    render_title(frame, chunks[0], app);
    render_plot(frame, chunks[1], app);
    render_help(frame, chunks[2], app);
}

/// Trace colour for a waveform
pub fn trace_color(waveform: Waveform) -> Color {
    match waveform {
        Waveform::Sine => Color::Red,
        Waveform::Square => Color::Blue,
        Waveform::Sawtooth => Color::Yellow,
        Waveform::Triangle => Color::White,
    }
}

/// Render title bar with the generating parameters
fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let params = &app.parameters;
    let text = format!(
        "Frequency = {:?}, Amplitude = {:?}, Phase = {:?}",
        params.frequency, params.amplitude, params.phase
    );

    let title = Paragraph::new(text)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(title, area);
}

/// Render the four sweeps as line traces
fn render_plot(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().title("Waveforms").borders(Borders::ALL);

    if app.sample_count() == 0 {
        let empty = Paragraph::new("Degenerate sweep: no samples to plot")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let datasets: Vec<Dataset> = app
        .traces
        .iter()
        .filter(|trace| trace.visible)
        .map(|trace| {
            Dataset::default()
                .name(trace.waveform.name())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(trace_color(trace.waveform)))
                .data(&trace.points)
        })
        .collect();

    let [x_min, x_max] = app.x_bounds();
    let [y_min, y_max] = app.y_bounds();

    let x_axis = Axis::default()
        .title("Timestamp (s)")
        .style(Style::default().fg(Color::Gray))
        .bounds([x_min, x_max])
        .labels(vec![
            Span::raw(format!("{:.0}", x_min)),
            Span::raw(format!("{:.0}", (x_min + x_max) / 2.0)),
            Span::raw(format!("{:.0}", x_max)),
        ]);

    let y_axis = Axis::default()
        .title("Amplitude (V)")
        .style(Style::default().fg(Color::Gray))
        .bounds([y_min, y_max])
        .labels(vec![
            Span::raw(format!("{:.2}", y_min)),
            Span::raw("0"),
            Span::raw(format!("{:.2}", y_max)),
        ]);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis)
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    frame.render_widget(chart, area);
}

/// Render help text with per-trace visibility
fn render_help(frame: &mut Frame, area: Rect, app: &App) {
    let toggles: Vec<Span> = app
        .traces
        .iter()
        .enumerate()
        .map(|(i, trace)| {
            let style = if trace.visible {
                Style::default()
                    .fg(trace_color(trace.waveform))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!(" {}={} ", i + 1, trace.waveform.name()), style)
        })
        .collect();

    let help_text = vec![
        Line::from(toggles),
        Line::from("  1-4: Toggle trace  |  Q/Esc: Quit"),
    ];

    let help = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));

    frame.render_widget(help, area);
}

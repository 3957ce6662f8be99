use crate::chart::{padded_bounds, Chart, LineChart, ScatterChart};
use crate::surface::ChartSurface;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Axis, Block, Borders, Chart as ChartWidget, Dataset, GraphType, Paragraph,
    },
    Frame, Terminal,
};
use std::io;

const PALETTE: [Color; 8] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Red,
    Color::Blue,
    Color::LightGreen,
    Color::LightRed,
];

/// Full-screen chart viewer on the current terminal
#[derive(Debug, Default)]
pub struct TerminalSurface;

impl TerminalSurface {
    pub fn new() -> Self {
        TerminalSurface
    }
}

impl ChartSurface for TerminalSurface {
    fn show(&mut self, chart: &Chart) -> Result<()> {
        run_viewer(chart)
    }
}

pub fn run_viewer(chart: &Chart) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = match enter_screen(io::stdout()) {
        Ok(terminal) => terminal,
        Err(err) => {
            // Never hand the menu back a raw-mode terminal
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(err.into());
        }
    };

    let res = view_loop(&mut terminal, chart);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(Into::into)
}

fn enter_screen<W: io::Write>(mut out: W) -> io::Result<Terminal<CrosstermBackend<W>>> {
    execute!(out, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(out))
}

fn view_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    chart: &Chart,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_chart(f, chart))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => return Ok(()),
                _ => {}
            }
        }
    }
}

pub fn render_chart(f: &mut Frame, chart: &Chart) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Chart
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    match chart {
        Chart::Line(line) => render_line_chart(f, chunks[0], line),
        Chart::Scatter(scatter) if scatter.annotated => {
            render_annotated_scatter(f, chunks[0], scatter)
        }
        Chart::Scatter(scatter) => render_scatter(f, chunks[0], scatter),
    }

    render_status_bar(f, chunks[1], chart);
}

fn chart_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
}

fn render_line_chart(f: &mut Frame, area: Rect, chart: &LineChart) {
    let points: Vec<Vec<(f64, f64)>> = chart.series.iter().map(|s| s.points()).collect();

    let datasets: Vec<Dataset> = chart
        .series
        .iter()
        .zip(points.iter())
        .enumerate()
        .map(|(i, (series, data))| {
            Dataset::default()
                .name(series.name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(PALETTE[i % PALETTE.len()]))
                .data(data)
        })
        .collect();

    let x_max = chart.categories.len().saturating_sub(1).max(1) as f64;
    let y_bounds = padded_bounds(points.iter().flatten().map(|(_, y)| *y));

    let x_labels: Vec<Span> = chart
        .categories
        .iter()
        .map(|c| Span::raw(c.clone()))
        .collect();

    let widget = ChartWidget::new(datasets)
        .block(chart_block(&format!("{} · {}", chart.title, chart.legend_title)))
        .x_axis(
            Axis::default()
                .title(chart.x_label.clone())
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(chart.y_label.clone())
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds)),
        )
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 1)));

    f.render_widget(widget, area);
}

fn render_scatter(f: &mut Frame, area: Rect, chart: &ScatterChart) {
    let data: Vec<(f64, f64)> = chart.drawable().iter().map(|(_, x, y)| (*x, *y)).collect();

    let x_bounds = padded_bounds(data.iter().map(|(x, _)| *x));
    let y_bounds = padded_bounds(data.iter().map(|(_, y)| *y));

    let dataset = Dataset::default()
        .marker(symbols::Marker::Dot)
        .graph_type(GraphType::Scatter)
        .style(Style::default().fg(Color::Cyan))
        .data(&data);

    let widget = ChartWidget::new(vec![dataset])
        .block(chart_block(&chart.title))
        .x_axis(
            Axis::default()
                .title(chart.x_label.clone())
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title(chart.y_label.clone())
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds)),
        );

    f.render_widget(widget, area);
}

/// Canvas scatter with a province label beside each point
fn render_annotated_scatter(f: &mut Frame, area: Rect, chart: &ScatterChart) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(area);

    let drawable = chart.drawable();
    let coords: Vec<(f64, f64)> = drawable.iter().map(|(_, x, y)| (*x, *y)).collect();

    let x_bounds = padded_bounds(coords.iter().map(|(x, _)| *x));
    let y_bounds = padded_bounds(coords.iter().map(|(_, y)| *y));
    let nudge = (x_bounds[1] - x_bounds[0]) * 0.01;

    let canvas = Canvas::default()
        .block(chart_block(&chart.title))
        .marker(symbols::Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            // Axes along the lower-left border
            ctx.draw(&CanvasLine {
                x1: x_bounds[0],
                y1: y_bounds[0],
                x2: x_bounds[1],
                y2: y_bounds[0],
                color: Color::DarkGray,
            });
            ctx.draw(&CanvasLine {
                x1: x_bounds[0],
                y1: y_bounds[0],
                x2: x_bounds[0],
                y2: y_bounds[1],
                color: Color::DarkGray,
            });
            ctx.draw(&Points {
                coords: &coords,
                color: Color::Cyan,
            });
            ctx.layer();

            for (label, x, y) in &drawable {
                ctx.print(
                    *x + nudge,
                    *y,
                    Span::styled(label.to_string(), Style::default().fg(Color::White)),
                );
            }
        });

    f.render_widget(canvas, chunks[0]);

    let caption = vec![
        Line::from(vec![
            Span::styled("x ", Style::default().fg(Color::Yellow)),
            Span::raw(format!(
                "{}: {} – {}",
                chart.x_label,
                format_value(x_bounds[0]),
                format_value(x_bounds[1])
            )),
        ]),
        Line::from(vec![
            Span::styled("y ", Style::default().fg(Color::Yellow)),
            Span::raw(format!(
                "{}: {} – {}",
                chart.y_label,
                format_value(y_bounds[0]),
                format_value(y_bounds[1])
            )),
        ]),
    ];

    f.render_widget(Paragraph::new(caption), chunks[1]);
}

fn render_status_bar(f: &mut Frame, area: Rect, chart: &Chart) {
    let summary = match chart {
        Chart::Line(line) => format!(
            " {} series × {} months ",
            line.series.len(),
            line.categories.len()
        ),
        Chart::Scatter(scatter) => format!(
            " {} of {} points drawn ",
            scatter.drawable().len(),
            scatter.points.len()
        ),
    };

    let status_spans = vec![
        Span::styled(summary, Style::default().fg(Color::Cyan)),
        Span::raw(" | "),
        Span::styled("q/Esc/Enter", Style::default().fg(Color::Red)),
        Span::raw(" Back to menu"),
    ];

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn axis_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .iter()
        .map(|v| Span::raw(format_value(*v)))
        .collect()
}

fn format_value(value: f64) -> String {
    if value.abs() >= 1000.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

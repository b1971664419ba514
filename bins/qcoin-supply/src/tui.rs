//! Terminal chart renderer.
//!
//! One-shot ratatui draw into the alternate screen; any key exits. All the
//! plottable data arrives pre-scaled in a [`ChartModel`].

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Frame;
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};
use ratatui::Terminal;

use crate::chart::ChartModel;

/// Display the chart until a key is pressed.
pub fn show_chart(model: &ChartModel, title: &str) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, model, title);

    // Restore the terminal even if drawing failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    model: &ChartModel,
    title: &str,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, model, title))?;
        if matches!(event::read()?, Event::Key(_)) {
            return Ok(());
        }
    }
}

/// Draw the supply chart into a frame.
pub fn render(frame: &mut Frame, model: &ChartModel, title: &str) {
    let cap_label = format!("{} Million Cap", model.cap_millions);
    let datasets = vec![
        Dataset::default()
            .name("Total QCoin Supply")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(&model.series),
        Dataset::default()
            .name(cap_label)
            .marker(Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Gray))
            .data(&model.cap_line),
    ];

    let chart = Chart::new(datasets)
        .block(Block::default().title(title.to_string()).borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title("Year")
                .style(Style::default().fg(Color::DarkGray))
                .bounds(model.x_bounds)
                .labels(model.x_labels.clone()),
        )
        .y_axis(
            Axis::default()
                .title("Supply (millions QC)")
                .style(Style::default().fg(Color::DarkGray))
                .bounds(model.y_bounds)
                .labels(model.y_labels.clone()),
        );

    frame.render_widget(chart, frame.area());
}

#[cfg(test)]
mod tests {
    use super::*;
    use qcoin_emission::{SimulationParams, simulate};
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn chart_renders_title_axes_and_legend() {
        let params = SimulationParams::default();
        let curve = simulate(&params).unwrap();
        let model = ChartModel::build(&curve, params.supply_cap).unwrap();

        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, &model, "Total QCoin Supply Over Time"))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Total QCoin Supply Over Time"));
        assert!(text.contains("Year"));
        assert!(text.contains("21 Million Cap"));
        assert!(text.contains("2009"));
        assert!(text.contains("21.0"));
    }
}

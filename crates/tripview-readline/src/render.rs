//! Colored printing of screens and session events.

use std::io::{self, Write};

use colored::Colorize;
use tripview_application::presenter::{MapRegion, SidebarView};
use tripview_application::{MapPanel, MapWidget, Screen, SessionEvent};
use tripview_core::selection::SelectionEvent;

pub fn write_screen<O: Write, W: MapWidget>(
    out: &mut O,
    screen: &Screen,
    panel: &mut MapPanel<W>,
) -> io::Result<()> {
    match screen {
        Screen::Ready { sidebar, map } => {
            write_sidebar(out, sidebar)?;
            writeln!(out)?;
            // The widget writes to its own sink.
            out.flush()?;
            if let MapRegion::Unavailable { message } = panel.draw(map) {
                writeln!(out, "{}", message.red())?;
            }
        }
        Screen::Error { .. } => {
            if let Some(message) = screen.status_message() {
                writeln!(out, "{}", message.red())?;
            }
        }
        Screen::Loading | Screen::Empty => {
            if let Some(message) = screen.status_message() {
                writeln!(out, "{}", message.bright_black())?;
            }
        }
    }
    out.flush()
}

fn write_sidebar<O: Write>(out: &mut O, sidebar: &SidebarView) -> io::Result<()> {
    writeln!(out, "{}", sidebar.trip_title.bright_magenta().bold())?;
    for day in &sidebar.days {
        let line = format!("[{}] {}", day.day_id, day.label);
        if day.active {
            writeln!(out, "> {}", line.bright_green().bold())?;
        } else {
            writeln!(out, "  {}", line)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", sidebar.activities_label.bold())?;
    for card in &sidebar.activities {
        let title = format!("#{} {}", card.activity_id, card.name);
        if card.highlighted {
            writeln!(out, "* {}", title.bright_red().bold())?;
        } else {
            writeln!(out, "  {}", title.bright_blue())?;
        }
        if !card.description.is_empty() {
            writeln!(out, "     {}", card.description)?;
        }
        writeln!(
            out,
            "     {} {}",
            card.photo_alt.bright_black(),
            card.photo_url.bright_black()
        )?;
    }
    Ok(())
}

pub fn event_text(event: &SessionEvent) -> String {
    match event {
        SessionEvent::PhaseChanged(phase) => format!("phase -> {:?}", phase),
        SessionEvent::Selection(SelectionEvent::DaySelected { day_id, initial }) => {
            if *initial {
                format!("day {} selected (initial)", day_id)
            } else {
                format!("day {} selected", day_id)
            }
        }
        SessionEvent::Selection(SelectionEvent::HoverChanged { activity_id }) => {
            match activity_id {
                Some(id) => format!("hovering activity {}", id),
                None => "hover cleared".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripview_application::presenter::{ActivityCardView, DayButtonView, MAP_FAILED_MESSAGE};
    use tripview_core::trip::Coords;
    use tripview_core::view::{MapScene, ViewPhase};
    use tripview_core::{Result, TripviewError};

    #[derive(Default)]
    struct CountingWidget {
        renders: usize,
        fail: bool,
    }

    impl MapWidget for CountingWidget {
        fn initialize(&mut self, _api_key: &str) -> Result<()> {
            Ok(())
        }

        fn render(&mut self, _scene: &MapScene) -> Result<()> {
            if self.fail {
                return Err(TripviewError::map_provider("offline"));
            }
            self.renders += 1;
            Ok(())
        }
    }

    fn ready_screen() -> Screen {
        Screen::Ready {
            sidebar: SidebarView {
                trip_title: "Rome".to_string(),
                days: vec![
                    DayButtonView {
                        day_id: 1,
                        label: "Day 1: Ancient Rome".to_string(),
                        active: true,
                    },
                    DayButtonView {
                        day_id: 2,
                        label: "Day 2: Vatican".to_string(),
                        active: false,
                    },
                ],
                activities_label: "Activities for Day 1".to_string(),
                activities: vec![ActivityCardView {
                    activity_id: 10,
                    name: "Colosseum".to_string(),
                    description: "Arena tour".to_string(),
                    photo_url: "/photos/colosseum.jpg".to_string(),
                    photo_alt: "View of Colosseum".to_string(),
                    highlighted: true,
                }],
            },
            map: MapScene {
                center: Coords::new(41.8902, 12.4922),
                zoom: 14,
                markers: vec![],
            },
        }
    }

    fn render(screen: &Screen, panel: &mut MapPanel<CountingWidget>) -> String {
        let mut out = Vec::new();
        write_screen(&mut out, screen, panel).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_ready_screen_lists_sidebar_and_draws_map() {
        let mut panel = MapPanel::new(CountingWidget::default(), Some("key"));
        let text = render(&ready_screen(), &mut panel);

        let active = text.lines().find(|l| l.contains("Ancient Rome")).unwrap();
        assert!(active.starts_with('>'));
        let other = text.lines().find(|l| l.contains("Vatican")).unwrap();
        assert!(other.starts_with("  "));

        assert!(text.contains("Activities for Day 1"));
        let card = text.lines().find(|l| l.contains("#10 Colosseum")).unwrap();
        assert!(card.starts_with('*'));
        assert!(text.contains("View of Colosseum"));
        assert!(text.contains("Arena tour"));

        assert_eq!(panel.widget().renders, 1);
        assert!(!text.contains(MAP_FAILED_MESSAGE));
    }

    #[test]
    fn test_map_failure_is_printed_below_sidebar() {
        let widget = CountingWidget {
            fail: true,
            ..Default::default()
        };
        let mut panel = MapPanel::new(widget, Some("key"));
        let text = render(&ready_screen(), &mut panel);

        assert!(text.contains("Rome"));
        assert!(text.contains(MAP_FAILED_MESSAGE));
    }

    #[test]
    fn test_status_screens() {
        let mut panel = MapPanel::new(CountingWidget::default(), None);

        let text = render(
            &Screen::Error {
                message: "Failed to fetch trip data: HTTP 404 Not Found".to_string(),
            },
            &mut panel,
        );
        assert!(text.contains("Error loading data: Failed to fetch trip data: HTTP 404 Not Found"));

        assert!(render(&Screen::Loading, &mut panel).contains("Loading..."));
        assert!(render(&Screen::Empty, &mut panel).contains("No trip data available"));
        assert_eq!(panel.widget().renders, 0);
    }

    #[test]
    fn test_event_text() {
        assert_eq!(
            event_text(&SessionEvent::PhaseChanged(ViewPhase::Ready)),
            "phase -> Ready"
        );
        assert_eq!(
            event_text(&SessionEvent::Selection(SelectionEvent::DaySelected {
                day_id: 1,
                initial: true
            })),
            "day 1 selected (initial)"
        );
        assert_eq!(
            event_text(&SessionEvent::Selection(SelectionEvent::HoverChanged {
                activity_id: None
            })),
            "hover cleared"
        );
    }
}

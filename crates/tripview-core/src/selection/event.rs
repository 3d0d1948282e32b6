use serde::{Deserialize, Serialize};

use crate::trip::{ActivityId, DayId};

/// Transitions of the selection state.
///
/// Only produced for real changes; re-delivering the same interaction yields
/// no event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectionEvent {
    /// The active day changed. `initial` marks the automatic first-day selection.
    DaySelected {
        day_id: DayId,
        #[serde(default)]
        initial: bool,
    },
    /// The hovered activity changed (`None` = pointer left).
    HoverChanged { activity_id: Option<ActivityId> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(SelectionEvent::DaySelected {
            day_id: 2,
            initial: false,
        })
        .unwrap();
        assert_eq!(json["type"], "day_selected");
        assert_eq!(json["day_id"], 2);

        let event: SelectionEvent =
            serde_json::from_str(r#"{"type":"hover_changed","activity_id":null}"#).unwrap();
        assert_eq!(event, SelectionEvent::HoverChanged { activity_id: None });
    }
}

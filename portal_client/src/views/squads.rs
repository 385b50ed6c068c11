use itertools::Itertools;
use portal_api_types::Squad;

/// Active squads by name.
pub fn roster(squads: impl IntoIterator<Item = Squad>) -> Vec<Squad> {
    squads
        .into_iter()
        .filter(|squad| squad.active)
        .sorted_by_cached_key(|squad| squad.name.to_lowercase())
        .collect()
}

/// Who leads the squad: the linked commander, else the free-text command.
pub fn commander_label(squad: &Squad) -> Option<String> {
    squad
        .commander
        .as_ref()
        .map(|commander| commander.display_name())
        .or_else(|| squad.squad_command.clone())
        .filter(|label| !label.trim().is_empty())
}

/// Badge color, defaulting to a neutral gray when unset or not a hex color.
pub fn badge_color(squad: &Squad) -> &str {
    squad
        .color
        .as_deref()
        .map(str::trim)
        .filter(|color| {
            color.starts_with('#')
                && matches!(color.len(), 4 | 7)
                && color[1..].chars().all(|c| c.is_ascii_hexdigit())
        })
        .unwrap_or("#6b7280")
}

use std::collections::BTreeMap;

use chrono::NaiveDate;
use portal_api_types::AgendaItem;
use tracing::warn;

/// Agenda items sharing one calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct AgendaGroup {
    pub date: NaiveDate,
    /// In the order the backend returned them.
    pub items: Vec<AgendaItem>,
    /// Strictly before `today`.
    pub past: bool,
}

/// Buckets items by the date part of their `data` field, ignoring the time of
/// day, in ascending date order.
pub fn group_by_date(
    items: impl IntoIterator<Item = AgendaItem>,
    today: NaiveDate,
) -> Vec<AgendaGroup> {
    let mut buckets = BTreeMap::<NaiveDate, Vec<AgendaItem>>::new();

    for item in items {
        match item.calendar_date() {
            Some(date) => buckets.entry(date).or_default().push(item),
            None => warn!(id = %item.id, date = %item.date, "Skipping agenda item with unparseable date"),
        }
    }

    buckets
        .into_iter()
        .map(|(date, items)| AgendaGroup {
            date,
            items,
            past: date < today,
        })
        .collect()
}

/// Groups dated today or later.
pub fn upcoming(groups: &[AgendaGroup]) -> impl Iterator<Item = &AgendaGroup> {
    groups.iter().filter(|group| !group.past)
}

#[cfg(test)]
mod tests {
    use portal_api_types::EntityId;

    use super::*;

    fn item(id: i64, date: &str) -> AgendaItem {
        AgendaItem {
            id: EntityId::from(id),
            title: format!("Evento {id}"),
            description: None,
            date: date.to_owned(),
            time: None,
            location: None,
            kind: None,
            active: true,
            order: None,
        }
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn same_date_shares_a_bucket_regardless_of_time() {
        let groups = group_by_date(
            vec![
                item(1, "2024-03-02"),
                item(2, "2024-03-01T20:00:00.000Z"),
                item(3, "2024-03-01"),
            ],
            ymd(2024, 1, 1),
        );

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].date, ymd(2024, 3, 1));
        assert_eq!(
            groups[0].items.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
            vec!["2", "3"]
        );
        assert_eq!(groups[1].date, ymd(2024, 3, 2));
        assert_eq!(groups[1].items.len(), 1);
    }

    #[test]
    fn past_is_strictly_before_today() {
        let today = ymd(2024, 3, 2);
        let groups = group_by_date(
            vec![
                item(1, "2024-03-01"),
                item(2, "2024-03-02"),
                item(3, "2024-03-03"),
            ],
            today,
        );

        assert_eq!(
            groups.iter().map(|g| g.past).collect::<Vec<_>>(),
            vec![true, false, false]
        );
        assert_eq!(upcoming(&groups).count(), 2);
    }

    #[test]
    fn unparseable_dates_are_skipped() {
        let groups = group_by_date(
            vec![item(1, "amanhã"), item(2, "2024-03-01")],
            ymd(2024, 1, 1),
        );
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].items[0].id, EntityId::from(2));
    }

    #[test]
    fn empty_input() {
        assert!(group_by_date(Vec::new(), ymd(2024, 1, 1)).is_empty());
    }
}

use chrono::NaiveDate;
use itertools::Itertools;
use portal_api_types::Training;

/// Trainings split around `today`. Upcoming ones soonest first, past ones
/// most recent first. Trainings without a readable date count as upcoming.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingSchedule {
    pub upcoming: Vec<Training>,
    pub past: Vec<Training>,
}

pub fn schedule(trainings: impl IntoIterator<Item = Training>, today: NaiveDate) -> TrainingSchedule {
    let (past, upcoming): (Vec<_>, Vec<_>) = trainings
        .into_iter()
        .filter(|training| training.active)
        .partition(|training| training.calendar_date().is_some_and(|date| date < today));

    TrainingSchedule {
        upcoming: upcoming
            .into_iter()
            .sorted_by_key(|training| (training.calendar_date().is_none(), training.scheduled_at.clone()))
            .collect(),
        past: past
            .into_iter()
            .sorted_by(|a, b| b.scheduled_at.cmp(&a.scheduled_at))
            .collect(),
    }
}

/// Sorted distinct training kinds, for the kind selector.
pub fn kinds(trainings: &[Training]) -> Vec<String> {
    trainings
        .iter()
        .filter_map(|training| training.kind.as_deref())
        .map(str::trim)
        .filter(|kind| !kind.is_empty())
        .unique()
        .sorted()
        .map(str::to_owned)
        .collect()
}

/// Whether the subscribe action should be offered.
pub fn can_subscribe(training: &Training, today: NaiveDate) -> bool {
    training.status.accepts_subscriptions()
        && training.open_seats() != Some(0)
        && training.calendar_date().map_or(true, |date| date >= today)
}

#[cfg(test)]
mod tests {
    use portal_api_types::{EntityId, TrainingStatus, UserRef};

    use super::*;

    fn training(id: i64, at: &str, status: TrainingStatus) -> Training {
        Training {
            id: EntityId::from(id),
            title: format!("Treino {id}"),
            description: None,
            scheduled_at: at.to_owned(),
            location: None,
            instructor_name: None,
            kind: None,
            duration_minutes: None,
            max_participants: None,
            participants: Vec::new(),
            status,
            active: true,
        }
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn splits_and_orders_around_today() {
        let schedule = schedule(
            vec![
                training(1, "2024-03-10T09:00:00Z", TrainingStatus::Scheduled),
                training(2, "2024-02-01T09:00:00Z", TrainingStatus::Completed),
                training(3, "2024-03-05T09:00:00Z", TrainingStatus::Scheduled),
                training(4, "2024-02-20T09:00:00Z", TrainingStatus::Completed),
                training(5, "2024-03-05", TrainingStatus::InProgress),
            ],
            ymd(2024, 3, 5),
        );

        let ids = |list: &[Training]| list.iter().map(|t| t.id.to_string()).collect::<Vec<_>>();
        assert_eq!(ids(&schedule.upcoming), vec!["5", "3", "1"]);
        assert_eq!(ids(&schedule.past), vec!["4", "2"]);
    }

    #[test]
    fn subscription_requires_open_scheduled_future_training() {
        let today = ymd(2024, 3, 5);
        let mut open = training(1, "2024-03-10", TrainingStatus::Scheduled);
        assert!(can_subscribe(&open, today));

        open.max_participants = Some(1);
        open.participants.push(UserRef {
            id: EntityId::from(3),
            name: None,
            email: None,
            call_sign: None,
        });
        assert!(!can_subscribe(&open, today));

        assert!(!can_subscribe(
            &training(2, "2024-03-10", TrainingStatus::Cancelled),
            today
        ));
        assert!(!can_subscribe(
            &training(3, "2024-03-01", TrainingStatus::Scheduled),
            today
        ));
    }
}

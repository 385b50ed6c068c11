use chrono::NaiveDate;
use portal_api_types::{Faq, NewsArticle, Squad, Training};
use portal_client::views::agenda::AgendaGroup;
use portal_client::views::format::{day_label, duration, status_label, time_of_day, timestamp};
use portal_client::views::news::NewsFeed;
use portal_client::views::squads::commander_label;
use portal_client::views::trainings::{can_subscribe, TrainingSchedule};

pub fn agenda(groups: &[AgendaGroup], today: NaiveDate) -> String {
    if groups.is_empty() {
        return "Nenhum evento programado.".to_owned();
    }

    let mut out = String::new();
    for group in groups {
        let suffix = if group.past { " (encerrado)" } else { "" };
        out.push_str(&format!("{}{suffix}\n", day_label(group.date, today)));
        for item in &group.items {
            let time = item
                .time
                .as_deref()
                .and_then(time_of_day)
                .unwrap_or_else(|| "--:--".to_owned());
            out.push_str(&format!("  {time}  {}", item.title));
            if let Some(location) = &item.location {
                out.push_str(&format!(" @ {location}"));
            }
            out.push('\n');
        }
    }
    out.trim_end().to_owned()
}

pub fn news(feed: &NewsFeed) -> String {
    if feed.is_empty() {
        return "Nenhuma notícia encontrada.".to_owned();
    }

    let mut out = String::new();
    if let Some(article) = &feed.featured {
        out.push_str(&format!("★ {}\n", headline(article)));
    }
    for article in &feed.grid {
        out.push_str(&format!("• {}\n", headline(article)));
    }
    out.trim_end().to_owned()
}

fn headline(article: &NewsArticle) -> String {
    let mut line = article.title.clone();
    if let Some(category) = &article.category {
        line.push_str(&format!(" [{category}]"));
    }
    if let Some(published_at) = &article.published_at {
        line.push_str(&format!(" {}", timestamp(published_at)));
    }
    line
}

pub fn squads(squads: &[Squad]) -> String {
    if squads.is_empty() {
        return "Nenhum squad ativo.".to_owned();
    }

    squads
        .iter()
        .map(|squad| {
            let mut line = format!("{} ({} membros)", squad.name, squad.members.len());
            if let Some(commander) = commander_label(squad) {
                line.push_str(&format!(" - comando: {commander}"));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn faqs(faqs: &[Faq]) -> String {
    if faqs.is_empty() {
        return "Nenhuma pergunta cadastrada.".to_owned();
    }

    faqs.iter()
        .map(|faq| format!("P: {}\nR: {}", faq.question, faq.answer))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn trainings(schedule: &TrainingSchedule, today: NaiveDate) -> String {
    if schedule.upcoming.is_empty() && schedule.past.is_empty() {
        return "Nenhum treinamento encontrado.".to_owned();
    }

    let mut out = String::new();
    for (title, trainings) in [("Próximos", &schedule.upcoming), ("Realizados", &schedule.past)] {
        if trainings.is_empty() {
            continue;
        }
        out.push_str(&format!("{title}\n"));
        for training in trainings {
            out.push_str(&format!("  {}\n", training_line(training, today)));
        }
    }
    out.trim_end().to_owned()
}

fn training_line(training: &Training, today: NaiveDate) -> String {
    let mut line = format!(
        "[{}] {} - {} ({})",
        training.id,
        timestamp(&training.scheduled_at),
        training.title,
        status_label(training.status)
    );
    if let Some(minutes) = training.duration_minutes {
        line.push_str(&format!(", {}", duration(minutes)));
    }
    if can_subscribe(training, today) {
        line.push_str(", inscrições abertas");
    }
    line
}

#[cfg(test)]
mod tests {
    use portal_api_types::{AgendaItem, EntityId, TrainingStatus};
    use portal_client::views::agenda::group_by_date;

    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn event(id: i64, date: &str, time: Option<&str>) -> AgendaItem {
        AgendaItem {
            id: EntityId::from(id),
            title: format!("Evento {id}"),
            description: None,
            date: date.to_owned(),
            time: time.map(str::to_owned),
            location: (id == 1).then(|| "Base".to_owned()),
            kind: None,
            active: true,
            order: None,
        }
    }

    #[test]
    fn agenda_lists_days_in_order() {
        let today = ymd(2024, 3, 1);
        let groups = group_by_date(
            [
                event(1, "2024-03-01", Some("19:30:00")),
                event(2, "2024-03-02", None),
            ],
            today,
        );

        assert_eq!(
            agenda(&groups, today),
            "Hoje\n  19:30  Evento 1 @ Base\nAmanhã\n  --:--  Evento 2"
        );
        assert_eq!(agenda(&[], today), "Nenhum evento programado.");
    }

    #[test]
    fn trainings_mark_open_subscriptions() {
        let today = ymd(2024, 3, 1);
        let training = Training {
            id: EntityId::from(9),
            title: "Tiro".to_owned(),
            description: None,
            scheduled_at: "2024-03-10".to_owned(),
            location: None,
            instructor_name: None,
            kind: None,
            duration_minutes: Some(90),
            max_participants: None,
            participants: vec![],
            status: TrainingStatus::Scheduled,
            active: true,
        };
        let schedule = TrainingSchedule {
            upcoming: vec![training],
            past: vec![],
        };

        assert_eq!(
            trainings(&schedule, today),
            "Próximos\n  [9] 10/03/2024 - Tiro (Agendado), 1h30, inscrições abertas"
        );
    }
}

use crate::models::{TeamMember, Weekday};

/// How many members listed a given day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTally {
    pub day: Weekday,
    pub count: usize,
    pub members: Vec<String>,
}

impl DayTally {
    pub fn short_label(&self) -> &'static str {
        self.day.short_label()
    }

    pub fn noun(&self) -> &'static str {
        if self.count == 1 { "person" } else { "people" }
    }
}

/// Per-day counts for the whole week, Monday first.
///
/// A member counts toward a day if any of their availability entries
/// names it. Windows are not merged or compared.
pub fn weekly_overview(members: &[TeamMember]) -> Vec<DayTally> {
    Weekday::ALL
        .iter()
        .map(|&day| {
            let names: Vec<String> = members
                .iter()
                .filter(|m| m.availability.iter().any(|a| a.day == day.label()))
                .map(|m| m.name.clone())
                .collect();
            DayTally {
                day,
                count: names.len(),
                members: names,
            }
        })
        .collect()
}

pub struct MemberCard {
    pub id: String,
    pub name: String,
    pub initial: String,
    pub days_available: String,
    pub days: Vec<DayCard>,
}

pub struct DayCard {
    pub label: String,
    pub windows: Vec<String>,
}

pub fn member_cards(members: &[TeamMember]) -> Vec<MemberCard> {
    members.iter().map(member_card).collect()
}

fn member_card(member: &TeamMember) -> MemberCard {
    let day_count = member.availability.len();
    let days_available = if day_count == 1 {
        "1 day available".to_string()
    } else {
        format!("{day_count} days available")
    };

    MemberCard {
        id: member.id.clone(),
        name: member.name.clone(),
        initial: member
            .name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default(),
        days_available,
        days: member
            .availability
            .iter()
            .map(|a| DayCard {
                label: a.day.chars().take(3).collect(),
                windows: a
                    .windows
                    .iter()
                    .map(|w| format!("{} - {}", w.start, w.end))
                    .collect(),
            })
            .collect(),
    }
}

use indexmap::IndexMap;

use crate::modules::activities::core::activity::Activity;

const SEED: &[(&str, &str, &str, u32, &[&str])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Competitive basketball training and matches",
        "Mondays and Thursdays, 4:00 PM - 5:30 PM",
        15,
        &["james@mergington.edu"],
    ),
    (
        "Tennis Club",
        "Tennis skills development and friendly competitions",
        "Wednesdays and Saturdays, 3:00 PM - 4:30 PM",
        10,
        &["laura@mergington.edu"],
    ),
    (
        "Art Studio",
        "Painting, drawing, and visual arts exploration",
        "Tuesdays, 3:30 PM - 5:00 PM",
        18,
        &["isabella@mergington.edu", "noah@mergington.edu"],
    ),
    (
        "Music Ensemble",
        "Orchestra and band performance group",
        "Thursdays, 4:00 PM - 5:30 PM",
        25,
        &["ava@mergington.edu"],
    ),
    (
        "Debate Team",
        "Competitive debate and public speaking skills",
        "Mondays and Wednesdays, 3:30 PM - 4:30 PM",
        16,
        &["lucas@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Science Club",
        "Hands-on experiments and scientific inquiry",
        "Fridays, 3:30 PM - 5:00 PM",
        14,
        &["ethan@mergington.edu"],
    ),
];

/// The activities every fresh registry starts with, in display order.
pub fn seed_activities() -> IndexMap<String, Activity> {
    SEED.iter()
        .map(|(name, description, schedule, max_participants, participants)| {
            (
                name.to_string(),
                Activity {
                    description: description.to_string(),
                    schedule: schedule.to_string(),
                    max_participants: *max_participants,
                    participants: participants.iter().map(|p| p.to_string()).collect(),
                },
            )
        })
        .collect()
}

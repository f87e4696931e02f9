use std::collections::BTreeMap;

use crate::domain::models::activity::Activity;

/// Fixed catalog of the reference deployment. Seeded once at startup; only
/// the rosters change afterwards.
pub fn seed_catalog() -> BTreeMap<String, Activity> {
    let mut catalog = BTreeMap::new();
    catalog.insert(
        "Chess Club".to_string(),
        Activity::with_participants(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    );
    catalog.insert(
        "Programming Class".to_string(),
        Activity::with_participants(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
    );
    catalog.insert(
        "Gym Class".to_string(),
        Activity::with_participants(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    );
    catalog.insert(
        "Basketball Team".to_string(),
        Activity::with_participants(
            "Practice and compete in basketball tournaments",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            15,
            &["liam@mergington.edu", "ava@mergington.edu"],
        ),
    );
    catalog.insert(
        "Swimming Club".to_string(),
        Activity::with_participants(
            "Swimming training and swim meets",
            "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
            20,
            &["noah@mergington.edu", "isabella@mergington.edu"],
        ),
    );
    catalog.insert(
        "Drama Club".to_string(),
        Activity::with_participants(
            "Acting, stage production, and school plays",
            "Wednesdays, 3:30 PM - 5:30 PM",
            25,
            &["mia@mergington.edu", "lucas@mergington.edu"],
        ),
    );
    catalog.insert(
        "Visual Arts Workshop".to_string(),
        Activity::with_participants(
            "Drawing, painting, and mixed-media projects",
            "Thursdays, 3:30 PM - 5:00 PM",
            16,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
    );
    catalog.insert(
        "Robotics Club".to_string(),
        Activity::with_participants(
            "Design, build, and program competition robots",
            "Fridays, 3:30 PM - 5:30 PM",
            18,
            &["ethan@mergington.edu", "charlotte@mergington.edu"],
        ),
    );
    catalog.insert(
        "Math Olympiad".to_string(),
        Activity::with_participants(
            "Problem-solving practice for math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            12,
            &["james@mergington.edu", "evelyn@mergington.edu"],
        ),
    );
    catalog
}

use chrono::DateTime;
use temporal_mask::{expand, matches, TimeFields};

const BUSINESS_HOURS: &str = "W>=1 & W<=5 & h>=9 & h<=18";
const WEEKEND_OR_AFTERNOON: &str = "W==0 | W==6 | (h==15 | h==11)";
const SAME_HOUR_AS_NOW: &str = "h==now";

const TIMESTAMPS: [&str; 3] = [
    "2019-08-26T15:15:15Z",
    "2019-08-25T11:30:00Z",
    "2019-08-27T20:30:00Z",
];

fn main() {
    // Evaluate a couple of absolute masks against each timestamp
    for timestamp in TIMESTAMPS {
        let parsed = DateTime::parse_from_rfc3339(timestamp).unwrap();
        let fields = TimeFields::from(&parsed);
        for mask in [BUSINESS_HOURS, WEEKEND_OR_AFTERNOON] {
            match matches(mask, &fields) {
                Ok(matched) => println!("{timestamp} against {mask:?}: {matched}"),
                Err(error) => println!("{timestamp} against {mask:?}: {error}"),
            }
        }
    }

    // Relative masks are expanded against "now" before matching
    let now = chrono::Utc::now();
    let now = TimeFields::from(&now);
    let mask = expand(SAME_HOUR_AS_NOW, &now);
    println!(
        "expanded {SAME_HOUR_AS_NOW:?} to {mask:?}: {:?}",
        matches(&mask, &now)
    );
}

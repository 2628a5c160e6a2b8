use devraha_normalize::normalize_cow_with_report;
use serde_json::json;

fn main() {
    let raw = json!({
        "_id": "65a1f0c2e4b0a1b2c3d4e5f6",
        "name": "Nandini",
        "gender": "Bull",
        "photos": "https://cdn.example.org/cows/2.jpg",
        "calf": "false",
        "totalDonated": "1,500"
    });

    let normalized = normalize_cow_with_report(&raw);
    match serde_json::to_string_pretty(&normalized.value) {
        Ok(text) => println!("{}", text),
        Err(err) => {
            eprintln!("serialization failed: {}", err);
            std::process::exit(1);
        }
    }
    for warning in &normalized.report.warnings {
        eprintln!("warning: {}", warning.code());
    }
}

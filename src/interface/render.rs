use crate::models::{Nutrient, Settings};

/// Settings as an aligned multi-line block.
pub fn settings_summary(settings: &Settings) -> String {
    let mut lines = vec![
        format!("Days: {}", settings.day_count),
        format!("{:<10} {:>10} {:>10}", "", "Target", "± Error"),
    ];

    for nutrient in Nutrient::ALL {
        lines.push(format!(
            "{:<10} {:>10} {:>10}  {}",
            nutrient.label(),
            settings.targets.get(nutrient),
            settings.error_margins.get(nutrient),
            nutrient.unit()
        ));
    }

    lines.join("\n")
}

/// Display the current settings.
pub fn display_settings(settings: &Settings) {
    println!();
    println!("=== Settings ===");
    println!("{}", settings_summary(settings));
    println!();
}

/// Display generated table text.
pub fn display_table(text: &str) {
    println!();
    if text.is_empty() {
        println!("(no days to generate)");
    } else {
        let header: Vec<&str> = Nutrient::ALL.iter().map(|n| n.label()).collect();
        println!("{}", header.join("\t"));
        println!("{}", text);
    }
    println!();
}

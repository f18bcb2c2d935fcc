use std::error::Error;

use saas::{Tier, draw};

const USAGE: &str = "usage: saas [--json] [unbothered|unhinged|unleashed]";

fn main() -> Result<(), Box<dyn Error>> {
    let mut json = false;
    let mut category = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                println!("categories: {}", Tier::names().join(", "));
                return Ok(());
            }
            other => {
                if category.is_some() {
                    return Err(USAGE.into());
                }
                category = Some(other.to_string());
            }
        }
    }

    let signature = draw(category.as_deref())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&signature)?);
    } else {
        println!("[{}]\n{}", signature.tier, signature.signature);
    }

    Ok(())
}

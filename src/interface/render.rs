use crate::catalog::BerryCatalog;
use crate::models::{BerryFlags, BlendResult, Flavor};

fn flag_tags(flags: &BerryFlags) -> String {
    let mut tags = Vec::new();
    if flags.event {
        tags.push("event");
    }
    if flags.battle_rare {
        tags.push("battle-rare");
    }
    if flags.frontier {
        tags.push("frontier");
    }
    if flags.damage {
        tags.push("damage");
    }

    if tags.is_empty() {
        String::new()
    } else {
        format!("  [{}]", tags.join(", "))
    }
}

/// Display one blend result as a small table.
pub fn display_blend_result(name: &str, result: &BlendResult) {
    println!();
    println!("=== {} ===", name);
    println!();

    for flavor in Flavor::ALL {
        let value = result.stats.get(flavor);
        let marker = if Some(flavor) == result.dominant_flavor() {
            " *"
        } else {
            ""
        };
        println!("  {:<7} {:>2}{}", flavor.name(), value, marker);
    }

    println!();
    println!("Level: {}", result.level());
    println!("Feel: {}", result.feel);
    if let Some(eff) = result.efficiency {
        println!("Efficiency: {:.2}%", eff);
    }
    if let Some(rpm) = result.rpm {
        println!("RPM: {:.2}", rpm);
    }
    if let Some(time) = result.time {
        println!("Time: {:.1}s", time);
    }
    let tags = flag_tags(&result.flags);
    if !tags.is_empty() {
        println!("Flags:{}", tags);
    }
    println!();
}

/// Display every berry in the catalog.
pub fn display_catalog(catalog: &BerryCatalog) {
    if catalog.is_empty() {
        println!("Catalog: (none)");
        return;
    }

    println!();
    println!("=== Berries ({} entries) ===", catalog.len());
    println!();

    let width = catalog.iter().map(|b| b.name.len()).max().unwrap_or(10);

    for berry in catalog.iter() {
        let f = &berry.flavors;
        println!(
            "  {:<width$}  S:{:>3} D:{:>3} Sw:{:>3} B:{:>3} So:{:>3}  smooth:{:>3}{}",
            berry.name,
            f.spicy,
            f.dry,
            f.sweet,
            f.bitter,
            f.sour,
            berry.smoothness,
            flag_tags(&berry.flags),
            width = width
        );
    }

    println!();
}

//! Report rendering for the terminal

use console::style;

use crate::entity::{self, EntityState};

/// Print the entity table followed by the per-domain count summary.
///
/// An empty record list prints a single "No entities found" line and
/// nothing else; there is nothing to summarize.
pub fn print_report(entities: &[EntityState]) {
    if entities.is_empty() {
        println!("No entities found");
        return;
    }

    print_entity_table(entities);
    print_domain_summary(entities);
}

/// One row per entity, sorted ascending by entity id.
fn print_entity_table(entities: &[EntityState]) {
    println!();
    println!("Found {} entities:", style(entities.len()).cyan());
    println!();
    println!(
        "{:<50} {:<15} {}",
        style("Entity ID").bold(),
        style("State").bold(),
        style("Name").bold()
    );
    println!("{}", "-".repeat(100));

    let mut sorted: Vec<&EntityState> = entities.iter().collect();
    sorted.sort_by(|a, b| a.entity_id.cmp(&b.entity_id));

    for entity in sorted {
        println!(
            "{:<50} {:<15} {}",
            entity.entity_id,
            entity.state,
            entity.display_name()
        );
    }
}

/// One row per distinct domain, sorted ascending by domain name.
fn print_domain_summary(entities: &[EntityState]) {
    println!();
    println!("{:<20} {}", style("Domain").bold(), style("Count").bold());
    println!("{}", "-".repeat(30));

    for (domain, count) in entity::domain_summary(entities) {
        println!("{domain:<20} {count}");
    }
}

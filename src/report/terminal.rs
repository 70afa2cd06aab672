use std::collections::HashMap;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::models::Attribution;
use crate::translate::Translator;

/// Render the credits as a coloured table on stdout.
pub fn render(attributions: &[Attribution], translator: &dyn Translator, quiet: bool) {
    if quiet {
        println!("{}", summary_line(attributions));
        return;
    }

    println!(
        "\n {} v{}\n",
        "credits".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" {}\n", summary_line(attributions));

    if attributions.is_empty() {
        return;
    }

    println!("{}", build_table(attributions, translator));
}

fn build_table(attributions: &[Attribution], translator: &dyn Translator) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("What").add_attribute(Attribute::Bold),
            Cell::new("Asset").add_attribute(Attribute::Bold),
            Cell::new("Author").add_attribute(Attribute::Bold),
            Cell::new("Licence").add_attribute(Attribute::Bold),
            Cell::new("Notes").add_attribute(Attribute::Bold),
        ]);

    for attribution in attributions {
        let entry = &attribution.entry;
        let notes = if entry.has_additional_info() {
            translator.translate(&entry.additional_info)
        } else {
            String::new()
        };

        table.add_row(vec![
            Cell::new(translator.translate(&entry.description)),
            Cell::new(format!("{}\n{}", entry.name, entry.url)),
            Cell::new(format!("{}\n{}", entry.author, entry.author_url)),
            Cell::new(attribution.licence.to_string()).fg(Color::Cyan),
            Cell::new(notes).fg(Color::DarkGrey),
        ]);
    }

    table
}

/// `"4 assets under 4 licences [CC0 (1), OFL (1), ...]"`
fn summary_line(attributions: &[Attribution]) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for attribution in attributions {
        *counts.entry(attribution.licence.name.as_str()).or_insert(0) += 1;
    }

    let mut pairs: Vec<(&str, usize)> = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    let breakdown: Vec<String> = pairs
        .iter()
        .map(|(licence, count)| format!("{} ({})", licence, count))
        .collect();

    let mut line = format!(
        "{} assets under {} licences",
        attributions.len(),
        pairs.len()
    );
    if !breakdown.is_empty() {
        line.push_str(&format!(" [{}]", breakdown.join(", ")));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::translate::IdentityTranslator;

    #[test]
    fn test_summary_line() {
        let mut catalog = Catalog::default();
        catalog.resources[0].licence_id = "OFL".to_string();
        let attributions = catalog.resolve().unwrap();

        assert_eq!(
            summary_line(&attributions),
            "4 assets under 3 licences [OFL (2), CC BY-NC-ND 3.0 (1), CC0 (1)]"
        );
    }

    #[test]
    fn test_summary_line_empty() {
        assert_eq!(summary_line(&[]), "0 assets under 0 licences");
    }

    #[test]
    fn test_table_has_a_row_per_entry() {
        let attributions = Catalog::default().resolve().unwrap();
        let table = build_table(&attributions, &IdentityTranslator);

        assert_eq!(table.row_iter().count(), 4);
        let rendered = table.to_string();
        assert!(rendered.contains("Josefin Sans"));
        assert!(rendered.contains("Colors changed"));
    }
}

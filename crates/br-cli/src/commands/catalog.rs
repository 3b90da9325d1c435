use comfy_table::{ContentArrangement, Table};

use br_mechanics::Attribute;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Attribute", "Actions"]);

    for attr in Attribute::ALL {
        let actions = attr
            .actions()
            .iter()
            .map(|(_, label)| *label)
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![attr.label().to_string(), actions]);
    }

    println!("{table}");
    println!("  Rolling an action is an action roll; anything else is a resistance roll.");
    Ok(())
}
